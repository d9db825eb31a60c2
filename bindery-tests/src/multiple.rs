use bindery_core::{Database, PreparedQuery, ResultSet};

pub fn multiple<D: Database>(database: &D) {
    for query in [
        "DROP PROCEDURE IF EXISTS multiple_sets",
        "CREATE PROCEDURE multiple_sets(IN n INT)
        BEGIN
            SELECT n AS first;
            SELECT n + 1 AS second, 'two' AS label;
            SELECT n + 2 AS third;
        END",
    ] {
        database
            .prepare(query)
            .and_then(|mut v| v.execute())
            .expect("Could not create the procedure");
    }

    let mut call = database
        .prepare("CALL multiple_sets(?)")
        .expect("Could not prepare the call");
    call.bind_int(0, 10, true).expect("Could not bind");
    call.execute().expect("Could not call the procedure");
    let results = call.result_set().expect("Missing the first result set");
    assert_eq!(results.field_name(0), Some("first"));
    let row = results.fetch_row().expect("fetch").expect("Missing row");
    assert_eq!(row.get::<i64>(0).expect("first"), 10);

    assert!(call.fetch_more_results());
    let results = call.result_set().expect("Missing the second result set");
    assert_eq!(results.field_count(), 2);
    let row = results.fetch_row().expect("fetch").expect("Missing row");
    assert_eq!(row.get::<i64>(0).expect("second"), 11);
    assert_eq!(row.get::<String>(1).expect("label"), "two");

    assert!(call.fetch_more_results());
    let results = call.result_set().expect("Missing the third result set");
    assert_eq!(results.field_name(0), Some("third"));
    assert!(!call.fetch_more_results());
    assert!(!database.more_results());

    // Results left unread are discarded by the next execution.
    call.bind_int(0, 20, true).expect("Could not bind");
    call.execute().expect("Could not call the procedure again");
    call.execute().expect("Could not call the procedure a third time");
    let row = call
        .result_set()
        .expect("Missing the first result set")
        .fetch_row()
        .expect("fetch")
        .expect("Missing row");
    assert_eq!(row.get::<i64>(0).expect("first"), 20);
}
