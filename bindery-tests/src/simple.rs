use crate::silent_logs;
use bindery_core::{Database, PreparedQuery, ResultSet};
use time::macros::datetime;

pub fn simple<D: Database>(database: &D) {
    let mut query = database
        .prepare("DROP TABLE IF EXISTS simple_items")
        .expect("Could not prepare the drop");
    query.execute().expect("Could not drop the table");

    let mut query = database
        .prepare(
            "CREATE TABLE simple_items (
                id INT AUTO_INCREMENT PRIMARY KEY,
                code INT UNSIGNED,
                ratio FLOAT,
                name VARCHAR(64),
                payload BLOB,
                created DATETIME(6)
            )",
        )
        .expect("Could not prepare the create");
    query.execute().expect("Could not create the table");
    assert!(query.result_set().is_none());

    // Insert
    let name = String::from("borrowed name");
    let payload = [0u8, 1, 2, 254, 255];
    let mut insert = database
        .prepare(
            "INSERT INTO simple_items (code, ratio, name, payload, created) VALUES (?, ?, ?, ?, ?)",
        )
        .expect("Could not prepare the insert");
    assert_eq!(insert.param_count(), 5);
    insert
        .bind_int(0, -1, false)
        .and_then(|v| v.bind_float(1, 0.5))
        .and_then(|v| v.bind_string_borrowed(2, &name))
        .and_then(|v| v.bind_blob_borrowed(3, &payload))
        .and_then(|v| v.bind_value(4, datetime!(2025-01-31 08:30:00.125)))
        .expect("Could not bind the parameters");
    insert.execute().expect("Could not insert the first row");
    assert_eq!(insert.affected_rows(), 1);
    let first_id = insert.insert_id();
    assert!(first_id > 0);

    let mut second = insert.clone();
    second
        .bind_int(0, 7, false)
        .and_then(|v| v.bind_string(2, "copied name"))
        .and_then(|v| v.bind_null(3))
        .expect("Could not rebind the clone");
    second.execute().expect("Could not insert the second row");
    assert_eq!(second.insert_id(), first_id + 1);
    insert.execute().expect("Could not insert the third row");
    assert_eq!(insert.insert_id(), first_id + 2);

    // Out of range
    silent_logs! {
        assert!(insert.bind_int(5, 1, true).is_err());
    }

    // Select
    let mut select = database
        .prepare("SELECT id, code, ratio, name, payload, created FROM simple_items WHERE code = ? ORDER BY id")
        .expect("Could not prepare the select");
    select
        .bind_int(0, -1, false)
        .expect("Could not bind the code");
    select.execute().expect("Could not run the select");
    let results = select.result_set().expect("The select must produce rows");
    assert_eq!(results.row_count(), 2);
    assert_eq!(results.field_count(), 6);
    assert_eq!(results.field_name(3), Some("name"));
    assert_eq!(results.field_index("payload"), Some(4));
    let row = results
        .fetch_row()
        .expect("Could not fetch the row")
        .expect("Missing first row");
    assert_eq!(row.get::<u64>(0).expect("id"), first_id);
    assert_eq!(row.get::<u32>(1).expect("code"), u32::MAX);
    assert_eq!(row.get::<f32>(2).expect("ratio"), 0.5);
    assert_eq!(row.get_str(3).expect("name"), Some("borrowed name"));
    assert_eq!(row.get_bytes(4).expect("payload"), Some(&payload[..]));
    assert_eq!(
        row.get::<time::PrimitiveDateTime>(5).expect("created"),
        datetime!(2025-01-31 08:30:00.125)
    );
    let rest = results.fetch_all().expect("Could not fetch the rest");
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].get::<u64>(0).expect("id"), first_id + 2);
    assert!(!results.more_rows());
    results.rewind().expect("Could not rewind");
    assert!(results.more_rows());
    assert!(!select.fetch_more_results());

    // Update
    let mut update = database
        .prepare("UPDATE simple_items SET ratio = ? WHERE code = ?")
        .expect("Could not prepare the update");
    update
        .bind_value(0, 2.25f64)
        .and_then(|v| v.bind_value(1, 7u32))
        .expect("Could not bind the update");
    update.execute().expect("Could not run the update");
    assert_eq!(update.affected_rows(), 1);
    assert!(update.result_set().is_none());

    // Nulls
    select.bind_int(0, 7, false).expect("Could not rebind");
    select.execute().expect("Could not run the select again");
    let results = select.result_set().expect("The select must produce rows");
    let row = results
        .fetch_row()
        .expect("Could not fetch the row")
        .expect("Missing row");
    assert_eq!(row.get::<f64>(2).expect("ratio"), 2.25);
    assert!(row.is_null(4).expect("payload"));
    assert_eq!(row.get_bytes(4).expect("payload"), None);

    // Server errors
    let mut duplicate = database
        .prepare("INSERT INTO simple_items (id) VALUES (?)")
        .expect("Could not prepare the duplicate insert");
    duplicate
        .bind_value(0, first_id)
        .expect("Could not bind the id");
    silent_logs! {
        assert!(duplicate.execute().is_err());
    }
    let error = duplicate.error();
    assert!(error.is_error());
    assert_eq!(error.code, 1062);

    // Statements with the same text are distinct
    let first = database
        .prepare("SELECT ? AS value")
        .expect("Could not prepare the first statement");
    let mut second = database
        .prepare("SELECT ? AS value")
        .expect("Could not prepare the second statement");
    drop(first);
    second.bind_int(0, 5, true).expect("Could not bind");
    second
        .execute()
        .expect("Could not execute after dropping a statement with the same text");
    let row = second
        .result_set()
        .expect("Missing the result set")
        .fetch_row()
        .expect("fetch")
        .expect("Missing row");
    assert_eq!(row.get::<i64>(0).expect("value"), 5);

    // Many live statements
    let mut held = database
        .prepare("SELECT ? + 1 AS value")
        .expect("Could not prepare the held statement");
    let others = (0..40)
        .map(|i| {
            database
                .prepare(&format!("SELECT {i} AS value"))
                .expect("Could not prepare")
        })
        .collect::<Vec<_>>();
    held.bind_int(0, 41, true).expect("Could not bind");
    held.execute()
        .expect("Could not execute after preparing many statements");
    let row = held
        .result_set()
        .expect("Missing the result set")
        .fetch_row()
        .expect("fetch")
        .expect("Missing row");
    assert_eq!(row.get::<i64>(0).expect("value"), 42);
    drop(others);
}
