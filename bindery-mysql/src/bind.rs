use crate::BlobBuffer;

/// Parameter value handed to the native layer when the statement executes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Param<'p> {
    Null,
    Int { value: i32, unsigned: bool },
    Float(f32),
    String(&'p [u8]),
    Blob(&'p [u8]),
}

/// Where the bytes of a string or blob binding live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Payload<'a> {
    /// In the slot's own buffer.
    Copied,
    /// In caller memory.
    Borrowed(&'a [u8]),
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub(crate) enum Bind<'a> {
    #[default]
    Unbound,
    Null,
    Int {
        value: i32,
        unsigned: bool,
    },
    Float(f32),
    String(Payload<'a>),
    Blob(Payload<'a>),
}

/// One entry of the parameter binding table.
#[derive(Default, Debug, Clone)]
pub(crate) struct ParamBind<'a> {
    pub(crate) bind: Bind<'a>,
    pub(crate) blob: BlobBuffer,
}

impl<'a> ParamBind<'a> {
    pub(crate) fn table(count: usize) -> Vec<Self> {
        let mut table = Vec::with_capacity(count);
        table.resize_with(count, Default::default);
        table
    }

    pub(crate) fn set_int(&mut self, value: i32, signed: bool) {
        self.bind = Bind::Int {
            value,
            unsigned: !signed,
        };
    }

    pub(crate) fn set_float(&mut self, value: f32) {
        self.bind = Bind::Float(value);
    }

    pub(crate) fn set_null(&mut self) {
        self.bind = Bind::Null;
    }

    pub(crate) fn set_string(&mut self, value: &[u8]) {
        self.blob.copy_from(value);
        self.bind = Bind::String(Payload::Copied);
    }

    pub(crate) fn set_string_borrowed(&mut self, value: &'a [u8]) {
        self.bind = Bind::String(Payload::Borrowed(value));
    }

    pub(crate) fn set_blob(&mut self, value: &[u8]) {
        self.blob.copy_from(value);
        self.bind = Bind::Blob(Payload::Copied);
    }

    pub(crate) fn set_blob_borrowed(&mut self, value: &'a [u8]) {
        self.bind = Bind::Blob(Payload::Borrowed(value));
    }

    /// The bound value, `None` until the slot is bound.
    pub(crate) fn param(&self) -> Option<Param<'_>> {
        Some(match self.bind {
            Bind::Unbound => return None,
            Bind::Null => Param::Null,
            Bind::Int { value, unsigned } => Param::Int { value, unsigned },
            Bind::Float(v) => Param::Float(v),
            Bind::String(payload) => Param::String(self.payload(payload)),
            Bind::Blob(payload) => Param::Blob(self.payload(payload)),
        })
    }

    fn payload(&self, payload: Payload<'a>) -> &[u8] {
        match payload {
            Payload::Copied => self.blob.as_slice(),
            Payload::Borrowed(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bind, Param, ParamBind, Payload};

    #[test]
    fn unbound_by_default() {
        let table = ParamBind::table(3);
        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|v| v.bind == Bind::Unbound));
        assert_eq!(table[0].param(), None);
    }

    #[test]
    fn copied_payload_reads_the_buffer() {
        let mut slot = ParamBind::default();
        slot.set_string(b"hello");
        assert_eq!(slot.bind, Bind::String(Payload::Copied));
        assert_eq!(slot.param(), Some(Param::String(b"hello")));
        slot.set_blob(&[1, 2]);
        assert_eq!(slot.param(), Some(Param::Blob(&[1, 2])));
    }

    #[test]
    fn borrowed_payload_reads_the_caller() {
        let data = vec![9u8, 8, 7];
        let mut slot = ParamBind::default();
        slot.set_blob_borrowed(&data);
        assert!(!slot.blob.is_allocated());
        assert_eq!(slot.param(), Some(Param::Blob(&[9, 8, 7])));
    }

    #[test]
    fn scalars() {
        let mut slot = ParamBind::default();
        slot.set_int(-5, true);
        assert_eq!(
            slot.param(),
            Some(Param::Int {
                value: -5,
                unsigned: false
            })
        );
        slot.set_float(1.5);
        assert_eq!(slot.param(), Some(Param::Float(1.5)));
        slot.set_null();
        assert_eq!(slot.param(), Some(Param::Null));
    }
}
