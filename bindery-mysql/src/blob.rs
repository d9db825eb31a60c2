/// Owned storage for a copied string or blob parameter.
///
/// Allocated on the first copy, the allocation is reused by later copies that
/// fit its capacity and replaced by a bigger one otherwise.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BlobBuffer {
    data: Vec<u8>,
}

impl BlobBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content with a copy of `source`.
    pub fn copy_from(&mut self, source: &[u8]) -> &[u8] {
        if self.data.capacity() < source.len() {
            self.data = Vec::with_capacity(source.len());
        } else {
            self.data.clear();
        }
        self.data.extend_from_slice(source);
        &self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn is_allocated(&self) -> bool {
        self.data.capacity() > 0
    }
}
