use crate::ports::outbound::ContentReader;
use crate::shared::Result;
use std::path::Path;

/// FileReaderAdapter wraps any ContentReader behind one concrete type
///
/// Call sites hold a `FileReaderAdapter` no matter which format it reads,
/// so the wrapped reader can be swapped without touching them. Reads are
/// forwarded as-is: no transformation, caching or error translation.
pub struct FileReaderAdapter {
    reader: Box<dyn ContentReader>,
}

impl FileReaderAdapter {
    /// Creates an adapter that takes exclusive ownership of `reader`
    pub fn new(reader: Box<dyn ContentReader>) -> Self {
        Self { reader }
    }

    /// Boxes a concrete reader and wraps it
    pub fn from_reader<R: ContentReader + 'static>(reader: R) -> Self {
        Self::new(Box::new(reader))
    }
}

impl ContentReader for FileReaderAdapter {
    fn read(&self, path: &Path) -> Result<String> {
        self.reader.read(path)
    }
}
