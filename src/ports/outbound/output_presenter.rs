use crate::shared::Result;

/// OutputPresenter port for presenting file content
///
/// This port abstracts the output destination where headers and file
/// content are written, one line at a time.
pub trait OutputPresenter {
    /// Presents one line of output, appending a line terminator
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present_line(&self, line: &str) -> Result<()>;
}
