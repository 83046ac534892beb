use crate::application::dto::DisplayRequest;
use crate::application::factories::ReaderFactory;
use crate::ports::outbound::{ContentReader, OutputPresenter, ProgressReporter};
use crate::shared::Result;

/// DisplayContentsUseCase - reads each requested file and prints it under a header
///
/// # Type Parameters
/// * `OP` - OutputPresenter implementation receiving headers and content
/// * `PR` - ProgressReporter implementation receiving diagnostics
pub struct DisplayContentsUseCase<OP, PR> {
    presenter: OP,
    progress_reporter: PR,
}

impl<OP, PR> DisplayContentsUseCase<OP, PR>
where
    OP: OutputPresenter,
    PR: ProgressReporter,
{
    /// Creates a new DisplayContentsUseCase with injected dependencies
    pub fn new(presenter: OP, progress_reporter: PR) -> Self {
        Self {
            presenter,
            progress_reporter,
        }
    }

    /// Reads and presents every entry of `request`, in order
    ///
    /// Every header after the first is preceded by a blank line. A header is
    /// presented before its file is read, so a failing read leaves its header
    /// on the output with no content under it. The first failure stops the
    /// sequence: its error is returned unchanged and later entries are not read.
    pub fn execute(&self, request: &DisplayRequest) -> Result<()> {
        for (index, entry) in request.entries.iter().enumerate() {
            if index > 0 {
                self.presenter.present_line("")?;
            }
            self.presenter.present_line(&entry.format.header())?;

            self.progress_reporter
                .report(&ReaderFactory::reading_message(entry.format, &entry.path));

            let adapter = ReaderFactory::create(entry.format);
            let content = adapter.read(&entry.path)?;
            self.presenter.present_line(&content)?;
        }

        self.progress_reporter.report(&format!(
            "✅ Displayed {} file(s)",
            request.entries.len()
        ));

        Ok(())
    }
}
