/// Mock implementations for testing
mod mock_content_reader;
mod mock_output_presenter;
mod mock_progress_reporter;

pub use mock_content_reader::MockContentReader;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
