/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, stdout, stderr).
pub mod content_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use content_reader::ContentReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
