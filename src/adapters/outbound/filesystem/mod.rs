/// Filesystem adapters: the format-specific content readers, the adapter
/// that wraps them, and the stdout presenter
mod csv_reader;
mod file_reader;
mod json_reader;
mod reader_adapter;
mod stdout_presenter;

pub use csv_reader::{CsvFileReader, LINE_SEPARATOR};
pub use file_reader::TextFileReader;
pub use json_reader::JsonFileReader;
pub use reader_adapter::FileReaderAdapter;
pub use stdout_presenter::StdoutPresenter;
