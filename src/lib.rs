//! file-adapters - the adapter pattern applied to file readers
//!
//! Three readers (plain text, CSV, JSON) implement one `ContentReader` port.
//! Each is wrapped in a `FileReaderAdapter`, so callers work with a single
//! type regardless of the format behind it.
//!
//! # Architecture
//!
//! - **Application Layer** (`application`): the display use case, its DTOs and the reader factory
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use file_adapters::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let json_adapter = FileReaderAdapter::from_reader(JsonFileReader::new());
//! println!("{}", json_adapter.read(Path::new("example.json"))?);
//!
//! let use_case = DisplayContentsUseCase::new(
//!     StdoutPresenter::new(),
//!     StderrProgressReporter::new(false),
//! );
//! use_case.execute(&DisplayRequest::with_defaults(Path::new(".")))?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvFileReader, FileReaderAdapter, JsonFileReader, StdoutPresenter, TextFileReader,
        LINE_SEPARATOR,
    };
    pub use crate::application::dto::{DisplayEntry, DisplayRequest, FileFormat};
    pub use crate::application::factories::ReaderFactory;
    pub use crate::application::use_cases::DisplayContentsUseCase;
    pub use crate::ports::outbound::{ContentReader, OutputPresenter, ProgressReporter};
    pub use crate::shared::error::ReaderError;
    pub use crate::shared::Result;
}
