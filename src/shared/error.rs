use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every file was read and printed, or help/version was requested
    Success = 0,
    /// A read failed (missing file, I/O error, bad encoding, malformed JSON)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Errors raised by the content readers.
///
/// Readers never recover from these; they travel unchanged through the
/// adapter and the use case up to `main`.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("File not found: {}\n\n💡 Hint: Paths are resolved relative to the working directory (or --dir)", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {}\n\n💡 Hint: Please verify that the path is a regular file and you have read permissions", .path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File is not valid UTF-8 text: {}", .path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to parse JSON file: {}\n\n💡 Hint: Please verify that the file contains well-formed JSON", .path.display())]
    JsonParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ReaderError {
    /// Maps an I/O failure on `path`, singling out the not-found case.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ReaderError::FileNotFound { path }
        } else {
            ReaderError::FileReadError { path, source }
        }
    }
}
