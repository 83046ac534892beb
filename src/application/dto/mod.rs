/// Data Transfer Objects for application layer
///
/// DTOs carry what the CLI asked for into the use case, keeping the
/// adapters out of the request shape.
mod display_request;
mod file_format;

pub use display_request::{DisplayEntry, DisplayRequest, DisplayRequestBuilder};
pub use file_format::FileFormat;
