/// Type alias for Result with anyhow::Error as the error type.
/// Readers return typed `ReaderError`s wrapped in anyhow, so callers can still downcast.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
