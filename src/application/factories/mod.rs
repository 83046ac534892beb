/// Factories for creating infrastructure adapters
mod reader_factory;

pub use reader_factory::ReaderFactory;
