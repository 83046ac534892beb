/// Application layer - Use cases and DTOs
///
/// This layer wires reader adapters to the presenter and reporter ports
/// and drives the fixed read-and-print sequence.
pub mod dto;
pub mod factories;
pub mod use_cases;
