/// Use cases module containing application business logic orchestration
mod display_contents;

pub use display_contents::DisplayContentsUseCase;
