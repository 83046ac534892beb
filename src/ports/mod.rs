/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the application core reaches files,
/// stdout and stderr through them.
pub mod outbound;
