//! Domain layer: receipt value objects, the scoring rules and the storage port.

pub mod ports;
pub mod receipt;
pub mod rules;
