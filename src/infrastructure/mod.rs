//! Storage adapters for the receipt store port.

pub mod in_memory;
