//! Application layer containing the receipt workflow orchestration.
//!
//! This module defines the `ReceiptProcessor`, the single entry point the HTTP
//! layer talks to. It runs the pure scoring rules and only touches the store
//! once a receipt has been fully validated.

pub mod engine;
