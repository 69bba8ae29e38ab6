use crate::error::ReceiptError;
use serde::Serialize;
use std::fmt;
use std::ops::Add;
use uuid::Uuid;

/// The score awarded to a receipt.
///
/// Computed once when the receipt is processed and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Points(pub u64);

impl Points {
    pub const ZERO: Self = Self(0);

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Add for Points {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier handed back to callers after a receipt is processed.
///
/// Generated identifiers are random v4 UUIDs. Identifiers supplied by callers
/// only have to be non-empty and free of whitespace; anything else is looked up
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn parse(raw: &str) -> Result<Self, ReceiptError> {
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(ReceiptError::InvalidId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
