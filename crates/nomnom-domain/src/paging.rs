//! Limit/offset paging used by list endpoints backed by a ranged select.

use serde::Deserialize;

use crate::error::DomainError;

pub const MAX_LIMIT: i64 = 1000;
pub const DEFAULT_LIMIT: i64 = 100;

/// Raw query parameters.
///
/// - `limit`: 1–1000, default 100
/// - `offset`: ≥ 0, default 0
///
/// Out-of-range values are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitOffset {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for LimitOffset {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Inclusive row range `[from, to]` after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub from: u64,
    pub to: u64,
}

impl LimitOffset {
    pub fn validate(self) -> Result<RowRange, DomainError> {
        if !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(DomainError::LimitOutOfRange);
        }
        if self.offset < 0 {
            return Err(DomainError::NegativeOffset);
        }
        let from = self.offset as u64;
        Ok(RowRange {
            from,
            to: from + self.limit as u64 - 1,
        })
    }
}
