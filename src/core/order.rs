use serde::{Deserialize, Serialize};

use crate::error::{GreenError, GreenResult};

/// Series truncation order, kept inside `[MIN, MAX]`.
///
/// Stepping past either bound is absorbed: the value stays put and the step
/// reports that nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TruncationOrder(u32);

impl TruncationOrder {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 200;

    pub fn new(order: u32) -> GreenResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&order) {
            Ok(Self(order))
        } else {
            Err(GreenError::InvalidOrder {
                order,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` when the order moved.
    pub fn increment(&mut self) -> bool {
        if self.0 >= Self::MAX {
            return false;
        }
        self.0 += 1;
        true
    }

    /// Returns `true` when the order moved.
    pub fn decrement(&mut self) -> bool {
        if self.0 <= Self::MIN {
            return false;
        }
        self.0 -= 1;
        true
    }
}

impl Default for TruncationOrder {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u32> for TruncationOrder {
    type Error = GreenError;

    fn try_from(value: u32) -> GreenResult<Self> {
        Self::new(value)
    }
}

impl From<TruncationOrder> for u32 {
    fn from(order: TruncationOrder) -> Self {
        order.0
    }
}
