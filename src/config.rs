use crate::{INITIAL_CAPACITY, MAX_CAPACITY, Result, XorListError};

/// Sizing of the arena behind a list, in nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Nodes the arena holds before its first growth.
    pub initial_capacity: usize,
    /// Ceiling past which allocation fails with `OutOfMemory`.
    pub max_capacity: usize,
}

impl ArenaConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(XorListError::InvalidConfig(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_capacity > MAX_CAPACITY {
            return Err(XorListError::InvalidConfig(format!(
                "max_capacity {} exceeds the address space limit of {MAX_CAPACITY}",
                self.max_capacity
            )));
        }
        if self.initial_capacity > self.max_capacity {
            return Err(XorListError::InvalidConfig(format!(
                "initial_capacity {} exceeds max_capacity {}",
                self.initial_capacity, self.max_capacity
            )));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
            max_capacity: MAX_CAPACITY,
        }
    }
}
