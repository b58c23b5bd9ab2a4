use std::fmt;

/// Opaque handle to a node: the offset, in words, of the node's first word.
///
/// Handles stay valid across arena growth since growth copies words to the
/// same offsets in the new buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Address(u32);

impl Address {
    /// "No node". Every real address is below `2 * MAX_CAPACITY`, far from it.
    pub const NOT_FOUND: Address = Address(u32::MAX);

    pub const fn from_offset(offset: u32) -> Self {
        Self(offset)
    }

    pub const fn offset(self) -> u32 {
        self.0
    }

    pub const fn is_not_found(self) -> bool {
        self.0 == Self::NOT_FOUND.0
    }

    #[inline(always)]
    pub(crate) const fn xor(self, other: Address) -> Address {
        Address(self.0 ^ other.0)
    }

    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_not_found() {
            f.write_str("NOT_FOUND")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
