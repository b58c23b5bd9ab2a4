use tracing::{debug, trace};

use crate::{Address, ArenaConfig, ELEMENT_SIZE, Result, WORD_SIZE, XorListError};

const VALUE_WORD: usize = 0;
const LINK_WORD: usize = 1;

/// Append-only buffer of node slots. Each slot is `ELEMENT_SIZE` words:
/// the value, then the XOR of both neighbor addresses.
///
/// `words.len()` is always `capacity * ELEMENT_SIZE`.
#[derive(Clone)]
pub(crate) struct Arena {
    words: Box<[u32]>,
    size: usize,
    max_capacity: usize,
}

impl Arena {
    /// Expects a validated config.
    pub(crate) fn new(config: ArenaConfig) -> Self {
        Self {
            words: vec![0; config.initial_capacity * ELEMENT_SIZE].into_boxed_slice(),
            size: 0,
            max_capacity: config.max_capacity,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.size
    }

    pub(crate) fn capacity(&self) -> usize {
        self.words.len() / ELEMENT_SIZE
    }

    pub(crate) fn byte_len(&self) -> usize {
        self.words.len() * WORD_SIZE
    }

    pub(crate) fn words(&self) -> &[u32] {
        &self.words
    }

    /// Writes a new node after the last one and returns its address.
    pub(crate) fn allocate(&mut self, value: u32, link: Address) -> Result<Address> {
        self.ensure_capacity()?;

        let base = self.size * ELEMENT_SIZE;
        self.words[base + VALUE_WORD] = value;
        self.words[base + LINK_WORD] = link.offset();
        self.size += 1;

        // base < 2 * MAX_CAPACITY, which fits in u32
        Ok(Address::from_offset(base as u32))
    }

    fn ensure_capacity(&mut self) -> Result<()> {
        let capacity = self.capacity();
        if self.size < capacity {
            return Ok(());
        }
        if capacity >= self.max_capacity {
            debug!(capacity, "arena is full, refusing allocation");
            return Err(self.out_of_memory());
        }

        let new_capacity = (capacity * 2).min(self.max_capacity);
        let mut words = Vec::new();
        words
            .try_reserve_exact(new_capacity * ELEMENT_SIZE)
            .map_err(|_| self.out_of_memory())?;
        words.extend_from_slice(&self.words);
        words.resize(new_capacity * ELEMENT_SIZE, 0);
        self.words = words.into_boxed_slice();

        trace!(
            from = capacity,
            to = new_capacity,
            bytes = self.byte_len(),
            "grew arena"
        );
        Ok(())
    }

    fn out_of_memory(&self) -> XorListError {
        XorListError::OutOfMemory {
            max_capacity: self.max_capacity,
        }
    }

    /// Accepts `NOT_FOUND` and the address of any allocated node.
    pub(crate) fn check(&self, address: Address) -> Result<()> {
        if address.is_not_found() {
            return Ok(());
        }
        let offset = address.index();
        if offset % ELEMENT_SIZE != 0 || offset >= self.size * ELEMENT_SIZE {
            debug!(%address, size = self.size, "rejected address");
            return Err(XorListError::InvalidAddress(address));
        }
        Ok(())
    }

    // Accessors below expect an address that passed `check` and is not NOT_FOUND.

    #[inline(always)]
    pub(crate) fn value(&self, address: Address) -> u32 {
        self.words[address.index() + VALUE_WORD]
    }

    #[inline(always)]
    pub(crate) fn link(&self, address: Address) -> Address {
        Address::from_offset(self.words[address.index() + LINK_WORD])
    }

    /// Replaces neighbor `old` of the node at `address` with `new`.
    #[inline(always)]
    pub(crate) fn relink(&mut self, address: Address, old: Address, new: Address) {
        self.words[address.index() + LINK_WORD] ^= old.xor(new).offset();
    }
}
