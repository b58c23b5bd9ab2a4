use std::fmt;
use std::mem;

use crate::arena::Arena;
use crate::{Address, Addresses, ArenaConfig, Iter, NOT_FOUND, Result, XorListError};

/// Doubly linked list of `u32` values backed by an append-only arena.
///
/// Every node stores `prev ^ next` instead of two links, which makes the
/// two directions interchangeable: [`reverse`](Self::reverse) only swaps
/// `head` and `tail`.
#[derive(Clone)]
pub struct XorLinkedList {
    arena: Arena,
    head: Address,
    tail: Address,
}

impl XorLinkedList {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(ArenaConfig::default()),
            head: NOT_FOUND,
            tail: NOT_FOUND,
        }
    }

    pub fn with_config(config: ArenaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            arena: Arena::new(config),
            head: NOT_FOUND,
            tail: NOT_FOUND,
        })
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nodes the arena holds before its next growth.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Size of the arena buffer in bytes: `capacity * ELEMENT_SIZE * WORD_SIZE`.
    pub fn byte_len(&self) -> usize {
        self.arena.byte_len()
    }

    /// Raw arena words, including unused slots.
    pub fn words(&self) -> &[u32] {
        self.arena.words()
    }

    pub fn first(&self) -> Address {
        self.head
    }

    pub fn last(&self) -> Address {
        self.tail
    }

    /// Fails with `InvalidAddress` unless `address` is `NOT_FOUND` or a node
    /// of this list.
    pub fn check_address(&self, address: Address) -> Result<()> {
        self.arena.check(address)
    }

    /// Stores a node with the given neighbors without touching any other
    /// node or the list ends. Building block of [`insert_between`](Self::insert_between).
    pub fn allocate(&mut self, value: u32, prev: Address, next: Address) -> Result<Address> {
        self.check_address(prev)?;
        self.check_address(next)?;
        self.arena.allocate(value, prev.xor(next))
    }

    pub fn get(&self, address: Address) -> Result<u32> {
        if address.is_not_found() {
            return Err(XorListError::InvalidAddress(address));
        }
        self.check_address(address)?;
        Ok(self.arena.value(address))
    }

    /// Inserts `value` between the adjacent nodes `a` and `b`, `a` coming
    /// first. Pass `NOT_FOUND` for `a` to insert at the front, for `b` at the
    /// back.
    ///
    /// Adjacency is not verified; passing nodes that are not neighbors
    /// corrupts the list.
    pub fn insert_between(&mut self, value: u32, a: Address, b: Address) -> Result<Address> {
        let address = self.allocate(value, a, b)?;

        if a.is_not_found() {
            self.head = address;
        } else {
            self.arena.relink(a, b, address);
        }
        if b.is_not_found() {
            self.tail = address;
        } else {
            self.arena.relink(b, a, address);
        }

        Ok(address)
    }

    pub fn append(&mut self, value: u32) -> Result<Address> {
        self.insert_between(value, self.tail, NOT_FOUND)
    }

    pub fn prepend(&mut self, value: u32) -> Result<Address> {
        self.insert_between(value, NOT_FOUND, self.head)
    }

    /// Address of the first node holding `value`, or `NOT_FOUND`.
    pub fn address_of(&self, value: u32) -> Address {
        self.addresses()
            .find(|&address| self.arena.value(address) == value)
            .unwrap_or(NOT_FOUND)
    }

    /// Reverses the list in O(1).
    pub fn reverse(&mut self) -> &mut Self {
        mem::swap(&mut self.head, &mut self.tail);
        self
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.addresses())
    }

    pub fn addresses(&self) -> Addresses<'_> {
        Addresses::new(&self.arena, self.head, self.tail)
    }

    /// Appends every value in order, stopping at the first failure.
    pub fn try_extend<I: IntoIterator<Item = u32>>(&mut self, values: I) -> Result<()> {
        for value in values {
            self.append(value)?;
        }
        Ok(())
    }
}

impl Default for XorLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for XorLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for XorLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for XorLinkedList {}

impl<'a> IntoIterator for &'a XorLinkedList {
    type Item = u32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
