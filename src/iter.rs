use std::iter::FusedIterator;

use crate::Address;
use crate::arena::Arena;

/// Walks node addresses from both ends of a list.
///
/// Each end keeps the address it is on and the one it came from; the next
/// step is `link(current) ^ came_from`.
#[derive(Clone)]
pub struct Addresses<'a> {
    arena: &'a Arena,
    front: Address,
    before_front: Address,
    back: Address,
    after_back: Address,
    finished: bool,
}

impl<'a> Addresses<'a> {
    pub(crate) fn new(arena: &'a Arena, head: Address, tail: Address) -> Self {
        Self {
            arena,
            front: head,
            before_front: Address::NOT_FOUND,
            back: tail,
            after_back: Address::NOT_FOUND,
            finished: head.is_not_found(),
        }
    }
}

impl Iterator for Addresses<'_> {
    type Item = Address;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = self.front;
        if current == self.back {
            self.finished = true;
        } else {
            self.front = self.arena.link(current).xor(self.before_front);
            self.before_front = current;
            self.finished = self.front.is_not_found();
        }
        Some(current)
    }
}

impl DoubleEndedIterator for Addresses<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = self.back;
        if current == self.front {
            self.finished = true;
        } else {
            self.back = self.arena.link(current).xor(self.after_back);
            self.after_back = current;
            self.finished = self.back.is_not_found();
        }
        Some(current)
    }
}

impl FusedIterator for Addresses<'_> {}

/// Values of a list, head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    addresses: Addresses<'a>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(addresses: Addresses<'a>) -> Self {
        Self { addresses }
    }
}

impl Iterator for Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let address = self.addresses.next()?;
        Some(self.addresses.arena.value(address))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let address = self.addresses.next_back()?;
        Some(self.addresses.arena.value(address))
    }
}

impl FusedIterator for Iter<'_> {}
