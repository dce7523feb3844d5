//! Arena indices. Roots live in a [`crate::RootRegistry`] and states in a
//! [`crate::StateCatalog`]; both arenas hand out stable `u32` handles instead
//! of references, so the arena can grow (via `Vec::push`) without
//! invalidating anything already built on top of it.

/// Handle into a [`crate::RootRegistry`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct RootId(u32);

impl RootId {
    pub(crate) fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RootId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Handle into a [`crate::StateCatalog`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StateId(u32);

impl StateId {
    pub(crate) fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.0)
    }
}
