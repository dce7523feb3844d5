//! The state catalog: a deduplicating store of states keyed on the total
//! state order. Implemented as a sorted index over an arena rather than a
//! hand-rolled binary search tree — a `Vec` kept sorted by binary search
//! gives the same logarithmic lookup without a node-pointer tree.
use crate::id::StateId;
use crate::registry::RootRegistry;
use crate::state::{compare_states, State};

/// Outcome of [`StateCatalog::insert_or_find`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CatalogStatus {
    /// `candidate` was new; the caller should continue expanding it.
    Added,
    /// An equal state already existed; the caller should discard
    /// `candidate` and point the parent transition at the existing entry.
    Existed,
}

#[derive(Default)]
pub struct StateCatalog {
    arena: Vec<State>,
    sorted: Vec<StateId>,
}

impl StateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn get(&self, id: StateId) -> &State {
        &self.arena[id.index()]
    }

    pub fn get_mut(&mut self, id: StateId) -> &mut State {
        &mut self.arena[id.index()]
    }

    /// Insert `candidate`, deduplicating by the total state order. No two
    /// distinct entries in the catalog ever compare equal.
    pub fn insert_or_find(
        &mut self,
        candidate: State,
        registry: &RootRegistry,
    ) -> (StateId, CatalogStatus) {
        let pos = self
            .sorted
            .binary_search_by(|&existing| {
                compare_states(self.get(existing), &candidate, registry)
            });
        match pos {
            Ok(at) => (self.sorted[at], CatalogStatus::Existed),
            Err(insert_at) => {
                let id = StateId::new(self.arena.len());
                self.arena.push(candidate);
                self.sorted.insert(insert_at, id);
                (id, CatalogStatus::Added)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.arena
            .iter()
            .enumerate()
            .map(|(idx, state)| (StateId::new(idx), state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Insertion, RootRegistry};
    use crate::state::State;

    #[test]
    fn dedups_equal_states() {
        let mut reg = RootRegistry::new();
        let r0 = match reg.insert(vec![1.0, 0.0]) {
            Insertion::Inserted(id) => id,
            _ => unreachable!(),
        };
        let mut cat = StateCatalog::new();

        let mut s1 = State::empty(2);
        s1.insert_root(r0, &reg);
        let (id1, status1) = cat.insert_or_find(s1, &reg);
        assert_eq!(status1, CatalogStatus::Added);

        let mut s2 = State::empty(2);
        s2.insert_root(r0, &reg);
        let (id2, status2) = cat.insert_or_find(s2, &reg);
        assert_eq!(status2, CatalogStatus::Existed);
        assert_eq!(id1, id2);
        assert_eq!(cat.len(), 1);
    }

    #[test]
    fn distinct_states_both_kept() {
        let mut reg = RootRegistry::new();
        let r0 = match reg.insert(vec![1.0, 0.0]) {
            Insertion::Inserted(id) => id,
            _ => unreachable!(),
        };
        let r1 = match reg.insert(vec![0.0, 1.0]) {
            Insertion::Inserted(id) => id,
            _ => unreachable!(),
        };
        let mut cat = StateCatalog::new();
        let mut s1 = State::empty(2);
        s1.insert_root(r0, &reg);
        let mut s2 = State::empty(2);
        s2.insert_root(r1, &reg);

        let (id1, _) = cat.insert_or_find(s1, &reg);
        let (id2, _) = cat.insert_or_find(s2, &reg);
        assert_ne!(id1, id2);
        assert_eq!(cat.len(), 2);
    }
}
