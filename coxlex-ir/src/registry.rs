//! The root registry: the canonical, purely-additive store of roots, kept
//! in lexicographic order for `find`/`iter`, with roots addressed by a
//! stable [`RootId`] independent of that order.
use crate::id::RootId;
use crate::root::{coeffs_equal, compare_coeffs, Root};

/// Outcome of [`RootRegistry::insert`].
pub enum Insertion {
    /// `coeffs` was new; here is its handle.
    Inserted(RootId),
    /// `coeffs` already existed; here is the existing handle. The caller
    /// must discard the candidate it built — in Rust, simply drop it.
    AlreadyExists(RootId),
}

/// Purely additive store of roots. Arena order (indexed by [`RootId`]) is
/// insertion order; [`RootRegistry::iter`] instead walks roots in sorted
/// lexicographic order.
#[derive(Default)]
pub struct RootRegistry {
    arena: Vec<Root>,
    sorted: Vec<RootId>,
}

impl RootRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn get(&self, id: RootId) -> &Root {
        &self.arena[id.index()]
    }

    pub fn get_mut(&mut self, id: RootId) -> &mut Root {
        &mut self.arena[id.index()]
    }

    /// Linear scan with early termination on encountering a greater root.
    /// `sorted` is small for every group in the test scenarios, so this is
    /// kept as written rather than swapped for a `BTreeMap`.
    pub fn find(&self, coeffs: &[f64]) -> Option<RootId> {
        for &id in &self.sorted {
            let candidate = self.get(id).coefficients();
            if coeffs_equal(candidate, coeffs) {
                return Some(id);
            }
            if compare_coeffs(candidate, coeffs) == std::cmp::Ordering::Greater
            {
                return None;
            }
        }
        None
    }

    /// Lexicographic insertion. Fails soft if `coeffs` already exists.
    pub fn insert(&mut self, coeffs: Vec<f64>) -> Insertion {
        if let Some(existing) = self.find(&coeffs) {
            return Insertion::AlreadyExists(existing);
        }
        let id = RootId::new(self.arena.len());
        self.arena.push(Root::new(coeffs));

        let pos = self
            .sorted
            .binary_search_by(|&other| {
                compare_coeffs(self.get(other).coefficients(), self.get(id).coefficients())
            })
            .unwrap_or_else(|insert_at| insert_at);
        self.sorted.insert(pos, id);

        Insertion::Inserted(id)
    }

    /// In-order traversal (lexicographic root order), used by the
    /// enumerator and by root-table dumps.
    pub fn iter(&self) -> impl Iterator<Item = (RootId, &Root)> {
        self.sorted.iter().map(move |&id| (id, self.get(id)))
    }
}
