//! The state-graph builder and the `Automaton` value that bundles every
//! precomputed table (matrix, kernel, registry, minimal roots, state
//! catalog) so it can be constructed once and passed around by reference.
use coxlex_ir::{
    CatalogStatus, CoxeterMatrix, RootId, RootRegistry, State, StateCatalog,
    StateId, Transition,
};
use coxlex_utils::{CoxResult, Error};

use crate::enumerator::{self, EnumerationResult};
use crate::kernel::{ActionOutcome, CoxeterKernel};

/// The fully-built automaton: matrix, kernel tables, root registry, minimal
/// roots, and the state graph. Immutable once built, so `reduce` is
/// trivially safe to call concurrently from multiple threads.
pub struct Automaton {
    matrix: CoxeterMatrix,
    kernel: CoxeterKernel,
    registry: RootRegistry,
    simple_roots: Vec<RootId>,
    minimal_roots: Vec<RootId>,
    catalog: StateCatalog,
    initial: StateId,
}

impl Automaton {
    /// Build the automaton for `matrix`. `max_roots`/`max_states` are
    /// optional caps guarding against matrices that describe an infinite
    /// root system or state space.
    pub fn build(
        matrix: CoxeterMatrix,
        max_roots: Option<usize>,
        max_states: Option<usize>,
    ) -> CoxResult<Self> {
        let kernel = CoxeterKernel::new(&matrix);
        let mut registry = RootRegistry::new();
        let EnumerationResult {
            simple_roots,
            minimal_roots,
        } = enumerator::enumerate(&kernel, &mut registry, max_roots)?;

        let n = kernel.n();
        let mut catalog = StateCatalog::new();
        let (initial, status) =
            catalog.insert_or_find(State::empty(n), &registry);
        debug_assert_eq!(status, CatalogStatus::Added);

        // Explicit DFS stack of (state, next generator to expand). Pushing
        // a freshly discovered child puts it on top, so it is fully
        // expanded (all N of its own transitions) before the parent's
        // remaining generators resume — exactly recursive-DFS order,
        // without recursing on the Rust call stack.
        let mut stack: Vec<(StateId, usize)> = vec![(initial, 0)];

        while let Some((u, next_gen)) = stack.last_mut() {
            if *next_gen == n {
                stack.pop();
                continue;
            }
            let u = *u;
            let a = *next_gen;
            *next_gen += 1;

            if catalog.get(u).contains(simple_roots[a], &registry) {
                catalog.get_mut(u).set_transition(a, Transition::Reject);
                continue;
            }

            let mut successor = State::empty(n);
            let parent_roots: Vec<RootId> = catalog.get(u).roots().to_vec();
            for r in parent_roots {
                match kernel.action(&mut registry, r, a) {
                    ActionOutcome::Negative => {}
                    ActionOutcome::Existing(image)
                    | ActionOutcome::New(image) => {
                        if registry.get(image).positive_minimal() {
                            successor.insert_root(image, &registry);
                        }
                    }
                }
            }
            successor.insert_root(simple_roots[a], &registry);

            let (vid, added) = catalog.insert_or_find(successor, &registry);
            catalog.get_mut(u).set_transition(a, Transition::Goto(vid));
            if added == CatalogStatus::Added {
                if let Some(limit) = max_states {
                    if catalog.len() > limit {
                        return Err(Error::state_limit_exceeded(limit));
                    }
                }
                stack.push((vid, 0));
            }
        }

        log::info!(
            "automaton construction complete: {} states over {} minimal roots",
            catalog.len(),
            minimal_roots.len()
        );

        Ok(Self {
            matrix,
            kernel,
            registry,
            simple_roots,
            minimal_roots,
            catalog,
            initial,
        })
    }

    pub fn matrix(&self) -> &CoxeterMatrix {
        &self.matrix
    }

    pub fn n(&self) -> usize {
        self.kernel.n()
    }

    pub fn registry(&self) -> &RootRegistry {
        &self.registry
    }

    pub fn minimal_roots(&self) -> &[RootId] {
        &self.minimal_roots
    }

    pub fn simple_roots(&self) -> &[RootId] {
        &self.simple_roots
    }

    pub fn catalog(&self) -> &StateCatalog {
        &self.catalog
    }

    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    pub fn num_states(&self) -> usize {
        self.catalog.len()
    }
}
