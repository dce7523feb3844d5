//! The root enumerator: BFS/DFS reflection closure with dominance pruning,
//! producing the positive-minimal root set.
use coxlex_ir::{RootId, RootRegistry};
use coxlex_utils::{CoxResult, Error, EPSILON_COMP_VAL};

use crate::kernel::{ActionOutcome, CoxeterKernel};

/// The two root lists the rest of the construction needs: the simple roots
/// indexed by generator, and the full positive-minimal set in discovery
/// order (not the registry's lexicographic order).
pub struct EnumerationResult {
    pub simple_roots: Vec<RootId>,
    pub minimal_roots: Vec<RootId>,
}

/// Enumerate the positive-minimal root set. `max_roots`, if set,
/// aborts enumeration once more minimal roots than the limit have been
/// found — a guard against matrices that (through operator error) describe
/// an infinite root system.
pub fn enumerate(
    kernel: &CoxeterKernel,
    registry: &mut RootRegistry,
    max_roots: Option<usize>,
) -> CoxResult<EnumerationResult> {
    let n = kernel.n();
    let mut simple_roots = Vec::with_capacity(n);
    let mut minimal_roots = Vec::new();
    let mut worklist: Vec<RootId> = Vec::new();

    for a in 0..n {
        let mut coeffs = vec![0.0; n];
        coeffs[a] = 1.0;
        let id = match registry.insert(coeffs) {
            coxlex_ir::Insertion::Inserted(id) => {
                registry.get_mut(id).set_positive_minimal(true);
                minimal_roots.push(id);
                worklist.push(id);
                id
            }
            coxlex_ir::Insertion::AlreadyExists(id) => id,
        };
        simple_roots.push(id);
    }

    while let Some(r) = worklist.pop() {
        for a in 0..n {
            match kernel.action(registry, r, a) {
                ActionOutcome::Negative | ActionOutcome::Existing(_) => {}
                ActionOutcome::New(candidate) => {
                    let d = kernel.dominance(registry.get(candidate).coefficients(), a);
                    let minimal = d < 1.0 - EPSILON_COMP_VAL;
                    registry.get_mut(candidate).set_positive_minimal(minimal);
                    if minimal {
                        minimal_roots.push(candidate);
                        worklist.push(candidate);
                        if let Some(limit) = max_roots {
                            if minimal_roots.len() > limit {
                                return Err(Error::root_limit_exceeded(limit));
                            }
                        }
                        if minimal_roots.len() % 50 == 0 {
                            log::debug!(
                                "enumerator: {} minimal roots so far",
                                minimal_roots.len()
                            );
                        }
                    }
                }
            }
        }
    }

    log::info!(
        "root enumeration complete: {} minimal roots, {} roots registered total",
        minimal_roots.len(),
        registry.len()
    );

    Ok(EnumerationResult {
        simple_roots,
        minimal_roots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use coxlex_ir::CoxeterMatrix;

    fn enumerate_matrix(rows: Vec<Vec<u32>>) -> (CoxeterKernel, RootRegistry, EnumerationResult) {
        let matrix = CoxeterMatrix::new(rows).unwrap();
        let kernel = CoxeterKernel::new(&matrix);
        let mut registry = RootRegistry::new();
        let result = enumerate(&kernel, &mut registry, None).unwrap();
        (kernel, registry, result)
    }

    #[test]
    fn s3_has_three_minimal_roots() {
        let (_, _, result) = enumerate_matrix(vec![vec![1, 3], vec![3, 1]]);
        assert_eq!(result.minimal_roots.len(), 3);
    }

    #[test]
    fn infinite_dihedral_has_two_minimal_roots() {
        let (_, _, result) = enumerate_matrix(vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(result.minimal_roots.len(), 2);
    }

    #[test]
    fn s4_has_six_minimal_roots() {
        let (_, _, result) = enumerate_matrix(vec![
            vec![1, 3, 2],
            vec![3, 1, 3],
            vec![2, 3, 1],
        ]);
        assert_eq!(result.minimal_roots.len(), 6);
    }

    #[test]
    fn all_minimal_roots_are_positive() {
        let (_, registry, result) = enumerate_matrix(vec![
            vec![1, 3, 2],
            vec![3, 1, 3],
            vec![2, 3, 1],
        ]);
        for &id in &result.minimal_roots {
            assert!(coxlex_ir::is_positive(registry.get(id).coefficients()));
        }
    }

    #[test]
    fn root_limit_is_enforced() {
        let matrix = CoxeterMatrix::new(vec![
            vec![1, 3, 2],
            vec![3, 1, 3],
            vec![2, 3, 1],
        ])
        .unwrap();
        let kernel = CoxeterKernel::new(&matrix);
        let mut registry = RootRegistry::new();
        assert!(enumerate(&kernel, &mut registry, Some(2)).is_err());
    }
}
