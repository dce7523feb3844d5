//! The coefficient kernel: scalar products, the simple reflection action on
//! a root, and the memoized action lookup shared by the enumerator and the
//! state-graph builder.
use coxlex_ir::{is_positive, Insertion, RootId, RootRegistry};
use coxlex_ir::CoxeterMatrix;

/// Outcome of applying `s_a` to a registered root's coefficients.
pub enum ActionOutcome {
    /// `s_a . r` is a root already present in the registry.
    Existing(RootId),
    /// `s_a . r` is a positive root not previously seen; it has just been
    /// registered (its `positive_minimal` flag is not yet set — the caller
    /// decides that, since only the enumerator knows when a fresh root
    /// should be dominance-tested versus treated as an already-classified
    /// minimal root's image).
    New(RootId),
    /// `s_a . r` is negative. Negative roots are never registered.
    Negative,
}

/// Precomputed scalar-product and simple-action tables for a validated
/// Coxeter matrix.
pub struct CoxeterKernel {
    n: usize,
    /// `g[i][j] = <e_i, e_j>`.
    scalar_product: Vec<Vec<f64>>,
    /// `act[i][a] = -2 * g[i][a]`, the coefficient-on-`a` produced when
    /// `s_a` acts on simple root `e_i`.
    action: Vec<Vec<f64>>,
}

impl CoxeterKernel {
    pub fn new(matrix: &CoxeterMatrix) -> Self {
        let n = matrix.n();
        let mut scalar_product = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                scalar_product[i][j] = if i == j {
                    1.0
                } else {
                    let m = matrix.get(i, j);
                    if m == 0 {
                        -1.0
                    } else {
                        -(std::f64::consts::PI / m as f64).cos()
                    }
                };
            }
        }

        let mut action = vec![vec![0.0; n]; n];
        for i in 0..n {
            for a in 0..n {
                action[i][a] = -2.0 * scalar_product[i][a];
            }
        }

        Self {
            n,
            scalar_product,
            action,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn scalar_product(&self, i: usize, j: usize) -> f64 {
        self.scalar_product[i][j]
    }

    /// `s_a . r`, computed coefficient by coefficient.
    pub fn reflect(&self, coeffs: &[f64], a: usize) -> Vec<f64> {
        let mut out = vec![0.0; self.n];
        for (i, &r_i) in coeffs.iter().enumerate() {
            if r_i.abs() < coxlex_utils::EPSILON_COMP_VAL {
                continue;
            }
            if i == a {
                out[a] -= r_i;
            } else {
                out[i] += r_i;
                out[a] += r_i * self.action[i][a];
            }
        }
        out
    }

    /// `d = <e_a, r> = sum_i r_i * g[i][a]`, the dominance quantity tested
    /// against `1 - EPSILON_COMP_VAL` by the minimal-root predicate.
    pub fn dominance(&self, coeffs: &[f64], a: usize) -> f64 {
        coeffs
            .iter()
            .enumerate()
            .map(|(i, &r_i)| r_i * self.scalar_product[i][a])
            .sum()
    }

    /// The memoized action of `s_a` on registered root `r`. Looks up the
    /// root's memo slot for generator `a` first; on a miss, reflects, then
    /// either finds the canonical registered root, registers a fresh
    /// positive one, or reports a negative (unregistered) result.
    pub fn action(
        &self,
        registry: &mut RootRegistry,
        r: RootId,
        a: usize,
    ) -> ActionOutcome {
        if let Some(memo) = registry.get(r).memo(a) {
            return ActionOutcome::Existing(memo);
        }

        let coeffs = self.reflect(registry.get(r).coefficients(), a);
        if !is_positive(&coeffs) {
            return ActionOutcome::Negative;
        }

        match registry.insert(coeffs) {
            Insertion::AlreadyExists(id) => {
                registry.get_mut(r).set_memo(a, id);
                ActionOutcome::Existing(id)
            }
            Insertion::Inserted(id) => {
                registry.get_mut(r).set_memo(a, id);
                ActionOutcome::New(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s3_matrix() -> CoxeterMatrix {
        CoxeterMatrix::new(vec![vec![1, 3], vec![3, 1]]).unwrap()
    }

    #[test]
    fn scalar_product_diagonal_is_one() {
        let kernel = CoxeterKernel::new(&s3_matrix());
        assert_eq!(kernel.scalar_product(0, 0), 1.0);
        assert_eq!(kernel.scalar_product(1, 1), 1.0);
    }

    #[test]
    fn scalar_product_m3_is_minus_half() {
        let kernel = CoxeterKernel::new(&s3_matrix());
        assert!((kernel.scalar_product(0, 1) - (-0.5)).abs() < 1e-9);
    }

    #[test]
    fn infinite_entry_is_minus_one() {
        let m = CoxeterMatrix::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
        let kernel = CoxeterKernel::new(&m);
        assert_eq!(kernel.scalar_product(0, 1), -1.0);
    }

    #[test]
    fn reflection_is_involutive() {
        let kernel = CoxeterKernel::new(&s3_matrix());
        let e1 = vec![0.0, 1.0];
        let once = kernel.reflect(&e1, 0);
        let twice = kernel.reflect(&once, 0);
        for (a, b) in twice.iter().zip(e1.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn reflecting_own_simple_root_negates() {
        let kernel = CoxeterKernel::new(&s3_matrix());
        let e0 = vec![1.0, 0.0];
        let reflected = kernel.reflect(&e0, 0);
        assert!((reflected[0] - (-1.0)).abs() < 1e-9);
        assert!(reflected[1].abs() < 1e-9);
    }

    proptest::proptest! {
        /// s_a . (s_a . r) = r for arbitrary coefficients, not just
        /// registered roots.
        #[test]
        fn reflection_is_involutive_for_arbitrary_vectors(
            x in -10.0f64..10.0,
            y in -10.0f64..10.0,
            gen in 0usize..2,
        ) {
            let kernel = CoxeterKernel::new(&s3_matrix());
            let r = vec![x, y];
            let once = kernel.reflect(&r, gen);
            let twice = kernel.reflect(&once, gen);
            for (a, b) in twice.iter().zip(r.iter()) {
                proptest::prop_assert!((a - b).abs() < 1e-6);
            }
        }
    }
}
