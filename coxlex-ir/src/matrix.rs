//! The Coxeter matrix data model. Loading one from a file is an external
//! concern (`coxlex-frontend`); this module only validates and stores the
//! matrix once its shape and entries are known.
use coxlex_utils::{CoxResult, Error};

/// A validated, symmetric Coxeter matrix. `m[i][j] == 0` encodes `m[i][j] =
/// infinity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoxeterMatrix {
    n: usize,
    entries: Vec<u32>,
}

impl CoxeterMatrix {
    /// Validate and store a square matrix given as rows of `m[i][j]`.
    ///
    /// Checks: square, diagonal all `1`, symmetric, and every off-diagonal
    /// entry is `0` (infinity) or `>= 2`.
    pub fn new(rows: Vec<Vec<u32>>) -> CoxResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::malformed_input(
                "Coxeter matrix must have at least one generator",
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::malformed_input(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
        }

        let mut entries = vec![0u32; n * n];
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if i == j && value != 1 {
                    return Err(Error::malformed_input(format!(
                        "diagonal entry m[{i}][{i}] = {value}, expected 1"
                    )));
                }
                if i != j && value != 0 && value < 2 {
                    return Err(Error::malformed_input(format!(
                        "entry m[{i}][{j}] = {value} must be 0 (infinity) or >= 2"
                    )));
                }
                entries[i * n + j] = value;
            }
        }

        let matrix = Self { n, entries };
        for i in 0..n {
            for j in 0..n {
                if matrix.get(i, j) != matrix.get(j, i) {
                    return Err(Error::malformed_input(format!(
                        "matrix is not symmetric: m[{i}][{j}] = {} but m[{j}][{i}] = {}",
                        matrix.get(i, j),
                        matrix.get(j, i)
                    )));
                }
            }
        }

        Ok(matrix)
    }

    /// Number of generators (`N`).
    pub fn n(&self) -> usize {
        self.n
    }

    /// `m[i][j]`, with `0` meaning infinity.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.entries[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_s3() {
        let m = CoxeterMatrix::new(vec![vec![1, 3], vec![3, 1]]).unwrap();
        assert_eq!(m.n(), 2);
        assert_eq!(m.get(0, 1), 3);
    }

    #[test]
    fn rejects_asymmetric() {
        let err =
            CoxeterMatrix::new(vec![vec![1, 3], vec![4, 1]]).unwrap_err();
        assert!(err.message().contains("not symmetric"));
    }

    #[test]
    fn rejects_bad_diagonal() {
        assert!(CoxeterMatrix::new(vec![vec![2, 3], vec![3, 1]]).is_err());
    }

    #[test]
    fn rejects_off_diagonal_one() {
        assert!(CoxeterMatrix::new(vec![vec![1, 1], vec![1, 1]]).is_err());
    }

    #[test]
    fn accepts_infinite_dihedral() {
        let m = CoxeterMatrix::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(m.get(0, 1), 0);
    }
}
