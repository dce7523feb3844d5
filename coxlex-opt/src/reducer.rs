//! The reducer: walks the automaton to classify a word as short-lex
//! reduced or not.
use coxlex_ir::Transition;

use crate::automaton::Automaton;

/// Verdict for a word fed to [`reduce`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReduceOutcome {
    Reduced,
    /// `position` is the 1-based index of the symbol that first produced a
    /// reject transition.
    NotReduced { position: usize },
}

/// Classify `word` (a sequence of 0-based generator indices) against
/// `automaton`. Does not produce a reduced form: only a verdict.
pub fn reduce(automaton: &Automaton, word: &[usize]) -> ReduceOutcome {
    let mut state = automaton.initial_state();
    for (i, &g) in word.iter().enumerate() {
        match automaton.catalog().get(state).transition(g) {
            Transition::Reject => {
                return ReduceOutcome::NotReduced { position: i + 1 }
            }
            Transition::Goto(next) => state = next,
        }
    }
    ReduceOutcome::Reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use coxlex_ir::CoxeterMatrix;

    fn s3() -> Automaton {
        let matrix = CoxeterMatrix::new(vec![vec![1, 3], vec![3, 1]]).unwrap();
        Automaton::build(matrix, None, None).unwrap()
    }

    fn infinite_dihedral() -> Automaton {
        let matrix = CoxeterMatrix::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
        Automaton::build(matrix, None, None).unwrap()
    }

    fn s4() -> Automaton {
        let matrix = CoxeterMatrix::new(vec![
            vec![1, 3, 2],
            vec![3, 1, 3],
            vec![2, 3, 1],
        ])
        .unwrap();
        Automaton::build(matrix, None, None).unwrap()
    }

    #[test]
    fn s3_aba_is_reduced() {
        let automaton = s3();
        assert_eq!(reduce(&automaton, &[0, 1, 0]), ReduceOutcome::Reduced);
    }

    #[test]
    fn s3_abab_is_not_reduced() {
        let automaton = s3();
        assert_eq!(
            reduce(&automaton, &[0, 1, 0, 1]),
            ReduceOutcome::NotReduced { position: 4 }
        );
    }

    #[test]
    fn infinite_dihedral_alternating_is_always_reduced() {
        let automaton = infinite_dihedral();
        let word: Vec<usize> =
            (0..20).map(|i| if i % 2 == 0 { 0 } else { 1 }).collect();
        assert_eq!(reduce(&automaton, &word), ReduceOutcome::Reduced);
    }

    #[test]
    fn infinite_dihedral_aa_rejects_at_two() {
        let automaton = infinite_dihedral();
        assert_eq!(
            reduce(&automaton, &[0, 0]),
            ReduceOutcome::NotReduced { position: 2 }
        );
    }

    #[test]
    fn s4_abcba_is_reduced() {
        let automaton = s4();
        assert_eq!(
            reduce(&automaton, &[0, 1, 2, 1, 0]),
            ReduceOutcome::Reduced
        );
    }

    #[test]
    fn s4_aa_rejects_at_two() {
        let automaton = s4();
        assert_eq!(
            reduce(&automaton, &[0, 0]),
            ReduceOutcome::NotReduced { position: 2 }
        );
    }

    #[test]
    fn s4_acac_rejects_at_three() {
        let automaton = s4();
        assert_eq!(
            reduce(&automaton, &[0, 2, 0, 2]),
            ReduceOutcome::NotReduced { position: 3 }
        );
    }
}
