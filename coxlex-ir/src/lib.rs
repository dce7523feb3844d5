//! Core data model for the Brink-Howlett short-lex automaton: the Coxeter
//! matrix, roots and their registry, and automaton states and their
//! catalog. Construction algorithms live in `coxlex-opt`; this crate only
//! owns the data and the comparators/invariants that define it.
mod catalog;
mod id;
mod matrix;
mod registry;
mod root;
mod state;

pub use catalog::{CatalogStatus, StateCatalog};
pub use id::{RootId, StateId};
pub use matrix::CoxeterMatrix;
pub use registry::{Insertion, RootRegistry};
pub use root::{coeffs_equal, compare_coeffs, is_positive, Root};
pub use state::{compare_states, State, Transition};
