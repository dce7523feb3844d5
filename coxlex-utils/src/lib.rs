//! Shared error taxonomy and tunable constants for the coxlex workspace.
mod constants;
mod errors;

pub use constants::{
    EPSILON_COMP_VAL, MAX_FILENAME_LEN, MAX_GENERATORS, MAX_NESTED_WORD_LEN,
    MAX_ROOT_OUTPUT_LENGTH, MAX_WORD_LEN,
};
pub use errors::{CoxResult, Error};
