//! Tunable limits and thresholds. All are plain `usize`/`f64` values rather
//! than preprocessor defines; callers that need different limits construct
//! their own values and pass them through explicitly instead of overriding
//! a global.

/// Default cap on the expanded length of a word entered at the prompt.
pub const MAX_WORD_LEN: usize = 200;

/// Default cap on the number of generators a Coxeter matrix may define.
pub const MAX_GENERATORS: usize = 10;

/// Default cap on the length of a matrix-file path accepted by the REPL.
pub const MAX_FILENAME_LEN: usize = 200;

/// Default cap on the number of coefficients printed per root in a dump.
pub const MAX_ROOT_OUTPUT_LENGTH: usize = 255;

/// Default cap on bracket-nesting depth in the word grammar.
pub const MAX_NESTED_WORD_LEN: usize = 10;

/// Equality/positivity threshold for root coefficients.
pub const EPSILON_COMP_VAL: f64 = 1e-5;
