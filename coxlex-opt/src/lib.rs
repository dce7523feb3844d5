//! Construction algorithms for the Brink-Howlett short-lex automaton: the
//! coefficient kernel, the root enumerator, the state-graph builder, and
//! the reducer. The data they operate on lives in `coxlex-ir`.
mod automaton;
mod enumerator;
mod kernel;
mod reducer;

pub use automaton::Automaton;
pub use enumerator::{enumerate, EnumerationResult};
pub use kernel::{ActionOutcome, CoxeterKernel};
pub use reducer::{reduce, ReduceOutcome};
