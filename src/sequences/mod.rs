//! Generator bodies for the demonstrated sequences.

mod counter;
mod fibonacci;
mod range;
mod values;

pub use counter::Counter;
pub use fibonacci::{Fibonacci, RestartingFibonacci};
pub use range::Range;
pub use values::Values;
