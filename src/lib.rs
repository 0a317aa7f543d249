pub(crate) mod error;
pub(crate) mod generator;
pub mod sequences;

pub use error::{Exception, GeneratorError};
pub use generator::{Body, Generator, GeneratorState, Resumption, StepResult, Suspend};
pub use sequences::{Counter, Fibonacci, Range, RestartingFibonacci, Values};
