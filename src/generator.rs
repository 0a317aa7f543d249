use std::fmt;

use crate::error::{Exception, GeneratorError};

/// Lifecycle of a generator handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    NotStarted,
    // Left in place only if a body step panics; every later call is refused.
    Running,
    Suspended,
    Completed,
}

/// How a body is being resumed.
#[derive(Debug)]
pub enum Resumption<T> {
    /// First resumption: run from the top of the body.
    Start,
    /// Continue after the last suspension point, which evaluates to the input.
    Next(Option<T>),
    /// Raise the exception at the last suspension point.
    Throw(Exception),
}

/// Where a body stopped after running one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suspend<Y, R> {
    Yield(Y),
    Return(Option<R>),
}

/// The code of a generator, written as an explicit state machine.
///
/// An implementation keeps its resume point as an enum tag next to the
/// locals captured at that point. `resume` dispatches over the tag, runs
/// until the next suspension point or the end of the body, and updates the
/// tag before returning. `Resumption::Throw` is routed through whatever
/// handler region the tag says is active; a body with no handler at its
/// current suspension point returns the exception as `Err`.
///
/// The handle never calls `resume` again after the body returned or raised.
pub trait Body {
    type Yield;
    type Return;
    type Resume;

    fn resume(&mut self, resumption: Resumption<Self::Resume>) -> Result<Suspend<Self::Yield, Self::Return>, Exception>;

    /// Run cleanup scoped around the current suspension point, as if the body
    /// returned from there. Called once by `Generator::finish` on a suspended
    /// handle.
    fn close(&mut self) -> Result<(), Exception> {
        Ok(())
    }
}

/// The `{ value, done }` pair produced by each resumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult<Y, R> {
    Yielded(Y),
    Done(Option<R>),
}

impl<Y, R> StepResult<Y, R> {
    pub fn is_done(&self) -> bool {
        matches!(self, StepResult::Done(_))
    }

    pub fn yielded(self) -> Option<Y> {
        match self {
            StepResult::Yielded(v) => Some(v),
            StepResult::Done(_) => None,
        }
    }

    pub fn return_value(self) -> Option<R> {
        match self {
            StepResult::Yielded(_) => None,
            StepResult::Done(v) => v,
        }
    }
}

impl<Y: fmt::Display, R: fmt::Display> fmt::Display for StepResult<Y, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepResult::Yielded(v) => write!(f, "{{ value: {v}, done: false }}"),
            StepResult::Done(Some(v)) => write!(f, "{{ value: {v}, done: true }}"),
            StepResult::Done(None) => write!(f, "{{ value: undefined, done: true }}"),
        }
    }
}

/// A handle on one suspended computation.
///
/// Created in the `NotStarted` state; the body does not run until the first
/// `advance`. Once `Completed` the handle never re-enters the body.
#[derive(Debug)]
pub struct Generator<B: Body> {
    body: B,
    state: GeneratorState,
}

impl<B: Body> Generator<B> {
    pub fn new(body: B) -> Self {
        Generator {
            body,
            state: GeneratorState::NotStarted,
        }
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == GeneratorState::Completed
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    /// Execute generator.next(input)
    ///
    /// The input of the first call is discarded: there is no suspension point
    /// yet for it to be the result of.
    pub fn advance(&mut self, input: Option<B::Resume>) -> Result<StepResult<B::Yield, B::Return>, GeneratorError> {
        match self.state {
            GeneratorState::NotStarted => self.run(Resumption::Start),
            GeneratorState::Suspended => self.run(Resumption::Next(input)),
            GeneratorState::Running => Err(GeneratorError::AlreadyRunning),
            GeneratorState::Completed => {
                log::trace!("advance on completed generator");
                Ok(StepResult::Done(None))
            }
        }
    }

    /// Execute generator.throw(error)
    pub fn inject_error(&mut self, error: Exception) -> Result<StepResult<B::Yield, B::Return>, GeneratorError> {
        match self.state {
            GeneratorState::NotStarted => {
                // No handler can be active before the body has run
                log::debug!("error injected into unstarted generator: {error}");
                self.state = GeneratorState::Completed;
                Err(GeneratorError::Uncaught(error))
            }
            GeneratorState::Suspended => {
                log::debug!("injecting error at suspension point: {error}");
                self.run(Resumption::Throw(error))
            }
            GeneratorState::Running => Err(GeneratorError::AlreadyRunning),
            GeneratorState::Completed => Err(crate::error::invalid_state_here!("Generator has already completed")),
        }
    }

    /// Execute generator.return(value)
    pub fn finish(&mut self, value: Option<B::Return>) -> Result<StepResult<B::Yield, B::Return>, GeneratorError> {
        match self.state {
            GeneratorState::NotStarted => {
                log::debug!("finishing unstarted generator");
                self.state = GeneratorState::Completed;
            }
            GeneratorState::Suspended => {
                log::debug!("finishing suspended generator");
                self.state = GeneratorState::Running;
                let closed = self.body.close();
                self.state = GeneratorState::Completed;
                closed?;
            }
            GeneratorState::Running => return Err(GeneratorError::AlreadyRunning),
            GeneratorState::Completed => log::trace!("finish on completed generator"),
        }
        Ok(StepResult::Done(value))
    }

    fn run(&mut self, resumption: Resumption<B::Resume>) -> Result<StepResult<B::Yield, B::Return>, GeneratorError> {
        log::trace!("resuming generator from {:?}", self.state);
        self.state = GeneratorState::Running;
        match self.body.resume(resumption) {
            Ok(Suspend::Yield(v)) => {
                self.state = GeneratorState::Suspended;
                Ok(StepResult::Yielded(v))
            }
            Ok(Suspend::Return(v)) => {
                log::trace!("generator body returned");
                self.state = GeneratorState::Completed;
                Ok(StepResult::Done(v))
            }
            Err(e) => {
                log::debug!("generator body raised: {e}");
                self.state = GeneratorState::Completed;
                Err(GeneratorError::Uncaught(e))
            }
        }
    }
}

/// Drives the handle with `advance(None)`. Iteration ends at the first
/// completion or uncaught error; the return value is discarded.
impl<B: Body> Iterator for Generator<B> {
    type Item = B::Yield;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance(None) {
            Ok(StepResult::Yielded(v)) => Some(v),
            Ok(StepResult::Done(_)) => None,
            Err(e) => {
                log::debug!("iteration stopped: {e}");
                None
            }
        }
    }
}

impl<B: Body> std::iter::FusedIterator for Generator<B> {}
