use crate::error::Exception;
use crate::generator::{Body, Resumption, Suspend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Point {
    Start,
    // Suspended at `yield i` inside the handler-protected region.
    InHandlerRegion,
}

/// Counts up from zero forever, catching any error raised at its suspension
/// point.
///
/// The body is
///
/// ```text
/// i = 0
/// loop {
///     try { yield i; i += 1 }
///     catch e { record e }
/// }
/// ```
///
/// so an injected error skips the increment: it is recorded and the same
/// `i` is yielded again, after which counting continues normally.
#[derive(Debug, Clone)]
pub struct Counter {
    i: u64,
    point: Point,
    caught: Vec<Exception>,
}

impl Counter {
    pub fn new() -> Self {
        Counter {
            i: 0,
            point: Point::Start,
            caught: Vec::new(),
        }
    }

    /// Errors the handler has caught so far, oldest first.
    pub fn caught(&self) -> &[Exception] {
        &self.caught
    }
}

impl Default for Counter {
    fn default() -> Self {
        Counter::new()
    }
}

impl Body for Counter {
    type Yield = u64;
    type Return = u64;
    type Resume = ();

    fn resume(&mut self, resumption: Resumption<()>) -> Result<Suspend<u64, u64>, Exception> {
        match (self.point, resumption) {
            (Point::Start, Resumption::Throw(e)) => return Err(e),
            (Point::Start, _) => self.point = Point::InHandlerRegion,
            (Point::InHandlerRegion, Resumption::Throw(e)) => {
                log::info!("Error caught: {e}");
                self.caught.push(e);
            }
            (Point::InHandlerRegion, _) => self.i += 1,
        }
        Ok(Suspend::Yield(self.i))
    }
}
