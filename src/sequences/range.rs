use num_traits::{CheckedAdd, Num};

use crate::error::Exception;
use crate::generator::{Body, Resumption, Suspend};

#[derive(Debug, Clone, Copy)]
enum Point<T> {
    Start,
    Yielded { i: T, count: usize },
}

/// `start, start + step, ...` while below `end`, returning how many values
/// were produced.
///
/// An `end` of `None` stops only when the next value would overflow `T`.
/// Parameters are taken as given: a step that never reaches `end` yields
/// until overflow, a `start` past `end` yields nothing.
#[derive(Debug, Clone)]
pub struct Range<T> {
    start: T,
    end: Option<T>,
    step: T,
    point: Point<T>,
}

impl<T: Num + CheckedAdd + PartialOrd + Copy> Range<T> {
    pub fn new(start: T, end: Option<T>, step: T) -> Self {
        Range {
            start,
            end,
            step,
            point: Point::Start,
        }
    }

    /// `start..end` with a step of one.
    pub fn bounded(start: T, end: T) -> Self {
        Range::new(start, Some(end), T::one())
    }

    /// `start, start + 1, ...` without end.
    pub fn unbounded(start: T) -> Self {
        Range::new(start, None, T::one())
    }

    fn in_bounds(&self, i: &T) -> bool {
        self.end.as_ref().is_none_or(|end| i < end)
    }
}

impl<T: Num + CheckedAdd + PartialOrd + Copy> Default for Range<T> {
    fn default() -> Self {
        Range::unbounded(T::zero())
    }
}

impl<T: Num + CheckedAdd + PartialOrd + Copy> Body for Range<T> {
    type Yield = T;
    type Return = usize;
    type Resume = ();

    fn resume(&mut self, resumption: Resumption<()>) -> Result<Suspend<T, usize>, Exception> {
        let (candidate, count) = match (self.point, resumption) {
            (_, Resumption::Throw(e)) => return Err(e),
            (Point::Start, _) => (Some(self.start), 0),
            (Point::Yielded { i, count }, _) => (i.checked_add(&self.step), count),
        };
        // overflowing `T` is past any bound
        match candidate.filter(|i| self.in_bounds(i)) {
            Some(i) => {
                self.point = Point::Yielded { i, count: count + 1 };
                Ok(Suspend::Yield(i))
            }
            None => Ok(Suspend::Return(Some(count))),
        }
    }
}
