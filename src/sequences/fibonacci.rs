use std::ops::Add;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::Exception;
use crate::generator::{Body, Resumption, Suspend};

// Seeded with F(-1) = 1 so every later value is `previous + current`, and
// each sum is the value being requested, never one ahead of it.
fn first<T: Zero + One>(previous: &mut T, current: &mut T) {
    *previous = T::one();
    *current = T::zero();
}

fn step<T: Clone + Add<Output = T>>(previous: &mut T, current: &mut T) {
    let sum = previous.clone() + current.clone();
    *previous = std::mem::replace(current, sum);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Point {
    Start,
    Yielded { i: usize },
}

/// The first `count` Fibonacci numbers, `0, 1, 1, 2, 3, ...`, completing
/// without a return value.
#[derive(Debug, Clone)]
pub struct Fibonacci<T = BigUint> {
    count: usize,
    previous: T,
    current: T,
    point: Point,
}

impl<T: Zero + One> Fibonacci<T> {
    pub fn new(count: usize) -> Self {
        Fibonacci {
            count,
            previous: T::one(),
            current: T::zero(),
            point: Point::Start,
        }
    }
}

impl<T: Zero + One + Clone + Add<Output = T>> Body for Fibonacci<T> {
    type Yield = T;
    type Return = T;
    type Resume = ();

    fn resume(&mut self, resumption: Resumption<()>) -> Result<Suspend<T, T>, Exception> {
        let i = match (self.point, resumption) {
            (_, Resumption::Throw(e)) => return Err(e),
            (Point::Start, _) => 0,
            (Point::Yielded { i }, _) => i + 1,
        };
        if i >= self.count {
            return Ok(Suspend::Return(None));
        }
        if i > 0 {
            step(&mut self.previous, &mut self.current);
        }
        self.point = Point::Yielded { i };
        Ok(Suspend::Yield(self.current.clone()))
    }
}

/// Endless Fibonacci numbers that restart when resumed with `true`.
///
/// The reset lands after the value of that same resumption is produced:
/// after `0, 1, 1, 2`, resuming with `true` still yields `3`, and the
/// following resumptions yield `0, 1, 1, ...` again.
#[derive(Debug, Clone)]
pub struct RestartingFibonacci<T = BigUint> {
    previous: T,
    current: T,
    // Set by a reset; the next resumption starts over from zero.
    restart_pending: bool,
    restarts: usize,
}

impl<T: Zero + One> RestartingFibonacci<T> {
    pub fn new() -> Self {
        RestartingFibonacci {
            previous: T::one(),
            current: T::zero(),
            restart_pending: true,
            restarts: 0,
        }
    }
}

impl<T: Zero + One> Default for RestartingFibonacci<T> {
    fn default() -> Self {
        RestartingFibonacci::new()
    }
}

impl<T> RestartingFibonacci<T> {
    /// How many resumptions carried a reset.
    pub fn restarts(&self) -> usize {
        self.restarts
    }
}

impl<T: Zero + One + Clone + Add<Output = T>> Body for RestartingFibonacci<T> {
    type Yield = T;
    type Return = T;
    type Resume = bool;

    fn resume(&mut self, resumption: Resumption<bool>) -> Result<Suspend<T, T>, Exception> {
        let reset = match resumption {
            Resumption::Throw(e) => return Err(e),
            Resumption::Start => false,
            Resumption::Next(input) => input.unwrap_or(false),
        };
        if std::mem::take(&mut self.restart_pending) {
            first(&mut self.previous, &mut self.current);
        } else {
            step(&mut self.previous, &mut self.current);
        }
        if reset {
            log::trace!("restarting fibonacci sequence");
            self.restarts += 1;
            self.restart_pending = true;
        }
        Ok(Suspend::Yield(self.current.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_advances_pair() {
        let (mut previous, mut current) = (2u32, 3u32);
        step(&mut previous, &mut current);
        assert_eq!((previous, current), (3, 5));
    }

    #[test]
    fn seed_sums_to_one() {
        let (mut previous, mut current) = (7u8, 9u8);
        first(&mut previous, &mut current);
        assert_eq!(current, 0);
        step(&mut previous, &mut current);
        assert_eq!(current, 1);
    }
}
