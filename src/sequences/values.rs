use crate::error::Exception;
use crate::generator::{Body, Resumption, Suspend};

/// Yields each element of a list in order, then completes without a return
/// value. No handler surrounds its suspension points.
#[derive(Debug, Clone)]
pub struct Values<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Values<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Values {
            items: items.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }

    /// Elements not yet yielded.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

impl<T> Body for Values<T> {
    type Yield = T;
    type Return = T;
    type Resume = ();

    fn resume(&mut self, resumption: Resumption<()>) -> Result<Suspend<T, T>, Exception> {
        if let Resumption::Throw(e) = resumption {
            return Err(e);
        }
        Ok(match self.items.next() {
            Some(v) => Suspend::Yield(v),
            None => Suspend::Return(None),
        })
    }
}
