//! Change-handler wrapper shared by the slider widgets.
//!
//! Each widget reports committed values through a single mandatory handler.
//! The wrapper hides the boxing and gives the stored closure a Debug
//! representation so widgets can derive theirs.

use std::fmt;

/// A boxed handler invoked with every committed value change.
///
/// The handler is the sole egress point of a slider: state flows into it,
/// never back out of it.
pub struct Callback<T> {
    f: Box<dyn Fn(T)>,
}

impl<T> Callback<T> {
    /// Wrap a handler function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Invoke the handler.
    pub fn emit(&self, value: T) {
        (self.f)(value)
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}
