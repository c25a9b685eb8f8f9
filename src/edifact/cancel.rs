//! Coarse-grained cancellation for order generation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// A signal polled by the assembler before it starts and once per line item.
pub trait CancelSignal {
    fn is_cancelled(&self) -> bool;
}

/// Never fires. Used by [`OrderGenerator::generate`](super::OrderGenerator::generate).
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelSignal for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Fires once the wall clock passes the given instant.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(pub Instant);

impl CancelSignal for Deadline {
    fn is_cancelled(&self) -> bool {
        Instant::now() >= self.0
    }
}

/// A shared shutdown flag, e.g. `Arc<AtomicBool>` flipped by another thread.
impl CancelSignal for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
