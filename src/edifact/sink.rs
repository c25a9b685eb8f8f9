use crate::core::OrderError;

/// Destination for rendered interchanges (file store, queue, object storage…).
///
/// Implementations must store `text` durably and report where it went, or
/// fail without leaving a partial write behind. Failures should be reported
/// as [`OrderError::Sink`].
pub trait OrderSink {
    /// Where the interchange ended up, e.g. a path or an object key.
    type Location;

    fn store(&self, order_id: &str, text: &str) -> Result<Self::Location, OrderError>;
}

impl<T: OrderSink + ?Sized> OrderSink for &T {
    type Location = T::Location;

    fn store(&self, order_id: &str, text: &str) -> Result<Self::Location, OrderError> {
        (**self).store(order_id, text)
    }
}
