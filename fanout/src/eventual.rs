use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::future::{self, BoxFuture};

/// A value that is either already available or still being computed.
///
/// Both the top-level source handle and every individual element flow through
/// [`Eventual::resolve`] on their way into the batching engine, so callers can
/// freely mix ready values with in-flight work in a single sequence. A plain
/// value converts with `From`, so `vec![1, 2, 3].into()` is as good a source
/// as a pending computation of a `Vec<Eventual<_, _>>`.
pub enum Eventual<T, E = std::convert::Infallible> {
    /// The value is already available.
    Ready(T),
    /// The value is still being computed and will settle to `Ok` or `Err`.
    Pending(BoxFuture<'static, Result<T, E>>),
}

impl<T, E> Eventual<T, E> {
    /// Wraps a value that is already available.
    pub fn ready(value: T) -> Self {
        Eventual::Ready(value)
    }

    /// Wraps an in-flight computation.
    pub fn pending<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Eventual::Pending(Box::pin(fut))
    }

    /// A computation that has already failed. Resolving it propagates `err`.
    pub fn failed(err: E) -> Self
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        Eventual::Pending(Box::pin(future::ready(Err(err))))
    }

    /// Returns the value immediately if it is ready, otherwise suspends until
    /// the computation settles and returns its value or propagates its failure.
    pub async fn resolve(self) -> Result<T, E> {
        match self {
            Eventual::Ready(value) => Ok(value),
            Eventual::Pending(fut) => fut.await,
        }
    }
}

impl<T, E> From<T> for Eventual<T, E> {
    fn from(value: T) -> Self {
        Eventual::Ready(value)
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Eventual<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eventual::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Eventual::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Hands back `value` once `duration` has elapsed.
///
/// A convenience for callers and tests that want to stage deferred inputs or
/// slow tasks; the engine itself never sleeps.
pub async fn delayed<T>(duration: Duration, value: T) -> T {
    tokio::time::sleep(duration).await;
    value
}
