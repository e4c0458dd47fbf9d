use std::future::Future;

use crate::batch::{self, Options};
use crate::eventual::Eventual;

/// Applies `mapper(value, position)` to each element of `source`, at most
/// `options` concurrency invocations in flight at once, and returns the
/// transformed values in input order.
///
/// `source` is an [`Eventual`] sequence: a ready one converts with `.into()`,
/// a pending one is passed as [`Eventual::pending`], and its elements may
/// themselves be ready or pending; every raw value is resolved before the
/// mapper sees it. A failed element resolution or mapper invocation rejects
/// the whole call with that error and no partial output.
///
/// ```rust
/// use fanout::{Options, map_concurrent};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let doubled = map_concurrent(
///     vec![1_u64, 2, 3].into(),
///     |value: u64, _| async move { Ok::<_, std::convert::Infallible>(value * 2) },
///     Options::default(),
/// )
/// .await
/// .unwrap();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # }
/// ```
pub async fn map_concurrent<I, V, T, E, F, Fut, R>(
    source: Eventual<I, E>,
    mapper: F,
    options: Options,
) -> Result<Vec<R>, E>
where
    I: IntoIterator<Item = V>,
    V: Into<Eventual<T, E>>,
    F: FnMut(T, usize) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    batch::drive(source, options, mapper).await
}
