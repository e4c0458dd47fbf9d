use std::future::Future;

use crate::batch::{self, Options};
use crate::eventual::Eventual;

/// Keeps the elements of `source` for which `predicate(value, position)`
/// settles to `true`, at most `options` concurrency invocations in flight at
/// once, preserving input order.
///
/// Shares the batching engine with [`map_concurrent`](crate::map_concurrent):
/// each element is cloned into its predicate invocation and the original is
/// kept or dropped by the verdict. `source` is an [`Eventual`] sequence, ready
/// (via `.into()`) or pending. A failed element resolution or predicate
/// invocation rejects the whole call with that error; verdicts accumulated in
/// this and prior batches are discarded and nothing is returned.
///
/// ```rust
/// use fanout::{Options, filter_concurrent};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let odd = filter_concurrent(
///     vec![1_u64, 2, 3].into(),
///     |value: u64, _| async move { Ok::<_, std::convert::Infallible>(value != 2) },
///     Options::default(),
/// )
/// .await
/// .unwrap();
/// assert_eq!(odd, vec![1, 3]);
/// # }
/// ```
pub async fn filter_concurrent<I, V, T, E, F, Fut>(
    source: Eventual<I, E>,
    mut predicate: F,
    options: Options,
) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = V>,
    V: Into<Eventual<T, E>>,
    T: Clone,
    F: FnMut(T, usize) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let verdicts = batch::drive(source, options, |value: T, position| {
        let keep = predicate(value.clone(), position);
        async move { Ok(keep.await?.then_some(value)) }
    })
    .await?;
    Ok(verdicts.into_iter().flatten().collect())
}
