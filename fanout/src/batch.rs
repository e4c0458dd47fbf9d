use std::future::Future;
use std::mem;
use std::num::NonZeroUsize;

use futures::future::join_all;
use tracing::trace;

use crate::eventual::Eventual;

/// Options accepted by [`map_concurrent`](crate::map_concurrent) and
/// [`filter_concurrent`](crate::filter_concurrent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    concurrency: Option<NonZeroUsize>,
}

impl Options {
    /// Caps the number of task invocations in flight at once. Passing `0`
    /// leaves the limit unset, same as [`Options::default`]: the source's
    /// exact size is used when it is known, otherwise the whole remainder is
    /// treated as one batch.
    pub fn with_concurrency(concurrency: usize) -> Self {
        Options {
            concurrency: NonZeroUsize::new(concurrency),
        }
    }

    /// The limit actually driven: the configured one, else the source's exact
    /// size hint, else effectively unbounded.
    fn effective(&self, size_hint: (usize, Option<usize>)) -> usize {
        if let Some(concurrency) = self.concurrency {
            return concurrency.get();
        }
        match size_hint {
            (lower, Some(upper)) if lower == upper && upper > 0 => upper,
            _ => usize::MAX,
        }
    }
}

/// Drains `source` into fixed-size batches and runs `task` over every element,
/// at most `options` concurrency invocations in flight at once, yielding the
/// outcomes in input order.
///
/// This is a fixed barrier window: batch k+1 never starts until every
/// invocation of batch k has settled, not merely until a slot frees. Element
/// raw values are resolved before admission; a failed resolution aborts the
/// call with that failure and nothing is returned. Every invocation in a batch
/// runs to settlement even when a sibling fails; the earliest position's
/// failure then terminates the call.
pub(crate) async fn drive<I, V, T, E, F, Fut, O>(
    source: Eventual<I, E>,
    options: Options,
    mut task: F,
) -> Result<Vec<O>, E>
where
    I: IntoIterator<Item = V>,
    V: Into<Eventual<T, E>>,
    F: FnMut(T, usize) -> Fut,
    Fut: Future<Output = Result<O, E>>,
{
    let iter = source.resolve().await?.into_iter();
    let size_hint = iter.size_hint();
    let concurrency = options.effective(size_hint);
    trace!(concurrency, "source resolved, draining batches");

    let mut outcomes: Vec<O> = Vec::with_capacity(size_hint.0);
    let mut batch: Vec<Fut> = Vec::new();
    let mut position = 0_usize;

    for raw in iter {
        let value = raw.into().resolve().await?;
        batch.push(task(value, position));
        position += 1;
        if batch.len() >= concurrency {
            settle(&mut batch, &mut outcomes).await?;
        }
    }
    if !batch.is_empty() {
        settle(&mut batch, &mut outcomes).await?;
    }

    trace!(total = outcomes.len(), "cursor exhausted, assembling output");
    Ok(outcomes)
}

/// Runs the current batch to settlement and appends its outcomes in position
/// order. `join_all` polls the invocations concurrently, starts them in
/// position order, and yields their results in that same order no matter when
/// each one completed.
async fn settle<Fut, O, E>(batch: &mut Vec<Fut>, outcomes: &mut Vec<O>) -> Result<(), E>
where
    Fut: Future<Output = Result<O, E>>,
{
    trace!(size = batch.len(), "dispatching batch");
    for settled in join_all(mem::take(batch)).await {
        outcomes.push(settled?);
    }
    Ok(())
}
