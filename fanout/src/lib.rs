//! Concurrency-bounded map and filter for async Rust.
//!
//! Given a sequence whose elements (and whose container itself) may already be
//! available or may still be [`Eventual`] pending computations, we have to run
//! a caller-supplied async task over every element without the unbounded
//! fan-out of starting them all at once. The engine drains the sequence into
//! fixed-size batches no larger than the concurrency limit, runs each batch to
//! settlement before admitting the next one, and reassembles the output in
//! input order regardless of completion order.
//!
//! ```rust
//! use fanout::{Options, filter_concurrent, map_concurrent};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let doubled = map_concurrent(
//!     vec![1_u64, 2, 3].into(),
//!     |value: u64, _| async move { Ok::<_, std::convert::Infallible>(value * 2) },
//!     Options::with_concurrency(2),
//! )
//! .await
//! .unwrap();
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let odd = filter_concurrent(
//!     vec![1_u64, 2, 3].into(),
//!     |value: u64, _| async move { Ok::<_, std::convert::Infallible>(value != 2) },
//!     Options::default(),
//! )
//! .await
//! .unwrap();
//! assert_eq!(odd, vec![1, 3]);
//! # }
//! ```
//!
//! Failures are terminal for the whole call: a failed element resolution or a
//! failed task invocation rejects the call with the original error, unwrapped,
//! and no partial output is returned. Within a batch, one failing invocation
//! never aborts its siblings; the batch settles fully and the earliest
//! position's failure wins.

/// Values that are either immediately available or still being computed.
pub mod eventual;

/// The shared batching engine both combinators drive.
mod batch;

/// Concurrency-bounded, order-preserving map.
pub mod map;

/// Concurrency-bounded, order-preserving filter.
pub mod filter;

pub use batch::Options;
pub use eventual::{Eventual, delayed};
pub use filter::filter_concurrent;
pub use map::map_concurrent;
