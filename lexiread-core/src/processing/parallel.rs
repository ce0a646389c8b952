//! Order-preserving batch execution across a rayon pool

use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Errors raised while scheduling work
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Failed to create thread pool: {reason}")]
    ThreadPool { reason: String },
}

/// Apply `f` to every item and return the results in input order.
///
/// With the `parallel` feature the items are spread over a dedicated pool
/// of `threads` workers (all cores when `None`); a single item or a single
/// thread runs inline.
#[cfg(feature = "parallel")]
pub fn map_ordered<T, R, F>(
    items: Vec<T>,
    threads: Option<usize>,
    f: F,
) -> Result<Vec<R>, ProcessingError>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    if items.len() <= 1 || threads == Some(1) {
        return Ok(items.into_iter().map(f).collect());
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build().map_err(|e| ProcessingError::ThreadPool {
        reason: e.to_string(),
    })?;

    tracing::debug!(
        items = items.len(),
        threads = pool.current_num_threads(),
        "running batch in parallel"
    );

    Ok(pool.install(|| items.into_par_iter().map(f).collect()))
}

/// Apply `f` to every item and return the results in input order
#[cfg(not(feature = "parallel"))]
pub fn map_ordered<T, R, F>(
    items: Vec<T>,
    _threads: Option<usize>,
    f: F,
) -> Result<Vec<R>, ProcessingError>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    Ok(items.into_iter().map(f).collect())
}
