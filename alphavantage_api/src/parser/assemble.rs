use std::sync::Arc;

use rayon::prelude::*;

use super::{decode_record, ParseError};
use crate::types::{Bar, RawRecord};

/// Record count at or above which decoding fans out to the worker pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Upper bound on decode workers.
const MAX_WORKERS: usize = 8;

/// Reusable normalization configuration.
///
/// Immutable after construction and safe to share between concurrent calls;
/// every call keeps its own intermediate state. A parallel normalizer owns a
/// fixed-size rayon pool, so large payloads never spawn more than `workers`
/// threads no matter how many records they carry.
#[derive(Clone, Debug)]
pub struct Normalizer {
    parallel_threshold: usize,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::sequential()
    }
}

impl Normalizer {
    /// A normalizer that decodes on the calling thread only.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            pool: None,
        }
    }

    /// A normalizer that decodes series of `parallel_threshold` or more
    /// records on a dedicated pool of `workers` threads.
    pub fn parallel(
        workers: usize,
        parallel_threshold: usize,
    ) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|i| format!("normalize-{}", i))
            .build()?;
        Ok(Self {
            parallel_threshold,
            pool: Some(Arc::new(pool)),
        })
    }

    /// Worker count used when none is configured: available cores, capped.
    pub fn default_workers() -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(MAX_WORKERS)
    }

    /// Number of pool threads, or 0 for a sequential normalizer.
    pub fn workers(&self) -> usize {
        self.pool
            .as_ref()
            .map(|pool| pool.current_num_threads())
            .unwrap_or(0)
    }

    /// Decodes every record and sorts the bars ascending by timestamp.
    ///
    /// All or nothing: the first decode failure is returned and no partial
    /// series escapes. On the parallel path the pool call only returns once
    /// every in-flight record has finished. Ordering never depends on which
    /// worker finished first since the sort runs over the complete set.
    pub fn assemble(&self, records: &[RawRecord]) -> Result<Vec<Bar>, ParseError> {
        let mut bars = match &self.pool {
            Some(pool) if records.len() >= self.parallel_threshold => {
                tracing::debug!(
                    "Decoding {} records on {} workers",
                    records.len(),
                    pool.current_num_threads()
                );
                pool.install(|| {
                    records
                        .par_iter()
                        .map(decode_record)
                        .collect::<Result<Vec<_>, _>>()
                })?
            }
            _ => records
                .iter()
                .map(decode_record)
                .collect::<Result<Vec<_>, _>>()?,
        };

        bars.sort_by_key(|bar| bar.timestamp);
        Ok(bars)
    }
}
