//! Batch assessment pipeline
//!
//! Runs the per-photo pipeline (prepare → infer → detect → classify)
//! across a photo set on a bounded worker pool and folds the completed
//! results into one [`AssessmentSummary`].
//!
//! Photos within a batch have no ordering dependency on each other and run
//! in parallel; the caller-visible image list still preserves submission
//! order. A photo that fails to decode or classify becomes a per-image
//! note, never a batch failure — only a batch with zero successfully
//! analyzed images errors out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::analysis::result::{
    AssessmentMetadata, AssessmentSummary, FailureKind, ImageAssessment, ImageFailure,
};
use crate::classifier::{Classifier, ClassifierPool};
use crate::config::AnalysisConfig;
use crate::error::{AssessmentError, Result};

/// One photo queued for assessment
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Caller-side reference carried through to results and failure notes
    pub image_ref: String,
    /// Raw encoded photo bytes
    pub bytes: Vec<u8>,
}

impl ImageInput {
    /// Queue a photo under a caller-side reference
    pub fn new(image_ref: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            image_ref: image_ref.into(),
            bytes,
        }
    }
}

/// Cooperative cancellation handle shared between caller and workers
///
/// Cancellation is checked before each photo starts; a photo skipped this
/// way contributes nothing to the aggregate and needs no rollback.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Fresh, uncancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the batch
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True once cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Default worker count: the number of available cores
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Assess a photo batch in parallel
///
/// Classifier instances come from `pool`, acquired per photo and returned
/// when the photo completes; size the pool to the worker count for full
/// utilization.
///
/// # Returns
///
/// An [`AssessmentSummary`] over every successfully analyzed photo, in
/// submission order, with per-image failure notes for the rest.
///
/// # Errors
///
/// Returns `AssessmentError::EmptyBatch` when not a single photo could be
/// analyzed — every image failed, was skipped by cancellation, or the
/// input list was empty.
pub fn assess_batch<C: Classifier>(
    inputs: &[ImageInput],
    pool: &ClassifierPool<C>,
    config: &AnalysisConfig,
    cancel: &CancelToken,
) -> Result<AssessmentSummary> {
    let started = Instant::now();
    let workers = config.workers.unwrap_or_else(default_workers);
    log::debug!(
        "Assessing batch of {} photo(s) on {} worker(s)",
        inputs.len(),
        workers
    );

    let run = || {
        inputs
            .par_iter()
            .map(|input| assess_one(input, pool, config, cancel))
            .collect::<Vec<std::result::Result<ImageAssessment, ImageFailure>>>()
    };

    // A scoped pool bounds parallelism to the configured worker count; if
    // the pool cannot be built, the batch still runs on the global pool.
    let outcomes = match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(thread_pool) => thread_pool.install(run),
        Err(e) => {
            log::warn!("falling back to the global worker pool: {e}");
            run()
        }
    };

    let mut images = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(assessment) => images.push(assessment),
            Err(failure) => failures.push(failure),
        }
    }

    let skipped = failures
        .iter()
        .filter(|f| f.kind == FailureKind::Skipped)
        .count();
    let failed = failures.len() - skipped;

    if images.is_empty() {
        return Err(AssessmentError::EmptyBatch { failed, skipped });
    }

    let metadata = AssessmentMetadata {
        analyzed: images.len(),
        failed,
        skipped,
        processing_time_ms: started.elapsed().as_secs_f32() * 1000.0,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Ok(AssessmentSummary::from_images(images, failures, metadata))
}

fn assess_one<C: Classifier>(
    input: &ImageInput,
    pool: &ClassifierPool<C>,
    config: &AnalysisConfig,
    cancel: &CancelToken,
) -> std::result::Result<ImageAssessment, ImageFailure> {
    if cancel.is_cancelled() {
        return Err(ImageFailure::skipped(&input.image_ref));
    }

    let mut classifier = pool.acquire();
    crate::assess_image(&input.image_ref, &input.bytes, &mut *classifier, config)
        .map_err(|error| ImageFailure::from_error(&input.image_ref, &error))
}
