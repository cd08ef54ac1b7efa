//! Classifier instance pooling
//!
//! Model handles are often expensive to load and not reentrant. The pool
//! loads a fixed set of instances once per batch and hands them to workers
//! through scoped guards: an instance is owned by exactly one worker at a
//! time and returns to the pool when the guard drops. Dropping the pool
//! releases every instance.

use std::ops::{Deref, DerefMut};
use std::sync::{Condvar, Mutex};

use super::Classifier;

/// Fixed-size pool of classifier instances
pub struct ClassifierPool<C> {
    idle: Mutex<Vec<C>>,
    available: Condvar,
}

impl<C: Classifier> ClassifierPool<C> {
    /// Pool over pre-built instances, typically one per worker
    ///
    /// # Panics
    ///
    /// Panics if `instances` is empty: an empty pool could never serve an
    /// acquisition.
    pub fn new(instances: Vec<C>) -> Self {
        assert!(
            !instances.is_empty(),
            "classifier pool requires at least one instance"
        );
        log::debug!("classifier pool ready with {} instance(s)", instances.len());
        Self {
            idle: Mutex::new(instances),
            available: Condvar::new(),
        }
    }

    /// Build `size` instances up front with `factory`
    ///
    /// Loading happens eagerly so a broken model surfaces before any photo
    /// is processed, not in the middle of a batch.
    pub fn with_factory<F, E>(size: usize, mut factory: F) -> std::result::Result<Self, E>
    where
        F: FnMut() -> std::result::Result<C, E>,
    {
        let mut instances = Vec::with_capacity(size);
        for _ in 0..size.max(1) {
            instances.push(factory()?);
        }
        Ok(Self::new(instances))
    }

    /// Borrow an instance, blocking until one is idle
    pub fn acquire(&self) -> PooledClassifier<'_, C> {
        let mut idle = self.idle.lock().expect("classifier pool lock poisoned");
        loop {
            if let Some(instance) = idle.pop() {
                return PooledClassifier {
                    pool: self,
                    instance: Some(instance),
                };
            }
            idle = self
                .available
                .wait(idle)
                .expect("classifier pool lock poisoned");
        }
    }

    /// Number of instances currently idle
    pub fn idle_count(&self) -> usize {
        self.idle.lock().expect("classifier pool lock poisoned").len()
    }

    fn release(&self, instance: C) {
        self.idle
            .lock()
            .expect("classifier pool lock poisoned")
            .push(instance);
        self.available.notify_one();
    }
}

/// Scoped exclusive access to a pooled classifier
///
/// Dereferences to the classifier; the instance returns to the pool when
/// the guard drops.
pub struct PooledClassifier<'a, C: Classifier> {
    pool: &'a ClassifierPool<C>,
    instance: Option<C>,
}

impl<C: Classifier> Deref for PooledClassifier<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.instance.as_ref().expect("instance present until drop")
    }
}

impl<C: Classifier> DerefMut for PooledClassifier<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.instance.as_mut().expect("instance present until drop")
    }
}

impl<C: Classifier> Drop for PooledClassifier<'_, C> {
    fn drop(&mut self) {
        if let Some(instance) = self.instance.take() {
            self.pool.release(instance);
        }
    }
}
