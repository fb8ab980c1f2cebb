//! Checker options and cooperative cancellation.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct CheckerOptions {
    /// Check test classes on the rayon pool.
    pub parallel: bool,
    /// Test classes whose simple name matches are skipped.
    pub exclude: GlobSet,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            exclude: GlobSet::empty(),
        }
    }
}

impl CheckerOptions {
    /// Options with `patterns` compiled into the exclude set.
    pub fn with_exclude<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern.as_ref())?);
        }
        self.exclude = builder.build()?;
        Ok(self)
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn is_excluded(&self, class_name: &str) -> bool {
        !self.exclude.is_empty() && self.exclude.is_match(class_name)
    }
}

/// Shared flag checked before each test class. Classes already checked keep
/// their findings.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
