//! # Search: Linear Scan for Strong Pseudoprimes
//!
//! Walks the odd integers in `[3, bound)` in increasing order and classifies
//! each one against a fixed base. Results and progress are pushed to a
//! [ScanReporter] synchronously, so the ordering of events follows the
//! ordering of the candidates.
//!
//! ## Progress
//!
//! The range `[0, bound)` is split into `resolution` segments of equal width.
//! A progress event fires whenever the current candidate lies in a segment
//! beyond the last one reported. Progress is advisory and never affects which
//! numbers are found.

use crate::error::{Error, Result};
use crate::primality::GrhMiller;
use crate::pseudoprime::is_strong_pseudoprime_with;
use crate::traits::{PrimalityOracle, ScanReporter, SpspBase, SpspRefBase};
use std::fmt::Display;
use std::time::Instant;
use tracing::{debug, info};

pub const MIN_BASE: u64 = 2;
pub const MIN_BOUND: u64 = 5;
pub const MIN_RESOLUTION: u64 = 20;

pub const DEFAULT_BASE: u64 = 2;
pub const DEFAULT_BOUND: u64 = 100_000;
pub const DEFAULT_RESOLUTION: u64 = 10_000;

/// Validated parameters of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig<T> {
    /// The Miller-Rabin base to search under
    pub base: T,
    /// Exclusive upper limit of the scanned range
    pub bound: T,
    /// Number of progress segments
    pub resolution: u64,
}

fn is_below<T: SpspBase>(value: &T, min: u64) -> bool {
    T::from_u64(min).map_or(false, |min| value < &min)
}

fn at_least<T: SpspBase>(value: T, min: u64) -> T {
    match T::from_u64(min) {
        Some(min) if value < min => min,
        _ => value,
    }
}

impl<T: SpspBase> ScanConfig<T> {
    /// Create a config, rejecting values below the minimums
    /// ([MIN_BASE], [MIN_BOUND], [MIN_RESOLUTION]).
    pub fn new(base: T, bound: T, resolution: u64) -> Result<Self> {
        if is_below(&base, MIN_BASE) {
            return Err(Error::InvalidArgument {
                name: "base",
                reason: format!("must be at least {}", MIN_BASE),
            });
        }
        if is_below(&bound, MIN_BOUND) {
            return Err(Error::InvalidArgument {
                name: "bound",
                reason: format!("must be at least {}", MIN_BOUND),
            });
        }
        if resolution < MIN_RESOLUTION {
            return Err(Error::InvalidArgument {
                name: "resolution",
                reason: format!("must be at least {}", MIN_RESOLUTION),
            });
        }
        Ok(ScanConfig {
            base,
            bound,
            resolution,
        })
    }

    /// Create a config, raising values below the minimums to the minimums
    pub fn clamped(base: T, bound: T, resolution: u64) -> Self {
        ScanConfig {
            base: at_least(base, MIN_BASE),
            bound: at_least(bound, MIN_BOUND),
            resolution: resolution.max(MIN_RESOLUTION),
        }
    }
}

/// Tracks which progress segment a scan has reached
#[derive(Debug, Clone)]
pub struct SegmentTracker {
    width: f64,
    total: u64,
    current: u64,
}

impl SegmentTracker {
    /// Split `[0, range_end)` into `total` segments
    pub fn new(range_end: f64, total: u64) -> Self {
        let total = total.max(1);
        SegmentTracker {
            width: range_end / total as f64,
            total,
            current: 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Last segment reported, 0 before the first one
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Move the scan position, returning the 1-based segment index if the
    /// position is in a segment that has not been reported yet.
    pub fn advance(&mut self, position: f64) -> Option<u64> {
        let segment = ((position / self.width).floor() as u64)
            .saturating_add(1)
            .min(self.total);
        if segment > self.current {
            self.current = segment;
            Some(segment)
        } else {
            None
        }
    }
}

/// Reporter discarding every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl<T> ScanReporter<T> for NoopReporter {
    fn on_found(&mut self, _n: &T) {}
    fn on_progress(&mut self, _segment: u64, _total: u64, _elapsed_secs: f64) {}
    fn on_summary(&mut self, _count: usize, _elapsed_secs: f64) {}
}

/// Reporter emitting `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl<T: Display> ScanReporter<T> for LogReporter {
    fn on_found(&mut self, n: &T) {
        info!(n = %n, "strong pseudoprime found");
    }

    fn on_progress(&mut self, segment: u64, total: u64, elapsed_secs: f64) {
        debug!(
            segment,
            total,
            elapsed = format_args!("{:.2}s", elapsed_secs),
            "scan progress"
        );
    }

    fn on_summary(&mut self, count: usize, elapsed_secs: f64) {
        info!(
            count,
            elapsed = format_args!("{:.2}s", elapsed_secs),
            "scan complete"
        );
    }
}

/// Scan with a custom primality oracle, see [scan_with]
pub fn scan_with_oracle<T, O, R>(config: &ScanConfig<T>, oracle: &O, reporter: &mut R) -> Vec<T>
where
    T: SpspBase + Display,
    for<'r> &'r T: SpspRefBase<T>,
    O: PrimalityOracle<T>,
    R: ScanReporter<T> + ?Sized,
{
    debug!(
        base = %config.base,
        bound = %config.bound,
        resolution = config.resolution,
        "scanning for strong pseudoprimes"
    );

    let start = Instant::now();
    let mut tracker = SegmentTracker::new(
        config.bound.to_f64().unwrap_or(f64::MAX),
        config.resolution,
    );

    let two = T::one() + T::one();
    let mut found = Vec::new();
    let mut n = &two + T::one();
    while n < config.bound {
        if is_strong_pseudoprime_with(&n, &config.base, oracle) {
            reporter.on_found(&n);
            found.push(n.clone());
        }
        if let Some(segment) = tracker.advance(n.to_f64().unwrap_or(f64::MAX)) {
            reporter.on_progress(segment, tracker.total(), start.elapsed().as_secs_f64());
        }
        n = n + &two;
    }

    let elapsed = start.elapsed().as_secs_f64();
    debug!(found = found.len(), elapsed_secs = elapsed, "scan finished");
    reporter.on_summary(found.len(), elapsed);
    found
}

/// Find all strong pseudoprimes to `config.base` among the odd integers in
/// `[3, config.bound)`, in ascending order, reporting to `reporter`.
pub fn scan_with<T, R>(config: &ScanConfig<T>, reporter: &mut R) -> Vec<T>
where
    T: SpspBase + Display,
    for<'r> &'r T: SpspRefBase<T>,
    R: ScanReporter<T> + ?Sized,
{
    scan_with_oracle(config, &GrhMiller, reporter)
}

/// Find all strong pseudoprimes to `base` below `bound`, with the default
/// progress resolution and no reporting.
pub fn scan<T>(base: T, bound: T) -> Result<Vec<T>>
where
    T: SpspBase + Display,
    for<'r> &'r T: SpspRefBase<T>,
{
    let config = ScanConfig::new(base, bound, DEFAULT_RESOLUTION)?;
    Ok(scan_with(&config, &mut NoopReporter))
}
