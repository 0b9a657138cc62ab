// Tempera: temperature state and range classification for UI widgets
// Copyright 2024

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod delta;
mod error;

pub use delta::Delta;
pub use error::{RangeError, Result};

/// Temperature a fresh [`TemperatureCell`] starts at.
pub const DEFAULT_TEMPERATURE: i64 = 68;

/// Category used when no threshold applies.
pub const FALLBACK_RANGE: TempRange = TempRange::Cool;

/// The standard threshold table, strictly descending by lower bound.
pub const DEFAULT_THRESHOLDS: [Threshold; 4] = [
    Threshold::new(80, TempRange::VeryHot),
    Threshold::new(70, TempRange::Hot),
    Threshold::new(60, TempRange::Warm),
    Threshold::new(50, TempRange::Mild),
];

/// Display category of a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TempRange {
    VeryHot,
    Hot,
    Warm,
    Mild,
    Cool,
}

impl TempRange {
    pub const ALL: [TempRange; 5] = [
        TempRange::VeryHot,
        TempRange::Hot,
        TempRange::Warm,
        TempRange::Mild,
        TempRange::Cool,
    ];

    /// Label of the category, also used as its CSS class.
    pub const fn as_str(self) -> &'static str {
        match self {
            TempRange::VeryHot => "very-hot",
            TempRange::Hot => "hot",
            TempRange::Warm => "warm",
            TempRange::Mild => "mild",
            TempRange::Cool => "cool",
        }
    }
}

impl fmt::Display for TempRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(lower bound, category)` entry of a threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Threshold {
    pub lower_bound: i64,
    pub range: TempRange,
}

impl Threshold {
    pub const fn new(lower_bound: i64, range: TempRange) -> Self {
        Threshold { lower_bound, range }
    }
}

/// Classify `value` against the standard threshold table.
pub fn classify(value: i64) -> TempRange {
    scan(&DEFAULT_THRESHOLDS, FALLBACK_RANGE, value)
}

/// Apply `delta` to `current`.
///
/// The value is unbounded apart from saturating at the limits of `i64`.
pub fn apply_delta(current: i64, delta: Delta) -> i64 {
    current.saturating_add(delta.get())
}

// First entry whose lower bound is met wins, so the highest qualifying
// bound takes precedence in a descending table.
fn scan(thresholds: &[Threshold], fallback: TempRange, value: i64) -> TempRange {
    thresholds
        .iter()
        .find(|threshold| value >= threshold.lower_bound)
        .map_or(fallback, |threshold| threshold.range)
}

/// Configuration for a range classifier and its counter.
///
/// Uses a builder pattern; the defaults describe the standard widget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RangeConfig {
    thresholds: Vec<Threshold>, // Checked first to last
    fallback: TempRange,        // Used below the lowest bound
    default_temperature: i64,   // Initial counter value
}

impl Default for RangeConfig {
    fn default() -> Self {
        RangeConfig {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            fallback: FALLBACK_RANGE,
            default_temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl RangeConfig {
    /// Create a new configuration with the standard table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the threshold table.
    pub fn with_thresholds(mut self, thresholds: Vec<Threshold>) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the category used below the lowest bound.
    pub fn with_fallback(mut self, fallback: TempRange) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the initial counter value.
    pub fn with_default_temperature(mut self, temperature: i64) -> Self {
        self.default_temperature = temperature;
        self
    }

    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    pub fn fallback(&self) -> TempRange {
        self.fallback
    }

    pub fn default_temperature(&self) -> i64 {
        self.default_temperature
    }

    /// Check that the table is non-empty and strictly descending.
    pub fn validate(&self) -> Result<()> {
        if self.thresholds.is_empty() {
            return Err(RangeError::EmptyTable);
        }

        for pair in self.thresholds.windows(2) {
            let (previous, next) = (pair[0].lower_bound, pair[1].lower_bound);
            if previous == next {
                return Err(RangeError::DuplicateBound { bound: previous });
            }
            if previous < next {
                return Err(RangeError::NotDescending { previous, next });
            }
        }

        Ok(())
    }

    /// Parse a JSON configuration and validate it.
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RangeConfig =
            serde_json::from_str(json).map_err(|e| RangeError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Maps a temperature to its display category with a linear scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeClassifier {
    thresholds: Vec<Threshold>,
    fallback: TempRange,
}

impl Default for RangeClassifier {
    fn default() -> Self {
        RangeClassifier {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            fallback: FALLBACK_RANGE,
        }
    }
}

impl RangeClassifier {
    /// Create a classifier from a validated copy of `config`'s table.
    pub fn new(config: &RangeConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            log::debug!("rejecting threshold table {:?}: {}", config.thresholds, e);
            return Err(e);
        }

        Ok(RangeClassifier {
            thresholds: config.thresholds.clone(),
            fallback: config.fallback,
        })
    }

    /// Return the category of the first threshold whose lower bound is
    /// at most `value`, or the fallback category if there is none.
    pub fn classify(&self, value: i64) -> TempRange {
        scan(&self.thresholds, self.fallback, value)
    }

    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    pub fn fallback(&self) -> TempRange {
        self.fallback
    }
}

/// The counter behind the widget.
///
/// Every mutation reads the value held at the moment it is applied, so a
/// burst of queued updates composes without losing any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureCell {
    value: i64,
    initial: i64,
}

impl Default for TemperatureCell {
    fn default() -> Self {
        TemperatureCell::new(DEFAULT_TEMPERATURE)
    }
}

impl TemperatureCell {
    /// Create a cell holding `initial`.
    pub fn new(initial: i64) -> Self {
        TemperatureCell {
            value: initial,
            initial,
        }
    }

    /// Create a cell holding the configuration's default temperature.
    pub fn from_config(config: &RangeConfig) -> Self {
        TemperatureCell::new(config.default_temperature)
    }

    /// Get the current temperature.
    pub fn get(&self) -> i64 {
        self.value
    }

    /// Add `delta` to the current temperature and return the new value.
    pub fn apply_delta(&mut self, delta: Delta) -> i64 {
        self.update(|current| apply_delta(current, delta))
    }

    pub fn increment(&mut self) -> i64 {
        self.apply_delta(Delta::UP)
    }

    pub fn decrement(&mut self) -> i64 {
        self.apply_delta(Delta::DOWN)
    }

    /// Replace the temperature with `f(current)` and return the new value.
    pub fn update<F>(&mut self, f: F) -> i64
    where
        F: FnOnce(i64) -> i64,
    {
        let previous = self.value;
        self.value = f(previous);
        log::trace!("temperature {} -> {}", previous, self.value);
        self.value
    }

    /// Return to the value the cell was created with.
    pub fn reset(&mut self) {
        self.value = self.initial;
    }
}

/// Thread-safe version of the temperature cell.
///
/// Each operation is a single read-modify-write under the lock, so updates
/// from several threads never overwrite one another.
#[derive(Debug, Default)]
pub struct ThreadSafeTemperatureCell {
    cell: Mutex<TemperatureCell>,
}

impl ThreadSafeTemperatureCell {
    /// Create a new thread-safe cell holding `initial`.
    pub fn new(initial: i64) -> Self {
        ThreadSafeTemperatureCell {
            cell: Mutex::new(TemperatureCell::new(initial)),
        }
    }

    pub fn from_config(config: &RangeConfig) -> Self {
        ThreadSafeTemperatureCell {
            cell: Mutex::new(TemperatureCell::from_config(config)),
        }
    }

    pub fn get(&self) -> i64 {
        self.lock().get()
    }

    pub fn apply_delta(&self, delta: Delta) -> i64 {
        self.lock().apply_delta(delta)
    }

    pub fn increment(&self) -> i64 {
        self.lock().increment()
    }

    pub fn decrement(&self) -> i64 {
        self.lock().decrement()
    }

    pub fn update<F>(&self, f: F) -> i64
    where
        F: FnOnce(i64) -> i64,
    {
        self.lock().update(f)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    // The state is a plain integer and stays consistent even if a holder
    // panicked mid-update.
    fn lock(&self) -> MutexGuard<'_, TemperatureCell> {
        self.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
