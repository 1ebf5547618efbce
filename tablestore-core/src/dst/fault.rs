//! Fault injection
//!
//! TigerStyle: Faults are configured up front and drawn from a seeded RNG,
//! so a failing run replays exactly.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use super::rng::DeterministicRng;
use crate::constants::DST_FAULTS_COUNT_MAX;

/// Kinds of backend failure that can be injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultType {
    /// `get` and `count` fail with a read error
    ReadFail,
    /// `put`, `update` and `delete` fail with a write error
    WriteFail,
}

impl FaultType {
    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadFail => "read_fail",
            Self::WriteFail => "write_fail",
        }
    }
}

impl fmt::Display for FaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fault and how often it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultConfig {
    /// Kind of fault
    pub fault_type: FaultType,
    /// Chance per eligible operation, 0.0..=1.0
    pub probability: f64,
}

impl FaultConfig {
    /// Create a fault configuration.
    ///
    /// # Panics
    /// Panics if `probability` is outside `0.0..=1.0`.
    #[must_use]
    pub fn new(fault_type: FaultType, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "fault probability {} must be within 0.0..=1.0",
            probability
        );
        Self {
            fault_type,
            probability,
        }
    }
}

/// Decides, deterministically, when a fault fires.
///
/// Shared between tasks behind an `Arc`.
#[derive(Debug)]
pub struct FaultInjector {
    rng: Mutex<DeterministicRng>,
    faults: Vec<FaultConfig>,
    injected: AtomicU64,
}

impl FaultInjector {
    /// Create an injector with no faults configured.
    #[must_use]
    pub fn new(rng: DeterministicRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            faults: Vec::new(),
            injected: AtomicU64::new(0),
        }
    }

    /// Add a fault.
    ///
    /// # Panics
    /// Panics if more than `DST_FAULTS_COUNT_MAX` faults are configured.
    #[must_use]
    pub fn with_fault(mut self, fault: FaultConfig) -> Self {
        assert!(
            self.faults.len() < DST_FAULTS_COUNT_MAX,
            "fault count exceeds max {}",
            DST_FAULTS_COUNT_MAX
        );
        self.faults.push(fault);
        self
    }

    /// Roll for `fault_type`.
    ///
    /// Every matching configuration is rolled, so the RNG advances the same
    /// way regardless of which one fires.
    pub fn should_inject(&self, fault_type: FaultType) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let mut fire = false;
        for fault in self.faults.iter().filter(|f| f.fault_type == fault_type) {
            fire |= rng.next_bool(fault.probability);
        }

        if fire {
            self.injected.fetch_add(1, Ordering::Relaxed);
        }
        fire
    }

    /// Number of faults fired so far.
    #[must_use]
    pub fn injected_count(&self) -> u64 {
        self.injected.load(Ordering::Relaxed)
    }
}
