//! Quote configuration: GST percentages and per-jewelry-type charge defaults.
//!
//! Built once at startup and shared read-only. Lookups are keyed by the
//! upper-cased jewelry type name, matching the `DEFAULT_MAKING_<TYPE>` and
//! `DEFAULT_WASTAGE_<TYPE>` variable naming.

use std::collections::HashMap;

use crate::error::{GoldCalcError, Result};

pub const MAKING_PREFIX: &str = "DEFAULT_MAKING_";
pub const WASTAGE_PREFIX: &str = "DEFAULT_WASTAGE_";

pub const DEFAULT_GST_GOLD_PERCENT: f64 = 3.0;
pub const DEFAULT_GST_MAKING_PERCENT: f64 = 5.0;

pub const FALLBACK_MAKING_PERCENT: f64 = 20.0;
pub const FALLBACK_WASTAGE_PERCENT: f64 = 10.0;

/// Lookup key for a jewelry type.
pub fn type_key(jewelry_type: &str) -> String {
    jewelry_type.to_uppercase()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxConfig {
    pub gst_on_gold_percent: f64,
    pub gst_on_making_percent: f64,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            gst_on_gold_percent: DEFAULT_GST_GOLD_PERCENT,
            gst_on_making_percent: DEFAULT_GST_MAKING_PERCENT,
        }
    }
}

/// What to do when a jewelry type has no configured default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DefaultPolicy {
    /// Missing default is a configuration error.
    #[default]
    Strict,
    /// Missing default resolves to fixed constants.
    Fallback { making: f64, wastage: f64 },
}

impl DefaultPolicy {
    pub fn fallback() -> Self {
        DefaultPolicy::Fallback {
            making: FALLBACK_MAKING_PERCENT,
            wastage: FALLBACK_WASTAGE_PERCENT,
        }
    }
}

/// Per-type default making/wastage percentages.
#[derive(Debug, Clone, Default)]
pub struct ChargeDefaults {
    making: HashMap<String, f64>,
    wastage: HashMap<String, f64>,
    policy: DefaultPolicy,
}

impl ChargeDefaults {
    pub fn new(policy: DefaultPolicy) -> Self {
        Self {
            making: HashMap::new(),
            wastage: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DefaultPolicy {
        self.policy
    }

    pub fn set_making(&mut self, jewelry_type: &str, percent: f64) {
        self.making.insert(type_key(jewelry_type), percent);
    }

    pub fn set_wastage(&mut self, jewelry_type: &str, percent: f64) {
        self.wastage.insert(type_key(jewelry_type), percent);
    }

    pub fn with_making(mut self, jewelry_type: &str, percent: f64) -> Self {
        self.set_making(jewelry_type, percent);
        self
    }

    pub fn with_wastage(mut self, jewelry_type: &str, percent: f64) -> Self {
        self.set_wastage(jewelry_type, percent);
        self
    }

    /// Configured type keys, sorted, for startup logging.
    pub fn known_types(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .making
            .keys()
            .chain(self.wastage.keys())
            .cloned()
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    pub fn making_for(&self, jewelry_type: &str) -> Result<f64> {
        let key = type_key(jewelry_type);
        match (self.making.get(&key), self.policy) {
            (Some(v), _) => Ok(*v),
            (None, DefaultPolicy::Fallback { making, .. }) => Ok(making),
            (None, DefaultPolicy::Strict) => Err(GoldCalcError::MissingConfig(format!(
                "{MAKING_PREFIX}{key} is not set"
            ))),
        }
    }

    pub fn wastage_for(&self, jewelry_type: &str) -> Result<f64> {
        let key = type_key(jewelry_type);
        match (self.wastage.get(&key), self.policy) {
            (Some(v), _) => Ok(*v),
            (None, DefaultPolicy::Fallback { wastage, .. }) => Ok(wastage),
            (None, DefaultPolicy::Strict) => Err(GoldCalcError::MissingConfig(format!(
                "{WASTAGE_PREFIX}{key} is not set"
            ))),
        }
    }
}

/// Everything the calculator reads besides the request itself.
#[derive(Debug, Clone, Default)]
pub struct QuoteConfig {
    pub tax: TaxConfig,
    pub defaults: ChargeDefaults,
}
