//! Quote form record and the numeric validation gate.

use serde::Deserialize;

use crate::error::{GoldCalcError, Result};

pub const DEFAULT_JEWELRY_TYPE: &str = "Ring";

/// Validated calculator input. Making/wastage stay `None` until resolved
/// against the configured per-type defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteInput {
    pub carat: f64,
    pub gold_rate_per_unit: f64,
    pub weight: f64,
    pub jewelry_type: String,
    pub making_charge_percent: Option<f64>,
    pub wastage_percent: Option<f64>,
}

/// Raw form fields as submitted (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub carat: Option<String>,
    #[serde(default)]
    pub rate: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default, rename = "type")]
    pub jewelry_type: Option<String>,
    #[serde(default)]
    pub making: Option<String>,
    #[serde(default)]
    pub wastage: Option<String>,
}

impl QuoteForm {
    /// Build from decoded `key=value` pairs. A repeated field keeps its first
    /// value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = QuoteForm::default();
        for (k, v) in pairs {
            let slot = match k.as_ref() {
                "carat" => &mut form.carat,
                "rate" => &mut form.rate,
                "weight" => &mut form.weight,
                "type" => &mut form.jewelry_type,
                "making" => &mut form.making,
                "wastage" => &mut form.wastage,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(v.into());
            }
        }
        form
    }

    /// Parse every numeric field.
    ///
    /// Absent carat/rate/weight read as zero; a field that is present but not a
    /// finite number (blank included) is rejected. Blank making/wastage means
    /// "use the configured default".
    pub fn parse(&self) -> Result<QuoteInput> {
        Ok(QuoteInput {
            carat: required_or_zero("carat", self.carat.as_deref())?,
            gold_rate_per_unit: required_or_zero("rate", self.rate.as_deref())?,
            weight: required_or_zero("weight", self.weight.as_deref())?,
            jewelry_type: self
                .jewelry_type
                .clone()
                .unwrap_or_else(|| DEFAULT_JEWELRY_TYPE.to_string()),
            making_charge_percent: optional("making", self.making.as_deref())?,
            wastage_percent: optional("wastage", self.wastage.as_deref())?,
        })
    }
}

fn required_or_zero(field: &'static str, raw: Option<&str>) -> Result<f64> {
    match raw {
        None => Ok(0.0),
        Some(s) => parse_number(field, s),
    }
}

fn optional(field: &'static str, raw: Option<&str>) -> Result<Option<f64>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_number(field, s).map(Some),
    }
}

/// Parse a finite `f64`, ignoring surrounding whitespace.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GoldCalcError::invalid(field, format!("not a number: {raw:?}")))?;
    ensure_finite(field, v)
}

pub(crate) fn ensure_finite(field: &'static str, v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GoldCalcError::invalid(field, format!("not finite: {v}")))
    }
}
