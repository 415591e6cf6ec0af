//! The quote calculator.
//!
//! `compute_breakdown` keeps full floating-point precision; `QuoteBreakdown::rounded`
//! rounds each output field once, at the end.

use serde::Serialize;

use crate::error::Result;

use super::config::QuoteConfig;
use super::input::{ensure_finite, QuoteInput};

/// Full-precision derived values.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBreakdown {
    pub purity: f64,
    pub pure_gold_unit_price: f64,
    pub base_cost: f64,
    pub wastage_charge: f64,
    pub making_charge_amount: f64,
    pub subtotal: f64,
    pub gst_on_gold_amount: f64,
    pub gst_on_making_amount: f64,
    pub total_gst: f64,
    pub total_price: f64,

    pub jewelry_type: String,
    pub gold_rate_per_unit: f64,
    pub carat: f64,
    pub weight: f64,
    pub making_charge_percent: f64,
    pub wastage_percent: f64,
}

/// Display-ready quote. Serialized with the field names the receipt link uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub jewelry_type: String,
    #[serde(rename = "gold_rate")]
    pub gold_rate_per_unit: f64,
    pub carat: f64,
    #[serde(rename = "purity")]
    pub purity_percent: f64,
    pub weight: f64,
    pub base_cost: f64,
    pub wastage_charge: f64,
    #[serde(rename = "making_charge_amt")]
    pub making_charge_amount: f64,
    pub subtotal: f64,
    #[serde(rename = "gst_gold_amt")]
    pub gst_on_gold_amount: f64,
    #[serde(rename = "gst_making_amt")]
    pub gst_on_making_amount: f64,
    pub total_gst: f64,
    pub total_price: f64,
    #[serde(rename = "making_charge")]
    pub making_charge_percent: f64,
    #[serde(rename = "wastage")]
    pub wastage_percent: f64,
}

/// Round half away from zero to 2 decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl QuoteBreakdown {
    pub fn rounded(&self) -> QuoteResult {
        QuoteResult {
            jewelry_type: self.jewelry_type.clone(),
            gold_rate_per_unit: self.gold_rate_per_unit,
            carat: self.carat,
            purity_percent: round2(self.purity * 100.0),
            weight: self.weight,
            base_cost: round2(self.base_cost),
            wastage_charge: round2(self.wastage_charge),
            making_charge_amount: round2(self.making_charge_amount),
            subtotal: round2(self.subtotal),
            gst_on_gold_amount: round2(self.gst_on_gold_amount),
            gst_on_making_amount: round2(self.gst_on_making_amount),
            total_gst: round2(self.total_gst),
            total_price: round2(self.total_price),
            making_charge_percent: self.making_charge_percent,
            wastage_percent: self.wastage_percent,
        }
    }
}

/// Resolve defaults, validate, and compute at full precision.
pub fn compute_breakdown(input: &QuoteInput, config: &QuoteConfig) -> Result<QuoteBreakdown> {
    let carat = ensure_finite("carat", input.carat)?;
    let rate = ensure_finite("rate", input.gold_rate_per_unit)?;
    let weight = ensure_finite("weight", input.weight)?;

    let making_pct = match input.making_charge_percent {
        Some(v) => v,
        None => config.defaults.making_for(&input.jewelry_type)?,
    };
    let making_pct = ensure_finite("making", making_pct)?;
    let wastage_pct = match input.wastage_percent {
        Some(v) => v,
        None => config.defaults.wastage_for(&input.jewelry_type)?,
    };
    let wastage_pct = ensure_finite("wastage", wastage_pct)?;

    let purity = carat / 24.0;
    let pure_gold_unit_price = rate * purity;
    let base_cost = pure_gold_unit_price * weight;
    let wastage_charge = (wastage_pct / 100.0) * base_cost;
    let making_charge_amount = (making_pct / 100.0) * base_cost;
    let subtotal = base_cost + wastage_charge + making_charge_amount;

    let gst_on_gold_amount = (config.tax.gst_on_gold_percent / 100.0) * base_cost;
    let gst_on_making_amount = (config.tax.gst_on_making_percent / 100.0) * making_charge_amount;
    let total_gst = gst_on_gold_amount + gst_on_making_amount;
    let total_price = subtotal + total_gst;

    // Finite inputs can still overflow.
    for (field, v) in [
        ("base_cost", base_cost),
        ("wastage_charge", wastage_charge),
        ("making_charge_amt", making_charge_amount),
        ("subtotal", subtotal),
        ("gst_gold_amt", gst_on_gold_amount),
        ("gst_making_amt", gst_on_making_amount),
        ("total_gst", total_gst),
        ("total_price", total_price),
    ] {
        ensure_finite(field, v)?;
    }

    Ok(QuoteBreakdown {
        purity,
        pure_gold_unit_price,
        base_cost,
        wastage_charge,
        making_charge_amount,
        subtotal,
        gst_on_gold_amount,
        gst_on_making_amount,
        total_gst,
        total_price,
        jewelry_type: input.jewelry_type.clone(),
        gold_rate_per_unit: rate,
        carat,
        weight,
        making_charge_percent: making_pct,
        wastage_percent: wastage_pct,
    })
}

/// Compute a display-ready quote.
pub fn compute_quote(input: &QuoteInput, config: &QuoteConfig) -> Result<QuoteResult> {
    compute_breakdown(input, config).map(|b| b.rounded())
}
