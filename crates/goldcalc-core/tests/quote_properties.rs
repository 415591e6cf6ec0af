//! Calculator invariants.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use proptest::prelude::*;

use goldcalc_core::quote::{
    compute_breakdown, compute_quote, round2, ChargeDefaults, DefaultPolicy, QuoteConfig,
    QuoteInput, TaxConfig,
};

fn config() -> QuoteConfig {
    QuoteConfig {
        tax: TaxConfig::default(),
        defaults: ChargeDefaults::new(DefaultPolicy::Strict)
            .with_making("Ring", 12.5)
            .with_wastage("Ring", 4.0),
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn totals_are_sums_of_parts(
        carat in 0.0f64..=24.0,
        rate in 0.0f64..200_000.0,
        weight in 0.0f64..1_000.0,
        making in 0.0f64..50.0,
        wastage in 0.0f64..30.0,
    ) {
        let input = QuoteInput {
            carat,
            gold_rate_per_unit: rate,
            weight,
            jewelry_type: "Ring".into(),
            making_charge_percent: Some(making),
            wastage_percent: Some(wastage),
        };
        let b = compute_breakdown(&input, &config()).unwrap();

        prop_assert!(close(b.total_price, b.subtotal + b.total_gst));
        prop_assert!(close(b.subtotal, b.base_cost + b.wastage_charge + b.making_charge_amount));
        prop_assert!(close(b.total_gst, b.gst_on_gold_amount + b.gst_on_making_amount));

        let r = b.rounded();
        prop_assert_eq!(r.purity_percent, round2(carat / 24.0 * 100.0));
    }

    #[test]
    fn defaults_resolution_is_deterministic(
        carat in 0.0f64..=24.0,
        rate in 0.0f64..200_000.0,
        weight in 0.0f64..1_000.0,
    ) {
        let input = QuoteInput {
            carat,
            gold_rate_per_unit: rate,
            weight,
            jewelry_type: "ring".into(),
            making_charge_percent: None,
            wastage_percent: None,
        };
        let cfg = config();
        let a = compute_quote(&input, &cfg).unwrap();
        let b = compute_quote(&input, &cfg).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.making_charge_percent, 12.5);
        prop_assert_eq!(a.wastage_percent, 4.0);
    }
}

#[test]
fn full_purity_at_24_carat() {
    let input = QuoteInput {
        carat: 24.0,
        gold_rate_per_unit: 1.0,
        weight: 1.0,
        jewelry_type: "Ring".into(),
        making_charge_percent: Some(0.0),
        wastage_percent: Some(0.0),
    };
    let r = compute_quote(&input, &config()).unwrap();
    assert_eq!(r.purity_percent, 100.0);
}

#[test]
fn rounding_happens_once_per_field() {
    let input = QuoteInput {
        carat: 8.0,
        gold_rate_per_unit: 1.0,
        weight: 1.0,
        jewelry_type: "Ring".into(),
        making_charge_percent: Some(0.0),
        wastage_percent: Some(0.0),
    };
    let cfg = QuoteConfig {
        tax: TaxConfig { gst_on_gold_percent: 0.0, gst_on_making_percent: 0.0 },
        defaults: ChargeDefaults::default(),
    };
    let b = compute_breakdown(&input, &cfg).unwrap();
    let r = b.rounded();
    assert_eq!(r.base_cost, 0.33);
    assert_eq!(r.purity_percent, 33.33);
    assert_eq!(r.total_price, round2(b.total_price));
}
