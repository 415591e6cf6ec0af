#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use goldcalc_core::error::ClientCode;
use goldcalc_core::quote::{compute_quote, QuoteConfig, QuoteForm, QuoteInput};
use goldcalc_core::GoldCalcError;

fn form(carat: &str, rate: &str, weight: &str) -> QuoteForm {
    QuoteForm {
        carat: Some(carat.into()),
        rate: Some(rate.into()),
        weight: Some(weight.into()),
        ..QuoteForm::default()
    }
}

#[test]
fn absent_fields_take_form_defaults() {
    let input = QuoteForm::default().parse().unwrap();
    assert_eq!(
        input,
        QuoteInput {
            carat: 0.0,
            gold_rate_per_unit: 0.0,
            weight: 0.0,
            jewelry_type: "Ring".into(),
            making_charge_percent: None,
            wastage_percent: None,
        }
    );
}

#[test]
fn whitespace_around_numbers_is_ignored() {
    let input = form(" 22 ", "6000\t", "\n10").parse().unwrap();
    assert_eq!(input.carat, 22.0);
    assert_eq!(input.gold_rate_per_unit, 6000.0);
    assert_eq!(input.weight, 10.0);
}

#[test]
fn every_numeric_field_rejects_garbage() {
    let cases: [(&str, fn(&mut QuoteForm)); 5] = [
        ("carat", |f| f.carat = Some("22k".into())),
        ("rate", |f| f.rate = Some("six thousand".into())),
        ("weight", |f| f.weight = Some("inf".into())),
        ("making", |f| f.making = Some("10%".into())),
        ("wastage", |f| f.wastage = Some("-inf".into())),
    ];

    for (field, mutate) in cases {
        let mut f = form("22", "6000", "10");
        mutate(&mut f);
        match f.parse() {
            Err(GoldCalcError::InvalidInput { field: got, .. }) => assert_eq!(got, field),
            other => panic!("{field}: expected invalid input, got {other:?}"),
        }
    }
}

#[test]
fn invalid_input_maps_to_plain_language_message() {
    let err = form("x", "6000", "10").parse().unwrap_err();
    assert_eq!(err.client_code(), ClientCode::InvalidInput);
    assert_eq!(
        err.client_code().message(),
        "Invalid input. Please enter valid numbers."
    );
}

#[test]
fn missing_default_maps_to_generic_message() {
    let input = form("22", "6000", "10").parse().unwrap();
    let err = compute_quote(&input, &QuoteConfig::default()).unwrap_err();
    assert!(matches!(err, GoldCalcError::MissingConfig(ref m) if m == "DEFAULT_MAKING_RING is not set"));
    assert_eq!(err.client_code().message(), "An error occurred. Check logs.");
}

#[test]
fn explicit_charges_never_consult_defaults() {
    let mut f = form("22", "6000", "10");
    f.jewelry_type = Some("Tiara".into());
    f.making = Some("8".into());
    f.wastage = Some("1".into());
    let input = f.parse().unwrap();
    let res = compute_quote(&input, &QuoteConfig::default()).unwrap();
    assert_eq!(res.making_charge_percent, 8.0);
    assert_eq!(res.wastage_percent, 1.0);
}

#[test]
fn non_finite_programmatic_input_is_rejected() {
    let input = QuoteInput {
        carat: f64::NAN,
        gold_rate_per_unit: 6000.0,
        weight: 10.0,
        jewelry_type: "Ring".into(),
        making_charge_percent: Some(10.0),
        wastage_percent: Some(2.0),
    };
    let err = compute_quote(&input, &QuoteConfig::default()).unwrap_err();
    assert_eq!(err.client_code(), ClientCode::InvalidInput);
}

#[test]
fn repeated_pairs_keep_first_value() {
    let f = QuoteForm::from_pairs([
        ("carat", "22"),
        ("carat", "18"),
        ("rate", "6000"),
        ("weight", "10"),
        ("submit", "Calculate"),
        ("type", "Chain"),
        ("type", "Ring"),
    ]);
    assert_eq!(f.carat.as_deref(), Some("22"));
    assert_eq!(f.jewelry_type.as_deref(), Some("Chain"));
    assert!(f.making.is_none());

    let input = f.parse().unwrap();
    assert_eq!(input.carat, 22.0);
}

#[test]
fn overflowing_amounts_are_invalid_input() {
    let input = QuoteInput {
        carat: 24.0,
        gold_rate_per_unit: 1e300,
        weight: 1e300,
        jewelry_type: "Ring".into(),
        making_charge_percent: Some(10.0),
        wastage_percent: Some(2.0),
    };
    match compute_quote(&input, &QuoteConfig::default()) {
        Err(GoldCalcError::InvalidInput { field, .. }) => assert_eq!(field, "base_cost"),
        other => panic!("expected invalid input, got {other:?}"),
    }
}
