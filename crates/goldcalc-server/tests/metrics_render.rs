#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use goldcalc_server::obs::metrics::GoldcalcMetrics;

#[test]
fn counters_render_sorted_labels() {
    let m = GoldcalcMetrics::default();
    m.requests.inc(&[("status", "200"), ("method", "POST"), ("endpoint", "/")]);
    m.requests.inc(&[("endpoint", "/"), ("method", "POST"), ("status", "200")]);
    m.requests.inc(&[("endpoint", "/receipt"), ("method", "GET"), ("status", "500")]);

    assert_eq!(
        m.requests.get(&[("endpoint", "/"), ("method", "POST"), ("status", "200")]),
        2
    );

    let out = m.render();
    assert!(out.contains("# TYPE goldcalc_requests_total counter"));
    assert!(out.contains(r#"goldcalc_requests_total{endpoint="/",method="POST",status="200"} 2"#));
    assert!(out.contains(r#"goldcalc_requests_total{endpoint="/receipt",method="GET",status="500"} 1"#));
}

#[test]
fn histogram_buckets_are_cumulative_seconds() {
    let m = GoldcalcMetrics::default();
    m.request_latency
        .observe(&[("endpoint", "/")], Duration::from_millis(3));
    m.request_latency
        .observe(&[("endpoint", "/")], Duration::from_secs(2));

    let out = m.render();
    assert!(out.contains("# TYPE goldcalc_request_latency_seconds histogram"));
    assert!(out.contains(r#"goldcalc_request_latency_seconds_bucket{endpoint="/",le="0.005"} 1"#));
    assert!(out.contains(r#"goldcalc_request_latency_seconds_bucket{endpoint="/",le="1"} 1"#));
    assert!(out.contains(r#"goldcalc_request_latency_seconds_bucket{endpoint="/",le="2.5"} 2"#));
    assert!(out.contains(r#"goldcalc_request_latency_seconds_bucket{endpoint="/",le="+Inf"} 2"#));
    assert!(out.contains(r#"goldcalc_request_latency_seconds_sum{endpoint="/"} 2.003"#));
    assert!(out.contains(r#"goldcalc_request_latency_seconds_count{endpoint="/"} 2"#));
}

#[test]
fn label_values_are_escaped() {
    let m = GoldcalcMetrics::default();
    m.quotes.inc(&[("outcome", "a\"b\\c\n")]);
    let out = m.render();
    assert!(out.contains(r#"goldcalc_quotes_total{outcome="a\"b\\c\n"} 1"#));
}

#[test]
fn draining_gauge() {
    let m = GoldcalcMetrics::default();
    assert!(m.render().contains("goldcalc_draining 0"));
    m.set_draining();
    assert!(m.is_draining());
    assert!(m.render().contains("goldcalc_draining 1"));
}
