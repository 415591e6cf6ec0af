#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::BTreeMap;

use goldcalc_server::render::markup::{decode_entities, flatten, Line, LineStyle};
use goldcalc_server::render::pdf::fit_to_width;
use goldcalc_server::render::{PdfRenderer, Templates, TextLayoutPdf};

fn body(cells: &[&str]) -> Line {
    Line {
        style: LineStyle::Body,
        cells: cells.iter().map(|c| c.to_string()).collect(),
    }
}

#[test]
fn flatten_drops_head_and_splits_cells() {
    let html = r#"<!DOCTYPE html><html><head><title>T</title><style>td { x: y }</style></head>
<body>
  <h1>Jewellery   Receipt</h1>
  <p>Date: 01-Jan-2026 10:00:00</p>
  <table>
    <tr><td>Base cost</td><td>Rs. 5500.0</td></tr>
    <tr><td>Wastage (2%)</td>
        <td>Rs. 110.0</td></tr>
  </table>
</body></html>"#;

    let lines = flatten(html);
    assert_eq!(
        lines,
        vec![
            Line {
                style: LineStyle::Heading,
                cells: vec!["Jewellery Receipt".into()],
            },
            body(&["Date: 01-Jan-2026 10:00:00"]),
            body(&["Base cost", "Rs. 5500.0"]),
            body(&["Wastage (2%)", "Rs. 110.0"]),
        ]
    );
}

#[test]
fn entities_are_decoded() {
    assert_eq!(decode_entities("a &amp; b &lt;c&gt; &#x27;d&#39; &#x2F;e"), "a & b <c> 'd' /e");
    assert_eq!(decode_entities("AT&T &bogus; &"), "AT&T &bogus; &");
}

#[tokio::test]
async fn receipt_template_renders_to_pdf() {
    let templates = Templates::new().unwrap();
    let mut fields = BTreeMap::new();
    fields.insert("jewelry_type".to_string(), "Ring <b>".to_string());
    fields.insert("total_price".to_string(), "6352.5".to_string());
    fields.insert("timestamp".to_string(), "17-Oct-2026 09:30:00".to_string());

    let html = templates.render_receipt(&fields).unwrap();
    assert!(html.contains("Ring &lt;b&gt;"));
    assert!(html.contains("Rs. 6352.5"));
    assert!(html.contains("Rs. -"));

    let lines = flatten(&html);
    assert!(lines.contains(&body(&["Jewellery type", "Ring <b>"])));

    let pdf = TextLayoutPdf::default().render_pdf(&html).await.unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn long_documents_paginate_without_error() {
    let lines: Vec<Line> = (0..200).map(|i| body(&[&format!("line {i}")])).collect();
    let bytes = TextLayoutPdf::new("long").layout(&lines).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn empty_markup_still_produces_a_document() {
    let bytes = TextLayoutPdf::default().layout(&flatten("")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn long_cells_are_truncated_to_the_column() {
    let long = "Necklace ".repeat(40);
    let fitted = fit_to_width(&long, 92.0, 11.0);
    assert!(fitted.ends_with("..."));
    assert!(fitted.chars().count() < long.chars().count());
    // 92mm at 11pt holds about 43 average glyphs.
    assert!(fitted.chars().count() <= 43);

    assert_eq!(fit_to_width("Rs. 6352.5", 92.0, 11.0), "Rs. 6352.5");
    assert_eq!(fit_to_width("anything", 0.0, 11.0), "");
}

#[test]
fn oversized_values_still_lay_out() {
    let long = "x".repeat(5_000);
    let lines = vec![
        body(&["Jewellery type", &long]),
        body(&[&long, "Rs. 1.0"]),
        Line {
            style: LineStyle::Heading,
            cells: vec![long.clone()],
        },
    ];
    let bytes = TextLayoutPdf::default().layout(&lines).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
