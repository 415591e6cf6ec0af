//! Tera templates embedded into the binary.

use std::collections::BTreeMap;
use std::error::Error as _;

use serde::Serialize;
use tera::{Context, Tera};

use goldcalc_core::error::{GoldCalcError, Result};
use goldcalc_core::quote::QuoteResult;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const RECEIPT_TEMPLATE: &str = include_str!("../../templates/receipt.html");

/// Everything the form page shows. At most one of `result`/`error` is set.
#[derive(Debug, Default, Serialize)]
pub struct IndexPage<'a> {
    pub result: Option<&'a QuoteResult>,
    pub error: Option<&'a str>,
    pub receipt_href: Option<String>,
    pub jewelry_types: Vec<String>,
}

pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("index.html", INDEX_TEMPLATE),
            ("receipt.html", RECEIPT_TEMPLATE),
        ])
        .map_err(tera_err)?;
        Ok(Self { tera })
    }

    pub fn render_index(&self, page: &IndexPage<'_>) -> Result<String> {
        let ctx = Context::from_serialize(page).map_err(tera_err)?;
        self.tera.render("index.html", &ctx).map_err(tera_err)
    }

    /// `fields` is the echoed receipt record, timestamp included.
    pub fn render_receipt(&self, fields: &BTreeMap<String, String>) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("result", fields);
        self.tera.render("receipt.html", &ctx).map_err(tera_err)
    }
}

/// Tera nests the useful message in the source chain.
fn tera_err(e: tera::Error) -> GoldCalcError {
    let mut msg = e.to_string();
    let mut src = e.source();
    while let Some(s) = src {
        msg.push_str(": ");
        msg.push_str(&s.to_string());
        src = s.source();
    }
    GoldCalcError::Render(msg)
}
