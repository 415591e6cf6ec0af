//! Server config loader (environment-sourced, strict parsing).
//!
//! Values are read once at startup. `load_from_env` reads the process
//! environment; `load_from_vars` takes an explicit variable set so tests do not
//! depend on (or mutate) the real environment.

pub mod schema;

use std::collections::BTreeMap;

use goldcalc_core::error::{GoldCalcError, Result};
use goldcalc_core::quote::config::{MAKING_PREFIX, WASTAGE_PREFIX};
use goldcalc_core::quote::{ChargeDefaults, DefaultPolicy, QuoteConfig, TaxConfig};

pub use schema::{ListenSection, LogFormat, LoggingConfig, ServerConfig};

pub const ENV_GST_GOLD: &str = "DEFAULT_GST_GOLD";
pub const ENV_GST_MAKING: &str = "DEFAULT_GST_MAKING";
pub const ENV_DEFAULT_POLICY: &str = "GOLDCALC_DEFAULT_POLICY";
pub const ENV_LOG_LEVEL: &str = "GOLDCALC_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "GOLDCALC_LOG_FORMAT";
pub const ENV_HOST: &str = "GOLDCALC_HOST";
pub const ENV_PORT: &str = "PORT";

pub fn load_from_env() -> Result<ServerConfig> {
    load_from_vars(std::env::vars())
}

pub fn load_from_vars<I, K, V>(vars: I) -> Result<ServerConfig>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars: BTreeMap<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();

    let tax = TaxConfig {
        gst_on_gold_percent: percent_or(&vars, ENV_GST_GOLD, TaxConfig::default().gst_on_gold_percent)?,
        gst_on_making_percent: percent_or(
            &vars,
            ENV_GST_MAKING,
            TaxConfig::default().gst_on_making_percent,
        )?,
    };

    let policy = match vars.get(ENV_DEFAULT_POLICY) {
        None => DefaultPolicy::Strict,
        Some(raw) => parse_policy(raw)?,
    };

    let mut defaults = ChargeDefaults::new(policy);
    for (name, raw) in &vars {
        if let Some(ty) = name.strip_prefix(MAKING_PREFIX) {
            defaults.set_making(non_empty_type(name, ty)?, parse_percent(name, raw)?);
        } else if let Some(ty) = name.strip_prefix(WASTAGE_PREFIX) {
            defaults.set_wastage(non_empty_type(name, ty)?, parse_percent(name, raw)?);
        }
    }

    let logging = LoggingConfig {
        level: vars
            .get(ENV_LOG_LEVEL)
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(schema::default_log_level),
        format: match vars.get(ENV_LOG_FORMAT) {
            None => LogFormat::default(),
            Some(raw) => parse_log_format(raw)?,
        },
    };

    let listen = ListenSection {
        host: vars
            .get(ENV_HOST)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(schema::default_host),
        port: match vars.get(ENV_PORT) {
            None => schema::default_port(),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| GoldCalcError::Config(format!("{ENV_PORT} must be a port number: {e}")))?,
        },
    };

    let cfg = ServerConfig {
        listen,
        logging,
        quote: QuoteConfig { tax, defaults },
    };
    cfg.validate()?;
    Ok(cfg)
}

fn percent_or(vars: &BTreeMap<String, String>, name: &str, default: f64) -> Result<f64> {
    match vars.get(name) {
        None => Ok(default),
        Some(raw) => parse_percent(name, raw),
    }
}

fn parse_percent(name: &str, raw: &str) -> Result<f64> {
    let v: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GoldCalcError::Config(format!("{name} must be a number, got {raw:?}")))?;
    if !v.is_finite() || v < 0.0 {
        return Err(GoldCalcError::Config(format!(
            "{name} must be a finite, non-negative percentage"
        )));
    }
    Ok(v)
}

fn non_empty_type<'a>(name: &str, ty: &'a str) -> Result<&'a str> {
    if ty.is_empty() {
        return Err(GoldCalcError::Config(format!("{name} is missing a jewelry type suffix")));
    }
    Ok(ty)
}

fn parse_policy(raw: &str) -> Result<DefaultPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(DefaultPolicy::Strict),
        "fallback" => Ok(DefaultPolicy::fallback()),
        other => Err(GoldCalcError::Config(format!(
            "{ENV_DEFAULT_POLICY} must be strict or fallback, got {other:?}"
        ))),
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(LogFormat::Json),
        "text" => Ok(LogFormat::Text),
        other => Err(GoldCalcError::Config(format!(
            "{ENV_LOG_FORMAT} must be json or text, got {other:?}"
        ))),
    }
}
