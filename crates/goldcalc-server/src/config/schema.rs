use std::net::{IpAddr, SocketAddr};

use goldcalc_core::error::{GoldCalcError, Result};
use goldcalc_core::quote::QuoteConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: ListenSection,
    pub logging: LoggingConfig,
    pub quote: QuoteConfig,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        self.listen.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ListenSection {
    pub host: String,
    pub port: u16,
}

impl ListenSection {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(GoldCalcError::Config("PORT must be between 1 and 65535".into()));
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| GoldCalcError::Config(format!("invalid listen host {:?}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `goldcalc_server=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| GoldCalcError::Config(format!("invalid log level {:?}: {e}", self.level)))
    }
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".into()
}
pub(crate) fn default_port() -> u16 {
    5000
}
pub(crate) fn default_log_level() -> String {
    "info".into()
}
