use {
    crate::{
        amount::Amount,
        error::Result,
        logging::{init_logging, LogFormat},
        sanitize::Quantity,
        slippage::{slippage_bounds, SlippageBounds},
    },
    serde::{Deserialize, Serialize},
};

/// Host-supplied settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,

    pub log_format: LogFormat,

    /// Slippage tolerance in percent.
    pub slippage_tolerance: Amount,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            slippage_tolerance: Amount::new(5, 1),
        }
    }
}

impl Config {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Config> {
        Ok(serde_json::from_str(json)?)
    }

    /// Trade bounds for `amount` at the configured tolerance.
    pub fn slippage_bounds<'a>(&self, amount: impl Into<Quantity<'a>>) -> SlippageBounds {
        slippage_bounds(amount, &self.slippage_tolerance)
    }
}

/// One-time initialization, called by the host before first use.
///
/// The conversion functions work without it; it only wires up logging.
pub fn init(config: &Config) -> Result<()> {
    init_logging(&config.log_level, config.log_format)
}

#[cfg(test)]
mod tests {
    use {super::*, crate::error::Error, std::str::FromStr};

    #[test]
    fn test_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.slippage_tolerance.to_string(), "0.5");
    }

    #[test]
    fn test_from_json() {
        let config = Config::from_json(
            r#"{"log_level": "dex_units=debug", "log_format": "json", "slippage_tolerance": "1"}"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "dex_units=debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.slippage_tolerance, Amount::from_str("1").unwrap());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Config::from_json(r#"{"slippage_tolerance": "1,5"}"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"log_format": "xml"}"#),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_slippage_bounds() {
        let bounds = Config::default().slippage_bounds("1,000");
        assert_eq!(bounds.minimum_received, "995");
        assert_eq!(bounds.maximum_sent, "1005");
    }

    #[test]
    fn test_init_twice_is_an_error() {
        let config = Config::default();
        let first = init(&config);
        let second = init(&config);
        // Another test may have installed the subscriber first.
        assert!(first.is_ok() || matches!(first, Err(Error::Logging(_))));
        assert!(matches!(second, Err(Error::Logging(_))));
    }
}
