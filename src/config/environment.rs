// Start of file: /src/config/environment.rs

// * Environment configuration, read once at startup.
// * Parsing works over a plain map so it can be exercised without touching
// * the process environment.

use std::{borrow::Cow, collections::HashMap, time::Duration};
// * anyhow for convenient error handling
use anyhow::{bail, Context, Result};

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const PRODUCTION_ENVIRONMENT: &str = "production";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9696;
const DEFAULT_TIMEOUT: u64 = 30; // 30 seconds

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub debug: bool,
    pub default_timeout_seconds: u64,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            debug: true,
            default_timeout_seconds: DEFAULT_TIMEOUT,
        }
    }
}

impl EnvironmentVariables {
    // * Loads the process environment.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != PRODUCTION_ENVIRONMENT {
            dotenv::dotenv().ok();
        }

        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    // * Builds the configuration from an explicit set of variables.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        // ? Blank values count as unset
        let get_var = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let environment: Cow<'static, str> = get_var("ENVIRONMENT")
            .map(|s| Cow::Owned(s.to_owned()))
            .unwrap_or(Cow::Borrowed(DEFAULT_ENVIRONMENT));

        // ? Debug mode follows the environment unless set explicitly
        let debug: bool = get_var("DEBUG")
            .map(|s| parse_bool(s).context("Invalid DEBUG value"))
            .transpose()?
            .unwrap_or(environment != PRODUCTION_ENVIRONMENT);

        let default_timeout_seconds: u64 = get_var("DEFAULT_TIMEOUT_SECONDS")
            .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT);

        if default_timeout_seconds == 0 {
            bail!("DEFAULT_TIMEOUT_SECONDS must be greater than zero");
        }

        Ok(Self {
            environment,

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.to_owned()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            debug,
            default_timeout_seconds,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION_ENVIRONMENT
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_seconds)
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{other}'"),
    }
}


// End of file: /src/config/environment.rs
