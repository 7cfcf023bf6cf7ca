use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the price index deployments the dashboard can talk to.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local mirror of the index, e.g. a recorded fixture server.
    Local,
    /// Public CoinCap v2 API.
    #[default]
    Production,
}

impl Environment {
    /// Returns the base URL of the asset index for the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8080/v2".to_string(),
            Environment::Production => "https://api.coincap.io/v2".to_string(),
        }
    }

    /// Reads `CRYPTODASH_ENVIRONMENT`, falling back to the default on absent or unknown values.
    pub fn from_env() -> Self {
        std::env::var("CRYPTODASH_ENVIRONMENT")
            .unwrap_or_default()
            .parse::<Environment>()
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
