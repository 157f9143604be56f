use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How the planner intends to treat a viewport during a navigation.
///
/// Only [`ActivationStrategy::InvokeLifecycle`] runs guards. Every other value,
/// including symbols this crate does not know about, bypasses them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivationStrategy {
    #[default]
    InvokeLifecycle,
    Replace,
    NoChange,
    /// Any symbol supplied by an upstream planner that is not one of the above.
    Other(String),
}

impl ActivationStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            ActivationStrategy::InvokeLifecycle => "invoke-lifecycle",
            ActivationStrategy::Replace => "replace",
            ActivationStrategy::NoChange => "no-change",
            ActivationStrategy::Other(symbol) => symbol,
        }
    }

    pub fn invokes_lifecycle(&self) -> bool {
        matches!(self, ActivationStrategy::InvokeLifecycle)
    }
}

impl From<&str> for ActivationStrategy {
    fn from(symbol: &str) -> Self {
        match symbol {
            "invoke-lifecycle" => ActivationStrategy::InvokeLifecycle,
            "replace" => ActivationStrategy::Replace,
            "no-change" => ActivationStrategy::NoChange,
            other => ActivationStrategy::Other(other.to_string()),
        }
    }
}

impl From<String> for ActivationStrategy {
    fn from(symbol: String) -> Self {
        match ActivationStrategy::from(symbol.as_str()) {
            ActivationStrategy::Other(_) => ActivationStrategy::Other(symbol),
            known => known,
        }
    }
}

impl From<ActivationStrategy> for String {
    fn from(strategy: ActivationStrategy) -> Self {
        match strategy {
            ActivationStrategy::Other(symbol) => symbol,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ActivationStrategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ActivationStrategy::from(s))
    }
}

impl fmt::Display for ActivationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
