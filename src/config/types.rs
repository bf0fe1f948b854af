use serde::{Deserialize, Serialize};

use crate::domain::engine::EngineOptions;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default = "default_true")]
    pub apply_discounts: bool,
    #[serde(default)]
    pub apply_take_rate: bool,
    #[serde(default = "default_fallback_currency")]
    pub fallback_currency: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            apply_discounts: true,
            apply_take_rate: false,
            fallback_currency: default_fallback_currency(),
        }
    }
}

impl From<&EngineConfig> for EngineOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            apply_discounts: config.apply_discounts,
            apply_take_rate: config.apply_take_rate,
            fallback_currency: config.fallback_currency.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_true")]
    pub round_to_cents: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            round_to_cents: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_fallback_currency() -> String {
    "USD".into()
}
