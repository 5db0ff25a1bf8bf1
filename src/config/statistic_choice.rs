use crate::config::Choice;
use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_ddof() -> i64 {
    1
}

fn default_window_size() -> i64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(StatisticKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum StatisticChoice {
    #[strum_discriminants(strum(
        message = "SEM",
        detailed_message = "Standard error of the mean over the whole stream."
    ))]
    Sem(SemParameters),

    #[strum_discriminants(strum(
        message = "Rolling SEM",
        detailed_message = "Standard error of the mean over a sliding window."
    ))]
    RollingSem(RollingSemParameters),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SemParameters {
    #[serde(default = "default_ddof")]
    #[schemars(
        title = "Delta degrees of freedom",
        description = "The variance divisor is n - ddof",
        default = "default_ddof",
        range(min = 0)
    )]
    pub ddof: i64,
}

impl Default for SemParameters {
    fn default() -> Self {
        Self {
            ddof: default_ddof(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RollingSemParameters {
    #[serde(default = "default_window_size")]
    #[schemars(
        title = "Window size",
        description = "Number of most recent observations retained",
        default = "default_window_size",
        range(min = 1)
    )]
    pub window_size: i64,

    #[serde(default = "default_ddof")]
    #[schemars(
        title = "Delta degrees of freedom",
        description = "The variance divisor is n - ddof",
        default = "default_ddof",
        range(min = 0)
    )]
    pub ddof: i64,
}

impl Default for RollingSemParameters {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            ddof: default_ddof(),
        }
    }
}

impl StatisticChoice {
    /// Parses a tagged choice such as
    /// `{"type": "rolling-sem", "params": {"window_size": 3}}`.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("failed to parse statistic choice")
    }
}

impl Choice for StatisticChoice {
    type Kind = StatisticKind;

    fn schema() -> Schema {
        schema_for!(StatisticChoice)
    }

    fn default_params(kind: Self::Kind) -> Value {
        let params = match kind {
            StatisticKind::Sem => serde_json::to_value(SemParameters::default()),
            StatisticKind::RollingSem => serde_json::to_value(RollingSemParameters::default()),
        };
        params.unwrap_or(Value::Null)
    }
}
