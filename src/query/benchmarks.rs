use std::str::FromStr;

use serde::Serialize;

/// Which benchmarks the `benchmarks` endpoint lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum IncludeHistory {
    /// Only benchmarks currently offered (on-the-run). Wire value `N`.
    #[default]
    #[serde(rename = "N")]
    CurrentOnly,
    /// Every registered benchmark, on-the-run and off-the-run. Wire value `S`.
    #[serde(rename = "S")]
    Full,
}

impl IncludeHistory {
    pub fn as_str(self) -> &'static str {
        match self {
            IncludeHistory::CurrentOnly => "N",
            IncludeHistory::Full => "S",
        }
    }
}

impl FromStr for IncludeHistory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" | "n" => Ok(IncludeHistory::CurrentOnly),
            "S" | "s" => Ok(IncludeHistory::Full),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarksQuery {
    #[serde(rename = "incluir_historico", skip_serializing_if = "Option::is_none")]
    pub include_history: Option<IncludeHistory>,
}

impl Default for BenchmarksQuery {
    fn default() -> Self {
        Self {
            include_history: Some(IncludeHistory::CurrentOnly),
        }
    }
}

impl BenchmarksQuery {
    pub fn with_include_history(mut self, include_history: IncludeHistory) -> Self {
        self.include_history = Some(include_history);
        self
    }

    /// Lists the full history, on-the-run and off-the-run.
    pub fn full_history(self) -> Self {
        self.with_include_history(IncludeHistory::Full)
    }

    /// Sends no flag at all and lets the server pick its default.
    pub fn without_history_flag(mut self) -> Self {
        self.include_history = None;
        self
    }
}
