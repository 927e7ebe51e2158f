use chrono::NaiveDate;
use serde::Serialize;

/// Renders a date the way the auction endpoints expect it: `DD/MM/YYYY`.
pub fn format_auction_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

// An empty string counts as "no date": the server falls back to today either way.
fn non_empty(date: Option<&str>) -> Option<String> {
    date.filter(|d| !d.is_empty()).map(str::to_string)
}

/// `data_leilao` filter shared by `portarias` and `homologacao`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct AuctionDateQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    data_leilao: Option<String>,
}

impl AuctionDateQuery {
    pub(crate) fn new(date: Option<&str>) -> Self {
        Self {
            data_leilao: non_empty(date),
        }
    }
}

/// `troca` spells the same filter in upper case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct TrocaQuery {
    #[serde(rename = "DATA_LEILAO", skip_serializing_if = "Option::is_none")]
    data_leilao: Option<String>,
}

impl TrocaQuery {
    pub(crate) fn new(date: Option<&str>) -> Self {
        Self {
            data_leilao: non_empty(date),
        }
    }
}
