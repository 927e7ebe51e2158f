use serde::Serialize;

/// First year the `resultados` endpoint is asked for when the caller says nothing.
pub const DEFAULT_START_YEAR: i32 = 2015;

/// Filters for auction results. All fields combine freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultadosQuery {
    /// Every result for this year.
    #[serde(rename = "ano", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Every result from this year onwards. Defaults to [`DEFAULT_START_YEAR`].
    #[serde(rename = "anoinicial", skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    /// Every result for this auction date, `DD/MM/YYYY`.
    #[serde(rename = "dataleilao", skip_serializing_if = "Option::is_none")]
    pub auction_date: Option<String>,
    /// Restricts results to one title, e.g. `LTN`.
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for ResultadosQuery {
    fn default() -> Self {
        Self {
            year: None,
            start_year: Some(DEFAULT_START_YEAR),
            auction_date: None,
            title: None,
        }
    }
}

impl ResultadosQuery {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_start_year(mut self, start_year: i32) -> Self {
        self.start_year = Some(start_year);
        self
    }

    pub fn without_start_year(mut self) -> Self {
        self.start_year = None;
        self
    }

    pub fn with_auction_date(mut self, auction_date: &str) -> Self {
        self.auction_date = Some(auction_date.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
}
