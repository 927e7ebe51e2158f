use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::query::{
    AuctionDateQuery, BenchmarksQuery, DealersQuery, NO_PARAMS, ResultadosQuery, TrocaQuery,
};
use crate::util::{truncate_body, urljoin};

/// One JSON object as returned by the API.
pub type Record = Map<String, Value>;

/// Decoded body of every endpoint: a JSON array of objects, in server order.
pub type Records = Vec<Record>;

/// Blocking client for the Tesouro Nacional auction API.
///
/// Holds no mutable state; clone it or share it across threads freely.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: HttpClient,
}

impl Client {
    /// Creates a client for the production API.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client against another base URL, e.g. a mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_base_url(base_url))
    }

    pub fn with_config(cfg: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(cfg.user_agent)
            .timeout(cfg.timeout)
            .build()?;

        Ok(Self {
            base_url: cfg.base_url,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reference benchmarks of the auctions.
    ///
    /// By default only the benchmarks currently offered (on-the-run) are
    /// listed; see [`BenchmarksQuery::full_history`].
    pub fn get_benchmarks(&self, query: &BenchmarksQuery) -> Result<Records> {
        self.records(Endpoint::Benchmarks, query)
    }

    /// Public notices on federal debt management, with download links.
    pub fn get_comunicados(&self) -> Result<Records> {
        self.records(Endpoint::Comunicados, NO_PARAMS)
    }

    /// Quantities offered per benchmark at the auction of `auction_date`
    /// (`DD/MM/YYYY`). `None` asks for today's auction.
    pub fn get_portarias(&self, auction_date: Option<&str>) -> Result<Records> {
        self.records(Endpoint::Portarias, &AuctionDateQuery::new(auction_date))
    }

    /// Settlement date, offer, accepted amount, cut-off rate and volume of
    /// past auctions.
    pub fn get_resultados(&self, query: &ResultadosQuery) -> Result<Records> {
        self.records(Endpoint::Resultados, query)
    }

    /// Institutions accredited as dealers.
    pub fn get_dealers(&self, query: &DealersQuery) -> Result<Records> {
        self.records(Endpoint::Dealers, query)
    }

    /// Planned auction calendar: date, title, maturity, reference and offer type.
    pub fn get_calendario(&self) -> Result<Records> {
        self.records(Endpoint::Calendario, NO_PARAMS)
    }

    /// Ratification of the auction held on `auction_date`, today when `None`.
    pub fn get_homologacao(&self, auction_date: Option<&str>) -> Result<Records> {
        self.records(Endpoint::Homologacao, &AuctionDateQuery::new(auction_date))
    }

    /// Exchange auctions held on `auction_date`, today when `None`.
    pub fn get_troca(&self, auction_date: Option<&str>) -> Result<Records> {
        self.records(Endpoint::Troca, &TrocaQuery::new(auction_date))
    }

    /// Issues one GET against `endpoint` and decodes the body into `T`.
    ///
    /// Only `200 OK` counts as success; any other status, 2xx included,
    /// becomes [`Error::Http`].
    pub fn fetch<T, Q>(&self, endpoint: Endpoint, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = urljoin(&self.base_url, &endpoint.path());
        tracing::debug!(%endpoint, %url, "GET");

        let resp = self.http.get(&url).query(query).send()?;
        let status = resp.status();
        let url = resp.url().to_string();

        if status != StatusCode::OK {
            let body = resp.text().unwrap_or_default();
            tracing::warn!(%endpoint, %status, "request failed");
            return Err(Error::Http {
                status,
                url,
                body: truncate_body(&body),
            });
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|source| {
            tracing::warn!(
                %endpoint,
                error = %source,
                body = %truncate_body(&text),
                "failed to parse response"
            );
            Error::Decode { url, source }
        })
    }

    fn records<Q>(&self, endpoint: Endpoint, query: &Q) -> Result<Records>
    where
        Q: Serialize + ?Sized,
    {
        let records: Records = self.fetch(endpoint, query)?;
        tracing::debug!(%endpoint, count = records.len(), "decoded records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + Clone>() {}

    #[test]
    fn client_is_shareable() {
        assert_send_sync::<Client>();
    }

    #[test]
    fn new_targets_production() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url(), "https://apiapex.tesouro.gov.br/aria");
    }

    #[test]
    fn connection_failure_is_transport_error() {
        // port 1 is reserved and closed on test hosts
        let client = Client::with_base_url("http://127.0.0.1:1").unwrap();
        let err = client.get_calendario().unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "{err:?}");
        assert_eq!(err.status(), None);
    }
}
