//! A small blocking Rust client for the Tesouro Nacional public auction API
//! (`api-leiloes-pub`).
//!
//! Each operation issues one HTTP GET against a fixed endpoint, forwards only
//! the parameters the caller set, and returns the decoded JSON array.
//!
//! ```no_run
//! use tesouro::{Client, ResultadosQuery};
//!
//! fn main() -> tesouro::Result<()> {
//!     let client = Client::new()?;
//!     let portarias = client.get_portarias(Some("16/07/2024"))?;
//!     let resultados = client.get_resultados(&ResultadosQuery::default().with_year(2024))?;
//!     println!("{} portarias, {} resultados", portarias.len(), resultados.len());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod client;
mod config;
mod endpoint;
mod error;
mod query;
mod util;

pub use client::{Client, Record, Records};
pub use config::{BASE_URL, ClientConfig};
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use query::{
    BenchmarksQuery, DEFAULT_START_YEAR, DealersQuery, IncludeHistory, ResultadosQuery,
    format_auction_date,
};
