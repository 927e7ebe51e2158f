//! Query-parameter structures, one per endpoint family.
//!
//! Every structure serializes only the fields that hold a value, so unset
//! parameters never reach the query string.

mod benchmarks;
mod date;
mod dealers;
mod resultados;

pub use self::benchmarks::{BenchmarksQuery, IncludeHistory};
pub use self::date::format_auction_date;
pub(crate) use self::date::{AuctionDateQuery, TrocaQuery};
pub use self::dealers::DealersQuery;
pub use self::resultados::{DEFAULT_START_YEAR, ResultadosQuery};

/// Parameter set for endpoints that take no parameters.
pub(crate) const NO_PARAMS: &[(&str, &str)] = &[];

#[cfg(test)]
pub(crate) fn serialized_keys<Q: serde::Serialize>(query: &Q) -> Vec<String> {
    match serde_json::to_value(query).unwrap() {
        serde_json::Value::Object(map) => map.keys().cloned().collect(),
        other => panic!("query did not serialize to an object: {other}"),
    }
}
