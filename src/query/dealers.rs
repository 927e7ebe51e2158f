use serde::Serialize;

/// Filters for the dealer listing. The server expects upper-case keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DealersQuery {
    #[serde(rename = "ANO", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// CNPJ of the institution.
    #[serde(rename = "CNPJ", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Name, or part of the name, of the institution.
    #[serde(rename = "DEALER", skip_serializing_if = "Option::is_none")]
    pub dealer_name: Option<String>,
}

impl DealersQuery {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_tax_id(mut self, tax_id: &str) -> Self {
        self.tax_id = Some(tax_id.to_string());
        self
    }

    pub fn with_dealer_name(mut self, dealer_name: &str) -> Self {
        self.dealer_name = Some(dealer_name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::serialized_keys;

    #[test]
    fn empty_by_default() {
        assert!(serialized_keys(&DealersQuery::default()).is_empty());
    }

    #[test]
    fn upper_case_keys() {
        let q = DealersQuery::default().with_year(2023).with_dealer_name("ITAU");
        let mut keys = serialized_keys(&q);
        keys.sort();
        assert_eq!(keys, vec!["ANO", "DEALER"]);
    }
}
