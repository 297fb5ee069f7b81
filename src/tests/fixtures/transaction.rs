// Shared test fixture for the Transaction record.
// The defaults come from json/transaction.json, which is also the raw body the
// HTTP tests post.

use crate::modules::transactions::core::transaction::Transaction;

pub const TRANSACTION_JSON: &str = include_str!("json/transaction.json");

pub struct TransactionBuilder {
    inner: Transaction,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TransactionBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(TRANSACTION_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn location_datetime(mut self, v: &str) -> Self {
        self.inner.location_datetime = chrono::DateTime::parse_from_rfc3339(v).unwrap();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn total_amount(mut self, v: f64) -> Self {
        self.inner.total_amount = v;
        self
    }

    pub fn currency(mut self, v: impl Into<String>) -> Self {
        self.inner.currency = v.into();
        self
    }

    pub fn vrm(mut self, v: impl Into<String>) -> Self {
        self.inner.vehicle.vrm = v.into();
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.driver.first_name = v.into();
        self
    }

    pub fn build(self) -> Transaction {
        self.inner
    }
}

#[cfg(test)]
mod transaction_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = TransactionBuilder::default().build();
        assert_eq!(built.id, "T1");
        assert_eq!(built.location, "Depot");
        assert_eq!(built.total_amount, 5.0);
        assert_eq!(built.currency, "USD");
        assert_eq!(built.vehicle.vrm, "AB12CDE");
        assert_eq!(built.vehicle.make, "Ford");
        assert_eq!(built.driver.email, "a@b.com");
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = TransactionBuilder::new()
            .id("T2")
            .location_datetime("2024-10-20T08:38:34Z")
            .location("North Highway")
            .total_amount(10.5)
            .currency("EUR")
            .vrm("1234BCD")
            .first_name("Jose")
            .build();

        assert_eq!(custom.id, "T2");
        assert_eq!(
            custom.location_datetime.to_rfc3339(),
            "2024-10-20T08:38:34+00:00"
        );
        assert_eq!(custom.location, "North Highway");
        assert_eq!(custom.total_amount, 10.5);
        assert_eq!(custom.currency, "EUR");
        assert_eq!(custom.vehicle.vrm, "1234BCD");
        assert_eq!(custom.driver.first_name, "Jose");
    }
}
