use chrono::{TimeZone, Utc};

use crate::modules::transactions::core::transaction::{Driver, Transaction, Vehicle};

pub const MOCKED_TRANSACTION_ID: &str = "8834HR43F9FNF3F8J98";

/// The fixed transaction every load-test worker posts and reads back.
pub fn mocked_transaction() -> Transaction {
    Transaction {
        id: MOCKED_TRANSACTION_ID.to_string(),
        location_datetime: Utc
            .with_ymd_and_hms(2024, 10, 20, 8, 38, 34)
            .single()
            .unwrap_or_default()
            .fixed_offset(),
        location: "North Highway".to_string(),
        total_amount: 10.5,
        currency: "EUR".to_string(),
        vehicle: Vehicle {
            vrm: "1234BCD".to_string(),
            country: "ES".to_string(),
            make: "SEAT".to_string(),
        },
        driver: Driver {
            first_name: "Jose".to_string(),
            last_name: "Garcia".to_string(),
            address_1: "Apple Street".to_string(),
            address_2: String::new(),
            post_code: "1234".to_string(),
            city: "Madrid".to_string(),
            region: String::new(),
            country: "ES".to_string(),
            phone: "111-222-333".to_string(),
            email: "josegarcia@abc.es".to_string(),
        },
    }
}
