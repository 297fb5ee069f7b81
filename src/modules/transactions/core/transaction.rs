use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A recorded vehicle transaction. `id` is the only field a client must send;
/// everything else falls back to its empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(default = "zero_time", serialize_with = "serialize_rfc3339")]
    pub location_datetime: DateTime<FixedOffset>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub vehicle: Vehicle,
    #[serde(default)]
    pub driver: Driver,
}

/// Timestamp echoed when a client leaves `location_datetime` out: 0001-01-01T00:00:00Z.
pub fn zero_time() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
        .fixed_offset()
}

// Keeps the client's offset and writes `Z` for UTC.
fn serialize_rfc3339<S: Serializer>(
    value: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub vrm: String,
    pub country: String,
    pub make: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    pub address_2: String,
    pub post_code: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "Success".to_string(),
        }
    }
}
