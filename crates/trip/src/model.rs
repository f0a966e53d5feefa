//! Trip record returned by the backend's active trip endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A driver's active trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: i64,
    pub status: TripStatus,
    pub origin: Location,
    pub destination: Location,
    pub passenger_id: i64,
    #[serde(default)]
    pub driver_id: Option<i64>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Route distance in metres.
    #[serde(default)]
    pub distance: Option<f64>,
    /// Estimated duration in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub send_package: bool,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Pending,
    Accepted,
    Finished,
    Cancelled,
    /// Any status this client does not know about yet.
    #[serde(other)]
    Unknown,
}
