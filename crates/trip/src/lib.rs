//! # Active Trip
//!
//! Fetches the trip a driver is currently assigned to from the DriveHub
//! backend.

mod fetcher;
mod outcome;

pub mod model;

pub use self::fetcher::{ACTIVE_TRIP_PATH, ActiveTripFetcher, BASE_URL_KEY};
pub use self::model::{Location, TripRecord, TripStatus};
pub use self::outcome::{Failure, Outcome};
