//! # DriveHub
//!
//! Host wiring for the DriveHub driver client: a `reqwest`-backed provider
//! and environment configuration for the [`trip`] crate.

pub mod config;
mod provider;

pub use self::provider::Provider;
