//! # Platform Core
//!
//! Core modules shared by the DriveHub client crates.

mod error;
mod provider;

pub use crate::error::*;
pub use crate::provider::*;
