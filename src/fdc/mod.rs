//! FoodData Central client
//!
//! HTTP request mediation against the FDC REST API.

mod client;
mod error;

pub use client::{FdcApi, FdcClient, Method};
pub use error::FdcError;
