// vantablack_server/src/lib.rs

//! HTTP request layer for the VantaBlack storefront catalogue.
//!
//! One set of list/create/get/update/delete endpoints per collection, each
//! call delegating to the flat-file store in the `vantablack` crate.

pub mod config;
pub mod errors;
pub mod seed;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
