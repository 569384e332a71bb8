#![deny(warnings)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod fit;
pub mod linear;
pub mod metrics;
pub mod plot;
