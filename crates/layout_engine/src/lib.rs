//! Layout Engine - Font metrics, line wrapping and pagination
//!
//! This crate measures text set in the standard PDF fonts, wraps it to a
//! column width and flows measured blocks onto pages. Everything here is
//! pure: pagination threads an explicit cursor through each placement.

mod error;
mod line_breaker;
mod metrics;
mod paginator;

pub use error::*;
pub use line_breaker::*;
pub use metrics::*;
pub use paginator::*;
