//! AyurAssist library exports for testing
//!
//! - [`analysis`]: wire types, the HTTP client and outcome resolution
//! - [`core`]: state, reducer, presenter and configuration
//! - [`report`] / [`oneshot`]: plain-text output for `--query`
//! - [`tui`]: the interactive terminal adapter

pub mod analysis;
pub mod core;
pub mod oneshot;
pub mod report;
pub mod tui;

#[cfg(test)]
pub mod test_support;
