//! ticker-scout: spot price and short-term change lookup for crypto exchanges
//!
//! This library provides:
//! - A uniform async client contract for exchange public market-data APIs
//! - A name-keyed registry resolving exchange implementations
//! - Fault-tolerant response decoding (error envelopes inside 200 responses)
//! - Derived 1h and 24h percent changes from ticker and candle data
//! - Configuration, logging and metrics plumbing for host processes

pub mod cli;
pub mod config;
pub mod exchange;
pub mod http;
pub mod telemetry;
