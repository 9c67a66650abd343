#![forbid(unsafe_code)]

//! Demo screens exercising SheetKit end to end.
//!
//! Two sheets from a food-delivery app drive the public contract the way a
//! real host would: a restaurant opening-hours sheet sized by its content,
//! and a cart fee-breakdown sheet with a height cap. Both are headless;
//! `render` produces plain text lines so the demos double as readable
//! integration tests.

pub mod screens;

pub use screens::order_summary::OrderSummarySheet;
pub use screens::timings::TimingsSheet;
