//! Demo screens, one module per sheet.

pub mod order_summary;
pub mod timings;
