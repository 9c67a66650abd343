#![forbid(unsafe_code)]

//! Core: animation and pointer-gesture primitives for SheetKit.
//!
//! # Role in SheetKit
//! `sheetkit-core` is the motion layer. It owns the animation value types
//! (springs, timed easings, animated cells) and the pointer-gesture
//! recognizer that the widget layer consumes.
//!
//! # Primary responsibilities
//! - **Animation**: tick-driven value interpolation (`Spring`, `Timed`,
//!   `AnimatedValue`).
//! - **Gesture**: normalized pointer events and a vertical-drag recognizer
//!   with activation thresholds and velocity tracking.
//!
//! # How it fits in the system
//! The widget layer (`sheetkit-widgets`) composes these primitives into the
//! bottom-sheet state machines. Nothing in this crate knows about sheets,
//! backdrops, or rendering; it is pure numeric state advanced by frame
//! ticks and pointer samples.

pub mod animation;
pub mod gesture;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
