#![forbid(unsafe_code)]

//! Draggable bottom-sheet component.
//!
//! # Role in SheetKit
//! `sheetkit-widgets` turns the motion primitives of `sheetkit-core` into
//! the bottom-sheet overlay: a transient panel anchored to the bottom of
//! the viewport, animated in and out, dismissible by a downward drag on its
//! handle, a backdrop tap, or programmatically by the caller.
//!
//! # Primary responsibilities
//! - **Visibility transitions**: spring entrance, deterministic timed exit,
//!   interruptible mid-flight ([`transition`]).
//! - **Drag-to-dismiss**: the release state machine with distance and
//!   velocity thresholds ([`dismiss`]).
//! - **Host contract**: pointer routing by hit region, exactly-once close
//!   notification, per-frame render snapshots ([`sheet`]).
//!
//! # How it fits in the system
//! The sheet is headless. A host renders [`sheet::SheetFrame`] values each
//! frame, routes pointer events with their hit regions into
//! [`sheet::BottomSheet::handle_pointer`], and flips its own visibility
//! flag when the sheet reports a dismissal. The component reacts to that
//! flag, it never owns it.

pub mod dismiss;
pub mod sheet;
pub mod transition;

pub use dismiss::{DismissConfig, ReleaseOutcome};
pub use sheet::{BottomSheet, SheetConfig, SheetEvent, SheetFrame, SheetRegion};
pub use transition::{SheetPhase, SheetTransition, TransitionConfig};
