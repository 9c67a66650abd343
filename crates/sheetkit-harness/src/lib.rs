#![forbid(unsafe_code)]

//! Deterministic test harness for SheetKit.
//!
//! Real gesture bugs live in the seams: a finger landing mid-animation, a
//! visibility flip racing a release, a second backdrop tap while the first
//! is still sliding out. Reproducing those by hand is flaky; this crate
//! makes them scriptable. [`clock::FrameClock`] advances time in fixed
//! steps so every scenario is replayable, and [`script::SheetDriver`] turns
//! pointer scripts into the exact event and frame sequence a host would
//! observe.
//!
//! The integration tests under `tests/` are the end-to-end scenarios; the
//! library here is the shared machinery they script against.

pub mod clock;
pub mod script;

pub use clock::FrameClock;
pub use script::SheetDriver;
