//! Playback controller
//!
//! This module provides the session state machine that drives an emitter:
//! - [`engine`]: [`Session`], playback states and step statistics
//! - [`errors`]: configuration and validation errors
//!
//! # State Machine
//!
//! ```text
//! start ──► Ready ──step──► Paused ◄──pause/stop── Playing
//!             │               │  └──────play──────►  │
//!             └─────play──────┼──────────────────────┘
//!                             ▼ (emitter exhausted)
//!                          Finished
//! ```
//!
//! `reset` returns any state to `Ready` with frame 0 restored. A session never
//! steps on its own: "playing" only tells the caller to keep calling
//! [`Session::step`] on its timer.

pub mod engine;
pub mod errors;

pub use engine::{build_emitter, PlaybackState, Session, Stats, StepOutcome};
pub use errors::{ErrorKind, SessionError};
