//! # Introduction
//!
//! algoviz turns classic sorting and graph-search algorithms into steppable
//! processes. Instead of only a result, every algorithm produces an ordered
//! stream of [`snapshot::Frame`]s that a [`session::Session`] plays back,
//! pauses, single-steps or resets. A terminal front end built with
//! [ratatui](https://docs.rs/ratatui) draws the frames.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Emitter → Frame → Color mapper → Renderer
//!            ▲
//!         Session (step / play / pause / stop / reset)
//! ```
//!
//! 1. [`algorithms`]: frame emitters for bubble, insertion, merge and quick sort;
//!    BFS, DFS and Dijkstra over a [`algorithms::graph::Graph`].
//! 2. [`snapshot`]: the fixed [`snapshot::Frame`] record and its metadata.
//! 3. [`session`]: the playback state machine and step statistics.
//! 4. [`colors`]: pure mapping from a frame to per-position color tokens.
//! 5. [`config`] / [`input`]: command-line settings and sample inputs.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Determinism
//!
//! Emitters copy their input and hold all run state in plain values, so the
//! same algorithm on the same input always yields the same frames, and
//! [`session::Session::reset`] reproduces frame 0 exactly.

pub mod algorithms;
pub mod colors;
pub mod config;
pub mod input;
pub mod session;
pub mod snapshot;
pub mod ui;
