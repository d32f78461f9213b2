//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: one colored bar per value for sorting runs
//! - [`graph`]: node/edge canvas for graph searches
//! - [`hud`]: stats line (step, counters, frontier sizes)
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane exports a `render_*` function taking the frame, its area and the
//! data to draw; panes hold no state of their own.

pub mod bars;
pub mod graph;
pub mod hud;
pub mod status;

pub use bars::render_bars_pane;
pub use graph::render_graph_pane;
pub use hud::render_hud;
pub use status::render_status_bar;
