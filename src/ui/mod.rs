//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** - application state, keyboard event loop, playback timer
//! - **[`panes`]** - stateless render functions (bars, graph, HUD, status bar)
//! - **[`theme`]** - maps abstract color tokens onto the terminal palette
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`]
//! and call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
