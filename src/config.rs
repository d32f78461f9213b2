//! Command-line configuration

use crate::algorithms::graph::Graph;
use crate::algorithms::Algorithm;
use crate::input::{random_sequence, Input};
use crate::session::{Session, SessionError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "algoviz")]
#[command(version)]
#[command(about = "Step through sorting and graph-search algorithms in the terminal")]
pub struct Config {
    /// bubble, insertion, merge, quick, bfs, dfs or dijkstra
    #[arg(long, short, default_value = "bubble")]
    pub algorithm: Algorithm,

    /// Number of values to sort
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(10..=150))]
    pub size: u16,

    /// Seed for the generated values
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Delay between steps while playing
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(10..=500))]
    pub speed_ms: u64,

    /// Grid rows for graph algorithms
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..=20))]
    pub rows: u16,

    /// Grid columns for graph algorithms
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..=30))]
    pub cols: u16,

    /// Start node id (row-major)
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Goal node id; defaults to the last node of the grid
    #[arg(long, conflicts_with = "no_goal")]
    pub goal: Option<usize>,

    /// Search the whole graph without a goal
    #[arg(long)]
    pub no_goal: bool,

    /// Write tracing output to this file (RUST_LOG sets the filter)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn node_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Goal after applying `--no-goal` and the last-node default
    pub fn effective_goal(&self) -> Option<usize> {
        if self.no_goal {
            None
        } else {
            Some(self.goal.unwrap_or_else(|| self.node_count().saturating_sub(1)))
        }
    }

    /// Input for `algorithm` built from the current settings
    pub fn input_for(&self, algorithm: Algorithm) -> Input {
        if algorithm.is_sorting() {
            Input::Sequence(random_sequence(self.size as usize, self.seed))
        } else {
            Input::graph(
                Graph::grid(self.rows as usize, self.cols as usize),
                self.start,
                self.effective_goal(),
            )
        }
    }

    /// Start a session for `algorithm` with fresh input
    pub fn start_session(&self, algorithm: Algorithm) -> Result<Session, SessionError> {
        Session::start(algorithm, self.input_for(algorithm))
    }
}
