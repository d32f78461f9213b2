// Playback controller: owns one algorithm run and steps it on demand

use crate::algorithms::graph::{Dijkstra, Traversal};
use crate::algorithms::sorting::{BubbleSort, InsertionSort, MergeSort, QuickSort};
use crate::algorithms::{Algorithm, Emitter};
use crate::input::Input;
use crate::session::errors::SessionError;
use crate::snapshot::Frame;
use std::fmt;

/// Playback state of a [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing to show: the emitter produced no frame when primed
    Idle,
    /// Primed with frame 0, not yet stepped
    Ready,
    /// The caller is expected to call [`Session::step`] on a timer
    Playing,
    Paused,
    /// Emitter exhausted; the last frame stays current
    Finished,
}

/// Counters derived from produced frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Frames pulled after priming
    pub steps: usize,
    /// Frames with a highlight and no write
    pub comparisons: usize,
    /// Frames that wrote to the working storage
    pub mutations: usize,
}

impl Stats {
    fn record(&mut self, frame: &Frame) {
        self.steps += 1;
        if frame.mutated {
            self.mutations += 1;
        } else if !frame.highlighted.is_empty() {
            self.comparisons += 1;
        }
    }
}

/// Result of [`Session::step`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome<'a> {
    /// A new frame was produced and is now current
    Advanced(&'a Frame),
    /// Nothing more to produce; carries the frame left current, if any
    Finished(Option<&'a Frame>),
}

impl<'a> StepOutcome<'a> {
    pub fn frame(self) -> Option<&'a Frame> {
        match self {
            StepOutcome::Advanced(frame) => Some(frame),
            StepOutcome::Finished(frame) => frame,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, StepOutcome::Finished(_))
    }
}

/// Build a fresh emitter for `algorithm` over `input`
pub fn build_emitter(algorithm: Algorithm, input: &Input) -> Result<Emitter, SessionError> {
    match (algorithm, input) {
        (Algorithm::Bubble, Input::Sequence(values)) => Ok(Box::new(BubbleSort::new(values))),
        (Algorithm::Insertion, Input::Sequence(values)) => Ok(Box::new(InsertionSort::new(values))),
        (Algorithm::Merge, Input::Sequence(values)) => Ok(Box::new(MergeSort::new(values))),
        (Algorithm::Quick, Input::Sequence(values)) => Ok(Box::new(QuickSort::new(values))),
        (Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra, Input::Graph { graph, start, goal }) => {
            let graph = graph.clone();
            let emitter: Emitter = match algorithm {
                Algorithm::Bfs => Box::new(Traversal::bfs(graph, *start, *goal)?),
                Algorithm::Dfs => Box::new(Traversal::dfs(graph, *start, *goal)?),
                _ => Box::new(Dijkstra::new(graph, *start, *goal)?),
            };
            Ok(emitter)
        }
        (algorithm, _) => Err(SessionError::InputMismatch {
            algorithm: algorithm.id(),
            expected: if algorithm.is_sorting() { "sequence" } else { "graph" },
        }),
    }
}

/// A live, steppable run of one algorithm plus its playback bookkeeping.
///
/// All state lives in the value itself. Dropping it abandons the run; nothing
/// else needs tearing down.
pub struct Session {
    algorithm: Algorithm,
    input: Input,
    emitter: Emitter,
    current: Option<Frame>,
    stats: Stats,
    state: PlaybackState,
}

impl Session {
    /// Build the emitter, pull frame 0 and enter `Ready`
    pub fn start(algorithm: Algorithm, input: Input) -> Result<Self, SessionError> {
        let emitter = build_emitter(algorithm, &input)?;
        let mut session = Session {
            algorithm,
            input,
            emitter,
            current: None,
            stats: Stats::default(),
            state: PlaybackState::Idle,
        };
        session.prime();
        tracing::debug!(algorithm = algorithm.id(), state = ?session.state, "session started");
        Ok(session)
    }

    /// Like [`Session::start`], resolving the algorithm from its identifier
    pub fn create(algorithm_id: &str, input: Input) -> Result<Self, SessionError> {
        Self::start(algorithm_id.parse()?, input)
    }

    fn prime(&mut self) {
        self.current = self.emitter.next();
        self.stats = Stats::default();
        self.state = if self.current.is_some() {
            PlaybackState::Ready
        } else {
            PlaybackState::Idle
        };
    }

    /// Pull exactly one frame.
    ///
    /// In `Idle` or `Finished` this is a no-op that reports the current frame.
    /// Stepping keeps `Playing` as is and otherwise leaves the session
    /// `Paused`.
    pub fn step(&mut self) -> StepOutcome<'_> {
        if matches!(self.state, PlaybackState::Idle | PlaybackState::Finished) {
            return StepOutcome::Finished(self.current.as_ref());
        }

        match self.emitter.next() {
            Some(frame) => {
                self.stats.record(&frame);
                tracing::trace!(step = self.stats.steps, label = frame.label(), "step");
                if self.state != PlaybackState::Playing {
                    self.state = PlaybackState::Paused;
                }
                StepOutcome::Advanced(self.current.insert(frame))
            }
            None => {
                self.state = PlaybackState::Finished;
                tracing::debug!(
                    algorithm = self.algorithm.id(),
                    steps = self.stats.steps,
                    "session finished"
                );
                StepOutcome::Finished(self.current.as_ref())
            }
        }
    }

    /// Enter `Playing` from `Ready` or `Paused`
    pub fn play(&mut self) {
        if matches!(self.state, PlaybackState::Ready | PlaybackState::Paused) {
            self.state = PlaybackState::Playing;
        }
    }

    /// Leave `Playing` for `Paused`
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn set_playing(&mut self, playing: bool) {
        if playing {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Toggle between `Playing` and `Paused`
    pub fn toggle_play(&mut self) {
        self.set_playing(!self.is_playing());
    }

    /// Halt playback without discarding progress
    pub fn stop(&mut self) {
        self.pause();
    }

    /// Rebuild the emitter from the original input and return to frame 0
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.emitter = build_emitter(self.algorithm, &self.input)?;
        self.prime();
        tracing::debug!(algorithm = self.algorithm.id(), "session reset");
        Ok(())
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("algorithm", &self.algorithm)
            .field("state", &self.state)
            .field("stats", &self.stats)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
