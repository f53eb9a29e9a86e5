//! Phase orchestrator for the single game room.
//!
//! [`GameFlow`] owns the whole [`GameState`] and is the only thing that
//! mutates it. Two entry points drive it:
//!
//! - [`GameFlow::handle`] applies an inbound participant event. Handlers only
//!   write scratch state (targets, ballots); they never change phase, except
//!   `start`, which opens the first night.
//! - [`GameFlow::tick`] advances the current countdown by one second and, at
//!   zero, runs the phase's resolution from the [`PhaseTable`].
//!
//! Both are synchronous and bounded. The caller must serialize them (one
//! event or tick fully handled before the next).

mod notify;
mod player_actions;
mod round_lifecycle;
mod schedule;


use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

pub use notify::{Delivery, Notification, NotificationSink, RecordingSink};
pub use player_actions::InboundEvent;
pub use schedule::{PhaseRule, PhaseTable, Resolution};

use crate::config::game::GameConfig;
use crate::domain::{GameState, Phase, Roster, RoundState, TrialCandidates};

pub struct GameFlow<S: NotificationSink> {
    config: GameConfig,
    table: PhaseTable,
    state: GameState,
    rng: ChaCha20Rng,
    sink: S,
    /// Bumped every time a timed phase starts its countdown.
    countdown_epoch: u64,
}

impl<S: NotificationSink> GameFlow<S> {
    /// Create an orchestrator in the `waiting` phase.
    ///
    /// Role shuffles use `config.seed` when set, OS entropy otherwise.
    pub fn new(config: GameConfig, sink: S) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        };
        Self {
            table: PhaseTable::from_config(&config),
            config,
            state: GameState::new(),
            rng,
            sink,
            countdown_epoch: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.state.remaining_secs
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn roster(&self) -> &Roster {
        &self.state.roster
    }

    pub fn round(&self) -> &RoundState {
        &self.state.round
    }

    pub fn trial_candidates(&self) -> Option<TrialCandidates> {
        self.state.trial
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Changes whenever a new countdown starts. Drivers use it to realign
    /// their one-second ticker.
    pub fn countdown_epoch(&self) -> u64 {
        self.countdown_epoch
    }

    /// Whether the current phase has a running timer.
    pub fn is_counting_down(&self) -> bool {
        self.table.rule(self.state.phase).is_some()
    }

    /// One second elapsed.
    ///
    /// Decrements and broadcasts the countdown; when it reaches zero the
    /// phase's resolution runs and the next phase begins. No-op in untimed
    /// phases.
    pub fn tick(&mut self) {
        let Some(rule) = self.table.rule(self.state.phase) else {
            return;
        };

        if self.state.remaining_secs > 0 {
            self.state.remaining_secs -= 1;
            self.sink
                .broadcast(Notification::Timer(self.state.remaining_secs));
        }

        if self.state.remaining_secs == 0 {
            debug!(
                phase = self.state.phase.label(),
                resolution = ?rule.resolution,
                "Phase timer expired"
            );
            self.resolve(rule.resolution);
        }
    }

    /// Switch phase, announce it, and start its countdown if it has one.
    fn enter_phase(&mut self, phase: Phase) {
        self.state.phase = phase;
        self.sink.broadcast(Notification::Phase(phase));

        match self.table.rule(phase) {
            Some(rule) => {
                self.state.remaining_secs = rule.duration_secs;
                self.countdown_epoch = self.countdown_epoch.wrapping_add(1);
                self.sink.broadcast(Notification::Timer(rule.duration_secs));
            }
            None => self.state.remaining_secs = 0,
        }

        debug!(
            phase = phase.label(),
            remaining_secs = self.state.remaining_secs,
            night_no = self.state.night_no,
            "Entered phase"
        );
    }
}
