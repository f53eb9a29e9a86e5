//! Game tunables: phase durations, minimum roster size, RNG seed.

use std::env;
use std::str::FromStr;

use crate::domain::rules;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Roster size required to start; never below [`rules::MIN_PLAYERS`].
    pub min_players: usize,
    pub protect_secs: u32,
    pub wolf_secs: u32,
    pub witch_secs: u32,
    pub discussion_secs: u32,
    pub vote_secs: u32,
    /// Applies to each of the two candidate presentations.
    pub trial_secs: u32,
    pub trial_vote_secs: u32,
    /// Fixed seed for role shuffles; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: rules::MIN_PLAYERS,
            protect_secs: rules::PROTECT_SECS,
            wolf_secs: rules::WOLF_SECS,
            witch_secs: rules::WITCH_SECS,
            discussion_secs: rules::DISCUSSION_SECS,
            vote_secs: rules::VOTE_SECS,
            trial_secs: rules::TRIAL_SECS,
            trial_vote_secs: rules::TRIAL_VOTE_SECS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load from `WEREWOLF_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            min_players: var_or("WEREWOLF_MIN_PLAYERS", defaults.min_players)?,
            protect_secs: var_or("WEREWOLF_PROTECT_SECS", defaults.protect_secs)?,
            wolf_secs: var_or("WEREWOLF_WOLF_SECS", defaults.wolf_secs)?,
            witch_secs: var_or("WEREWOLF_WITCH_SECS", defaults.witch_secs)?,
            discussion_secs: var_or("WEREWOLF_DISCUSSION_SECS", defaults.discussion_secs)?,
            vote_secs: var_or("WEREWOLF_VOTE_SECS", defaults.vote_secs)?,
            trial_secs: var_or("WEREWOLF_TRIAL_SECS", defaults.trial_secs)?,
            trial_vote_secs: var_or("WEREWOLF_TRIAL_VOTE_SECS", defaults.trial_vote_secs)?,
            seed: optional_var("WEREWOLF_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.min_players < rules::MIN_PLAYERS {
            return Err(AppError::config(format!(
                "WEREWOLF_MIN_PLAYERS must be at least {}, got {}",
                rules::MIN_PLAYERS,
                self.min_players
            )));
        }
        let durations = [
            ("WEREWOLF_PROTECT_SECS", self.protect_secs),
            ("WEREWOLF_WOLF_SECS", self.wolf_secs),
            ("WEREWOLF_WITCH_SECS", self.witch_secs),
            ("WEREWOLF_DISCUSSION_SECS", self.discussion_secs),
            ("WEREWOLF_VOTE_SECS", self.vote_secs),
            ("WEREWOLF_TRIAL_SECS", self.trial_secs),
            ("WEREWOLF_TRIAL_VOTE_SECS", self.trial_vote_secs),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, secs)| *secs == 0) {
            return Err(AppError::config(format!("{name} must be at least 1")));
        }
        Ok(())
    }

    /// Every timed phase lasts `secs`. Handy for simulations and tests.
    pub fn with_uniform_durations(mut self, secs: u32) -> Self {
        self.protect_secs = secs;
        self.wolf_secs = secs;
        self.witch_secs = secs;
        self.discussion_secs = secs;
        self.vote_secs = secs;
        self.trial_secs = secs;
        self.trial_vote_secs = secs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn var_or<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match optional_var(name)? {
        Some(value) => Ok(value),
        None => Ok(default),
    }
}

fn optional_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(None),
    }
}
