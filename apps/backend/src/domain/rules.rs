/// Smallest roster that can field a wolf, a guard, a witch and two others.
pub const MIN_PLAYERS: usize = 5;

/// Display names are cut to this many characters.
pub const MAX_NAME_CHARS: usize = 32;

pub const PROTECT_SECS: u32 = 15;
pub const WOLF_SECS: u32 = 15;
pub const WITCH_SECS: u32 = 15;
pub const DISCUSSION_SECS: u32 = 90;
pub const VOTE_SECS: u32 = 15;
pub const TRIAL_SECS: u32 = 30;
pub const TRIAL_VOTE_SECS: u32 = 15;

/// Number of wolves for a roster of `player_count`: one per three players.
pub fn wolf_count(player_count: usize) -> usize {
    player_count / 3
}
