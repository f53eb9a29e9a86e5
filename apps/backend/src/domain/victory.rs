use crate::domain::roster::Roster;
use crate::domain::state::Faction;

/// Decide whether the game is over, from living faction counts alone.
///
/// Returns at most one winner: no living wolves means the villagers won;
/// otherwise wolves win once they match or outnumber everyone else.
pub fn evaluate(roster: &Roster) -> Option<Faction> {
    let wolves = roster.living_wolf_count();
    if wolves == 0 {
        return Some(Faction::Villagers);
    }
    if wolves >= roster.living_non_wolf_count() {
        return Some(Faction::Wolves);
    }
    None
}
