use tracing::info;

use super::{GameFlow, Notification, NotificationSink, Resolution};
use crate::domain::night::resolve_night;
use crate::domain::{
    assign_roles, evaluate, tally, tally_trial, Faction, GameState, ParticipantId, Phase, Role,
    RoundState, TallyOutcome, TrialCandidates, Verdict,
};
use crate::errors::domain::DomainError;

impl<S: NotificationSink> GameFlow<S> {
    /// Deal roles to everyone seated and open the first night.
    ///
    /// Each participant learns their own role by unicast only.
    pub(super) fn start_game(&mut self) -> Result<(), DomainError> {
        let ids = self.state.roster.ids();
        let assignment = assign_roles(&ids, &mut self.rng)?;
        self.state.roster.apply_roles(&assignment);
        self.state.round = RoundState::empty();
        self.state.trial = None;
        self.state.night_no = 0;

        info!(players = ids.len(), "Game started");

        for (id, role) in assignment {
            self.sink.unicast(id, Notification::Role(role));
        }
        self.begin_night();
        Ok(())
    }

    /// Run the resolution bound to an expired phase.
    pub(super) fn resolve(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::OpenWolfPhase => self.enter_phase(Phase::Wolf),
            Resolution::OpenWitchPhase => self.open_witch_phase(),
            Resolution::ResolveNight => self.resolve_night_phase(),
            Resolution::OpenVote => self.open_ballot(Phase::Vote),
            Resolution::ResolveVote => self.resolve_day_vote(),
            Resolution::PresentSecondCandidate => self.present_second_candidate(),
            Resolution::OpenTrialVote => self.open_ballot(Phase::TrialVote),
            Resolution::ResolveTrial => self.resolve_trial(),
        }
    }

    fn begin_night(&mut self) {
        self.state.night_no += 1;
        self.state.round.begin_night();
        self.state.trial = None;
        self.enter_phase(Phase::Protect);
    }

    fn open_witch_phase(&mut self) {
        self.enter_phase(Phase::Witch);
        let pending = self.state.round.night_kill;
        for witch in self.state.roster.living_with_role(Role::Witch) {
            self.sink.unicast(witch, Notification::WitchInfo(pending));
        }
    }

    fn resolve_night_phase(&mut self) {
        self.enter_phase(Phase::Announce);
        let outcome = resolve_night(&mut self.state.roster, &mut self.state.round);

        info!(
            night_no = self.state.night_no,
            victim = ?outcome.victim,
            poisoned = ?outcome.poisoned,
            "Night resolved"
        );

        self.sink.broadcast(Notification::DayResult(outcome.victim));
        for dead in outcome.victim.into_iter().chain(outcome.poisoned) {
            self.sink.broadcast(Notification::Eliminated(dead));
        }

        if self.check_victory() {
            return;
        }
        self.enter_phase(Phase::Discussion);
    }

    fn open_ballot(&mut self, phase: Phase) {
        self.state.round.ballots.clear();
        self.enter_phase(phase);
    }

    fn resolve_day_vote(&mut self) {
        match tally(&self.state.round.ballots) {
            TallyOutcome::Elected(id) => self.eliminate_and_continue(id),
            TallyOutcome::Tie(first, second) => {
                info!(%first, %second, "Day vote tied, opening trial");
                self.state.trial = Some(TrialCandidates { first, second });
                self.enter_phase(Phase::Trial1);
                self.sink.broadcast(Notification::TrialStart(first));
            }
            TallyOutcome::NoResolution => {
                info!("Day vote produced no elimination");
                self.begin_night();
            }
        }
    }

    fn present_second_candidate(&mut self) {
        match self.state.trial {
            Some(candidates) => {
                self.enter_phase(Phase::Trial2);
                self.sink
                    .broadcast(Notification::TrialStart(candidates.second));
            }
            None => self.begin_night(),
        }
    }

    /// Only the first candidate can be executed.
    fn resolve_trial(&mut self) {
        let candidates = self.state.trial.take();
        let count = tally_trial(&self.state.round.ballots);
        info!(kill = count.kill, spare = count.spare, "Trial vote counted");

        match (candidates, count.verdict()) {
            (Some(candidates), Verdict::Execute) => self.eliminate_and_continue(candidates.first),
            _ => self.begin_night(),
        }
    }

    fn eliminate_and_continue(&mut self, id: ParticipantId) {
        if self.state.roster.eliminate(id) {
            info!(participant = %id, "Participant eliminated");
            self.sink.broadcast(Notification::Eliminated(id));
        }
        if self.check_victory() {
            return;
        }
        self.begin_night();
    }

    /// Evaluate the win condition once; on a result, end the game.
    fn check_victory(&mut self) -> bool {
        match evaluate(&self.state.roster) {
            Some(winner) => {
                self.finish_game(winner);
                true
            }
            None => false,
        }
    }

    fn finish_game(&mut self, winner: Faction) {
        info!(?winner, night_no = self.state.night_no, "Game over");
        self.sink.broadcast(Notification::GameOver(winner));
        self.state = GameState::new();
        self.enter_phase(Phase::Waiting);
        self.sink
            .broadcast(Notification::Players(self.state.roster.views()));
    }
}
