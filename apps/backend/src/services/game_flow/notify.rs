//! Outbound notifications and the sink they are delivered through.

use crate::domain::{Faction, ParticipantId, ParticipantView, Phase, Role};

/// Everything the orchestrator tells participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Full roster, without roles.
    Players(Vec<ParticipantView>),
    /// Private role reveal.
    Role(Role),
    Phase(Phase),
    /// Seconds left in the current phase.
    Timer(u32),
    /// Wolves' pending target, told to the witch.
    WitchInfo(Option<ParticipantId>),
    /// The night's victim, if any.
    DayResult(Option<ParticipantId>),
    TrialStart(ParticipantId),
    Eliminated(ParticipantId),
    GameOver(Faction),
    Chat {
        from: ParticipantId,
        name: String,
        message: String,
    },
}

/// Transport-facing port. The orchestrator holds no sockets; it only calls
/// these two methods.
pub trait NotificationSink {
    fn broadcast(&mut self, notification: Notification);

    fn unicast(&mut self, to: ParticipantId, notification: Notification);
}

/// A delivered notification with its audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Broadcast(Notification),
    Unicast(ParticipantId, Notification),
}

/// Sink that keeps every delivery in order. Used by tests and simulations.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    deliveries: Vec<Delivery>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn broadcasts(&self) -> impl Iterator<Item = &Notification> {
        self.deliveries.iter().filter_map(|d| match d {
            Delivery::Broadcast(n) => Some(n),
            Delivery::Unicast(..) => None,
        })
    }

    /// Notifications unicast to `to`, in order.
    pub fn unicasts_to(&self, to: ParticipantId) -> Vec<&Notification> {
        self.deliveries
            .iter()
            .filter_map(|d| match d {
                Delivery::Unicast(id, n) if *id == to => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Phases announced so far, in order.
    pub fn phases(&self) -> Vec<Phase> {
        self.broadcasts()
            .filter_map(|n| match n {
                Notification::Phase(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn game_over(&self) -> Option<Faction> {
        self.broadcasts().find_map(|n| match n {
            Notification::GameOver(f) => Some(*f),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.deliveries.clear();
    }
}

impl NotificationSink for RecordingSink {
    fn broadcast(&mut self, notification: Notification) {
        self.deliveries.push(Delivery::Broadcast(notification));
    }

    fn unicast(&mut self, to: ParticipantId, notification: Notification) {
        self.deliveries.push(Delivery::Unicast(to, notification));
    }
}
