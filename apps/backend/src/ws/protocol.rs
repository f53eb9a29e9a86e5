use serde::{Deserialize, Serialize};

use crate::domain::{Ballot, Faction, ParticipantId, ParticipantView, Phase, Role, WitchAction};
use crate::services::game_flow::{InboundEvent, Notification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WitchChoice {
    Heal,
    Kill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Join {
        #[serde(default)]
        name: String,
    },
    Start,
    /// Targets stay raw strings here; an id that does not parse is an
    /// invalid command, not a malformed frame.
    Protect {
        target: String,
    },
    WolfKill {
        target: String,
    },
    WitchAction {
        action: WitchChoice,
        #[serde(default)]
        target: Option<String>,
    },
    /// A participant id for day votes, `"kill"` to execute in a trial.
    Vote {
        ballot: String,
    },
    Chat {
        message: String,
    },
}

impl TryFrom<ClientMsg> for InboundEvent {
    type Error = &'static str;

    fn try_from(msg: ClientMsg) -> Result<Self, Self::Error> {
        let event = match msg {
            ClientMsg::Join { name } => InboundEvent::Join { name },
            ClientMsg::Start => InboundEvent::Start,
            ClientMsg::Protect { target } => InboundEvent::Protect {
                target: parse_target(&target)?,
            },
            ClientMsg::WolfKill { target } => InboundEvent::WolfKill {
                target: parse_target(&target)?,
            },
            ClientMsg::WitchAction {
                action: WitchChoice::Heal,
                ..
            } => InboundEvent::WitchAction(WitchAction::Heal),
            ClientMsg::WitchAction {
                action: WitchChoice::Kill,
                target: Some(target),
            } => InboundEvent::WitchAction(WitchAction::Kill(parse_target(&target)?)),
            ClientMsg::WitchAction {
                action: WitchChoice::Kill,
                target: None,
            } => return Err("witch kill requires a target"),
            ClientMsg::Vote { ballot } => InboundEvent::Vote(Ballot::parse(&ballot)),
            ClientMsg::Chat { message } => InboundEvent::Chat { message },
        };
        Ok(event)
    }
}

fn parse_target(raw: &str) -> Result<ParticipantId, &'static str> {
    raw.parse().map_err(|_| "target is not a participant id")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    /// First frame on every connection.
    Welcome {
        id: ParticipantId,
    },

    Players {
        players: Vec<ParticipantView>,
    },

    Role {
        role: Role,
    },

    Phase {
        phase: Phase,
    },

    Timer {
        remaining: u32,
    },

    WitchInfo {
        target: Option<ParticipantId>,
    },

    DayResult {
        victim: Option<ParticipantId>,
    },

    TrialStart {
        candidate: ParticipantId,
    },

    Eliminated {
        id: ParticipantId,
    },

    GameOver {
        winner: Faction,
    },

    Chat {
        from: ParticipantId,
        name: String,
        message: String,
    },

    Error {
        code: ErrorCode,
        message: String,
    },
}

impl From<Notification> for ServerMsg {
    fn from(notification: Notification) -> Self {
        match notification {
            Notification::Players(players) => ServerMsg::Players { players },
            Notification::Role(role) => ServerMsg::Role { role },
            Notification::Phase(phase) => ServerMsg::Phase { phase },
            Notification::Timer(remaining) => ServerMsg::Timer { remaining },
            Notification::WitchInfo(target) => ServerMsg::WitchInfo { target },
            Notification::DayResult(victim) => ServerMsg::DayResult { victim },
            Notification::TrialStart(candidate) => ServerMsg::TrialStart { candidate },
            Notification::Eliminated(id) => ServerMsg::Eliminated { id },
            Notification::GameOver(winner) => ServerMsg::GameOver { winner },
            Notification::Chat {
                from,
                name,
                message,
            } => ServerMsg::Chat {
                from,
                name,
                message,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Unparseable frame; the socket is closed after this.
    BadRequest,
    /// Well-formed but incomplete command; the socket stays open.
    InvalidCommand,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "bad_request",
            ErrorCode::InvalidCommand => "invalid_command",
        }
    }
}
