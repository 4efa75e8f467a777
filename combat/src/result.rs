use std::time::Duration;

use crate::{CombatEvent, Player, TaggedCombatEvent};

#[derive(Debug)]
pub struct SessionResultInner {
    pub events: Vec<TaggedCombatEvent>,
    pub duration: Duration,
    pub encounters_cleared: usize,
    pub player: Player,
}

#[derive(Debug)]
pub enum SessionResult {
    Victory(SessionResultInner),
    Defeat(SessionResultInner),
    /// An encounter ran past the command cap without being decided.
    Stalled(SessionResultInner),
}

impl SessionResult {
    pub fn inner_ref(&self) -> &SessionResultInner {
        match self {
            SessionResult::Victory(r) | SessionResult::Defeat(r) | SessionResult::Stalled(r) => r,
        }
    }

    pub fn short_str(&self) -> String {
        match self {
            SessionResult::Victory(..) => "Victory".to_string(),
            SessionResult::Defeat(..) => "Defeat".to_string(),
            SessionResult::Stalled(..) => "Stalled".to_string(),
        }
    }
}

impl std::fmt::Display for SessionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner_ref();
        let mut res = format!(
            "[{:?}] {} after {} encounter(s), {}\n",
            inner.duration,
            self.short_str(),
            inner.encounters_cleared,
            inner.player.entity.health,
        );
        for event in &inner.events {
            match &event.1 {
                CombatEvent::PlayCard(name) => res.push_str(&format!("[{}] {name}\n", event.0)),
                e => res.push_str(&format!("  {e:?} <- {}\n", event.0)),
            }
        }
        write!(f, "{res}")
    }
}
