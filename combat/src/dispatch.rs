use std::sync::mpsc::Sender;

use crate::{MonsterSummary, TaggedCombatEvent, Turn};

#[derive(Clone, Debug)]
pub enum DispatchableEvent {
    Log(String),
    Warning(String),
    EncounterStarted(Vec<MonsterSummary>),
    EncounterCleared(usize),
    TurnChanged(Turn),
    Combat(TaggedCombatEvent),
}

/// Fans engine events out to an optional channel and/or stderr.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    event_sender: Option<Sender<DispatchableEvent>>,
    stdout_enabled: bool,
}

impl Dispatcher {
    pub fn with_channel(mut self, sender: Sender<DispatchableEvent>) -> Self {
        self.event_sender = Some(sender);
        self
    }

    pub fn with_stdout(mut self) -> Self {
        self.stdout_enabled = true;
        self
    }

    pub fn log(&self, s: String) {
        self.dispatch(DispatchableEvent::Log(s))
    }

    pub fn warn(&self, s: String) {
        self.dispatch(DispatchableEvent::Warning(s))
    }

    pub fn dispatch(&self, event: DispatchableEvent) {
        if self.stdout_enabled {
            eprintln!("EVENT: {:?}", event);
        }
        if let Some(ref tx) = self.event_sender {
            let _ = tx.send(event);
        }
    }
}
