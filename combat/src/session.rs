use std::time::Instant;

use tracing::Level;

use crate::{
    DispatchableEvent, Dispatcher, Encounter, EncounterTemplate, MAX_COMMANDS_PER_ENCOUNTER,
    MonsterFactory, MonsterId, Player, PlayerTemplate, SessionResult, SessionResultInner,
    SessionTemplate,
};

/// A move requested by whoever is driving the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play {
        card: String,
        target: Option<MonsterId>,
    },
    EndTurn,
}

impl Command {
    pub fn play(card: impl Into<String>) -> Self {
        Command::Play {
            card: card.into(),
            target: None,
        }
    }

    pub fn play_at(card: impl Into<String>, target: MonsterId) -> Self {
        Command::Play {
            card: card.into(),
            target: Some(target),
        }
    }
}

/// Source of player moves, typically a text prompt or a scripted bot.
pub trait Commander {
    fn next_command(&mut self, encounter: &Encounter<'_>) -> Command;
}

impl<F> Commander for F
where
    F: FnMut(&Encounter<'_>) -> Command,
{
    fn next_command(&mut self, encounter: &Encounter<'_>) -> Command {
        self(encounter)
    }
}

/// A full game: one player fighting through encounters in order.
#[derive(Clone, Debug)]
pub struct Session {
    pub player: Player,
    pub encounters: Vec<EncounterTemplate>,
    pub source: Option<String>,
    factory: MonsterFactory,
    dispatcher: Dispatcher,
}

impl TryFrom<SessionTemplate> for Session {
    type Error = anyhow::Error;

    fn try_from(template: SessionTemplate) -> Result<Self, Self::Error> {
        if template.encounters.is_empty() {
            anyhow::bail!("session needs at least one encounter");
        }
        for (number, encounter) in template.encounters.iter().enumerate() {
            encounter
                .validate()
                .map_err(|error| anyhow::anyhow!("invalid encounter {number}: {error}"))?;
        }
        let player = PlayerTemplate::from(template.player)
            .create_player(template.shuffle.into_policy(template.seed))?;
        let factory = template
            .seed
            .map(MonsterFactory::seeded)
            .unwrap_or_default();

        Ok(Self {
            player,
            encounters: template.encounters,
            source: template.source,
            factory,
            dispatcher: Dispatcher::default(),
        })
    }
}

impl Session {
    pub fn new(player: Player, encounters: Vec<EncounterTemplate>) -> Self {
        Self {
            player,
            encounters,
            source: None,
            factory: MonsterFactory::default(),
            dispatcher: Dispatcher::default(),
        }
    }

    pub fn with_factory(mut self, factory: MonsterFactory) -> Self {
        self.factory = factory;
        self
    }

    pub fn with_channel(mut self, sender: std::sync::mpsc::Sender<DispatchableEvent>) -> Self {
        self.dispatcher = self.dispatcher.with_channel(sender);
        self
    }

    pub fn with_stdout(mut self) -> Self {
        self.dispatcher = self.dispatcher.with_stdout();
        self
    }

    /// Plays every encounter in order until the player falls or the last
    /// roster is cleared.
    pub fn run(mut self, commander: &mut impl Commander) -> SessionResult {
        let t_start = Instant::now();
        let mut events = Vec::new();
        let mut encounters_cleared = 0;
        let mut stalled = false;

        for (number, template) in self.encounters.iter().enumerate() {
            if self.player.entity.is_defeated() {
                break;
            }
            let span = tracing::info_span!("encounter", number, source = ?self.source);
            let _guard = span.enter();

            let mut encounter = Encounter::with_dispatcher(
                &mut self.player,
                &template.monsters,
                &mut self.factory,
                self.dispatcher.clone(),
            );
            let mut commands = 0;
            while encounter.is_active() && !encounter.player().entity.is_defeated() {
                if commands >= *MAX_COMMANDS_PER_ENCOUNTER {
                    tracing::event!(name: "encounter stalled", Level::WARN, commands);
                    stalled = true;
                    break;
                }
                commands += 1;
                match commander.next_command(&encounter) {
                    Command::Play { card, target } => {
                        encounter.play_card(&card, target);
                    }
                    Command::EndTurn => {
                        encounter.end_player_turn();
                        encounter.enemy_turn();
                    }
                }
            }
            let cleared = !encounter.is_active();
            events.extend(encounter.into_events());
            if stalled {
                break;
            }
            if cleared {
                self.player.end_turn();
                encounters_cleared += 1;
                self.dispatcher
                    .dispatch(DispatchableEvent::EncounterCleared(number));
            }
        }

        let inner = SessionResultInner {
            events,
            duration: Instant::now() - t_start,
            encounters_cleared,
            player: self.player,
        };
        if stalled {
            SessionResult::Stalled(inner)
        } else if inner.player.entity.is_defeated() {
            SessionResult::Defeat(inner)
        } else {
            SessionResult::Victory(inner)
        }
    }
}
