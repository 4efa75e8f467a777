use std::collections::VecDeque;

use combat::{Command, Commander, Encounter};

/// Plays the first affordable card in hand at the first living monster and
/// ends the turn once nothing is affordable.
#[allow(unused)]
pub struct GreedyCommander;

impl Commander for GreedyCommander {
    fn next_command(&mut self, encounter: &Encounter<'_>) -> Command {
        let player = encounter.player();
        let target = encounter.monsters().first().map(|m| m.id);
        player
            .hand()
            .iter()
            .find(|c| c.energy_cost() <= player.energy())
            .map(|c| match (c.requires_target(), target) {
                (true, Some(target)) => Command::play_at(c.name(), target),
                _ => Command::play(c.name()),
            })
            .unwrap_or(Command::EndTurn)
    }
}

/// Replays a fixed list of commands, then keeps ending turns.
#[allow(unused)]
pub struct ScriptedCommander(pub VecDeque<Command>);

impl Commander for ScriptedCommander {
    fn next_command(&mut self, _encounter: &Encounter<'_>) -> Command {
        self.0.pop_front().unwrap_or(Command::EndTurn)
    }
}

/// Never does anything useful.
#[allow(unused)]
pub struct StubbornCommander;

impl Commander for StubbornCommander {
    fn next_command(&mut self, _encounter: &Encounter<'_>) -> Command {
        Command::play("Whirlwind")
    }
}
