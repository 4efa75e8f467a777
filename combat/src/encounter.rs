use models::{ActionEffect, Status};
use tracing::Level;

use crate::{
    CombatEvent, Combatant, DispatchableEvent, Dispatcher, Monster, MonsterFactory, MonsterId,
    MonsterSummary, MonsterTemplate, Player, PlayerSummary, TaggedCombatEvent, scale_damage,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Player,
    Monster,
}

/// One battle between a borrowed player and the monsters it spawns.
///
/// The roster keeps every monster it was built with; defeated ones are
/// filtered out of [`Encounter::monsters`] rather than removed.
#[derive(Debug)]
pub struct Encounter<'a> {
    player: &'a mut Player,
    monsters: Vec<Monster>,
    turn: Turn,
    events: Vec<TaggedCombatEvent>,
    dispatcher: Dispatcher,
}

impl<'a> Encounter<'a> {
    pub fn new(
        player: &'a mut Player,
        templates: &[MonsterTemplate],
        factory: &mut MonsterFactory,
    ) -> Self {
        Self::with_dispatcher(player, templates, factory, Dispatcher::default())
    }

    /// Spawns the roster in template order, folds the player's discard pile
    /// back into their deck and opens the first player turn.
    pub fn with_dispatcher(
        player: &'a mut Player,
        templates: &[MonsterTemplate],
        factory: &mut MonsterFactory,
        dispatcher: Dispatcher,
    ) -> Self {
        let monsters: Vec<Monster> = templates.iter().map(|t| factory.create(t)).collect();
        for monster in &monsters {
            dispatcher.log(format!("spawned {monster}"));
        }
        let mut encounter = Self {
            player,
            monsters,
            turn: Turn::Player,
            events: Vec::new(),
            dispatcher,
        };
        encounter.player.start_new_encounter();
        encounter
            .dispatcher
            .dispatch(DispatchableEvent::EncounterStarted(
                encounter.monster_summaries(),
            ));
        encounter.start_new_turn();
        encounter
    }

    pub fn player(&self) -> &Player {
        &*self.player
    }

    pub fn player_summary(&self) -> PlayerSummary {
        PlayerSummary::from(&*self.player)
    }

    /// Monsters still standing, in roster order.
    pub fn monsters(&self) -> Vec<&Monster> {
        self.monsters.iter().filter(|m| !m.is_defeated()).collect()
    }

    /// Every monster the encounter started with, defeated or not.
    pub fn roster(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters
            .iter()
            .find(|m| m.id == id && !m.is_defeated())
    }

    pub fn monster_summaries(&self) -> Vec<MonsterSummary> {
        self.monsters().into_iter().map(MonsterSummary::from).collect()
    }

    pub fn is_active(&self) -> bool {
        self.monsters.iter().any(|m| !m.is_defeated())
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn is_player_turn(&self) -> bool {
        self.turn == Turn::Player
    }

    pub fn events(&self) -> &[TaggedCombatEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TaggedCombatEvent> {
        self.events
    }

    pub fn start_new_turn(&mut self) {
        self.set_turn(Turn::Player);
        self.player.new_turn();
    }

    /// Discards the player's hand and ticks every living monster into its
    /// own turn.
    pub fn end_player_turn(&mut self) {
        self.set_turn(Turn::Monster);
        self.player.end_turn();
        for monster in self.monsters.iter_mut().filter(|m| !m.is_defeated()) {
            monster.entity.new_turn();
        }
    }

    /// Plays the first card in hand called `card_name`, aimed at `target_id`
    /// when the card needs a target. Returns `false` without changing any
    /// state if the play is not allowed.
    #[tracing::instrument(skip(self))]
    pub fn play_card(&mut self, card_name: &str, target_id: Option<MonsterId>) -> bool {
        if self.turn != Turn::Player {
            return self.reject(card_name, "not the player's turn");
        }
        let Some(card) = self
            .player
            .hand()
            .iter()
            .find(|c| c.name() == card_name)
            .cloned()
        else {
            return self.reject(card_name, "card not in hand");
        };

        let target_index = match (card.requires_target(), target_id) {
            (false, _) => None,
            (true, None) => return self.reject(card_name, "card requires a target"),
            (true, Some(id)) => match self.living_index(id) {
                Some(index) => Some(index),
                None => return self.reject(card_name, "no living monster with that id"),
            },
        };

        if self.player.play_card(card_name).is_none() {
            return self.reject(card_name, "insufficient energy");
        }
        self.record(Combatant::Player, CombatEvent::PlayCard(card.name().to_string()));

        self.player.entity.add_block(card.block());
        self.player.entity.add_strength(card.strength());
        if card.block() > 0 {
            self.record(Combatant::Player, CombatEvent::GainBlock(card.block()));
        }
        if card.strength() > 0 {
            self.record(Combatant::Player, CombatEvent::GainStrength(card.strength()));
        }

        let Some(index) = target_index else {
            return true;
        };
        let weak = card.status(Status::Weak);
        let vulnerable = card.status(Status::Vulnerable);
        let target = &mut self.monsters[index];
        target.entity.add_vulnerable(vulnerable);
        target.entity.add_weak(weak);

        let attack = scale_damage(
            card.damage().saturating_add(self.player.entity.strength),
            target.entity.is_vulnerable(),
            self.player.entity.is_weak(),
        );
        let lost = target.entity.reduce_health(attack);
        let target_id = target.id;
        let defeated = target.is_defeated();

        let tag = Combatant::Monster(target_id);
        if vulnerable > 0 {
            self.record(Combatant::Player, CombatEvent::ApplyVulnerable(tag, vulnerable));
        }
        if weak > 0 {
            self.record(Combatant::Player, CombatEvent::ApplyWeak(tag, weak));
        }
        self.record(Combatant::Player, CombatEvent::DealDamage(tag, attack, lost));
        if defeated {
            self.record(tag, CombatEvent::Defeated);
        }
        true
    }

    /// Every living monster acts once in roster order, then the player's
    /// next turn starts. Does nothing during the player's turn.
    #[tracing::instrument(skip(self))]
    pub fn enemy_turn(&mut self) {
        if self.turn == Turn::Player {
            tracing::event!(name: "enemy turn skipped", Level::DEBUG, "still the player's turn");
            return;
        }
        let acting: Vec<usize> = (0..self.monsters.len())
            .filter(|&i| !self.monsters[i].is_defeated())
            .collect();

        for index in acting {
            let was_defeated = self.player.entity.is_defeated();
            let monster = &mut self.monsters[index];
            let action = monster.action();
            let tag = Combatant::Monster(monster.id);
            let mut events = vec![TaggedCombatEvent(tag, CombatEvent::Act(action.clone()))];

            let weak = action.get(ActionEffect::Weak);
            let vulnerable = action.get(ActionEffect::Vulnerable);
            let strength = action.get(ActionEffect::Strength);
            self.player.entity.add_weak(weak);
            self.player.entity.add_vulnerable(vulnerable);
            monster.entity.add_strength(strength);
            if weak > 0 {
                events.push(TaggedCombatEvent(tag, CombatEvent::ApplyWeak(Combatant::Player, weak)));
            }
            if vulnerable > 0 {
                events.push(TaggedCombatEvent(
                    tag,
                    CombatEvent::ApplyVulnerable(Combatant::Player, vulnerable),
                ));
            }
            if strength > 0 {
                events.push(TaggedCombatEvent(tag, CombatEvent::GainStrength(strength)));
            }

            let attack = scale_damage(
                action
                    .get(ActionEffect::Damage)
                    .saturating_add(monster.entity.strength),
                self.player.entity.is_vulnerable(),
                monster.entity.is_weak(),
            );
            let lost = self.player.entity.reduce_health(attack);
            events.push(TaggedCombatEvent(
                tag,
                CombatEvent::DealDamage(Combatant::Player, attack, lost),
            ));
            if !was_defeated && self.player.entity.is_defeated() {
                events.push(TaggedCombatEvent(Combatant::Player, CombatEvent::Defeated));
            }

            for TaggedCombatEvent(source, event) in events {
                self.record(source, event);
            }
        }
        self.start_new_turn();
    }

    fn living_index(&self, id: MonsterId) -> Option<usize> {
        self.monsters
            .iter()
            .position(|m| m.id == id && !m.is_defeated())
    }

    fn set_turn(&mut self, turn: Turn) {
        self.turn = turn;
        self.dispatcher.dispatch(DispatchableEvent::TurnChanged(turn));
    }

    fn record(&mut self, source: Combatant, event: CombatEvent) {
        tracing::event!(name: "combat event", Level::DEBUG, %source, ?event);
        let tagged = TaggedCombatEvent(source, event);
        self.dispatcher
            .dispatch(DispatchableEvent::Combat(tagged.clone()));
        self.events.push(tagged);
    }

    fn reject(&self, card_name: &str, reason: &str) -> bool {
        tracing::event!(name: "card rejected", Level::DEBUG, card = card_name, reason);
        self.dispatcher
            .warn(format!("cannot play {card_name:?}: {reason}"));
        false
    }
}
