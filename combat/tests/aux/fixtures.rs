use combat::{Behavior, Monster, MonsterFactory, MonsterTemplate, Player, ReshufflePolicy};
use models::{CardKind, MonsterKind};

#[allow(unused)]
pub static SEED: u64 = 0x3a3f7af8085da7a2;

#[allow(unused)]
pub fn player_with(health: u32, cards: &[CardKind]) -> Player {
    Player::new(health, cards.iter().map(CardKind::card).collect())
        .with_reshuffle(ReshufflePolicy::InOrder)
}

#[allow(unused)]
pub fn factory() -> MonsterFactory {
    MonsterFactory::seeded(SEED)
}

#[allow(unused)]
pub fn roster(monsters: &[(MonsterKind, u32)]) -> Vec<MonsterTemplate> {
    monsters
        .iter()
        .map(|&(kind, health)| MonsterTemplate::new(kind, health))
        .collect()
}

#[allow(unused)]
pub fn louse_damage(monster: &Monster) -> u32 {
    match monster.behavior {
        Behavior::Louse { damage } => damage,
        ref other => panic!("expected a louse, got {other:?}"),
    }
}

/// Names of every card the player owns, sorted, for multiset comparisons.
#[allow(unused)]
pub fn card_pool(player: &Player) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = player.cards().map(|c| c.name()).collect();
    names.sort();
    names
}

#[allow(unused)]
pub fn hand_names(player: &Player) -> Vec<&'static str> {
    player.hand().iter().map(|c| c.name()).collect()
}
