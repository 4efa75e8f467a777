use std::ops::RangeInclusive;

lazy_static::lazy_static! {
    pub static ref HAND_SIZE: usize = 5;
    pub static ref ENERGY_PER_TURN: u32 = 3;
    pub static ref LOUSE_DAMAGE: RangeInclusive<u32> = 5..=7;
    pub static ref CULTIST_BASE_DAMAGE: u32 = 6;
    pub static ref VULNERABLE_DAMAGE_RATIO: (u64, u64) = (3, 2);
    pub static ref WEAK_DAMAGE_RATIO: (u64, u64) = (3, 4);
    pub static ref MAX_MONSTERS_PER_ENCOUNTER: usize = 3;
    pub static ref MAX_COMMANDS_PER_ENCOUNTER: usize = 1_000;
}
