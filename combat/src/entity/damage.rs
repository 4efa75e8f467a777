use crate::{VULNERABLE_DAMAGE_RATIO, WEAK_DAMAGE_RATIO};

/// Scales an attack by the status multipliers and rounds down.
///
/// Vulnerable on the defender multiplies by 1.5, weak on the attacker by
/// 0.75. The ratios are kept exact so `floor(raw * 1.5 * 0.75)` holds
/// without float error.
pub fn scale_damage(raw: u32, defender_vulnerable: bool, attacker_weak: bool) -> u32 {
    let (mut numerator, mut denominator) = (raw as u64, 1u64);
    if defender_vulnerable {
        numerator *= VULNERABLE_DAMAGE_RATIO.0;
        denominator *= VULNERABLE_DAMAGE_RATIO.1;
    }
    if attacker_weak {
        numerator *= WEAK_DAMAGE_RATIO.0;
        denominator *= WEAK_DAMAGE_RATIO.1;
    }
    u32::try_from(numerator / denominator).unwrap_or(u32::MAX)
}
