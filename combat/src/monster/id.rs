/// Roster identifier. Handed out in creation order by a
/// [`MonsterFactory`](super::MonsterFactory) and never reused by it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonsterId(u64);

impl From<u64> for MonsterId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MonsterId({})", self.0)
    }
}
