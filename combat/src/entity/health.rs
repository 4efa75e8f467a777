/// Current and maximum health. Current health never leaves `0..=max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EntityHealth(u32, u32);

impl EntityHealth {
    pub fn full(max: u32) -> Self {
        Self(max, max)
    }

    pub fn max(&self) -> u32 {
        self.1
    }

    pub fn current(&self) -> u32 {
        self.0
    }

    pub fn lost(&self) -> u32 {
        self.1 - self.0
    }

    pub fn is_depleted(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for EntityHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} HP", self.current(), self.max())
    }
}

impl std::ops::Sub<u32> for EntityHealth {
    type Output = Self;

    fn sub(self, other: u32) -> Self::Output {
        Self(self.0.saturating_sub(other), self.1)
    }
}

impl std::ops::SubAssign<u32> for EntityHealth {
    fn sub_assign(&mut self, other: u32) {
        *self = *self - other;
    }
}
