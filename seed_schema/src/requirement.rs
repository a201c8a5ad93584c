use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags::bitflags! {
    /// Accessibility requirement: abilities the player must hold before the
    /// item at a location can be obtained. The empty set is the "no gating"
    /// sentinel used for freely reachable locations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Requirement: u32 {
        const DOUBLE_JUMP  = 1 << 0;
        const FORWARD_DASH = 1 << 1;
        const WALL_KICK    = 1 << 2;
        const TIME_STOP    = 1 << 3;
        const WATER_MASK   = 1 << 4;
        const FIRE_ORB     = 1 << 5;
        const CARD_A       = 1 << 6;
        const CARD_B       = 1 << 7;
        const CARD_C       = 1 << 8;
        const CARD_D       = 1 << 9;
    }
}

impl Requirement {
    /// True when the location gates on nothing at all.
    pub fn is_trivial(&self) -> bool {
        self.is_empty()
    }
}

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Requirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}
