use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier for one generated playthrough, persisted in the save file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedId(pub u32);

impl fmt::Display for SeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

bitflags::bitflags! {
    /// Option flags baked into a seed at generation time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SeedOptions: u32 {
        /// Placements live on a remote multiworld server, not in local data.
        const SHARED_SESSION = 1 << 0;
        /// Gate-opening items are handed out in a fixed order.
        const PROGRESSIVE_GATES = 1 << 1;
        /// Key cards unlock their own doors only.
        const KEY_CARDS = 1 << 2;
        /// Seed was fetched from the online seed library.
        const DOWNLOADABLE = 1 << 3;
        /// Starting loadout is re-rolled instead of fixed.
        const RANDOM_START = 1 << 4;
    }
}

// flag-name string form ("SHARED_SESSION | KEY_CARDS"), shared with the
// harness fixture format
impl Serialize for SeedOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for SeedOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Seed identity plus the option set it was generated with.
///
/// The display form (id hex followed by option bits in hex) is the string
/// users exchange to replay a seed, so it must stay byte-stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed {
    pub id: SeedId,
    pub options: SeedOptions,
}

impl Seed {
    pub fn new(id: u32, options: SeedOptions) -> Self {
        Self {
            id: SeedId(id),
            options,
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02X}", self.id, self.options.bits())
    }
}

/// How a seed's item placement was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillingMethod {
    /// Forward fill: items placed in reachability order.
    ForwardFill,
    /// Unconstrained random fill, validated afterwards.
    RandomFill,
    /// Placement owned by a connected multiworld session server.
    SharedSession,
}
