use std::fmt;

use serde::{Deserialize, Serialize};

use crate::requirement::Requirement;

/// Where an item was placed: a named check inside a named area.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub area: String,
    pub name: String,
}

impl Location {
    pub fn new(area: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.area, self.name)
    }
}

/// One placement produced by the fill engine: a location, the item put
/// there, and the requirement set that item unlocks.
///
/// A non-trivial `unlocks` value marks the placement as progression; the
/// empty set marks it as filler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLocation {
    pub location: Location,
    pub item: String,
    pub unlocks: Requirement,
}

impl ItemLocation {
    pub fn new(location: Location, item: impl Into<String>, unlocks: Requirement) -> Self {
        Self {
            location,
            item: item.into(),
            unlocks,
        }
    }

    pub fn is_progression(&self) -> bool {
        !self.unlocks.is_trivial()
    }
}

impl fmt::Display for ItemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.location, self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pairs_location_with_item() {
        let placement = ItemLocation::new(
            Location::new("Lake Serene", "Under the bridge"),
            "Wall Kick Boots",
            Requirement::WALL_KICK,
        );
        assert_eq!(
            placement.to_string(),
            "Lake Serene: Under the bridge - Wall Kick Boots"
        );
        assert!(placement.is_progression());
    }
}
