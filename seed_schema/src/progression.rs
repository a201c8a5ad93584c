use serde::{Deserialize, Serialize};

use crate::item_location::ItemLocation;

/// One layer of the accessibility chain: the placements that become
/// reachable after `depth` progression steps, linked forward to the next
/// deeper layer.
///
/// Built by the fill engine and treated as immutable here. Only forward
/// traversal is supported; the order of `locations` within a layer is the
/// order the builder emitted and is stable for a fixed seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressionChain {
    pub locations: Vec<ItemLocation>,
    pub sub: Option<Box<ProgressionChain>>,
}

impl ProgressionChain {
    pub fn terminal(locations: Vec<ItemLocation>) -> Self {
        Self {
            locations,
            sub: None,
        }
    }

    /// Forward iterator over the layers, root (depth 0) first.
    pub fn layers(&self) -> Layers<'_> {
        Layers {
            current: Some(self),
        }
    }

    pub fn depth(&self) -> usize {
        self.layers().count()
    }
}

pub struct Layers<'a> {
    current: Option<&'a ProgressionChain>,
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a ProgressionChain;

    fn next(&mut self) -> Option<Self::Item> {
        let layer = self.current?;
        self.current = layer.sub.as_deref();
        Some(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, Requirement};

    fn placement(name: &str) -> ItemLocation {
        ItemLocation::new(Location::new("Area", name), "Item", Requirement::empty())
    }

    #[test]
    fn layers_walk_forward_from_root() {
        let chain = ProgressionChain {
            locations: vec![placement("first")],
            sub: Some(Box::new(ProgressionChain {
                locations: vec![placement("second")],
                sub: Some(Box::new(ProgressionChain::terminal(vec![placement(
                    "third",
                )]))),
            })),
        };

        let names: Vec<_> = chain
            .layers()
            .map(|layer| layer.locations[0].location.name.clone())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(chain.depth(), 3);
    }
}
