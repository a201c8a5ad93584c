//! Zoom-gated size recomputation.
//!
//! Text measurement is expensive on the host side, so per-slot sizes are
//! recomputed only when the global display zoom actually changes; every
//! other tick reuses the cached values.

use crate::host::SlotCollection;
use crate::view_model::{SeedViewModel, SlotCache};

/// Ratio of a seed glyph icon to the font line height.
const ICON_LINE_RATIO: f32 = 0.75;

/// Caches the last observed integer zoom level. Starts unprimed, so the
/// first check after construction always reports a change and the initial
/// sizes are computed on the first tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomGate {
    zoom: Option<i32>,
}

impl ZoomGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check-and-update: records `current` and reports whether it differs
    /// from the previous call.
    pub fn changed(&mut self, current: i32) -> bool {
        if self.zoom == Some(current) {
            return false;
        }
        self.zoom = Some(current);
        true
    }
}

/// Recompute each cached seed strip's icon size and pixel width from the
/// slot's font metrics and the new zoom. O(live slot count).
pub fn recompute_icon_sizes<C: SlotCollection + ?Sized>(
    collection: &C,
    seeds: &mut SlotCache<SeedViewModel>,
    zoom: i32,
) {
    for index in 0..collection.len() {
        let Some(entry) = collection.entry(index) else {
            continue;
        };
        let Some(view_model) = seeds.get_mut(entry.id) else {
            continue;
        };
        let icon_size = (entry.metrics.line_spacing * zoom as f32 * ICON_LINE_RATIO) as i32;
        view_model.icon_size = icon_size;
        view_model.width = (icon_size * view_model.glyphs() as i32) as f32;
    }
}

/// Recompute the wrap width of the area-name column that shares a row with
/// the seed strip. Runs only after [`recompute_icon_sizes`] so the widths
/// it reads are current.
pub fn recompute_wrap_widths<C: SlotCollection + ?Sized>(
    collection: &C,
    seeds: &mut SlotCache<SeedViewModel>,
    zoom: i32,
) {
    let zoom = zoom.max(1);
    for index in 0..collection.len() {
        let Some(entry) = collection.entry(index) else {
            continue;
        };
        let Some(view_model) = seeds.get_mut(entry.id) else {
            continue;
        };
        view_model.wrap_width = entry.metrics.left_column_width - view_model.width as i32 / zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{
        MemorySlotCollection, SaveFileRef, SaveSummary, SlotEntry, SlotId, SlotMetrics, SlotState,
    };
    use seed_schema::{Seed, SeedOptions};

    fn occupied_slot(id: u64) -> SlotEntry {
        SlotEntry {
            id: SlotId(id),
            state: SlotState::Occupied(SaveSummary {
                file: SaveFileRef(id),
                seed: Some(Seed::new(id as u32, SeedOptions::empty())),
                session: None,
                game_cleared: false,
            }),
            metrics: SlotMetrics {
                line_spacing: 16.0,
                left_column_width: 220,
                ..SlotMetrics::default()
            },
        }
    }

    #[test]
    fn gate_reports_change_exactly_once() {
        let mut gate = ZoomGate::new();
        gate.changed(1);
        assert!(gate.changed(2));
        assert!(!gate.changed(2));
        assert!(!gate.changed(2));
        assert!(gate.changed(3));
    }

    #[test]
    fn fresh_gate_fires_on_first_check() {
        let mut gate = ZoomGate::new();
        assert!(gate.changed(1));
        assert!(!gate.changed(1));
    }

    #[test]
    fn icon_size_scales_with_line_spacing_and_zoom() {
        let collection = MemorySlotCollection::new(vec![occupied_slot(1)]);
        let mut seeds = SlotCache::new();
        seeds.insert(
            SlotId(1),
            crate::view_model::SeedViewModel::new(Seed::new(1, SeedOptions::empty())),
        );

        recompute_icon_sizes(&collection, &mut seeds, 2);

        let vm = seeds.get(SlotId(1)).expect("cached seed");
        // 16.0 * 2 * 0.75 = 24
        assert_eq!(vm.icon_size, 24);
        assert_eq!(vm.width, (24 * vm.glyphs() as i32) as f32);
    }

    #[test]
    fn wrap_width_subtracts_scaled_seed_width() {
        let collection = MemorySlotCollection::new(vec![occupied_slot(1)]);
        let mut seeds = SlotCache::new();
        seeds.insert(
            SlotId(1),
            crate::view_model::SeedViewModel::new(Seed::new(1, SeedOptions::empty())),
        );

        recompute_icon_sizes(&collection, &mut seeds, 2);
        recompute_wrap_widths(&collection, &mut seeds, 2);

        let vm = seeds.get(SlotId(1)).expect("cached seed");
        assert_eq!(vm.wrap_width, 220 - vm.width as i32 / 2);
    }
}
