//! Adapter boundary to the host game.
//!
//! The original mod read host internals reflectively; here the host exposes
//! exactly the fields this core needs through small records and two traits.
//! Handles ([`SlotId`], [`SaveFileRef`]) are assigned by the host and never
//! interpreted, only compared.

use serde::{Deserialize, Serialize};

use seed_schema::Seed;

/// Stable handle identifying one slot presentation entry in the host's
/// save-file collection. Used as a cache key only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u64);

/// Opaque handle to an on-disk save file, passed back to the host when a
/// delete is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaveFileRef(pub u64);

/// Connected-session identity for shared-session saves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub server: String,
    pub slot_name: String,
}

/// The save-file fields this core reads from an occupied slot.
///
/// `seed` is `None` for saves created without the randomizer (or by an
/// incompatible version); that is not an error, the slot simply renders
/// without seed metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveSummary {
    pub file: SaveFileRef,
    pub seed: Option<Seed>,
    pub session: Option<SessionInfo>,
    pub game_cleared: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SlotState {
    Empty,
    Corrupt,
    Occupied(SaveSummary),
}

impl SlotState {
    pub fn save(&self) -> Option<&SaveSummary> {
        match self {
            SlotState::Occupied(save) => Some(save),
            _ => None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, SlotState::Occupied(_))
    }
}

/// Presentation metrics the host computes for each slot row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotMetrics {
    pub draw_position: (f32, f32),
    pub text_offset_x: i32,
    pub save_column_offset_x: i32,
    pub line_spacing: f32,
    pub left_column_width: i32,
    pub scrolled_off: bool,
}

impl Default for SlotMetrics {
    fn default() -> Self {
        Self {
            draw_position: (0.0, 0.0),
            text_offset_x: 0,
            save_column_offset_x: 0,
            line_spacing: 16.0,
            left_column_width: 220,
            scrolled_off: false,
        }
    }
}

/// One row of the host's save-select list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub id: SlotId,
    pub state: SlotState,
    pub metrics: SlotMetrics,
}

/// Ordered, live view of the host's save-file collection.
///
/// Membership changes between ticks: the host adds entries when saves are
/// created and this core removes them during the delete-all sweep.
pub trait SlotCollection {
    fn len(&self) -> usize;

    fn entry(&self, index: usize) -> Option<&SlotEntry>;

    fn selected_index(&self) -> usize;

    fn set_selected_index(&mut self, index: usize);

    /// Remove the currently selected entry and compact the remainder
    /// forward, so later entries shift down by one index.
    fn delete_selected(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: SlotId) -> bool {
        (0..self.len()).any(|index| self.entry(index).is_some_and(|entry| entry.id == id))
    }

    fn selected_entry(&self) -> Option<&SlotEntry> {
        self.entry(self.selected_index())
    }
}

/// Readiness contract of the host's asynchronous save-write subsystem.
///
/// Deletion completion is never observed directly; callers poll
/// [`is_finished_saving`](SaveWriteQueue::is_finished_saving) on later ticks.
pub trait SaveWriteQueue {
    fn is_finished_saving(&self) -> bool;

    fn request_delete(&mut self, file: SaveFileRef);
}

/// Per-tick input snapshot handed in by the host's input poller.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputFrame {
    /// Reveal modifier held (shows seed id and session info for the
    /// highlighted slot).
    pub reveal_held: bool,
    /// Delete-all chord pressed this tick (only honored while revealing).
    pub delete_all_pressed: bool,
    /// Spoiler-log request pressed this tick.
    pub spoiler_pressed: bool,
    /// Copy-seed chord pressed this tick.
    pub copy_seed_pressed: bool,
    /// Session credentials chord pressed this tick.
    pub credentials_pressed: bool,
}

/// In-memory [`SlotCollection`] used by the harness and tests. The real
/// host supplies its own collection; the semantics here (ordered entries,
/// forward compaction on delete) mirror it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemorySlotCollection {
    entries: Vec<SlotEntry>,
    #[serde(default)]
    selected: usize,
}

impl MemorySlotCollection {
    pub fn new(entries: Vec<SlotEntry>) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    pub fn push(&mut self, entry: SlotEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[SlotEntry] {
        &self.entries
    }

    pub fn occupied_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.state.is_occupied())
            .count()
    }
}

impl SlotCollection for MemorySlotCollection {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn entry(&self, index: usize) -> Option<&SlotEntry> {
        self.entries.get(index)
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }

    fn delete_selected(&mut self) {
        if self.selected < self.entries.len() {
            self.entries.remove(self.selected);
        }
        if self.selected >= self.entries.len() && !self.entries.is_empty() {
            self.selected = self.entries.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> SlotEntry {
        SlotEntry {
            id: SlotId(id),
            state: SlotState::Empty,
            metrics: SlotMetrics::default(),
        }
    }

    #[test]
    fn delete_selected_compacts_forward() {
        let mut collection = MemorySlotCollection::new(vec![entry(1), entry(2), entry(3)]);
        collection.set_selected_index(1);
        collection.delete_selected();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.entry(0).map(|e| e.id), Some(SlotId(1)));
        assert_eq!(collection.entry(1).map(|e| e.id), Some(SlotId(3)));
        assert!(!collection.contains(SlotId(2)));
    }

    #[test]
    fn contains_checks_live_membership() {
        let collection = MemorySlotCollection::new(vec![entry(7)]);
        assert!(collection.contains(SlotId(7)));
        assert!(!collection.contains(SlotId(8)));
    }
}
