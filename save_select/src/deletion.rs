//! Delete-all sweep over the save-slot collection.
//!
//! One slot is deleted per tick at most, gated on the save writer's
//! readiness signal. A writer that never becomes ready stalls the sweep in
//! place: nothing is deleted twice and nothing is lost, the host is
//! responsible for bounding its own I/O.

use tracing::{debug, info};

use crate::host::{SaveFileRef, SaveWriteQueue, SlotCollection, SlotState};

/// Explicit sweep state. The cursor is monotonically non-decreasing while
/// deleting and only the controller itself returns it to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeletionState {
    Idle,
    Deleting { cursor: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct BulkDeletionController {
    state: DeletionState,
}

impl Default for BulkDeletionController {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkDeletionController {
    pub fn new() -> Self {
        Self {
            state: DeletionState::Idle,
        }
    }

    pub fn state(&self) -> DeletionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DeletionState::Deleting { .. })
    }

    /// Start the sweep after the user confirmed the delete-all dialog.
    /// No-op while a sweep is already running.
    pub fn begin(&mut self) {
        if self.state == DeletionState::Idle {
            info!("delete-all sweep started");
            self.state = DeletionState::Deleting { cursor: 0 };
        }
    }

    /// One poll of the sweep, invoked once per display tick while active.
    ///
    /// Issues at most one delete request and only when the writer reports
    /// the previous write finished. The cursor is reused after a delete:
    /// `delete_selected` compacts the collection, so the next occupied slot
    /// slides into the same index.
    pub fn tick<C, W>(&mut self, collection: &mut C, writer: &mut W)
    where
        C: SlotCollection + ?Sized,
        W: SaveWriteQueue + ?Sized,
    {
        let DeletionState::Deleting { cursor } = self.state else {
            return;
        };

        if !writer.is_finished_saving() {
            return;
        }

        match next_occupied(collection, cursor) {
            None => {
                collection.set_selected_index(0);
                self.state = DeletionState::Idle;
                info!("delete-all sweep finished, no occupied slots remain");
            }
            Some((index, file)) => {
                self.state = DeletionState::Deleting { cursor: index };
                collection.set_selected_index(index);
                writer.request_delete(file);
                collection.delete_selected();
                debug!(slot = index, file = file.0, "save file delete requested");
            }
        }
    }
}

fn next_occupied<C: SlotCollection + ?Sized>(
    collection: &C,
    cursor: usize,
) -> Option<(usize, SaveFileRef)> {
    (cursor..collection.len()).find_map(|index| {
        collection.entry(index).and_then(|entry| match &entry.state {
            SlotState::Occupied(save) => Some((index, save.file)),
            _ => None,
        })
    })
}
