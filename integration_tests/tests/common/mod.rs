use save_select::{
    SaveFileRef, SaveSummary, SaveWriteQueue, SessionInfo, SlotEntry, SlotId, SlotMetrics,
    SlotState,
};
use seed_schema::{Seed, SeedOptions};

pub fn occupied_slot(id: u64, seed: Option<Seed>) -> SlotEntry {
    SlotEntry {
        id: SlotId(id),
        state: SlotState::Occupied(SaveSummary {
            file: SaveFileRef(id),
            seed,
            session: None,
            game_cleared: false,
        }),
        metrics: SlotMetrics::default(),
    }
}

pub fn session_slot(id: u64, server: &str, slot_name: &str) -> SlotEntry {
    SlotEntry {
        id: SlotId(id),
        state: SlotState::Occupied(SaveSummary {
            file: SaveFileRef(id),
            seed: Some(Seed::new(id as u32, SeedOptions::SHARED_SESSION)),
            session: Some(SessionInfo {
                server: server.to_string(),
                slot_name: slot_name.to_string(),
            }),
            game_cleared: false,
        }),
        metrics: SlotMetrics::default(),
    }
}

pub fn empty_slot(id: u64) -> SlotEntry {
    SlotEntry {
        id: SlotId(id),
        state: SlotState::Empty,
        metrics: SlotMetrics::default(),
    }
}

pub fn plain_seed(id: u32) -> Seed {
    Seed::new(id, SeedOptions::empty())
}

/// Write queue that models asynchronous disk writes: after each delete
/// request it reports not-finished for a fixed number of polls.
pub struct ScriptedWriter {
    latency: u32,
    busy_for: u32,
    pub deleted: Vec<SaveFileRef>,
}

impl ScriptedWriter {
    pub fn with_latency(latency: u32) -> Self {
        Self {
            latency,
            busy_for: 0,
            deleted: Vec::new(),
        }
    }

    /// Advance the simulated disk by one tick.
    pub fn advance(&mut self) {
        self.busy_for = self.busy_for.saturating_sub(1);
    }
}

impl SaveWriteQueue for ScriptedWriter {
    fn is_finished_saving(&self) -> bool {
        self.busy_for == 0
    }

    fn request_delete(&mut self, file: SaveFileRef) {
        self.deleted.push(file);
        self.busy_for = self.latency;
    }
}
