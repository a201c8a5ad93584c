//! Save-slot selection core for the randomizer mod.
//!
//! Keeps per-slot seed and session view models consistent with the host
//! game's live save-file collection, drives the delete-all sweep against the
//! asynchronous save writer, and serializes spoiler reports for a generated
//! seed. Rendering, input polling, and save-file persistence stay on the
//! host side behind the narrow adapter in [`host`].

pub mod deletion;
pub mod host;
pub mod screen;
pub mod spoiler;
pub mod view_model;
pub mod zoom;

pub use deletion::{BulkDeletionController, DeletionState};
pub use host::{
    InputFrame, MemorySlotCollection, SaveFileRef, SaveSummary, SaveWriteQueue, SessionInfo,
    SlotCollection, SlotEntry, SlotId, SlotMetrics, SlotState,
};
pub use screen::{SaveSelectScreen, UiRequest};
pub use spoiler::{generate_spoiler_log, write_spoiler_log, SpoilerError};
pub use view_model::{RevealViewModel, SeedViewModel, SessionViewModel, SlotCache};
pub use zoom::ZoomGate;
