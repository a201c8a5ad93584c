//! Save-select screen orchestration.
//!
//! Invoked once per display tick by the host's screen manager. Normal
//! handling refreshes the view-model caches, runs the zoom-gated size
//! recompute, updates draw points, and translates input into [`UiRequest`]s
//! for the host to present. While a delete-all sweep is running it preempts
//! everything else.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use seed_schema::{FillingMethod, ItemLocation, ProgressionChain, Seed, SeedOptions};

use crate::deletion::BulkDeletionController;
use crate::host::{
    InputFrame, SaveFileRef, SaveSummary, SaveWriteQueue, SlotCollection, SlotEntry, SlotId,
    SlotState,
};
use crate::spoiler::{self, SpoilerError};
use crate::view_model::{SeedViewModel, SessionViewModel, SlotCache};
use crate::zoom::{self, ZoomGate};

/// Outward channel to the host: dialogs, clipboard, description text.
/// The screen never renders anything itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiRequest {
    /// Ask the user to confirm deleting every save file.
    ConfirmDeleteAll,
    /// Ask the user to confirm spoiler-log generation for this save.
    ConfirmSpoiler(SaveFileRef),
    /// Put the seed's display string on the system clipboard.
    CopyToClipboard(String),
    /// Open the session server/credentials menu (external collaborator).
    OpenCredentials,
    /// Dismiss the new-game-plus prompt the host raised for a cleared save.
    DismissNewGamePlus,
    /// Informational dialog.
    ShowMessage(String),
    /// Replace the highlighted entry's description line.
    SetDescription(String),
}

pub struct SaveSelectScreen {
    seeds: SlotCache<SeedViewModel>,
    sessions: SlotCache<SessionViewModel>,
    zoom_gate: ZoomGate,
    deletion: BulkDeletionController,
}

impl SaveSelectScreen {
    /// Populate both caches from the live collection. Empty slots are
    /// skipped; occupied slots without a resolvable seed or session simply
    /// get no corresponding view model. The zoom gate starts unprimed, so
    /// the first tick computes the initial sizes.
    pub fn new<C: SlotCollection + ?Sized>(collection: &C) -> Self {
        let mut screen = Self {
            seeds: SlotCache::new(),
            sessions: SlotCache::new(),
            zoom_gate: ZoomGate::new(),
            deletion: BulkDeletionController::new(),
        };
        for index in 0..collection.len() {
            if let Some(entry) = collection.entry(index) {
                screen.slot_appeared(entry);
            }
        }
        debug!(
            seeds = screen.seeds.len(),
            sessions = screen.sessions.len(),
            "save select screen initialized"
        );
        screen
    }

    /// Explicit hook for a slot created after construction (a new save).
    /// The caches never pick up new slots lazily.
    pub fn slot_appeared(&mut self, entry: &SlotEntry) {
        let SlotState::Occupied(save) = &entry.state else {
            return;
        };
        if let Some(seed) = save.seed {
            self.seeds.insert(entry.id, SeedViewModel::new(seed));
        }
        if let Some(session) = save.session.clone() {
            self.sessions.insert(entry.id, SessionViewModel::new(session));
        }
    }

    /// One display tick.
    pub fn update<C, W>(
        &mut self,
        collection: &mut C,
        writer: &mut W,
        input: &InputFrame,
        zoom: i32,
    ) -> Vec<UiRequest>
    where
        C: SlotCollection + ?Sized,
        W: SaveWriteQueue + ?Sized,
    {
        if self.deletion.is_active() {
            self.deletion.tick(collection, writer);
            return Vec::new();
        }

        // cache refresh (reveal reset + prune) must precede the zoom
        // recompute and all input handling
        self.seeds.refresh(collection);
        self.sessions.refresh(collection);

        if self.zoom_gate.changed(zoom) {
            zoom::recompute_icon_sizes(collection, &mut self.seeds, zoom);
            zoom::recompute_wrap_widths(collection, &mut self.seeds, zoom);
        }

        self.update_draw_points(collection);
        self.handle_input(collection, input)
    }

    /// The user accepted the delete-all dialog.
    pub fn confirm_delete_all(&mut self) {
        self.deletion.begin();
    }

    /// The user accepted spoiler generation for the selected save.
    ///
    /// Unsupported seeds resolve locally to an informational dialog; write
    /// failures propagate to the caller.
    pub fn confirm_spoiler(
        &self,
        seed: Seed,
        method: FillingMethod,
        placements: &[ItemLocation],
        chain: &ProgressionChain,
        out_dir: &Path,
    ) -> Result<(Vec<UiRequest>, Option<PathBuf>), SpoilerError> {
        match spoiler::generate_spoiler_log(seed, method, placements, chain, out_dir) {
            Ok(path) => {
                info!(seed = %seed, "spoiler log generated");
                let message = format!("Spoiler log written to {}", path.display());
                Ok((vec![UiRequest::ShowMessage(message)], Some(path)))
            }
            Err(SpoilerError::UnsupportedMethod) => Ok((
                vec![UiRequest::ShowMessage(
                    "Not supported for connected-session seeds".to_string(),
                )],
                None,
            )),
            Err(err) => Err(err),
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deletion.is_active()
    }

    pub fn seed_view(&self, id: SlotId) -> Option<&SeedViewModel> {
        self.seeds.get(id)
    }

    pub fn session_view(&self, id: SlotId) -> Option<&SessionViewModel> {
        self.sessions.get(id)
    }

    pub fn seed_views(&self) -> impl Iterator<Item = (SlotId, &SeedViewModel)> {
        self.seeds.iter()
    }

    pub fn session_views(&self) -> impl Iterator<Item = (SlotId, &SessionViewModel)> {
        self.sessions.iter()
    }

    fn update_draw_points<C: SlotCollection + ?Sized>(&mut self, collection: &C) {
        for index in 0..collection.len() {
            let Some(entry) = collection.entry(index) else {
                continue;
            };
            // corrupt slots keep their row but draw no metadata
            if !entry.state.is_occupied() {
                continue;
            }

            let metrics = &entry.metrics;
            let origin = (0.0, metrics.line_spacing / 2.0);
            let base_x = metrics.draw_position.0 as i32 + metrics.text_offset_x;
            let base_y = metrics.draw_position.1 as i32;

            if let Some(view_model) = self.seeds.get_mut(entry.id) {
                view_model.draw_point = (
                    base_x + metrics.save_column_offset_x - view_model.width as i32,
                    base_y,
                );
                view_model.origin = origin;
            }
            if let Some(view_model) = self.sessions.get_mut(entry.id) {
                view_model.draw_point = (base_x, base_y);
                view_model.origin = origin;
            }
        }
    }

    fn handle_input<C: SlotCollection + ?Sized>(
        &mut self,
        collection: &C,
        input: &InputFrame,
    ) -> Vec<UiRequest> {
        let mut requests = Vec::new();
        let selected = selected_occupied(collection);

        if input.reveal_held {
            if let Some((id, _)) = &selected {
                if let Some(view_model) = self.seeds.get_mut(*id) {
                    view_model.show_seed_id = true;
                }
                if let Some(view_model) = self.sessions.get_mut(*id) {
                    view_model.show_session_info = true;
                }
            }
            if let Some(request) = description(selected.as_ref().map(|(_, save)| *save), true) {
                requests.push(request);
            }
            if input.delete_all_pressed {
                requests.push(UiRequest::ConfirmDeleteAll);
            }
        } else if let Some(request) = description(selected.as_ref().map(|(_, save)| *save), false) {
            requests.push(request);
        }

        if let Some((_, save)) = &selected {
            if input.spoiler_pressed && save.seed.is_some() {
                requests.push(UiRequest::ConfirmSpoiler(save.file));
            }

            if input.copy_seed_pressed {
                if let Some(seed) = save.seed {
                    requests.push(UiRequest::CopyToClipboard(seed.to_string()));
                }
            }

            if input.credentials_pressed {
                if save.game_cleared {
                    requests.push(UiRequest::DismissNewGamePlus);
                }
                if seed_is_shared_session(save) {
                    requests.push(UiRequest::OpenCredentials);
                }
            }
        }

        requests
    }
}

fn selected_occupied<C: SlotCollection + ?Sized>(
    collection: &C,
) -> Option<(SlotId, &SaveSummary)> {
    let entry = collection.selected_entry()?;
    entry.state.save().map(|save| (entry.id, save))
}

fn seed_is_shared_session(save: &SaveSummary) -> bool {
    save.seed
        .is_some_and(|seed| seed.options.contains(SeedOptions::SHARED_SESSION))
}

fn description(save: Option<&SaveSummary>, show_delete_all: bool) -> Option<UiRequest> {
    let save = save?;
    let mut text = if show_delete_all {
        String::from("Press $A to continue, $X to delete all files.")
    } else {
        String::from("Press $A to continue, hold $L for seed details.")
    };
    if seed_is_shared_session(save) {
        text.push_str(" Press $Y to change session server/credentials");
    }
    Some(UiRequest::SetDescription(text))
}
