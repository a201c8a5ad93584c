//! Per-slot view models and the keyed cache that keeps them consistent
//! with the host's live slot collection.

use std::collections::HashMap;

use tracing::debug;

use seed_schema::Seed;

use crate::host::{SessionInfo, SlotCollection, SlotId};

/// View models that carry a transient reveal flag, reset at the start of
/// every tick by [`SlotCache::refresh`].
pub trait RevealViewModel {
    fn reset_reveal(&mut self);
}

/// Derived presentation state for a slot's seed.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedViewModel {
    pub seed: Seed,
    /// Set for at most one slot per tick, while the reveal input is held.
    pub show_seed_id: bool,
    /// Pixel width of the rendered seed glyph strip. Recomputed only on
    /// zoom change.
    pub width: f32,
    pub icon_size: i32,
    /// Wrap width handed to the area-name text block next to the seed.
    pub wrap_width: i32,
    pub draw_point: (i32, i32),
    pub origin: (f32, f32),
    glyphs: usize,
}

impl SeedViewModel {
    pub fn new(seed: Seed) -> Self {
        let glyphs = seed.to_string().len();
        Self {
            seed,
            show_seed_id: false,
            width: 0.0,
            icon_size: 0,
            wrap_width: 0,
            draw_point: (0, 0),
            origin: (0.0, 0.0),
            glyphs,
        }
    }

    /// Number of glyphs in the rendered seed strip; fixed per seed.
    pub fn glyphs(&self) -> usize {
        self.glyphs
    }
}

impl RevealViewModel for SeedViewModel {
    fn reset_reveal(&mut self) {
        self.show_seed_id = false;
    }
}

/// Derived presentation state for a slot's connected-session info.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionViewModel {
    pub session: SessionInfo,
    /// Same one-slot-per-tick discipline as [`SeedViewModel::show_seed_id`].
    pub show_session_info: bool,
    pub draw_point: (i32, i32),
    pub origin: (f32, f32),
}

impl SessionViewModel {
    pub fn new(session: SessionInfo) -> Self {
        Self {
            session,
            show_session_info: false,
            draw_point: (0, 0),
            origin: (0.0, 0.0),
        }
    }
}

impl RevealViewModel for SessionViewModel {
    fn reset_reveal(&mut self) {
        self.show_session_info = false;
    }
}

/// Keyed cache of derived view models, pruned against the live collection
/// every tick.
///
/// Entries are inserted at construction time or through the explicit
/// slot-appeared hook on the screen, never lazily during refresh. After
/// [`refresh`](SlotCache::refresh) every cached key is a member of the live
/// collection, so a stale-key read simply returns `None`.
#[derive(Clone, Debug, Default)]
pub struct SlotCache<V> {
    entries: HashMap<SlotId, V>,
}

impl<V: RevealViewModel> SlotCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: SlotId, view_model: V) {
        self.entries.insert(id, view_model);
    }

    pub fn get(&self, id: SlotId) -> Option<&V> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut V> {
        self.entries.get_mut(&id)
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &V)> {
        self.entries.iter().map(|(id, vm)| (*id, vm))
    }

    /// Per-tick synchronization: reset every entry's reveal flag, then drop
    /// entries whose key is no longer in the live collection. The prune is
    /// the only mutation; no derived sizes are recomputed here.
    pub fn refresh<C: SlotCollection + ?Sized>(&mut self, collection: &C) {
        let mut stale = Vec::new();
        for (id, view_model) in self.entries.iter_mut() {
            view_model.reset_reveal();
            if !collection.contains(*id) {
                stale.push(*id);
            }
        }
        for id in stale {
            self.entries.remove(&id);
            debug!(slot = id.0, "pruned view model for removed save slot");
        }
    }
}
