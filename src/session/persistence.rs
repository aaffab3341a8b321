//! Snapshot import/export and the save slots.
//!
//! Import replaces the whole map and drops any open editing session;
//! history never survives a content swap. The save slots rotate so the
//! previous save stays available for recovery export.

use anyhow::Context as _;

use crate::constants::{CURRENT_SNAPSHOT_KEY, LAST_SNAPSHOT_KEY};
use crate::graph::Graph;
use crate::input::Mode;
use crate::session::Session;
use crate::storage::SnapshotStore;
use crate::types::MapSnapshot;

impl Session {
    /// Serializable snapshot of the current map.
    pub fn export_snapshot(&self) -> MapSnapshot {
        let (stations, lines) = self.graph.to_parts();
        MapSnapshot {
            stations,
            lines,
            title: self.title.clone(),
        }
    }

    /// Replace the entire map from a snapshot. An empty snapshot title
    /// keeps the current one.
    pub fn import_snapshot(&mut self, snapshot: MapSnapshot) {
        tracing::info!(
            stations = snapshot.stations.len(),
            lines = snapshot.lines.len(),
            "importing map snapshot"
        );
        self.graph = Graph::from_parts(snapshot.stations, snapshot.lines);
        if !snapshot.title.is_empty() {
            self.title = snapshot.title;
        }
        self.history = None;
        self.insert_info = None;
        self.mode = Mode::Idle;
    }

    /// Save the current map into the `current` slot, rotating the
    /// previous save into `last`.
    pub fn save_to(&self, store: &mut dyn SnapshotStore) -> anyhow::Result<()> {
        let blob =
            serde_json::to_string(&self.export_snapshot()).context("serializing snapshot")?;
        if let Some(previous) = store.get(CURRENT_SNAPSHOT_KEY)? {
            store.put(LAST_SNAPSHOT_KEY, &previous)?;
        }
        store.put(CURRENT_SNAPSHOT_KEY, &blob)?;
        Ok(())
    }

    /// Load the map from the `current` slot. `Ok(false)` when the slot is
    /// empty.
    pub fn load_from(&mut self, store: &dyn SnapshotStore) -> anyhow::Result<bool> {
        let Some(blob) = store.get(CURRENT_SNAPSHOT_KEY)? else {
            return Ok(false);
        };
        let snapshot: MapSnapshot =
            serde_json::from_str(&blob).context("parsing saved snapshot")?;
        self.import_snapshot(snapshot);
        Ok(true)
    }

    /// The raw blob for a file export of the given slot, untouched by the
    /// core. `last` is the recovery export.
    pub fn export_blob(store: &dyn SnapshotStore, slot: &str) -> anyhow::Result<Option<String>> {
        store.get(slot)
    }
}
