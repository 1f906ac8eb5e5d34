//! Per-mesh index cache.
//!
//! `IndexCache` is a plain, explicitly owned struct rather than a
//! `static`/`lazy_static`: the caller constructs one, shares it (by
//! reference) across however many mapping instances need to query the
//! same meshes, and tears it down by dropping it or calling `clear`.
//! Invalidation is by per-mesh version counter, not by wall-clock or
//! generation number.

use std::collections::HashMap;

use projmap_mesh::{Mesh, MeshHandle};

use crate::mesh_index::MeshIndex;

struct Entry {
    version: u64,
    index: MeshIndex,
}

/// Caches one [`MeshIndex`] per mesh, invalidated when the mesh's
/// version counter advances.
#[derive(Default)]
pub struct IndexCache {
    entries: HashMap<MeshHandle, Entry>,
}

impl IndexCache {
    pub fn new() -> Self {
        IndexCache {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached index for `mesh`, building (or rebuilding, if
    /// the mesh mutated since the index was cached) as needed.
    pub fn get_or_build(&mut self, mesh: &Mesh) -> &MeshIndex {
        let needs_rebuild = match self.entries.get(&mesh.handle()) {
            Some(entry) => entry.version != mesh.version(),
            None => true,
        };
        if needs_rebuild {
            self.entries.insert(
                mesh.handle(),
                Entry {
                    version: mesh.version(),
                    index: MeshIndex::build(mesh),
                },
            );
        }
        &self.entries.get(&mesh.handle()).unwrap().index
    }

    /// Explicitly drops the cached index for a single mesh.
    pub fn invalidate(&mut self, handle: MeshHandle) {
        self.entries.remove(&handle);
    }

    /// Drops every cached index.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether an index for `handle` is currently cached, without
    /// building one. Mostly useful for tests that need to observe
    /// whether a lookup actually triggered a rebuild.
    pub fn contains(&self, handle: MeshHandle) -> bool {
        self.entries.contains_key(&handle)
    }
}
