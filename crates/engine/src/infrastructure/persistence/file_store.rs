//! File-backed catalogue snapshot storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use catchdex_domain::{Catalogue, Pokemon};

use crate::infrastructure::ports::{CatalogueStore, StoreError};

/// Stores the catalogue (entities plus caught flags) as one JSON snapshot
/// on disk. Writes go through a sibling temp file and an atomic rename so
/// an interrupted save never truncates the previous snapshot.
pub struct FileCatalogueStore {
    path: PathBuf,
}

impl FileCatalogueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl CatalogueStore for FileCatalogueStore {
    async fn load(&self) -> Result<Option<Catalogue>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io("load", e)),
        };
        let entries: Vec<Pokemon> =
            serde_json::from_slice(&bytes).map_err(StoreError::corrupt)?;
        // Re-validate: the snapshot came off disk, not out of this process.
        let catalogue = Catalogue::new(entries).map_err(StoreError::corrupt)?;
        debug!(path = %self.path.display(), entries = catalogue.len(), "snapshot loaded");
        Ok(Some(catalogue))
    }

    async fn save(&self, catalogue: &Catalogue) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io("save", e))?;
        }
        let json = serde_json::to_vec(catalogue).map_err(StoreError::corrupt)?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, &json)
            .await
            .map_err(|e| StoreError::io("save", e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::io("save", e))?;
        debug!(path = %self.path.display(), bytes = json.len(), "snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catchdex_domain::{PokemonId, Rarity, Variant, VariantKind};

    fn roster() -> Catalogue {
        Catalogue::new(vec![Pokemon::new(
            PokemonId::new(16),
            "Pidgey",
            Rarity::Common,
        )
        .with_variant(Variant::caught(VariantKind::Normal))])
        .expect("valid catalogue")
    }

    #[tokio::test]
    async fn missing_snapshot_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileCatalogueStore::new(dir.path().join("catalogue.json"));
        assert!(store.load().await.expect("load").is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileCatalogueStore::new(dir.path().join("data/catalogue.json"));

        let catalogue = roster();
        store.save(&catalogue).await.expect("save");
        let loaded = store.load().await.expect("load").expect("snapshot");
        assert_eq!(loaded, catalogue);
    }

    #[tokio::test]
    async fn corrupt_snapshot_is_an_error_not_a_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalogue.json");
        tokio::fs::write(&path, b"{ not json").await.expect("write");

        let store = FileCatalogueStore::new(path);
        assert!(matches!(
            store.load().await,
            Err(StoreError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn invariant_violations_fail_the_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalogue.json");
        // Two entries sharing an id.
        let json = r#"[
            {"id": 1, "name": "Bulbasaur", "rarity": "common"},
            {"id": 1, "name": "Impostor", "rarity": "common"}
        ]"#;
        tokio::fs::write(&path, json).await.expect("write");

        let store = FileCatalogueStore::new(path);
        assert!(matches!(store.load().await, Err(StoreError::Corrupt(_))));
    }
}
