//! Collection lifecycle use cases.
//!
//! The one mutation path in the system lives here: toggling a variant's
//! caught flag, immediately followed by a snapshot save. Everything else
//! the engine does is a pure read over the catalogue the caller owns.

use std::sync::Arc;

use tracing::{debug, info, warn};

use catchdex_domain::{Catalogue, PokemonId, VariantKind};

use crate::infrastructure::ports::{CatalogueSource, CatalogueStore};
use crate::infrastructure::save_codec;
use crate::infrastructure::EngineError;

pub struct CollectionUseCases {
    store: Arc<dyn CatalogueStore>,
    source: Arc<dyn CatalogueSource>,
}

impl CollectionUseCases {
    pub fn new(store: Arc<dyn CatalogueStore>, source: Arc<dyn CatalogueSource>) -> Self {
        Self { store, source }
    }

    /// Produce the session catalogue: the local snapshot when one exists,
    /// otherwise a fresh fetch that is immediately persisted.
    pub async fn initialize(&self) -> Result<Catalogue, EngineError> {
        if let Some(catalogue) = self.store.load().await? {
            info!(entries = catalogue.len(), "catalogue restored from snapshot");
            return Ok(catalogue);
        }
        let catalogue = self.source.fetch().await?;
        self.store.save(&catalogue).await?;
        info!(entries = catalogue.len(), "catalogue fetched and persisted");
        Ok(catalogue)
    }

    /// Flip one variant's caught flag and persist the snapshot.
    ///
    /// Returns the new flag value. Toggling a Pokémon or variant kind
    /// that does not exist is an error - a missing kind means "not
    /// obtainable", never "uncaught".
    pub async fn toggle_caught(
        &self,
        catalogue: &mut Catalogue,
        id: PokemonId,
        kind: VariantKind,
    ) -> Result<bool, EngineError> {
        let pokemon = catalogue
            .get_mut(id)
            .ok_or(EngineError::PokemonNotFound(id))?;
        let variant = pokemon
            .variant_mut(kind)
            .ok_or(EngineError::VariantNotObtainable { id, kind })?;
        variant.caught = !variant.caught;
        let caught = variant.caught;

        self.store.save(catalogue).await?;
        debug!(%id, %kind, caught, "caught flag toggled");
        Ok(caught)
    }

    /// Merge a pasted save blob into the catalogue and persist.
    ///
    /// Decoding happens before any mutation, so a rejected payload leaves
    /// the catalogue exactly as it was. Returns the number of variant
    /// flags applied.
    pub async fn import(
        &self,
        catalogue: &mut Catalogue,
        payload: &str,
    ) -> Result<usize, EngineError> {
        let entries = save_codec::decode(payload)?;
        let applied = save_codec::merge(catalogue, &entries);
        if applied == 0 {
            warn!(entries = entries.len(), "import applied no changes");
        }
        self.store.save(catalogue).await?;
        info!(entries = entries.len(), applied, "save blob imported");
        Ok(applied)
    }

    /// Export the caught subset as a compressed base64 blob.
    pub fn export(&self, catalogue: &Catalogue) -> Result<String, EngineError> {
        let payload = save_codec::encode(catalogue)?;
        debug!(bytes = payload.len(), "save blob exported");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        FetchError, MockCatalogueSource, MockCatalogueStore,
    };
    use catchdex_domain::{Pokemon, Rarity, Variant};

    fn roster() -> Catalogue {
        Catalogue::new(vec![Pokemon::new(
            PokemonId::new(16),
            "Pidgey",
            Rarity::Common,
        )
        .with_variant(Variant::new(VariantKind::Normal))
        .with_variant(Variant::new(VariantKind::Shiny))])
        .expect("valid catalogue")
    }

    fn use_cases(
        store: MockCatalogueStore,
        source: MockCatalogueSource,
    ) -> CollectionUseCases {
        CollectionUseCases::new(Arc::new(store), Arc::new(source))
    }

    #[tokio::test]
    async fn initialize_prefers_the_local_snapshot() {
        let mut store = MockCatalogueStore::new();
        store.expect_load().returning(|| Ok(Some(roster())));
        let mut source = MockCatalogueSource::new();
        source.expect_fetch().never();

        let catalogue = use_cases(store, source)
            .initialize()
            .await
            .expect("initialize");
        assert_eq!(catalogue.len(), 1);
    }

    #[tokio::test]
    async fn initialize_fetches_and_persists_when_no_snapshot() {
        let mut store = MockCatalogueStore::new();
        store.expect_load().returning(|| Ok(None));
        store.expect_save().times(1).returning(|_| Ok(()));
        let mut source = MockCatalogueSource::new();
        source.expect_fetch().times(1).returning(|| Ok(roster()));

        use_cases(store, source).initialize().await.expect("initialize");
    }

    #[tokio::test]
    async fn initialize_surfaces_fetch_failure() {
        let mut store = MockCatalogueStore::new();
        store.expect_load().returning(|| Ok(None));
        let mut source = MockCatalogueSource::new();
        source
            .expect_fetch()
            .returning(|| Err(FetchError::request("connection refused")));

        let err = use_cases(store, source)
            .initialize()
            .await
            .expect_err("fetch failed");
        assert!(matches!(err, EngineError::Fetch(_)));
    }

    #[tokio::test]
    async fn toggle_flips_persists_and_reports_the_new_state() {
        let mut store = MockCatalogueStore::new();
        store.expect_save().times(2).returning(|_| Ok(()));
        let uc = use_cases(store, MockCatalogueSource::new());

        let mut catalogue = roster();
        let id = PokemonId::new(16);
        let on = uc
            .toggle_caught(&mut catalogue, id, VariantKind::Shiny)
            .await
            .expect("toggle on");
        assert!(on);

        let off = uc
            .toggle_caught(&mut catalogue, id, VariantKind::Shiny)
            .await
            .expect("toggle off");
        assert!(!off);
        assert_eq!(catalogue, roster());
    }

    #[tokio::test]
    async fn toggling_an_unobtainable_variant_is_an_error() {
        let uc = use_cases(MockCatalogueStore::new(), MockCatalogueSource::new());
        let mut catalogue = roster();
        let err = uc
            .toggle_caught(&mut catalogue, PokemonId::new(16), VariantKind::Shadow)
            .await
            .expect_err("not obtainable");
        assert!(matches!(err, EngineError::VariantNotObtainable { .. }));

        let err = uc
            .toggle_caught(&mut catalogue, PokemonId::new(999), VariantKind::Normal)
            .await
            .expect_err("unknown id");
        assert!(matches!(err, EngineError::PokemonNotFound(_)));
    }

    #[tokio::test]
    async fn rejected_import_leaves_state_untouched() {
        let uc = use_cases(MockCatalogueStore::new(), MockCatalogueSource::new());
        let mut catalogue = roster();
        let err = uc
            .import(&mut catalogue, r#"[{"variants": []}]"#)
            .await
            .expect_err("malformed");
        assert!(matches!(err, EngineError::Import(_)));
        assert_eq!(catalogue, roster());
    }

    #[tokio::test]
    async fn export_then_import_round_trips_through_the_use_case() {
        let mut store = MockCatalogueStore::new();
        store.expect_save().returning(|_| Ok(()));
        let uc = use_cases(store, MockCatalogueSource::new());

        let mut source = roster();
        if let Some(v) = source
            .get_mut(PokemonId::new(16))
            .and_then(|p| p.variant_mut(VariantKind::Shiny))
        {
            v.caught = true;
        }
        let payload = uc.export(&source).expect("export");

        let mut fresh = roster();
        let applied = uc.import(&mut fresh, &payload).await.expect("import");
        assert_eq!(applied, 2);
        assert_eq!(fresh, source);
    }
}
