use std::sync::Arc;

use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::product::snapshot::{NEXT_ID_KEY, PRODUCTS_KEY};
use business::domain::storage::KeyValueStore;
use logger::TracingLogger;
use persistence::json_file::JsonFileStore;
use persistence::memory::InMemoryStore;

use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub repository: ProductRepository,
}

impl DependencyContainer {
    pub fn new(storage: &StorageConfig) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !storage.path.is_dir(),
            "store path {} is a directory",
            storage.path.display()
        );

        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let file_store = JsonFileStore::open(&storage.path);
        let store: Arc<dyn KeyValueStore> = if storage.dry_run {
            logger.info(&format!(
                "Dry run: changes to {} will not be saved",
                file_store.path().display()
            ));
            Arc::new(Self::copy_into_memory(&file_store))
        } else {
            Arc::new(file_store)
        };

        let repository = ProductRepository::restore(store, logger);

        Ok(Self { repository })
    }

    fn copy_into_memory(source: &dyn KeyValueStore) -> InMemoryStore {
        InMemoryStore::with_entries(
            [PRODUCTS_KEY, NEXT_ID_KEY]
                .into_iter()
                .filter_map(|key| source.get(key).map(|value| (key, value))),
        )
    }
}
