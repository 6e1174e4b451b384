use crate::errors::StorageError;
use crate::models::Job;
use crate::services::storage::KeyValueStore;

/// Caché offline del listado de empleos: una sola clave, un array JSON.
/// Sin versión, sin TTL, sin checksum.
pub struct ListingCache<S: KeyValueStore> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ListingCache<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Carga el listado guardado. Nunca falla: cualquier error de lectura o
    /// de formato se registra y se trata como "sin datos".
    pub async fn load(&self) -> Vec<Job> {
        let json = match self.storage.get_item(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("ℹ️ [CACHE] No hay listado guardado");
                return Vec::new();
            }
            Err(e) => {
                log::warn!("⚠️ [CACHE] {}, se usa listado vacío", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Job>>(&json) {
            Ok(jobs) => {
                log::info!("📋 [CACHE] Listado cargado: {} empleos", jobs.len());
                jobs
            }
            Err(e) => {
                log::warn!("⚠️ [CACHE] Listado corrupto ({}), se usa listado vacío", e);
                Vec::new()
            }
        }
    }

    /// Sobrescribe el listado guardado
    pub async fn save(&self, jobs: &[Job]) -> Result<(), StorageError> {
        let json = serde_json::to_string(jobs)?;
        self.storage.set_item(&self.key, &json)?;
        log::info!("💾 [CACHE] Listado guardado: {} empleos", jobs.len());
        Ok(())
    }

    /// Elimina el listado guardado; si no existe no pasa nada
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)?;
        log::info!("🗑️ [CACHE] Listado eliminado");
        Ok(())
    }
}
