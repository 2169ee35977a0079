use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{AudioFileRepository, RepositoryError};
use crate::domain::{AudioFileRecord, RecordId};

/// Record store held in process memory, assigning sequential ids the way the
/// backing database would. Backs tests and database-free deployments.
pub struct MemoryAudioFileRepository {
    records: Mutex<HashMap<i64, AudioFileRecord>>,
    next_id: AtomicI64,
}

impl MemoryAudioFileRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryAudioFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AudioFileRepository for MemoryAudioFileRepository {
    async fn create(&self, record: &AudioFileRecord) -> Result<RecordId, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let mut stored = record.clone();
        stored.id = Some(RecordId::from_i64(id));

        self.records
            .lock()
            .expect("record map poisoned")
            .insert(id, stored);

        Ok(RecordId::from_i64(id))
    }

    async fn find_by_id(
        &self,
        id: RecordId,
    ) -> Result<Option<AudioFileRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .expect("record map poisoned")
            .get(&id.as_i64())
            .cloned())
    }
}
