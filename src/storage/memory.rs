use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::actor_framework::{FrameworkError, LogBackend};

/// In-process log, shared between clones so tests can look inside.
#[derive(Debug, Clone)]
pub struct MemoryBackend<T> {
    records: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> MemoryBackend<T> {
    pub fn new() -> Self {
        Self { records: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self { records: Arc::new(Mutex::new(records)) }
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T> LogBackend<T> for MemoryBackend<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, FrameworkError> {
        Ok(self.snapshot())
    }

    async fn persist(&self, records: &[T]) -> Result<(), FrameworkError> {
        *self.records.lock().unwrap() = records.to_vec();
        Ok(())
    }
}
