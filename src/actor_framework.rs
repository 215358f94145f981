use std::fmt::Debug;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Backends, and Errors)
// =============================================================================

/// Trait that any record must implement to be kept by a [`ResourceActor`].
///
/// Records are append-only: once created they are never patched or removed.
pub trait Entity: Clone + Send + Sync + Debug + 'static {
    type CreatePayload: Send + Sync + Debug;

    /// Construct the full record from its creation payload
    fn from_create(payload: Self::CreatePayload) -> Result<Self, FrameworkError>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), FrameworkError> { Ok(()) }
}

/// Persistent home of an actor's log.
///
/// The whole log is loaded and rewritten as one unit; there is no
/// incremental append.
#[async_trait]
pub trait LogBackend<T: Send + Sync>: Send + Sync + 'static {
    async fn load(&self) -> Result<Vec<T>, FrameworkError>;
    async fn persist(&self, records: &[T]) -> Result<(), FrameworkError>;
}

#[derive(Debug, Error)]
pub enum FrameworkError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Record rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Single writer over a [`LogBackend`].
///
/// Requests are handled one at a time, so the load-append-persist cycle of
/// one create never interleaves with another.
pub struct ResourceActor<T: Entity, B: LogBackend<T>> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    backend: B,
}

impl<T: Entity, B: LogBackend<T>> ResourceActor<T, B> {
    pub fn new(buffer_size: usize, backend: B) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, backend };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let result = self.handle_create(payload).await;
                    if let Err(e) = &result {
                        error!(error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    let result = self.backend.load().await;
                    if let Err(e) = &result {
                        error!(error = %e, "List failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }
        info!("Actor stopped");
    }

    async fn handle_create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let mut item = T::from_create(payload)?;
        item.on_create()?;

        let mut records = self.backend.load().await?;
        records.push(item.clone());
        self.backend.persist(&records).await?;

        debug!(count = records.len(), "Record appended");
        Ok(item)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Create { payload, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
