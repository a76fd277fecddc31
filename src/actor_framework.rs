use std::fmt::{Debug, Display};
use std::num::NonZeroUsize;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Params, Actions and Queries)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    type Query: Send + Sync + Debug;
    type QueryResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and params, stamped with `today`
    fn from_create_params(id: Self::Id, params: Self::CreateParams, today: NaiveDate) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_update(&mut self, patch: Self::Patch, today: NaiveDate) -> Result<(), String>;

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action, today: NaiveDate) -> Result<Self::ActionResult, String>;

    // --- Read Side ---

    /// Answer a read-only query over the whole collection, in insertion order
    fn query(items: &[Self], query: &Self::Query) -> Self::QueryResult;
}

/// Errors raised between a client and its actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Answers `None` when no entity has the id.
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<Option<T>>,
    },
    /// Answers `false` when no entity has the id.
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    /// Answers `None` when no entity has the id.
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<Option<T::ActionResult>>,
    },
    Query {
        query: T::Query,
        respond_to: Response<T::QueryResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// Single writer over an ordered collection.
///
/// Requests are handled one at a time, so every operation is atomic with
/// respect to the others. Insertion order is kept; nothing reorders `store`.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    clock: Clock,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: NonZeroUsize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
        clock: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.get());
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
            clock: Box::new(clock),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_get(&id)));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(&id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_delete(&id)));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(&id, action));
                }
                ResourceRequest::Query { query, respond_to } => {
                    debug!(?query, "Processing query");
                    let _ = respond_to.send(Ok(T::query(&self.store, &query)));
                }
            }
        }
        info!(items = self.store.len(), "Actor stopped");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    #[instrument(skip(self))]
    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let item = T::from_create_params(id.clone(), params, (self.clock)())
            .map_err(FrameworkError::Rejected)?;
        self.store.push(item.clone());
        info!(%id, "Item created");
        Ok(item)
    }

    fn handle_get(&self, id: &T::Id) -> Option<T> {
        self.position(id).and_then(|index| self.store.get(index).cloned())
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    fn handle_update(&mut self, id: &T::Id, patch: T::Patch) -> Result<Option<T>, FrameworkError> {
        let today = (self.clock)();
        let Some(item) = self.store.iter_mut().find(|item| item.id() == id) else {
            warn!("Item not found");
            return Ok(None);
        };
        item.on_update(patch, today).map_err(FrameworkError::Rejected)?;
        info!("Item updated");
        Ok(Some(item.clone()))
    }

    #[instrument(skip(self), fields(id = %id))]
    fn handle_delete(&mut self, id: &T::Id) -> bool {
        let Some(index) = self.position(id) else {
            warn!("Item not found");
            return false;
        };
        self.store.remove(index);
        info!("Item deleted");
        true
    }

    #[instrument(skip(self), fields(id = %id))]
    fn handle_action(&mut self, id: &T::Id, action: T::Action) -> Result<Option<T::ActionResult>, FrameworkError> {
        let today = (self.clock)();
        let Some(item) = self.store.iter_mut().find(|item| item.id() == id) else {
            warn!("Item not found");
            return Ok(None);
        };
        let result = item.handle_action(action, today).map_err(FrameworkError::Rejected)?;
        debug!(?result, "Action handled");
        Ok(Some(result))
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

    async fn call<R>(&self, request: impl FnOnce(Response<R>) -> ResourceRequest<T>) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<Option<T::ActionResult>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn query(&self, query: T::Query) -> Result<T::QueryResult, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Query { query, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
