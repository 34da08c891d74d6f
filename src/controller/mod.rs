mod error;

use std::fmt::Display;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use parking_lot::Mutex;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, instrument, warn, Instrument};

pub use error::ControllerError;

use crate::model::{FetchState, Phase, RequestId};

type Shared<T> = Arc<Mutex<Inner<T>>>;

struct Inner<T> {
    state: FetchState<T>,
    // the only request whose outcome may still be applied
    current: Option<RequestId>,
    disposed: bool,
}

/// Drives one logical request at a time through idle, loading, success and error.
///
/// Every `start` supersedes the previous request: an outcome is applied only
/// if its request is still the most recently started one, regardless of the
/// order in which outcomes arrive. Clones share the same state.
pub struct FetchController<T> {
    inner: Shared<T>,
    runtime: Handle,
}

impl<T> Clone for FetchController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            runtime: self.runtime.clone(),
        }
    }
}

/// Handle on a started request.
///
/// Dropping it does not cancel anything; awaiting [`FetchHandle::wait`]
/// resolves once the outcome has been applied or discarded.
#[derive(Debug)]
pub struct FetchHandle {
    request_id: RequestId,
    join: JoinHandle<bool>,
}

impl FetchHandle {
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Returns true when the outcome became the controller's state.
    pub async fn wait(self) -> bool {
        self.join.await.unwrap_or(false)
    }
}

impl<T> FetchController<T>
where
    T: Clone + Send + 'static,
{
    pub fn new(runtime: Handle) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: FetchState::Idle,
                current: None,
                disposed: false,
            })),
            runtime,
        }
    }

    /// Binds a controller to the runtime the caller is running on.
    pub fn from_current() -> Result<Self, ControllerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|err| ControllerError::Runtime(err.to_string()))
    }

    /// Starts `request`, moving to `Loading` and superseding any request in flight.
    ///
    /// Failures of the request never surface here; they end up in
    /// [`FetchController::current_state`] as an `Error` state.
    pub fn start<F, E>(&self, request: F) -> Result<FetchHandle, ControllerError>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let request_id = self.begin()?;
        let pending = Pending {
            inner: Some(self.inner.clone()),
            request_id,
        };
        let span = info_span!("fetch", request_id = %request_id);

        let join = self.runtime.spawn(
            async move {
                let outcome = match AssertUnwindSafe(request).catch_unwind().await {
                    Ok(Ok(data)) => FetchState::Success { data },
                    Ok(Err(err)) => FetchState::error(err.to_string()),
                    Err(_) => FetchState::error("request panicked"),
                };
                pending.settle(outcome)
            }
            .instrument(span),
        );

        Ok(FetchHandle { request_id, join })
    }

    fn begin(&self) -> Result<RequestId, ControllerError> {
        let mut inner = self.inner.lock();
        if inner.disposed {
            warn!("start on a disposed controller");
            return Err(ControllerError::InvalidState("disposed".to_string()));
        }
        let request_id = RequestId::new();
        if let Some(previous) = inner.current.replace(request_id) {
            debug!(superseded = %previous, request_id = %request_id, "request superseded");
        }
        inner.state = FetchState::Loading;
        info!(request_id = %request_id, "request started");
        Ok(request_id)
    }

    /// Returns to `Idle`; the outcome of any request in flight is dropped.
    #[instrument(skip(self))]
    pub fn cancel(&self) {
        let mut inner = self.inner.lock();
        if inner.disposed {
            return;
        }
        if let Some(previous) = inner.current.take() {
            debug!(superseded = %previous, "request cancelled");
        }
        inner.state = FetchState::Idle;
    }

    /// Stops accepting requests. The last settled state stays readable; a
    /// request still in flight is dropped and leaves the controller `Idle`.
    #[instrument(skip(self))]
    pub fn dispose(&self) {
        let mut inner = self.inner.lock();
        inner.disposed = true;
        if inner.current.take().is_some() {
            inner.state = FetchState::Idle;
        }
        info!(phase = %inner.state.phase(), "controller disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }

    pub fn current_state(&self) -> FetchState<T> {
        self.inner.lock().state.clone()
    }

    pub fn phase(&self) -> Phase {
        self.inner.lock().state.phase()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().state.is_loading()
    }
}

/// Outcome slot of one spawned request.
///
/// A request future dropped before it settles (its runtime shut down, its
/// task aborted) settles as an error instead of leaving the controller loading.
struct Pending<T> {
    inner: Option<Shared<T>>,
    request_id: RequestId,
}

impl<T> Pending<T> {
    fn settle(mut self, outcome: FetchState<T>) -> bool {
        match self.inner.take() {
            Some(inner) => settle(&inner, self.request_id, outcome),
            None => false,
        }
    }
}

impl<T> Drop for Pending<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            settle(&inner, self.request_id, FetchState::error("request dropped"));
        }
    }
}

fn settle<T>(inner: &Mutex<Inner<T>>, request_id: RequestId, outcome: FetchState<T>) -> bool {
    let mut inner = inner.lock();
    if inner.current != Some(request_id) {
        debug!(phase = %outcome.phase(), "stale outcome discarded");
        return false;
    }
    inner.current = None;
    match &outcome {
        FetchState::Error { error_message } => {
            warn!(reason = %error_message, "request failed");
        }
        _ => info!(phase = %outcome.phase(), "request settled"),
    }
    inner.state = outcome;
    true
}

/// Builds the runtime request futures are spawned on.
pub fn build_runtime() -> Result<Runtime, ControllerError> {
    Builder::new_multi_thread()
        .thread_name("fetch")
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| ControllerError::Runtime(err.to_string()))
}
