//! Callback-style outcome delivery on a dispatch context.

use super::{FetchClient, Outcome};
use crate::dispatch::{Dispatch, SerialDispatcher};
use crate::transport::{ReqwestTransport, Transport};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Fetch front-end that delivers outcomes to completion callbacks.
///
/// Wraps a [`FetchClient`] and a [`Dispatch`] context: each call spawns the
/// fetch as a background task and submits the completion callback, with its
/// outcome, as a single job to the dispatcher. With the default
/// [`SerialDispatcher`], callbacks from concurrent calls are serialized on
/// one context while the network operations themselves run concurrently,
/// so a callback may safely touch state shared with other callbacks.
///
/// The callback is `FnOnce` and the fetch produces one outcome, so the
/// callback runs exactly once per call - on the success path and on every
/// failure path alike. The caller's thread never blocks and no handle to
/// the in-flight request is returned.
///
/// # Type Parameters
///
/// - `C`: The transport implementation (defaults to [`ReqwestTransport`])
/// - `D`: The dispatch context (defaults to [`SerialDispatcher`])
///
/// # Example
///
/// ```no_run
/// use json_fetch::fetch::FetchService;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct User {
///     name: String,
/// }
///
/// # #[tokio::main]
/// # async fn main() {
/// let service = FetchService::spawn();
/// service.fetch("https://api.example.com/users/1", |outcome| match outcome {
///     Ok(User { name }) => println!("fetched {name}"),
///     Err(e) => eprintln!("fetch failed: {e}"),
/// });
/// # }
/// ```
#[derive(Debug)]
pub struct FetchService<C = ReqwestTransport, D = SerialDispatcher> {
    client: Arc<FetchClient<C>>,
    dispatcher: D,
}

// Cloning shares the client handle; `C: Clone` must not be required.
impl<C, D: Clone> Clone for FetchService<C, D> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl FetchService<ReqwestTransport, SerialDispatcher> {
    /// Creates a service with the production transport and a freshly
    /// spawned serial dispatch context.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context, as the dispatch
    /// context's drain task must be spawned.
    #[must_use]
    pub fn spawn() -> Self {
        Self::new(FetchClient::new(), SerialDispatcher::spawn())
    }
}

impl<C, D> FetchService<C, D> {
    /// Creates a service from a client and a dispatch context.
    pub fn new(client: FetchClient<C>, dispatcher: D) -> Self {
        Self {
            client: Arc::new(client),
            dispatcher,
        }
    }

    /// Returns the dispatch context outcomes are delivered on.
    pub const fn dispatcher(&self) -> &D {
        &self.dispatcher
    }
}

impl<C, D> FetchService<C, D>
where
    C: Transport + 'static,
    D: Dispatch + Clone + 'static,
{
    /// Fetches `url` and invokes `on_complete` with the outcome, exactly
    /// once, on the service's dispatch context.
    ///
    /// Returns immediately; the request runs to completion in the
    /// background and cannot be aborted by the caller.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime context, as the request
    /// runs on a spawned task.
    pub fn fetch<T, F>(&self, url: &str, on_complete: F)
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Outcome<T>) + Send + 'static,
    {
        let client = Arc::clone(&self.client);
        let dispatcher = self.dispatcher.clone();
        let url = url.to_owned();

        tokio::spawn(async move {
            let outcome = client.fetch::<T>(&url).await;
            dispatcher.dispatch(Box::new(move || on_complete(outcome)));
        });
    }
}
