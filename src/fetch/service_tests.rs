//! Tests for `FetchService` callback delivery.

use super::*;
use crate::dispatch::{Dispatch, InlineDispatcher, SerialDispatcher};
use crate::transport::{RawResponse, Transport, TransportError};
use serde::Deserialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Deserialize, PartialEq)]
struct Named {
    name: String,
}

/// Mock transport that answers every request with one fixed result.
struct FixedTransport {
    result: Box<dyn Fn() -> Result<RawResponse, TransportError> + Send + Sync>,
}

impl FixedTransport {
    fn ok(body: &str) -> Self {
        let raw = RawResponse::http(http::StatusCode::OK, body.as_bytes().to_vec());
        Self {
            result: Box::new(move || Ok(raw.clone())),
        }
    }

    fn failing() -> Self {
        Self {
            result: Box::new(|| Err(TransportError::Timeout)),
        }
    }
}

impl Transport for FixedTransport {
    async fn get(&self, _url: url::Url) -> Result<RawResponse, TransportError> {
        (self.result)()
    }
}

/// Mock transport that echoes the URL's last path segment as the name,
/// so concurrent fetches can be told apart by their outcomes.
struct EchoTransport;

impl Transport for EchoTransport {
    async fn get(&self, url: url::Url) -> Result<RawResponse, TransportError> {
        let name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();
        let body = format!(r#"{{"name":"{name}"}}"#).into_bytes();

        // Yield so concurrent requests genuinely interleave.
        tokio::task::yield_now().await;
        Ok(RawResponse::http(http::StatusCode::OK, body))
    }
}

/// Installs a subscriber so `RUST_LOG=debug cargo test` shows fetch events.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Runs one fetch through the service and awaits its single outcome.
async fn fetch_outcome<C>(transport: C, url: &str) -> Outcome<Named>
where
    C: Transport + 'static,
{
    init_tracing();
    let service = FetchService::new(FetchClient::with_transport(transport), InlineDispatcher);
    let (tx, mut rx) = mpsc::unbounded_channel();

    service.fetch::<Named, _>(url, move |outcome| {
        tx.send(outcome).unwrap();
    });

    rx.recv().await.expect("callback never ran")
}

mod outcome_delivery {
    use super::*;

    #[tokio::test]
    async fn success_is_delivered_to_callback() {
        let outcome = fetch_outcome(
            FixedTransport::ok(r#"{"name":"Ada"}"#),
            "https://example.com/users/ada",
        )
        .await;

        assert_eq!(
            outcome.unwrap(),
            Named {
                name: "Ada".to_string()
            }
        );
    }

    #[tokio::test]
    async fn failure_is_delivered_to_callback() {
        let outcome = fetch_outcome(FixedTransport::failing(), "https://example.com/users/1").await;

        assert!(matches!(outcome, Err(FetchError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn invalid_url_is_delivered_without_blocking_caller() {
        let outcome = fetch_outcome(FixedTransport::ok("{}"), "not a url").await;

        assert!(matches!(outcome, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn callback_runs_exactly_once_on_success() {
        let invocations = callback_invocations(FixedTransport::ok(r#"{"name":"Ada"}"#)).await;

        assert_eq!(invocations, 1);
    }

    #[tokio::test]
    async fn callback_runs_exactly_once_on_failure() {
        let invocations = callback_invocations(FixedTransport::failing()).await;

        assert_eq!(invocations, 1);
    }

    /// Counts callback invocations for one fetch, waiting out a grace
    /// period after the first invocation to catch any duplicate.
    async fn callback_invocations<C: Transport + 'static>(transport: C) -> usize {
        let service = FetchService::new(FetchClient::with_transport(transport), InlineDispatcher);
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let invoked = Arc::clone(&counter);
        service.fetch::<Named, _>("https://example.com/users/1", move |_outcome| {
            invoked.fetch_add(1, Ordering::SeqCst);
            tx.send(()).unwrap();
        });

        rx.recv().await.expect("callback never ran");
        tokio::time::sleep(Duration::from_millis(10)).await;
        counter.load(Ordering::SeqCst)
    }
}

mod concurrency {
    use super::*;

    #[tokio::test]
    async fn concurrent_fetches_receive_their_own_outcomes() {
        let service = FetchService::new(
            FetchClient::with_transport(EchoTransport),
            SerialDispatcher::spawn(),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();

        for name in ["ada", "grace", "edsger", "barbara"] {
            let tx = tx.clone();
            let url = format!("https://example.com/users/{name}");
            service.fetch::<Named, _>(&url, move |outcome| {
                tx.send((name, outcome)).unwrap();
            });
        }
        drop(tx);

        let mut delivered = Vec::new();
        while let Some((name, outcome)) = rx.recv().await {
            assert_eq!(outcome.unwrap().name, name);
            delivered.push(name);
        }
        delivered.sort_unstable();
        assert_eq!(delivered, vec!["ada", "barbara", "edsger", "grace"]);
    }

    #[tokio::test]
    async fn serialized_callbacks_may_touch_shared_state() {
        let service = FetchService::new(
            FetchClient::with_transport(EchoTransport),
            SerialDispatcher::spawn(),
        );
        // The Mutex is only for reading the result back from the test
        // body; the callbacks themselves are serialized by the context.
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let (tx, mut rx) = mpsc::unbounded_channel();

        for i in 0..8 {
            let tx = tx.clone();
            let seen = Arc::clone(&seen);
            let url = format!("https://example.com/users/user{i}");
            service.fetch::<Named, _>(&url, move |outcome| {
                seen.lock().unwrap().push(outcome.unwrap().name);
                tx.send(()).unwrap();
            });
        }
        drop(tx);
        while rx.recv().await.is_some() {}

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 8);
    }
}

mod construction {
    use super::*;

    #[tokio::test]
    async fn spawn_creates_service_with_defaults() {
        let service = FetchService::spawn();
        // Verify it's constructed (no panic)
        let _ = format!("{service:?}");
    }

    #[tokio::test]
    async fn clone_shares_the_dispatch_context() {
        let service = FetchService::new(
            FetchClient::with_transport(EchoTransport),
            SerialDispatcher::spawn(),
        );
        let clone = service.clone();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let tx2 = tx.clone();
        service.fetch::<Named, _>("https://example.com/users/ada", move |outcome| {
            tx.send(outcome.unwrap().name).unwrap();
        });
        clone.fetch::<Named, _>("https://example.com/users/grace", move |outcome| {
            tx2.send(outcome.unwrap().name).unwrap();
        });

        let mut names = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        names.sort_unstable();
        assert_eq!(names, vec!["ada", "grace"]);
    }

    #[test]
    fn service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FetchService>();
    }

    #[tokio::test]
    async fn dispatcher_accessor_returns_context() {
        let dispatcher = SerialDispatcher::spawn();
        let service = FetchService::new(FetchClient::with_transport(EchoTransport), dispatcher);

        service.dispatcher().dispatch(Box::new(|| {}));
    }
}
