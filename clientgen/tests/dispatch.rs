//! Completion behaviour of bridged calls against transport doubles.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use clientgen::{
    BindingError, Bytes, Callback, CallPattern, ClientConfig, HttpRequest, HttpVerb, Pending,
    StatusCode, Transport, TransportError, TransportResponse, Url, decode_json, discard,
    unavailable, unsupported,
};
use clientgen_define::{DispatchStrategy, TransportProfile};

/// Counts exchanges and completes each one from a fresh thread.
#[derive(Default)]
struct ThreadedTransport {
    calls: AtomicUsize,
}

impl Transport for ThreadedTransport {
    fn enqueue(&self, request: HttpRequest, on_complete: Callback) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::spawn(move || {
            // Echo the last path segment back as the JSON body.
            let last = request
                .url
                .path_segments()
                .and_then(|mut s| s.next_back())
                .unwrap_or_default()
                .to_string();
            std::thread::sleep(Duration::from_millis(5));
            on_complete(Ok(TransportResponse {
                status: StatusCode::OK,
                url: request.url,
                body: Bytes::from(format!("\"{last}\"")),
            }));
        });
    }
}

/// Drops the callback without invoking it.
struct BlackHoleTransport;

impl Transport for BlackHoleTransport {
    fn enqueue(&self, _request: HttpRequest, _on_complete: Callback) {}
}

/// Reports a timeout for every exchange.
struct TimeoutTransport;

impl Transport for TimeoutTransport {
    fn enqueue(&self, _request: HttpRequest, on_complete: Callback) {
        on_complete(Err(TransportError::Timeout { duration_ms: 250 }));
    }
}

fn config(transport: Arc<dyn Transport>) -> ClientConfig {
    ClientConfig::builder(transport)
        .base_url(Url::parse("http://localhost:8080/").unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn concurrent_calls_settle_independently_once_each() {
    let transport = Arc::new(ThreadedTransport::default());
    let config = config(transport.clone());
    let decoded = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..16u32)
        .map(|id| {
            let decoded = Arc::clone(&decoded);
            config
                .call("unknownReturn", HttpVerb::Get)
                .segment("unknown-return")
                .param(&id)
                .dispatch(move |body| {
                    decoded.fetch_add(1, Ordering::SeqCst);
                    decode_json::<String>(body)
                })
        })
        .collect();

    for (id, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap(), id.to_string());
    }

    assert_eq!(transport.calls.load(Ordering::SeqCst), 16);
    assert_eq!(decoded.load(Ordering::SeqCst), 16);
}

/// Chooses a method body the way generated clients do: capability check
/// first, then the profile's dispatch strategy.
struct ProfiledClient {
    config: ClientConfig,
    profile: TransportProfile,
}

impl ProfiledClient {
    fn new(transport: Arc<dyn Transport>, profile: TransportProfile) -> Self {
        Self {
            config: config(transport),
            profile,
        }
    }

    fn invoke(&self, method: &'static str, pattern: CallPattern) -> Pending<()> {
        if !self.profile.supports(pattern) {
            return unsupported(method, pattern, &self.profile.name);
        }
        match self.profile.dispatch {
            DispatchStrategy::Stub => unavailable(method),
            DispatchStrategy::CallbackBridge => self
                .config
                .call(method, HttpVerb::Get)
                .segment(method)
                .dispatch(discard),
        }
    }
}

const STREAMING: [CallPattern; 3] = [
    CallPattern::ServerStreaming,
    CallPattern::ClientStreaming,
    CallPattern::BidiStreaming,
];

#[tokio::test]
async fn unsupported_pattern_never_reaches_transport() {
    let transport = Arc::new(ThreadedTransport::default());
    let client = ProfiledClient::new(transport.clone(), TransportProfile::http_async());

    for pattern in STREAMING {
        let result = client.invoke("streaming", pattern).await;
        assert!(matches!(
            result,
            Err(BindingError::UnsupportedOperation { pattern: p, .. }) if p == pattern
        ));
    }
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);

    client.invoke("unary", CallPattern::Unary).await.unwrap();
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn stub_never_reaches_transport() {
    let transport = Arc::new(ThreadedTransport::default());
    let stub = ProfiledClient::new(transport.clone(), TransportProfile::http_stub());

    for pattern in [CallPattern::Unary, CallPattern::FireAndForget] {
        let result = stub.invoke("unary", pattern).await;
        assert!(matches!(result, Err(BindingError::TransportUnavailable(_))));
    }
    for pattern in STREAMING {
        let result = stub.invoke("streaming", pattern).await;
        assert!(matches!(result, Err(BindingError::UnsupportedOperation { .. })));
    }
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);

    let bridged = ProfiledClient::new(transport.clone(), TransportProfile::http_async());
    bridged.invoke("unary", CallPattern::Unary).await.unwrap();
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn dropped_callback_abandons_the_call() {
    let config = config(Arc::new(BlackHoleTransport));

    let result = config
        .call("unknown", HttpVerb::Get)
        .segment("unknown")
        .dispatch(discard)
        .await;

    assert!(matches!(
        result,
        Err(BindingError::Abandoned { method: "unknown" })
    ));
}

#[tokio::test]
async fn timeout_is_passed_through_unmodified() {
    let config = config(Arc::new(TimeoutTransport));

    let result = config.call("unknown", HttpVerb::Get).dispatch(discard).await;

    assert!(matches!(
        result,
        Err(BindingError::Transport(TransportError::Timeout { duration_ms: 250 }))
    ));
}

#[test]
fn blocking_caller_can_wait_for_threaded_completion() {
    let config = config(Arc::new(ThreadedTransport::default()));

    let value = config
        .call("unknownReturn", HttpVerb::Get)
        .param("abc")
        .dispatch(decode_json::<String>)
        .blocking_wait()
        .unwrap();

    assert_eq!(value, "abc");
}
