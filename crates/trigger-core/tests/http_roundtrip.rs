//! End-to-end tests: TriggerInvoker wired to the reqwest implementations
//! against a wiremock backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trigger_core::impls::{HttpBackend, HttpProfileStore, HttpReloader, HttpTransport};
use trigger_core::ports::{SnapshotProvider, WarningSink};
use trigger_core::{InvokerBuilder, TriggerArgument, TriggerDescriptor, TriggerInvoker};

#[derive(Default)]
struct CollectingWarnings(Mutex<Vec<String>>);

impl WarningSink for CollectingWarnings {
    fn warning(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

/// `/ui/profile` を `expected` 回だけ受け付ける
async fn mount_profile(server: &MockServer, expected: u64) {
    Mock::given(method("GET"))
        .and(path("/ui/profile"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "someone",
            "config": {"commands": [{"name": "backup", "hash": "abc123"}]},
            "siteCrons": [{"name": "nightly"}]
        })))
        .expect(expected)
        .mount(server)
        .await;
}

async fn invoker_for(
    server: &MockServer,
    warnings: Arc<CollectingWarnings>,
) -> (TriggerInvoker, Arc<HttpProfileStore>) {
    let backend = HttpBackend::new(format!("{}/ui", server.uri()), Duration::from_secs(5))
        .unwrap()
        .with_api_key("test-key");
    let store = Arc::new(HttpProfileStore::connect(backend.clone()).await.unwrap());
    let invoker = InvokerBuilder::new()
        .transport(Arc::new(HttpTransport::new(backend.clone())))
        .state_store(store.clone())
        .reloader(Arc::new(HttpReloader::new(backend)))
        .warning_sink(warnings)
        .min_duration(Duration::from_millis(50))
        .build()
        .unwrap();
    (invoker, store)
}

async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}

#[tokio::test]
async fn custom_command_hits_trigger_endpoint_and_refreshes() {
    let server = MockServer::start().await;
    // connect 時と成功後の refresh
    mount_profile(&server, 2).await;
    Mock::given(method("GET"))
        .and(path("/ui/trigger/TrigCustomCommand/abc123"))
        .and(header("x-api-key", "test-key"))
        .and(header("cache-control", "no-cache"))
        .and(header("pragma", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Trigger queued."))
        .expect(1)
        .mount(&server)
        .await;

    let (invoker, store) = invoker_for(&server, Arc::default()).await;
    assert_eq!(store.snapshot().config.commands[0].hash, "abc123");

    let d = TriggerDescriptor::new("TrigCustomCommand", "backup");
    let resp = invoker.invoke(&d, None).await;

    assert!(resp.ok);
    assert_eq!(resp.status, Some(200));
    assert_eq!(resp.body, "Trigger queued.");
    assert_eq!(
        request_paths(&server).await,
        vec!["/ui/profile", "/ui/trigger/TrigCustomCommand/abc123", "/ui/profile"]
    );

    let requests = server.received_requests().await.unwrap();
    let query = requests[1].url.query().unwrap_or_default();
    assert!(query.starts_with("ts="), "unexpected query {query}");
}

#[tokio::test]
async fn backend_failure_is_returned_without_refresh() {
    let server = MockServer::start().await;
    mount_profile(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/ui/trigger/TrigEndpointURL/pong"))
        .respond_with(ResponseTemplate::new(500).set_body_string("trigger exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let (invoker, _store) = invoker_for(&server, Arc::default()).await;

    let d = TriggerDescriptor::new("TrigEndpointURL", "ping");
    let resp = invoker
        .invoke(&d, Some(TriggerArgument::from("pong")))
        .await;

    assert!(!resp.ok);
    assert_eq!(resp.status, Some(500));
    assert_eq!(resp.body, "trigger exploded");
}

#[tokio::test]
async fn stop_reloads_and_refreshes_only() {
    let server = MockServer::start().await;
    mount_profile(&server, 2).await;
    Mock::given(method("GET"))
        .and(path("/ui/reload"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path_regex("^/ui/trigger/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (invoker, _store) = invoker_for(&server, Arc::default()).await;

    let d = TriggerDescriptor::new("TrigStop", "Stop");
    let resp = invoker.invoke(&d, None).await;

    assert!(resp.ok);
    assert_eq!(resp.body, "");
    assert_eq!(
        request_paths(&server).await,
        vec!["/ui/profile", "/ui/reload", "/ui/profile"]
    );
}

#[tokio::test]
async fn rejected_reload_reaches_warning_sink() {
    let server = MockServer::start().await;
    // reload が失敗したら refresh は行わない
    mount_profile(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/ui/reload"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path_regex("^/ui/trigger/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let warnings = Arc::new(CollectingWarnings::default());
    let (invoker, _store) = invoker_for(&server, warnings.clone()).await;

    let d = TriggerDescriptor::new("TrigStop", "Stop");
    let resp = invoker.invoke(&d, None).await;

    assert!(resp.ok);
    assert_eq!(resp.body, "");
    let warnings = warnings.0.lock().unwrap().clone();
    assert_eq!(warnings.len(), 1);
    assert!(
        warnings[0].contains("reload rejected with status 503"),
        "unexpected warning {:?}",
        warnings[0]
    );
}
