//! Shared mock ports for unit tests.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use gantry_domain::{DownloadArtifact, RequestDescriptor, TransportReply};

use crate::auth::MemoryTokenStore;
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::ports::{
    DownloadError, DownloadSink, Notifier, SessionUi, Transport, TransportError,
};
use crate::recovery::AuthFailureCoordinator;

/// Scripted transport: pops one pre-registered reply per request and
/// records every descriptor it sees.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<TransportReply, TransportError>>>,
    seen: Mutex<Vec<RequestDescriptor>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, status: u16, body: &[u8]) {
        self.push_reply_with_headers(status, body, &[]);
    }

    pub fn push_reply_with_headers(&self, status: u16, body: &[u8], headers: &[(&str, &str)]) {
        let headers: HashMap<String, String> = headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), (*v).to_string()))
            .collect();
        self.replies.lock().unwrap().push_back(Ok(TransportReply::new(
            status,
            headers,
            body.to_vec(),
            Duration::from_millis(1),
        )));
    }

    pub fn push_error(&self, error: TransportError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RequestDescriptor {
        self.requests().last().cloned().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &RequestDescriptor) -> Result<TransportReply, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted reply".to_string())))
    }
}

/// Notification sink that records everything it is shown.
#[derive(Default)]
pub struct RecordingNotifier {
    errors: Mutex<Vec<String>>,
    successes: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }
}

/// Dialog gateway that counts invocations.
#[derive(Default)]
pub struct RecordingSessionUi {
    login_opens: AtomicUsize,
    init_opens: AtomicUsize,
}

impl RecordingSessionUi {
    pub fn login_opens(&self) -> usize {
        self.login_opens.load(Ordering::SeqCst)
    }

    pub fn init_opens(&self) -> usize {
        self.init_opens.load(Ordering::SeqCst)
    }
}

impl SessionUi for RecordingSessionUi {
    fn open_login(&self) {
        self.login_opens.fetch_add(1, Ordering::SeqCst);
    }

    fn open_init(&self) {
        self.init_opens.fetch_add(1, Ordering::SeqCst);
    }

    fn close_login(&self) {}

    fn close_init(&self) {}
}

/// Download sink that collects delivered artifacts.
#[derive(Default)]
pub struct RecordingDownloadSink {
    delivered: Mutex<Vec<DownloadArtifact>>,
    fail: bool,
}

impl RecordingDownloadSink {
    pub fn failing() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn delivered(&self) -> Vec<DownloadArtifact> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl DownloadSink for RecordingDownloadSink {
    async fn deliver(&self, artifact: &DownloadArtifact) -> Result<(), DownloadError> {
        if self.fail {
            return Err(DownloadError::Other("disk full".to_string()));
        }
        self.delivered.lock().unwrap().push(artifact.clone());
        Ok(())
    }
}

/// A fully wired client over mock ports.
pub struct ClientFixture {
    pub client: Arc<ApiClient>,
    pub transport: Arc<MockTransport>,
    pub tokens: Arc<MemoryTokenStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub session: Arc<RecordingSessionUi>,
}

pub fn fixture() -> ClientFixture {
    fixture_with(ClientConfig::default())
}

pub fn fixture_with(config: ClientConfig) -> ClientFixture {
    let transport = Arc::new(MockTransport::new());
    let tokens = Arc::new(MemoryTokenStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let session = Arc::new(RecordingSessionUi::default());
    let recovery = Arc::new(AuthFailureCoordinator::new(
        tokens.clone(),
        session.clone(),
        notifier.clone(),
        &config,
    ));
    let client = Arc::new(ApiClient::new(
        transport.clone(),
        tokens.clone(),
        notifier.clone(),
        recovery,
    ));
    ClientFixture {
        client,
        transport,
        tokens,
        notifier,
        session,
    }
}
