#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use eddy_core::{
    Clock, FetchConfig, FetchService, OriginClient, OriginError, OriginResponse,
};
use parking_lot::Mutex;

pub const ORIGIN: &str = "https://example.test";
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// What the scripted origin answers for a URL.
#[derive(Clone)]
pub enum Reply {
    Ok(OriginResponse),
    Transport,
    Body,
}

/// Origin double: scripted replies per URL, unknown URLs answer 404.
#[derive(Default)]
pub struct ScriptedOrigin {
    replies: Mutex<HashMap<String, Reply>>,
    requested: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedOrigin {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn serve(&self, url: &str, body: &'static str, content_type: Option<&str>) {
        self.replies
            .lock()
            .insert(url.to_string(), Reply::Ok(OriginResponse::ok(body, content_type)));
    }

    pub fn status(&self, url: &str, status: u16) {
        self.replies
            .lock()
            .insert(url.to_string(), Reply::Ok(OriginResponse::with_status(status)));
    }

    pub fn fail(&self, url: &str, reply: Reply) {
        self.replies.lock().insert(url.to_string(), reply);
    }

    /// Number of requests received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl OriginClient for ScriptedOrigin {
    async fn get(&self, url: &str) -> Result<OriginResponse, OriginError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().push(url.to_string());

        let reply = self.replies.lock().get(url).cloned();
        match reply {
            Some(Reply::Ok(response)) => Ok(response),
            Some(Reply::Transport) => Err(OriginError::transport("connection refused")),
            Some(Reply::Body) => Err(OriginError::body("connection reset")),
            None => Ok(OriginResponse::with_status(404)),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<SystemTime>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        *self.now.lock()
    }
}

/// Service allowing only [`ORIGIN`] with a 24h TTL.
pub fn service(origin: &Arc<ScriptedOrigin>, clock: &Arc<ManualClock>) -> FetchService {
    let config = FetchConfig::builder()
        .allow_origin(ORIGIN)
        .ttl(DAY)
        .build()
        .expect("valid test config");

    FetchService::with_clock(config, origin.clone(), clock.clone())
}
