use crate::time::TimeProvider;
use async_trait::async_trait;
use chrono::TimeZone;
use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
    time::Duration,
};
use tracing_subscriber::fmt::time::FormatTime;

/// Clock that jumps forward on `sleep` instead of waiting.
#[derive(Debug)]
pub struct MockTimeProvider {
    current_time: Arc<AtomicI64>,
}

impl MockTimeProvider {
    pub fn new(start_time: i64) -> Self {
        Self { current_time: Arc::new(AtomicI64::new(start_time)) }
    }

    pub fn advance_time(&self, seconds: i64) {
        self.current_time.fetch_add(seconds, Ordering::SeqCst);
    }

    pub fn set(&self, new_time: i64) {
        self.current_time.store(new_time, Ordering::SeqCst)
    }
}

#[async_trait]
impl TimeProvider for MockTimeProvider {
    fn now(&self) -> i64 {
        self.current_time.load(Ordering::SeqCst)
    }

    async fn sleep(&self, duration: Duration) {
        self.advance_time(duration.as_secs() as i64);
    }
}

pub struct MockTimeFormatter<T: TimeProvider> {
    pub time_provider: Arc<T>,
}

impl<T: TimeProvider> FormatTime for MockTimeFormatter<T> {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        match chrono::Utc.timestamp_opt(self.time_provider.now(), 0).single() {
            Some(time) => write!(w, "{}", time.to_rfc3339()),
            None => write!(w, "{}", self.time_provider.now()),
        }
    }
}
