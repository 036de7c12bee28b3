use crate::{test::utils::mock_time::MockTimeFormatter, time::TimeProvider};
use chrono::{TimeZone, Utc};
use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. With a time provider, log timestamps follow its clock.
/// Safe to call more than once; later calls are ignored.
pub fn start_log<T: TimeProvider + 'static>(time_provider: Option<Arc<T>>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let _ = match time_provider {
        Some(time_provider) => builder.with_timer(MockTimeFormatter { time_provider }).try_init(),
        None => builder.try_init(),
    };
}

pub fn display_time(ux_ts: i64) -> String {
    match Utc.timestamp_opt(ux_ts, 0).single() {
        Some(utc_time) => utc_time.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("invalid timestamp {}", ux_ts),
    }
}

/// Drops every `folder` component from `path`. An empty `folder` only normalises `.`.
pub fn remove_folder_from_path(path: &Path, folder: &str) -> PathBuf {
    path.components()
        .filter(|c| match c {
            Component::CurDir => false,
            Component::Normal(name) => folder.is_empty() || *name != folder,
            _ => true,
        })
        .collect()
}
