//! Reload the points document when its file changes on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::unbounded_channel;
use tokio::task::JoinHandle;

use simio_app::ports::{Clock, ConfigStore, EventLog};
use simio_app::services::config_service::ConfigService;

/// Watch `path` and refresh `config` whenever the file is written.
///
/// The parent directory is watched rather than the file itself: saves replace
/// the file by renaming over it, which would silently end a watch on the old
/// file. Writes made by the service itself come back as events too; the
/// refresh sees an unchanged document and skips them.
///
/// The watch lasts as long as the returned task.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created or the directory cannot
/// be watched.
pub fn watch_config_file<S, C, L>(
    path: PathBuf,
    config: Arc<ConfigService<S, C, L>>,
) -> Result<JoinHandle<()>, notify::Error>
where
    S: ConfigStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
    L: EventLog + Send + Sync + 'static,
{
    let (raw_tx, mut raw_rx) = unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if raw_tx.send(event).is_err() {
                    tracing::error!("failed to send event to config watcher channel");
                }
            }
            Err(err) => tracing::warn!(%err, "config watcher error"),
        },
        notify::Config::default(),
    )?;

    let directory = watched_directory(&path);
    watcher.watch(&directory, RecursiveMode::NonRecursive)?;
    tracing::info!(path = %path.display(), "watching points configuration");

    let file_name = path.file_name().map(OsString::from);
    Ok(tokio::spawn(async move {
        // Dropping the watcher stops the notifications.
        let _watcher = watcher;
        while let Some(event) = raw_rx.recv().await {
            if !is_write(&event.kind) || !touches(&event, file_name.as_deref()) {
                continue;
            }
            match config.refresh().await {
                Ok(Some(count)) => {
                    tracing::info!(points = count, "points configuration reloaded from file");
                }
                Ok(None) => tracing::debug!("points configuration unchanged"),
                Err(err) => tracing::error!(%err, "failed to reload points configuration"),
            }
        }
    }))
}

fn watched_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_write(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

fn touches(event: &Event, file_name: Option<&std::ffi::OsStr>) -> bool {
    event
        .paths
        .iter()
        .any(|p| p.file_name().is_some() && p.file_name() == file_name)
}
