//! Live reload of the stylesheet.
//!
//! The watch is placed on the stylesheet's directory, not on the file: editors
//! that save by renaming a temp file over the original replace the inode, and
//! an inode watch dies with it.  Watching the directory also catches a
//! stylesheet that only appears after startup.

use notify::{
    event::{EventKind, ModifyKind},
    Config, Event, RecommendedWatcher, RecursiveMode, Watcher,
};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Quiet period that folds one save (often several events) into one reload.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Sends `()` on the returned receiver whenever the stylesheet at `path` is
/// written, replaced, created or removed.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let mut rx = dash_config::watch_stylesheet("/home/user/.config/rice-dash/theme.toml");
/// while rx.recv().await.is_some() {
///     println!("stylesheet changed, reloading");
/// }
/// # }
/// ```
pub fn watch_stylesheet(path: impl AsRef<Path>) -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(watch_loop(path.as_ref().to_path_buf(), tx));
    rx
}

/// Does `event` concern the file named `file_name` in the watched directory?
pub fn affects_stylesheet(event: &Event, file_name: &OsStr) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_)
            | EventKind::Remove(_)
            | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Name(_) | ModifyKind::Any)
    );

    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    let Some(file_name) = path.file_name().map(OsString::from) else {
        warn!("Stylesheet path '{}' names no file; not watching", path.display());
        return;
    };
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!("Not watching '{}': {e}", dir.display());
        return;
    }

    info!("Watching stylesheet: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) if affects_stylesheet(&e, &file_name) => {
                // Swallow the rest of this save before reloading.
                while let Ok(Some(_)) = tokio::time::timeout(DEBOUNCE, event_rx.recv()).await {}
                debug!("Stylesheet event: {:?}", e.kind);

                if tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
