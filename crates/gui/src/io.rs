//! Directory loading on a background thread.

use std::path::PathBuf;

use crossbeam_channel::Sender;

use brewmap_core::Directory;

use crate::state::{AppMessage, LogEntry};

/// Fixed, well-known location of the directory file, relative to the
/// working directory.
pub const DATA_FILE: &str = "data/coffee_shops.csv";

/// Read and parse the directory file in a background thread, reporting the
/// outcome as `AppMessage`s.
///
/// This is the only asynchronous operation in the application. It runs
/// exactly once, at startup, to completion or failure; there is no retry,
/// timeout, or cancellation.
pub fn load_directory(path: PathBuf, tx: Sender<AppMessage>) {
    std::thread::spawn(move || {
        let _ = tx.send(AppMessage::Log(LogEntry::info(format!(
            "Loading {}...",
            path.display()
        ))));

        match Directory::load(&path) {
            Ok(directory) => {
                let _ = tx.send(AppMessage::Log(LogEntry::success(format!(
                    "Loaded {} coffee shops from {}",
                    directory.len(),
                    path.display()
                ))));
                let _ = tx.send(AppMessage::DirectoryLoaded { path, directory });
            }
            Err(e) => {
                let _ = tx.send(AppMessage::LoadFailed {
                    message: format!(
                        "Unable to load coffee shop data ({e}). \
                         Make sure {} exists in the application folder.",
                        path.display()
                    ),
                    path,
                });
            }
        }
    });
}
