// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! File system watcher for live settings reload
//!
//! Uses OS-level file watching (Linux inotify) via the notify crate.
//! Zero CPU overhead when the settings file is unchanged; the UI polls
//! `check_for_changes` from a glib timeout and reloads while unlocked.

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};

/// Watches the settings file for modifications
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    config_path: PathBuf,
}

impl ConfigWatcher {
    /// Watches the directory containing the settings file
    ///
    /// The directory rather than the file itself is watched: most editors
    /// replace files by rename, which would orphan a file-level watch
    /// after the first save. Events for sibling files are filtered out.
    pub fn new(config_path: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let watch_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

        Ok(ConfigWatcher {
            _watcher: watcher,
            rx,
            config_path,
        })
    }

    /// Checks for settings file changes (non-blocking)
    ///
    /// Drains the whole event backlog so one reload covers any burst of
    /// writes from an editor save.
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;

        while let Ok(event_result) = self.rx.try_recv() {
            if let Ok(event) = event_result {
                if !matches!(
                    event.kind,
                    notify::EventKind::Modify(_) | notify::EventKind::Create(_)
                ) {
                    continue;
                }

                if event.paths.iter().any(|p| p == &self.config_path) {
                    changed = true;
                }
            }
        }

        changed
    }
}
