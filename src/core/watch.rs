//! File-system watching for live updates.
//!
//! The `notify` backend and the stop handle only send messages on a channel.
//! [`Subscription::next_change`] drains that channel on the caller's thread,
//! so every change is processed sequentially, the same way the initial scan
//! processes files.

use std::{
    collections::VecDeque,
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
};

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::core::SourceFilter;

enum Message {
    Fs(notify::Result<Event>),
    Stop,
}

/// What the subscription yields.
#[derive(Debug)]
pub enum WatchEvent {
    /// A source file was created or modified.
    Changed(PathBuf),
    /// The backend reported an error; watching continues.
    Failed(String),
}

/// Cancels a [`Subscription`] from any thread.
#[derive(Clone)]
pub struct StopHandle {
    sender: Sender<Message>,
}

impl StopHandle {
    pub fn stop(&self) {
        // The subscription may already be gone
        let _ = self.sender.send(Message::Stop);
    }
}

/// A recursive watch on the source root.
///
/// Dropping the subscription releases the underlying watcher.
pub struct Subscription {
    _watcher: RecommendedWatcher,
    sender: Sender<Message>,
    receiver: Receiver<Message>,
    filter: SourceFilter,
    pending: VecDeque<PathBuf>,
    stopped: bool,
}

impl Subscription {
    pub fn new(filter: SourceFilter) -> Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let fs_sender = sender.clone();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = fs_sender.send(Message::Fs(res));
        })
        .context("Failed to create file watcher")?;
        watcher
            .watch(filter.root(), RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {}", filter.root().display()))?;

        Ok(Self {
            _watcher: watcher,
            sender,
            receiver,
            filter,
            pending: VecDeque::new(),
            stopped: false,
        })
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            sender: self.sender.clone(),
        }
    }

    /// Block until the next relevant change, or return `None` once stopped.
    pub fn next_change(&mut self) -> Option<WatchEvent> {
        loop {
            if self.stopped {
                return None;
            }
            if let Some(path) = self.pending.pop_front() {
                return Some(WatchEvent::Changed(path));
            }

            match self.receiver.recv() {
                Ok(Message::Stop) | Err(_) => self.stopped = true,
                Ok(Message::Fs(Err(err))) => return Some(WatchEvent::Failed(err.to_string())),
                Ok(Message::Fs(Ok(event))) => {
                    if !is_content_change(&event.kind) {
                        continue;
                    }
                    for path in event.paths {
                        if path.is_file()
                            && self.filter.accepts(&path)
                            && !self.pending.contains(&path)
                        {
                            self.pending.push_back(path);
                        }
                    }
                }
            }
        }
    }
}

/// Creations and modifications trigger a rescan; access and removal do not.
fn is_content_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}
