//! JSON Event Sink
//!
//! Outputs substitution events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SubstitutionEvent, SubstitutionEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Command name stamped on every event
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn status(failed: usize) -> &'static str {
    if failed == 0 {
        "success"
    } else {
        "partial"
    }
}

impl SubstitutionEventSink for JsonEventSink {
    fn on_event(&self, event: SubstitutionEvent) {
        let command = self.command;
        let json = match event {
            SubstitutionEvent::ContentStarted { root, old, new } => {
                serde_json::json!({
                    "event": "content_start",
                    "command": command,
                    "root": root.display().to_string(),
                    "old": old,
                    "new": new,
                })
            }

            SubstitutionEvent::ContentReplaced { path } => {
                serde_json::json!({
                    "event": "content_replaced",
                    "command": command,
                    "path": path.display().to_string(),
                })
            }

            SubstitutionEvent::ContentFailed { path, reason } => {
                serde_json::json!({
                    "event": "content_failed",
                    "command": command,
                    "path": path.display().to_string(),
                    "reason": reason,
                })
            }

            SubstitutionEvent::ContentError { path, error } => {
                serde_json::json!({
                    "event": "content_error",
                    "command": command,
                    "path": path.display().to_string(),
                    "error": error,
                })
            }

            SubstitutionEvent::ContentCompleted {
                examined,
                modified,
                failed,
            } => {
                serde_json::json!({
                    "event": "content_complete",
                    "command": command,
                    "status": status(failed),
                    "examined": examined,
                    "modified": modified,
                    "failed": failed,
                })
            }

            SubstitutionEvent::RenameStarted { root, old, new } => {
                serde_json::json!({
                    "event": "rename_start",
                    "command": command,
                    "root": root.display().to_string(),
                    "old": old,
                    "new": new,
                })
            }

            SubstitutionEvent::Renamed { from, to } => {
                serde_json::json!({
                    "event": "renamed",
                    "command": command,
                    "from": from.display().to_string(),
                    "to": to.display().to_string(),
                })
            }

            SubstitutionEvent::RenameFailed { path, error } => {
                serde_json::json!({
                    "event": "rename_failed",
                    "command": command,
                    "path": path.display().to_string(),
                    "error": error,
                })
            }

            SubstitutionEvent::RenameCompleted { renamed, failed } => {
                serde_json::json!({
                    "event": "rename_complete",
                    "command": command,
                    "status": status(failed),
                    "renamed": renamed,
                    "failed": failed,
                })
            }

            SubstitutionEvent::PackageMoveStarted { root, old, new } => {
                serde_json::json!({
                    "event": "move_start",
                    "command": command,
                    "root": root.display().to_string(),
                    "old": old,
                    "new": new,
                })
            }

            SubstitutionEvent::EntryMoved { from, to } => {
                serde_json::json!({
                    "event": "moved",
                    "command": command,
                    "from": from.display().to_string(),
                    "to": to.display().to_string(),
                })
            }

            SubstitutionEvent::MoveCollision { path } => {
                serde_json::json!({
                    "event": "move_collision",
                    "command": command,
                    "path": path.display().to_string(),
                })
            }

            SubstitutionEvent::MoveFailed { path, error } => {
                serde_json::json!({
                    "event": "move_failed",
                    "command": command,
                    "path": path.display().to_string(),
                    "error": error,
                })
            }

            SubstitutionEvent::DirectoryPruned { path } => {
                serde_json::json!({
                    "event": "pruned",
                    "command": command,
                    "path": path.display().to_string(),
                })
            }

            SubstitutionEvent::PackageMoveCompleted {
                source_roots,
                moved,
                collisions,
            } => {
                serde_json::json!({
                    "event": "move_complete",
                    "command": command,
                    "source_roots": source_roots,
                    "moved": moved,
                    "collisions": collisions,
                })
            }
        };

        self.write_event(json);
    }
}
