//! Console Event Sink
//!
//! Human-readable progress lines. Failures and collisions are always shown;
//! per-file successes only when details are requested (`-v`).

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{SubstitutionEvent, SubstitutionEventSink};
use crate::ui::primitives::icon::Icon;

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    details: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Create a console sink writing to stdout
    pub fn stdout(color: bool, unicode: bool, details: bool) -> Self {
        Self::with_writer(color, unicode, details, io::stdout())
    }

    /// Create a console sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(
        color: bool,
        unicode: bool,
        details: bool,
        writer: W,
    ) -> Self {
        Self {
            color,
            unicode,
            details,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    /// Render an event, `None` when it is not shown at this detail level
    fn render(&self, event: SubstitutionEvent) -> Option<String> {
        let always = matches!(
            event,
            SubstitutionEvent::ContentFailed { .. }
                | SubstitutionEvent::ContentError { .. }
                | SubstitutionEvent::RenameFailed { .. }
                | SubstitutionEvent::MoveCollision { .. }
                | SubstitutionEvent::MoveFailed { .. }
        );
        if !always && !self.details {
            return None;
        }

        let text = match event {
            SubstitutionEvent::ContentStarted { old, new, .. } => {
                format!("{} Contents '{}' -> '{}'", self.icon(Icon::Progress), old, new)
            }
            SubstitutionEvent::ContentReplaced { path } => {
                format!("  {} {}", self.icon(Icon::Success), path.display())
            }
            SubstitutionEvent::ContentFailed { path, reason } => format!(
                "  {} {}: {} (original restored)",
                self.icon(Icon::Error),
                path.display(),
                reason
            ),
            SubstitutionEvent::ContentError { path, error } => {
                format!("  {} {}: {}", self.icon(Icon::Error), path.display(), error)
            }
            SubstitutionEvent::ContentCompleted {
                examined, modified, ..
            } => format!(
                "  {} {} of {} files modified",
                self.icon(Icon::Arrow),
                modified,
                examined
            ),
            SubstitutionEvent::RenameStarted { old, new, .. } => {
                format!("{} Names '{}' -> '{}'", self.icon(Icon::Progress), old, new)
            }
            SubstitutionEvent::Renamed { from, to } => format!(
                "  {} {} {} {}",
                self.icon(Icon::Success),
                from.display(),
                self.icon(Icon::Move),
                to.display()
            ),
            SubstitutionEvent::RenameFailed { path, error } => {
                format!("  {} {}: {}", self.icon(Icon::Error), path.display(), error)
            }
            SubstitutionEvent::RenameCompleted { renamed, .. } => {
                format!("  {} {} entries renamed", self.icon(Icon::Arrow), renamed)
            }
            SubstitutionEvent::PackageMoveStarted { old, new, .. } => {
                format!("{} Package {} -> {}", self.icon(Icon::Progress), old, new)
            }
            SubstitutionEvent::EntryMoved { from, to } => format!(
                "  {} {} {} {}",
                self.icon(Icon::Success),
                from.display(),
                self.icon(Icon::Move),
                to.display()
            ),
            SubstitutionEvent::MoveCollision { path } => format!(
                "  {} {} already existed and was overwritten",
                self.icon(Icon::Warning),
                path.display()
            ),
            SubstitutionEvent::MoveFailed { path, error } => {
                format!("  {} {}: {}", self.icon(Icon::Error), path.display(), error)
            }
            SubstitutionEvent::DirectoryPruned { path } => {
                format!("  {} {}", self.icon(Icon::Trash), path.display())
            }
            SubstitutionEvent::PackageMoveCompleted {
                source_roots,
                moved,
                ..
            } => format!(
                "  {} {} entries moved across {} source roots",
                self.icon(Icon::Arrow),
                moved,
                source_roots
            ),
        };
        Some(text)
    }
}

impl SubstitutionEventSink for ConsoleEventSink {
    fn on_event(&self, event: SubstitutionEvent) {
        if let Some(text) = self.render(event) {
            self.line(text);
        }
    }
}
