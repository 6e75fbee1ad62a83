use std::time::{Duration, Instant};

/// How long an informational notice stays visible.
const INFO_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    created_at: Instant,
}

/// Transient, mode-scoped status line. Info notices expire after a fixed
/// interval; error notices persist until the next action replaces or
/// clears them.
#[derive(Debug, Default)]
pub struct StatusLine {
    current: Option<Notice>,
}

impl StatusLine {
    pub fn info(&mut self, text: impl Into<String>) {
        self.current = Some(Notice {
            level: NoticeLevel::Info,
            text: text.into(),
            created_at: Instant::now(),
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.current = Some(Notice {
            level: NoticeLevel::Error,
            text: text.into(),
            created_at: Instant::now(),
        });
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Current notice for display, dropping an info notice past its TTL.
    pub fn render(&mut self) -> Option<&Notice> {
        if let Some(notice) = &self.current {
            if notice.level == NoticeLevel::Info && notice.created_at.elapsed() >= INFO_TTL {
                self.current = None;
            }
        }
        self.current.as_ref()
    }
}
