//! Console render surface
//!
//! One-shot commands don't redraw anything on refresh; they keep the latest
//! view so the command can print what it needs. Notices go straight to stderr.

use std::io::Write;

use crate::services::{LedgerView, Notice, NoticeKind, RenderSurface};

/// Render surface for one-shot CLI commands
pub struct ConsoleSurface<W: Write = std::io::Stderr> {
    out: W,
    last_view: LedgerView,
    notices_shown: usize,
}

impl ConsoleSurface {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_view: LedgerView::default(),
            notices_shown: 0,
        }
    }

    /// The view from the most recent refresh
    pub fn last_view(&self) -> &LedgerView {
        &self.last_view
    }

    pub fn notices_shown(&self) -> usize {
        self.notices_shown
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for ConsoleSurface<W> {
    fn refresh(&mut self, view: &LedgerView) {
        self.last_view = view.clone();
    }

    fn notify(&mut self, notice: Notice) {
        let prefix = match notice.kind {
            NoticeKind::Error => "Error",
            NoticeKind::Warning => "Warning",
        };
        // Nowhere left to report a failing stderr
        let _ = writeln!(self.out, "{}: {}", prefix, notice.message);
        self.notices_shown += 1;
    }
}
