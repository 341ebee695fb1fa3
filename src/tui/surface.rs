//! Terminal render surface
//!
//! Holds the last view the store pushed, the notification queue and the
//! chart animation. The draw loop reads from here; nothing in the TUI
//! recomputes totals on its own.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::Settings;
use crate::services::{DateTotal, LedgerView, Notice, RenderSurface};

use super::widgets::{Notification, NotificationQueue};

/// One animated bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub label: String,
    from: u64,
    to: u64,
}

/// Per-date bar chart, kept alive across refreshes
///
/// A refresh retargets the existing bars instead of rebuilding the chart:
/// every bar starts from the height it currently shows and moves to its new
/// total over `frames` ticks. New dates grow from zero.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    bars: Vec<ChartBar>,
    frame: u32,
    frames: u32,
    retargets: u64,
}

impl ChartState {
    pub fn new(frames: u32) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    /// Frames needed to cover `animation` at one frame per `tick`
    pub fn frames_for(animation: Duration, tick: Duration) -> u32 {
        if tick.is_zero() {
            return 0;
        }
        let frames = animation.as_millis().div_ceil(tick.as_millis());
        u32::try_from(frames).unwrap_or(u32::MAX)
    }

    pub fn retarget(&mut self, totals: &[DateTotal]) {
        let shown: HashMap<String, u64> = self.values().into_iter().collect();

        self.bars = totals
            .iter()
            .map(|total| ChartBar {
                label: total.date.clone(),
                from: shown.get(&total.date).copied().unwrap_or(0),
                to: total.amount.cents().max(0) as u64,
            })
            .collect();
        self.frame = 0;
        self.retargets += 1;
    }

    /// Advance one frame; returns whether anything moved
    pub fn tick(&mut self) -> bool {
        if self.is_animating() {
            self.frame += 1;
            true
        } else {
            false
        }
    }

    pub fn is_animating(&self) -> bool {
        self.frame < self.frames && self.bars.iter().any(|b| b.from != b.to)
    }

    /// Labels with the heights to draw right now, in hundredths
    pub fn values(&self) -> Vec<(String, u64)> {
        self.bars
            .iter()
            .map(|bar| (bar.label.clone(), self.height(bar)))
            .collect()
    }

    /// Final heights once the animation settles
    pub fn targets(&self) -> Vec<(String, u64)> {
        self.bars.iter().map(|b| (b.label.clone(), b.to)).collect()
    }

    /// How many times the chart was retargeted since creation
    pub fn retarget_count(&self) -> u64 {
        self.retargets
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    fn height(&self, bar: &ChartBar) -> u64 {
        if self.frame >= self.frames {
            return bar.to;
        }
        let from = bar.from as i128;
        let to = bar.to as i128;
        let h = from + (to - from) * self.frame as i128 / self.frames as i128;
        h.max(0) as u64
    }
}

/// [`RenderSurface`] backing the terminal UI
#[derive(Debug)]
pub struct TuiSurface {
    view: LedgerView,
    pub notifications: NotificationQueue,
    pub chart: ChartState,
    notification_duration: Duration,
}

impl TuiSurface {
    pub fn new(settings: &Settings, tick: Duration) -> Self {
        let animation = Duration::from_millis(settings.chart_animation_ms);
        Self {
            view: LedgerView::default(),
            notifications: NotificationQueue::new(),
            chart: ChartState::new(ChartState::frames_for(animation, tick)),
            notification_duration: Duration::from_secs(settings.notification_secs),
        }
    }

    /// The last view pushed by the store
    pub fn view(&self) -> &LedgerView {
        &self.view
    }

    /// Expire notifications and step the chart
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
        self.chart.tick();
    }
}

impl RenderSurface for TuiSurface {
    fn refresh(&mut self, view: &LedgerView) {
        self.chart.retarget(&view.per_date);
        self.view = view.clone();
    }

    fn notify(&mut self, notice: Notice) {
        self.notifications
            .push(Notification::new(notice, self.notification_duration));
    }
}
