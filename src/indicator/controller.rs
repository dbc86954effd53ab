//! Show / animate / auto-hide sequencing.

use std::time::{Duration, Instant};

use tracing::debug;

use super::animation::{Frame, ShowAnimation};
use super::placement::{place, Anchors, Placement};
use super::poller::StatusPoller;
use super::probe::DesktopProbe;
use crate::model::constants::{ANIMATION_DURATION, HIDDEN_DELAY, WINDOW_OFFSET};
use crate::model::{ImeStatus, IndicatorContent, PlacementMode, Settings};

/// Everything the renderer needs to show a new indication.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUpdate {
    pub status: ImeStatus,
    pub content: IndicatorContent,
    pub placement: Placement,
    /// Delay after which the HIDE timer should fire.
    pub hide_after: Duration,
}

#[derive(Debug, Clone, Copy)]
enum Visibility {
    Hidden,
    Shown {
        animation: Option<ShowAnimation>,
        hide_at: Instant,
    },
}

/// Drives the indicator from periodic status samples.
#[derive(Debug)]
pub struct IndicatorController {
    poller: StatusPoller,
    visibility: Visibility,
    animation_duration: Duration,
}

impl Default for IndicatorController {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorController {
    pub fn new() -> Self {
        Self::with_animation_duration(ANIMATION_DURATION)
    }

    pub fn with_animation_duration(animation_duration: Duration) -> Self {
        Self {
            poller: StatusPoller::new(),
            visibility: Visibility::Hidden,
            animation_duration,
        }
    }

    /// Poll the probe once; returns an update when the status changed.
    ///
    /// A failed probe keeps the previous state so a transient error never
    /// shows a wrong indication.
    pub fn refresh<P: DesktopProbe + ?Sized>(
        &mut self,
        probe: &mut P,
        settings: &Settings,
        now: Instant,
    ) -> Option<DisplayUpdate> {
        let conversion_mode = match probe.conversion_mode() {
            Ok(mode) => mode,
            Err(e) => {
                debug!("Error checking IME status: {}", e);
                return None;
            }
        };
        let status = ImeStatus::new(conversion_mode, probe.caps_lock());

        if !self.poller.observe(status) {
            return None;
        }

        let content =
            IndicatorContent::from_status(&status, settings.show_shape, settings.show_symbol);
        let anchors = match settings.placement {
            PlacementMode::Caret => Anchors {
                caret: probe.caret_rect(),
                cursor: probe.cursor_position(),
            },
            PlacementMode::Cursor | PlacementMode::Corner => Anchors {
                caret: None,
                cursor: probe.cursor_position(),
            },
        };
        let placement = place(settings.placement, &anchors, &probe.screens(), content.size());

        let rise = (WINDOW_OFFSET * placement.scale).round() as i32;
        let hide_after = settings.hide_delay();
        self.visibility = Visibility::Shown {
            animation: Some(ShowAnimation::new(
                now,
                self.animation_duration,
                placement.origin,
                rise,
            )),
            hide_at: now.checked_add(hide_after).unwrap_or(now + HIDDEN_DELAY),
        };

        debug!(
            text = %content.text,
            x = placement.origin.x,
            y = placement.origin.y,
            "indicator update"
        );

        Some(DisplayUpdate {
            status,
            content,
            placement,
            hide_after,
        })
    }

    /// Current animation frame; `None` when nothing is animating.
    ///
    /// The animation is dropped once its final frame has been returned.
    pub fn frame(&mut self, now: Instant) -> Option<Frame> {
        let Visibility::Shown { animation, .. } = &mut self.visibility else {
            return None;
        };
        let frame = animation.as_ref()?.frame(now);
        if frame.finished {
            *animation = None;
        }
        Some(frame)
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.visibility,
            Visibility::Shown {
                animation: Some(_),
                ..
            }
        )
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Shown { .. })
    }

    /// True once the latest indication has been up for its hide delay.
    ///
    /// A HIDE timer armed for an earlier indication sees `false` here.
    pub fn hide_due(&self, now: Instant) -> bool {
        match self.visibility {
            Visibility::Shown { hide_at, .. } => now >= hide_at,
            Visibility::Hidden => false,
        }
    }

    /// Time left before the current indication hides; `None` when hidden.
    pub fn time_until_hide(&self, now: Instant) -> Option<Duration> {
        match self.visibility {
            Visibility::Shown { hide_at, .. } => Some(hide_at.saturating_duration_since(now)),
            Visibility::Hidden => None,
        }
    }

    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    /// Make the next refresh show the current status even if unchanged.
    pub fn force_next(&mut self) {
        self.poller.reset();
    }

    pub fn last_status(&self) -> Option<ImeStatus> {
        self.poller.last()
    }
}
