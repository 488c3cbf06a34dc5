//! Step-based progress tracking driven by periodic ticks.
//!
//! A [`Tracker`] counts finished steps out of a known total. Once started it
//! schedules a [`TickMsg`] at a fixed interval so the host re-renders while
//! work is going on, and stops rescheduling once the work is complete.
//!
//! Ticks are guarded by a generation counter. Each tick carries the tracker id
//! and the generation it was scheduled for; a tick whose generation is not the
//! current one is stale and ignored. Honouring a tick and resetting the
//! tracker both advance the generation, so at most one tick chain is ever
//! alive per tracker.
//!
//! ```rust
//! use orvyn::progress::Tracker;
//!
//! let mut tracker = Tracker::new("Importing");
//! tracker.update_progress(1, 4);
//! assert_eq!(tracker.percent(), 0.25);
//! assert!(!tracker.is_complete());
//!
//! tracker.update_progress(4, 4);
//! assert!(tracker.is_complete());
//! ```
//!
//! ### Percentage
//! The percentage is computed in whole percents and truncated before being
//! turned into a fraction, so `2` of `3` steps reads `0.66`, never `0.67`.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use log::trace;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);
const DEFAULT_WIDTH: usize = 40;

/// Scheduled by a running [`Tracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickMsg {
    /// Id of the tracker that scheduled the tick.
    pub id: i64,
    /// Generation the tick was scheduled for.
    pub generation: u64,
}

/// Progress of a task made of a known number of steps, with a title and a
/// bar.
///
/// # Examples
///
/// ```rust
/// use orvyn::progress::Tracker;
///
/// let mut tracker = Tracker::new("Copying").with_width(10);
/// tracker.update_progress(1, 2);
/// assert_eq!(tracker.percent(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Tracker {
    id: i64,
    generation: u64,
    title: String,
    steps: usize,
    max_steps: usize,
    percent: f64,
    interval: Duration,
    width: usize,
    full_style: Style,
    empty_style: Style,
}

impl Tracker {
    /// Creates an empty tracker with a fresh id, a 100ms tick interval and a
    /// 40 cell bar.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            generation: 0,
            title: title.into(),
            steps: 0,
            max_steps: 0,
            percent: 0.0,
            interval: DEFAULT_INTERVAL,
            width: DEFAULT_WIDTH,
            full_style: Style::new().foreground(Color::from("#EE6FF8")),
            empty_style: Style::new().foreground(Color::from("#626262")),
        }
    }

    /// Sets the delay between ticks (builder pattern).
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Width of the bar in cells.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Process-unique id, carried by every tick this tracker schedules.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Generation a tick must carry to be honoured. Advanced by every honoured
    /// tick and by [`reset`](Self::reset).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Text shown above the bar.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Steps done, as last reported.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Total steps, as last reported.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Records progress. A `max_steps` of zero reads as 0%.
    pub fn update_progress(&mut self, steps: usize, max_steps: usize) {
        self.steps = steps;
        self.max_steps = max_steps;

        self.percent = if max_steps == 0 {
            0.0
        } else {
            let whole = (steps.saturating_mul(100) / max_steps).min(100);
            whole as f64 / 100.0
        };
    }

    /// Fraction of the work done, in `0.0..=1.0`.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Whether every step is done. Ticks stop once this holds.
    pub fn is_complete(&self) -> bool {
        self.percent >= 1.0
    }

    /// Clears the progress and invalidates every scheduled tick.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.max_steps = 0;
        self.percent = 0.0;
        self.generation += 1;
    }

    /// Schedules the first tick.
    pub fn start(&self) -> Cmd {
        self.schedule()
    }

    /// Handles a message, returning the command for the next tick.
    ///
    /// Only a [`TickMsg`] carrying this tracker's id and current generation is
    /// honoured. Stale or foreign ticks and every other message are ignored.
    /// No further tick is scheduled once the work is complete.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;

        if tick.id != self.id || tick.generation != self.generation {
            trace!(
                "progress: stale tick (id {}, generation {}) ignored",
                tick.id,
                tick.generation
            );
            return None;
        }

        self.generation += 1;

        if self.is_complete() {
            return None;
        }

        Some(self.schedule())
    }

    fn schedule(&self) -> Cmd {
        let id = self.id;
        let generation = self.generation;

        bubbletea_tick(self.interval, move |_| {
            Box::new(TickMsg { id, generation }) as Msg
        })
    }

    /// Renders the title, then the bar followed by the percentage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::progress::Tracker;
    /// use lipgloss_extras::lipgloss;
    ///
    /// let mut tracker = Tracker::new("Copying").with_width(4);
    /// tracker.update_progress(3, 4);
    /// assert_eq!(lipgloss::strip_ansi(&tracker.view()), "Copying\n███░  75%");
    /// ```
    pub fn view(&self) -> String {
        let filled = ((self.width as f64) * self.percent).round() as usize;
        let filled = filled.min(self.width);

        format!(
            "{}\n{}{} {:>3.0}%",
            self.title,
            self.full_style.render(&"█".repeat(filled)),
            self.empty_style.render(&"░".repeat(self.width - filled)),
            self.percent * 100.0
        )
    }
}
