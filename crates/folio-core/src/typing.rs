//! Typing-effect timer.
//!
//! Reveals a target string one character at a time after a start delay,
//! then keeps blinking a cursor until torn down.
//!
//! The timing rules live in [`TypingSchedule`], a pure function of elapsed
//! time. [`TypingTimer`] drives a schedule on a tokio task and publishes
//! each [`TypingFrame`] through a `watch` channel.
//!
//! ## Usage
//!
//! ```ignore
//! let config = TypingConfig::from_millis(90, 600, 500)?;
//! let mut timer = TypingTimer::new(config);
//! let mut frames = timer.subscribe();
//!
//! let handle = timer.start("Ada Lovelace")?;
//! while frames.changed().await.is_ok() {
//!     let frame = frames.borrow_and_update().clone();
//!     render(&frame.displayed, frame.cursor_visible);
//! }
//! drop(handle); // cancels the run
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::error::{FolioError, FolioResult};

/// Timing parameters for one typing animation.
///
/// `typing_speed` and `cursor_blink` are always non-zero; construction
/// rejects zero intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TypingConfigMillis", into = "TypingConfigMillis")]
pub struct TypingConfig {
    typing_speed: Duration,
    start_delay: Duration,
    cursor_blink: Duration,
}

/// On-disk representation of [`TypingConfig`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct TypingConfigMillis {
    typing_speed_ms: u64,
    #[serde(default)]
    start_delay_ms: u64,
    cursor_blink_ms: u64,
}

impl TypingConfig {
    /// Timings for the hero name line.
    pub const NAME_DEFAULT: Self = Self {
        typing_speed: Duration::from_millis(90),
        start_delay: Duration::from_millis(600),
        cursor_blink: Duration::from_millis(500),
    };

    /// Timings for the hero bio line.
    pub const BIO_DEFAULT: Self = Self {
        typing_speed: Duration::from_millis(50),
        start_delay: Duration::from_millis(1500),
        cursor_blink: Duration::from_millis(500),
    };

    pub fn new(
        typing_speed: Duration,
        start_delay: Duration,
        cursor_blink: Duration,
    ) -> FolioResult<Self> {
        if typing_speed.is_zero() {
            return Err(FolioError::InvalidConfiguration(
                "typing speed must be greater than zero".to_string(),
            ));
        }
        if cursor_blink.is_zero() {
            return Err(FolioError::InvalidConfiguration(
                "cursor blink interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            typing_speed,
            start_delay,
            cursor_blink,
        })
    }

    pub fn from_millis(typing_speed_ms: u64, start_delay_ms: u64, cursor_blink_ms: u64) -> FolioResult<Self> {
        Self::new(
            Duration::from_millis(typing_speed_ms),
            Duration::from_millis(start_delay_ms),
            Duration::from_millis(cursor_blink_ms),
        )
    }

    /// Time between two revealed characters.
    pub fn typing_speed(&self) -> Duration {
        self.typing_speed
    }

    /// Time from activation until the first tick.
    pub fn start_delay(&self) -> Duration {
        self.start_delay
    }

    /// Half period of the cursor blink.
    pub fn cursor_blink(&self) -> Duration {
        self.cursor_blink
    }
}

impl TryFrom<TypingConfigMillis> for TypingConfig {
    type Error = FolioError;

    fn try_from(raw: TypingConfigMillis) -> Result<Self, Self::Error> {
        Self::from_millis(raw.typing_speed_ms, raw.start_delay_ms, raw.cursor_blink_ms)
    }
}

impl From<TypingConfig> for TypingConfigMillis {
    fn from(config: TypingConfig) -> Self {
        Self {
            typing_speed_ms: whole_millis(config.typing_speed),
            start_delay_ms: whole_millis(config.start_delay),
            cursor_blink_ms: whole_millis(config.cursor_blink),
        }
    }
}

/// Milliseconds rounded up, so a non-zero interval never writes out as zero.
fn whole_millis(interval: Duration) -> u64 {
    let mut millis = interval.as_millis();
    if interval.subsec_nanos() % 1_000_000 != 0 {
        millis += 1;
    }
    u64::try_from(millis).unwrap_or(u64::MAX)
}

/// One observable state of a typing animation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingFrame {
    /// Full text being revealed
    pub target: String,
    /// Revealed prefix of `target`
    pub displayed: String,
    /// Whether the cursor is currently drawn
    pub cursor_visible: bool,
    /// Run that produced this frame (0 before any run)
    pub generation: u64,
}

impl TypingFrame {
    /// True once every character of the target is displayed.
    pub fn is_complete(&self) -> bool {
        self.displayed.len() == self.target.len()
    }

    /// Cursor glyph for plain-text rendering.
    pub fn cursor(&self) -> &'static str {
        if self.cursor_visible {
            "|"
        } else {
            " "
        }
    }
}

/// Pure timing rules for revealing one target string.
#[derive(Debug, Clone)]
pub struct TypingSchedule {
    target: String,
    /// Byte offset just past each character
    boundaries: Vec<usize>,
    config: TypingConfig,
}

impl TypingSchedule {
    pub fn new(target: impl Into<String>, config: TypingConfig) -> Self {
        let target = target.into();
        let boundaries = target
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            target,
            boundaries,
            config,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn config(&self) -> TypingConfig {
        self.config
    }

    /// Number of characters in the target.
    pub fn char_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Characters revealed `elapsed` after activation.
    pub fn revealed_at(&self, elapsed: Duration) -> usize {
        let Some(typing) = elapsed.checked_sub(self.config.start_delay) else {
            return 0;
        };
        let ticks = typing.as_nanos() / self.config.typing_speed.as_nanos();
        usize::try_from(ticks)
            .unwrap_or(usize::MAX)
            .min(self.char_count())
    }

    /// Cursor is shown during even blink periods, starting at activation.
    pub fn cursor_visible_at(&self, elapsed: Duration) -> bool {
        (elapsed.as_nanos() / self.config.cursor_blink.as_nanos()) % 2 == 0
    }

    /// Prefix made of the first `chars` characters.
    pub fn prefix(&self, chars: usize) -> &str {
        match chars.min(self.char_count()) {
            0 => "",
            n => &self.target[..self.boundaries[n - 1]],
        }
    }

    pub fn frame_at(&self, elapsed: Duration, generation: u64) -> TypingFrame {
        TypingFrame {
            target: self.target.clone(),
            displayed: self.prefix(self.revealed_at(elapsed)).to_string(),
            cursor_visible: self.cursor_visible_at(elapsed),
            generation,
        }
    }

    /// Offset of the first reveal tick or cursor toggle strictly after `elapsed`.
    ///
    /// The cursor never stops, so there is always a next change.
    pub fn next_change_after(&self, elapsed: Duration) -> Duration {
        let blink = self.config.cursor_blink;
        let next_toggle = periods(blink, elapsed.as_nanos() / blink.as_nanos() + 1);

        let revealed = self.revealed_at(elapsed);
        if revealed >= self.char_count() {
            return next_toggle;
        }
        let next_reveal =
            self.config.start_delay + periods(self.config.typing_speed, revealed as u128 + 1);
        next_toggle.min(next_reveal)
    }
}

/// `n` whole periods, saturating at the largest representable offset.
fn periods(period: Duration, n: u128) -> Duration {
    let nanos = period.as_nanos().saturating_mul(n);
    Duration::from_nanos(nanos.min(u64::MAX as u128) as u64)
}

/// A cancellable typing animation that publishes frames to subscribers.
///
/// One timer is one logical animation slot: a new run may only start after
/// the previous one was cancelled, either through [`TypingTimer::cancel`],
/// [`TypingHandle::cancel`] or by dropping the handle. [`TypingTimer::restart`]
/// does both steps at once.
///
/// Requires a tokio runtime.
pub struct TypingTimer {
    config: TypingConfig,
    tx: Arc<watch::Sender<TypingFrame>>,
    /// Generation allowed to publish; bumped on every start and cancel
    current: Arc<AtomicU64>,
    /// Generation of the most recent start
    last_started: Option<u64>,
}

impl TypingTimer {
    pub fn new(config: TypingConfig) -> Self {
        let (tx, _rx) = watch::channel(TypingFrame::default());
        Self {
            config,
            tx: Arc::new(tx),
            current: Arc::new(AtomicU64::new(0)),
            last_started: None,
        }
    }

    pub fn config(&self) -> TypingConfig {
        self.config
    }

    /// Live view of the frames. Every run publishes through the same channel.
    pub fn subscribe(&self) -> watch::Receiver<TypingFrame> {
        self.tx.subscribe()
    }

    /// Most recently published frame.
    pub fn frame(&self) -> TypingFrame {
        self.tx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.last_started == Some(self.current.load(Ordering::Acquire))
    }

    /// Begin revealing `target` from an empty prefix.
    ///
    /// Fails with [`FolioError::AlreadyRunning`] if the previous run was not
    /// cancelled.
    pub fn start(&mut self, target: impl Into<String>) -> FolioResult<TypingHandle> {
        if self.is_running() {
            return Err(FolioError::AlreadyRunning);
        }

        let generation = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        let schedule = TypingSchedule::new(target, self.config);
        tracing::debug!(
            generation,
            chars = schedule.char_count(),
            "Starting typing animation"
        );

        self.tx.send_replace(schedule.frame_at(Duration::ZERO, generation));
        let task = tokio::spawn(drive(
            schedule,
            Arc::clone(&self.tx),
            generation,
            Arc::clone(&self.current),
        ));
        self.last_started = Some(generation);

        Ok(TypingHandle {
            generation,
            current: Arc::clone(&self.current),
            task,
        })
    }

    /// Cancel the active run, if any.
    ///
    /// A frame the driver is already publishing may still land; the next
    /// `start` replaces it under the same channel lock.
    pub fn cancel(&mut self) {
        if let Some(generation) = self.last_started {
            if invalidate(&self.current, generation) {
                tracing::debug!(generation, "Cancelled typing animation");
            }
        }
    }

    /// Cancel the active run and start over with a new target.
    pub fn restart(&mut self, target: impl Into<String>) -> FolioResult<TypingHandle> {
        self.cancel();
        self.start(target)
    }
}

impl Drop for TypingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Handle to one run of a [`TypingTimer`].
#[must_use = "dropping the handle cancels the animation"]
pub struct TypingHandle {
    generation: u64,
    current: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl TypingHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while this run may still publish frames.
    pub fn is_active(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation && !self.task.is_finished()
    }

    /// Stop this run. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        invalidate(&self.current, self.generation);
        self.task.abort();
    }
}

/// Retire `generation` if it is still the publishing one.
fn invalidate(current: &AtomicU64, generation: u64) -> bool {
    current
        .compare_exchange(generation, generation + 1, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
}

async fn drive(
    schedule: TypingSchedule,
    tx: Arc<watch::Sender<TypingFrame>>,
    generation: u64,
    current: Arc<AtomicU64>,
) {
    let started = Instant::now();
    let mut elapsed = Duration::ZERO;

    loop {
        // Step through every change in order, even when woken late.
        let next = schedule.next_change_after(elapsed);
        tokio::time::sleep_until(started + next).await;
        elapsed = next;

        let frame = schedule.frame_at(elapsed, generation);
        // The generation check runs under the channel lock, so a cancelled
        // run can never overwrite a newer frame.
        tx.send_if_modified(|published| {
            if current.load(Ordering::Acquire) != generation || *published == frame {
                return false;
            }
            *published = frame;
            true
        });

        if current.load(Ordering::Acquire) != generation {
            tracing::trace!(generation, "Typing driver exiting");
            break;
        }
    }
}
