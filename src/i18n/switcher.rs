//! Two-phase language transition state machine.
//!
//! Switching language is not instantaneous: the UI first enters a short
//! fade so in-flight renders can dim, then the new language is applied,
//! then an equally short settle phase runs before the transition flag
//! clears. The machine owns no timers; callers feed it the current time,
//! which keeps the sequencing fully testable.

use std::time::{Duration, Instant};

use crate::i18n::Language;

/// Delay between starting a transition and applying the new language.
pub const APPLY_DELAY: Duration = Duration::from_millis(150);
/// Delay between applying the new language and clearing the busy flag.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

/// Injectable time source for the transition machine.
///
/// Production wires [`SystemClock`]; tests pass precomputed instants to
/// step through the phases without sleeping.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Internal phase of a language transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// No transition in flight.
    Idle,
    /// Waiting for the apply deadline; the old language is still active.
    Fading {
        target: Language,
        apply_at: Instant,
        settle_at: Instant,
    },
    /// Language applied; waiting for the settle deadline.
    Settling { settle_at: Instant },
}

/// Language transition state machine.
///
/// Lifecycle: `Idle` -> `begin` -> fading -> (apply deadline) the target
/// language is emitted exactly once -> settling -> (settle deadline) ->
/// `Idle`. `begin` while a transition is in flight is ignored.
#[derive(Debug)]
pub struct LanguageSwitch {
    phase: Phase,
}

impl Default for LanguageSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSwitch {
    /// Fresh machine in the idle phase.
    #[must_use]
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Whether a transition is currently in flight (either phase).
    #[must_use]
    pub const fn is_changing(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// What: Start a transition towards `target`.
    ///
    /// Inputs:
    /// - `target`: Language to switch to
    /// - `now`: Current time from the caller's clock
    ///
    /// Output:
    /// - `true` when the transition was started; `false` when one was
    ///   already in flight and the request was dropped.
    pub fn begin(&mut self, target: Language, now: Instant) -> bool {
        if self.is_changing() {
            tracing::debug!(
                target_language = target.code(),
                "language switch ignored; transition already in flight"
            );
            return false;
        }
        let apply_at = now + APPLY_DELAY;
        self.phase = Phase::Fading {
            target,
            apply_at,
            settle_at: apply_at + SETTLE_DELAY,
        };
        true
    }

    /// What: Advance the machine to `now`.
    ///
    /// Inputs:
    /// - `now`: Current time from the caller's clock
    ///
    /// Output:
    /// - `Some(language)` exactly once per transition, at the poll that
    ///   crosses the apply deadline; `None` otherwise.
    ///
    /// Details:
    /// - A single poll far past both deadlines still emits the language
    ///   and lands directly back in idle.
    pub fn poll(&mut self, now: Instant) -> Option<Language> {
        match self.phase {
            Phase::Idle => None,
            Phase::Fading {
                target,
                apply_at,
                settle_at,
            } => {
                if now < apply_at {
                    return None;
                }
                self.phase = if now >= settle_at {
                    Phase::Idle
                } else {
                    Phase::Settling { settle_at }
                };
                Some(target)
            }
            Phase::Settling { settle_at } => {
                if now >= settle_at {
                    self.phase = Phase::Idle;
                }
                None
            }
        }
    }
}
