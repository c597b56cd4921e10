//! Lockout Policy
//!
//! Pure decision function for the failed-login lockout. Given the
//! account's failure counters and an explicit wall-clock time, decides
//! whether the login attempt may proceed to password comparison.
//!
//! Taking `now` as a parameter instead of reading the clock keeps the
//! policy deterministic under test. Expiry of the lockout window is
//! evaluated lazily on the next attempt; nothing clears counters in the
//! background.

use chrono::{DateTime, Duration, Utc};

/// Lockout verdict, produced before any password comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Below the failure threshold; compare the password.
    Proceed,
    /// Threshold was reached but the lockout window has expired; zero
    /// the counters, then compare the password.
    ProceedAfterReset,
    /// Inside the lockout window. The password is never compared on
    /// this path, which also avoids leaking a timing signal about
    /// credential validity while locked.
    Locked {
        /// Whole minutes until the window expires, rounded up (>= 1)
        minutes_left: i64,
    },
}

/// Failed-login lockout policy
#[derive(Debug, Clone)]
pub struct LockoutPolicy {
    /// Failures tolerated before the lockout engages
    pub max_failed_attempts: u32,
    /// Length of the lockout window, timed from the last failure
    pub lockout_duration: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_failed_attempts: 3,
            lockout_duration: Duration::minutes(15),
        }
    }
}

impl LockoutPolicy {
    /// Decide whether a login attempt may proceed
    ///
    /// The lockout engages on the attempt *after* the counter reaches
    /// the threshold, never retroactively on the failure that reached
    /// it.
    pub fn decide(
        &self,
        failed_attempts: u32,
        last_failed_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Verdict {
        if failed_attempts < self.max_failed_attempts {
            return Verdict::Proceed;
        }

        // Counter at threshold without a timestamp only occurs on a
        // stale record; treat the window as expired.
        let Some(last_failed_at) = last_failed_at else {
            return Verdict::ProceedAfterReset;
        };

        let elapsed = now - last_failed_at;
        if elapsed < self.lockout_duration {
            let remaining_ms = (self.lockout_duration - elapsed).num_milliseconds();
            Verdict::Locked {
                minutes_left: (remaining_ms as u64).div_ceil(60_000) as i64,
            }
        } else {
            Verdict::ProceedAfterReset
        }
    }

    /// Attempts remaining before the lockout engages, floored at zero
    pub fn attempts_left(&self, failed_attempts: u32) -> u32 {
        self.max_failed_attempts.saturating_sub(failed_attempts)
    }
}
