//! Bounded polling
//!
//! Every hardware wait in the crate goes through [`wait_until`]. A
//! [`WaitBudget`] decides how long the wait may run: either a fixed number
//! of checks or an elapsed-time deadline. Callers hand a budget in and never
//! branch on which kind it is.
//!
//! # Example
//!
//! ```ignore
//! use dwmac_phy::hal::wait::{wait_until, WaitBudget};
//!
//! // Up to 200,000 checks, 1 µs apart
//! let budget = WaitBudget::polls(200_000, 1);
//! wait_until(&mut delay, budget, || Ok(mdio.read(addr, BMSR)? & LINK_STATUS != 0))?;
//! ```

use core::sync::atomic::{Ordering, fence};

use embedded_hal::delay::DelayNs;

use crate::error::{IoError, Result};

/// How long a bounded wait may keep checking its condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitBudget {
    /// At most `max` checks, `interval_us` apart
    ///
    /// An interval of zero spins with only a memory fence between checks.
    /// `max == 0` still performs a single check.
    Polls {
        /// Maximum number of condition checks
        max: u32,
        /// Pause between checks in microseconds
        interval_us: u32,
    },
    /// Keep checking until `timeout_us` of accumulated delay has passed
    ///
    /// The condition is checked once more when the deadline is reached.
    /// An interval of zero is treated as one microsecond.
    Elapsed {
        /// Deadline in microseconds
        timeout_us: u32,
        /// Pause between checks in microseconds
        interval_us: u32,
    },
}

impl WaitBudget {
    /// Count-bounded budget
    pub const fn polls(max: u32, interval_us: u32) -> Self {
        Self::Polls { max, interval_us }
    }

    /// Count-bounded budget that spins without delaying
    pub const fn spin(max: u32) -> Self {
        Self::Polls { max, interval_us: 0 }
    }

    /// Time-bounded budget
    pub const fn elapsed(timeout_us: u32, interval_us: u32) -> Self {
        Self::Elapsed {
            timeout_us,
            interval_us,
        }
    }

    /// Upper bound on the number of condition checks this budget allows
    pub const fn max_checks(&self) -> u32 {
        match *self {
            Self::Polls { max, .. } => {
                if max == 0 {
                    1
                } else {
                    max
                }
            }
            Self::Elapsed {
                timeout_us,
                interval_us,
            } => {
                let step = if interval_us == 0 { 1 } else { interval_us };
                (timeout_us / step).saturating_add(1)
            }
        }
    }

    const fn interval_us(&self) -> u32 {
        match *self {
            Self::Polls { interval_us, .. } => interval_us,
            Self::Elapsed { interval_us, .. } => {
                if interval_us == 0 {
                    1
                } else {
                    interval_us
                }
            }
        }
    }
}

/// Check `done` until it reports `true` or the budget runs out
///
/// Returns the number of checks performed, including the successful one.
/// An error from `done` aborts the wait and is returned unchanged.
///
/// # Errors
///
/// Returns [`IoError::Timeout`] when the budget is exhausted.
pub fn wait_until<D, F>(delay: &mut D, budget: WaitBudget, mut done: F) -> Result<u32>
where
    D: DelayNs,
    F: FnMut() -> Result<bool>,
{
    let checks = budget.max_checks();
    let interval_us = budget.interval_us();

    for attempt in 1..=checks {
        if done()? {
            return Ok(attempt);
        }
        if attempt < checks {
            pause(delay, interval_us);
        }
    }

    Err(IoError::Timeout.into())
}

#[inline(always)]
fn pause<D: DelayNs>(delay: &mut D, interval_us: u32) {
    if interval_us == 0 {
        fence(Ordering::SeqCst);
    } else {
        delay.delay_us(interval_us);
    }
}
