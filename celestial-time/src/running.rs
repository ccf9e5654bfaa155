//! A date that follows the clock.
//!
//! [`RunningInstant`] pins a starting [`Instant`] to a monotonic timer and
//! reports the start plus the elapsed time, scaled by a speed factor. A speed
//! of 2 runs twice as fast, 0 freezes the date and a negative speed runs it
//! backwards.
//!
//! ```
//! use celestial_time::{Instant, RunningInstant};
//! use std::time::Duration;
//!
//! let start = Instant::from_mjd(60000.0).unwrap();
//! let clock = RunningInstant::starting_at(start).with_speed(3600.0).unwrap();
//!
//! // one real second is an hour
//! let later = clock.at_elapsed(Duration::from_secs(1)).unwrap();
//! assert!((later.mjd() - (60000.0 + 1.0 / 24.0)).abs() < 1e-9);
//! ```

use crate::{Instant, TimeResult};
use celestial_core::constants::SECONDS_PER_DAY_F64;
use celestial_core::AstroError;
use std::time::{self, Duration};

#[derive(Debug, Clone)]
pub struct RunningInstant {
    start: Instant,
    timer: time::Instant,
    speed: f64,
}

impl RunningInstant {
    /// Runs from the current wall-clock time at normal speed.
    pub fn now() -> TimeResult<Self> {
        Ok(Self::starting_at(Instant::now()?))
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            timer: time::Instant::now(),
            speed: 1.0,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> TimeResult<Self> {
        self.set_speed(speed)?;
        Ok(self)
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Changes the rate of time from this moment on. The date reached so far
    /// is kept.
    ///
    /// # Errors
    ///
    /// [`AstroError::InvalidValue`] for a non-finite speed.
    pub fn set_speed(&mut self, speed: f64) -> TimeResult<()> {
        if !speed.is_finite() {
            return Err(AstroError::invalid_value(
                "RunningInstant::set_speed",
                format!("speed {} is not finite", speed),
            )
            .into());
        }
        let now = time::Instant::now();
        self.start = self.at_elapsed(now.duration_since(self.timer))?;
        self.timer = now;
        self.speed = speed;
        Ok(())
    }

    /// Starts over from `start`.
    pub fn set_start(&mut self, start: Instant) {
        self.start = start;
        self.restart();
    }

    /// Restarts the timer, jumping back to the starting date.
    pub fn restart(&mut self) {
        self.timer = time::Instant::now();
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    /// Real time since the timer started.
    pub fn run_time(&self) -> Duration {
        self.timer.elapsed()
    }

    /// Seconds of simulated time since the timer started.
    pub fn scaled_run_time(&self) -> f64 {
        self.run_time().as_secs_f64() * self.speed
    }

    /// The date after `elapsed` real time at the current speed.
    pub fn at_elapsed(&self, elapsed: Duration) -> TimeResult<Instant> {
        self.start
            .add_days(elapsed.as_secs_f64() * self.speed / SECONDS_PER_DAY_F64)
    }

    /// The date right now.
    pub fn current(&self) -> TimeResult<Instant> {
        self.at_elapsed(self.run_time())
    }
}
