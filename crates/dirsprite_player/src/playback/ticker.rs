//! Delta-time ticker driving playback from the render loop.

use std::time::Duration;

/// Periodic tick source fed with elapsed time.
///
/// The ticker fires at most once per [`advance`](Self::advance) call and
/// restarts its accumulator after every tick, so consecutive ticks are never
/// closer together than the interval. Missed ticks are dropped rather than
/// replayed in a burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
	interval: Duration,
	elapsed: Duration,
}

impl Ticker {
	/// Smallest accepted interval.
	pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

	/// Creates a ticker; intervals below [`Self::MIN_INTERVAL`] are raised to it.
	pub fn new(interval: Duration) -> Self {
		Self {
			interval: interval.max(Self::MIN_INTERVAL),
			elapsed: Duration::ZERO,
		}
	}

	/// Returns the tick interval.
	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Time accumulated since the last tick or reset.
	pub fn elapsed(&self) -> Duration {
		self.elapsed
	}

	/// Time left until the next tick.
	pub fn remaining(&self) -> Duration {
		self.interval.saturating_sub(self.elapsed)
	}

	/// Accumulates `dt` and reports whether a tick is due.
	pub fn advance(&mut self, dt: Duration) -> bool {
		self.elapsed = self.elapsed.saturating_add(dt);
		if self.elapsed >= self.interval {
			self.elapsed = Duration::ZERO;
			true
		} else {
			false
		}
	}

	/// Installs a new interval and restarts the accumulator.
	///
	/// The next tick fires one full new interval after this call, regardless
	/// of how much of the previous interval had already elapsed.
	pub fn reset(&mut self, interval: Duration) {
		self.interval = interval.max(Self::MIN_INTERVAL);
		self.elapsed = Duration::ZERO;
	}

	/// Restarts the accumulator, keeping the interval.
	pub fn rewind(&mut self) {
		self.elapsed = Duration::ZERO;
	}
}

impl Default for Ticker {
	fn default() -> Self {
		Self::new(Duration::from_millis(100))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const MS: Duration = Duration::from_millis(1);

	#[test]
	fn test_fires_after_interval() {
		let mut ticker = Ticker::new(100 * MS);
		assert!(!ticker.advance(60 * MS));
		assert_eq!(ticker.remaining(), 40 * MS);
		assert!(ticker.advance(40 * MS));
		assert_eq!(ticker.elapsed(), Duration::ZERO);
	}

	#[test]
	fn test_fires_once_per_advance() {
		let mut ticker = Ticker::new(10 * MS);
		assert!(ticker.advance(1000 * MS));
		assert!(!ticker.advance(5 * MS));
	}

	#[test]
	fn test_reset_restarts_interval() {
		let mut ticker = Ticker::new(100 * MS);
		assert!(!ticker.advance(90 * MS));

		// Shorter interval installed with 90ms already accumulated: must not fire early.
		ticker.reset(50 * MS);
		assert!(!ticker.advance(49 * MS));
		assert!(ticker.advance(MS));
	}

	#[test]
	fn test_zero_interval_clamped() {
		let ticker = Ticker::new(Duration::ZERO);
		assert_eq!(ticker.interval(), Ticker::MIN_INTERVAL);
	}
}
