use super::*;

/// Handle for a running one-second countdown.
///
/// Owning the handle is what keeps the countdown alive: dropping it cancels
/// every future tick, so a session holding `Option<Countdown>` can never have
/// more than one live timer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Countdown {
  interval: Duration,
  next: Instant,
}

impl Countdown {
  pub(crate) const INTERVAL: Duration = Duration::from_secs(1);

  pub(crate) fn start(now: Instant) -> Self {
    Self {
      interval: Self::INTERVAL,
      next: now + Self::INTERVAL,
    }
  }

  pub(crate) fn due(&self, now: Instant) -> bool {
    now >= self.next
  }

  /// Consume one pending tick, scheduling the next one a full interval later.
  pub(crate) fn advance(&mut self) {
    self.next += self.interval;
  }
}
