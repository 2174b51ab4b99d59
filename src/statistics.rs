use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Remaining {
  Seconds(u64),
  Unbounded,
}

impl Display for Remaining {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Seconds(seconds) => write!(f, "{seconds}"),
      Self::Unbounded => write!(f, "∞"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Statistics {
  pub(crate) accuracy: u64,
  pub(crate) errors: usize,
  pub(crate) remaining: Remaining,
  pub(crate) wpm: u64,
}

impl Display for Statistics {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "WPM: {} | Accuracy: {}% | Time: {} | Errors: {}",
      self.wpm, self.accuracy, self.remaining, self.errors
    )
  }
}

pub(crate) fn elapsed_minutes(started_at: Instant, now: Instant) -> f64 {
  now.saturating_duration_since(started_at).as_secs_f64() / 60.0
}

/// Whitespace-delimited tokens in `typed`.
///
/// Splitting a blank string still yields one empty token, so this never
/// reports fewer than one word.
pub(crate) fn words(typed: &str) -> usize {
  typed.split_whitespace().count().max(1)
}

pub(crate) fn wpm(words: usize, minutes: f64) -> u64 {
  if minutes > 0.0 {
    (words as f64 / minutes).round() as u64
  } else {
    0
  }
}

/// Percentage of typed characters matching the reference at the same
/// position. Characters typed past the end of the reference never match.
pub(crate) fn accuracy(reference: &[char], typed: &str) -> u64 {
  let typed_len = typed.chars().count();

  if typed_len == 0 {
    return 100;
  }

  let correct = typed
    .chars()
    .zip(reference)
    .filter(|(typed, expected)| typed == *expected)
    .count();

  (correct as f64 / typed_len as f64 * 100.0).round() as u64
}
