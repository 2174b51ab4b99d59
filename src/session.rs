use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mark {
  Correct,
  Current,
  Incorrect,
  Unmarked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
  Finished,
  Idle,
  Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Summary {
  pub(crate) accuracy: u64,
  pub(crate) wpm: u64,
}

impl Display for Summary {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Test Finished! WPM: {} Accuracy: {}%",
      self.wpm, self.accuracy
    )
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
  Continuing,
  Finished(Summary),
}

/// State of a single typing session.
///
/// All mutation goes through the operations below. Time is passed in by the
/// caller so that the session never reads the clock itself.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Session {
  accuracy: u64,
  countdown: Option<Countdown>,
  duration: u64,
  errors: usize,
  language: Language,
  marks: Vec<Mark>,
  mode: Mode,
  phase: Phase,
  reference: Vec<char>,
  remaining: u64,
  started_at: Option<Instant>,
  typed: String,
  wpm: u64,
}

impl Session {
  pub(crate) const DEFAULT_DURATION: u64 = 60;

  pub(crate) fn new(language: Language, mode: Mode, duration: u64) -> Self {
    let mut session = Self {
      accuracy: 100,
      countdown: None,
      duration,
      errors: 0,
      language,
      marks: Vec::new(),
      mode,
      phase: Phase::Idle,
      reference: Vec::new(),
      remaining: duration,
      started_at: None,
      typed: String::new(),
      wpm: 0,
    };

    session.reset();

    session
  }

  pub(crate) fn accepts_input(&self) -> bool {
    self.phase == Phase::Running
  }

  /// Derive live statistics for the current input as of `now`.
  ///
  /// Before the session has started nothing is derived and the displayed
  /// values are returned unchanged.
  pub(crate) fn compute_stats(&self, now: Instant) -> Statistics {
    let Some(started_at) = self.started_at else {
      return self.statistics();
    };

    Statistics {
      accuracy: statistics::accuracy(&self.reference, &self.typed),
      errors: self.errors,
      remaining: self.remaining(),
      wpm: statistics::wpm(
        statistics::words(&self.typed),
        statistics::elapsed_minutes(started_at, now),
      ),
    }
  }

  fn finish(&mut self) -> Summary {
    self.countdown = None;
    self.phase = Phase::Finished;

    let summary = Summary {
      accuracy: self.accuracy,
      wpm: self.wpm,
    };

    info!("session finished: {summary}");

    summary
  }

  /// Replace the input with `typed`, re-mark every reference position and
  /// refresh the statistics. Ignored unless the session is running.
  pub(crate) fn input_changed(&mut self, typed: &str, now: Instant) -> Outcome {
    if !self.accepts_input() {
      return Outcome::Continuing;
    }

    self.typed = typed.to_owned();

    let typed = self.typed.chars().collect::<Vec<char>>();

    self.marks = self
      .reference
      .iter()
      .enumerate()
      .map(|(i, expected)| match i.cmp(&typed.len()) {
        Ordering::Less if typed[i] == *expected => Mark::Correct,
        Ordering::Less => Mark::Incorrect,
        Ordering::Equal => Mark::Current,
        Ordering::Greater => Mark::Unmarked,
      })
      .collect();

    self.errors = self
      .marks
      .iter()
      .filter(|mark| **mark == Mark::Incorrect)
      .count();

    let statistics = self.compute_stats(now);

    self.wpm = statistics.wpm;
    self.accuracy = statistics.accuracy;

    if typed == self.reference {
      Outcome::Finished(self.finish())
    } else {
      Outcome::Continuing
    }
  }

  pub(crate) fn language(&self) -> Language {
    self.language
  }

  fn load_text(&mut self, language: Language, mode: Mode) {
    self.language = language;
    self.mode = mode;
    self.reference = corpus::text(language, mode).chars().collect();
    self.marks = vec![Mark::Unmarked; self.reference.len()];
    self.typed.clear();

    debug!(
      "loaded {language} {mode} text ({} characters)",
      self.reference.len()
    );
  }

  pub(crate) fn marks(&self) -> &[Mark] {
    &self.marks
  }

  pub(crate) fn mode(&self) -> Mode {
    self.mode
  }

  pub(crate) fn phase(&self) -> Phase {
    self.phase
  }

  /// Deliver every countdown tick that has come due by `now`.
  pub(crate) fn poll_countdown(&mut self, now: Instant) -> Outcome {
    while let Some(countdown) = self.countdown.as_mut() {
      if !countdown.due(now) {
        break;
      }

      countdown.advance();

      if let Outcome::Finished(summary) = self.tick() {
        return Outcome::Finished(summary);
      }
    }

    Outcome::Continuing
  }

  pub(crate) fn reference(&self) -> &[char] {
    &self.reference
  }

  fn remaining(&self) -> Remaining {
    if self.mode.is_timed() {
      Remaining::Seconds(self.remaining)
    } else {
      Remaining::Unbounded
    }
  }

  /// Return to idle with freshly loaded text for the current selection.
  pub(crate) fn reset(&mut self) {
    self.countdown = None;
    self.phase = Phase::Idle;
    self.errors = 0;
    self.started_at = None;
    self.remaining = self.duration;
    self.wpm = 0;
    self.accuracy = 100;

    self.load_text(self.language, self.mode);

    info!("session reset ({} {})", self.language, self.mode);
  }

  /// Change the language and mode selection. Always resets.
  pub(crate) fn select(&mut self, language: Language, mode: Mode) {
    self.language = language;
    self.mode = mode;
    self.reset();
  }

  /// Selectors and the start control stay locked from start until reset.
  pub(crate) fn selectors_locked(&self) -> bool {
    self.phase != Phase::Idle
  }

  pub(crate) fn start(&mut self, now: Instant) {
    if self.phase != Phase::Idle {
      return;
    }

    self.phase = Phase::Running;
    self.started_at = Some(now);

    if self.mode.is_timed() {
      self.remaining = self.duration;
      self.countdown = Some(Countdown::start(now));
    }

    info!("session started ({} {})", self.language, self.mode);
  }

  pub(crate) fn statistics(&self) -> Statistics {
    Statistics {
      accuracy: self.accuracy,
      errors: self.errors,
      remaining: self.remaining(),
      wpm: self.wpm,
    }
  }

  /// One second of the test countdown. Without a live countdown this does
  /// nothing.
  pub(crate) fn tick(&mut self) -> Outcome {
    if self.phase != Phase::Running || self.countdown.is_none() {
      return Outcome::Continuing;
    }

    self.remaining = self.remaining.saturating_sub(1);

    if self.remaining == 0 {
      Outcome::Finished(self.finish())
    } else {
      Outcome::Continuing
    }
  }

  pub(crate) fn typed(&self) -> &str {
    &self.typed
  }
}
