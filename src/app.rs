use super::*;

#[derive(Debug, PartialEq)]
enum State {
  Continuing,
  Quit,
}

/// Runs its closure when dropped, so the terminal is put back on every exit
/// path, including early returns through `?`.
struct Restore<F: FnOnce()> {
  restore: Option<F>,
}

impl<F: FnOnce()> Restore<F> {
  fn new(restore: F) -> Self {
    Self {
      restore: Some(restore),
    }
  }
}

impl<F: FnOnce()> Drop for Restore<F> {
  fn drop(&mut self) {
    if let Some(restore) = self.restore.take() {
      restore();
    }
  }
}

#[derive(Clone, Debug)]
pub(crate) struct App {
  notice: Option<Summary>,
  session: Session,
}

impl App {
  pub(crate) fn new(language: Language, mode: Mode, duration: u64) -> Self {
    Self {
      notice: None,
      session: Session::new(language, mode, duration),
    }
  }

  fn display(&self) -> Result {
    command!(Clear(ClearType::All), MoveTo(0, 0))?;

    print!(
      "Language: {} | Mode: {}{}",
      self.session.language(),
      self.session.mode(),
      if self.session.selectors_locked() {
        " (locked)"
      } else {
        ""
      }
    );

    command!(MoveToNextLine(2))?;

    for (character, mark) in self.session.reference().iter().zip(self.session.marks()) {
      match mark {
        Mark::Correct => command!(SetForegroundColor(Color::Green))?,
        Mark::Current => command!(
          SetForegroundColor(Color::Yellow),
          SetAttribute(Attribute::Underlined)
        )?,
        Mark::Incorrect => command!(SetForegroundColor(Color::Red))?,
        Mark::Unmarked => command!(SetForegroundColor(Color::White))?,
      }

      print!("{character}");

      if *mark == Mark::Current {
        command!(SetAttribute(Attribute::NoUnderline))?;
      }
    }

    command!(ResetColor, MoveToNextLine(2))?;

    print!("{}", self.session.statistics());

    command!(MoveToNextLine(2))?;

    if let Some(summary) = &self.notice {
      command!(SetAttribute(Attribute::Bold))?;
      print!("{summary}");
      command!(SetAttribute(Attribute::Reset), MoveToNextLine(2))?;
    }

    print!(
      "{}",
      match self.session.phase() {
        Phase::Idle => "enter: start | f2: language | f3: mode | esc: reset | ctrl-c: quit",
        Phase::Running => "type the text above | esc: reset | ctrl-c: quit",
        Phase::Finished => "esc: reset | ctrl-c: quit",
      }
    );

    stdout().flush()?;

    Ok(())
  }

  fn edit(&mut self, edit: impl FnOnce(&mut String), now: Instant) {
    if !self.session.accepts_input() {
      return;
    }

    let mut input = self.session.typed().to_owned();

    edit(&mut input);

    let outcome = self.session.input_changed(&input, now);

    self.record(outcome);
  }

  fn event_loop(&mut self) -> Result {
    loop {
      let outcome = self.session.poll_countdown(Instant::now());

      self.record(outcome);

      self.display()?;

      if event::poll(Duration::from_millis(100))? {
        if let Some(action) = Action::from_event(event::read()?) {
          if self.handle_action(action, Instant::now()) == State::Quit {
            return Ok(());
          }
        }
      }
    }
  }

  fn handle_action(&mut self, action: Action, now: Instant) -> State {
    match action {
      Action::Delete => self.edit(
        |input| {
          input.pop();
        },
        now,
      ),
      Action::Insert(c) => self.edit(|input| input.push(c), now),
      Action::Language => self.select(self.session.language().next(), self.session.mode()),
      Action::Mode => self.select(self.session.language(), self.session.mode().next()),
      Action::Quit => return State::Quit,
      Action::Reset => {
        self.notice = None;
        self.session.reset();
      }
      Action::Start => self.session.start(now),
    }

    State::Continuing
  }

  fn record(&mut self, outcome: Outcome) {
    if let Outcome::Finished(summary) = outcome {
      self.notice = Some(summary);
    }
  }

  pub(crate) fn run(&mut self) -> Result {
    terminal::enable_raw_mode()?;

    let restore = Restore::new(|| {
      let _ = command!(ResetColor, Show, MoveToNextLine(1));
      let _ = terminal::disable_raw_mode();
    });

    command!(Hide)?;

    let result = self.event_loop();

    drop(restore);

    if result.is_ok() {
      if let Some(summary) = &self.notice {
        println!("{summary}");
      }
    }

    result
  }

  fn select(&mut self, language: Language, mode: Mode) {
    if self.session.selectors_locked() {
      debug!("ignoring selector change while session is locked");
      return;
    }

    self.notice = None;
    self.session.select(language, mode);
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::cell::Cell};

  #[test]
  fn restore_runs_on_early_error() {
    fn fail(restored: &Cell<bool>) -> Result {
      let _restore = Restore::new(|| restored.set(true));

      bail!("failed to write to terminal");
    }

    let restored = Cell::new(false);

    assert!(fail(&restored).is_err());
    assert!(restored.get());
  }

  #[test]
  fn restore_runs_once_when_dropped() {
    let count = Cell::new(0);

    let restore = Restore::new(|| count.set(count.get() + 1));

    assert_eq!(count.get(), 0);

    drop(restore);

    assert_eq!(count.get(), 1);
  }

  fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
      assert_eq!(app.handle_action(Action::Insert(c), now), State::Continuing);
    }
  }

  #[test]
  fn typing_ignored_before_start() {
    let mut app = App::new(Language::English, Mode::Practice, 60);

    type_text(&mut app, "The", Instant::now());

    assert_eq!(app.session.typed(), "");
  }

  #[test]
  fn type_after_start() {
    let mut app = App::new(Language::English, Mode::Practice, 60);

    let now = Instant::now();

    app.handle_action(Action::Start, now);

    type_text(&mut app, "Thx", now + Duration::from_secs(1));

    assert_eq!(app.session.typed(), "Thx");
    assert_eq!(app.session.statistics().errors, 1);
    assert_eq!(app.session.marks()[3], Mark::Current);
  }

  #[test]
  fn backspace() {
    let mut app = App::new(Language::English, Mode::Practice, 60);

    let now = Instant::now();

    app.handle_action(Action::Start, now);

    type_text(&mut app, "Thx", now);

    app.handle_action(Action::Delete, now);

    assert_eq!(app.session.typed(), "Th");
    assert_eq!(app.session.statistics().errors, 0);
  }

  #[test]
  fn backspace_empty() {
    let mut app = App::new(Language::English, Mode::Practice, 60);

    let now = Instant::now();

    app.handle_action(Action::Start, now);
    app.handle_action(Action::Delete, now);

    assert_eq!(app.session.typed(), "");
  }

  #[test]
  fn complete_typing_shows_summary() {
    let mut app = App::new(Language::English, Mode::Practice, 60);

    let now = Instant::now();

    app.handle_action(Action::Start, now);

    type_text(
      &mut app,
      corpus::text(Language::English, Mode::Practice),
      now + Duration::from_secs(60),
    );

    assert_eq!(app.session.phase(), Phase::Finished);
    assert_eq!(
      app.notice,
      Some(Summary {
        accuracy: 100,
        wpm: 21,
      })
    );
  }

  #[test]
  fn selectors_locked_while_running() {
    let mut app = App::new(Language::English, Mode::Practice, 60);

    let now = Instant::now();

    app.handle_action(Action::Start, now);
    app.handle_action(Action::Language, now);
    app.handle_action(Action::Mode, now);

    assert_eq!(app.session.language(), Language::English);
    assert_eq!(app.session.mode(), Mode::Practice);
    assert_eq!(app.session.phase(), Phase::Running);
  }

  #[test]
  fn selectors_cycle_while_idle() {
    let mut app = App::new(Language::English, Mode::Practice, 60);

    let now = Instant::now();

    app.handle_action(Action::Language, now);
    app.handle_action(Action::Mode, now);

    assert_eq!(app.session.language(), Language::Hindi);
    assert_eq!(app.session.mode(), Mode::Test);
    assert_eq!(
      app.session.reference().iter().collect::<String>(),
      corpus::text(Language::Hindi, Mode::Test)
    );
  }

  #[test]
  fn reset_clears_summary() {
    let mut app = App::new(Language::English, Mode::Test, 1);

    let now = Instant::now();

    app.handle_action(Action::Start, now);

    let outcome = app.session.poll_countdown(now + Duration::from_secs(1));

    app.record(outcome);

    assert!(app.notice.is_some());

    app.handle_action(Action::Reset, now);

    assert_eq!(app.notice, None);
    assert_eq!(app.session.phase(), Phase::Idle);
    assert!(!app.session.selectors_locked());
  }

  #[test]
  fn quit() {
    let mut app = App::new(Language::English, Mode::Practice, 60);

    assert_eq!(app.handle_action(Action::Quit, Instant::now()), State::Quit);
  }
}
