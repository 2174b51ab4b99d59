use super::*;

#[derive(Debug, Parser)]
#[command(about = "Typing practice and timed typing tests in the terminal")]
pub(crate) struct Arguments {
  #[arg(long, short, default_value_t = Session::DEFAULT_DURATION)]
  duration: u64,
  #[arg(long, short, value_enum, default_value_t = Language::English)]
  language: Language,
  #[arg(long)]
  log_file: Option<PathBuf>,
  #[arg(long, short, value_enum, default_value_t = Mode::Practice)]
  mode: Mode,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    if self.duration == 0 {
      bail!("test duration must be at least one second");
    }

    if let Some(path) = &self.log_file {
      FileLogger::install(path, LevelFilter::Debug)?;
    }

    info!(
      "starting with {} {} ({}s tests)",
      self.language, self.mode, self.duration
    );

    App::new(self.language, self.mode, self.duration).run()
  }
}
