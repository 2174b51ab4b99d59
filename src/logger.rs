use super::*;

/// Appends log records to a file. The terminal belongs to the typing
/// screen, so nothing is ever written to stdout or stderr.
pub(crate) struct FileLogger {
  file: Mutex<File>,
  level: LevelFilter,
}

impl FileLogger {
  pub(crate) fn install(path: &Path, level: LevelFilter) -> Result {
    log::set_boxed_logger(Box::new(Self::open(path, level)?))
      .map_err(|error| anyhow!("failed to install logger: {error}"))?;

    log::set_max_level(level);

    Ok(())
  }

  fn open(path: &Path, level: LevelFilter) -> Result<Self> {
    let file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .map_err(|error| anyhow!("failed to open log file `{}`: {error}", path.display()))?;

    Ok(Self {
      file: Mutex::new(file),
      level,
    })
  }
}

impl Log for FileLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= self.level
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    if let Ok(mut file) = self.file.lock() {
      let _ = writeln!(
        file,
        "{} {}: {}",
        record.level(),
        record.target(),
        record.args()
      );
    }
  }

  fn flush(&self) {
    if let Ok(mut file) = self.file.lock() {
      let _ = file.flush();
    }
  }
}
