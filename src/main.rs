use {
  self::{
    action::Action,
    app::App,
    arguments::Arguments,
    corpus::{Language, Mode},
    countdown::Countdown,
    logger::FileLogger,
    session::{Mark, Outcome, Phase, Session, Summary},
    statistics::{Remaining, Statistics},
  },
  anyhow::{anyhow, bail},
  clap::{Parser, ValueEnum},
  crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
  },
  log::{LevelFilter, Log, Metadata, Record, debug, info},
  std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    fs::{File, OpenOptions},
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
};

macro_rules! command {
  ($($cmd:expr),+ $(,)?) => {
    { execute!(stdout(), $($cmd),+) }
  };
}

mod action;
mod app;
mod arguments;
mod corpus;
mod countdown;
mod logger;
mod session;
mod statistics;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
