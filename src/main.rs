mod app;
mod help;
mod planner;
mod prompt;
mod theme;
use crate::app::App;
use crate::planner::Planner;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{format_description::FormatItem, macros::format_description, Date, Month, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Day of the month on which the default one-year window opens
const DEFAULT_START_DAY: u8 = 10;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { start: Option<Date> },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut start = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Value(value) if start.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => start = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { start })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { start } => {
                let start = match start {
                    Some(date) => date,
                    None => {
                        let today = OffsetDateTime::now_local()
                            .context("failed to determine local date")?
                            .date();
                        Date::from_calendar_date(today.year(), Month::January, DEFAULT_START_DAY)
                            .context("failed to construct default start date")?
                    }
                };
                let end = start
                    .replace_year(start.year() + 1)
                    .context("start date has no equivalent in the following year")?;
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let planner = Planner::new(start, end);
                    App::new(planner).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: weekplan [YYYY-MM-DD]");
                println!();
                println!("Week-by-week one-year terminal planner with per-day notes");
                println!();
                println!("The planner covers one year starting from the given date (default:");
                println!("January 10 of the current year).");
                println!();
                println!("Options:");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
