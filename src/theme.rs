use ratatui::style::{Color, Modifier, Style};
use time::Month;

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

/// Days that fall outside the displayed one-year window
pub(crate) const MUTED_STYLE: Style = Style::new().fg(Color::DarkGray).bg(Color::Black);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEK_LABEL_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

/// Patched onto a cell's area when its day is in the selection
pub(crate) const SELECTED_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Patched onto the cell under the cursor
pub(crate) const CURSOR_STYLE: Style =
    Style::new().add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED));

pub(crate) const STATUS_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) fn month_style(month: Month) -> Style {
    let fg = match month {
        Month::January => Color::LightBlue,
        Month::February => Color::Cyan,
        Month::March => Color::LightCyan,
        Month::April => Color::Green,
        Month::May => Color::LightGreen,
        Month::June => Color::Yellow,
        Month::July => Color::LightYellow,
        Month::August => Color::LightRed,
        Month::September => Color::Red,
        Month::October => Color::LightMagenta,
        Month::November => Color::Magenta,
        Month::December => Color::Blue,
    };
    BASE_STYLE.fg(fg)
}

pub(crate) mod prompt {
    use super::{Color, Modifier, Style, BASE_STYLE};

    pub(crate) const HINT_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const INPUT_CURSOR_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);
}
