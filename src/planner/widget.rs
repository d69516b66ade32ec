use super::weeks::{DayClass, DAYS_IN_WEEK};
use super::Planner;
use crate::theme::{
    month_style, CURSOR_STYLE, MUTED_STYLE, SELECTED_STYLE, WEEKDAY_STYLE, WEEK_LABEL_STYLE,
};
use ratatui::{prelude::*, widgets::*};

static WEEKDAY_NAMES: [&str; DAYS_IN_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Columns on the left side of the grid, used as the margin in which the
/// week number is written
const LEFT_MARGIN: u16 = 5;

/// Columns per day of week, including one column of inter-cell gap
const DAY_WIDTH: u16 = 9;

/// Printable width of one cell
const CELL_WIDTH: u16 = DAY_WIDTH - 1;

/// Offset of the weekday name within its column
const WEEKDAY_OFFSET: u16 = 3;

const MAIN_WIDTH: u16 = DAY_WIDTH * 7;

const TOTAL_WIDTH: u16 = LEFT_MARGIN + MAIN_WIDTH;

/// Lines taken up by the weekday header and its rule
const HEADER_LINES: u16 = 2;

/// Lines taken up by each week of the grid: date label, note text, blank
const WEEK_LINES: u16 = 3;

const ACS_HLINE: char = '─';

/// Renders the planner as a week-by-week grid: one row per week with its
/// `W<n>` label, one column per weekday, each cell showing an optional
/// numeric date label and the day's note.  Rebuilt from scratch every
/// frame; all state lives in the [`Planner`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    show_dates: bool,
}

impl Grid {
    pub(crate) fn new(show_dates: bool) -> Grid {
        Grid { show_dates }
    }

    fn weeks_for_lines(lines: u16) -> usize {
        (lines.saturating_sub(HEADER_LINES) / WEEK_LINES).into()
    }
}

impl StatefulWidget for Grid {
    type State = Planner;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let left = area.width.saturating_sub(TOTAL_WIDTH) / 2;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(left),
                Constraint::Length(TOTAL_WIDTH.min(area.width)),
                Constraint::Min(0),
            ])
            .split(area);
        let area = chunks[1];
        state.update_viewport(Self::weeks_for_lines(area.height));
        let scroll = state.scroll();
        let mut canvas = GridCanvas::new(area, buf);
        canvas.draw_header();
        for (row, week) in std::iter::zip(0u16.., state.weeks().iter().skip(scroll)) {
            if usize::from(row) >= Self::weeks_for_lines(area.height) {
                break;
            }
            canvas.draw_week_label(row, week.number);
            for (day, &date) in std::iter::zip(0u16.., &week.days) {
                let style = match state.classify(date) {
                    DayClass::InRange(month) => month_style(month),
                    DayClass::BeforeRange | DayClass::AfterRange => MUTED_STYLE,
                };
                if self.show_dates {
                    canvas.draw_date_label(row, day, date, style);
                }
                let note = state.note_on(date).lines().next().unwrap_or("");
                canvas.draw_note(row, day, note, style);
                if state.is_selected(date) {
                    canvas.patch_cell(row, day, SELECTED_STYLE);
                }
                if state.cursor_date() == Some(date) {
                    canvas.patch_cell(row, day, CURSOR_STYLE);
                }
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct GridCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> GridCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn cell_origin(row: u16, day: u16) -> (u16, u16) {
        (
            row * WEEK_LINES + HEADER_LINES,
            LEFT_MARGIN + DAY_WIDTH * day,
        )
    }

    fn draw_header(&mut self) {
        for (day, name) in std::iter::zip(0u16.., WEEKDAY_NAMES) {
            self.mvprint(
                0,
                LEFT_MARGIN + DAY_WIDTH * day + WEEKDAY_OFFSET,
                name,
                Some(WEEKDAY_STYLE),
            );
        }
        self.hline(1, LEFT_MARGIN, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_week_label(&mut self, row: u16, number: u32) {
        let (y, _) = Self::cell_origin(row, 0);
        self.mvprint(y, 0, format!("W{number}"), Some(WEEK_LABEL_STYLE));
    }

    fn draw_date_label(&mut self, row: u16, day: u16, date: time::Date, style: Style) {
        let (y, x) = Self::cell_origin(row, day);
        let label = format!("{:>2}/{:<2}", u8::from(date.month()), date.day());
        self.mvprint(y, x + 1, label, Some(style));
    }

    fn draw_note(&mut self, row: u16, day: u16, note: &str, style: Style) {
        if note.is_empty() {
            return;
        }
        let (y, x) = Self::cell_origin(row, day);
        self.mvprint(y + 1, x, truncate_chars(note, CELL_WIDTH.into()), Some(style));
    }

    fn patch_cell(&mut self, row: u16, day: u16, style: Style) {
        let (y, x) = Self::cell_origin(row, day);
        let cell = Rect {
            x: self.area.x.saturating_add(x),
            y: self.area.y.saturating_add(y),
            width: CELL_WIDTH,
            height: WEEK_LINES - 1,
        };
        self.buf.set_style(cell.intersection(self.area), style);
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond
            // the grid's area, though the Rect passed to it must lie
            // entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

/// Prefix of `s` at most `width` characters long
fn truncate_chars(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
