mod store;
mod weeks;
mod widget;

pub(crate) use self::widget::Grid;
use self::store::{NoteStore, Selection};
use self::weeks::{classify, compute_weeks, weekday_index, DayClass, Week, DAYS_IN_WEEK};
use thiserror::Error;
use time::Date;

/// Address of one grid cell: 1-based week number plus 0-based day-of-week
/// index, 0 = Sunday.  Only meaningful relative to the planner's computed
/// week sequence; `Planner::resolve()` turns it into a calendar date.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayId {
    pub(crate) week: u32,
    pub(crate) day: u8,
}

/// Owns the week sequence and all mutable planner state.  Every mutation
/// goes through here, and rendering is a pure function of this state.
/// Operations addressed by a `DayId` that does not resolve to a cell are
/// silently ignored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Planner {
    start: Date,
    end: Date,
    weeks: Vec<Week>,
    notes: NoteStore,
    selection: Selection,
    cursor: DayId,
    scroll: usize,
    page: u32,
}

impl Planner {
    pub(crate) fn new(start: Date, end: Date) -> Planner {
        let weeks = compute_weeks(start, end);
        // The start date always lands in week 1, as the anchor Sunday is at
        // most six days before it.
        let cursor = DayId {
            week: 1,
            day: weekday_index(start.weekday()),
        };
        Planner {
            start,
            end,
            weeks,
            notes: NoteStore::new(),
            selection: Selection::new(),
            cursor,
            scroll: 0,
            page: 1,
        }
    }

    pub(crate) fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub(crate) fn classify(&self, date: Date) -> DayClass {
        classify(date, self.start, self.end)
    }

    /// The calendar date addressed by `id`, if `id` names a cell of this
    /// planner's grid
    pub(crate) fn resolve(&self, id: DayId) -> Option<Date> {
        let index = usize::try_from(id.week.checked_sub(1)?).ok()?;
        self.weeks.get(index)?.day(id.day)
    }

    pub(crate) fn set_note(&mut self, id: DayId, text: String) {
        if let Some(date) = self.resolve(id) {
            self.notes.set(date, text);
        }
    }

    pub(crate) fn get_note(&self, id: DayId) -> &str {
        self.resolve(id).map_or("", |date| self.notes.get(date))
    }

    pub(crate) fn note_on(&self, date: Date) -> &str {
        self.notes.get(date)
    }

    /// Drops the notes of all seven days of the given week, whether or not
    /// any of them had one
    pub(crate) fn clear_week(&mut self, week: u32) {
        for day in 0..DAYS_IN_WEEK {
            if let Some(date) = self.resolve(DayId {
                week,
                day: u8::try_from(day).unwrap_or(u8::MAX),
            }) {
                self.notes.remove(date);
            }
        }
    }

    pub(crate) fn toggle(&mut self, id: DayId) {
        if let Some(date) = self.resolve(id) {
            self.selection.toggle(date);
        }
    }

    pub(crate) fn is_selected(&self, date: Date) -> bool {
        self.selection.contains(date)
    }

    pub(crate) fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub(crate) fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Writes `text` as the note of every selected day, overwriting whatever
    /// was there (last writer wins), then empties the selection.  A no-op
    /// when nothing is selected.
    pub(crate) fn apply_to_selection(&mut self, text: &str) {
        if self.selection.is_empty() {
            return;
        }
        for date in self.selection.iter() {
            self.notes.set(date, text.to_owned());
        }
        self.selection.clear();
    }

    pub(crate) fn cursor(&self) -> DayId {
        self.cursor
    }

    pub(crate) fn cursor_date(&self) -> Option<Date> {
        self.resolve(self.cursor)
    }

    fn last_week(&self) -> u32 {
        u32::try_from(self.weeks.len()).unwrap_or(u32::MAX)
    }

    pub(crate) fn cursor_left(&mut self) -> Result<(), OutOfGridError> {
        match self.cursor.day.checked_sub(1) {
            Some(day) => {
                self.cursor.day = day;
                Ok(())
            }
            None => Err(OutOfGridError),
        }
    }

    pub(crate) fn cursor_right(&mut self) -> Result<(), OutOfGridError> {
        if usize::from(self.cursor.day) + 1 < DAYS_IN_WEEK {
            self.cursor.day += 1;
            Ok(())
        } else {
            Err(OutOfGridError)
        }
    }

    pub(crate) fn cursor_up(&mut self, rows: u32) -> Result<(), OutOfGridError> {
        if self.cursor.week > 1 {
            self.cursor.week = self.cursor.week.saturating_sub(rows).max(1);
            Ok(())
        } else {
            Err(OutOfGridError)
        }
    }

    pub(crate) fn cursor_down(&mut self, rows: u32) -> Result<(), OutOfGridError> {
        if self.cursor.week < self.last_week() {
            self.cursor.week = self.cursor.week.saturating_add(rows).min(self.last_week());
            Ok(())
        } else {
            Err(OutOfGridError)
        }
    }

    /// Weeks per viewport page, as last reported by the grid widget
    pub(crate) fn page(&self) -> u32 {
        self.page
    }

    pub(crate) fn jump_to_start(&mut self) {
        self.cursor = DayId {
            week: 1,
            day: weekday_index(self.start.weekday()),
        };
    }

    pub(crate) fn scroll(&self) -> usize {
        self.scroll
    }

    /// Called by the grid widget each render with the number of week rows
    /// that fit the viewport; clamps the scroll offset so the cursor's row
    /// stays visible.
    pub(crate) fn update_viewport(&mut self, rows: usize) {
        let rows = rows.max(1);
        self.page = u32::try_from(rows).unwrap_or(u32::MAX);
        let row = usize::try_from(self.cursor.week).unwrap_or(usize::MAX) - 1;
        let max_scroll = self.weeks.len().saturating_sub(rows);
        self.scroll = self.scroll.min(max_scroll);
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + rows {
            self.scroll = row + 1 - rows;
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the edge of the planner grid")]
pub(crate) struct OutOfGridError;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn planner_2026() -> Planner {
        Planner::new(date!(2026 - 01 - 10), date!(2027 - 01 - 10))
    }

    #[test]
    fn cursor_starts_on_the_start_date() {
        let planner = planner_2026();
        assert_eq!(planner.cursor(), DayId { week: 1, day: 6 });
        assert_eq!(planner.cursor_date(), Some(date!(2026 - 01 - 10)));
    }

    #[test]
    fn resolve_maps_week_and_day_to_dates() {
        let planner = planner_2026();
        assert_eq!(
            planner.resolve(DayId { week: 1, day: 0 }),
            Some(date!(2026 - 01 - 04))
        );
        assert_eq!(
            planner.resolve(DayId { week: 2, day: 3 }),
            Some(date!(2026 - 01 - 14))
        );
        assert_eq!(planner.resolve(DayId { week: 0, day: 0 }), None);
        assert_eq!(planner.resolve(DayId { week: 999, day: 0 }), None);
        assert_eq!(planner.resolve(DayId { week: 1, day: 7 }), None);
    }

    #[test]
    fn set_then_get_note_round_trips() {
        let mut planner = planner_2026();
        let id = DayId { week: 3, day: 2 };
        planner.set_note(id, "standup".into());
        assert_eq!(planner.get_note(id), "standup");
    }

    #[test]
    fn unresolvable_ids_are_ignored() {
        let mut planner = planner_2026();
        let id = DayId { week: 999, day: 0 };
        planner.set_note(id, "lost".into());
        assert_eq!(planner.get_note(id), "");
        planner.toggle(id);
        assert!(!planner.has_selection());
    }

    #[test]
    fn clear_week_empties_all_seven_days() {
        let mut planner = planner_2026();
        for day in 0..7 {
            planner.set_note(DayId { week: 5, day }, format!("note {day}"));
        }
        planner.set_note(DayId { week: 6, day: 0 }, "keep".into());
        planner.clear_week(5);
        for day in 0..7 {
            assert_eq!(planner.get_note(DayId { week: 5, day }), "");
        }
        assert_eq!(planner.get_note(DayId { week: 6, day: 0 }), "keep");
    }

    #[test]
    fn clear_week_without_notes_is_a_noop() {
        let mut planner = planner_2026();
        planner.clear_week(5);
        planner.clear_week(999);
    }

    #[test]
    fn apply_to_selection_overwrites_and_clears() {
        let mut planner = planner_2026();
        let a = DayId { week: 2, day: 1 };
        let b = DayId { week: 4, day: 5 };
        planner.set_note(a, "old".into());
        planner.toggle(a);
        planner.toggle(b);
        planner.apply_to_selection("X");
        assert_eq!(planner.get_note(a), "X");
        assert_eq!(planner.get_note(b), "X");
        assert!(!planner.has_selection());
    }

    #[test]
    fn apply_to_empty_selection_mutates_nothing() {
        let mut planner = planner_2026();
        planner.apply_to_selection("X");
        assert_eq!(planner, planner_2026());
    }

    #[test]
    fn cursor_stops_at_the_grid_edges() {
        let mut planner = planner_2026();
        assert_eq!(planner.cursor_right(), Err(OutOfGridError));
        assert_eq!(planner.cursor_up(1), Err(OutOfGridError));
        assert_eq!(planner.cursor_left(), Ok(()));
        assert_eq!(planner.cursor_down(1), Ok(()));
        assert_eq!(planner.cursor(), DayId { week: 2, day: 5 });
        // Paging past the last week clamps to it
        assert_eq!(planner.cursor_down(1000), Ok(()));
        assert_eq!(planner.cursor().week, 54);
        assert_eq!(planner.cursor_down(1), Err(OutOfGridError));
    }

    #[test]
    fn jump_to_start_restores_the_initial_cursor() {
        let mut planner = planner_2026();
        planner.cursor_down(10).unwrap();
        planner.cursor_left().unwrap();
        planner.jump_to_start();
        assert_eq!(planner.cursor(), DayId { week: 1, day: 6 });
    }

    #[test]
    fn viewport_keeps_the_cursor_row_visible() {
        let mut planner = planner_2026();
        planner.update_viewport(8);
        assert_eq!(planner.scroll(), 0);
        planner.cursor_down(10).unwrap();
        planner.update_viewport(8);
        assert_eq!(planner.scroll(), 3);
        planner.cursor_up(10).unwrap();
        planner.update_viewport(8);
        assert_eq!(planner.scroll(), 0);
    }
}
