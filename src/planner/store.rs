use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// Per-day note text.  Keyed by absolute date so notes stay attached to
/// their calendar day even if the displayed window is ever recomputed from
/// a different start date.  Absent key means "no note".
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct NoteStore(BTreeMap<Date, String>);

impl NoteStore {
    pub(crate) fn new() -> NoteStore {
        NoteStore::default()
    }

    pub(crate) fn set(&mut self, date: Date, text: String) {
        self.0.insert(date, text);
    }

    pub(crate) fn get(&self, date: Date) -> &str {
        self.0.get(&date).map_or("", String::as_str)
    }

    pub(crate) fn remove(&mut self, date: Date) {
        self.0.remove(&date);
    }
}

/// The days currently marked for batch editing, independent of the notes
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Selection(BTreeSet<Date>);

impl Selection {
    pub(crate) fn new() -> Selection {
        Selection::default()
    }

    /// Removes `date` if present, adds it otherwise
    pub(crate) fn toggle(&mut self, date: Date) {
        if !self.0.remove(&date) {
            self.0.insert(date);
        }
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn set_then_get_round_trips() {
        let mut notes = NoteStore::new();
        notes.set(date!(2026 - 03 - 15), "dentist".into());
        assert_eq!(notes.get(date!(2026 - 03 - 15)), "dentist");
    }

    #[test]
    fn get_absent_is_empty() {
        let notes = NoteStore::new();
        assert_eq!(notes.get(date!(2026 - 03 - 15)), "");
    }

    #[test]
    fn set_overwrites() {
        let mut notes = NoteStore::new();
        notes.set(date!(2026 - 03 - 15), "old".into());
        notes.set(date!(2026 - 03 - 15), "new".into());
        assert_eq!(notes.get(date!(2026 - 03 - 15)), "new");
    }

    #[test]
    fn remove_absent_is_a_noop() {
        let mut notes = NoteStore::new();
        notes.remove(date!(2026 - 03 - 15));
        assert_eq!(notes.get(date!(2026 - 03 - 15)), "");
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let mut sel = Selection::new();
        let day = date!(2026 - 06 - 01);
        sel.toggle(day);
        assert!(sel.contains(day));
        sel.toggle(day);
        assert!(!sel.contains(day));
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_is_independent_per_day() {
        let mut sel = Selection::new();
        sel.toggle(date!(2026 - 06 - 01));
        sel.toggle(date!(2026 - 06 - 02));
        sel.toggle(date!(2026 - 06 - 01));
        assert!(!sel.contains(date!(2026 - 06 - 01)));
        assert!(sel.contains(date!(2026 - 06 - 02)));
        assert_eq!(sel.len(), 1);
    }
}
