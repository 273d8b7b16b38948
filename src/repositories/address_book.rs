use super::traits::ContactRepository;
use crate::domain::ContactName;
use crate::error::{AssistantError, AssistantResult};
use crate::models::Record;
use std::collections::HashMap;

/// In-memory, insertion-ordered contact store.
///
/// Records live in a `Vec` in the order they were added; `index` maps each name
/// to its position. Names are unique.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn reindex_from(&mut self, start: usize) {
        for (pos, record) in self.records.iter().enumerate().skip(start) {
            self.index.insert(record.name().as_str().to_string(), pos);
        }
    }
}

impl ContactRepository for AddressBook {
    fn add_record(&mut self, name: ContactName) -> AssistantResult<&mut Record> {
        if self.index.contains_key(name.as_str()) {
            return Err(AssistantError::AlreadyExists(name.into_inner()));
        }

        let pos = self.records.len();
        self.index.insert(name.as_str().to_string(), pos);
        tracing::debug!(contact = %name, "Record added");
        self.records.push(Record::new(name));

        Ok(&mut self.records[pos])
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let pos = *self.index.get(name)?;
        self.records.get_mut(pos)
    }

    fn delete(&mut self, name: &str) -> Option<Record> {
        let pos = self.index.remove(name)?;
        let record = self.records.remove(pos);
        self.reindex_from(pos);
        tracing::debug!(contact = %name, "Record deleted");
        Some(record)
    }

    fn list_all(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn name(n: &str) -> ContactName {
        ContactName::new(n).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (n, birthday) in entries {
            book.add_record(name(n))
                .unwrap()
                .set_birthday(birthday)
                .unwrap();
        }
        book
    }

    fn upcoming_names(book: &AddressBook, today: NaiveDate) -> Vec<String> {
        book.upcoming_birthdays(today, 7)
            .into_iter()
            .map(|u| u.to_string())
            .collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(name("alice"))
            .unwrap()
            .add_phone("1234567890")
            .unwrap();

        let record = book.find("alice").unwrap();
        assert_eq!(record.phones_joined(), "1234567890");
        assert!(book.find("bob").is_none());
    }

    #[test]
    fn test_add_duplicate_fails_and_keeps_one_record() {
        let mut book = AddressBook::new();
        book.add_record(name("alice")).unwrap();

        let err = book.add_record(name("alice")).unwrap_err();
        assert_eq!(err, AssistantError::AlreadyExists("alice".to_string()));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(name("alice")).unwrap();
        book.find_mut("alice")
            .unwrap()
            .set_birthday("01.01.1990")
            .unwrap();
        assert!(book.find("alice").unwrap().birthday().is_some());
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let mut book = AddressBook::new();
        for n in ["zoe", "adam", "mike"] {
            book.add_record(name(n)).unwrap();
        }
        let names: Vec<&str> = book.list_all().iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["zoe", "adam", "mike"]);
    }

    #[test]
    fn test_delete_reindexes_remaining_records() {
        let mut book = AddressBook::new();
        for n in ["a", "b", "c"] {
            book.add_record(name(n)).unwrap();
        }

        let removed = book.delete("a").unwrap();
        assert_eq!(removed.name().as_str(), "a");
        assert!(book.find("a").is_none());
        assert_eq!(book.find("c").unwrap().name().as_str(), "c");

        let names: Vec<&str> = book.list_all().iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);

        // Name can be registered again after deletion.
        book.add_record(name("a")).unwrap();
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(name("a")).unwrap();
        assert!(book.delete("zzz").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_upcoming_birthdays_window() {
        let book = book_with_birthdays(&[("ann", "12.06.1990"), ("ben", "20.06.1990")]);
        assert_eq!(upcoming_names(&book, date(2024, 6, 10)), vec!["ann: 12.06"]);
    }

    #[test]
    fn test_upcoming_birthdays_inclusive_bounds() {
        let book = book_with_birthdays(&[
            ("before", "09.06.1980"),
            ("today", "10.06.1980"),
            ("last", "17.06.1980"),
            ("after", "18.06.1980"),
        ]);
        assert_eq!(
            upcoming_names(&book, date(2024, 6, 10)),
            vec!["today: 10.06", "last: 17.06"]
        );
    }

    #[test]
    fn test_upcoming_birthdays_keeps_list_order() {
        let book = book_with_birthdays(&[
            ("late", "15.06.2000"),
            ("early", "11.06.2000"),
        ]);
        assert_eq!(
            upcoming_names(&book, date(2024, 6, 10)),
            vec!["late: 15.06", "early: 11.06"]
        );
    }

    #[test]
    fn test_upcoming_birthdays_skips_records_without_birthday() {
        let mut book = book_with_birthdays(&[("ann", "12.06.1990")]);
        book.add_record(name("nobody")).unwrap();
        assert_eq!(upcoming_names(&book, date(2024, 6, 10)), vec!["ann: 12.06"]);
    }

    #[test]
    fn test_upcoming_birthdays_no_year_rollover() {
        let book = book_with_birthdays(&[("newyear", "02.01.1995")]);
        assert!(upcoming_names(&book, date(2024, 12, 30)).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_leap_day() {
        let book = book_with_birthdays(&[("leap", "29.02.2000")]);
        assert!(upcoming_names(&book, date(2023, 2, 25)).is_empty());
        assert_eq!(upcoming_names(&book, date(2024, 2, 25)), vec!["leap: 29.02"]);
    }

    #[test]
    fn test_upcoming_birthdays_custom_horizon() {
        let book = book_with_birthdays(&[("ann", "20.06.1990")]);
        assert!(book.upcoming_birthdays(date(2024, 6, 10), 7).is_empty());
        assert_eq!(book.upcoming_birthdays(date(2024, 6, 10), 10).len(), 1);
        assert!(book.upcoming_birthdays(date(2024, 6, 20), 0).len() == 1);
    }
}
