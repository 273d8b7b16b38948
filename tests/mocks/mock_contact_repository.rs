use birthday_assistant::domain::ContactName;
use birthday_assistant::error::{AssistantError, AssistantResult};
use birthday_assistant::models::Record;
use birthday_assistant::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps records in a plain `Vec` and tracks method calls for verification.
/// Clones share the call counters, so a handle kept by the test still sees
/// calls made after the repository was moved into a bot.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    records: Vec<Record>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully built record to the mock repository.
    pub fn add_contact(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add_record(&mut self, name: ContactName) -> AssistantResult<&mut Record> {
        self.track_call("add_record");

        if self.records.iter().any(|r| r.name() == &name) {
            return Err(AssistantError::AlreadyExists(name.into_inner()));
        }
        self.records.push(Record::new(name));
        Ok(self.records.last_mut().unwrap())
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.track_call("find");
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.track_call("find_mut");
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    fn delete(&mut self, name: &str) -> Option<Record> {
        self.track_call("delete");
        let pos = self.records.iter().position(|r| r.name().as_str() == name)?;
        Some(self.records.remove(pos))
    }

    fn list_all(&self) -> Vec<&Record> {
        self.track_call("list_all");
        self.records.iter().collect()
    }
}
