//! The employee directory: an owned, ordered, in-memory record list.
//!
//! All mutations go through [`EmployeeStore`]; the UI layer keeps a derived
//! (searched) copy for display and re-derives it after every change. The
//! store is process-scoped: it is seeded once at startup and discarded on
//! exit.

use crate::error::StoreError;

/// A single directory record.
///
/// `id` is assigned by the store and never changes; `emp_id` is the
/// user-facing business identifier and must stay unique (case-sensitive)
/// across the directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub emp_id: String,
    pub name: String,
    pub position: String,
}

/// The user-editable subset of an [`Employee`], as collected by the
/// add/edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeFields {
    pub emp_id: String,
    pub name: String,
    pub position: String,
}

impl EmployeeFields {
    pub fn new(
        emp_id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            emp_id: emp_id.into(),
            name: name.into(),
            position: position.into(),
        }
    }

    /// Shared add/edit validation: every field must contain something
    /// other than whitespace.
    pub fn validate(&self) -> Result<(), StoreError> {
        let filled = [&self.emp_id, &self.name, &self.position]
            .iter()
            .all(|s| !s.trim().is_empty());
        if filled {
            Ok(())
        } else {
            Err(StoreError::MissingField)
        }
    }
}

/// Direction for [`EmployeeStore::sort_by_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The authoritative record sequence.
///
/// Order is insertion order until [`sort_by_name`](Self::sort_by_name) is
/// applied; once sorted, the sorted order becomes the current order and no
/// earlier order is retained.
#[derive(Clone, Debug)]
pub struct EmployeeStore {
    records: Vec<Employee>,
    next_id: u64,
}

impl EmployeeStore {
    /// An empty directory.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// The directory every process starts with: three sample records.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (emp_id, name, position) in [
            ("EMP001", "Usama", "Software Engineer"),
            ("EMP002", "Umer", "Product Manager"),
            ("EMP003", "Arslan", "UI/UX Designer"),
        ] {
            store.insert_unchecked(EmployeeFields::new(emp_id, name, position));
        }
        store
    }

    /// Current records in current order.
    pub fn list(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[allow(dead_code)]
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Validate and append a new record, assigning it a fresh `id`.
    pub fn add(&mut self, fields: EmployeeFields) -> Result<Employee, StoreError> {
        fields.validate()?;
        if self.records.iter().any(|e| e.emp_id == fields.emp_id) {
            return Err(StoreError::DuplicateId);
        }
        Ok(self.insert_unchecked(fields))
    }

    /// Replace the mutable fields of the record with this `id`, keeping its
    /// position in the sequence. The uniqueness check excludes the record
    /// itself, so re-submitting an unchanged `emp_id` succeeds.
    pub fn update(&mut self, id: &str, fields: EmployeeFields) -> Result<(), StoreError> {
        fields.validate()?;
        if self
            .records
            .iter()
            .any(|e| e.id != id && e.emp_id == fields.emp_id)
        {
            return Err(StoreError::DuplicateId);
        }
        let record = self
            .records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.emp_id = fields.emp_id;
        record.name = fields.name;
        record.position = fields.position;
        Ok(())
    }

    /// Remove the record with this `id`. Removing an absent id is a no-op,
    /// which makes delete idempotent.
    pub fn remove(&mut self, id: &str) {
        self.records.retain(|e| e.id != id);
    }

    /// Records whose `name` contains `query`, case-insensitively, in the
    /// current order. An empty query returns the whole directory.
    pub fn search(&self, query: &str) -> Vec<Employee> {
        let q = query.to_lowercase();
        if q.is_empty() {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&q))
            .cloned()
            .collect()
    }

    /// Stable sort of the sequence by case-folded `name`. Descending flips
    /// the comparator rather than reversing, so records with equal names
    /// keep their relative order either way.
    pub fn sort_by_name(&mut self, direction: SortDirection) {
        match direction {
            SortDirection::Ascending => self
                .records
                .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            SortDirection::Descending => self
                .records
                .sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase())),
        }
    }

    fn insert_unchecked(&mut self, fields: EmployeeFields) -> Employee {
        let employee = Employee {
            id: self.next_id.to_string(),
            emp_id: fields.emp_id,
            name: fields.name,
            position: fields.position,
        };
        self.next_id += 1;
        self.records.push(employee.clone());
        employee
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}
