//! Column registry - the full set of columns the grid can show
//!
//! Columns are declared once, in a fixed order, independent of which are
//! visible or how the user has arranged them.

use super::person::{Person, PersonField};

/// How a column derives its cell value from a row
#[derive(Clone, Copy)]
pub enum ColumnKind {
    /// 1-based absolute position of the row in the dataset
    Index,
    /// A plain field of the row
    Field(PersonField),
    /// A value computed from the whole row
    Computed(fn(&Person) -> String),
}

impl std::fmt::Debug for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Index => write!(f, "Index"),
            ColumnKind::Field(field) => write!(f, "Field({:?})", field),
            ColumnKind::Computed(_) => write!(f, "Computed"),
        }
    }
}

/// A declared column. Immutable once registered.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    /// Width in terminal cells
    pub width: u16,
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub const fn new(id: &'static str, label: &'static str, width: u16, kind: ColumnKind) -> Self {
        Self {
            id,
            label,
            width,
            kind,
        }
    }

    /// Resolve the cell value for `row`, which sits at `row_index` in the full dataset
    pub fn value(&self, row: &Person, row_index: usize) -> String {
        match self.kind {
            ColumnKind::Index => (row_index + 1).to_string(),
            ColumnKind::Field(field) => row.field(field),
            ColumnKind::Computed(compute) => compute(row),
        }
    }
}

/// Render progress as a small meter, e.g. `█████░░░░░  52%`
fn progress_meter(row: &Person) -> String {
    let filled = (row.progress as usize * 10 + 50) / 100;
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(10 - filled),
        row.progress
    )
}

/// Ordered, immutable declaration of every column
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    columns: Vec<ColumnDescriptor>,
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self::new(vec![
            ColumnDescriptor::new("idx", "Index", 8, ColumnKind::Index),
            ColumnDescriptor::new(
                "firstName",
                "First Name",
                15,
                ColumnKind::Field(PersonField::FirstName),
            ),
            ColumnDescriptor::new(
                "lastName",
                "Last Name",
                15,
                ColumnKind::Field(PersonField::LastName),
            ),
            ColumnDescriptor::new("age", "Age", 6, ColumnKind::Field(PersonField::Age)),
            ColumnDescriptor::new("visits", "Visits", 8, ColumnKind::Field(PersonField::Visits)),
            ColumnDescriptor::new("status", "Status", 14, ColumnKind::Field(PersonField::Status)),
            ColumnDescriptor::new("progress", "Progress", 18, ColumnKind::Computed(progress_meter)),
        ])
    }
}

impl ColumnRegistry {
    /// Build a registry from declarations. Later duplicates of an id are dropped.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        let mut unique: Vec<ColumnDescriptor> = Vec::with_capacity(columns.len());
        for column in columns {
            if unique.iter().any(|c| c.id == column.id) {
                log::warn!("Duplicate column id '{}' ignored", column.id);
                continue;
            }
            unique.push(column);
        }
        Self { columns: unique }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn get(&self, id: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[cfg(test)]
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::Status;

    fn sample_person() -> Person {
        Person {
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            age: 31,
            visits: 12,
            status: Status::Complicated,
            progress: 52,
        }
    }

    #[test]
    fn test_default_registry_declaration_order() {
        let registry = ColumnRegistry::default();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(
            ids,
            vec!["idx", "firstName", "lastName", "age", "visits", "status", "progress"]
        );
        assert!(!registry.contains("email"));
    }

    #[test]
    fn test_index_column_is_one_based_absolute() {
        let registry = ColumnRegistry::default();
        let idx = registry.get("idx").unwrap();
        assert_eq!(idx.value(&sample_person(), 0), "1");
        assert_eq!(idx.value(&sample_person(), 50), "51");
    }

    #[test]
    fn test_field_and_computed_values() {
        let registry = ColumnRegistry::default();
        let person = sample_person();
        assert_eq!(registry.get("firstName").unwrap().value(&person, 0), "Ana");
        assert_eq!(registry.get("age").unwrap().value(&person, 0), "31");
        assert_eq!(registry.get("status").unwrap().value(&person, 0), "Complicated");
        assert_eq!(
            registry.get("progress").unwrap().value(&person, 0),
            "█████░░░░░  52%"
        );
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let registry = ColumnRegistry::new(vec![
            ColumnDescriptor::new("a", "A", 4, ColumnKind::Index),
            ColumnDescriptor::new("a", "Again", 4, ColumnKind::Index),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a").unwrap().label, "A");
    }
}
