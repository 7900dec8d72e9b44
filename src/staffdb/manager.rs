//! The operation engine.
//!
//! [`DataManager`] interprets one request per call: it maps the `Name:Value`
//! tokens onto field slots, dispatches on the operation keyword, loads the
//! whole collection from storage, applies the operation, and writes the
//! collection back when anything changed.
//!
//! Every call is self-contained. There is no cached state between
//! operations; a second call sees exactly what the previous one persisted.

use crate::error::{Result, StaffError};
use crate::fields::{self, Field, MappedValues};
use crate::model::{self, Employee};
use crate::store::StaffStore;

const OP_ADD: &str = "-add";
const OP_UPDATE: &str = "-update";
const OP_GET: &str = "-get";
const OP_DELETE: &str = "-delete";
const OP_GETALL: &str = "-getall";

const SUCCESS_MESSAGE: &str = "Operation is successfull";

const FIRST_ID: i64 = 1;

/// Dispatches operations against one collection store.
///
/// Generic over [`StaffStore`] so tests can run against `InMemoryStore`
/// while production uses `JsonFileStore`.
pub struct DataManager<S: StaffStore> {
    store: S,
}

impl<S: StaffStore> DataManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one operation and flatten the outcome to its console string.
    ///
    /// This is the string-in/string-out surface: success and failure both
    /// come back as the exact text the caller should display.
    pub fn make_operation<A: AsRef<str>>(&mut self, args: &[A]) -> String {
        match self.run(args) {
            Ok(message) => message,
            Err(err) => err.to_string(),
        }
    }

    /// Structured variant of [`DataManager::make_operation`].
    ///
    /// The storage-existence check comes first, before the arguments are
    /// even looked at; an empty argument list is the next early exit.
    pub fn run<A: AsRef<str>>(&mut self, args: &[A]) -> Result<String> {
        if !self.store.exists() {
            return Err(StaffError::MissingStorage(self.store.location()));
        }

        let Some((operation, rest)) = args.split_first() else {
            return Err(StaffError::NoArguments);
        };
        let values = fields::map_values(rest);

        match operation.as_ref() {
            OP_ADD => self.add(&values),
            OP_UPDATE => self.update(&values),
            OP_GET => self.get(parse_id(&values)?),
            OP_DELETE => self.delete(parse_id(&values)?),
            OP_GETALL => self.get_all(),
            _ => Err(StaffError::UnknownOperation),
        }
    }

    /// Append a new record. FirstName, LastName and SalaryPerHour are all
    /// required; the Id is assigned, never accepted from the request.
    fn add(&mut self, values: &MappedValues) -> Result<String> {
        let first_name = require(values, Field::FirstName)?;
        let last_name = require(values, Field::LastName)?;
        let raw_salary = require(values, Field::SalaryPerHour)?;
        let salary = model::parse_salary(raw_salary)
            .ok_or_else(|| StaffError::invalid_value(Field::SalaryPerHour, raw_salary))?;

        let mut employees = self.store.load()?.unwrap_or_default();
        let id = employees
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(FIRST_ID, |max| max + 1);
        employees.push(Employee::new(
            id,
            first_name.to_string(),
            last_name.to_string(),
            salary,
        ));
        self.persist(&employees)?;

        Ok(SUCCESS_MESSAGE.to_string())
    }

    /// Apply the supplied fields to an existing record.
    ///
    /// Fields are validated and applied in schema order (FirstName,
    /// LastName, SalaryPerHour); the first invalid value returns
    /// immediately, so later fields are never examined and nothing reaches
    /// storage. At least one field must apply or the request is rejected.
    fn update(&mut self, values: &MappedValues) -> Result<String> {
        let id = parse_id(values)?;

        let mut employees = self.store.load()?.ok_or(StaffError::EmptyCollection)?;
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StaffError::RecordNotFound(id))?;

        let mut applied = false;

        if let Some(value) = &values[Field::FirstName.slot()] {
            if value.is_empty() {
                return Err(StaffError::invalid_value(Field::FirstName, value));
            }
            employee.first_name = value.clone();
            applied = true;
        }

        if let Some(value) = &values[Field::LastName.slot()] {
            if value.is_empty() {
                return Err(StaffError::invalid_value(Field::LastName, value));
            }
            employee.last_name = value.clone();
            applied = true;
        }

        if let Some(value) = &values[Field::SalaryPerHour.slot()] {
            let salary = model::parse_salary(value)
                .ok_or_else(|| StaffError::invalid_value(Field::SalaryPerHour, value))?;
            employee.salary = salary;
            applied = true;
        }

        if !applied {
            return Err(StaffError::NoValidUpdate);
        }
        self.persist(&employees)?;

        Ok(SUCCESS_MESSAGE.to_string())
    }

    /// Format a single record by Id. Read-only.
    fn get(&self, id: i64) -> Result<String> {
        let employees = self.store.load()?.ok_or(StaffError::EmptyCollection)?;
        let employee = employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(StaffError::RecordNotFound(id))?;
        Ok(employee.to_string())
    }

    /// Remove every record with the given Id. Removing nothing is still a
    /// success, not an error.
    fn delete(&mut self, id: i64) -> Result<String> {
        let mut employees = self.store.load()?.ok_or(StaffError::EmptyCollection)?;
        employees.retain(|e| e.id != id);
        self.persist(&employees)?;

        Ok(SUCCESS_MESSAGE.to_string())
    }

    /// Format every record, one per line, with a trailing newline.
    fn get_all(&self) -> Result<String> {
        let employees = self.store.load()?.ok_or(StaffError::EmptyCollection)?;
        if employees.is_empty() {
            return Err(StaffError::EmptyCollection);
        }

        let mut output = String::new();
        for employee in &employees {
            output.push_str(&employee.to_string());
            output.push('\n');
        }
        Ok(output)
    }

    fn persist(&mut self, employees: &[Employee]) -> Result<()> {
        self.store
            .save(employees)
            .map_err(|err| StaffError::PersistenceFailure(err.to_string()))
    }
}

/// A field the operation cannot do without.
fn require(values: &MappedValues, field: Field) -> Result<&str> {
    values[field.slot()]
        .as_deref()
        .ok_or(StaffError::MissingRequiredField(field))
}

/// The Id token, required and numeric. A missing Id reports the same
/// invalid-value message with an empty value.
fn parse_id(values: &MappedValues) -> Result<i64> {
    let raw = values[Field::Id.slot()].as_deref().unwrap_or_default();
    raw.parse()
        .map_err(|_| StaffError::invalid_value(Field::Id, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> DataManager<InMemoryStore> {
        DataManager::new(InMemoryStore::with_employees(vec![
            Employee::new(1, "John".into(), "Doe".into(), 75.0),
            Employee::new(2, "James".into(), "Smith".into(), 105.4),
        ]))
    }

    #[test]
    fn missing_storage_wins_over_everything() {
        let mut manager = DataManager::new(InMemoryStore::missing());
        assert_eq!(
            manager.make_operation::<&str>(&[]),
            "No such file <memory>"
        );
        assert_eq!(
            manager.make_operation(&["-getall"]),
            "No such file <memory>"
        );
    }

    #[test]
    fn empty_args_are_rejected() {
        let mut manager = seeded();
        assert_eq!(manager.make_operation::<&str>(&[]), "No arguments provided");
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let mut manager = seeded();
        assert_eq!(manager.make_operation(&["-upsert"]), "No such operation");
        assert_eq!(manager.make_operation(&["getall"]), "No such operation");
    }

    #[test]
    fn add_assigns_next_id() {
        let mut manager = seeded();
        let result = manager.make_operation(&[
            "-add",
            "FirstName:Ada",
            "LastName:Lovelace",
            "SalaryPerHour:120,5",
        ]);
        assert_eq!(result, "Operation is successfull");
        assert_eq!(
            manager.make_operation(&["-get", "Id:3"]),
            "Id = 3, FirstName = Ada, LastName = Lovelace, SalaryPerHour = 120,5"
        );
    }

    #[test]
    fn add_into_absent_collection_starts_at_one() {
        let mut manager = DataManager::new(InMemoryStore::new());
        manager.make_operation(&["-add", "FirstName:Ada", "LastName:Lovelace", "SalaryPerHour:9"]);
        assert_eq!(
            manager.make_operation(&["-get", "Id:1"]),
            "Id = 1, FirstName = Ada, LastName = Lovelace, SalaryPerHour = 9"
        );
    }

    #[test]
    fn add_into_empty_collection_starts_at_one() {
        let mut manager = DataManager::new(InMemoryStore::with_employees(vec![]));
        manager.make_operation(&["-add", "FirstName:Ada", "LastName:Lovelace", "SalaryPerHour:9"]);
        assert_eq!(manager.store().employees()[0].id, 1);
    }

    #[test]
    fn add_id_skips_gaps_after_delete() {
        let mut manager = seeded();
        manager.make_operation(&["-delete", "Id:1"]);
        manager.make_operation(&["-add", "FirstName:Ada", "LastName:Lovelace", "SalaryPerHour:9"]);
        // Max remaining Id is 2, so the new record gets 3 even though 1 is free.
        assert_eq!(manager.store().employees().last().unwrap().id, 3);
    }

    #[test]
    fn add_checks_required_fields_in_order() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-add"]),
            "No value for property: FirstName provided"
        );
        assert_eq!(
            manager.make_operation(&["-add", "FirstName:Ada"]),
            "No value for property: LastName provided"
        );
        assert_eq!(
            manager.make_operation(&["-add", "FirstName:Ada", "LastName:Lovelace"]),
            "No value for property: SalaryPerHour provided"
        );
        // FirstName is reported first even when several are missing.
        assert_eq!(
            manager.make_operation(&["-add", "LastName:Lovelace"]),
            "No value for property: FirstName provided"
        );
    }

    #[test]
    fn add_rejects_non_numeric_salary() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&[
                "-add",
                "FirstName:Ada",
                "LastName:Lovelace",
                "SalaryPerHour:lots"
            ]),
            "Invalid value( lots ) for property: SalaryPerHour"
        );
        assert_eq!(manager.store().employees().len(), 2);
    }

    #[test]
    fn add_ignores_a_supplied_id() {
        let mut manager = seeded();
        manager.make_operation(&[
            "-add",
            "Id:99",
            "FirstName:Ada",
            "LastName:Lovelace",
            "SalaryPerHour:9",
        ]);
        assert_eq!(manager.store().employees().last().unwrap().id, 3);
    }

    #[test]
    fn update_applies_supplied_fields_only() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-update", "Id:2", "FirstName:David"]),
            "Operation is successfull"
        );
        assert_eq!(
            manager.make_operation(&["-get", "Id:2"]),
            "Id = 2, FirstName = David, LastName = Smith, SalaryPerHour = 105,4"
        );
    }

    #[test]
    fn update_is_commutative_across_fields() {
        let mut forward = seeded();
        forward.make_operation(&["-update", "Id:2", "FirstName:Jake", "LastName:Bond"]);
        let mut backward = seeded();
        backward.make_operation(&["-update", "Id:2", "LastName:Bond", "FirstName:Jake"]);
        assert_eq!(
            forward.make_operation(&["-get", "Id:2"]),
            backward.make_operation(&["-get", "Id:2"])
        );
    }

    #[test]
    fn update_rejects_empty_names() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-update", "Id:2", "FirstName:"]),
            "Invalid value(  ) for property: FirstName"
        );
        // Record unchanged, nothing persisted.
        assert_eq!(
            manager.make_operation(&["-get", "Id:2"]),
            "Id = 2, FirstName = James, LastName = Smith, SalaryPerHour = 105,4"
        );
    }

    #[test]
    fn update_rejects_non_numeric_salary() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-update", "Id:2", "LastName:Bond", "SalaryPerHour:quitelot"]),
            "Invalid value( quitelot ) for property: SalaryPerHour"
        );
        // The earlier LastName change must not have been persisted either.
        assert_eq!(
            manager.make_operation(&["-get", "Id:2"]),
            "Id = 2, FirstName = James, LastName = Smith, SalaryPerHour = 105,4"
        );
    }

    #[test]
    fn update_with_only_an_id_is_rejected() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-update", "Id:2"]),
            "Request has no valid values"
        );
    }

    #[test]
    fn update_requires_a_numeric_id() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-update", "Id:two", "FirstName:David"]),
            "Invalid value( two ) for property: Id"
        );
        assert_eq!(
            manager.make_operation(&["-update", "FirstName:David"]),
            "Invalid value(  ) for property: Id"
        );
    }

    #[test]
    fn update_of_unknown_id_reports_not_found() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-update", "Id:127", "LastName:Bond"]),
            "There is no Employee with Id = 127"
        );
    }

    #[test]
    fn update_on_absent_collection_reports_empty() {
        let mut manager = DataManager::new(InMemoryStore::new());
        assert_eq!(
            manager.make_operation(&["-update", "Id:2", "FirstName:David"]),
            "List of Employees is empty"
        );
    }

    #[test]
    fn update_signals_persistence_failure_explicitly() {
        let mut manager = seeded();
        manager.store.fail_saves = true;
        let result = manager.make_operation(&["-update", "Id:2", "FirstName:David"]);
        assert!(result.starts_with("Failed to save changes"), "{result}");
    }

    #[test]
    fn get_formats_the_record() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-get", "Id:2"]),
            "Id = 2, FirstName = James, LastName = Smith, SalaryPerHour = 105,4"
        );
    }

    #[test]
    fn get_is_idempotent() {
        let mut manager = seeded();
        let first = manager.make_operation(&["-get", "Id:1"]);
        let second = manager.make_operation(&["-get", "Id:1"]);
        assert_eq!(first, second);
    }

    #[test]
    fn get_of_unknown_id_reports_not_found() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-get", "Id:127"]),
            "There is no Employee with Id = 127"
        );
    }

    #[test]
    fn get_requires_a_numeric_id() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-get", "Id:abc"]),
            "Invalid value( abc ) for property: Id"
        );
    }

    #[test]
    fn delete_removes_the_record() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-delete", "Id:1"]),
            "Operation is successfull"
        );
        assert_eq!(
            manager.make_operation(&["-get", "Id:1"]),
            "There is no Employee with Id = 1"
        );
    }

    #[test]
    fn delete_of_unknown_id_is_a_noop_success() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-delete", "Id:127"]),
            "Operation is successfull"
        );
        assert_eq!(manager.store().employees().len(), 2);
    }

    #[test]
    fn getall_lists_every_record_with_trailing_newline() {
        let mut manager = seeded();
        assert_eq!(
            manager.make_operation(&["-getall"]),
            "Id = 1, FirstName = John, LastName = Doe, SalaryPerHour = 75\n\
             Id = 2, FirstName = James, LastName = Smith, SalaryPerHour = 105,4\n"
        );
    }

    #[test]
    fn getall_on_empty_or_absent_collection_reports_empty() {
        let mut manager = DataManager::new(InMemoryStore::new());
        assert_eq!(
            manager.make_operation(&["-getall"]),
            "List of Employees is empty"
        );

        let mut manager = DataManager::new(InMemoryStore::with_employees(vec![]));
        assert_eq!(
            manager.make_operation(&["-getall"]),
            "List of Employees is empty"
        );
    }

    #[test]
    fn getall_preserves_insertion_order() {
        let mut manager = DataManager::new(InMemoryStore::new());
        for name in ["Ada", "Grace", "Edsger"] {
            let token = format!("FirstName:{name}");
            manager.make_operation(&["-add", token.as_str(), "LastName:X", "SalaryPerHour:1"]);
        }
        let listing = manager.make_operation(&["-getall"]);
        let names: Vec<&str> = listing
            .lines()
            .map(|l| l.split(", ").nth(1).unwrap())
            .collect();
        assert_eq!(
            names,
            ["FirstName = Ada", "FirstName = Grace", "FirstName = Edsger"]
        );
    }
}
