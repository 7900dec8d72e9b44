use serde::{Deserialize, Serialize};
use std::fmt;

/// A single employee record.
///
/// The serde renames pin the on-disk keys (`Id`, `FirstName`, `LastName`,
/// `SalaryPerHour`) independently of the Rust field names, so the storage
/// format stays stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "SalaryPerHour")]
    pub salary: f64,
}

impl Employee {
    pub fn new(id: i64, first_name: String, last_name: String, salary: f64) -> Self {
        Self {
            id,
            first_name,
            last_name,
            salary,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id = {}, FirstName = {}, LastName = {}, SalaryPerHour = {}",
            self.id,
            self.first_name,
            self.last_name,
            format_salary(self.salary)
        )
    }
}

/// Parse a salary written with a decimal comma (`105,4`).
///
/// The comma convention is fixed: a `.` is rejected rather than silently
/// accepted, and so is anything outside plain signed decimal notation
/// (no exponents, no whitespace).
pub fn parse_salary(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    if !raw
        .chars()
        .all(|c| c.is_ascii_digit() || c == ',' || c == '-' || c == '+')
    {
        return None;
    }
    // More than one comma leaves a comma behind after the swap, which the
    // float parser then rejects.
    raw.replacen(',', ".", 1).parse::<f64>().ok()
}

/// Render a salary with the decimal comma convention.
pub fn format_salary(salary: f64) -> String {
    salary.to_string().replace('.', ",")
}
