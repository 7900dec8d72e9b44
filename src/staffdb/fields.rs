//! The fixed field schema and the `Name:Value` token mapper.
//!
//! The original tool resolved field names against the record type with
//! runtime reflection. Here the schema is a plain enum with a fixed slot
//! order, so the mapping is a static lookup and the slot layout is visible
//! at a glance.

use std::fmt;

/// Number of record fields, and therefore the size of a mapped-values array.
pub const FIELD_COUNT: usize = 4;

/// Record fields in their fixed slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id = 0,
    FirstName = 1,
    LastName = 2,
    SalaryPerHour = 3,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Id,
        Field::FirstName,
        Field::LastName,
        Field::SalaryPerHour,
    ];

    /// The name as it appears in request tokens and user-facing messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "Id",
            Field::FirstName => "FirstName",
            Field::LastName => "LastName",
            Field::SalaryPerHour => "SalaryPerHour",
        }
    }

    pub fn slot(self) -> usize {
        self as usize
    }

    /// Case-sensitive exact lookup. Unknown names resolve to `None`.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed-size array of mapped values, one slot per [`Field`].
///
/// `None` means the field never appeared in the request; `Some("")` means it
/// appeared with an explicitly empty value (`FirstName:`). The two are not
/// interchangeable — Update treats the latter as an invalid value.
pub type MappedValues = [Option<String>; FIELD_COUNT];

/// Map `Name:Value` tokens onto the fixed field slots.
///
/// Each token is split on its first `:`. Tokens without a `:` and tokens
/// whose name is not a known field are skipped without error. When a field
/// name occurs more than once, the last occurrence wins.
pub fn map_values<S: AsRef<str>>(args: &[S]) -> MappedValues {
    let mut values: MappedValues = Default::default();

    for arg in args {
        let Some((name, value)) = arg.as_ref().split_once(':') else {
            continue;
        };
        if let Some(field) = Field::from_name(name) {
            values[field.slot()] = Some(value.to_string());
        }
    }

    values
}
