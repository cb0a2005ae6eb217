use serde::{Deserialize, Serialize};

/// Date format every text date value must match exactly: `YYYYMMDDHHMMSS`.
///
/// The PDF date syntax (`D:YYYYMMDDHHmmSSOHH'mm'`) does not match it.
pub const DEFAULT_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// What to check for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// The field name is a key of the metadata mapping.
    Presence,
    /// The field, when present, is a non-text value or a text value matching
    /// the configured date format. Absent fields produce no check at all.
    Date,
}

impl CheckKind {
    /// Suffix appended to the field name to form the check key.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Presence => " present",
            Self::Date => " valid",
        }
    }
}

/// One row of the field table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub field: String,
    pub check: CheckKind,
}

impl FieldRule {
    pub fn presence(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            check: CheckKind::Presence,
        }
    }

    pub fn date(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            check: CheckKind::Date,
        }
    }
}

/// The built-in table: four presence checks followed by two date checks.
pub fn default_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::presence("Title"),
        FieldRule::presence("Author"),
        FieldRule::presence("Producer"),
        FieldRule::presence("Creator"),
        FieldRule::date("CreationDate"),
        FieldRule::date("ModDate"),
    ]
}
