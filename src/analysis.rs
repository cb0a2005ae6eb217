use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::{CheckKind, DocumentMetadata, FieldRule, MetadataValue};

// ── CheckResult ───────────────────────────────────────────────────────────────

/// Outcome of one field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub field: String,
    pub kind: CheckKind,
    pub passed: bool,
}

impl CheckResult {
    /// The display key, e.g. `"Author present"` or `"ModDate valid"`.
    pub fn key(&self) -> String {
        format!("{}{}", self.field, self.kind.suffix())
    }
}

// ── Analysis ──────────────────────────────────────────────────────────────────

/// Ordered results of running a field table against one metadata mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Analysis {
    checks: Vec<CheckResult>,
}

impl Analysis {
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Look up a check by its display key.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.checks.iter().find(|c| c.key() == key).map(|c| c.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Percentage of passing checks, or `None` when nothing was checked.
    pub fn completeness_score(&self) -> Option<f64> {
        if self.checks.is_empty() {
            return None;
        }
        Some(self.passed_count() as f64 / self.checks.len() as f64 * 100.0)
    }

    pub fn is_complete(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Field names of failing checks, in check order.
    ///
    /// Derived by stripping the ` present` / ` valid` suffix from each failing
    /// key. A field failing both kinds of check is listed twice.
    pub fn recommendations(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| {
                let key = c.key();
                key.strip_suffix(c.kind.suffix())
                    .unwrap_or(&key)
                    .to_owned()
            })
            .collect()
    }
}

impl FromIterator<CheckResult> for Analysis {
    fn from_iter<I: IntoIterator<Item = CheckResult>>(iter: I) -> Self {
        Self {
            checks: iter.into_iter().collect(),
        }
    }
}

// ── Checks ────────────────────────────────────────────────────────────────────

/// Run `rules` against `metadata`.
///
/// Presence rules always yield a result. Date rules yield a result only when
/// the field exists in the mapping, so a document without dates is scored
/// over fewer checks.
///
/// ```
/// use pdfmetadataanalyzer::{analyze_metadata, default_rules, DocumentMetadata, DEFAULT_DATE_FORMAT};
///
/// let metadata: DocumentMetadata = [("Title", "Q3"), ("CreationDate", "20230615120000")]
///     .into_iter()
///     .collect();
/// let analysis = analyze_metadata(&metadata, &default_rules(), DEFAULT_DATE_FORMAT);
///
/// assert_eq!(analysis.len(), 5);
/// assert_eq!(analysis.get("Title present"), Some(true));
/// assert_eq!(analysis.get("CreationDate valid"), Some(true));
/// assert_eq!(analysis.get("ModDate valid"), None);
/// ```
pub fn analyze_metadata(
    metadata: &DocumentMetadata,
    rules: &[FieldRule],
    date_format: &str,
) -> Analysis {
    rules
        .iter()
        .filter_map(|rule| {
            let passed = match rule.check {
                CheckKind::Presence => metadata.contains(&rule.field),
                CheckKind::Date => is_valid_date(metadata.get(&rule.field)?, date_format),
            };
            Some(CheckResult {
                field: rule.field.clone(),
                kind: rule.check,
                passed,
            })
        })
        .collect()
}

/// Non-text values pass without a parse attempt.
///
/// chrono skips whitespace in the input and accepts second `60`; both are
/// rejected so the text must match the format exactly.
fn is_valid_date(value: &MetadataValue, date_format: &str) -> bool {
    let Some(text) = value.as_text() else {
        return true;
    };
    if text.contains(char::is_whitespace) && !date_format.contains(char::is_whitespace) {
        return false;
    }
    match NaiveDateTime::parse_from_str(text, date_format) {
        Ok(dt) => dt.nanosecond() < 1_000_000_000,
        Err(_) => false,
    }
}
