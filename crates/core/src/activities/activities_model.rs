//! Activity domain models.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

use crate::activities::activities_constants::ACTIVITY_DATE_FORMAT;
use crate::errors::ValidationError;

/// A single logged entry as read back from the store.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Identifier assigned by the store at creation.
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Free-text time of day.
    pub time: String,
    pub category: String,
    pub note: String,
    pub amount: i64,
}

/// Input model for creating a new activity.
///
/// Required fields default to empty strings when absent so that `validate`
/// can report every missing field at once.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
    /// Raw amount as entered. Coerced with [`coerce_amount`] when written.
    #[serde(default, deserialize_with = "deserialize_amount_input")]
    pub amount: Option<String>,
}

impl NewActivity {
    /// Validates required fields and the date format.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let missing: Vec<&str> = [
            ("date", &self.date),
            ("time", &self.time),
            ("category", &self.category),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingField(missing.join(", ")));
        }

        if NaiveDate::parse_from_str(self.date.trim(), ACTIVITY_DATE_FORMAT).is_err() {
            return Err(ValidationError::InvalidInput(format!(
                "Invalid date '{}'. Expected YYYY-MM-DD",
                self.date
            )));
        }

        Ok(())
    }

    /// Note to store, empty when absent.
    pub fn note_or_default(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }

    /// Amount to store, see [`coerce_amount`].
    pub fn coerced_amount(&self) -> i64 {
        coerce_amount(self.amount.as_deref())
    }
}

/// Coerces a raw amount input into a non-negative integer.
///
/// Reads the leading run of ASCII digits after an optional `+`, so `"50"`
/// gives 50, `"50.7"` gives 50 and `"12abc"` gives 12. Absent input, input
/// without leading digits, negative input and values that overflow `i64`
/// all give 0. Never fails.
pub fn coerce_amount(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        if !trimmed.is_empty() {
            debug!("Amount '{}' is not a non-negative number, using 0", raw);
        }
        return 0;
    }
    unsigned[..digits_len].parse::<i64>().unwrap_or_else(|_| {
        debug!("Amount '{}' overflows, using 0", raw);
        0
    })
}

/// Store ordering: date descending, then time descending, both compared as
/// literal strings.
pub fn compare_activities(a: &Activity, b: &Activity) -> Ordering {
    b.date.cmp(&a.date).then_with(|| b.time.cmp(&a.time))
}

/// Sorts activities into store ordering. Stable for equal (date, time) pairs.
pub fn sort_activities(activities: &mut [Activity]) {
    activities.sort_by(compare_activities);
}

/// Outcome of a successful clear-all.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClearAllResult {
    pub archived: usize,
}

/// Count and amount total for one category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub total_amount: i64,
}

/// Aggregates over the active activities.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Per-category figures, in the order each category first appears.
    pub categories: Vec<CategorySummary>,
    pub total_count: usize,
    pub total_amount: i64,
}

impl ActivitySummary {
    pub fn from_activities(activities: &[Activity]) -> Self {
        let mut categories: Vec<CategorySummary> = Vec::new();
        for activity in activities {
            match categories
                .iter_mut()
                .find(|c| c.category == activity.category)
            {
                Some(entry) => {
                    entry.count += 1;
                    entry.total_amount = entry.total_amount.saturating_add(activity.amount);
                }
                None => categories.push(CategorySummary {
                    category: activity.category.clone(),
                    count: 1,
                    total_amount: activity.amount,
                }),
            }
        }

        let total_amount = activities
            .iter()
            .fold(0i64, |acc, a| acc.saturating_add(a.amount));

        Self {
            categories,
            total_count: activities.len(),
            total_amount,
        }
    }
}

/// Deserializes a raw amount input. Accepts a string or a number; anything
/// else is treated as absent so that it coerces to zero instead of rejecting
/// the request.
pub fn deserialize_amount_input<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
