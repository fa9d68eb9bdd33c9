//! Mapping between `Activity` and Notion page properties.

use log::debug;
use serde_json::{json, Map, Value};

use daylog_core::activities::{Activity, NewActivity};

/// Longest `text.content` Notion accepts in a single rich-text fragment.
pub const RICH_TEXT_FRAGMENT_LIMIT: usize = 2000;

/// Names of the database properties holding each activity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySchema {
    /// `date` property.
    pub date: String,
    /// `rich_text` property.
    pub time: String,
    /// `select` property.
    pub category: String,
    /// `rich_text` property.
    pub note: String,
    /// `number` property.
    pub amount: String,
}

impl Default for PropertySchema {
    fn default() -> Self {
        Self {
            date: "Tanggal".to_string(),
            time: "Waktu".to_string(),
            category: "Kategori".to_string(),
            note: "Catatan".to_string(),
            amount: "Jumlah".to_string(),
        }
    }
}

/// Encodes a new activity as the `properties` object of a page create call.
///
/// The note defaults to an empty string and the amount is coerced, so this
/// never fails.
pub fn encode_properties(schema: &PropertySchema, activity: &NewActivity) -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert(
        schema.date.clone(),
        json!({ "date": { "start": activity.date.trim() } }),
    );
    properties.insert(
        schema.time.clone(),
        json!({ "rich_text": rich_text_fragments(&activity.time) }),
    );
    properties.insert(
        schema.category.clone(),
        json!({ "select": { "name": activity.category } }),
    );
    properties.insert(
        schema.note.clone(),
        json!({ "rich_text": rich_text_fragments(activity.note_or_default()) }),
    );
    properties.insert(
        schema.amount.clone(),
        json!({ "number": activity.coerced_amount() }),
    );
    properties
}

/// Splits text into rich-text fragments within the per-fragment limit.
/// Empty text still yields one empty fragment.
fn rich_text_fragments(text: &str) -> Vec<Value> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![json!({ "text": { "content": "" } })];
    }
    chars
        .chunks(RICH_TEXT_FRAGMENT_LIMIT)
        .map(|chunk| json!({ "text": { "content": chunk.iter().collect::<String>() } }))
        .collect()
}

/// Decodes a page object into an `Activity`.
///
/// Every access tolerates missing or mistyped structure and falls back to an
/// empty string (or 0 for the amount). Fallbacks are logged at debug level.
pub fn decode_page(schema: &PropertySchema, page: &Value) -> Activity {
    let id = page
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let properties = page.get("properties");
    let property = |name: &str| properties.and_then(|p| p.get(name));

    let mut defaulted: Vec<&str> = Vec::new();

    let date = property(&schema.date)
        .and_then(|p| p.pointer("/date/start"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let time = property(&schema.time).and_then(rich_text_plain);
    let category = property(&schema.category)
        .and_then(|p| p.pointer("/select/name"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let note = property(&schema.note).and_then(rich_text_plain);
    let amount = property(&schema.amount)
        .and_then(|p| p.get("number"))
        .and_then(number_as_i64);

    let mut take = |value: Option<String>, name: &'static str| {
        value.unwrap_or_else(|| {
            defaulted.push(name);
            String::new()
        })
    };
    let date = take(date, "date");
    let time = take(time, "time");
    let category = take(category, "category");
    let note = take(note, "note");
    let amount = amount.unwrap_or_else(|| {
        defaulted.push("amount");
        0
    });

    if !defaulted.is_empty() {
        debug!(
            "Page '{}' decoded with defaults for: {}",
            id,
            defaulted.join(", ")
        );
    }

    Activity {
        id,
        date,
        time,
        category,
        note,
        amount,
    }
}

/// Concatenates the fragments of a `rich_text` property. An empty fragment
/// list reads as an empty string; a missing or non-array value is absent.
fn rich_text_plain(property: &Value) -> Option<String> {
    let fragments = property.get("rich_text")?.as_array()?;
    Some(
        fragments
            .iter()
            .filter_map(|fragment| {
                fragment
                    .pointer("/text/content")
                    .or_else(|| fragment.get("plain_text"))
                    .and_then(Value::as_str)
            })
            .collect(),
    )
}

fn number_as_i64(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}
