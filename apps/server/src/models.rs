use daylog_core::activities as core_activities;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    pub category: String,
    pub note: String,
    pub amount: i64,
}

impl From<core_activities::Activity> for Activity {
    fn from(a: core_activities::Activity) -> Self {
        Self {
            id: a.id,
            date: a.date,
            time: a.time,
            category: a.category,
            note: a.note,
            amount: a.amount,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    /// One of `Competitive Trading`, `Fee`, `Cair AirDrop`.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
    /// String or number; anything unparseable is stored as 0.
    #[serde(
        default,
        deserialize_with = "core_activities::deserialize_amount_input"
    )]
    pub amount: Option<String>,
}

impl From<NewActivity> for core_activities::NewActivity {
    fn from(a: NewActivity) -> Self {
        Self {
            date: a.date,
            time: a.time,
            category: a.category,
            note: a.note,
            amount: a.amount,
        }
    }
}

/// Body of `DELETE /activities`: either `clearAll: true` or an `id`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteActivityRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub clear_all: Option<bool>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct ActivityListQuery {
    /// Only return activities with exactly this category.
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub total_amount: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub categories: Vec<CategorySummary>,
    pub total_count: usize,
    pub total_amount: i64,
}

impl From<core_activities::ActivitySummary> for ActivitySummary {
    fn from(s: core_activities::ActivitySummary) -> Self {
        Self {
            categories: s
                .categories
                .into_iter()
                .map(|c| CategorySummary {
                    category: c.category,
                    count: c.count,
                    total_amount: c.total_amount,
                })
                .collect(),
            total_count: s.total_count,
            total_amount: s.total_amount,
        }
    }
}

// Response envelopes. Every response carries `success`.

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ActivityListResponse {
    pub success: bool,
    pub data: Vec<Activity>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ActivitySummaryResponse {
    pub success: bool,
    pub data: ActivitySummary,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    /// Underlying failure, only on 500s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    pub fn server_error(details: impl Into<String>) -> Self {
        Self {
            success: false,
            error: "server error".to_string(),
            details: Some(details.into()),
        }
    }
}
