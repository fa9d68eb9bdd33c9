use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use daylog_core::activities::NewActivity as CoreNewActivity;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{
        Activity, ActivityListQuery, ActivityListResponse, ActivitySummaryResponse,
        DeleteActivityRequest, MessageResponse, NewActivity,
    },
};

#[utoipa::path(
    get,
    path = "/api/activities",
    params(ActivityListQuery),
    responses(
        (status = 200, body = ActivityListResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub(crate) async fn list_activities(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ActivityListQuery>, QueryRejection>,
) -> ApiResult<Json<ActivityListResponse>> {
    let Query(query) = query?;
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let activities = match category {
        Some(category) => {
            state
                .activity_service
                .get_activities_by_category(category)
                .await?
        }
        None => state.activity_service.get_activities().await?,
    };
    Ok(Json(ActivityListResponse {
        success: true,
        data: activities.into_iter().map(Activity::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/activities",
    request_body = NewActivity,
    responses(
        (status = 201, body = MessageResponse),
        (status = 400, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub(crate) async fn create_activity(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewActivity>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;
    let new_activity = CoreNewActivity::from(payload);
    new_activity.validate()?;

    let created = state.activity_service.create_activity(new_activity).await?;
    tracing::debug!("Created activity {}", created.id);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Activity created")),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/activities",
    request_body = DeleteActivityRequest,
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub(crate) async fn delete_activities(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DeleteActivityRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(request) = payload?;

    if request.clear_all == Some(true) {
        let result = state.activity_service.clear_all_activities().await?;
        tracing::info!("Cleared {} activities", result.archived);
        return Ok(Json(MessageResponse::new("All activities cleared")));
    }

    match request.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => {
            state.activity_service.delete_activity(id).await?;
            Ok(Json(MessageResponse::new("Activity deleted")))
        }
        _ => Err(ApiError::BadRequest("Invalid id".to_string())),
    }
}

#[utoipa::path(
    get,
    path = "/api/activities/summary",
    responses(
        (status = 200, body = ActivitySummaryResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub(crate) async fn get_activity_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ActivitySummaryResponse>> {
    let summary = state.activity_service.get_activity_summary().await?;
    Ok(Json(ActivitySummaryResponse {
        success: true,
        data: summary.into(),
    }))
}

async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/activities",
            get(list_activities)
                .post(create_activity)
                .delete(delete_activities)
                .fallback(method_not_allowed),
        )
        .route("/activities/summary", get(get_activity_summary))
}
