use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        report::{CreateReportDto, ReportDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::report::CreateReportParam,
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

#[derive(Deserialize)]
pub struct ReportFilter {
    pub resolved: Option<bool>,
}

/// Report another user to the site admins.
///
/// # Returns
/// - `201 Created` - Report filed
/// - `400 Bad Request` - Invalid input
/// - `404 Not Found` - Reported user does not exist
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = REPORT_TAG,
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report filed", body = ReportDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Reported user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_report(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateReportParam::from_dto(user.id, payload)?;
    let report = ReportService::new(&state.db, &state.events)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(report.into_dto())))
}

/// All reports, optionally filtered by resolution. Site admins only.
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    tag = REPORT_TAG,
    params(("resolved" = Option<bool>, Query, description = "Only return resolved or unresolved reports")),
    responses(
        (status = 200, description = "Reports", body = Vec<ReportDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a site admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reports(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<ReportFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reports = ReportService::new(&state.db, &state.events)
        .get_all(user.id, filter.resolved)
        .await?;
    let reports_dto: Vec<ReportDto> = reports.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reports_dto)))
}

/// Mark a report as resolved and notify the reporter. Site admins only.
#[utoipa::path(
    post,
    path = "/api/admin/reports/{report_id}/resolve",
    tag = REPORT_TAG,
    params(("report_id" = i32, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report resolved", body = ReportDto),
        (status = 400, description = "Report already resolved", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a site admin", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = ReportService::new(&state.db, &state.events)
        .resolve(user.id, report_id)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
