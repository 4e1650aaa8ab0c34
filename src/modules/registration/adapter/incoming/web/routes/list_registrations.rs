use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use super::registration_view::RegistrationView;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::{
        auth::application::domain::AdminSession,
        registration::application::domain::{RegistrationFilter, RegistrationStatusFilter},
    },
    shared::{api::ApiResponse, filter::parse_date_param},
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRegistrationsQuery {
    /// Case-insensitive match on full name, school or email
    pub search: Option<String>,
    /// `all`, `pending`, `approved` or `rejected`
    #[param(example = "pending")]
    pub status: Option<String>,
    #[serde(alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(alias = "endDate")]
    pub end_date: Option<String>,
}

/// List legacy registrations
#[utoipa::path(
    get,
    path = "/api/admin/registrations",
    tag = "registrations",
    params(ListRegistrationsQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Matching registrations", body = inline(SuccessResponse<Vec<RegistrationView>>)),
        (status = 400, description = "Invalid status or date", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
    )
)]
#[get("/api/admin/registrations")]
pub async fn list_registrations_handler(
    _session: AdminSession,
    query: web::Query<ListRegistrationsQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let query = query.into_inner();

    let status = match query.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => RegistrationStatusFilter::All,
        Some(raw) => match raw.parse::<RegistrationStatusFilter>() {
            Ok(status) => status,
            Err(e) => return ApiResponse::bad_request("INVALID_STATUS", &e.to_string()),
        },
    };

    let (Ok(start_date), Ok(end_date)) = (
        parse_date_param(query.start_date.as_deref()),
        parse_date_param(query.end_date.as_deref()),
    ) else {
        return ApiResponse::bad_request("INVALID_DATE", "Dates must be formatted as YYYY-MM-DD");
    };

    let filter = RegistrationFilter::new(query.search, status, start_date, end_date);
    debug!(?filter, "Listing registrations");

    let registrations: Vec<RegistrationView> = data
        .registrations
        .list
        .execute(filter)
        .await
        .into_iter()
        .map(RegistrationView::from)
        .collect();

    ApiResponse::success(registrations)
}
