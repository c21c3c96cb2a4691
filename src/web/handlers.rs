use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Pager, QueryParams, ResultPage, SearchIndex};
use crate::config::PageConfig;
use crate::web::detail;
use crate::web::error::{CatalogError, ErrorResponse};
use crate::web::render::CatalogView;
use crate::web::router::{AppState, RequestId};

/// Query string of the catalog page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    /// cca3 of the country shown in the detail overlay.
    #[serde(default)]
    pub country: Option<String>,
    /// `1` renders only the results fragment.
    #[serde(default)]
    pub partial: Option<String>,
}

impl PageQuery {
    pub fn params(&self) -> QueryParams {
        QueryParams {
            name: self.name.clone(),
            sort: self.sort.clone(),
            page: self.page.clone(),
        }
    }

    pub fn is_partial(&self) -> bool {
        self.partial.as_deref() == Some("1")
    }
}

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    #[serde(flatten)]
    pub page: ResultPage,
    pub pager: Pager,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Malformed query strings degrade to "no parameters".
fn permissive<T: Default>(query: Result<Query<T>, QueryRejection>) -> T {
    match query {
        Ok(Query(value)) => value,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring malformed query string");
            T::default()
        }
    }
}

pub async fn catalog_page(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    let query = permissive(query);
    let page_config = state.config().get().page;

    match render_catalog(&state, &page_config, &query).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Catalog page failed");
            ErrorResponse::html(&err, &request_id.0, state.renderer(), &page_config.title)
        }
    }
}

async fn render_catalog(
    state: &AppState,
    page_config: &PageConfig,
    query: &PageQuery,
) -> Result<String, CatalogError> {
    let records = state.source().fetch_all().await?;
    let index = SearchIndex::build(&records);
    let params = query.params();
    let result = catalog::process(&records, &index, &params);
    let detail = detail::select_from_query(&records, query.country.as_deref());

    let view = CatalogView::build(page_config, &params, &result, &detail);
    let html = if query.is_partial() {
        state.renderer().render_results(&view)?
    } else {
        state.renderer().render_page(&view)?
    };
    Ok(html)
}

pub async fn countries_api(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Response {
    let params = permissive(query);

    let records = match state.source().fetch_all().await {
        Ok(records) => records,
        Err(err) => {
            let err = CatalogError::from(err);
            tracing::error!(error = %err, "Countries API failed");
            return ErrorResponse::json(&err, &request_id.0);
        }
    };

    let index = SearchIndex::build(&records);
    let page = catalog::process(&records, &index, &params);
    let pager = Pager::new(page.total, page.limit, page.offset);

    Json(CountriesResponse { page, pager }).into_response()
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "countries-catalog".to_string(),
    })
}
