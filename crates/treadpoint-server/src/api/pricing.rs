use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct CategoryItem {
    pub slug: String,
    pub label: String,
    pub default_diameter: u32,
    /// Ascending diameters this category has tables for; empty when the
    /// price book is degraded or lacks the category.
    pub diameters: Vec<u32>,
    pub slider_min: Option<u32>,
    pub slider_max: Option<u32>,
}

/// `GET /api/v1/pricing/categories` — the tab set: every registry category
/// with its slider bounds.
pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<CategoryItem>>> {
    let data = state
        .categories
        .categories
        .iter()
        .map(|category| {
            let diameters = state
                .snapshot
                .price_book
                .diameters(&category.slug)
                .unwrap_or_default();
            CategoryItem {
                slug: category.slug.clone(),
                label: category.label.clone(),
                default_diameter: category.default_diameter,
                slider_min: diameters.first().copied(),
                slider_max: diameters.last().copied(),
                diameters,
            }
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

#[derive(Debug, Deserialize)]
pub(super) struct TableQuery {
    pub category: String,
    pub diameter: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(super) struct TableData {
    pub category: String,
    /// The diameter the client asked for (registry default when omitted).
    pub requested_diameter: u32,
    /// The diameter actually served: nearest available to the request.
    pub diameter: u32,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// `GET /api/v1/pricing/table?category=&diameter=` — the table to render,
/// resolved to the nearest available diameter. The client memoizes the
/// effective `(category, diameter)` pair and skips identical rebuilds.
pub(super) async fn get_table(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<TableQuery>,
) -> Result<Json<ApiResponse<TableData>>, ApiError> {
    let requested = params.diameter.or_else(|| {
        state
            .categories
            .get(&params.category)
            .map(|c| c.default_diameter)
    });
    let Some(requested) = requested else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("unknown vehicle category: {}", params.category),
        ));
    };

    let view = state
        .snapshot
        .price_book
        .resolve(&params.category, requested)
        .map_err(|e| ApiError::new(req_id.0.clone(), "not_found", e.to_string()))?;

    Ok(Json(ApiResponse {
        data: TableData {
            category: params.category,
            requested_diameter: requested,
            diameter: view.diameter,
            columns: view.columns.to_vec(),
            rows: view.rows.to_vec(),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
