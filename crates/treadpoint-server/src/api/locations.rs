use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use treadpoint_directory::{filter, highlight, normalize_search_text, Location};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct DirectoryQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct DirectoryData {
    pub count: usize,
    pub items: Vec<LocationItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct LocationItem {
    pub id: String,
    pub name: String,
    pub area: String,
    pub region: String,
    pub address: String,
    pub route: String,
    pub phone_tel: String,
    pub phone_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<HighlightedFields>,
}

/// Card fields as escaped markup with `<mark>` around query matches,
/// present only when the request carried a non-empty query.
#[derive(Debug, Serialize)]
pub(super) struct HighlightedFields {
    pub name: String,
    pub area: String,
    pub region: String,
    pub address: String,
    pub phone: String,
}

fn to_item(location: &Location, query: &str) -> LocationItem {
    let highlighted = if query.is_empty() {
        None
    } else {
        Some(HighlightedFields {
            name: highlight(&location.name, query),
            area: highlight(&location.area, query),
            region: highlight(&location.region, query),
            address: highlight(&location.address, query),
            phone: highlight(&location.phone.display, query),
        })
    };

    LocationItem {
        id: location.id.clone(),
        name: location.name.clone(),
        area: location.area.clone(),
        region: location.region.clone(),
        address: location.address.clone(),
        route: location.route.clone(),
        phone_tel: location.phone.tel.clone(),
        phone_display: location.phone.display.clone(),
        highlighted,
    }
}

/// `GET /api/v1/locations?q=` — the directory, filtered by a free-text
/// query. The query is normalized with the same function that built the
/// records' search keys; matches come back in original order.
pub(super) async fn list_locations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<DirectoryQuery>,
) -> Json<ApiResponse<DirectoryData>> {
    let query = normalize_search_text(params.q.as_deref().unwrap_or_default());
    let matches = filter(&state.snapshot.locations, &query);

    let items: Vec<LocationItem> = matches
        .into_iter()
        .map(|location| to_item(location, &query))
        .collect();

    Json(ApiResponse {
        data: DirectoryData {
            count: items.len(),
            items,
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[derive(Debug, Serialize)]
pub(super) struct LocationPinItem {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub area: String,
    pub address: String,
    pub route: String,
    pub phone_display: String,
}

/// `GET /api/v1/locations/pins` — records with finite coordinates only,
/// for the map widget.
pub(super) async fn list_location_pins(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<LocationPinItem>>> {
    let data = state
        .snapshot
        .locations
        .iter()
        .filter(|location| location.has_coordinates())
        .map(|location| LocationPinItem {
            id: location.id.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            name: location.name.clone(),
            area: location.area.clone(),
            address: location.address.clone(),
            route: location.route.clone(),
            phone_display: location.phone.display.clone(),
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
