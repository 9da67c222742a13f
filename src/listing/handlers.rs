//! Listing HTTP Handlers
//!
//! The listing is served from the catch-all route: paths under `/api/` get the
//! JSON shape, everything else gets a small server-rendered HTML page with
//! pagination links. Both share the same parse-page / read-cache pipeline.

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Deserialize;

use super::paginator::{offset_for, parse_page_param, PageView, PAGE_SIZE};
use super::types::{to_places, ListingResponse};
use crate::app::AppState;
use crate::backend::types::PlaceHit;
use crate::error::{Result, ServiceError};

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    pub page: Option<String>,
}

/// Catch-all listing handler reproducing the original route dispatch:
/// `/api/...` is answered in JSON, any other path with HTML.
pub async fn dispatch(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<ListingParams>,
) -> Result<Response> {
    let (hits, total, page) = load_page(&state, &params).await?;

    if uri.path().starts_with("/api/") {
        let body = ListingResponse {
            name: "Places",
            total,
            places: to_places(&hits),
        };
        Ok(Json(body).into_response())
    } else {
        let view = PageView::new(page, PAGE_SIZE, total);
        Ok(Html(render_listing(&hits, total, &view)).into_response())
    }
}

/// Parses the page parameter, reads the cached page, and rewrites any
/// out-of-range error so the message names the page the client sent rather
/// than the internal offset.
async fn load_page(
    state: &AppState,
    params: &ListingParams,
) -> Result<(Vec<PlaceHit>, usize, i64)> {
    let page = parse_page_param(params.page.as_deref())?;
    let offset = offset_for(page, PAGE_SIZE);

    let (hits, total) = state
        .cache
        .get_page(PAGE_SIZE, offset)
        .await
        .map_err(|err| match err {
            ServiceError::InvalidPage(_) => ServiceError::InvalidPage(page.to_string()),
            other => other,
        })?;

    Ok((hits, total, page))
}

/// Renders the HTML listing. The HTML page intentionally shows hits as stored
/// (no coordinate parsing), so a place with a bad location still appears here
/// even though the JSON listing drops it.
fn render_listing(hits: &[PlaceHit], total: usize, view: &PageView) -> String {
    let mut items = String::new();
    for hit in hits {
        items.push_str(&format!(
            "\t<li>\n\t\t<div>{}</div>\n\t\t<div>{}</div>\n\t\t<div>{}</div>\n\t</li>\n",
            escape(&hit.fields.name),
            escape(&hit.fields.address),
            escape(&hit.fields.phone),
        ));
    }

    let mut nav = String::from("    <a href=\"/?page=1\">First</a>\n");
    if let Some(prev) = view.prev_page {
        nav.push_str(&format!("    <a href=\"/?page={}\">Previous</a>\n", prev));
    }
    if let Some(next) = view.next_page {
        nav.push_str(&format!("    <a href=\"/?page={}\">Next</a>\n", next));
    }
    nav.push_str(&format!(
        "    <a href=\"/?page={}\">Last</a>\n",
        view.total_pages
    ));

    format!(
        "<!doctype html>\n<html>\n<head>\n\t<meta charset=\"utf-8\">\n\t<title>Places</title>\n\
         \t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n</head>\n\n\
         <body>\n<h5>Total: {total}</h5>\n<ul>\n{items}</ul>\n<div>\n{nav}</div>\n</body>\n</html>\n"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
