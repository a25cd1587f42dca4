//! Request handlers for the landing page and the batch endpoint.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use shrinkray_core::{parse_url_lines, Deliverable};

use crate::error::Result;
use crate::form::ResizeForm;
use crate::page;
use crate::server::AppState;

/// `GET /`: the upload/URL submission page.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page::INDEX_HTML)
}

/// `POST /resize_batch`: run the batch and return the deliverable as an
/// attachment: a bare JPEG for one success, a zip archive for several.
pub async fn resize_batch(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let form = ResizeForm::from_request(&req, payload).await?;

    let urls = parse_url_lines(&form.image_urls);
    let raw_width = form
        .new_width
        .unwrap_or_else(|| state.default_width.to_string());

    let items = state.processor.run(&urls, form.files, &raw_width).await?;
    let deliverable = state.packager.package(&items)?;

    Ok(attachment(deliverable))
}

fn attachment(deliverable: Deliverable) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(deliverable.content_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", deliverable.filename),
        ))
        .body(deliverable.bytes)
}
