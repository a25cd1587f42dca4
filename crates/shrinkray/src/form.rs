//! Request form extraction.
//!
//! `POST /resize_batch` accepts either multipart/form-data (the landing
//! page form, required for file uploads) or a url-encoded body (URL-only
//! submissions). Both reduce to the same `ResizeForm`.

use actix_multipart::{Field, Multipart};
use actix_web::http::header;
use actix_web::{web, HttpRequest};
use futures_util::StreamExt;
use serde::Deserialize;

use shrinkray_core::UploadedBlob;

use crate::error::ApiError;

/// The decoded submission: a newline-delimited URL block, the uploaded
/// files in form order, and the raw width string (absent when the field
/// was omitted).
#[derive(Debug, Default)]
pub struct ResizeForm {
    pub image_urls: String,
    pub new_width: Option<String>,
    pub files: Vec<UploadedBlob>,
}

/// Url-encoded bodies carry no files.
#[derive(Debug, Default, Deserialize)]
struct UrlEncodedForm {
    #[serde(default)]
    image_urls: String,
    #[serde(default)]
    new_width: Option<String>,
}

impl ResizeForm {
    /// Extract the form from the request, dispatching on content type.
    pub async fn from_request(
        req: &HttpRequest,
        payload: web::Payload,
    ) -> Result<Self, ApiError> {
        if is_multipart(req) {
            Self::from_multipart(Multipart::new(req.headers(), payload)).await
        } else {
            Self::from_urlencoded(payload).await
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = ResizeForm::default();

        while let Some(entry) = multipart.next().await {
            let mut field = entry.map_err(|e| ApiError::BadForm(e.to_string()))?;
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                "image_urls" => {
                    let bytes = read_field(&mut field).await?;
                    form.image_urls = String::from_utf8_lossy(&bytes).into_owned();
                }
                "new_width" => {
                    let bytes = read_field(&mut field).await?;
                    form.new_width = Some(String::from_utf8_lossy(&bytes).into_owned());
                }
                "files" => {
                    let filename = field
                        .content_disposition()
                        .and_then(|cd| cd.get_filename())
                        .map(str::to_string);
                    let bytes = read_field(&mut field).await?;
                    form.files.push(UploadedBlob { bytes, filename });
                }
                // Unknown fields are drained so the stream can advance
                _ => {
                    read_field(&mut field).await?;
                }
            }
        }

        Ok(form)
    }

    async fn from_urlencoded(mut payload: web::Payload) -> Result<Self, ApiError> {
        let mut body = web::BytesMut::new();
        while let Some(chunk) = payload.next().await {
            let chunk = chunk.map_err(|e| ApiError::BadForm(e.to_string()))?;
            body.extend_from_slice(&chunk);
        }

        let parsed: UrlEncodedForm = serde_urlencoded::from_bytes(&body)
            .map_err(|e| ApiError::BadForm(e.to_string()))?;

        Ok(ResizeForm {
            image_urls: parsed.image_urls,
            new_width: parsed.new_width,
            files: Vec::new(),
        })
    }
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/")
        })
}

/// Accumulate one field's bytes, consuming its stream fully.
async fn read_field(field: &mut Field) -> Result<Vec<u8>, ApiError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| ApiError::BadForm(e.to_string()))?;
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}
