//! Listing form extractor
//!
//! Create and update accept either `multipart/form-data` (text fields plus an
//! optional `image` file) or a JSON body with the same text fields. Any
//! `status`/`message` sent by the client is ignored.

use axum::Json;
use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{StatusCode, header};
use platform::upload::ImageUpload;

use crate::application::ListingInput;
use crate::domain::repository::ListingRepository;
use crate::error::BookError;
use crate::presentation::dto::ListingBody;
use crate::presentation::handlers::BooksAppState;

/// Parsed create/update submission
#[derive(Debug)]
pub struct ListingForm(pub ListingInput);

impl<R> FromRequest<BooksAppState<R>> for ListingForm
where
    R: ListingRepository + Clone + Send + Sync + 'static,
{
    type Rejection = BookError;

    async fn from_request(req: Request, state: &BooksAppState<R>) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"));

        if !is_multipart {
            let Json(body) = Json::<ListingBody>::from_request(req, state)
                .await
                .map_err(|_| BookError::InvalidBody)?;

            return Ok(Self(ListingInput {
                title: body.title,
                author: body.author,
                condition: body.condition,
                description: body.description,
                image: None,
            }));
        }

        let max_bytes = state.config.max_image_bytes;
        let reject = |e: MultipartError| multipart_error(e, max_bytes);

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|_| BookError::InvalidBody)?;

        let mut input = ListingInput::default();
        while let Some(field) = multipart.next_field().await.map_err(reject)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "title" => input.title = Some(field.text().await.map_err(reject)?),
                "author" => input.author = Some(field.text().await.map_err(reject)?),
                "condition" => input.condition = Some(field.text().await.map_err(reject)?),
                "description" => input.description = Some(field.text().await.map_err(reject)?),
                "image" => input.image = Some(read_image(field).await.map_err(reject)?),
                _ => {}
            }
        }

        Ok(Self(input))
    }
}

async fn read_image(field: Field<'_>) -> Result<ImageUpload, MultipartError> {
    let file_name = field.file_name().map(str::to_owned);
    let content_type = field.content_type().map(str::to_owned);
    let bytes = field.bytes().await?;

    Ok(ImageUpload {
        file_name,
        content_type,
        bytes: bytes.to_vec(),
    })
}

/// Body-limit overruns surface as the image size error
fn multipart_error(err: MultipartError, max_bytes: usize) -> BookError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        BookError::ImageTooLarge { max_bytes }
    } else {
        tracing::debug!(error = %err, "Malformed multipart body");
        BookError::InvalidBody
    }
}
