use std::path::Path;

use actix_multipart::{Field, Multipart};
use actix_web::web::BytesMut;
use common::error::{AppError, Res};
use futures::StreamExt;

/// One parsed `/sale/new` submission. Text fields that never arrive stay
/// empty; this path performs no validation.
#[derive(Debug, Default)]
pub struct SaleSubmission {
    pub description: String,
    pub address: String,
    pub zip_code: String,
    pub customer_first: String,
    pub customer_last: String,
    pub phone: String,
    pub payment_method: String,
    pub price: f64,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub proof_image: Option<String>,
}

/// Drains a multipart payload, writing each named attachment into
/// `upload_dir` and collecting the text fields.
///
/// Attachments are stored under the literal client-supplied filename: a
/// repeated filename overwrites the earlier file, and nothing inspects
/// content type or size.
/// Files hit the disk before the caller commits the sale row; a failed
/// commit leaves them behind.
pub async fn collect_submission(mut payload: Multipart, upload_dir: &Path) -> Res<SaleSubmission> {
    let mut submission = SaleSubmission::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("Malformed multipart payload: {e}")))?;
        let (name, filename) = {
            let disposition = field.content_disposition();
            (
                disposition.get_name().unwrap_or("").to_string(),
                disposition.get_filename().map(str::to_string),
            )
        };

        match name.as_str() {
            "before_image" => {
                submission.before_image = save_attachment(&mut field, filename, upload_dir).await?;
            }
            "after_image" => {
                submission.after_image = save_attachment(&mut field, filename, upload_dir).await?;
            }
            "proof_image" => {
                submission.proof_image = save_attachment(&mut field, filename, upload_dir).await?;
            }
            _ => {
                let text = read_text(&mut field).await?;
                match name.as_str() {
                    "description" => submission.description = text,
                    "address" => submission.address = text,
                    "zip_code" => submission.zip_code = text,
                    "customer_first" => submission.customer_first = text,
                    "customer_last" => submission.customer_last = text,
                    "phone" => submission.phone = text,
                    "payment_method" => submission.payment_method = text,
                    "price" => submission.price = parse_price(&text)?,
                    _ => {}
                }
            }
        }
    }

    Ok(submission)
}

/// Empty or missing input becomes 0.0; only non-empty unparseable input is
/// rejected.
pub fn parse_price(raw: &str) -> Res<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid price: {trimmed}")))
}

async fn read_field_bytes(field: &mut Field) -> Res<BytesMut> {
    let mut bytes = BytesMut::new();
    while let Some(chunk) = field.next().await {
        let chunk =
            chunk.map_err(|e| AppError::BadRequest(format!("Malformed multipart field: {e}")))?;
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

async fn read_text(field: &mut Field) -> Res<String> {
    let bytes = read_field_bytes(field).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes the attachment under its original filename and returns that name,
/// or `None` (writing nothing) when the part carries no filename. The field
/// is drained either way so the stream can advance.
async fn save_attachment(
    field: &mut Field,
    filename: Option<String>,
    upload_dir: &Path,
) -> Res<Option<String>> {
    let bytes = read_field_bytes(field).await?;

    match filename.filter(|f| !f.is_empty()) {
        Some(filename) => {
            tokio::fs::write(upload_dir.join(&filename), &bytes).await?;
            Ok(Some(filename))
        }
        None => Ok(None),
    }
}
