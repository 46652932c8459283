//! Journal entry handlers.

use actix_web::{HttpResponse, web};

use journal_core::DeleteOutcome;
use journal_core::validation::validate_entry;
use journal_shared::dto::JournalEntryDto;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Run field validation before anything reaches the service.
fn check_valid(dto: &JournalEntryDto) -> Result<(), AppError> {
    let errors = validate_entry(dto);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(
            errors.iter().map(ToString::to_string).collect(),
        ))
    }
}

/// POST /entry
pub async fn create_entry(
    state: web::Data<AppState>,
    body: web::Json<JournalEntryDto>,
) -> AppResult<HttpResponse> {
    let dto = body.into_inner();
    check_valid(&dto)?;

    let created = state.entries.create_entry(&dto).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// GET /entry
pub async fn get_all_entries(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let entries = state.entries.get_all_entries().await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// GET /entry/{id}
pub async fn get_entry(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.entries.get_entry_by_id(&id).await? {
        Some(dto) => Ok(HttpResponse::Ok().json(dto)),
        None => Err(AppError::NotFound(format!("No entry found with id {}", id))),
    }
}

/// PUT /entry/{id}
pub async fn update_entry(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<JournalEntryDto>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let dto = body.into_inner();
    check_valid(&dto)?;

    match state.entries.update_entry(&id, &dto).await? {
        Some(updated) => Ok(HttpResponse::Ok().json(updated)),
        None => Err(AppError::NotFound(format!("No entry found with id {}", id))),
    }
}

/// DELETE /entry/{id}
pub async fn delete_entry(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.entries.delete_entry(&id).await? {
        DeleteOutcome::Deleted => Ok(HttpResponse::NoContent().finish()),
        DeleteOutcome::NotFound => {
            Err(AppError::NotFound(format!("No entry found with id {}", id)))
        }
    }
}
