//! Owner-scoped note routes:
//! - POST /notes - Create a note
//! - GET /notes - List the caller's notes
//! - GET /notes/{id} - Fetch one note
//! - PUT /notes/{id} - Replace a note's content
//! - DELETE /notes/{id} - Delete a note
//!
//! Every route requires a bearer access token; the extractor rejects the
//! request before any handler body runs.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;
use uuid::Uuid;

use notes_core::{Note, NotePayload, validate_note_payload};
use notes_store::{NewNote, NoteRow, NoteUpdate};

use crate::auth::AuthenticatedOwner;
use crate::error::{ApiError, ApiResult};
use crate::routes::Envelope;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

/// Data payload for POST /notes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCreated {
    /// The created note's ID.
    pub note_id: Uuid,
}

/// Data payload for GET /notes.
#[derive(Debug, Serialize)]
pub struct NoteList {
    pub notes: Vec<Note>,
}

/// Data payload for GET /notes/{id}.
#[derive(Debug, Serialize)]
pub struct SingleNote {
    pub note: Note,
}

fn note_from_row(row: NoteRow) -> Note {
    Note {
        id: row.id,
        title: row.title,
        body: row.body,
        tags: row.tags,
        owner: row.owner,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /notes - Create a note owned by the caller.
///
/// # Response
///
/// - 201 Created: `{ "status": "success", "message": ..., "data": { "noteId": ... } }`
/// - 400 Bad Request: payload failed validation
/// - 401 Unauthorized: missing/invalid credential
async fn add_note(
    State(state): State<AppState>,
    owner: AuthenticatedOwner,
    Json(payload): Json<NotePayload>,
) -> ApiResult<(StatusCode, Json<Envelope<NoteCreated>>)> {
    validate_note_payload(&payload)?;

    let note_id = state
        .notes()
        .add_note(NewNote {
            title: payload.title,
            body: payload.body,
            tags: payload.tags,
            owner: owner.id,
        })
        .await?;

    tracing::info!(note_id = %note_id, owner = %owner.id, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(NoteCreated { note_id }).with_message("note added successfully")),
    ))
}

/// GET /notes - List notes owned by the caller, newest first.
async fn list_notes(
    State(state): State<AppState>,
    owner: AuthenticatedOwner,
) -> ApiResult<Json<Envelope<NoteList>>> {
    let rows = state.notes().get_notes(owner.id).await?;
    let notes = rows.into_iter().map(note_from_row).collect();

    Ok(Json(Envelope::data(NoteList { notes })))
}

/// GET /notes/{id} - Fetch a single note.
///
/// # Response
///
/// - 200 OK: `{ "status": "success", "data": { "note": ... } }`
/// - 403 Forbidden: the note belongs to someone else
/// - 404 Not Found: no such note
async fn get_note(
    State(state): State<AppState>,
    owner: AuthenticatedOwner,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Envelope<SingleNote>>> {
    let row = state.notes().get_note_by_id(id).await?;

    if row.owner != owner.id {
        return Err(ApiError::Forbidden(
            "you are not entitled to access this note".to_string(),
        ));
    }

    Ok(Json(Envelope::data(SingleNote {
        note: note_from_row(row),
    })))
}

/// PUT /notes/{id} - Replace a note's title, body, and tags.
async fn edit_note(
    State(state): State<AppState>,
    owner: AuthenticatedOwner,
    Path(id): Path<Uuid>,
    Json(payload): Json<NotePayload>,
) -> ApiResult<Json<Envelope<()>>> {
    validate_note_payload(&payload)?;
    state.notes().verify_note_owner(id, owner.id).await?;

    state
        .notes()
        .edit_note_by_id(
            id,
            NoteUpdate {
                title: payload.title,
                body: payload.body,
                tags: payload.tags,
            },
        )
        .await?;

    tracing::info!(note_id = %id, owner = %owner.id, "Note updated");

    Ok(Json(Envelope::message("note updated successfully")))
}

/// DELETE /notes/{id} - Delete a note.
async fn delete_note(
    State(state): State<AppState>,
    owner: AuthenticatedOwner,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Envelope<()>>> {
    state.notes().verify_note_owner(id, owner.id).await?;
    state.notes().delete_note_by_id(id).await?;

    tracing::info!(note_id = %id, owner = %owner.id, "Note deleted");

    Ok(Json(Envelope::message("note deleted successfully")))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(add_note))
        .route(
            "/notes/{id}",
            get(get_note).put(edit_note).delete(delete_note),
        )
}
