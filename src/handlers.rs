use crate::errors::AppError;
use crate::insights::compute_insights;
use crate::models::{
    parse_entry_date, EntryFields, EntryRequest, Insights, JournalEntry, TagsInput,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let insights = compute_insights(&data.entries).ok();
    Html(render_index(&data.entries, insights.as_ref()))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<JournalEntry>> {
    Json(state.snapshot().await)
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JournalEntry>, AppError> {
    let data = state.data.lock().await;
    data.entries
        .iter()
        .find(|entry| entry.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| entry_not_found(&id))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<(StatusCode, Json<JournalEntry>), AppError> {
    let fields = validate_entry(payload)?;
    let entry = fields.into_entry(Uuid::new_v4().to_string());

    let mut data = state.data.lock().await;
    data.entries.push(entry.clone());
    persist_data(&state.data_path, &data).await?;

    info!("created journal entry {}", entry.id);
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<JournalEntry>, AppError> {
    let fields = validate_entry(payload)?;

    let mut data = state.data.lock().await;
    let updated = {
        let slot = data
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| entry_not_found(&id))?;
        *slot = fields.into_entry(id.clone());
        slot.clone()
    };

    persist_data(&state.data_path, &data).await?;

    info!("updated journal entry {id}");
    Ok(Json(updated))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let index = data
        .entries
        .iter()
        .position(|entry| entry.id == id)
        .ok_or_else(|| entry_not_found(&id))?;
    data.entries.remove(index);

    persist_data(&state.data_path, &data).await?;

    info!("deleted journal entry {id}");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_insights(State(state): State<AppState>) -> Result<Json<Insights>, AppError> {
    let entries = state.snapshot().await;
    Ok(Json(compute_insights(&entries)?))
}

fn validate_entry(payload: EntryRequest) -> Result<EntryFields, AppError> {
    let mood = payload.mood.map(|mood| mood.trim().to_string()).unwrap_or_default();
    let text = payload.text.map(|text| text.trim().to_string()).unwrap_or_default();
    let raw_date = payload.date.unwrap_or_default();

    if mood.is_empty() || text.is_empty() || raw_date.trim().is_empty() {
        warn!("rejected journal entry with missing fields");
        return Err(AppError::bad_request(
            "all fields (mood, entry, date) are required",
        ));
    }

    let date = parse_entry_date(&raw_date)
        .ok_or_else(|| AppError::bad_request(format!("invalid date: {raw_date}")))?;

    Ok(EntryFields {
        date,
        mood,
        text,
        tags: payload.tags.map(TagsInput::into_tags).unwrap_or_default(),
    })
}

fn entry_not_found(id: &str) -> AppError {
    AppError::not_found(format!("journal entry {id} not found"))
}
