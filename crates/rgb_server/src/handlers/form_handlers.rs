use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rgb_core::{
    FormValues, Grid, GridShape, build_form, current_year, grid_from_values, submit_grid,
};
use uuid::Uuid;

use super::AppState;
use crate::db;
use crate::error::ApiResult;
use crate::models::{FormResponse, PostedValues, SubmitResponse};
use crate::validation;

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Overlay posted month values on a stored grid. Nothing posted leaves it
/// untouched.
///
/// Posted values are read against the stored shape; cells outside it are an
/// error.
fn merge_posted(stored: &mut Grid, posted: Option<&FormValues>) -> ApiResult<()> {
    let Some(posted) = posted else {
        return Ok(());
    };
    let input = grid_from_values(stored.shape(), posted)?;
    stored.apply_months(&input);
    Ok(())
}

/// Store posted values, grow the form and return the rebuilt grid.
fn change_structure(
    state: &AppState,
    id: &str,
    posted: Option<&FormValues>,
    grow: impl FnOnce(GridShape) -> GridShape,
) -> ApiResult<Grid> {
    validation::validate_form_id(id)?;

    let conn = state.db.lock()?;
    let mut grid = db::load_form(&conn, id)?;
    merge_posted(&mut grid, posted)?;

    let shape = grow(grid.shape());
    validation::validate_shape(shape, &state.limits)?;
    grid.resize(shape);

    db::save_form(&conn, id, &grid, &now())?;
    tracing::debug!(
        form_id = %id,
        tables = shape.table_count,
        rows = shape.row_count,
        "Form rebuilt"
    );
    Ok(grid)
}

// ============================================================================
// Form Handlers
// ============================================================================

pub async fn create_form(State(state): State<AppState>) -> ApiResult<Json<FormResponse>> {
    let id = Uuid::new_v4().to_string();
    let grid = Grid::default();

    {
        let conn = state.db.lock()?;
        db::insert_form(&conn, &id, &grid, &now())?;
    }
    tracing::info!(form_id = %id, "Created form");

    Ok(Json(FormResponse {
        form: build_form(&grid, current_year()),
        id,
    }))
}

pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FormResponse>> {
    validation::validate_form_id(&id)?;

    let grid = {
        let conn = state.db.lock()?;
        db::load_form(&conn, &id)?
    };

    Ok(Json(FormResponse {
        form: build_form(&grid, current_year()),
        id,
    }))
}

/// "Add table"
pub async fn add_table(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PostedValues>,
) -> ApiResult<Json<FormResponse>> {
    let grid = change_structure(&state, &id, req.values.as_ref(), GridShape::add_table)?;

    Ok(Json(FormResponse {
        form: build_form(&grid, current_year()),
        id,
    }))
}

/// "Add year"
pub async fn add_row(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PostedValues>,
) -> ApiResult<Json<FormResponse>> {
    let grid = change_structure(&state, &id, req.values.as_ref(), GridShape::add_row)?;

    Ok(Json(FormResponse {
        form: build_form(&grid, current_year()),
        id,
    }))
}

pub async fn submit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PostedValues>,
) -> ApiResult<Json<SubmitResponse>> {
    validation::validate_form_id(&id)?;
    let year = current_year();

    let outcome = {
        let conn = state.db.lock()?;
        let mut grid = db::load_form(&conn, &id)?;
        merge_posted(&mut grid, req.values.as_ref())?;

        let outcome = submit_grid(grid, year);
        db::save_form(&conn, &id, &outcome.grid, &now())?;
        outcome
    };

    if outcome.is_valid() {
        tracing::info!(form_id = %id, "Form submitted");
    } else {
        tracing::warn!(
            form_id = %id,
            errors = outcome.errors.len(),
            "Form rejected"
        );
    }

    let form = build_form(&outcome.grid, year).with_outcome(&outcome);
    Ok(Json(SubmitResponse::new(id, outcome, form)))
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    validation::validate_form_id(&id)?;

    let conn = state.db.lock()?;
    db::delete_form(&conn, &id)?;
    tracing::info!(form_id = %id, "Deleted form");

    Ok(StatusCode::NO_CONTENT)
}
