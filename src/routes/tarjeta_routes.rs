use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use crate::controllers::tarjeta_controller::{TarjetaController, TARJETA_NO_ENCONTRADA};
use crate::dto::response_dto::ApiResponse;
use crate::dto::tarjeta_dto::TarjetaRequest;
use crate::models::TarjetaConCategoria;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_id, ValidatedJson};

pub fn create_tarjeta_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tarjetas).post(create_tarjeta))
        .route("/:tarj_id", put(update_tarjeta).delete(delete_tarjeta))
}

async fn list_tarjetas(
    State(state): State<AppState>,
) -> Result<Json<Vec<TarjetaConCategoria>>, AppError> {
    let controller = TarjetaController::new(state.pool.clone());
    let tarjetas = controller.list().await?;
    Ok(Json(tarjetas))
}

async fn create_tarjeta(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TarjetaRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let controller = TarjetaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_tarjeta(
    State(state): State<AppState>,
    Path(tarj_id): Path<String>,
    ValidatedJson(request): ValidatedJson<TarjetaRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let tarj_id = parse_id(&tarj_id, TARJETA_NO_ENCONTRADA)?;
    let controller = TarjetaController::new(state.pool.clone());
    let response = controller.update(tarj_id, request).await?;
    Ok(Json(response))
}

async fn delete_tarjeta(
    State(state): State<AppState>,
    Path(tarj_id): Path<String>,
) -> Result<Json<ApiResponse>, AppError> {
    let tarj_id = parse_id(&tarj_id, TARJETA_NO_ENCONTRADA)?;
    let controller = TarjetaController::new(state.pool.clone());
    let response = controller.delete(tarj_id).await?;
    Ok(Json(response))
}
