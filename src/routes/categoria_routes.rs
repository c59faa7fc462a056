use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use crate::controllers::categoria_controller::{CategoriaController, CATEGORIA_NO_ENCONTRADA};
use crate::dto::categoria_dto::CategoriaRequest;
use crate::dto::response_dto::ApiResponse;
use crate::models::Categoria;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_id, ValidatedJson};

pub fn create_categoria_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categorias).post(create_categoria))
        .route("/:id", put(update_categoria).delete(delete_categoria))
}

async fn list_categorias(
    State(state): State<AppState>,
) -> Result<Json<Vec<Categoria>>, AppError> {
    let controller = CategoriaController::new(state.pool.clone());
    let categorias = controller.list().await?;
    Ok(Json(categorias))
}

async fn create_categoria(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CategoriaRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let controller = CategoriaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_categoria(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<CategoriaRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    let id = parse_id(&id, CATEGORIA_NO_ENCONTRADA)?;
    let controller = CategoriaController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_categoria(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>, AppError> {
    let id = parse_id(&id, CATEGORIA_NO_ENCONTRADA)?;
    let controller = CategoriaController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
