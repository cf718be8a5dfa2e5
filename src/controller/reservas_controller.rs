use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tracing::warn;
use crate::controller::AppState;
use crate::repositories::ReservaStore;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/reservas", get(retrieve_all_reservas))
        .route("/api/reservas/", get(retrieve_all_reservas))
        .route("/api/reservas/:id", get(retrieve_reserva))
        .route("/api/reservas/:id/", get(retrieve_reserva))
        .route_layer(Extension(app_state.store))
}

pub async fn retrieve_all_reservas(
    Extension(store): Extension<Arc<ReservaStore>>,
) -> impl IntoResponse {
    let reservas_res = store.retrieve_all_reservas().await;

    match reservas_res {
        Ok(reservas) => {
            (StatusCode::OK, Json(reservas)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong retrieving reservas due to: {:#}", e);
            (StatusCode::BAD_REQUEST, "Failed to retrieve reservas, please try again.").into_response()
        }
    }
}

pub async fn retrieve_reserva(
    Extension(store): Extension<Arc<ReservaStore>>,
    Path(id_reservas_gen): Path<i32>,
) -> impl IntoResponse {
    let reserva_res = store.retrieve_reserva(id_reservas_gen).await;

    match reserva_res {
        Ok(Some(reserva)) => {
            (StatusCode::OK, Json(reserva)).into_response()
        }
        Ok(None) => {
            (StatusCode::NOT_FOUND, "Reserva not found").into_response()
        }
        Err(e) => {
            warn!("Something went wrong retrieving reserva {} due to: {:#}", id_reservas_gen, e);
            (StatusCode::BAD_REQUEST, "Failed to retrieve reserva, please try again.").into_response()
        }
    }
}
