use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        appointment::{
            create_appointment, create_appointment_by_dni_and_license, delete_appointment,
            get_appointment, get_appointments_by_dni, patch_appointment, update_appointment,
        },
        dentist::{create_dentist, delete_dentist, get_dentist, patch_dentist, update_dentist},
        patient::{create_patient, delete_patient, get_patient, patch_patient, update_patient},
    },
    state::AppState,
};

/// Builds the API router with CORS and request tracing applied to every route.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/patients", post(create_patient))
        .route(
            "/patients/{id}",
            get(get_patient)
                .put(update_patient)
                .patch(patch_patient)
                .delete(delete_patient),
        )
        .route("/dentists", post(create_dentist))
        .route(
            "/dentists/{id}",
            get(get_dentist)
                .put(update_dentist)
                .patch(patch_dentist)
                .delete(delete_dentist),
        )
        .route("/appointments", post(create_appointment))
        .route(
            "/appointments/{id}",
            get(get_appointment)
                .put(update_appointment)
                .patch(patch_appointment)
                .delete(delete_appointment),
        )
        .route("/appointments/dni/{dni}", get(get_appointments_by_dni))
        .route(
            "/appointments/dni/license",
            post(create_appointment_by_dni_and_license),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
