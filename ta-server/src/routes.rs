use crate::api::admin::agents::{create_agent, delete_agent, list_agents, update_agent};
use crate::api::auth::auth::{login, refresh, register};
use crate::api::bookings::bookings::{
    create_booking, delete_booking, get_booking, list_bookings, update_booking,
};
use crate::api::invoices::invoices::{
    create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice,
};
use crate::api::itineraries::itineraries::{
    create_itinerary, delete_itinerary, get_itinerary, list_itineraries, update_itinerary,
};
use crate::api::leads::leads::{create_lead, delete_lead, get_lead, list_leads, update_lead};
use crate::api::payments::payments::{
    create_payment, get_payment, list_payments, update_payment,
};
use crate::api::tasks::tasks::{create_task, delete_task, get_task, list_tasks, update_task};
use crate::api::tickets::tickets::{create_ticket, get_ticket, list_tickets};
use crate::api::users::users::{get_profile, reset_password, update_profile};
use crate::api::vendors::vendors::{create_vendor, get_vendor, list_vendors, update_vendor};
use crate::health;
use crate::middleware::{authenticate, require_role};
use crate::state::AppState;

use ta_core::Role;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Build the application router with all endpoints.
///
/// Layering order: authentication wraps every protected route; the role
/// gate wraps only the admin subtree and runs after authentication.
pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/agents", get(list_agents).post(create_agent))
        .route("/agents/{id}", put(update_agent).delete(delete_agent))
        .route_layer(middleware::from_fn(|request, next| {
            require_role(ADMIN_ONLY, request, next)
        }));

    let protected_routes = Router::new()
        .route("/user/profile", get(get_profile).put(update_profile))
        .route("/user/reset-password", put(reset_password))
        .route("/leads", get(list_leads).post(create_lead))
        .route(
            "/leads/{id}",
            get(get_lead).put(update_lead).delete(delete_lead),
        )
        .route("/itineraries", get(list_itineraries).post(create_itinerary))
        .route(
            "/itineraries/{id}",
            get(get_itinerary)
                .put(update_itinerary)
                .delete(delete_itinerary),
        )
        .route("/bookings", get(list_bookings).post(create_booking))
        .route(
            "/bookings/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/{id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
        .route("/vendors", get(list_vendors).post(create_vendor))
        .route("/vendors/{id}", get(get_vendor).put(update_vendor))
        .route("/payments", get(list_payments).post(create_payment))
        .route("/payments/{id}", get(get_payment).put(update_payment))
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/tickets/{id}", get(get_ticket))
        .nest("/admin", admin_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let api_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .merge(protected_routes);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
