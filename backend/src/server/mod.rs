//! Server construction and route wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use user_search::domain::InMemoryUserSearch;
use user_search::inbound::http::search::search_users;
use user_search::inbound::http::state::HttpState;
use user_search::outbound::dataset::load_user_records;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .service(web::scope("/api/v1").service(search_users))
}

/// Load the record store and construct the HTTP server.
///
/// # Errors
/// Returns [`std::io::Error`] when the dataset cannot be loaded, the bind
/// address is invalid, or the socket cannot be bound.
pub fn create_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let records = load_user_records(settings.dataset_path()).map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr()?;
    let http_state = web::Data::new(HttpState::new(Arc::new(InMemoryUserSearch::new(records))));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "user search server listening");
    Ok(server)
}
