pub mod details;
pub mod fees;

use actix_web::web;

/// Registers every API scope. Shared by `main` and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(details::configure_routes())
        .service(fees::configure_routes());
}
