//! Route table

use actix_web::web;

use crate::handlers;

/// Mount every API route. Shared by the server binary and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health)).service(
        web::scope("/dns")
            .route("", web::get().to(handlers::list_records))
            .route("", web::post().to(handlers::create_record))
            .route("/{name}/{type}", web::get().to(handlers::get_record))
            .route("/{name}/{type}", web::put().to(handlers::update_record))
            .route("/{name}/{type}", web::delete().to(handlers::delete_record)),
    );
}
