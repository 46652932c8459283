//! HTTP handlers and route configuration.

mod entry;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/entry")
                .route("", web::post().to(entry::create_entry))
                .route("", web::get().to(entry::get_all_entries))
                .route("/{id}", web::get().to(entry::get_entry))
                .route("/{id}", web::put().to(entry::update_entry))
                .route("/{id}", web::delete().to(entry::delete_entry)),
        );
}
