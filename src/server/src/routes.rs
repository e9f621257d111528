use super::controllers;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    // Dev log page
    cfg.route("/", web::get().to(controllers::devlog::index))
        // Liveness
        .route("/health", web::get().to(controllers::health::index));
}
