// Route exports
pub mod weather;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/weather")
            .configure(weather::configure),
    );
}
