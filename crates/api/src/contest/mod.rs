mod get_contests;

use actix_web::web;
use get_contests::get_contests_controller;

pub use get_contests::GetContestsUseCase;

#[cfg(test)]
pub use get_contests::test;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contests", web::get().to(get_contests_controller));
}
