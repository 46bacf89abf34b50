mod get_note;
mod update_note;

use actix_web::web;
use get_note::get_note_controller;
use update_note::update_note_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/notes", web::put().to(update_note_controller));
    cfg.route("/notes/{contest_id}", web::get().to(get_note_controller));
}
