mod delete_reminder;
pub mod dispatch_reminders;
mod get_reminders;
mod set_reminder;

use actix_web::web;
use delete_reminder::delete_reminder_controller;
use get_reminders::get_reminders_controller;
use set_reminder::set_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route("/reminders", web::post().to(set_reminder_controller));
    cfg.route(
        "/reminders/{contest_id}",
        web::delete().to(delete_reminder_controller),
    );
}
