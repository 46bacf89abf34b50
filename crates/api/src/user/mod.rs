mod get_me;
mod login_user;
mod register_user;
mod reset_password;
mod send_otp;
mod submit_contact_form;
mod update_me;
mod verify_otp;

use actix_web::web;
use get_me::get_me_controller;
use login_user::login_user_controller;
use register_user::register_user_controller;
use reset_password::reset_password_controller;
use send_otp::send_otp_controller;
use submit_contact_form::submit_contact_form_controller;
use update_me::update_me_controller;
use verify_otp::verify_otp_controller;

pub use register_user::RegisterUserUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user/send-otp", web::post().to(send_otp_controller));
    cfg.route("/user/verify-otp", web::post().to(verify_otp_controller));
    cfg.route("/user/register", web::post().to(register_user_controller));
    cfg.route("/user/login", web::post().to(login_user_controller));
    cfg.route("/user/reset-password", web::post().to(reset_password_controller));
    cfg.route("/user/contact", web::post().to(submit_contact_form_controller));
    cfg.route("/me", web::get().to(get_me_controller));
    cfg.route("/me", web::put().to(update_me_controller));
}
