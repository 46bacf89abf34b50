mod add_bookmark;
mod get_bookmarks;
mod remove_bookmark;

use actix_web::web;
use add_bookmark::add_bookmark_controller;
use get_bookmarks::get_bookmarks_controller;
use remove_bookmark::remove_bookmark_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/bookmarks", web::get().to(get_bookmarks_controller));
    cfg.route(
        "/bookmarks/{contest_id}",
        web::post().to(add_bookmark_controller),
    );
    cfg.route(
        "/bookmarks/{contest_id}",
        web::delete().to(remove_bookmark_controller),
    );
}
