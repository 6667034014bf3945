use actix_web::web;

pub mod options;
pub mod registry;
pub mod handler_workspaces;
pub mod handler_version;

pub const MSG_NOT_FOUND: &str = "Not Found";
pub const MSG_SOMETHING_WRONG: &str = "Oops";
pub const MSG_MISSING_REQUIRED_FIELD: &str = "A required field is missing";


pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/workspaces")
            .route(web::get().to(handler_workspaces::list))
            .route(web::post().to(handler_workspaces::create)),
    )
    .service(web::resource("/workspaces/{id}").route(web::get().to(handler_workspaces::get)))
    .service(
        web::resource("/workspaces/{id}/start").route(web::post().to(handler_workspaces::start)),
    )
    .service(web::resource("/workspaces/{id}/stop").route(web::post().to(handler_workspaces::stop)))
    .service(
        web::resource("/workspaces/{id}/attributes")
            .route(web::get().to(handler_workspaces::attributes)),
    )
    .service(web::resource("/version").route(web::get().to(handler_version::handle)))
    .route("/ping", web::get().to(|| async { "pong" }));
}
