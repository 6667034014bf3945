#[macro_use]
extern crate log;

use actix_web::{App, HttpServer, middleware, web};
use etag_filter::ETagFilter;

use crate::server::{options, registry::WorkspaceRegistry};

mod server;
mod common;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new()
        .default_filter_or("actix_server=info,actix_web=info,etag_server=debug,etag_filter=debug"));

    let options: options::ServerOptions = options::parse_options();

    common::print_banner("Server");

    let registry = web::Data::new(WorkspaceRegistry::default());
    info!("Listening on {}:{}", options.bind_addr, options.port);

    HttpServer::new(move || {
        App::new()
            .wrap(ETagFilter::default())
            // enable logger
            .wrap(middleware::Logger::default())
            .app_data(registry.clone())
            .configure(server::routes)
    })
        .bind(format!("{}:{}", options.bind_addr, options.port))?
        .run()
        .await
}
