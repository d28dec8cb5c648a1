use crate::app::App;
use crate::router::respond;
use astra::Server;

mod app;
mod auth;
mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Load configuration and the listing catalog
    let app = match App::from_env() {
        Ok(app) => app,
        Err(e) => {
            log::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Loaded {} listings from {} agents",
        app.catalog.listings().len(),
        app.catalog.agents().len()
    );

    // 2️⃣ Start the server
    let addr = app.config.bind_addr;
    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(app.config.max_workers);

    // 3️⃣ Serve requests, sharing the app state with every worker
    let result = server.serve(move |req, _info| respond(req, &app));

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
