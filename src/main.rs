mod bundle;
mod handlers;
mod logger;
mod render;
mod view;

use axum::{routing::{get, Router}};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use bundle::BundleConfig;
use render::{MaudRenderer, ViewRenderer};

// one environment-independent listening port
pub const PORT: u16 = 3000;

// share the renderer and template path with all the handlers.
// the renderer sits behind a trait object so tests can swap in
// a stub instead of the real markup engine.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<dyn ViewRenderer>,
    pub template_path: PathBuf,
}

// explicit startup configuration instead of module-scope globals
pub struct ServerConfig {
    pub port: u16,
    pub template_path: PathBuf,
    pub static_root: PathBuf,
    pub dist_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {

        ServerConfig {
            port: PORT,
            template_path: PathBuf::from("template.html"),
            static_root: PathBuf::from("."),
            // serve the hydration bundle from wherever the bundler writes it
            dist_dir: PathBuf::from(BundleConfig::default().out_dir),
        }

    }
}

// "/" is registered as a specific route, so it wins over the
// catch-all static fallback when paths collide.
pub fn app(state: AppState, config: &ServerConfig) -> Router {

    Router::new()
        .route("/", get(handlers::ssr_handler))
        .nest_service("/dist", ServeDir::new(&config.dist_dir))
        .fallback_service(ServeDir::new(&config.static_root))
        .with_state(state) // share the app state

}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    let config = ServerConfig::default();

    // create app state
    let state = AppState {
        renderer: Arc::new(MaudRenderer),
        template_path: config.template_path.clone(),
    };

    let router = app(state, &config);

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind to port 3000");
    println!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, router).await
        .expect("Server failed");

}
