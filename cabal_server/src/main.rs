mod docs;
mod error;
mod info;
mod router;
mod state;
mod summary;
mod wallets;

use std::env;

use dotenvy::dotenv;
use router::router;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let server_domain = env::var("SERVER_DOMAIN").unwrap_or("localhost:8000".to_string());

    let app = router().await;

    let listener = tokio::net::TcpListener::bind(&server_domain).await.unwrap();

    log::info!("cabal_server listening on {}", server_domain);

    axum::serve(listener, app).await.unwrap();
}
