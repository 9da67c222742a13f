use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use places_service::app::{build_router, AppState};
use places_service::auth::token::TokenAuthority;
use places_service::backend::elastic::ElasticBackend;
use places_service::backend::SearchBackend;
use places_service::ingest::loader::load_csv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind = "0.0.0.0:8888".to_string();
    let mut es_url = "http://localhost:9200".to_string();
    let mut index = "places".to_string();
    let mut data_path = "materials/data.csv".to_string();
    let mut with_auth = false;
    let mut with_setup = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind = args[i + 1].clone();
                i += 2;
            }
            "--es-url" => {
                es_url = args[i + 1].clone();
                i += 2;
            }
            "--index" => {
                index = args[i + 1].clone();
                i += 2;
            }
            "--data" => {
                data_path = args[i + 1].clone();
                i += 2;
            }
            "--auth" => {
                with_auth = true;
                i += 1;
            }
            "--setup" => {
                with_setup = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--es-url <url>] [--index <name>] \
                     [--auth] [--setup] [--data <path>]",
                    args[0]
                );
                std::process::exit(1);
            }
        }
    }

    let backend = ElasticBackend::new(&es_url, &index);

    if with_setup {
        tracing::info!("setting up index '{}' at {}", index, es_url);
        backend.ensure_index().await?;
        backend.apply_mapping().await?;
        let indexed = load_csv(&backend, Path::new(&data_path)).await?;
        tracing::info!("loaded {} places from {}", indexed, data_path);
    }

    let auth = with_auth.then(|| {
        let secret =
            std::env::var("PLACES_TOKEN_SECRET").unwrap_or_else(|_| "secret_key".to_string());
        Arc::new(TokenAuthority::new(&secret))
    });
    if with_auth {
        tracing::info!("access control enabled for /api/recommend");
    }

    let backend: Arc<dyn SearchBackend> = Arc::new(backend);
    let app = build_router(AppState::new(backend, auth));

    let addr: SocketAddr = bind.parse()?;
    tracing::info!("Server is running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
