use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use clap::{Parser, Subcommand};
use digitpad_shared::{SAVE_PATH, STATS_PATH};
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

mod error;
mod handlers;
mod state;
mod storage;
mod summary;

use crate::handlers::{root_handler, save_handler, stats_handler};
use crate::state::AppState;
use crate::storage::FileStorage;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory holding the stored samples.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[arg(long, global = true)]
    public_dir: Option<PathBuf>,
    #[arg(long, env = "PORT", default_value_t = 3000, global = true)]
    port: u16,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the drawing page and accept samples (the default).
    Serve,
    /// Print random stored samples of every digit as text.
    Summary {
        #[arg(long, default_value_t = 2)]
        per_digit: usize,
    },
}

fn router(state: AppState, public_dir: PathBuf) -> Router {
    let index_file = public_dir.join("index.html");
    Router::new()
        .route("/", get(root_handler))
        .route(SAVE_PATH, post(save_handler))
        .route(STATS_PATH, get(stats_handler))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(axum::Extension(index_file))
        .with_state(state)
}

async fn serve(storage: FileStorage, public_dir: PathBuf, port: u16) -> std::io::Result<()> {
    tokio::fs::create_dir_all(storage.data_dir()).await?;
    tracing::info!(data_dir = %storage.data_dir().display(), "storing samples");
    let state = AppState::new(Arc::new(storage));
    let app = router(state, public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("digit pad running at http://localhost:{port}");
    axum::serve(listener, app).await
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let data_dir = args
        .data_dir
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../numbers"));
    let storage = FileStorage::new(data_dir);

    match args.command {
        Some(Command::Summary { per_digit }) => {
            let mut rng = rand::rng();
            match summary::render_summary(&storage, per_digit, &mut rng).await {
                Ok(text) => {
                    print!("{text}");
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    tracing::error!(
                        data_dir = %storage.data_dir().display(),
                        %error,
                        "summary failed"
                    );
                    ExitCode::FAILURE
                }
            }
        }
        None | Some(Command::Serve) => {
            let public_dir = args
                .public_dir
                .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"));
            match serve(storage, public_dir, args.port).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => {
                    tracing::error!(%error, "server failed");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
