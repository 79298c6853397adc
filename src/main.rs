use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use gute::catalog::Catalog;
use gute::ingestion::RemoteFetcher;
use gute::service::handlers::{handle_book, handle_index, handle_page};
use gute::service::BookService;
use gute::storage::DiskStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_MIRROR: &str = "http://www.gutenberg.lib.md.us";
const DEFAULT_CATALOG: &str = "catalog.json";
const DEFAULT_CACHE_DIR: &str = "gutenberg/cache";

#[derive(Debug)]
struct Flags {
    bind_addr: SocketAddr,
    mirror: String,
    catalog_path: PathBuf,
    cache_dir: PathBuf,
}

fn parse_flags(args: &[String]) -> Result<Flags, String> {
    let mut bind_addr: Option<SocketAddr> = None;
    let mut mirror = DEFAULT_MIRROR.to_string();
    let mut catalog_path = PathBuf::from(DEFAULT_CATALOG);
    let mut cache_dir = PathBuf::from(DEFAULT_CACHE_DIR);

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--bind" | "--mirror" | "--catalog" | "--cache-dir" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires a value", flag))?;
                match flag {
                    "--bind" => {
                        bind_addr =
                            Some(value.parse().map_err(|err| {
                                format!("invalid --bind address {}: {}", value, err)
                            })?);
                    }
                    "--mirror" => mirror = value.clone(),
                    "--catalog" => catalog_path = PathBuf::from(value),
                    _ => cache_dir = PathBuf::from(value),
                }
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.ok_or_else(|| "--bind is required".to_string())?;
    Ok(Flags {
        bind_addr,
        mirror,
        catalog_path,
        cache_dir,
    })
}

fn usage(program: &str) {
    eprintln!(
        "Usage: {} --bind <addr:port> [--mirror <url>] [--catalog <file>] [--cache-dir <dir>]",
        program
    );
    eprintln!("Example: {} --bind 127.0.0.1:8080", program);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let flags = match parse_flags(&args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{}", err);
            usage(&args[0]);
            std::process::exit(1);
        }
    };

    // Fail fast: without a catalog no request can be served.
    let catalog = Catalog::load(&flags.catalog_path).map_err(|err| {
        anyhow::anyhow!("cannot load catalog {:?}: {}", flags.catalog_path, err)
    })?;
    tracing::info!("Serving {} books from {}", catalog.len(), flags.mirror);

    let service = Arc::new(BookService::new(
        catalog,
        RemoteFetcher::new(&flags.mirror),
        DiskStore::new(flags.cache_dir),
    ));

    let app = Router::new()
        .route("/index", get(handle_index))
        .route("/book", get(handle_book))
        .route("/page", get(handle_page))
        .layer(Extension(service));

    tracing::info!("HTTP server listening on {}", flags.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(flags.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
