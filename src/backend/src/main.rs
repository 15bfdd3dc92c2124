use actix_cors::Cors;
use actix_server::ServerHandle;
use actix_web::{
    App, HttpServer,
    web::{self, Data},
};
use actix_web_static_files::ResourceFiles;
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{debug, error, info, warn};
use rustls::crypto::{CryptoProvider, ring::default_provider};
use std::io::Write;
use tokio::signal::unix::{SignalKind, signal};
use wifi_connector::{api::Api, config::AppConfig, gemini_client::GeminiClient};

// Include the generated static files from build.rs
include!(concat!(env!("OUT_DIR"), "/generated.rs"));

// Alias the generated function to a more descriptive name
#[inline(always)]
fn static_files() -> std::collections::HashMap<&'static str, static_files::Resource> {
    generate()
}

type UiApi = Api<GeminiClient>;

#[actix_web::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize()?;

    let mut sigterm =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    let generator = GeminiClient::new(AppConfig::get().provider.clone())
        .context("failed to create provider client")?;

    info!("starting server");

    let (server_handle, server_task) = run_server(generator)?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => debug!("ctrl-c received"),
        _ = sigterm.recv() => debug!("SIGTERM received"),
        result = server_task => {
            match result {
                Ok(Ok(())) => debug!("server stopped normally"),
                Ok(Err(e)) => error!("server stopped with error: {e}"),
                Err(e) => error!("server task panicked: {e}"),
            }
        },
    }

    info!("shutting down");
    server_handle.stop(true).await;
    info!("shutdown complete");

    Ok(())
}

fn initialize() -> Result<()> {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!(
        "module version: {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_SHORT_REV")
    );

    let config = AppConfig::init().context("failed to load configuration")?;

    if config.provider.api_key.is_none() {
        warn!("no provider API key configured, password suggestions will fail");
    }

    CryptoProvider::install_default(default_provider())
        .map_err(|_| anyhow::anyhow!("crypto provider already installed"))?;

    Ok(())
}

fn run_server(
    generator: GeminiClient,
) -> Result<(
    ServerHandle,
    tokio::task::JoinHandle<Result<(), std::io::Error>>,
)> {
    let api = UiApi::new(generator);
    let tls_config = load_tls_config().context("failed to load tls config")?;
    let address = format!("0.0.0.0:{}", AppConfig::get().ui.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allowed_methods(vec!["GET", "POST"])
                    .max_age(3600),
            )
            .app_data(Data::new(api.clone()))
            .app_data(Data::new(static_files()))
            .route("/", web::get().to(UiApi::index))
            .route("/suggest-password", web::post().to(UiApi::suggest_password))
            .route("/version", web::get().to(UiApi::version))
            .route("/healthcheck", web::get().to(UiApi::healthcheck))
            .service(ResourceFiles::new("/static", static_files()))
            .default_service(web::route().to(UiApi::index))
    });

    let server = match tls_config {
        Some(tls_config) => {
            info!("serving https on {address}");
            server
                .bind_rustls_0_23(&address, tls_config)
                .context("failed to bind server")?
        }
        None => {
            info!("serving http on {address}");
            server.bind(&address).context("failed to bind server")?
        }
    }
    .disable_signals()
    .run();

    Ok((server.handle(), tokio::spawn(server)))
}

fn load_tls_config() -> Result<Option<rustls::ServerConfig>> {
    let Some(paths) = &AppConfig::get().certificate else {
        return Ok(None);
    };

    let mut tls_certs = std::io::BufReader::new(
        std::fs::File::open(&paths.cert_path).context("failed to open certificate file")?,
    );

    let mut tls_key = std::io::BufReader::new(
        std::fs::File::open(&paths.key_path).context("failed to open key file")?,
    );

    let tls_certs = rustls_pemfile::certs(&mut tls_certs)
        .collect::<Result<Vec<_>, _>>()
        .context("failed to parse certificate pem")?;

    let key_item = rustls_pemfile::read_one(&mut tls_key)
        .context("failed to read key pem file")?
        .context("no valid key found in pem file")?;

    let key = match key_item {
        rustls_pemfile::Item::Pkcs1Key(key) => rustls::pki_types::PrivateKeyDer::Pkcs1(key),
        rustls_pemfile::Item::Pkcs8Key(key) => rustls::pki_types::PrivateKeyDer::Pkcs8(key),
        rustls_pemfile::Item::Sec1Key(key) => rustls::pki_types::PrivateKeyDer::Sec1(key),
        _ => anyhow::bail!("unexpected key type in pem file"),
    };

    let config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, key)
        .context("failed to create tls config")?;

    Ok(Some(config))
}
