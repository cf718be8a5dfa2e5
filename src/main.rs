use std::sync::Arc;
use anyhow::Context;
use bb8_postgres::bb8::Pool;
use bb8_postgres::PostgresConnectionManager;
use bb8_postgres::tokio_postgres::NoTls;
use clap::Parser;
use dotenv::dotenv;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use reservas_gen::config::{Command, Config, ListConfig, OutputFormat, ServeConfig};
use reservas_gen::controller::{self, AppState};
use reservas_gen::repositories::fixture_repo::FixtureRepo;
use reservas_gen::repositories::postgres_repo::PostgresConnectionRepo;
use reservas_gen::repositories::ReservaStore;
use reservas_gen::view::reservation_list::ReservationListView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    debug!("Starting reservas-gen in {} environment", config.environment);

    match config.command {
        Command::List(list_config) => list_reservas(&list_config).await,
        Command::Serve(serve_config) => serve_reservas(&serve_config).await,
    }
}

async fn list_reservas(config: &ListConfig) -> anyhow::Result<()> {
    let mut view = ReservationListView::mount(reqwest::Client::new(), config.endpoint.clone());
    view.settled().await;

    let rendered = view.render();
    match config.format {
        OutputFormat::Text => print!("{}", rendered.to_text()),
        OutputFormat::Html => println!("{}", rendered.to_html()),
    }
    Ok(())
}

async fn serve_reservas(config: &ServeConfig) -> anyhow::Result<()> {
    let store = match (&config.database_url, &config.fixture_path) {
        (Some(database_url), _) => {
            let manager = PostgresConnectionManager::new_from_stringlike(database_url.as_str(), NoTls)
                .context("Invalid postgres connection string")?;
            let pool = Pool::builder()
                .max_size(num_cpus::get() as u32 * 2)
                .build(manager)
                .await
                .context("Failed to build postgres pool")?;
            ReservaStore::Postgres(PostgresConnectionRepo::new(pool))
        }
        (None, Some(fixture_path)) => {
            ReservaStore::Fixture(FixtureRepo::load(fixture_path).await?)
        }
        (None, None) => anyhow::bail!("Either --database-url or --fixture-path is required"),
    };

    let app_state = AppState {
        store: Arc::new(store),
    };
    controller::serve(app_state, config).await
}
