use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use kit_assistant::server::{configure, AppState};
use kit_assistant::{Catalog, IntentMatcher, Settings};

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;

    let catalog = Catalog::load_from_file(&settings.intents_file)?;
    catalog
        .validate()
        .with_context(|| format!("Invalid intent catalog {:?}", settings.intents_file))?;
    log::info!(
        "Loaded {} intents from {:?}",
        catalog.len(),
        settings.intents_file
    );

    let data = web::Data::new(AppState::new(catalog, IntentMatcher::new()));

    log::info!(
        "Starting server at http://{}:{}",
        settings.host,
        settings.port
    );
    HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .bind((settings.host.as_str(), settings.port))?
        .run()
        .await?;
    Ok(())
}
