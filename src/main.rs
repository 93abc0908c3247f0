use anyhow::Result;
use article_store::application::services::ApplicationServices;
use article_store::application::queries::articles::ListArticlesQuery;
use article_store::config::AppConfig;
use article_store::domain::{article::ARTICLE_SCHEMA, schema::SchemaRegistry};
use article_store::infrastructure::{database, repositories};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let registry = SchemaRegistry::new().register(&ARTICLE_SCHEMA)?;

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::apply_schemas(&pool, &registry).await?;

    let (article_write_repo, article_read_repo) = repositories::article_repositories(&pool);
    let services = ApplicationServices::new(article_write_repo, article_read_repo);

    let page = services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: 1,
            page_size: 1,
        })
        .await?;
    tracing::info!(
        dialect = ?pool.dialect(),
        tables = registry.len(),
        articles = page.total,
        "article store ready"
    );

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
