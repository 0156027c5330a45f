use book_form::server::make_app;
use book_form::settings::Settings;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("book_form={}", settings.logging.level).into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = make_app();

    let addr = settings.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "serving /api/books");
    axum::serve(listener, app).await?;
    Ok(())
}
