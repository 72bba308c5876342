#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = notes_server::config::Config::from_env()?;
    notes_server::web::start_web_server(config).await
}
