use xlya_greeter::bootstrap;
use xlya_greeter::config::Config;
use xlya_greeter::infrastructure::observability;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    observability::init_tracing().map_err(|e| anyhow::anyhow!(e))?;

    // Load configuration; missing credentials stop here
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let service = bootstrap::build_login_message_service(&config)?;

    let message = service.run(config.user_name.as_deref()).await;

    println!("{}", message);

    Ok(())
}
