use anyhow::Context;
use awesome::cli::create_admin;
use awesome::logging::{init_basic_console_logging, init_tracing, shutdown_tracer};
use awesome::metrics::{init_metrics, is_observability_enabled};
use awesome::router::init_router;
use awesome::state::init_app_state;
use awesome_config::ServerConfig;
use awesome_core::SystemClock;
use awesome_db::{PgStore, init_db_pool};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "awesome")]
#[command(about = "Awesome blog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Create an administrator account
    CreateAdmin {
        /// Display name
        name: String,
        /// Email address, also the sign-in name
        email: String,
        /// Plain password
        password: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => handle_create_admin(&name, &email, &password).await,
    };

    if let Err(err) = result {
        error!(error = ?err, "Fatal error");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn serve() -> anyhow::Result<()> {
    if is_observability_enabled() {
        if let Err(err) = init_tracing() {
            init_basic_console_logging();
            error!(error = ?err, "File logging unavailable, using console only");
        }
    } else {
        init_basic_console_logging();
    }

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url).await?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let metrics_handle = init_metrics();
    let state = init_app_state(pool);
    let app = init_router(state, metrics_handle);

    let server_config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server_config.addr())
        .await
        .with_context(|| format!("Failed to bind {}", server_config.addr()))?;

    info!(address = %server_config.addr(), "Server running");
    info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if is_observability_enabled() {
        shutdown_tracer().await;
    }

    Ok(())
}

async fn handle_create_admin(name: &str, email: &str, password: &str) -> anyhow::Result<()> {
    init_basic_console_logging();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url).await?;
    let store = PgStore::new(pool);

    let user = create_admin(&store, &SystemClock, name, email, password).await?;

    println!("Admin user created");
    println!("   Id: {}", user.id);
    println!("   Email: {}", user.email);
    println!("   Name: {}", user.name);

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => error!(error = %err, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
