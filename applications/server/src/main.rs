/// Roster Server - users service over MySQL
use clap::{Parser, Subcommand};
use roster_core::{NewUser, UserStore};
use roster_server::{api, config::ServerConfig, state::AppState};
use roster_storage::MySqlUserStore;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster users service", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// List all users, newest first
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await?,
        Commands::AddUser { name, email } => add_user(&config, &name, &email).await?,
        Commands::ListUsers => list_users(&config).await?,
    }

    Ok(())
}

fn user_store(config: &ServerConfig) -> MySqlUserStore {
    MySqlUserStore::new(
        config.database.connection_settings(),
        config.database.retry_policy(),
    )
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!(
        "Database: {}@{}:{}/{}",
        config.database.user,
        config.database.host,
        config.database.port,
        config.database.name
    );

    // No connection is opened here; each request opens its own
    let app_state = AppState::new(Arc::new(user_store(&config)));
    let app = api::router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: &ServerConfig, name: &str, email: &str) -> anyhow::Result<()> {
    let user = NewUser::new(name, email)?;
    let id = user_store(config).create_user(user).await?;

    println!("Created user {}", id);
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let users = user_store(config).list_users().await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {} <{}> ({})",
            user.id,
            user.name,
            user.email,
            user.created_at.to_rfc3339()
        );
    }

    Ok(())
}
