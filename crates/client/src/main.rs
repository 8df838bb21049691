//! `balcao` terminal client.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use balcao_client::config::{API_URL_VAR, DATA_DIR_VAR};
use balcao_observability::LogFormat;
use commands::{Context, auth, products, sell, users};

#[derive(Parser)]
#[command(name = "balcao", version, about = "Point-of-sale client for the balcão backend")]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = API_URL_VAR)]
    api_url: Option<String>,

    /// Directory holding local storage
    #[arg(long, global = true, env = DATA_DIR_VAR)]
    data_dir: Option<PathBuf>,

    /// Human-readable log lines on stderr instead of JSON
    #[arg(long, global = true)]
    compact_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and remember the session
    Login {
        /// E-mail address
        email: String,
        /// Password (read from stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the stored session
    Whoami,
    /// List, add or delete products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// List, add or delete users (admin only)
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Open the interactive sales counter
    Sell,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List all products
    List {
        /// Print HTML table rows instead of text
        #[arg(long)]
        html: bool,
    },
    /// Create a product
    Add {
        name: String,
        category: String,
        /// Unit price, e.g. 2.50
        price: String,
    },
    /// Delete a product by id
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List all users
    List {
        /// Print HTML table rows instead of text
        #[arg(long)]
        html: bool,
    },
    /// Create a user
    Add {
        name: String,
        email: String,
        /// Group id: 1 admin, 2 seller, 3 client
        group: String,
        /// Password (read from stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a user by id
    Delete { id: i64 },
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let format = if cli.compact_logs {
        LogFormat::Compact
    } else {
        LogFormat::Json
    };
    balcao_observability::init_with(format, "warn");

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::build(cli.api_url.as_deref(), cli.data_dir)?;

    match cli.command {
        Commands::Login { email, password } => auth::login(&ctx, &email, password).await,
        Commands::Logout => auth::logout(&ctx).await,
        Commands::Whoami => auth::whoami(&ctx).await,
        Commands::Products { action } => match action {
            ProductsAction::List { html } => products::list(&ctx, html).await,
            ProductsAction::Add { name, category, price } => products::add(&ctx, &name, &category, &price).await,
            ProductsAction::Delete { id } => products::delete(&ctx, id).await,
        },
        Commands::Users { action } => match action {
            UsersAction::List { html } => users::list(&ctx, html).await,
            UsersAction::Add {
                name,
                email,
                group,
                password,
            } => users::add(&ctx, &name, &email, &group, password).await,
            UsersAction::Delete { id } => users::delete(&ctx, id).await,
        },
        Commands::Sell => sell::run(&ctx).await,
    }
}
