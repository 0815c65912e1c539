//! MoMo CLI
//!
//! Command-line interface for the MoMo API: provision sandbox users and
//! query the money products.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use momo_client::{MomoClient, SANDBOX_BASE_URL, SANDBOX_ENVIRONMENT};
use momo_types::{Product, ReferenceId};

#[derive(Parser)]
#[command(name = "momo")]
#[command(author, version, about = "MoMo API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the MoMo API
    #[arg(long, env = "MOMO_BASE_URL", default_value = SANDBOX_BASE_URL)]
    base_url: String,

    /// Target environment sent in X-Target-Environment
    #[arg(long, env = "MOMO_TARGET_ENVIRONMENT", default_value = SANDBOX_ENVIRONMENT)]
    environment: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a sandbox API user and generate its API key
    #[command(visible_alias = "sandbox-user")]
    Sandbox {
        /// Your callback host, e.g. http://myapp.com
        #[arg(short, long)]
        callback: String,
        /// Subscription key which provides access to this API. Found in your profile as Primary Key
        #[arg(short, long, env = "MOMO_SUBSCRIPTION_KEY")]
        key: String,
    },
    /// Obtain a bearer token for a product
    Token {
        #[command(flatten)]
        target: ProductArgs,
    },
    /// Show the account balance of a product
    Balance {
        #[command(flatten)]
        target: ProductArgs,
    },
    /// Check whether a mobile number belongs to an active account holder
    Active {
        #[command(flatten)]
        target: ProductArgs,
        /// Mobile number in international format, e.g. 256789997290
        msisdn: String,
    },
    /// Look up a payment or transfer by its reference id
    Status {
        #[command(flatten)]
        target: ProductArgs,
        /// Reference id returned when the payment was initiated
        reference_id: String,
    },
}

/// Product to act on and the API user credentials for it.
#[derive(Args)]
struct ProductArgs {
    /// collection, disbursement or remittance
    #[arg(long, default_value = "collection")]
    product: Product,

    /// Subscription key of the product
    #[arg(short, long, env = "MOMO_SUBSCRIPTION_KEY")]
    key: String,

    /// API user id
    #[arg(long, env = "MOMO_API_USER")]
    user_id: String,

    /// API key of the API user
    #[arg(long, env = "MOMO_API_KEY", hide_env_values = true)]
    api_key: String,
}

fn parse_reference_id(s: &str) -> Result<ReferenceId> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid reference ID: {}", s))
}

/// Builds a client for the product and authenticates it.
async fn authenticated_client(cli: &Cli, target: &ProductArgs) -> Result<MomoClient> {
    let mut client = MomoClient::new(&target.key, &cli.environment, &cli.base_url)?;
    client
        .product(target.product)
        .get_token(&target.user_id, &target.api_key)
        .await?;
    tracing::info!(product = %target.product, environment = %cli.environment, "authenticated");
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,momo_cli=info,momo_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Sandbox { callback, key } => {
            let client = MomoClient::new(key, &cli.environment, &cli.base_url)?;
            let user = client.sandbox_users().provision(callback).await?;
            println!("API Key: {}", user.api_key);
            println!("User ID: {}", user.user_id);
        }

        Commands::Token { target } => {
            let mut client = MomoClient::new(&target.key, &cli.environment, &cli.base_url)?;
            let token = client
                .product(target.product)
                .get_token(&target.user_id, &target.api_key)
                .await?;
            println!("{}", serde_json::to_string_pretty(&token)?);
        }

        Commands::Balance { target } => {
            let mut client = authenticated_client(&cli, target).await?;
            let balance = client.product(target.product).get_balance().await?;
            println!("{}", serde_json::to_string_pretty(&balance)?);
        }

        Commands::Active { target, msisdn } => {
            let mut client = authenticated_client(&cli, target).await?;
            // Inactive or unknown holders come back as a non-200 status
            match client.product(target.product).is_payee_active(msisdn).await {
                Ok(_) => println!("✓ {} is active", msisdn),
                Err(e) if e.status().is_some() => {
                    println!("✗ {} is not active ({})", msisdn, e);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Status {
            target,
            reference_id,
        } => {
            let reference_id = parse_reference_id(reference_id)?;
            let mut client = authenticated_client(&cli, target).await?;
            let status = client
                .product(target.product)
                .payment_status(&reference_id)
                .await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}
