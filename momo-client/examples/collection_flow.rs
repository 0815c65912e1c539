//! Collection flow against the MoMo sandbox: token, request to pay, status,
//! balance and an account holder check.
//!
//! Run with:
//! MOMO_SUBSCRIPTION_KEY=... MOMO_API_USER=... MOMO_API_KEY=... \
//!     cargo run -p momo-client --example collection_flow

use momo_client::MomoClient;
use momo_types::PaymentOrder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info,momo_client=debug").init();

    let subscription_key = std::env::var("MOMO_SUBSCRIPTION_KEY")?;
    let api_user = std::env::var("MOMO_API_USER")?;
    let api_key = std::env::var("MOMO_API_KEY")?;

    let mut client = MomoClient::sandbox(subscription_key)?;
    let mut collection = client.collection();

    let token = collection.get_token(&api_user, &api_key).await?;
    println!("✅ Token valid for {}s", token.expires_in);

    let order = PaymentOrder::new("46733123453", 500, "EUR")
        .with_external_id("2323")
        .with_payer_message("Demo payment")
        .with_payee_note("Thanks");
    let transaction_id = collection.request_to_pay(&order).await?;
    println!("✅ Request to pay accepted: {transaction_id}");

    let status = collection.get_transaction(&transaction_id).await?;
    println!("{}", serde_json::to_string_pretty(&status)?);

    let balance = collection.get_balance().await?;
    println!(
        "✅ Balance: {} {}",
        balance.available_balance, balance.currency
    );

    let active = collection.is_payee_active("46733123453").await?;
    println!("✅ Payee active: {active}");

    Ok(())
}
