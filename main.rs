use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn};
use tracing::info;

use rent_reminder::config::Config;
use rent_reminder::function_handler;
use rent_reminder::notifier::SnsNotifier;
use rent_reminder::tenant::DynamoTenantStore;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize the tracing subscriber
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env();
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

    let store = DynamoTenantStore::new(aws_sdk_dynamodb::Client::new(&aws_config), &config.tenants_table);
    let notifier = SnsNotifier::new(aws_sdk_sns::Client::new(&aws_config));

    info!(table = %config.tenants_table, "Rent reminder Lambda function initialized");

    // Start the Lambda runtime with our function handler
    run(service_fn(|event| function_handler(&store, &notifier, event))).await
}
