use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use stack_notifier::{
    clients::{cloudformation::CloudFormationClient, slack::SlackWebhookClient},
    config::Config,
    utils::process_event,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .without_time()
        .init();

    let config = Config::load()?;
    let inventory = CloudFormationClient::from_env().await;
    let webhook = SlackWebhookClient::new(&config)?;

    info!(channel = config.channel(), "Stack notifier ready");

    run(service_fn(|event: LambdaEvent<SnsEvent>| {
        let config = &config;
        let inventory = &inventory;
        let webhook = &webhook;
        async move {
            info!(request_id = %event.context.request_id, "Handling SNS notification");
            process_event(&event.payload, inventory, webhook, config.channel()).await?;
            Ok::<(), Error>(())
        }
    }))
    .await
}
