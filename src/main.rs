use reqres_mock::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = get_configuration()?;

    let subscriber = get_subscriber(&settings.telemetry, std::io::stdout)?;
    init_subscriber(subscriber)?;

    let application = Application::build(settings).await?;
    let result = application.run_until_stopped().await;

    opentelemetry::global::shutdown_tracer_provider();
    Ok(result?)
}
