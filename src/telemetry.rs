use opentelemetry::KeyValue;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use opentelemetry_semantic_conventions::resource::SERVICE_NAME;
use tracing::{Subscriber, subscriber::set_global_default};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

use crate::configuration::TelemetrySettings;

/// Bunyan JSON logs to `sink`, plus OTLP span export when an endpoint is configured.
///
/// `RUST_LOG` takes precedence over `settings.log_filter`. The tracer provider,
/// if any, is installed globally so `opentelemetry::global::shutdown_tracer_provider`
/// flushes it on exit.
pub fn get_subscriber<Sink>(
    settings: &TelemetrySettings,
    sink: Sink,
) -> anyhow::Result<impl Subscriber + Send + Sync + use<Sink>>
where
    Sink: for<'a> tracing_subscriber::fmt::MakeWriter<'a> + Sync + Send + 'static,
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    let tracer_provider = settings
        .otlp_endpoint
        .as_deref()
        .map(|endpoint| otlp_tracer_provider(&settings.service_name, endpoint))
        .transpose()?;

    let telemetry_layer = tracer_provider.map(|provider| {
        let tracer =
            opentelemetry::trace::TracerProvider::tracer(&provider, "reqres-mock-tracer");
        opentelemetry::global::set_tracer_provider(provider);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    Ok(Registry::default()
        .with(env_filter)
        .with(telemetry_layer)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(settings.service_name.clone(), sink)))
}

fn otlp_tracer_provider(
    service_name: &str,
    endpoint: &str,
) -> anyhow::Result<sdktrace::TracerProvider> {
    let exporter = SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let resource = Resource::new(vec![KeyValue::new(SERVICE_NAME, service_name.to_owned())]);

    Ok(sdktrace::TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_resource(resource)
        .build())
}

pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
