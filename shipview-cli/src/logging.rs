//! Log output and optional span export
//!
//! The console layer is always installed. `--otel` adds an OTLP exporter
//! when the binary is built with the `telemetry` feature.
//!
//! `RUST_LOG` replaces the built-in directives entirely, e.g.
//! `RUST_LOG=shipview_server=trace,sqlx=warn shipview serve`.
//! `OTEL_EXPORTER_OTLP_ENDPOINT` and `OTEL_SERVICE_NAME` steer the exporter.

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4317";
const DEFAULT_SERVICE_NAME: &str = "shipview";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Verbose gateway and request logs (ignored when RUST_LOG is set)
    pub debug: bool,
    /// Export spans over OTLP
    pub otel: bool,
}

impl LogConfig {
    /// Directives used when RUST_LOG is absent. Only our crates and the
    /// request trace get the chosen level; everything else stays at warn.
    fn directives(&self) -> String {
        let level = if self.debug { "debug" } else { "info" };
        format!("warn,shipview={level},shipview_server={level},tower_http={level}")
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()))
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let export = if config.otel { otlp_layer()? } else { None };
    let exporting = export.is_some();

    tracing_subscriber::registry()
        .with(export)
        .with(config.env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(config.debug)
                .compact(),
        )
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))?;

    if exporting {
        tracing::info!(
            endpoint = %env_or("OTEL_EXPORTER_OTLP_ENDPOINT", DEFAULT_OTLP_ENDPOINT),
            service = %env_or("OTEL_SERVICE_NAME", DEFAULT_SERVICE_NAME),
            "exporting spans over OTLP"
        );
    } else if config.otel {
        tracing::warn!("--otel ignored: built without the telemetry feature");
    }
    Ok(())
}

#[cfg(feature = "telemetry")]
fn otlp_layer() -> Result<Option<BoxedLayer>> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;

    let endpoint = env_or("OTEL_EXPORTER_OTLP_ENDPOINT", DEFAULT_OTLP_ENDPOINT);
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("building OTLP exporter for {endpoint}: {e}"))?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
            "service.name",
            env_or("OTEL_SERVICE_NAME", DEFAULT_SERVICE_NAME),
        )]))
        .build();
    let tracer = provider.tracer(DEFAULT_SERVICE_NAME);

    // The global handle keeps the batch exporter alive until shutdown.
    let _ = opentelemetry::global::set_tracer_provider(provider);

    Ok(Some(tracing_opentelemetry::layer().with_tracer(tracer).boxed()))
}

#[cfg(not(feature = "telemetry"))]
fn otlp_layer() -> Result<Option<BoxedLayer>> {
    Ok(None)
}

/// Flush spans still queued in the exporter.
pub fn shutdown() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}
