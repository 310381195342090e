use kitty_allocator::error::AppError;
use kitty_allocator::workflows::allocation::{Weights, WeightsConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) default_weights: Option<Weights>,
}

/// Loads weights for the HTTP service. A missing file is tolerated because requests may
/// carry their own weights; a malformed one is not.
pub(crate) fn load_default_weights(path: &Path) -> Result<Option<Weights>, AppError> {
    if !path.exists() {
        warn!(path = %path.display(), "weights config not found; requests must supply weights");
        return Ok(None);
    }

    let config = WeightsConfig::from_path(path)?;
    Ok(Some(config.weights))
}
