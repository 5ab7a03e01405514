use ivf_navigator::navigator::{
    ClinicalInputs, InputError, NavigatorAssessment, NavigatorEngine,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Validates user-supplied inputs before handing them to the engine.
pub(crate) fn assess_validated(inputs: &ClinicalInputs) -> Result<NavigatorAssessment, InputError> {
    if let Err(err) = inputs.validate() {
        warn!(error = %err, "rejected clinical inputs");
        return Err(err);
    }

    Ok(NavigatorEngine::new().assess(inputs))
}

/// Parses the yes/no answers used by the intake form.
pub(crate) fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" => Ok(false),
        _ => Err(format!("expected yes or no, got '{raw}'")),
    }
}
