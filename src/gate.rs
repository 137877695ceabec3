//! Activation gate
//!
//! Decides whether the provider runs at all.

use crate::env::EnvSource;
use crate::utils::Reporter;

/// Feature flag that turns the provider on
pub const FEATURE_FLAG: &str = "WEBSLICE";

/// Kill switch that wins over the feature flag
pub const DISABLE_FLAG: &str = "DISABLE_WEBSLICE_PROVIDER";

/// Outcome of the gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Activate,
    /// The feature flag is missing or falsy
    FeatureFlagUnset,
    /// The kill switch is set
    Disabled,
}

impl GateDecision {
    pub fn is_active(self) -> bool {
        self == GateDecision::Activate
    }

    /// Debug line explaining a skip
    pub fn skip_reason(self) -> Option<String> {
        match self {
            GateDecision::Activate => None,
            GateDecision::FeatureFlagUnset => Some(format!(
                "{FEATURE_FLAG} environment variable is not set, skipping webslice service provider"
            )),
            GateDecision::Disabled => Some(format!(
                "{DISABLE_FLAG} environment variable is set, skipping webslice service provider"
            )),
        }
    }
}

/// Check both flags. Has no side effects.
pub fn should_activate(env: &dyn EnvSource) -> GateDecision {
    if !env.flag(FEATURE_FLAG) {
        return GateDecision::FeatureFlagUnset;
    }
    if env.flag(DISABLE_FLAG) {
        return GateDecision::Disabled;
    }
    GateDecision::Activate
}

/// Check both flags and trace the reason for a skip
pub fn check(env: &dyn EnvSource, reporter: &dyn Reporter) -> GateDecision {
    let decision = should_activate(env);
    if let Some(reason) = decision.skip_reason() {
        reporter.debug(&reason);
    }
    decision
}
