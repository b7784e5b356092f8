//! Validation orchestrator: selects a policy's rules and runs each one.

use tlsaudit_core::constants::UNNAMED_POLICY;
use tlsaudit_core::errors::ValidationError;
use tlsaudit_core::policy::SecurityPolicy;
use tracing::{debug, info_span, warn};

use crate::result::RuleResult;
use crate::rules::select_rules;
use crate::validator::validate_policy;

/// Validate `policy` against every rule enabled in its rule mask.
///
/// Rules run in ascending rule-id order against the same `result`. The
/// first fatal error aborts the remaining rules.
pub fn validate_security_rules(
    policy: &SecurityPolicy,
    result: &mut RuleResult,
) -> Result<(), ValidationError> {
    let policy_name = policy.version().unwrap_or(UNNAMED_POLICY);
    let span = info_span!("tlsaudit.validation", policy = policy_name);
    let _guard = span.enter();

    let rules = select_rules(policy).inspect_err(|e| {
        warn!(error = %e, "rule selection failed");
    })?;

    for rule in &rules {
        validate_policy(rule, policy, result)?;
    }

    debug!(
        rules = rules.len(),
        found_error = result.found_error(),
        "policy validated"
    );
    Ok(())
}

/// Validate several policies into one shared result, stopping at the first
/// fatal error.
pub fn validate_policies<'p, I>(policies: I, result: &mut RuleResult) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'p SecurityPolicy>,
{
    for policy in policies {
        validate_security_rules(policy, result)?;
    }
    Ok(())
}
