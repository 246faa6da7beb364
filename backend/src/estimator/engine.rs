//! Cost model
//!
//! [`compute_cost_report`] maps a [`Configuration`] to a [`CostReport`].
//! It is pure and deterministic: the same configuration always produces a
//! bit-identical report.
//!
//! # Critical Invariants
//!
//! 1. Every category total is the in-order sum of its line items
//! 2. `monthly_total == core_platform + accelerator_subtotal`
//! 3. `annual_total == monthly_total * 12`
//! 4. `cost_per_hire` is `None` rather than NaN/Infinity when there are no hires
//!
//! Arithmetic is evaluated in the same order the formulas are written
//! (`(docs / 1000) * price`, not `docs * (price / 1000)`), so published
//! figures reproduce exactly.

use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::costs::rates::{
    InfrastructureCosts, AI, BATCH_MODE_COMPUTE, DOC_CAPTURE, I9_COMMAND, LABOR_RATE_PER_HOUR,
    MILO_ADVANCED, MILO_STANDARD, RISK_SCORING, SLACK_TEAMS, SMS, WEEKS_PER_MONTH,
};
use crate::error::EstimateError;
use crate::models::{
    Accelerator, CategoryBreakdown, Configuration, ConfigurationInput, CostReport,
    InfrastructureTier,
};

pub const AI_CATEGORY: &str = "AI (Milo AI)";
pub const INFRASTRUCTURE_CATEGORY: &str = "Infrastructure";
pub const LABOR_CATEGORY: &str = "Support Labor";

pub const VALIDATIONS_ITEM: &str = "Validations (Milo Standard)";
pub const EXCEPTIONS_ITEM: &str = "Exception Handling (Milo Advanced)";
pub const LABOR_ITEM: &str = "Support Labor";

/// Validate raw input, then compute the report
///
/// # Errors
///
/// Returns [`EstimateError::InvalidInput`] when the input does not validate.
/// No partial report is produced.
pub fn estimate(input: &ConfigurationInput) -> Result<CostReport, EstimateError> {
    let config = input.validate().map_err(|e| {
        warn!(error = %e, "rejected estimator input");
        e
    })?;
    Ok(compute_cost_report(&config))
}

/// Compute the full cost breakdown for a validated configuration
///
/// # Example
///
/// ```
/// use kodiak_cost_core::{compute_cost_report, AcceleratorSet, Configuration, InfrastructureTier};
///
/// let config = Configuration {
///     weekly_hires: 150,
///     support_hours_per_month: 6,
///     infrastructure_tier: InfrastructureTier::Standard,
///     accelerators: AcceleratorSet::none(),
/// };
/// let report = compute_cost_report(&config);
///
/// assert_eq!(report.monthly_hires, 650);
/// assert_eq!(report.infrastructure.total(), 47.0);
/// assert_eq!(report.accelerator_subtotal, 0.0);
/// ```
pub fn compute_cost_report(config: &Configuration) -> CostReport {
    let monthly_hires = monthly_hires(config.weekly_hires);
    let exception_count = exception_count(monthly_hires);

    let ai = ai_costs(monthly_hires, exception_count);
    let infrastructure = infrastructure_costs(config.infrastructure_tier);
    let labor = labor_costs(config.support_hours_per_month);
    let core_platform = ai.total() + infrastructure.total() + labor.total();

    let accelerators: BTreeMap<Accelerator, CategoryBreakdown> = config
        .accelerators
        .iter()
        .map(|acc| (acc, accelerator_costs(acc, monthly_hires)))
        .collect();
    let accelerator_subtotal = accelerators
        .values()
        .fold(0.0, |acc, category| acc + category.total());

    let monthly_total = core_platform + accelerator_subtotal;
    let annual_total = monthly_total * 12.0;
    let cost_per_hire = cost_per_hire(monthly_total, monthly_hires);

    debug!(
        monthly_hires,
        exception_count,
        tier = %config.infrastructure_tier,
        accelerators = accelerators.len(),
        core_platform,
        accelerator_subtotal,
        monthly_total,
        "computed cost report"
    );

    CostReport {
        infrastructure_tier: config.infrastructure_tier,
        support_hours_per_month: config.support_hours_per_month,
        monthly_hires,
        annual_hires: monthly_hires * 12,
        exception_count,
        ai,
        infrastructure,
        labor,
        core_platform,
        accelerators,
        accelerator_subtotal,
        monthly_total,
        annual_total,
        cost_per_hire,
    }
}

/// round(weekly × 4.33), halves rounded away from zero
pub fn monthly_hires(weekly_hires: u32) -> u64 {
    (f64::from(weekly_hires) * WEEKS_PER_MONTH).round() as u64
}

/// Hires escalated to the advanced model: round(monthly × 0.10)
pub fn exception_count(monthly_hires: u64) -> u64 {
    (monthly_hires as f64 * AI.exception_rate).round() as u64
}

/// Monthly total spread over monthly hires
///
/// There is no meaningful per-hire figure without hires, so zero hires gives
/// `None` instead of a division.
pub fn cost_per_hire(monthly_total: f64, monthly_hires: u64) -> Option<f64> {
    if monthly_hires == 0 {
        None
    } else {
        Some(monthly_total / monthly_hires as f64)
    }
}

fn ai_costs(monthly_hires: u64, exception_count: u64) -> CategoryBreakdown {
    let hires = monthly_hires as f64;
    let validation_cost = MILO_STANDARD.cost(
        hires * f64::from(AI.validation.input),
        hires * f64::from(AI.validation.output),
    );

    let exceptions = exception_count as f64;
    let exception_cost = MILO_ADVANCED.cost(
        exceptions * f64::from(AI.exception.input),
        exceptions * f64::from(AI.exception.output),
    );

    CategoryBreakdown::new(AI_CATEGORY)
        .with_item(VALIDATIONS_ITEM, validation_cost)
        .with_item(EXCEPTIONS_ITEM, exception_cost)
}

fn infrastructure_costs(tier: InfrastructureTier) -> CategoryBreakdown {
    InfrastructureCosts::for_tier(tier)
        .line_items()
        .into_iter()
        .fold(
            CategoryBreakdown::new(INFRASTRUCTURE_CATEGORY),
            |category, (label, amount)| category.with_item(label, amount),
        )
}

fn labor_costs(support_hours_per_month: u32) -> CategoryBreakdown {
    CategoryBreakdown::new(LABOR_CATEGORY).with_item(
        LABOR_ITEM,
        f64::from(support_hours_per_month) * LABOR_RATE_PER_HOUR,
    )
}

/// Cost category for one accelerator at the given volume
pub fn accelerator_costs(accelerator: Accelerator, monthly_hires: u64) -> CategoryBreakdown {
    let hires = monthly_hires as f64;
    let category = CategoryBreakdown::new(accelerator.display_name());

    match accelerator {
        Accelerator::Sms => {
            let outbound = hires * SMS.outbound_per_hire * SMS.outbound_price;
            let inbound = hires * SMS.inbound_per_hire * SMS.inbound_price;
            let conversations = hires
                * SMS.conversations_per_hire
                * SMS.conversation.unit_cost(&MILO_STANDARD);
            category
                .with_item("Outbound SMS (Telnyx)", outbound)
                .with_item("Inbound SMS (Telnyx)", inbound)
                .with_item("Phone Number", SMS.phone_number_monthly)
                .with_item("AI Conversations (Milo Standard)", conversations)
        }
        Accelerator::DocCapture => {
            let total_docs = hires * DOC_CAPTURE.docs_per_hire;
            let ocr = (total_docs / 1000.0) * DOC_CAPTURE.ocr_price_per_thousand;
            let validation = total_docs * DOC_CAPTURE.validation.unit_cost(&MILO_STANDARD);
            let storage_gb = total_docs * DOC_CAPTURE.doc_size_mb / 1000.0;
            let storage = storage_gb * DOC_CAPTURE.storage_price_per_gb;
            category
                .with_item("OCR (Google Vision)", ocr)
                .with_item("AI Validation (Milo Standard)", validation)
                .with_item("Storage (S3)", storage)
        }
        Accelerator::RiskScoring => category
            .with_item("Inference Compute", RISK_SCORING.inference)
            .with_item("Monthly Model Retrain", RISK_SCORING.retraining),
        Accelerator::I9Command => {
            let alert_emails = hires * I9_COMMAND.alerts_per_hire;
            let alerts = (alert_emails / 1000.0) * I9_COMMAND.alert_price_per_thousand;
            category
                .with_item("Alert Notifications (SNS)", alerts)
                .with_item("Compute Overhead", I9_COMMAND.compute_overhead)
        }
        Accelerator::BatchMode => category.with_item("Additional Compute", BATCH_MODE_COMPUTE),
        Accelerator::SlackTeams => {
            let queries = hires * SLACK_TEAMS.queries_per_hire;
            let query_ai = queries * SLACK_TEAMS.query.unit_cost(&MILO_STANDARD);
            category
                .with_item("AI Queries (Milo Standard)", query_ai)
                .with_item("Webhook Hosting", SLACK_TEAMS.webhook_hosting)
        }
    }
}
