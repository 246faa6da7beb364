//! Integration tests for accelerator pricing
//!
//! Each accelerator is checked at the reference volume (650 monthly hires)
//! against hand-computed figures, plus independence between toggles.

use kodiak_cost_core::estimator::accelerator_costs;
use kodiak_cost_core::{
    compute_cost_report, Accelerator, AcceleratorSet, Configuration, InfrastructureTier,
};

const MONTHLY_HIRES: u64 = 650;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn labels(accelerator: Accelerator) -> Vec<String> {
    accelerator_costs(accelerator, MONTHLY_HIRES)
        .items()
        .iter()
        .map(|i| i.label.clone())
        .collect()
}

#[test]
fn test_sms_concierge() {
    let sms = accelerator_costs(Accelerator::Sms, MONTHLY_HIRES);

    assert_eq!(sms.name(), "SMS Concierge");
    assert_close(sms.amount("Outbound SMS (Telnyx)").unwrap(), 20.8);
    assert_close(sms.amount("Inbound SMS (Telnyx)").unwrap(), 7.8);
    assert_eq!(sms.amount("Phone Number"), Some(1.0));
    assert_close(sms.amount("AI Conversations (Milo Standard)").unwrap(), 0.26);
    assert_close(sms.total(), 29.86);
}

#[test]
fn test_doc_capture() {
    let docs = accelerator_costs(Accelerator::DocCapture, MONTHLY_HIRES);

    // 1625 documents
    assert_eq!(docs.name(), "Smart Document Capture");
    assert_close(docs.amount("OCR (Google Vision)").unwrap(), 2.4375);
    assert_close(docs.amount("AI Validation (Milo Standard)").unwrap(), 0.89375);
    assert_close(docs.amount("Storage (S3)").unwrap(), 0.0186875);
    assert_close(docs.total(), 3.3499375);
}

#[test]
fn test_risk_scoring_is_flat() {
    for hires in [0, 1, MONTHLY_HIRES, 1_000_000] {
        let risk = accelerator_costs(Accelerator::RiskScoring, hires);
        assert_eq!(risk.total(), 5.5);
        assert_eq!(risk.amount("Inference Compute"), Some(0.5));
        assert_eq!(risk.amount("Monthly Model Retrain"), Some(5.0));
    }
}

#[test]
fn test_i9_command_center() {
    let i9 = accelerator_costs(Accelerator::I9Command, MONTHLY_HIRES);

    assert_eq!(i9.name(), "I-9 Deadline Command Center");
    assert_close(i9.amount("Alert Notifications (SNS)").unwrap(), 0.65);
    assert_eq!(i9.amount("Compute Overhead"), Some(2.0));
    assert_close(i9.total(), 2.65);
}

#[test]
fn test_batch_mode_single_item() {
    let batch = accelerator_costs(Accelerator::BatchMode, MONTHLY_HIRES);

    assert_eq!(batch.items().len(), 1);
    assert_eq!(batch.amount("Additional Compute"), Some(1.0));
    assert_eq!(batch.total(), 1.0);
}

#[test]
fn test_slack_teams() {
    let slack = accelerator_costs(Accelerator::SlackTeams, MONTHLY_HIRES);

    assert_eq!(slack.name(), "Slack & Teams Integration");
    assert_close(slack.amount("AI Queries (Milo Standard)").unwrap(), 0.11375);
    assert_eq!(slack.amount("Webhook Hosting"), Some(1.0));
    assert_close(slack.total(), 1.11375);
}

#[test]
fn test_line_item_display_order() {
    assert_eq!(
        labels(Accelerator::Sms),
        vec![
            "Outbound SMS (Telnyx)",
            "Inbound SMS (Telnyx)",
            "Phone Number",
            "AI Conversations (Milo Standard)"
        ]
    );
    assert_eq!(
        labels(Accelerator::DocCapture),
        vec!["OCR (Google Vision)", "AI Validation (Milo Standard)", "Storage (S3)"]
    );
}

#[test]
fn test_disabled_accelerators_are_absent() {
    let config = Configuration {
        accelerators: AcceleratorSet::none(),
        ..Configuration::default()
    };
    let report = compute_cost_report(&config);

    assert!(report.accelerators.is_empty());
    assert_eq!(report.accelerator_subtotal, 0.0);
    assert_eq!(report.monthly_total, report.core_platform);
}

#[test]
fn test_accelerators_are_independent() {
    let base = Configuration {
        weekly_hires: 150,
        support_hours_per_month: 6,
        infrastructure_tier: InfrastructureTier::Standard,
        accelerators: AcceleratorSet::all(),
    };
    let all = compute_cost_report(&base);

    for accelerator in Accelerator::ALL {
        let alone = compute_cost_report(&Configuration {
            accelerators: AcceleratorSet::none().with(accelerator),
            ..base.clone()
        });
        assert_eq!(
            alone.accelerator(accelerator),
            all.accelerator(accelerator),
            "{} changed when other accelerators were enabled",
            accelerator
        );
    }
}

#[test]
fn test_report_lists_accelerators_in_display_order() {
    let config = Configuration {
        accelerators: AcceleratorSet::all(),
        ..Configuration::default()
    };
    let report = compute_cost_report(&config);

    let order: Vec<Accelerator> = report.accelerators.keys().copied().collect();
    assert_eq!(order, Accelerator::ALL.to_vec());
}

#[test]
fn test_all_accelerators_subtotal() {
    let config = Configuration {
        accelerators: AcceleratorSet::all(),
        ..Configuration::default()
    };
    let report = compute_cost_report(&config);

    // 29.86 + 3.3499375 + 5.5 + 2.65 + 1 + 1.11375
    assert_close(report.accelerator_subtotal, 43.4736875);
}
