//! Pricing Schema Documentation
//!
//! Self-documenting description of every cost driver the estimator prices,
//! plus the provider reference table. Unit prices are rendered from the
//! constants in `rates.rs`, so the documentation cannot drift from the model.

use serde::{Deserialize, Serialize};

use super::rates::{
    InfrastructureCosts, AI, BATCH_MODE_COMPUTE, DOC_CAPTURE, I9_COMMAND, LABOR_RATE_PER_HOUR,
    MILO_ADVANCED, MILO_STANDARD, RISK_SCORING, SLACK_TEAMS, SMS, WEEKS_PER_MONTH,
};
use crate::error::EstimateError;
use crate::estimator::engine::accelerator_costs;
use crate::format::format_monthly;
use crate::models::config::{Accelerator, InfrastructureTier};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Grouping for cost drivers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PricingCategory {
    /// Always-on model inference
    CoreAi,
    /// Fixed per-tier hosting
    Infrastructure,
    /// Human support time
    Labor,
    /// Optional feature modules
    Accelerator,
}

/// Worked example for a cost driver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingExample {
    pub scenario: String,
    /// Input values as (name, value) pairs
    pub inputs: Vec<(String, String)>,
    pub calculation: String,
    pub result: String,
}

/// Documentation for a single cost driver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingElement {
    /// Machine name (accelerator wire key where applicable)
    pub name: String,
    pub display_name: String,
    pub category: PricingCategory,
    pub description: String,
    /// Plain-text formula in terms of monthly_hires
    pub formula: String,
    /// Unit the listed prices are quoted in
    pub unit: String,
    /// Unit prices and usage assumptions
    pub unit_prices: Vec<(String, String)>,
    pub source_location: String,
    pub example: Option<PricingExample>,
}

/// One row of the provider reference table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderReference {
    pub service: String,
    pub provider: String,
}

/// Complete pricing schema documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSchemaDoc {
    pub version: String,
    pub generated_at: String,
    pub pricing_basis: String,
    pub cost_drivers: Vec<PricingElement>,
    pub providers: Vec<ProviderReference>,
}

const RATES_SOURCE: &str = "backend/src/costs/rates.rs";

/// Volume used in worked examples (150 hires/week)
const EXAMPLE_MONTHLY_HIRES: u64 = 650;

fn pair(name: &str, value: impl ToString) -> (String, String) {
    (name.to_string(), value.to_string())
}

// ============================================================================
// CATALOG
// ============================================================================

/// Every cost driver, core platform first, then accelerators in display order
pub fn pricing_elements() -> Vec<PricingElement> {
    let mut docs = vec![
        PricingElement {
            name: "validations".to_string(),
            display_name: "Validations (Milo Standard)".to_string(),
            category: PricingCategory::CoreAi,
            description: "One Milo Standard call per monthly hire to validate onboarding data."
                .to_string(),
            formula: format!(
                "monthly_hires * {} * in_price / 1e6 + monthly_hires * {} * out_price / 1e6",
                AI.validation.input, AI.validation.output
            ),
            unit: "USD per 1M tokens".to_string(),
            unit_prices: vec![
                pair("input_per_million", MILO_STANDARD.input_per_million),
                pair("output_per_million", MILO_STANDARD.output_per_million),
                pair("weeks_per_month", WEEKS_PER_MONTH),
            ],
            source_location: RATES_SOURCE.to_string(),
            example: Some(PricingExample {
                scenario: "150 hires/week".to_string(),
                inputs: vec![pair("monthly_hires", EXAMPLE_MONTHLY_HIRES)],
                calculation: "650 * 500 * 0.25 / 1e6 + 650 * 300 * 1.25 / 1e6".to_string(),
                result: "$0.33 per month".to_string(),
            }),
        },
        PricingElement {
            name: "exceptions".to_string(),
            display_name: "Exception Handling (Milo Advanced)".to_string(),
            category: PricingCategory::CoreAi,
            description: "Hires that fail validation are escalated to Milo Advanced.".to_string(),
            formula: format!(
                "round(monthly_hires * {}) * ({} * in_price + {} * out_price) / 1e6",
                AI.exception_rate, AI.exception.input, AI.exception.output
            ),
            unit: "USD per 1M tokens".to_string(),
            unit_prices: vec![
                pair("input_per_million", MILO_ADVANCED.input_per_million),
                pair("output_per_million", MILO_ADVANCED.output_per_million),
                pair("exception_rate", AI.exception_rate),
            ],
            source_location: RATES_SOURCE.to_string(),
            example: Some(PricingExample {
                scenario: "150 hires/week".to_string(),
                inputs: vec![pair("exception_count", 65)],
                calculation: "65 * 1000 * 3 / 1e6 + 65 * 500 * 15 / 1e6".to_string(),
                result: "$0.68 per month".to_string(),
            }),
        },
        PricingElement {
            name: "infrastructure".to_string(),
            display_name: "Infrastructure".to_string(),
            category: PricingCategory::Infrastructure,
            description: "Fixed monthly hosting cost looked up by tier.".to_string(),
            formula: "compute + database + monitoring + networking + secrets".to_string(),
            unit: "USD per month".to_string(),
            unit_prices: InfrastructureTier::ALL
                .into_iter()
                .map(|tier| {
                    (
                        tier.key().to_string(),
                        format!(
                            "{} ({})",
                            format_monthly(InfrastructureCosts::for_tier(tier).total()),
                            tier.description()
                        ),
                    )
                })
                .collect(),
            source_location: RATES_SOURCE.to_string(),
            example: Some(PricingExample {
                scenario: "Standard tier".to_string(),
                inputs: vec![pair("infrastructure_tier", "standard")],
                calculation: "18 + 12 + 10 + 5 + 2".to_string(),
                result: "$47.00 per month".to_string(),
            }),
        },
        PricingElement {
            name: "support_labor".to_string(),
            display_name: "Support Labor".to_string(),
            category: PricingCategory::Labor,
            description: "Human support time at a flat hourly rate.".to_string(),
            formula: format!("support_hours_per_month * {}", LABOR_RATE_PER_HOUR),
            unit: "USD per hour".to_string(),
            unit_prices: vec![pair("rate_per_hour", LABOR_RATE_PER_HOUR)],
            source_location: RATES_SOURCE.to_string(),
            example: Some(PricingExample {
                scenario: "6 support hours".to_string(),
                inputs: vec![pair("support_hours_per_month", 6)],
                calculation: "6 * 20".to_string(),
                result: "$120.00 per month".to_string(),
            }),
        },
    ];

    docs.extend(Accelerator::ALL.into_iter().map(accelerator_element));
    docs
}

fn accelerator_element(accelerator: Accelerator) -> PricingElement {
    let (description, formula, unit, unit_prices) = match accelerator {
        Accelerator::Sms => (
            "Two-way SMS with candidates, with AI-drafted replies.",
            format!(
                "monthly_hires * {} * {} + monthly_hires * {} * {} + {} + monthly_hires * {} * conversation_cost",
                SMS.outbound_per_hire,
                SMS.outbound_price,
                SMS.inbound_per_hire,
                SMS.inbound_price,
                SMS.phone_number_monthly,
                SMS.conversations_per_hire
            ),
            "USD per message",
            vec![
                pair("outbound_per_segment", SMS.outbound_price),
                pair("inbound_per_segment", SMS.inbound_price),
                pair("phone_number_monthly", SMS.phone_number_monthly),
            ],
        ),
        Accelerator::DocCapture => (
            "OCR and AI validation of uploaded onboarding documents, stored in S3.",
            format!(
                "docs = monthly_hires * {}; docs / 1000 * {} + docs * doc_ai_cost + docs * {} / 1000 * {}",
                DOC_CAPTURE.docs_per_hire,
                DOC_CAPTURE.ocr_price_per_thousand,
                DOC_CAPTURE.doc_size_mb,
                DOC_CAPTURE.storage_price_per_gb
            ),
            "USD per 1K images",
            vec![
                pair("ocr_per_thousand", DOC_CAPTURE.ocr_price_per_thousand),
                pair("storage_per_gb", DOC_CAPTURE.storage_price_per_gb),
                pair("docs_per_hire", DOC_CAPTURE.docs_per_hire),
            ],
        ),
        Accelerator::RiskScoring => (
            "Lightweight model scoring each hire, retrained monthly.",
            format!("{} + {}", RISK_SCORING.inference, RISK_SCORING.retraining),
            "USD per month",
            vec![
                pair("inference", RISK_SCORING.inference),
                pair("retraining", RISK_SCORING.retraining),
            ],
        ),
        Accelerator::I9Command => (
            "Deadline tracking and email alerts for I-9 verification.",
            format!(
                "monthly_hires * {} / 1000 * {} + {}",
                I9_COMMAND.alerts_per_hire,
                I9_COMMAND.alert_price_per_thousand,
                I9_COMMAND.compute_overhead
            ),
            "USD per 1K notifications",
            vec![
                pair("alert_per_thousand", I9_COMMAND.alert_price_per_thousand),
                pair("compute_overhead", I9_COMMAND.compute_overhead),
            ],
        ),
        Accelerator::BatchMode => (
            "Bulk onboarding of hire cohorts; flat extra compute.",
            format!("{}", BATCH_MODE_COMPUTE),
            "USD per month",
            vec![pair("additional_compute", BATCH_MODE_COMPUTE)],
        ),
        Accelerator::SlackTeams => (
            "Natural-language status queries from Slack and Teams.",
            format!(
                "monthly_hires * {} * query_cost + {}",
                SLACK_TEAMS.queries_per_hire, SLACK_TEAMS.webhook_hosting
            ),
            "USD per query",
            vec![
                pair("queries_per_hire", SLACK_TEAMS.queries_per_hire),
                pair("webhook_hosting", SLACK_TEAMS.webhook_hosting),
            ],
        ),
    };

    let example_total = accelerator_costs(accelerator, EXAMPLE_MONTHLY_HIRES).total();

    PricingElement {
        name: accelerator.key().to_string(),
        display_name: accelerator.display_name().to_string(),
        category: PricingCategory::Accelerator,
        description: description.to_string(),
        formula,
        unit: unit.to_string(),
        unit_prices,
        source_location: RATES_SOURCE.to_string(),
        example: Some(PricingExample {
            scenario: "150 hires/week".to_string(),
            inputs: vec![pair("monthly_hires", EXAMPLE_MONTHLY_HIRES)],
            calculation: formula_hint(accelerator),
            result: format!("{} per month", format_monthly(example_total)),
        }),
    }
}

fn formula_hint(accelerator: Accelerator) -> String {
    accelerator_costs(accelerator, EXAMPLE_MONTHLY_HIRES)
        .items()
        .iter()
        .map(|item| format!("{} {}", item.label, format_monthly(item.amount)))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Lowest-cost provider chosen for each service
pub fn provider_reference() -> Vec<ProviderReference> {
    let row = |service: &str, provider: String| ProviderReference {
        service: service.to_string(),
        provider,
    };

    vec![
        row(
            "AI - Validation",
            format!(
                "Milo AI Standard (${}/${} per 1M tokens)",
                MILO_STANDARD.input_per_million, MILO_STANDARD.output_per_million
            ),
        ),
        row(
            "AI - Exceptions",
            format!(
                "Milo AI Advanced (${}/${} per 1M tokens)",
                MILO_ADVANCED.input_per_million, MILO_ADVANCED.output_per_million
            ),
        ),
        row(
            "SMS Provider",
            format!(
                "Telnyx (${} out / ${} in)",
                SMS.outbound_price, SMS.inbound_price
            ),
        ),
        row(
            "OCR",
            format!(
                "Google Cloud Vision (${:.2}/1K images)",
                DOC_CAPTURE.ocr_price_per_thousand
            ),
        ),
        row("Compute", "AWS Lambda / Fargate".to_string()),
        row("Database", "DynamoDB / RDS PostgreSQL".to_string()),
        row("ML Inference", "Lambda + sklearn (near-free)".to_string()),
    ]
}

/// Complete pricing schema as pretty JSON
pub fn get_pricing_schema() -> Result<String, EstimateError> {
    let schema = PricingSchemaDoc {
        version: "1.0".to_string(),
        generated_at: "2025-01-01T00:00:00Z".to_string(), // Static for determinism
        pricing_basis: "AWS us-east-1 pricing as of Jan 2025".to_string(),
        cost_drivers: pricing_elements(),
        providers: provider_reference(),
    };

    serde_json::to_string_pretty(&schema)
        .map_err(|e| EstimateError::Serialization(format!("Pricing schema: {}", e)))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_to_json() {
        let json = serde_json::to_string(&PricingCategory::CoreAi).unwrap();
        assert_eq!(json, "\"CoreAi\"");
    }

    #[test]
    fn test_catalog_covers_every_driver() {
        let docs = pricing_elements();
        assert_eq!(docs.len(), 10, "Expected 4 core drivers + 6 accelerators");

        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        for acc in Accelerator::ALL {
            assert!(names.contains(&acc.key()), "Missing {}", acc.key());
        }
        assert!(names.contains(&"validations"));
        assert!(names.contains(&"exceptions"));
        assert!(names.contains(&"infrastructure"));
        assert!(names.contains(&"support_labor"));
    }

    #[test]
    fn test_category_counts() {
        let docs = pricing_elements();
        let count = |cat: PricingCategory| docs.iter().filter(|d| d.category == cat).count();

        assert_eq!(count(PricingCategory::CoreAi), 2);
        assert_eq!(count(PricingCategory::Infrastructure), 1);
        assert_eq!(count(PricingCategory::Labor), 1);
        assert_eq!(count(PricingCategory::Accelerator), 6);
    }

    #[test]
    fn test_every_driver_is_documented() {
        for doc in pricing_elements() {
            assert!(!doc.description.is_empty(), "{} has empty description", doc.name);
            assert!(!doc.formula.is_empty(), "{} has empty formula", doc.name);
            assert!(doc.unit.starts_with("USD"), "{} has unit {:?}", doc.name, doc.unit);
            assert!(!doc.unit_prices.is_empty(), "{} has no unit prices", doc.name);
            assert!(doc.source_location.contains("rates.rs"));

            let example = doc.example.as_ref().expect("every driver has an example");
            assert!(!example.inputs.is_empty(), "{} example has no inputs", doc.name);
            assert!(!example.result.is_empty(), "{} example has empty result", doc.name);
        }
    }

    #[test]
    fn test_accelerator_display_names_match_model() {
        let docs = pricing_elements();
        for acc in Accelerator::ALL {
            let doc = docs.iter().find(|d| d.name == acc.key()).unwrap();
            assert_eq!(doc.display_name, acc.display_name());
        }
    }

    #[test]
    fn test_infrastructure_prices_listed_per_tier() {
        let docs = pricing_elements();
        let infra = docs.iter().find(|d| d.name == "infrastructure").unwrap();

        assert_eq!(infra.unit_prices.len(), 3);
        assert_eq!(infra.unit_prices[0], pair("minimal", "$11.00 (Lambda + DynamoDB)"));
        assert_eq!(infra.unit_prices[1], pair("standard", "$47.00 (Fargate + RDS)"));
        assert_eq!(infra.unit_prices[2], pair("production", "$133.00 (Multi-AZ, HA)"));
    }

    #[test]
    fn test_units_follow_price_basis() {
        let docs = pricing_elements();
        let unit = |name: &str| docs.iter().find(|d| d.name == name).unwrap().unit.clone();

        assert_eq!(unit("validations"), "USD per 1M tokens");
        assert_eq!(unit("support_labor"), "USD per hour");
        assert_eq!(unit("docCapture"), "USD per 1K images");
        assert_eq!(unit("batchMode"), "USD per month");
    }

    #[test]
    fn test_accelerator_example_uses_model_output() {
        let docs = pricing_elements();
        let risk = docs.iter().find(|d| d.name == "riskScoring").unwrap();
        assert_eq!(risk.example.as_ref().unwrap().result, "$5.50 per month");
    }

    #[test]
    fn test_provider_reference_rows() {
        let providers = provider_reference();
        assert_eq!(providers.len(), 7);
        assert_eq!(providers[0].provider, "Milo AI Standard ($0.25/$1.25 per 1M tokens)");
        assert_eq!(providers[1].provider, "Milo AI Advanced ($3/$15 per 1M tokens)");
        assert_eq!(providers[2].provider, "Telnyx ($0.004 out / $0.003 in)");
        assert_eq!(providers[3].provider, "Google Cloud Vision ($1.50/1K images)");
    }

    #[test]
    fn test_get_pricing_schema_returns_valid_json() {
        let schema = get_pricing_schema().unwrap();
        let parsed: PricingSchemaDoc = serde_json::from_str(&schema).unwrap();

        assert_eq!(parsed.version, "1.0");
        assert_eq!(parsed.cost_drivers.len(), 10);
        assert_eq!(parsed.providers.len(), 7);
    }

    #[test]
    fn test_get_pricing_schema_is_deterministic() {
        assert_eq!(get_pricing_schema().unwrap(), get_pricing_schema().unwrap());
    }
}
