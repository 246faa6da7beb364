//! Unit Prices and Usage Assumptions
//!
//! Every price the estimator uses lives here as a named constant.
//! All monetary values are USD (floating-point dollars) per month unless the
//! field name says otherwise. Prices follow AWS us-east-1 and vendor list
//! pricing as of Jan 2025.

use crate::models::config::InfrastructureTier;

/// Average weeks per month used to derive monthly volume
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Fully loaded support labor rate ($/hr)
pub const LABOR_RATE_PER_HOUR: f64 = 20.0;

/// Per-million-token pricing for a hosted model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenPricing {
    /// $ per 1M input tokens
    pub input_per_million: f64,
    /// $ per 1M output tokens
    pub output_per_million: f64,
}

impl TokenPricing {
    /// Cost of a batch of tokens
    ///
    /// Evaluated as `input × price / 1e6 + output × price / 1e6`, left to
    /// right, so results are bit-for-bit stable across callers.
    pub fn cost(&self, input_tokens: f64, output_tokens: f64) -> f64 {
        (input_tokens * self.input_per_million / 1_000_000.0)
            + (output_tokens * self.output_per_million / 1_000_000.0)
    }
}

/// Milo AI Standard: validations, conversations, doc checks
pub const MILO_STANDARD: TokenPricing = TokenPricing {
    input_per_million: 0.25,
    output_per_million: 1.25,
};

/// Milo AI Advanced: exception handling
pub const MILO_ADVANCED: TokenPricing = TokenPricing {
    input_per_million: 3.0,
    output_per_million: 15.0,
};

/// Token footprint of one model call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFootprint {
    pub input: u32,
    pub output: u32,
}

impl TokenFootprint {
    /// Cost of a single call at `pricing`
    pub fn unit_cost(&self, pricing: &TokenPricing) -> f64 {
        pricing.cost(f64::from(self.input), f64::from(self.output))
    }
}

/// Core AI usage assumptions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiRates {
    /// Tokens per hire validation (Milo Standard)
    pub validation: TokenFootprint,
    /// Share of hires that need exception handling
    pub exception_rate: f64,
    /// Tokens per exception (Milo Advanced)
    pub exception: TokenFootprint,
}

pub const AI: AiRates = AiRates {
    validation: TokenFootprint {
        input: 500,
        output: 300,
    },
    exception_rate: 0.10,
    exception: TokenFootprint {
        input: 1000,
        output: 500,
    },
};

/// Fixed monthly infrastructure costs for one tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfrastructureCosts {
    pub compute: f64,
    pub database: f64,
    pub monitoring: f64,
    pub networking: f64,
    pub secrets: f64,
}

impl InfrastructureCosts {
    /// Table lookup; there are exactly three tiers
    pub fn for_tier(tier: InfrastructureTier) -> Self {
        match tier {
            // Lambda overage + DynamoDB on-demand + CloudWatch basic
            InfrastructureTier::Minimal => InfrastructureCosts {
                compute: 3.0,
                database: 2.0,
                monitoring: 5.0,
                networking: 0.0,
                secrets: 1.0,
            },
            // 2× Fargate 0.25 vCPU/0.5GB, RDS db.t4g.micro single-AZ
            InfrastructureTier::Standard => InfrastructureCosts {
                compute: 18.0,
                database: 12.0,
                monitoring: 10.0,
                networking: 5.0,
                secrets: 2.0,
            },
            // 2× Fargate 0.5 vCPU/1GB multi-AZ, RDS db.t4g.small Multi-AZ
            InfrastructureTier::Production => InfrastructureCosts {
                compute: 40.0,
                database: 50.0,
                monitoring: 25.0,
                networking: 15.0,
                secrets: 3.0,
            },
        }
    }

    /// Labelled sub-costs in display order
    pub fn line_items(&self) -> [(&'static str, f64); 5] {
        [
            ("compute", self.compute),
            ("database", self.database),
            ("monitoring", self.monitoring),
            ("networking", self.networking),
            ("secrets", self.secrets),
        ]
    }

    pub fn total(&self) -> f64 {
        self.line_items()
            .iter()
            .fold(0.0, |acc, (_, amount)| acc + amount)
    }
}

/// SMS Concierge (Telnyx)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmsRates {
    pub outbound_per_hire: f64,
    pub outbound_price: f64,
    pub inbound_per_hire: f64,
    pub inbound_price: f64,
    pub phone_number_monthly: f64,
    pub conversations_per_hire: f64,
    pub conversation: TokenFootprint,
}

pub const SMS: SmsRates = SmsRates {
    outbound_per_hire: 8.0,
    outbound_price: 0.004,
    inbound_per_hire: 4.0,
    inbound_price: 0.003,
    phone_number_monthly: 1.0,
    conversations_per_hire: 0.8,
    conversation: TokenFootprint {
        input: 500,
        output: 300,
    },
};

/// Smart Document Capture (Google Vision + S3)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocCaptureRates {
    pub docs_per_hire: f64,
    /// $ per 1,000 images
    pub ocr_price_per_thousand: f64,
    pub validation: TokenFootprint,
    /// Average document size (MB)
    pub doc_size_mb: f64,
    /// $ per GB-month
    pub storage_price_per_gb: f64,
}

pub const DOC_CAPTURE: DocCaptureRates = DocCaptureRates {
    docs_per_hire: 2.5,
    ocr_price_per_thousand: 1.50,
    validation: TokenFootprint {
        input: 700,
        output: 300,
    },
    doc_size_mb: 0.5,
    storage_price_per_gb: 0.023,
};

/// Predictive Risk Scoring (Lambda inference + monthly retrain)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScoringRates {
    pub inference: f64,
    pub retraining: f64,
}

pub const RISK_SCORING: RiskScoringRates = RiskScoringRates {
    inference: 0.50,
    retraining: 5.0,
};

/// I-9 Deadline Command Center (SNS alerts)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct I9CommandRates {
    pub alerts_per_hire: f64,
    /// $ per 1,000 emails
    pub alert_price_per_thousand: f64,
    pub compute_overhead: f64,
}

pub const I9_COMMAND: I9CommandRates = I9CommandRates {
    alerts_per_hire: 2.0,
    alert_price_per_thousand: 0.50,
    compute_overhead: 2.0,
};

/// Batch Onboarding Mode: flat extra compute
pub const BATCH_MODE_COMPUTE: f64 = 1.0;

/// Slack & Teams Integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlackTeamsRates {
    pub queries_per_hire: f64,
    pub query: TokenFootprint,
    pub webhook_hosting: f64,
}

pub const SLACK_TEAMS: SlackTeamsRates = SlackTeamsRates {
    queries_per_hire: 0.5,
    query: TokenFootprint {
        input: 400,
        output: 200,
    },
    webhook_hosting: 1.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_totals_per_tier() {
        assert_eq!(InfrastructureCosts::for_tier(InfrastructureTier::Minimal).total(), 11.0);
        assert_eq!(InfrastructureCosts::for_tier(InfrastructureTier::Standard).total(), 47.0);
        assert_eq!(InfrastructureCosts::for_tier(InfrastructureTier::Production).total(), 133.0);
    }

    #[test]
    fn test_infrastructure_line_item_order() {
        let labels: Vec<&str> = InfrastructureCosts::for_tier(InfrastructureTier::Standard)
            .line_items()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, vec!["compute", "database", "monitoring", "networking", "secrets"]);
    }

    #[test]
    fn test_token_pricing_cost() {
        // 1M in + 1M out on the advanced model
        assert_eq!(MILO_ADVANCED.cost(1_000_000.0, 1_000_000.0), 18.0);
        assert_eq!(MILO_STANDARD.cost(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_footprint_unit_cost_matches_pricing_cost() {
        let footprint = SMS.conversation;
        assert_eq!(
            footprint.unit_cost(&MILO_STANDARD),
            500.0 * 0.25 / 1_000_000.0 + 300.0 * 1.25 / 1_000_000.0
        );
    }

    #[test]
    fn test_fixed_accelerator_rates() {
        assert_eq!(RISK_SCORING.inference + RISK_SCORING.retraining, 5.5);
        assert_eq!(BATCH_MODE_COMPUTE, 1.0);
        assert_eq!(I9_COMMAND.compute_overhead, 2.0);
        assert_eq!(SLACK_TEAMS.webhook_hosting, 1.0);
    }
}
