//! Terminal rendering of cost reports

use colored::Colorize;
use std::fmt::Write;

use kodiak_cost_core::costs::{provider_reference, rates::LABOR_RATE_PER_HOUR};
use kodiak_cost_core::estimator::engine::{EXCEPTIONS_ITEM, VALIDATIONS_ITEM};
use kodiak_cost_core::format::{format_annual, format_cost_per_hire, format_count, format_monthly};
use kodiak_cost_core::{CategoryBreakdown, CostReport};

const HEAVY_RULE: &str = "═══════════════════════════════════════════════════════════════";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 48;
const AMOUNT_WIDTH: usize = 14;

pub const PRICING_BASIS: &str = "Costs based on AWS us-east-1 pricing as of Jan 2025";

fn line(out: &mut String, indent: usize, label: &str, amount: &str) {
    let label_width = LABEL_WIDTH.saturating_sub(indent);
    let _ = writeln!(
        out,
        "{:indent$}{:<label_width$}{:>amount_width$}",
        "",
        label,
        amount,
        indent = indent,
        label_width = label_width,
        amount_width = AMOUNT_WIDTH,
    );
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title.bold());
    let _ = writeln!(out, "{}", LIGHT_RULE);
}

fn category_items(
    out: &mut String,
    category: &CategoryBreakdown,
    label_for: impl Fn(&str) -> String,
) {
    for item in category.items() {
        line(out, 4, &label_for(&item.label), &format_monthly(item.amount));
    }
}

/// Full text breakdown: summary, core platform, accelerators
pub fn render_report(report: &CostReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", HEAVY_RULE);
    let _ = writeln!(out, "{}", "         KODIAK OPERATING COST ESTIMATE".bold());
    let _ = writeln!(out, "{}", HEAVY_RULE);
    let _ = writeln!(out);

    heading(&mut out, "SUMMARY");
    line(
        &mut out,
        2,
        "Hires",
        &format!(
            "{}/mo • {}/yr",
            report.monthly_hires,
            format_count(report.annual_hires)
        ),
    );
    line(&mut out, 2, "Monthly total", &format_monthly(report.monthly_total));
    line(&mut out, 2, "Annual total", &format_annual(report.annual_total));
    line(&mut out, 2, "Cost per hire", &format_cost_per_hire(report.cost_per_hire));
    let _ = writeln!(out);

    heading(&mut out, "CORE PLATFORM COSTS");
    line(&mut out, 2, report.ai.name(), &format_monthly(report.ai.total()));
    category_items(&mut out, &report.ai, |label| match label {
        VALIDATIONS_ITEM => format!("{} × {}", label, report.monthly_hires),
        EXCEPTIONS_ITEM => format!("{} × {}", label, report.exception_count),
        other => other.to_string(),
    });

    line(
        &mut out,
        2,
        &format!("{} ({})", report.infrastructure.name(), report.infrastructure_tier),
        &format_monthly(report.infrastructure.total()),
    );
    category_items(&mut out, &report.infrastructure, str::to_string);

    line(
        &mut out,
        2,
        &format!(
            "{} ({} hrs × ${})",
            report.labor.name(),
            report.support_hours_per_month,
            LABOR_RATE_PER_HOUR
        ),
        &format_monthly(report.labor.total()),
    );
    line(
        &mut out,
        2,
        "Core Platform Total",
        &format_monthly(report.core_platform).green().to_string(),
    );

    if !report.accelerators.is_empty() {
        let _ = writeln!(out);
        heading(&mut out, "ACCELERATOR COSTS");
        for category in report.accelerators.values() {
            line(&mut out, 2, category.name(), &format_monthly(category.total()));
            category_items(&mut out, category, str::to_string);
        }
        line(
            &mut out,
            2,
            "Accelerators Total",
            &format_monthly(report.accelerator_subtotal).green().to_string(),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", PRICING_BASIS.dimmed());
    out
}

/// Provider reference table
pub fn render_providers() -> String {
    let mut out = String::new();
    heading(&mut out, "PROVIDER REFERENCE (LOWEST COST)");
    for row in provider_reference() {
        let _ = writeln!(out, "  {:<16}{}", row.service, row.provider);
    }
    out
}
