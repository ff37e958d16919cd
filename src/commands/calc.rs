use crate::cli::Cli;
use crate::domain::models::{CalcReport, GuardReport, Resolution};
use crate::services::guard::{is_valid_numeric_input, parse_field};
use crate::services::output::print_one;
use crate::services::resolver::{report, resolve_cpm, resolve_ctr};

pub fn handle_cpm(
    cli: &Cli,
    total_cost: Option<&str>,
    cpm: Option<&str>,
    impressions: Option<&str>,
) -> anyhow::Result<()> {
    let total_cost = guarded(total_cost, "total-cost")?;
    let cpm = guarded(cpm, "cpm")?;
    let impressions = guarded(impressions, "impressions")?;
    emit(cli.json, &resolve_cpm(total_cost, cpm, impressions))
}

pub fn handle_ctr(cli: &Cli, impressions: Option<&str>, clicks: Option<&str>) -> anyhow::Result<()> {
    let impressions = guarded(impressions, "impressions")?;
    let clicks = guarded(clicks, "clicks")?;
    emit(cli.json, &resolve_ctr(impressions, clicks))
}

pub fn handle_check(cli: &Cli, text: &str) -> anyhow::Result<()> {
    let data = GuardReport {
        text: text.to_string(),
        valid: is_valid_numeric_input(text),
    };
    print_one(cli.json, data, |r| {
        let verdict = if r.valid { "valid" } else { "invalid" };
        format!("{}\t{}", verdict, r.text)
    })
}

/// Run an optional raw argument through the entry guard, then the deferred
/// parse. An absent flag is an unset field; text the guard would never let
/// a user type is a hard argument error.
fn guarded(raw: Option<&str>, flag: &str) -> anyhow::Result<Option<f64>> {
    match raw {
        None => Ok(None),
        Some(text) => {
            if !is_valid_numeric_input(text) {
                anyhow::bail!(
                    "--{} {:?} is not a non-negative decimal (digits and at most one dot)",
                    flag,
                    text
                );
            }
            Ok(parse_field(text))
        }
    }
}

pub fn emit(json: bool, resolution: &Resolution) -> anyhow::Result<()> {
    print_one(json, report(resolution), render_report)
}

fn render_report(r: &CalcReport) -> String {
    match r.status.as_str() {
        "solved" => {
            let label = r.label.as_deref().unwrap_or_default();
            let value = r.value.unwrap_or_default();
            let suffix = if label == "CTR" { "%" } else { "" };
            match (&r.field, &r.field_value) {
                (Some(field), Some(field_value)) => {
                    format!("{label}: {value:.2}{suffix} ({field} -> {field_value})")
                }
                _ => format!("{label}: {value:.2}{suffix}"),
            }
        }
        "division_by_zero" => "division by zero".to_string(),
        _ => "not enough inputs".to_string(),
    }
}
