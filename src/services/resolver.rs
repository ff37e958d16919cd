use crate::domain::models::{CalcReport, CalcResult, IconKind, MetricField, Resolution};

/// One row of the CPM solve table: which two inputs it needs, which field
/// it derives, and the formula. Rows are tried top to bottom and the first
/// row whose inputs are both present wins. The ordering is load-bearing:
/// when all three fields are populated, row order decides which field gets
/// overwritten (cost+cpm beats cost+impressions beats cpm+impressions).
struct CpmRule {
    derives: MetricField,
    label: &'static str,
    icon: IconKind,
    inputs: fn(Option<f64>, Option<f64>, Option<f64>) -> Option<(f64, f64)>,
    formula: fn(f64, f64) -> Option<f64>,
}

fn takes_cost_and_cpm(
    total_cost: Option<f64>,
    cpm: Option<f64>,
    _impressions: Option<f64>,
) -> Option<(f64, f64)> {
    Some((total_cost?, cpm?))
}

fn takes_cost_and_impressions(
    total_cost: Option<f64>,
    _cpm: Option<f64>,
    impressions: Option<f64>,
) -> Option<(f64, f64)> {
    Some((total_cost?, impressions?))
}

fn takes_cpm_and_impressions(
    _total_cost: Option<f64>,
    cpm: Option<f64>,
    impressions: Option<f64>,
) -> Option<(f64, f64)> {
    Some((cpm?, impressions?))
}

fn impressions_from(total_cost: f64, cpm: f64) -> Option<f64> {
    if cpm == 0.0 {
        return None;
    }
    Some(total_cost / (cpm / 1000.0))
}

fn cpm_from(total_cost: f64, impressions: f64) -> Option<f64> {
    if impressions == 0.0 {
        return None;
    }
    Some((total_cost / impressions) * 1000.0)
}

fn total_cost_from(cpm: f64, impressions: f64) -> Option<f64> {
    Some((cpm / 1000.0) * impressions)
}

const CPM_RULES: [CpmRule; 3] = [
    CpmRule {
        derives: MetricField::Impressions,
        label: "Impressions",
        icon: IconKind::Eye,
        inputs: takes_cost_and_cpm,
        formula: impressions_from,
    },
    CpmRule {
        derives: MetricField::Cpm,
        label: "CPM",
        icon: IconKind::Target,
        inputs: takes_cost_and_impressions,
        formula: cpm_from,
    },
    CpmRule {
        derives: MetricField::TotalCost,
        label: "Total Cost",
        icon: IconKind::Currency,
        inputs: takes_cpm_and_impressions,
        formula: total_cost_from,
    },
];

/// Solve the CPM group. Inputs are already-parsed field values where
/// `None` means the field is empty; a populated zero stays a zero and
/// trips the division check instead of being skipped.
pub fn resolve_cpm(
    total_cost: Option<f64>,
    cpm: Option<f64>,
    impressions: Option<f64>,
) -> Resolution {
    for rule in &CPM_RULES {
        let Some((a, b)) = (rule.inputs)(total_cost, cpm, impressions) else {
            continue;
        };
        return match (rule.formula)(a, b) {
            Some(value) => Resolution::Solved(CalcResult {
                value,
                label: rule.label,
                icon: rule.icon,
                target: Some(rule.derives),
            }),
            None => Resolution::DivisionByZero,
        };
    }
    Resolution::NotReady
}

/// Compute click-through rate as a percentage. One direction only: CTR is
/// never inverted back into clicks or impressions.
pub fn resolve_ctr(impressions: Option<f64>, clicks: Option<f64>) -> Resolution {
    let (Some(impressions), Some(clicks)) = (impressions, clicks) else {
        return Resolution::NotReady;
    };
    if impressions == 0.0 {
        return Resolution::DivisionByZero;
    }
    Resolution::Solved(CalcResult {
        value: (clicks / impressions) * 100.0,
        label: "CTR",
        icon: IconKind::Pointer,
        target: None,
    })
}

/// Round half away from zero at the given number of decimal places.
/// `f64::round` already ties away from zero; scaling extends that to
/// fractional places.
pub fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// The string written back into a derived field: rounded per the field's
/// decimal rule, unlike the result value which keeps full precision.
pub fn write_back_value(field: MetricField, value: f64) -> String {
    let decimals = field.decimals();
    let rounded = round_half_away(value, decimals);
    format!("{rounded:.decimals$}")
}

pub fn report(resolution: &Resolution) -> CalcReport {
    match resolution {
        Resolution::Solved(result) => CalcReport {
            status: "solved".to_string(),
            label: Some(result.label.to_string()),
            icon: Some(result.icon),
            value: Some(result.value),
            field: result.target.map(|f| f.key().to_string()),
            field_value: result.target.map(|f| write_back_value(f, result.value)),
        },
        Resolution::NotReady => CalcReport {
            status: "not_ready".to_string(),
            ..CalcReport::default()
        },
        Resolution::DivisionByZero => CalcReport {
            status: "division_by_zero".to_string(),
            ..CalcReport::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{report, resolve_cpm, resolve_ctr, round_half_away, write_back_value};
    use crate::domain::models::{IconKind, MetricField, Resolution};

    fn solved(resolution: Resolution) -> crate::domain::models::CalcResult {
        match resolution {
            Resolution::Solved(result) => result,
            other => panic!("expected Solved, got {other:?}"),
        }
    }

    #[test]
    fn cost_and_cpm_derive_impressions() {
        let result = solved(resolve_cpm(Some(100.0), Some(5.0), None));
        assert_eq!(result.value, 20_000.0);
        assert_eq!(result.label, "Impressions");
        assert_eq!(result.icon, IconKind::Eye);
        assert_eq!(result.target, Some(MetricField::Impressions));
    }

    #[test]
    fn cost_and_impressions_derive_cpm() {
        let result = solved(resolve_cpm(Some(50.0), None, Some(10_000.0)));
        assert_eq!(result.value, 5.0);
        assert_eq!(result.label, "CPM");
        assert_eq!(result.target, Some(MetricField::Cpm));
    }

    #[test]
    fn cpm_and_impressions_derive_total_cost() {
        let result = solved(resolve_cpm(None, Some(2.5), Some(40_000.0)));
        assert_eq!(result.value, 100.0);
        assert_eq!(result.label, "Total Cost");
        assert_eq!(result.icon, IconKind::Currency);
        assert_eq!(result.target, Some(MetricField::TotalCost));
    }

    #[test]
    fn all_three_populated_still_overwrites_impressions() {
        // Row order, not edit order, picks the derived field.
        let result = solved(resolve_cpm(Some(100.0), Some(5.0), Some(1.0)));
        assert_eq!(result.target, Some(MetricField::Impressions));
        assert_eq!(result.value, 20_000.0);
    }

    #[test]
    fn fewer_than_two_fields_is_not_ready() {
        assert_eq!(resolve_cpm(None, None, None), Resolution::NotReady);
        assert_eq!(resolve_cpm(Some(7.0), None, None), Resolution::NotReady);
        assert_eq!(resolve_cpm(None, Some(7.0), None), Resolution::NotReady);
        assert_eq!(resolve_cpm(None, None, Some(7.0)), Resolution::NotReady);
    }

    #[test]
    fn any_two_fields_always_produce_an_outcome() {
        for (cost, cpm, impressions) in [
            (Some(1.0), Some(1.0), None),
            (Some(1.0), None, Some(1.0)),
            (None, Some(1.0), Some(1.0)),
        ] {
            assert_ne!(
                resolve_cpm(cost, cpm, impressions),
                Resolution::NotReady,
                "two set fields must resolve: {cost:?} {cpm:?} {impressions:?}"
            );
        }
    }

    #[test]
    fn zero_denominators_are_division_by_zero() {
        assert_eq!(
            resolve_cpm(Some(100.0), Some(0.0), None),
            Resolution::DivisionByZero
        );
        assert_eq!(
            resolve_cpm(Some(100.0), None, Some(0.0)),
            Resolution::DivisionByZero
        );
        assert_eq!(
            resolve_ctr(Some(0.0), Some(5.0)),
            Resolution::DivisionByZero
        );
    }

    #[test]
    fn zero_cpm_with_impressions_is_a_valid_zero_cost() {
        // Zero is only fatal as a denominator; row 3 has none.
        let result = solved(resolve_cpm(None, Some(0.0), Some(10_000.0)));
        assert_eq!(result.value, 0.0);
        assert_eq!(result.target, Some(MetricField::TotalCost));
    }

    #[test]
    fn derived_impressions_round_trip_back_to_cpm() {
        let total_cost = 123.45;
        let cpm = 3.21;
        let impressions = solved(resolve_cpm(Some(total_cost), Some(cpm), None)).value;
        let recovered = solved(resolve_cpm(Some(total_cost), None, Some(impressions))).value;
        assert!(
            (recovered - cpm).abs() < 1e-9,
            "round trip drifted: {recovered} vs {cpm}"
        );
    }

    #[test]
    fn ctr_is_a_percentage() {
        let result = solved(resolve_ctr(Some(1000.0), Some(25.0)));
        assert_eq!(result.value, 2.5);
        assert_eq!(result.label, "CTR");
        assert_eq!(result.icon, IconKind::Pointer);
        assert_eq!(result.target, None);
    }

    #[test]
    fn ctr_needs_both_fields() {
        assert_eq!(resolve_ctr(None, Some(25.0)), Resolution::NotReady);
        assert_eq!(resolve_ctr(Some(1000.0), None), Resolution::NotReady);
        assert_eq!(resolve_ctr(None, None), Resolution::NotReady);
    }

    #[test]
    fn ctr_grows_with_clicks() {
        let impressions = Some(5000.0);
        let mut last = -1.0;
        for clicks in [0.0, 1.0, 50.0, 500.0, 5000.0] {
            let value = solved(resolve_ctr(impressions, Some(clicks))).value;
            assert!(value > last, "ctr must grow with clicks ({clicks})");
            last = value;
        }
    }

    #[test]
    fn rounding_ties_go_away_from_zero() {
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(0.125, 2), 0.13);
        assert_eq!(round_half_away(20_000.0, 0), 20_000.0);
    }

    #[test]
    fn write_back_uses_field_decimals() {
        assert_eq!(write_back_value(MetricField::Impressions, 20_000.0), "20000");
        assert_eq!(write_back_value(MetricField::Cpm, 5.0), "5.00");
        assert_eq!(write_back_value(MetricField::TotalCost, 0.125), "0.13");
    }

    #[test]
    fn report_carries_full_precision_and_rounded_write_back() {
        let r = report(&resolve_cpm(Some(1.0), Some(3.0), None));
        assert_eq!(r.status, "solved");
        assert_eq!(r.field.as_deref(), Some("impressions"));
        assert_eq!(r.field_value.as_deref(), Some("333"));
        let value = r.value.expect("solved report has a value");
        assert!((value - 1000.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn report_statuses_for_non_results() {
        assert_eq!(report(&Resolution::NotReady).status, "not_ready");
        assert_eq!(report(&Resolution::DivisionByZero).status, "division_by_zero");
        assert_eq!(report(&Resolution::DivisionByZero).value, None);
    }
}
