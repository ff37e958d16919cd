use crate::domain::models::{
    CalcGroup, CpmFields, CtrFields, FieldView, GroupView, MetricField, Resolution, SessionState,
};
use crate::services::guard::{is_valid_numeric_input, parse_field};
use crate::services::resolver::{report, resolve_cpm, resolve_ctr, write_back_value};

pub fn switch_group(state: &mut SessionState, name: &str) -> anyhow::Result<()> {
    state.active = match name {
        "cpm" => CalcGroup::Cpm,
        "ctr" => CalcGroup::Ctr,
        other => anyhow::bail!("unknown group {:?} (expected cpm or ctr)", other),
    };
    Ok(())
}

/// Replace a field's text, subject to the entry guard. A rejected value
/// leaves the field exactly as it was.
pub fn set_field(state: &mut SessionState, name: &str, value: &str) -> anyhow::Result<()> {
    if !is_valid_numeric_input(value) {
        anyhow::bail!(
            "dropped {:?}: fields take digits and at most one decimal point",
            value
        );
    }
    *field_slot(state, name)? = value.to_string();
    Ok(())
}

fn field_slot<'a>(state: &'a mut SessionState, name: &str) -> anyhow::Result<&'a mut String> {
    match (state.active, name) {
        (CalcGroup::Cpm, "total-cost" | "total_cost" | "cost") => Ok(&mut state.cpm.total_cost),
        (CalcGroup::Cpm, "cpm") => Ok(&mut state.cpm.cpm),
        (CalcGroup::Cpm, "impressions") => Ok(&mut state.cpm.impressions),
        (CalcGroup::Ctr, "impressions") => Ok(&mut state.ctr.impressions),
        (CalcGroup::Ctr, "clicks") => Ok(&mut state.ctr.clicks),
        (group, _) => anyhow::bail!("no field {:?} in the {} group", name, group.key()),
    }
}

/// Run the active group's resolver over the current field texts. On a
/// solve, the derived value is written back into its field (rounded) and
/// the group's last result is replaced; NotReady and DivisionByZero leave
/// both fields and result untouched.
pub fn calculate(state: &mut SessionState) -> Resolution {
    match state.active {
        CalcGroup::Cpm => {
            let resolution = resolve_cpm(
                parse_field(&state.cpm.total_cost),
                parse_field(&state.cpm.cpm),
                parse_field(&state.cpm.impressions),
            );
            if let Resolution::Solved(result) = &resolution {
                if let Some(field) = result.target {
                    let text = write_back_value(field, result.value);
                    match field {
                        MetricField::TotalCost => state.cpm.total_cost = text,
                        MetricField::Cpm => state.cpm.cpm = text,
                        MetricField::Impressions => state.cpm.impressions = text,
                    }
                }
                state.cpm_result = Some(result.clone());
            }
            resolution
        }
        CalcGroup::Ctr => {
            let resolution = resolve_ctr(
                parse_field(&state.ctr.impressions),
                parse_field(&state.ctr.clicks),
            );
            if let Resolution::Solved(result) = &resolution {
                state.ctr_result = Some(result.clone());
            }
            resolution
        }
    }
}

/// Clear the active group's fields and its last result in one step.
/// The other group is deliberately untouched.
pub fn reset(state: &mut SessionState) {
    match state.active {
        CalcGroup::Cpm => {
            state.cpm = CpmFields::default();
            state.cpm_result = None;
        }
        CalcGroup::Ctr => {
            state.ctr = CtrFields::default();
            state.ctr_result = None;
        }
    }
}

pub fn group_view(state: &SessionState) -> GroupView {
    let field = |name: &str, value: &str| FieldView {
        name: name.to_string(),
        value: value.to_string(),
    };
    match state.active {
        CalcGroup::Cpm => GroupView {
            group: "cpm".to_string(),
            fields: vec![
                field("total-cost", &state.cpm.total_cost),
                field("cpm", &state.cpm.cpm),
                field("impressions", &state.cpm.impressions),
            ],
            result: state
                .cpm_result
                .clone()
                .map(|r| report(&Resolution::Solved(r))),
        },
        CalcGroup::Ctr => GroupView {
            group: "ctr".to_string(),
            fields: vec![
                field("impressions", &state.ctr.impressions),
                field("clicks", &state.ctr.clicks),
            ],
            result: state
                .ctr_result
                .clone()
                .map(|r| report(&Resolution::Solved(r))),
        },
    }
}
