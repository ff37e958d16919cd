use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Symbolic icon attached to a calculation result. The display layer maps
/// these to whatever glyphs it has; the core only names the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Eye,
    Target,
    Currency,
    Pointer,
}

/// A metric field the CPM solver can derive and write back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    TotalCost,
    Cpm,
    Impressions,
}

impl MetricField {
    pub fn key(self) -> &'static str {
        match self {
            MetricField::TotalCost => "total_cost",
            MetricField::Cpm => "cpm",
            MetricField::Impressions => "impressions",
        }
    }

    /// Decimal places used when the derived value is written back into
    /// its field. Impressions are whole events; money keeps cents.
    pub fn decimals(self) -> usize {
        match self {
            MetricField::Impressions => 0,
            MetricField::TotalCost | MetricField::Cpm => 2,
        }
    }
}

/// One successful calculation. `value` keeps full precision for display;
/// `target` names the field the caller should write the rounded value
/// back into (CTR has no write-back target).
#[derive(Debug, Clone, PartialEq)]
pub struct CalcResult {
    pub value: f64,
    pub label: &'static str,
    pub icon: IconKind,
    pub target: Option<MetricField>,
}

/// Outcome of a resolver call. A tagged enum rather than an error type:
/// none of these cross the boundary as a failure, the collaborator just
/// branches on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Solved(CalcResult),
    NotReady,
    DivisionByZero,
}

/// Flat report emitted by the CLI for any resolver outcome.
#[derive(Serialize, Default)]
pub struct CalcReport {
    pub status: String,
    pub label: Option<String>,
    pub icon: Option<IconKind>,
    pub value: Option<f64>,
    pub field: Option<String>,
    pub field_value: Option<String>,
}

#[derive(Serialize)]
pub struct GuardReport {
    pub text: String,
    pub valid: bool,
}

/// Which calculator group a session command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalcGroup {
    #[default]
    Cpm,
    Ctr,
}

impl CalcGroup {
    pub fn key(self) -> &'static str {
        match self {
            CalcGroup::Cpm => "cpm",
            CalcGroup::Ctr => "ctr",
        }
    }
}

/// Raw field text for the CPM group. Empty string means unset; the parse
/// step is deferred to calculation time so in-progress entry like "12."
/// is never rejected here.
#[derive(Debug, Default, Clone)]
pub struct CpmFields {
    pub total_cost: String,
    pub cpm: String,
    pub impressions: String,
}

#[derive(Debug, Default, Clone)]
pub struct CtrFields {
    pub impressions: String,
    pub clicks: String,
}

/// In-memory state of one interactive session. Created empty, mutated by
/// session commands, gone when the process exits. Each group keeps its own
/// last result so resetting one group cannot disturb the other.
#[derive(Debug, Default)]
pub struct SessionState {
    pub active: CalcGroup,
    pub cpm: CpmFields,
    pub cpm_result: Option<CalcResult>,
    pub ctr: CtrFields,
    pub ctr_result: Option<CalcResult>,
}

#[derive(Serialize)]
pub struct FieldView {
    pub name: String,
    pub value: String,
}

#[derive(Serialize)]
pub struct GroupView {
    pub group: String,
    pub fields: Vec<FieldView>,
    pub result: Option<CalcReport>,
}
