//! Constraint-violation flags for a single input.

/// Why an input fails its constraints, flag by flag, the way browsers report
/// it. Several flags can be set at once; [`crate::FieldResult`] picks the one
/// that wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub too_short: bool,
    pub pattern_mismatch: bool,
    pub custom_error: bool,
}

impl ValidityState {
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.too_short
            || self.pattern_mismatch
            || self.custom_error)
    }
}
