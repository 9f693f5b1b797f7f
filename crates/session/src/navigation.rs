//! Navigation engine over the fixed step sequence.
//!
//! All predicates here are total functions over possibly-unset state: they
//! answer `false` or "stay put" instead of erroring.

use kreator_catalog::{ProductKey, STEP_ORDER, StepKey};

use crate::session::Session;

/// First enabled step after `current`, if any.
pub fn next_enabled_step(current: StepKey, product: Option<ProductKey>) -> Option<StepKey> {
    STEP_ORDER
        .iter()
        .skip(current.index() + 1)
        .copied()
        .find(|step| step.is_enabled_for(product))
}

/// Nearest enabled step before `current`, if any.
pub fn previous_enabled_step(current: StepKey, product: Option<ProductKey>) -> Option<StepKey> {
    STEP_ORDER
        .iter()
        .take(current.index())
        .rev()
        .copied()
        .find(|step| step.is_enabled_for(product))
}

impl Session {
    /// Whether a step's required fields are currently satisfied.
    ///
    /// A step disabled for the selected product is vacuously valid: it imposes
    /// no requirement. The lining step gates on `material` — the lining screen
    /// is the combined configuration screen and material is its gating field.
    pub fn is_step_valid(&self, step: StepKey) -> bool {
        if !step.is_enabled_for(self.selected_product()) {
            return true;
        }
        match step {
            StepKey::Product => self.selected_product().is_some(),
            StepKey::Material => self.material().is_some(),
            StepKey::Lining => self.material().is_some(),
            StepKey::Hardware => self.hardware().is_some(),
            StepKey::Embroidery | StepKey::Extras | StepKey::Summary => true,
        }
    }

    /// Whether the Next control should be enabled.
    ///
    /// False once no enabled step follows; a current step that is itself
    /// disabled for the product is passable; otherwise the current step's own
    /// validity decides.
    pub fn can_go_to_next_step(&self) -> bool {
        if next_enabled_step(self.step(), self.selected_product()).is_none() {
            return false;
        }
        self.is_step_valid(self.step())
    }

    /// Progress-UI flag: behind the current step and valid.
    pub fn is_step_completed(&self, step: StepKey) -> bool {
        step.index() < self.step().index() && self.is_step_valid(step)
    }
}
