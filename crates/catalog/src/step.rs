//! Wizard step registry.
//!
//! The ordered step sequence is fixed at compile time; per-product enablement
//! is the only variability.

use serde::{Deserialize, Serialize};

use crate::options::ProductKey;
use crate::product::find_product;

/// One stage of the personalization wizard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKey {
    Product,
    Material,
    Lining,
    Hardware,
    Embroidery,
    Extras,
    Summary,
}

/// Traversal order of the wizard.
pub const STEP_ORDER: [StepKey; 7] = [
    StepKey::Product,
    StepKey::Material,
    StepKey::Lining,
    StepKey::Hardware,
    StepKey::Embroidery,
    StepKey::Extras,
    StepKey::Summary,
];

impl StepKey {
    /// Position of this step in [`STEP_ORDER`].
    pub fn index(self) -> usize {
        match self {
            StepKey::Product => 0,
            StepKey::Material => 1,
            StepKey::Lining => 2,
            StepKey::Hardware => 3,
            StepKey::Embroidery => 4,
            StepKey::Extras => 5,
            StepKey::Summary => 6,
        }
    }

    /// Whether this step participates in navigation for the given product.
    ///
    /// Product selection and summary are always enabled; the optional steps
    /// read the product's catalog flags, and an unset product disables them.
    pub fn is_enabled_for(self, product: Option<ProductKey>) -> bool {
        match self {
            StepKey::Product | StepKey::Summary => true,
            StepKey::Material => find_product(product).is_some_and(|p| p.enabled_steps.material),
            StepKey::Lining => find_product(product).is_some_and(|p| p.enabled_steps.lining),
            StepKey::Hardware => find_product(product).is_some_and(|p| p.enabled_steps.hardware),
            StepKey::Embroidery => {
                find_product(product).is_some_and(|p| p.enabled_steps.embroidery)
            }
            StepKey::Extras => find_product(product).is_some_and(|p| p.enabled_steps.extras),
        }
    }
}

/// Free-function form of [`StepKey::is_enabled_for`], matching the catalog's
/// lookup-style surface.
pub fn is_step_enabled(step: StepKey, product: Option<ProductKey>) -> bool {
    step.is_enabled_for(product)
}

/// Display metadata for one step (consumed by the rendering layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub key: StepKey,
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static STEPS: [StepDefinition; 7] = [
    StepDefinition {
        key: StepKey::Product,
        label: "Produkt",
        title: "Wybór produktu",
        description: "Wybierz produkt, który chcesz spersonalizować",
    },
    StepDefinition {
        key: StepKey::Material,
        label: "Materiał",
        title: "Wybór materiału",
        description: "Wybierz materiał zewnętrzny",
    },
    StepDefinition {
        key: StepKey::Lining,
        label: "Podszewka",
        title: "Wybór podszewki",
        description: "Dobierz kolor podszewki",
    },
    StepDefinition {
        key: StepKey::Hardware,
        label: "Okucia",
        title: "Okucia i zamki",
        description: "Wybierz kolor okuć i zamków",
    },
    StepDefinition {
        key: StepKey::Embroidery,
        label: "Haft",
        title: "Personalizacja haftu",
        description: "Ustaw haft: własny tekst lub gotowy wzór",
    },
    StepDefinition {
        key: StepKey::Extras,
        label: "Dodatki",
        title: "Opcje dodatkowe",
        description: "Dodaj opcje dodatkowe do produktu",
    },
    StepDefinition {
        key: StepKey::Summary,
        label: "Podsumowanie",
        title: "Podsumowanie",
        description: "Sprawdź konfigurację i złóż zamówienie",
    },
];

/// Display metadata lookup. Total over the closed step enum.
pub fn step_definition(key: StepKey) -> &'static StepDefinition {
    &STEPS[key.index()]
}
