//! Product catalog and step registry.
//!
//! Static, read-only lookup data for the personalization wizard: which
//! products exist, which steps each product enables, the closed sets of
//! selectable option values, and the ready-made project templates. Loaded
//! once at process start, never mutated.

pub mod options;
pub mod product;
pub mod step;
pub mod template;

pub use options::{
    EmbroideryFont, EmbroideryMode, EmbroideryPresetId, ExtraKey, HardwareColor, LiningColor,
    MaterialType, ProductKey, ThreadColor,
};
pub use product::{EnabledSteps, ProductConfig, find_product, product};
pub use step::{STEP_ORDER, StepDefinition, StepKey, is_step_enabled, step_definition};
pub use template::{
    ProjectTemplate, TemplateCategory, TemplateKey, template, templates_by_category,
    templates_for_product,
};
