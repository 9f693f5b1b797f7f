use serde::{Deserialize, Serialize};

use kreator_catalog::{
    EmbroideryFont, EmbroideryMode, EmbroideryPresetId, ExtraKey, HardwareColor, LiningColor,
    MaterialType, ProductKey, StepKey, ThreadColor, find_product,
};
use kreator_core::{Aggregate, AggregateRoot, DomainError, DomainResult, SessionId};

use crate::navigation::{next_enabled_step, previous_enabled_step};

/// Embroidery configuration.
///
/// `text` is meaningful in custom mode, `preset_id` in preset mode; font,
/// size and thread colour are cosmetic with no cross-field invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbroideryState {
    pub mode: EmbroideryMode,
    pub text: String,
    pub font: EmbroideryFont,
    pub size: u32,
    pub thread_color: ThreadColor,
    pub preset_id: Option<EmbroideryPresetId>,
}

impl Default for EmbroideryState {
    fn default() -> Self {
        Self {
            mode: EmbroideryMode::Custom,
            text: String::new(),
            font: EmbroideryFont::Sans,
            size: 24,
            thread_color: ThreadColor::Black,
            preset_id: None,
        }
    }
}

/// Shallow-merge patch for [`EmbroideryState`].
///
/// `None` fields leave the current value untouched. `preset_id` is doubly
/// optional so a patch can both assign and clear a preset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmbroideryPatch {
    pub mode: Option<EmbroideryMode>,
    pub text: Option<String>,
    pub font: Option<EmbroideryFont>,
    pub size: Option<u32>,
    pub thread_color: Option<ThreadColor>,
    pub preset_id: Option<Option<EmbroideryPresetId>>,
}

impl EmbroideryPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn mode(mode: EmbroideryMode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    pub fn preset(preset_id: Option<EmbroideryPresetId>) -> Self {
        Self {
            preset_id: Some(preset_id),
            ..Self::default()
        }
    }
}

impl EmbroideryState {
    fn merged(&self, patch: &EmbroideryPatch) -> Self {
        Self {
            mode: patch.mode.unwrap_or(self.mode),
            text: patch.text.clone().unwrap_or_else(|| self.text.clone()),
            font: patch.font.unwrap_or(self.font),
            size: patch.size.unwrap_or(self.size),
            thread_color: patch.thread_color.unwrap_or(self.thread_color),
            preset_id: patch.preset_id.unwrap_or(self.preset_id),
        }
    }
}

/// Aggregate root: one configurator session.
///
/// Holds the full configuration state plus the current wizard step. Created
/// with nothing selected and the product step active; destroyed on explicit
/// reset or page reload. Only explicitly-saved projects outlive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    selected_product: Option<ProductKey>,
    material: Option<MaterialType>,
    lining: Option<LiningColor>,
    hardware: Option<HardwareColor>,
    embroidery: EmbroideryState,
    extras: Vec<ExtraKey>,
    step: StepKey,
    version: u64,
}

impl Session {
    /// Fresh session: no product, first step active, embroidery in default
    /// custom mode.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            selected_product: None,
            material: None,
            lining: None,
            hardware: None,
            embroidery: EmbroideryState::default(),
            extras: Vec::new(),
            step: StepKey::Product,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> SessionId {
        self.id
    }

    pub fn selected_product(&self) -> Option<ProductKey> {
        self.selected_product
    }

    pub fn material(&self) -> Option<MaterialType> {
        self.material
    }

    pub fn lining(&self) -> Option<LiningColor> {
        self.lining
    }

    pub fn hardware(&self) -> Option<HardwareColor> {
        self.hardware
    }

    pub fn embroidery(&self) -> &EmbroideryState {
        &self.embroidery
    }

    pub fn extras(&self) -> &[ExtraKey] {
        &self.extras
    }

    pub fn step(&self) -> StepKey {
        self.step
    }

    /// Handle + apply in one call. The UI layer's dispatch point.
    pub fn execute(&mut self, command: &SessionCommand) -> DomainResult<Vec<SessionEvent>> {
        let events = self.handle(command)?;
        for event in &events {
            self.apply(event);
        }
        Ok(events)
    }
}

impl AggregateRoot for Session {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Commands: every user action the wizard supports.
///
/// `SetStep` is an unchecked jump (summary "edit" links, stepper tabs);
/// `GoToNextStep`/`GoToPreviousStep` scan for the nearest enabled step. The
/// asymmetry is deliberate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionCommand {
    SelectProduct(ProductKey),
    SetMaterial(MaterialType),
    SetLining(LiningColor),
    SetHardware(HardwareColor),
    SetEmbroidery(EmbroideryPatch),
    ToggleExtra(ExtraKey),
    SetStep(StepKey),
    GoToNextStep,
    GoToPreviousStep,
    Reset,
}

/// Events describing applied session changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    ProductSelected(ProductKey),
    MaterialSet(MaterialType),
    LiningSet(LiningColor),
    HardwareSet(HardwareColor),
    /// Carries the fully-resolved state (merge + cap already applied), so
    /// `apply` stays a plain assignment.
    EmbroiderySet(EmbroideryState),
    ExtraAdded(ExtraKey),
    ExtraRemoved(ExtraKey),
    StepChanged(StepKey),
    SessionReset,
}

impl Aggregate for Session {
    type Command = SessionCommand;
    type Event = SessionEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            SessionEvent::ProductSelected(product) => {
                self.selected_product = Some(*product);
                // Dependent selections never carry over across products.
                self.material = None;
                self.lining = None;
                self.hardware = None;
                self.embroidery.text.clear();
                self.embroidery.preset_id = None;
                self.extras.clear();
            }
            SessionEvent::MaterialSet(material) => self.material = Some(*material),
            SessionEvent::LiningSet(lining) => self.lining = Some(*lining),
            SessionEvent::HardwareSet(hardware) => self.hardware = Some(*hardware),
            SessionEvent::EmbroiderySet(embroidery) => self.embroidery = embroidery.clone(),
            SessionEvent::ExtraAdded(extra) => self.extras.push(*extra),
            SessionEvent::ExtraRemoved(extra) => self.extras.retain(|e| e != extra),
            SessionEvent::StepChanged(step) => self.step = *step,
            SessionEvent::SessionReset => {
                let id = self.id;
                let version = self.version;
                *self = Session::new(id);
                self.version = version;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    /// Total over all commands: navigation beyond the enabled-step sequence
    /// and disallowed extra toggles yield no events rather than errors.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            SessionCommand::SelectProduct(product) => {
                Ok(vec![SessionEvent::ProductSelected(*product)])
            }
            SessionCommand::SetMaterial(material) => Ok(vec![SessionEvent::MaterialSet(*material)]),
            SessionCommand::SetLining(lining) => Ok(vec![SessionEvent::LiningSet(*lining)]),
            SessionCommand::SetHardware(hardware) => {
                Ok(vec![SessionEvent::HardwareSet(*hardware)])
            }
            SessionCommand::SetEmbroidery(patch) => {
                let mut merged = self.embroidery.merged(patch);
                // Cap enforced centrally, counting chars, per the selected
                // product. No product selected means no cap applies yet.
                if let Some(product) = find_product(self.selected_product) {
                    let max = product.embroidery_max_chars;
                    if merged.text.chars().count() > max {
                        merged.text = merged.text.chars().take(max).collect();
                    }
                }
                Ok(vec![SessionEvent::EmbroiderySet(merged)])
            }
            SessionCommand::ToggleExtra(extra) => {
                let allowed = find_product(self.selected_product)
                    .is_some_and(|p| p.extras_allowed.contains(extra));
                if !allowed {
                    tracing::warn!(?extra, product = ?self.selected_product, "ignoring extra not allowed for product");
                    return Ok(vec![]);
                }
                if self.extras.contains(extra) {
                    Ok(vec![SessionEvent::ExtraRemoved(*extra)])
                } else {
                    Ok(vec![SessionEvent::ExtraAdded(*extra)])
                }
            }
            SessionCommand::SetStep(step) => {
                if *step == self.step {
                    Ok(vec![])
                } else {
                    Ok(vec![SessionEvent::StepChanged(*step)])
                }
            }
            SessionCommand::GoToNextStep => {
                match next_enabled_step(self.step, self.selected_product) {
                    Some(step) => Ok(vec![SessionEvent::StepChanged(step)]),
                    None => Ok(vec![]),
                }
            }
            SessionCommand::GoToPreviousStep => {
                match previous_enabled_step(self.step, self.selected_product) {
                    Some(step) => Ok(vec![SessionEvent::StepChanged(step)]),
                    None => Ok(vec![]),
                }
            }
            SessionCommand::Reset => Ok(vec![SessionEvent::SessionReset]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(SessionId::new())
    }

    fn with_product(product: ProductKey) -> Session {
        let mut s = session();
        s.execute(&SessionCommand::SelectProduct(product)).unwrap();
        s
    }

    #[test]
    fn new_session_starts_at_product_step_with_nothing_selected() {
        let s = session();
        assert_eq!(s.step(), StepKey::Product);
        assert!(s.selected_product().is_none());
        assert!(s.material().is_none());
        assert!(s.extras().is_empty());
        assert_eq!(s.embroidery().mode, EmbroideryMode::Custom);
        assert_eq!(s.version(), 0);
    }

    #[test]
    fn selecting_a_product_resets_dependent_fields_but_not_step() {
        let mut s = with_product(ProductKey::PlecakMama);
        s.execute(&SessionCommand::SetMaterial(MaterialType::Ekoskora))
            .unwrap();
        s.execute(&SessionCommand::SetHardware(HardwareColor::Gold))
            .unwrap();
        s.execute(&SessionCommand::ToggleExtra(ExtraKey::RaczkiCzarnaSkora))
            .unwrap();
        s.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch::text("ANIA")))
            .unwrap();
        s.execute(&SessionCommand::SetStep(StepKey::Hardware)).unwrap();

        s.execute(&SessionCommand::SelectProduct(ProductKey::Worek))
            .unwrap();

        assert_eq!(s.selected_product(), Some(ProductKey::Worek));
        assert!(s.material().is_none());
        assert!(s.hardware().is_none());
        assert!(s.extras().is_empty());
        assert!(s.embroidery().text.is_empty());
        assert!(s.embroidery().preset_id.is_none());
        // Navigation is explicit; product change leaves the step alone.
        assert_eq!(s.step(), StepKey::Hardware);
    }

    #[test]
    fn toggle_extra_is_symmetric() {
        let mut s = with_product(ProductKey::PlecakMama);
        s.execute(&SessionCommand::ToggleExtra(ExtraKey::RaczkiCzarnaSkora))
            .unwrap();
        assert_eq!(s.extras(), &[ExtraKey::RaczkiCzarnaSkora]);
        s.execute(&SessionCommand::ToggleExtra(ExtraKey::RaczkiCzarnaSkora))
            .unwrap();
        assert!(s.extras().is_empty());
    }

    #[test]
    fn toggle_extra_outside_allowed_set_is_a_no_op() {
        let mut s = with_product(ProductKey::Kosmetyczka);
        let events = s
            .execute(&SessionCommand::ToggleExtra(ExtraKey::RaczkiCzarnaSkora))
            .unwrap();
        assert!(events.is_empty());
        assert!(s.extras().is_empty());
    }

    #[test]
    fn toggle_extra_without_product_is_a_no_op() {
        let mut s = session();
        let events = s
            .execute(&SessionCommand::ToggleExtra(ExtraKey::RaczkiCzarnaSkora))
            .unwrap();
        assert!(events.is_empty());
        assert!(s.extras().is_empty());
    }

    #[test]
    fn embroidery_patch_merges_only_given_fields() {
        let mut s = with_product(ProductKey::PlecakMama);
        s.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch::text("MAMA")))
            .unwrap();
        s.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch {
            thread_color: Some(ThreadColor::Gold),
            ..EmbroideryPatch::default()
        }))
        .unwrap();

        assert_eq!(s.embroidery().text, "MAMA");
        assert_eq!(s.embroidery().thread_color, ThreadColor::Gold);
        assert_eq!(s.embroidery().font, EmbroideryFont::Sans);
    }

    #[test]
    fn embroidery_text_is_truncated_to_product_cap() {
        // Kosmetyczka caps embroidery at 10 chars.
        let mut s = with_product(ProductKey::Kosmetyczka);
        s.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch::text(
            "ABCDEFGHIJKLMNOP",
        )))
        .unwrap();
        assert_eq!(s.embroidery().text, "ABCDEFGHIJ");
    }

    #[test]
    fn embroidery_cap_counts_chars_not_bytes() {
        let mut s = with_product(ProductKey::Kosmetyczka);
        s.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch::text(
            "ŻÓŁĆŻÓŁĆŻÓŁĆ",
        )))
        .unwrap();
        assert_eq!(s.embroidery().text.chars().count(), 10);
    }

    #[test]
    fn embroidery_text_is_uncapped_without_a_product() {
        let mut s = session();
        s.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch::text(
            "A-VERY-LONG-EMBROIDERY-TEXT",
        )))
        .unwrap();
        assert_eq!(s.embroidery().text, "A-VERY-LONG-EMBROIDERY-TEXT");
    }

    #[test]
    fn preset_patch_assigns_and_clears() {
        let mut s = with_product(ProductKey::PlecakMama);
        s.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch::preset(
            Some(EmbroideryPresetId::Heart),
        )))
        .unwrap();
        assert_eq!(s.embroidery().preset_id, Some(EmbroideryPresetId::Heart));

        s.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch::preset(None)))
            .unwrap();
        assert!(s.embroidery().preset_id.is_none());
    }

    #[test]
    fn set_step_jumps_without_enablement_check() {
        // Worek disables hardware, but SetStep is the unchecked jump.
        let mut s = with_product(ProductKey::Worek);
        s.execute(&SessionCommand::SetStep(StepKey::Hardware)).unwrap();
        assert_eq!(s.step(), StepKey::Hardware);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut s = with_product(ProductKey::TorbaczDuza);
        s.execute(&SessionCommand::SetMaterial(MaterialType::Sztruks))
            .unwrap();
        s.execute(&SessionCommand::SetStep(StepKey::Summary)).unwrap();
        let id = s.id_typed();

        s.execute(&SessionCommand::Reset).unwrap();

        assert_eq!(s.id_typed(), id);
        assert!(s.selected_product().is_none());
        assert!(s.material().is_none());
        assert_eq!(s.step(), StepKey::Product);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let s = with_product(ProductKey::PlecakMama);
        let before = s.clone();

        let events1 = s.handle(&SessionCommand::SetMaterial(MaterialType::LenA)).unwrap();
        let events2 = s.handle(&SessionCommand::SetMaterial(MaterialType::LenA)).unwrap();

        assert_eq!(s, before);
        assert_eq!(events1, events2);
    }

    #[test]
    fn version_increments_per_applied_event() {
        let mut s = session();
        assert_eq!(s.version(), 0);
        s.execute(&SessionCommand::SelectProduct(ProductKey::Worek))
            .unwrap();
        assert_eq!(s.version(), 1);
        s.execute(&SessionCommand::SetMaterial(MaterialType::LenB))
            .unwrap();
        assert_eq!(s.version(), 2);
        // No-op commands produce no events and leave the version alone.
        s.execute(&SessionCommand::SetStep(StepKey::Product)).unwrap();
        assert_eq!(s.version(), 2);
    }
}
