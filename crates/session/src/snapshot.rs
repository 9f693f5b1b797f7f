//! Serializable configuration snapshot.
//!
//! The snapshot is the exchange format at the collaborator seams: project
//! history saves it, order submission carries it, and restore replays it
//! through the session's own command pipeline.

use serde::{Deserialize, Serialize};

use kreator_catalog::{
    ExtraKey, HardwareColor, LiningColor, MaterialType, ProductKey, StepKey,
};
use kreator_core::{DomainResult, ValueObject};

use crate::session::{EmbroideryPatch, EmbroideryState, Session, SessionCommand};

/// The serializable subset of the session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub selected_product: Option<ProductKey>,
    pub material: Option<MaterialType>,
    pub lining: Option<LiningColor>,
    pub hardware: Option<HardwareColor>,
    pub embroidery: EmbroideryState,
    pub extras: Vec<ExtraKey>,
    pub step: StepKey,
}

impl ValueObject for ConfigSnapshot {}

impl Session {
    /// Export the current configuration for persistence or order submission.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            selected_product: self.selected_product(),
            material: self.material(),
            lining: self.lining(),
            hardware: self.hardware(),
            embroidery: self.embroidery().clone(),
            extras: self.extras().to_vec(),
            step: self.step(),
        }
    }

    /// Rebuild state from a snapshot by replaying it through the mutators.
    ///
    /// Product selection goes first (it clears dependents), then the setters,
    /// then the step jump. Extras a product no longer allows are dropped by
    /// the toggle's own guard, and embroidery text passes the central cap
    /// again, so a restored session always satisfies the same invariants as a
    /// live one.
    pub fn restore(&mut self, snapshot: &ConfigSnapshot) -> DomainResult<()> {
        self.execute(&SessionCommand::Reset)?;
        if let Some(product) = snapshot.selected_product {
            self.execute(&SessionCommand::SelectProduct(product))?;
        }
        if let Some(material) = snapshot.material {
            self.execute(&SessionCommand::SetMaterial(material))?;
        }
        if let Some(lining) = snapshot.lining {
            self.execute(&SessionCommand::SetLining(lining))?;
        }
        if let Some(hardware) = snapshot.hardware {
            self.execute(&SessionCommand::SetHardware(hardware))?;
        }
        self.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch {
            mode: Some(snapshot.embroidery.mode),
            text: Some(snapshot.embroidery.text.clone()),
            font: Some(snapshot.embroidery.font),
            size: Some(snapshot.embroidery.size),
            thread_color: Some(snapshot.embroidery.thread_color),
            preset_id: Some(snapshot.embroidery.preset_id),
        }))?;
        for extra in &snapshot.extras {
            self.execute(&SessionCommand::ToggleExtra(*extra))?;
        }
        self.execute(&SessionCommand::SetStep(snapshot.step))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kreator_catalog::{EmbroideryMode, EmbroideryPresetId};
    use kreator_core::SessionId;

    fn configured_session() -> Session {
        let mut s = Session::new(SessionId::new());
        s.execute(&SessionCommand::SelectProduct(ProductKey::PlecakMama))
            .unwrap();
        s.execute(&SessionCommand::SetMaterial(MaterialType::Ekoskora))
            .unwrap();
        s.execute(&SessionCommand::SetLining(LiningColor::White))
            .unwrap();
        s.execute(&SessionCommand::SetHardware(HardwareColor::Gold))
            .unwrap();
        s.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch::text("MAMA")))
            .unwrap();
        s.execute(&SessionCommand::ToggleExtra(ExtraKey::RaczkiCzarnaSkora))
            .unwrap();
        s.execute(&SessionCommand::SetStep(StepKey::Summary)).unwrap();
        s
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = configured_session().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ConfigSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn snapshot_uses_storefront_ids_on_the_wire() {
        let json = serde_json::to_string(&configured_session().snapshot()).unwrap();
        assert!(json.contains("\"plecak-mama\""));
        assert!(json.contains("\"ekoskora\""));
        assert!(json.contains("\"raczki-czarna-skora\""));
    }

    #[test]
    fn restore_reproduces_the_snapshotted_configuration() {
        let original = configured_session();
        let snapshot = original.snapshot();

        let mut restored = Session::new(SessionId::new());
        restored.restore(&snapshot).unwrap();

        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.step(), StepKey::Summary);
    }

    #[test]
    fn restore_overwrites_previous_state() {
        let snapshot = configured_session().snapshot();

        let mut s = Session::new(SessionId::new());
        s.execute(&SessionCommand::SelectProduct(ProductKey::Worek))
            .unwrap();
        s.execute(&SessionCommand::SetMaterial(MaterialType::LenB))
            .unwrap();
        s.restore(&snapshot).unwrap();

        assert_eq!(s.selected_product(), Some(ProductKey::PlecakMama));
        assert_eq!(s.material(), Some(MaterialType::Ekoskora));
    }

    #[test]
    fn restore_drops_extras_the_product_does_not_allow() {
        // A hand-edited or stale snapshot: kosmetyczka with a raczki extra.
        let snapshot = ConfigSnapshot {
            selected_product: Some(ProductKey::Kosmetyczka),
            material: None,
            lining: None,
            hardware: None,
            embroidery: EmbroideryState::default(),
            extras: vec![ExtraKey::RaczkiCzarnaSkora, ExtraKey::KosmetyczkaRozmiarM],
            step: StepKey::Extras,
        };

        let mut s = Session::new(SessionId::new());
        s.restore(&snapshot).unwrap();
        assert_eq!(s.extras(), &[ExtraKey::KosmetyczkaRozmiarM]);
    }

    #[test]
    fn restore_reapplies_the_embroidery_cap() {
        let snapshot = ConfigSnapshot {
            selected_product: Some(ProductKey::Kosmetyczka),
            material: None,
            lining: None,
            hardware: None,
            embroidery: EmbroideryState {
                mode: EmbroideryMode::Custom,
                text: "WAY-TOO-LONG-FOR-KOSMETYCZKA".to_string(),
                preset_id: Some(EmbroideryPresetId::Star),
                ..EmbroideryState::default()
            },
            extras: vec![],
            step: StepKey::Embroidery,
        };

        let mut s = Session::new(SessionId::new());
        s.restore(&snapshot).unwrap();
        assert_eq!(s.embroidery().text.chars().count(), 10);
        assert_eq!(s.embroidery().preset_id, Some(EmbroideryPresetId::Star));
    }
}
