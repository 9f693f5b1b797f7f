//! Applying a ready-made template to a session.

use kreator_catalog::{ProjectTemplate, product};
use kreator_core::DomainResult;

use crate::session::{EmbroideryPatch, Session, SessionCommand};

impl Session {
    /// Pre-fill the configuration from a template.
    ///
    /// Replays the template through the command pipeline: product selection
    /// first (clearing any previous dependents), then the option setters and
    /// extras. Hardware is skipped for products whose hardware step is
    /// disabled. The current step is left alone, matching the picker's
    /// behavior of filling the form without navigating.
    pub fn apply_template(&mut self, template: &ProjectTemplate) -> DomainResult<()> {
        self.execute(&SessionCommand::SelectProduct(template.product))?;
        self.execute(&SessionCommand::SetMaterial(template.material))?;
        self.execute(&SessionCommand::SetLining(template.lining))?;
        if product(template.product).enabled_steps.hardware {
            self.execute(&SessionCommand::SetHardware(template.hardware))?;
        }
        if !template.embroidery_text.is_empty() {
            self.execute(&SessionCommand::SetEmbroidery(EmbroideryPatch::text(
                template.embroidery_text,
            )))?;
        }
        for extra in template.extras {
            self.execute(&SessionCommand::ToggleExtra(*extra))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kreator_catalog::{
        ExtraKey, HardwareColor, MaterialType, ProductKey, StepKey, TemplateKey, template,
    };
    use kreator_core::SessionId;

    #[test]
    fn template_fills_every_configured_field() {
        let mut s = Session::new(SessionId::new());
        s.apply_template(template(TemplateKey::PlecakMamaClassic))
            .unwrap();

        assert_eq!(s.selected_product(), Some(ProductKey::PlecakMama));
        assert_eq!(s.material(), Some(MaterialType::Ekoskora));
        assert_eq!(s.hardware(), Some(HardwareColor::Gold));
        assert_eq!(s.embroidery().text, "MAMA");
        assert_eq!(s.extras(), &[ExtraKey::RaczkiCzarnaSkora]);
    }

    #[test]
    fn template_skips_hardware_for_products_without_the_step() {
        let mut s = Session::new(SessionId::new());
        s.apply_template(template(TemplateKey::WorekSpecial)).unwrap();

        assert_eq!(s.selected_product(), Some(ProductKey::Worek));
        assert!(s.hardware().is_none());
        assert_eq!(s.embroidery().text, "ZAKUPY");
        assert!(s.extras().is_empty());
    }

    #[test]
    fn template_overwrites_a_previous_configuration() {
        let mut s = Session::new(SessionId::new());
        s.execute(&SessionCommand::SelectProduct(ProductKey::Kosmetyczka))
            .unwrap();
        s.execute(&SessionCommand::SetMaterial(MaterialType::LenB))
            .unwrap();
        s.execute(&SessionCommand::ToggleExtra(ExtraKey::KosmetyczkaRozmiarM))
            .unwrap();

        s.apply_template(template(TemplateKey::TorbaczDuzaElegant))
            .unwrap();

        assert_eq!(s.selected_product(), Some(ProductKey::TorbaczDuza));
        assert_eq!(s.material(), Some(MaterialType::Ekoskora));
        assert_eq!(s.extras(), &[ExtraKey::RaczkiCzarnaSkora]);
    }

    #[test]
    fn template_leaves_the_current_step_alone() {
        let mut s = Session::new(SessionId::new());
        s.execute(&SessionCommand::SetStep(StepKey::Material)).unwrap();
        s.apply_template(template(TemplateKey::EtuiLaptopCompact))
            .unwrap();
        assert_eq!(s.step(), StepKey::Material);
    }
}
