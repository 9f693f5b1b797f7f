//! Predefined project templates.
//!
//! Ready-made starting configurations shown alongside saved projects: picking
//! one pre-fills product, material, lining, hardware, embroidery text and
//! extras in a single action. Static data, same closed-enum keying as the
//! rest of the catalog.

use serde::{Deserialize, Serialize};

use crate::options::{ExtraKey, HardwareColor, LiningColor, MaterialType, ProductKey};

/// Template identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKey {
    PlecakMamaClassic,
    PlecakDzieckoTrendy,
    WorekSpecial,
    TorbaczDuzaElegant,
    TorbaczMalaPractical,
    KosmetyczkaOrganizer,
    TorbaLaptopProfessional,
    EtuiLaptopCompact,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 8] = [
        TemplateKey::PlecakMamaClassic,
        TemplateKey::PlecakDzieckoTrendy,
        TemplateKey::WorekSpecial,
        TemplateKey::TorbaczDuzaElegant,
        TemplateKey::TorbaczMalaPractical,
        TemplateKey::KosmetyczkaOrganizer,
        TemplateKey::TorbaLaptopProfessional,
        TemplateKey::EtuiLaptopCompact,
    ];
}

/// Browsing category in the template picker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Popular,
    Trending,
    Classic,
}

/// One ready-made configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTemplate {
    pub key: TemplateKey,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub product: ProductKey,
    pub material: MaterialType,
    pub lining: LiningColor,
    /// Ignored when the product disables the hardware step.
    pub hardware: HardwareColor,
    pub embroidery_text: &'static str,
    pub extras: &'static [ExtraKey],
}

pub static TEMPLATES: [ProjectTemplate; 8] = [
    ProjectTemplate {
        key: TemplateKey::PlecakMamaClassic,
        name: "Plecak dla Mamy - Klasyczny",
        description: "Elegancki plecak z klasycznymi kolorami, idealny na co dzień",
        category: TemplateCategory::Popular,
        product: ProductKey::PlecakMama,
        material: MaterialType::Ekoskora,
        lining: LiningColor::Black,
        hardware: HardwareColor::Gold,
        embroidery_text: "MAMA",
        extras: &[ExtraKey::RaczkiCzarnaSkora],
    },
    ProjectTemplate {
        key: TemplateKey::PlecakDzieckoTrendy,
        name: "Plecak dla Dziecka - Trendy",
        description: "Kolorowy plecak z personalizowanym haftem dla najmłodszych",
        category: TemplateCategory::Trending,
        product: ProductKey::PlecakDziecko,
        material: MaterialType::Ekoskora,
        lining: LiningColor::White,
        hardware: HardwareColor::Silver,
        embroidery_text: "ANNA",
        extras: &[ExtraKey::RaczkiBrazowaSkora],
    },
    ProjectTemplate {
        key: TemplateKey::WorekSpecial,
        name: "Worek - Specjalny",
        description: "Praktyczny worek bez okuć, idealny na zakupy",
        category: TemplateCategory::Classic,
        product: ProductKey::Worek,
        material: MaterialType::Ekoskora,
        lining: LiningColor::Black,
        // Worek disables the hardware step; the value is never applied.
        hardware: HardwareColor::Gold,
        embroidery_text: "ZAKUPY",
        extras: &[],
    },
    ProjectTemplate {
        key: TemplateKey::TorbaczDuzaElegant,
        name: "Duża Torba Torbacz - Elegancka",
        description: "Duża torba w eleganckich kolorach, idealna na weekend",
        category: TemplateCategory::Popular,
        product: ProductKey::TorbaczDuza,
        material: MaterialType::Ekoskora,
        lining: LiningColor::Black,
        hardware: HardwareColor::Gold,
        embroidery_text: "WEEKEND",
        extras: &[ExtraKey::RaczkiCzarnaSkora],
    },
    ProjectTemplate {
        key: TemplateKey::TorbaczMalaPractical,
        name: "Mała Torba Torbacz - Praktyczna",
        description: "Kompaktowa torba na co dzień z eleganckimi detalami",
        category: TemplateCategory::Trending,
        product: ProductKey::TorbaczMala,
        material: MaterialType::Ekoskora,
        lining: LiningColor::White,
        hardware: HardwareColor::Silver,
        embroidery_text: "CODZIENNIE",
        extras: &[ExtraKey::RaczkiBrazowaSkora],
    },
    ProjectTemplate {
        key: TemplateKey::KosmetyczkaOrganizer,
        name: "Kosmetyczka - Organizer",
        description: "Praktyczna kosmetyczka z organizacją wewnętrzną",
        category: TemplateCategory::Trending,
        product: ProductKey::Kosmetyczka,
        material: MaterialType::Ekoskora,
        lining: LiningColor::White,
        hardware: HardwareColor::Silver,
        embroidery_text: "BEAUTY",
        extras: &[ExtraKey::KosmetyczkaRozmiarL],
    },
    ProjectTemplate {
        key: TemplateKey::TorbaLaptopProfessional,
        name: "Torba na Laptopa - Profesjonalna",
        description: "Profesjonalna torba do pracy z eleganckimi detalami",
        category: TemplateCategory::Popular,
        product: ProductKey::TorbaLaptop,
        material: MaterialType::Ekoskora,
        lining: LiningColor::Black,
        hardware: HardwareColor::Gold,
        embroidery_text: "BIZNES",
        extras: &[ExtraKey::RaczkiCzarnaSkora],
    },
    ProjectTemplate {
        key: TemplateKey::EtuiLaptopCompact,
        name: "Etui na Laptopa - Kompaktowe",
        description: "Kompaktowe etui chroniące laptopa w podróży",
        category: TemplateCategory::Classic,
        product: ProductKey::EtuiLaptop,
        material: MaterialType::Ekoskora,
        lining: LiningColor::White,
        hardware: HardwareColor::Silver,
        embroidery_text: "PODRÓŻ",
        extras: &[],
    },
];

/// Look up a template. Total over the closed key enum.
pub fn template(key: TemplateKey) -> &'static ProjectTemplate {
    match key {
        TemplateKey::PlecakMamaClassic => &TEMPLATES[0],
        TemplateKey::PlecakDzieckoTrendy => &TEMPLATES[1],
        TemplateKey::WorekSpecial => &TEMPLATES[2],
        TemplateKey::TorbaczDuzaElegant => &TEMPLATES[3],
        TemplateKey::TorbaczMalaPractical => &TEMPLATES[4],
        TemplateKey::KosmetyczkaOrganizer => &TEMPLATES[5],
        TemplateKey::TorbaLaptopProfessional => &TEMPLATES[6],
        TemplateKey::EtuiLaptopCompact => &TEMPLATES[7],
    }
}

/// All templates in one browsing category, in catalog order.
pub fn templates_by_category(
    category: TemplateCategory,
) -> impl Iterator<Item = &'static ProjectTemplate> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

/// All templates starting from the given product, in catalog order.
pub fn templates_for_product(
    product: ProductKey,
) -> impl Iterator<Item = &'static ProjectTemplate> {
    TEMPLATES.iter().filter(move |t| t.product == product)
}
