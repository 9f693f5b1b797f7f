//! Closed enumerations for every selectable value.
//!
//! The storefront keys these by loosely-typed strings; here each set is a
//! closed sum type so an out-of-catalog value has no runtime representation.
//! Serde renames keep the wire/storage form identical to the storefront ids.

use serde::{Deserialize, Serialize};

/// Sellable product type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductKey {
    PlecakMama,
    PlecakDziecko,
    Worek,
    TorbaczDuza,
    TorbaczMala,
    Kosmetyczka,
    TorbaLaptop,
    EtuiLaptop,
}

impl ProductKey {
    /// Every product, in catalog display order.
    pub const ALL: [ProductKey; 8] = [
        ProductKey::PlecakMama,
        ProductKey::PlecakDziecko,
        ProductKey::Worek,
        ProductKey::TorbaczDuza,
        ProductKey::TorbaczMala,
        ProductKey::Kosmetyczka,
        ProductKey::TorbaLaptop,
        ProductKey::EtuiLaptop,
    ];
}

/// Outer material.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialType {
    Ekoskora,
    Sztruks,
    LenA,
    LenB,
    LenC,
}

impl MaterialType {
    pub const ALL: [MaterialType; 5] = [
        MaterialType::Ekoskora,
        MaterialType::Sztruks,
        MaterialType::LenA,
        MaterialType::LenB,
        MaterialType::LenC,
    ];
}

/// Lining colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiningColor {
    White,
    Black,
}

/// Hardware (fittings/zips) colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardwareColor {
    Silver,
    Gold,
}

/// Embroidery input mode: free text or a predefined pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbroideryMode {
    Custom,
    Preset,
}

/// Embroidery typeface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbroideryFont {
    Sans,
    Serif,
    Script,
}

/// Embroidery thread colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadColor {
    Black,
    White,
    Gold,
    Silver,
    Red,
    Blue,
}

/// Predefined embroidery pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbroideryPresetId {
    Heart,
    Star,
    Smile,
    AlphabetInitial,
}

/// Optional add-on component, restricted per product via
/// [`ProductConfig::extras_allowed`](crate::product::ProductConfig).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtraKey {
    RaczkiCzarnaSkora,
    RaczkiBrazowaSkora,
    PasekCzarnaSkora,
    PasekBrazowaSkora,
    #[serde(rename = "kosmetyczka-rozmiar-S")]
    KosmetyczkaRozmiarS,
    #[serde(rename = "kosmetyczka-rozmiar-M")]
    KosmetyczkaRozmiarM,
    #[serde(rename = "kosmetyczka-rozmiar-L")]
    KosmetyczkaRozmiarL,
}

impl ExtraKey {
    pub const ALL: [ExtraKey; 7] = [
        ExtraKey::RaczkiCzarnaSkora,
        ExtraKey::RaczkiBrazowaSkora,
        ExtraKey::PasekCzarnaSkora,
        ExtraKey::PasekBrazowaSkora,
        ExtraKey::KosmetyczkaRozmiarS,
        ExtraKey::KosmetyczkaRozmiarM,
        ExtraKey::KosmetyczkaRozmiarL,
    ];
}
