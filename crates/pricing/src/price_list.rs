//! Price tables keyed by the catalog's closed enums.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use kreator_catalog::{ExtraKey, HardwareColor, LiningColor, MaterialType, ProductKey};
use kreator_core::ValueObject;

/// Price tables for one storefront.
///
/// A table may legitimately lack an entry (an option on sale without a price
/// configured yet); lookups then contribute zero. The default list carries the
/// current storefront prices. The two `pasek-*` extras are offered without a
/// configured price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceList {
    pub base: BTreeMap<ProductKey, u64>,
    pub materials: BTreeMap<MaterialType, u64>,
    pub linings: BTreeMap<LiningColor, u64>,
    pub hardware: BTreeMap<HardwareColor, u64>,
    pub embroidery_per_char: u64,
    pub extras: BTreeMap<ExtraKey, u64>,
}

impl ValueObject for PriceList {}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            base: BTreeMap::from([
                (ProductKey::PlecakMama, 299),
                (ProductKey::PlecakDziecko, 199),
                (ProductKey::Worek, 89),
                (ProductKey::TorbaczDuza, 399),
                (ProductKey::TorbaczMala, 299),
                (ProductKey::Kosmetyczka, 149),
                (ProductKey::TorbaLaptop, 349),
                (ProductKey::EtuiLaptop, 199),
            ]),
            materials: BTreeMap::from([
                (MaterialType::Ekoskora, 50),
                (MaterialType::Sztruks, 40),
                (MaterialType::LenA, 45),
                (MaterialType::LenB, 45),
                (MaterialType::LenC, 55),
            ]),
            linings: BTreeMap::from([(LiningColor::White, 10), (LiningColor::Black, 15)]),
            hardware: BTreeMap::from([(HardwareColor::Silver, 20), (HardwareColor::Gold, 25)]),
            embroidery_per_char: 2,
            extras: BTreeMap::from([
                (ExtraKey::RaczkiCzarnaSkora, 30),
                (ExtraKey::RaczkiBrazowaSkora, 35),
                (ExtraKey::KosmetyczkaRozmiarS, 0),
                (ExtraKey::KosmetyczkaRozmiarM, 10),
                (ExtraKey::KosmetyczkaRozmiarL, 20),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_prices_every_product() {
        let list = PriceList::default();
        for key in ProductKey::ALL {
            assert!(list.base.contains_key(&key), "{key:?} has no base price");
        }
    }

    #[test]
    fn default_list_prices_every_material() {
        let list = PriceList::default();
        for material in MaterialType::ALL {
            assert!(list.materials.contains_key(&material));
        }
    }

    #[test]
    fn pasek_extras_are_deliberately_unpriced() {
        let list = PriceList::default();
        assert!(!list.extras.contains_key(&ExtraKey::PasekCzarnaSkora));
        assert!(!list.extras.contains_key(&ExtraKey::PasekBrazowaSkora));
    }
}
