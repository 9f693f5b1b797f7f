//! Static product catalog.

use crate::options::{ExtraKey, ProductKey};

/// Per-product step enablement flags.
///
/// A step not flagged here is never enabled for the product, regardless of
/// any other session state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EnabledSteps {
    pub material: bool,
    pub lining: bool,
    pub hardware: bool,
    pub embroidery: bool,
    pub extras: bool,
}

impl EnabledSteps {
    const fn all() -> Self {
        Self {
            material: true,
            lining: true,
            hardware: true,
            embroidery: true,
            extras: true,
        }
    }
}

/// Catalog entry for one sellable product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductConfig {
    pub key: ProductKey,
    /// Display label; not used for logic.
    pub name: &'static str,
    pub enabled_steps: EnabledSteps,
    /// Cap on custom embroidery text length, in characters.
    pub embroidery_max_chars: usize,
    /// Extras valid for this product. Empty means the extras step has nothing
    /// to show and imposes no required selection.
    pub extras_allowed: &'static [ExtraKey],
}

static RACZKI: [ExtraKey; 2] = [ExtraKey::RaczkiCzarnaSkora, ExtraKey::RaczkiBrazowaSkora];

static KOSMETYCZKA_ROZMIARY: [ExtraKey; 3] = [
    ExtraKey::KosmetyczkaRozmiarS,
    ExtraKey::KosmetyczkaRozmiarM,
    ExtraKey::KosmetyczkaRozmiarL,
];

/// All products, in catalog display order.
pub static PRODUCTS: [ProductConfig; 8] = [
    ProductConfig {
        key: ProductKey::PlecakMama,
        name: "Plecak dla Mamy",
        enabled_steps: EnabledSteps::all(),
        embroidery_max_chars: 16,
        extras_allowed: &RACZKI,
    },
    ProductConfig {
        key: ProductKey::PlecakDziecko,
        name: "Plecak dla Dziecka",
        enabled_steps: EnabledSteps::all(),
        embroidery_max_chars: 12,
        extras_allowed: &RACZKI,
    },
    ProductConfig {
        key: ProductKey::Worek,
        name: "Worek",
        enabled_steps: EnabledSteps {
            hardware: false,
            extras: false,
            ..EnabledSteps::all()
        },
        embroidery_max_chars: 14,
        extras_allowed: &[],
    },
    ProductConfig {
        key: ProductKey::TorbaczDuza,
        name: "Duża torba Torbacz Mamy",
        enabled_steps: EnabledSteps::all(),
        embroidery_max_chars: 18,
        extras_allowed: &RACZKI,
    },
    ProductConfig {
        key: ProductKey::TorbaczMala,
        name: "Mała torba Torbacz Mamy",
        enabled_steps: EnabledSteps::all(),
        embroidery_max_chars: 16,
        extras_allowed: &RACZKI,
    },
    ProductConfig {
        key: ProductKey::Kosmetyczka,
        name: "Kosmetyczka",
        enabled_steps: EnabledSteps::all(),
        embroidery_max_chars: 10,
        extras_allowed: &KOSMETYCZKA_ROZMIARY,
    },
    ProductConfig {
        key: ProductKey::TorbaLaptop,
        name: "Torba na laptopa",
        enabled_steps: EnabledSteps::all(),
        embroidery_max_chars: 14,
        extras_allowed: &RACZKI,
    },
    ProductConfig {
        key: ProductKey::EtuiLaptop,
        name: "Etui na laptopa",
        enabled_steps: EnabledSteps {
            extras: false,
            ..EnabledSteps::all()
        },
        embroidery_max_chars: 12,
        extras_allowed: &[],
    },
];

/// Look up the catalog entry for a product.
///
/// Total: `ProductKey` is closed and the catalog covers every variant.
pub fn product(key: ProductKey) -> &'static ProductConfig {
    match key {
        ProductKey::PlecakMama => &PRODUCTS[0],
        ProductKey::PlecakDziecko => &PRODUCTS[1],
        ProductKey::Worek => &PRODUCTS[2],
        ProductKey::TorbaczDuza => &PRODUCTS[3],
        ProductKey::TorbaczMala => &PRODUCTS[4],
        ProductKey::Kosmetyczka => &PRODUCTS[5],
        ProductKey::TorbaLaptop => &PRODUCTS[6],
        ProductKey::EtuiLaptop => &PRODUCTS[7],
    }
}

/// Optional-key convenience used by step enablement, where "no product yet"
/// must read as "not found".
pub fn find_product(key: Option<ProductKey>) -> Option<&'static ProductConfig> {
    key.map(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_index_matches_key_for_every_product() {
        for key in ProductKey::ALL {
            assert_eq!(product(key).key, key);
        }
    }

    #[test]
    fn worek_disables_hardware_and_extras() {
        let worek = product(ProductKey::Worek);
        assert!(!worek.enabled_steps.hardware);
        assert!(!worek.enabled_steps.extras);
        assert!(worek.extras_allowed.is_empty());
        assert_eq!(worek.embroidery_max_chars, 14);
    }

    #[test]
    fn etui_laptop_disables_extras_only() {
        let etui = product(ProductKey::EtuiLaptop);
        assert!(etui.enabled_steps.hardware);
        assert!(!etui.enabled_steps.extras);
        assert!(etui.extras_allowed.is_empty());
    }

    #[test]
    fn kosmetyczka_extras_are_the_size_ladder() {
        let extras = product(ProductKey::Kosmetyczka).extras_allowed;
        assert_eq!(
            extras,
            &[
                ExtraKey::KosmetyczkaRozmiarS,
                ExtraKey::KosmetyczkaRozmiarM,
                ExtraKey::KosmetyczkaRozmiarL,
            ]
        );
    }

    #[test]
    fn find_product_treats_unset_as_not_found() {
        assert!(find_product(None).is_none());
        assert!(find_product(Some(ProductKey::Worek)).is_some());
    }

    #[test]
    fn every_product_allows_some_embroidery_text() {
        for p in &PRODUCTS {
            assert!(p.embroidery_max_chars > 0, "{:?} has a zero cap", p.key);
        }
    }
}
