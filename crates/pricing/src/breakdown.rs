//! Derived price breakdown.

use serde::{Deserialize, Serialize};

use kreator_session::ConfigSnapshot;

use crate::price_list::PriceList;

/// Base price plus per-option deltas, all non-negative whole price units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: u64,
    pub material_cost: u64,
    pub lining_cost: u64,
    pub hardware_cost: u64,
    pub embroidery_cost: u64,
    pub extras_cost: u64,
    pub total_price: u64,
}

impl PriceList {
    /// Compute the breakdown for a configuration. Pure and deterministic.
    ///
    /// Unset fields and table misses contribute zero; misses additionally log
    /// a warning so an unpriced catalog entry is visible in development.
    ///
    /// Embroidery is charged per character of `text` whenever text is present
    /// or a preset is chosen. Preset-only embroidery (empty text) is free.
    pub fn compute(&self, cfg: &ConfigSnapshot) -> PriceBreakdown {
        let base_price = cfg
            .selected_product
            .map_or(0, |p| priced(self.base.get(&p), "base", &p));
        let material_cost = cfg
            .material
            .map_or(0, |m| priced(self.materials.get(&m), "material", &m));
        let lining_cost = cfg
            .lining
            .map_or(0, |l| priced(self.linings.get(&l), "lining", &l));
        let hardware_cost = cfg
            .hardware
            .map_or(0, |h| priced(self.hardware.get(&h), "hardware", &h));

        let embroidery_cost =
            if !cfg.embroidery.text.is_empty() || cfg.embroidery.preset_id.is_some() {
                cfg.embroidery.text.chars().count() as u64 * self.embroidery_per_char
            } else {
                0
            };

        let extras_cost = cfg
            .extras
            .iter()
            .map(|e| priced(self.extras.get(e), "extra", e))
            .sum();

        let total_price = base_price
            + material_cost
            + lining_cost
            + hardware_cost
            + embroidery_cost
            + extras_cost;

        PriceBreakdown {
            base_price,
            material_cost,
            lining_cost,
            hardware_cost,
            embroidery_cost,
            extras_cost,
            total_price,
        }
    }
}

fn priced<K: core::fmt::Debug>(entry: Option<&u64>, table: &str, key: &K) -> u64 {
    match entry {
        Some(price) => *price,
        None => {
            tracing::warn!(?key, table, "no price configured, contributing zero");
            0
        }
    }
}
