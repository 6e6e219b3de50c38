//! Campsite catalog domain model.
//!
//! # Responsibility
//! - Define the immutable zone/item structure every other layer reads.
//! - Validate catalog shape once, at construction.
//!
//! # Invariants
//! - Zone ids are globally unique; item ids are unique within their zone.
//! - Every zone declares at least one item.
//! - Zone order is fixed at construction and identical everywhere
//!   enumeration or progress aggregation happens.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A single packable thing belonging to exactly one zone's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable id, unique within the owning zone.
    pub id: String,
    /// Display name shown in checklists.
    pub name: String,
    /// Optional display glyph.
    pub emoji: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: None,
        }
    }

    pub fn with_emoji(
        id: impl Into<String>,
        name: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: Some(emoji.into()),
        }
    }
}

/// A named region of the campsite with its own checklist of items.
///
/// Display fields (`emoji`, `color`, `glow_color`) carry the metadata the
/// map and sidebar renderers need; core logic only reads `id` and `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Globally unique zone id.
    pub id: String,
    pub name: String,
    pub emoji: String,
    /// Base fill color for day rendering.
    pub color: String,
    /// Accent color for night-mode glow rendering.
    pub glow_color: String,
    /// Ordered checklist items. Never empty for a valid catalog.
    pub items: Vec<Item>,
}

/// Catalog shape violations detected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateZoneId(String),
    EmptyZone(String),
    DuplicateItemId { zone_id: String, item_id: String },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateZoneId(id) => write!(f, "duplicate zone id `{id}`"),
            Self::EmptyZone(id) => write!(f, "zone `{id}` declares no items"),
            Self::DuplicateItemId { zone_id, item_id } => {
                write!(f, "duplicate item id `{item_id}` in zone `{zone_id}`")
            }
        }
    }
}

impl Error for CatalogError {}

/// Immutable, ordered collection of zones.
///
/// Constructed once at startup and shared read-only with every consumer.
/// Lookup is always zone-scoped, so cross-zone item id collisions are
/// permitted and irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    zones: Vec<Zone>,
}

impl Catalog {
    /// Builds a catalog after validating shape invariants.
    ///
    /// # Errors
    /// - `DuplicateZoneId` when two zones share an id.
    /// - `EmptyZone` when a zone has no items.
    /// - `DuplicateItemId` when an item id repeats within one zone.
    pub fn new(zones: Vec<Zone>) -> Result<Self, CatalogError> {
        let mut zone_ids = HashSet::new();
        for zone in &zones {
            if !zone_ids.insert(zone.id.as_str()) {
                return Err(CatalogError::DuplicateZoneId(zone.id.clone()));
            }
            if zone.items.is_empty() {
                return Err(CatalogError::EmptyZone(zone.id.clone()));
            }
            let mut item_ids = HashSet::new();
            for item in &zone.items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(CatalogError::DuplicateItemId {
                        zone_id: zone.id.clone(),
                        item_id: item.id.clone(),
                    });
                }
            }
        }
        Ok(Self { zones })
    }

    /// Ordered zone sequence. The order is the canonical enumeration order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Looks up a zone by id.
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Total number of items across all zones.
    pub fn item_count(&self) -> usize {
        self.zones.iter().map(|zone| zone.items.len()).sum()
    }

    /// The built-in campsite catalog: seven zones, 44 items.
    pub fn campsite() -> Self {
        // Static data is known-valid; bypass `new` to keep this infallible.
        Self {
            zones: builtin_zones(),
        }
    }
}

fn builtin_zones() -> Vec<Zone> {
    vec![
        Zone {
            id: "carpa".into(),
            name: "Carpa".into(),
            emoji: "⛺".into(),
            color: "#6b7c45".into(),
            glow_color: "#9aac55".into(),
            items: vec![
                Item::with_emoji("bolsa-dormir", "Bolsa de dormir", "🛌"),
                Item::new("aislante", "Aislante"),
                Item::new("almohada", "Almohada"),
                Item::with_emoji("linterna", "Linterna", "🔦"),
                Item::new("estacas", "Estacas de repuesto"),
                Item::new("lona", "Lona impermeable"),
            ],
        },
        Zone {
            id: "fogon".into(),
            name: "Fogón".into(),
            emoji: "🔥".into(),
            color: "#e07b39".into(),
            glow_color: "#ff4500".into(),
            items: vec![
                Item::with_emoji("lena", "Leña", "🪵"),
                Item::with_emoji("fosforos", "Fósforos", "🔥"),
                Item::new("yesca", "Yesca"),
                Item::new("parrilla", "Parrilla"),
                Item::new("pinzas", "Pinzas largas"),
                Item::with_emoji("balde-agua", "Balde para agua", "🪣"),
            ],
        },
        Zone {
            id: "cocina".into(),
            name: "Cocina".into(),
            emoji: "🍳".into(),
            color: "#c8a84b".into(),
            glow_color: "#d4b85a".into(),
            items: vec![
                Item::with_emoji("olla", "Olla", "🍲"),
                Item::new("sarten", "Sartén"),
                Item::new("cubiertos", "Cubiertos"),
                Item::new("platos", "Platos"),
                Item::new("vasos", "Vasos"),
                Item::new("tabla", "Tabla de cortar"),
                Item::with_emoji("cuchillo", "Cuchillo", "🔪"),
                Item::new("detergente", "Detergente"),
                Item::new("esponja", "Esponja"),
            ],
        },
        Zone {
            id: "almacenamiento".into(),
            name: "Almacenamiento".into(),
            emoji: "🎒".into(),
            color: "#8b6347".into(),
            glow_color: "#a87757".into(),
            items: vec![
                Item::with_emoji("mochila", "Mochila", "🎒"),
                Item::new("bolsas-residuos", "Bolsas de residuos"),
                Item::new("cajas-plasticas", "Cajas plásticas"),
                Item::new("cuerda", "Cuerda"),
                Item::new("bolsas-hermeticas", "Bolsas herméticas"),
            ],
        },
        Zone {
            id: "higiene".into(),
            name: "Higiene".into(),
            emoji: "🚿".into(),
            color: "#4a7fa5".into(),
            glow_color: "#87ceeb".into(),
            items: vec![
                Item::with_emoji("jabon", "Jabón", "🧼"),
                Item::new("shampoo", "Shampoo"),
                Item::new("toalla", "Toalla"),
                Item::new("cepillo-dientes", "Cepillo de dientes"),
                Item::new("pasta-dental", "Pasta dental"),
                Item::with_emoji("papel-higienico", "Papel higiénico", "🧻"),
                Item::with_emoji("protector-solar", "Protector solar", "🧴"),
            ],
        },
        Zone {
            id: "senderos".into(),
            name: "Senderos".into(),
            emoji: "🧭".into(),
            color: "#4a8c5c".into(),
            glow_color: "#3a8a4a".into(),
            items: vec![
                Item::with_emoji("brujula", "Brújula", "🧭"),
                Item::with_emoji("mapa", "Mapa de la zona", "🗺"),
                Item::with_emoji("botella-agua", "Botella de agua", "💧"),
                Item::new("gorra", "Gorra"),
                Item::new("repelente", "Repelente"),
                Item::new("silbato", "Silbato"),
            ],
        },
        Zone {
            id: "botiquin".into(),
            name: "Botiquín".into(),
            emoji: "🩺".into(),
            color: "#c0392b".into(),
            glow_color: "#d44333".into(),
            items: vec![
                Item::with_emoji("vendas", "Vendas", "🩹"),
                Item::new("alcohol", "Alcohol en gel"),
                Item::new("curitas", "Curitas"),
                Item::with_emoji("analgesicos", "Analgésicos", "💊"),
                Item::new("tijeras", "Tijeras"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str, items: Vec<Item>) -> Zone {
        Zone {
            id: id.into(),
            name: id.into(),
            emoji: "🏕".into(),
            color: "#000000".into(),
            glow_color: "#ffffff".into(),
            items,
        }
    }

    #[test]
    fn rejects_duplicate_zone_ids() {
        let result = Catalog::new(vec![
            zone("rio", vec![Item::new("red", "Red")]),
            zone("rio", vec![Item::new("caña", "Caña")]),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateZoneId("rio".into())));
    }

    #[test]
    fn rejects_empty_zone() {
        let result = Catalog::new(vec![zone("rio", vec![])]);
        assert_eq!(result, Err(CatalogError::EmptyZone("rio".into())));
    }

    #[test]
    fn rejects_duplicate_item_within_zone() {
        let result = Catalog::new(vec![zone(
            "rio",
            vec![Item::new("red", "Red"), Item::new("red", "Red otra vez")],
        )]);
        assert_eq!(
            result,
            Err(CatalogError::DuplicateItemId {
                zone_id: "rio".into(),
                item_id: "red".into(),
            })
        );
    }

    #[test]
    fn allows_same_item_id_across_zones() {
        let result = Catalog::new(vec![
            zone("rio", vec![Item::new("cuerda", "Cuerda")]),
            zone("playa", vec![Item::new("cuerda", "Cuerda")]),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn builtin_catalog_shape() {
        let catalog = Catalog::campsite();
        let ids: Vec<&str> = catalog.zones().iter().map(|z| z.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "carpa",
                "fogon",
                "cocina",
                "almacenamiento",
                "higiene",
                "senderos",
                "botiquin"
            ]
        );
        assert_eq!(catalog.item_count(), 44);
        assert_eq!(catalog.zone("fogon").unwrap().items.len(), 6);
        assert!(catalog.zone("laguna").is_none());
    }

    #[test]
    fn builtin_catalog_passes_its_own_validation() {
        let rebuilt = Catalog::new(Catalog::campsite().zones().to_vec());
        assert!(rebuilt.is_ok());
    }
}
