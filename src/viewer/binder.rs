//! Asset part binding
//!
//! Resolves the loaded glTF hierarchy into semantic part handles. Matching
//! is data-driven: two lookup tables feed [`classify`], and [`PartBinding`]
//! stores plain `Entity` handles so an unresolved part is simply `None`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Monitored parts of the rooftop unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKey {
    Fan,
    Compressor1,
    Compressor2,
    CompressorFan1,
    CompressorFan2,
    StatusIndicatorFan,
    StatusIndicatorC1,
    StatusIndicatorC2,
    StatusIndicatorOther,
    GasTube,
}

impl PartKey {
    pub const COUNT: usize = 10;

    pub const ALL: [PartKey; Self::COUNT] = [
        PartKey::Fan,
        PartKey::Compressor1,
        PartKey::Compressor2,
        PartKey::CompressorFan1,
        PartKey::CompressorFan2,
        PartKey::StatusIndicatorFan,
        PartKey::StatusIndicatorC1,
        PartKey::StatusIndicatorC2,
        PartKey::StatusIndicatorOther,
        PartKey::GasTube,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartKey::Fan => "fan",
            PartKey::Compressor1 => "compressor1",
            PartKey::Compressor2 => "compressor2",
            PartKey::CompressorFan1 => "compressorFan1",
            PartKey::CompressorFan2 => "compressorFan2",
            PartKey::StatusIndicatorFan => "statusIndicatorFan",
            PartKey::StatusIndicatorC1 => "statusIndicatorC1",
            PartKey::StatusIndicatorC2 => "statusIndicatorC2",
            PartKey::StatusIndicatorOther => "statusIndicatorOther",
            PartKey::GasTube => "gasTube",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Surface material names that identify a part
pub const MATERIAL_KEYS: &[(&str, PartKey)] = &[
    ("Black_Ventilation", PartKey::Fan),
    ("Black_Compressor1", PartKey::Compressor1),
    ("Black_Compressor2", PartKey::Compressor2),
    ("Material_Tubo_Gas_Laranja", PartKey::GasTube),
    ("Status_Indicator_Fan", PartKey::StatusIndicatorFan),
    ("Status_Indicator_C1", PartKey::StatusIndicatorC1),
    ("Status_Indicator_C2", PartKey::StatusIndicatorC2),
    ("Status_Indicator_Other", PartKey::StatusIndicatorOther),
];

/// Node names matched for older exports that carry no dedicated material
pub const NODE_NAME_KEYS: &[(&str, PartKey)] = &[
    ("Vent_Compress_1", PartKey::CompressorFan1),
    ("Vent_Compress_2", PartKey::CompressorFan2),
];

/// Map a node's material name and node name to a part, exact match only.
/// The material name takes precedence.
pub fn classify(material_name: Option<&str>, node_name: Option<&str>) -> Option<PartKey> {
    let by_material = material_name.and_then(|material| {
        MATERIAL_KEYS
            .iter()
            .find(|(name, _)| *name == material)
            .map(|(_, key)| *key)
    });
    by_material.or_else(|| {
        node_name.and_then(|node| {
            NODE_NAME_KEYS
                .iter()
                .find(|(name, _)| *name == node)
                .map(|(_, key)| *key)
        })
    })
}

/// One visited node of the loaded scene
#[derive(Debug, Clone, Copy)]
pub struct SceneNode<'a> {
    pub entity: Entity,
    pub material_name: Option<&'a str>,
    pub node_name: Option<&'a str>,
}

/// Semantic part handles into the ECS world
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PartBinding {
    slots: [Option<Entity>; PartKey::COUNT],
}

impl PartBinding {
    /// Visit every node once; the last node matching a key wins
    pub fn bind<'a>(nodes: impl IntoIterator<Item = SceneNode<'a>>) -> Self {
        let mut binding = Self::default();
        for node in nodes {
            if let Some(key) = classify(node.material_name, node.node_name) {
                binding.slots[key.index()] = Some(node.entity);
            }
        }
        binding
    }

    pub fn get(&self, key: PartKey) -> Option<Entity> {
        self.slots[key.index()]
    }

    /// Bound parts in key order
    pub fn iter(&self) -> impl Iterator<Item = (PartKey, Entity)> + '_ {
        PartKey::ALL
            .into_iter()
            .filter_map(move |key| self.get(key).map(|entity| (key, entity)))
    }

    pub fn missing(&self) -> impl Iterator<Item = PartKey> + '_ {
        PartKey::ALL
            .into_iter()
            .filter(move |key| self.get(*key).is_none())
    }

    pub fn bound_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    fn node(
        entity: Entity,
        material: Option<&'static str>,
        name: Option<&'static str>,
    ) -> SceneNode<'static> {
        SceneNode {
            entity,
            material_name: material,
            node_name: name,
        }
    }

    #[test]
    fn classify_uses_exact_material_names() {
        assert_eq!(classify(Some("Black_Ventilation"), None), Some(PartKey::Fan));
        assert_eq!(classify(Some("black_ventilation"), None), None);
        assert_eq!(classify(Some("Black_Ventilation.001"), None), None);
        assert_eq!(
            classify(Some("Material_Tubo_Gas_Laranja"), Some("Tube")),
            Some(PartKey::GasTube)
        );
    }

    #[test]
    fn classify_falls_back_to_node_name() {
        assert_eq!(
            classify(None, Some("Vent_Compress_2")),
            Some(PartKey::CompressorFan2)
        );
        assert_eq!(
            classify(Some("Paint_Grey"), Some("Vent_Compress_1")),
            Some(PartKey::CompressorFan1)
        );
        assert_eq!(
            classify(Some("Black_Compressor1"), Some("Vent_Compress_1")),
            Some(PartKey::Compressor1)
        );
        assert_eq!(classify(None, Some("Black_Ventilation")), None);
        assert_eq!(classify(None, None), None);
    }

    #[test]
    fn every_key_has_one_identifier() {
        for key in PartKey::ALL {
            let hits = MATERIAL_KEYS
                .iter()
                .chain(NODE_NAME_KEYS)
                .filter(|(_, k)| *k == key)
                .count();
            assert_eq!(hits, 1, "{}", key.as_str());
        }
    }

    #[test]
    fn bind_records_matches_and_last_wins() {
        let e = entities(5);
        let binding = PartBinding::bind([
            node(e[0], Some("Black_Ventilation"), Some("FanA")),
            node(e[1], Some("Paint_Grey"), Some("Housing")),
            node(e[2], Some("Black_Compressor1"), None),
            node(e[3], Some("Black_Ventilation"), Some("FanB")),
            node(e[4], None, Some("Vent_Compress_1")),
        ]);
        assert_eq!(binding.get(PartKey::Fan), Some(e[3]));
        assert_eq!(binding.get(PartKey::Compressor1), Some(e[2]));
        assert_eq!(binding.get(PartKey::CompressorFan1), Some(e[4]));
        assert_eq!(binding.get(PartKey::Compressor2), None);
        assert_eq!(binding.bound_count(), 3);
        assert_eq!(binding.missing().count(), PartKey::COUNT - 3);
    }

    #[test]
    fn empty_scene_binds_nothing() {
        let binding = PartBinding::bind(std::iter::empty());
        assert_eq!(binding, PartBinding::default());
        assert_eq!(binding.iter().count(), 0);
    }
}
