use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::geometry::point_string::{GeoPoint, parse_point_string};

/// Vector overlay decoded from the course overlay JSON resource. Mirrors the
/// resource structure exactly: every category and every nesting level may be
/// absent, and absence anywhere along a chain simply means "no shapes".
#[derive(Asset, TypePath, Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VectorOverlay {
    pub tree: Option<FeatureCategory>,
    pub clubhouse: Option<FeatureCategory>,
    pub hole_count: Option<i32>,
    pub holes: Option<HoleSet>,
    pub creek: Option<FeatureCategory>,
    pub path: Option<FeatureCategory>,
    pub background: Option<FeatureCategory>,
    pub bridge: Option<FeatureCategory>,
    pub water: Option<FeatureCategory>,
}

/// One feature category: a list of shapes plus a declared count. The count is
/// carried through from the resource but the shape list is authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureCategory {
    pub shapes: Option<ShapeList>,
    pub shape_count: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShapeList {
    pub shape: Option<Vec<FeatureShape>>,
}

/// One shape: an encoded point string plus an optional integer attribute bag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureShape {
    pub attributes: Option<ShapeAttributes>,
    pub points: Option<String>,
}

/// Integer attribute codes attached to some categories: tree type/size class,
/// background terrain description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShapeAttributes {
    #[serde(rename = "Type")]
    pub tree_type: Option<i32>,
    pub size: Option<i32>,
    pub description: Option<i32>,
}

/// The per-hole nesting: each component is shaped like a feature category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HoleSet {
    pub hole: Option<Vec<Hole>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Hole {
    pub perimeter: Option<FeatureCategory>,
    pub teebox: Option<FeatureCategory>,
    pub centralpath: Option<FeatureCategory>,
    pub green: Option<FeatureCategory>,
    #[serde(rename = "Greencenter")]
    pub green_center: Option<FeatureCategory>,
    pub fairway: Option<FeatureCategory>,
    #[serde(rename = "Teeboxcenter")]
    pub teebox_center: Option<FeatureCategory>,
    pub hole_number: Option<i32>,
}

impl FeatureCategory {
    /// Collapse the optional `Shapes.Shape` chain into a slice; any missing
    /// link yields an empty slice, matching the skip-if-absent policy.
    pub fn shapes(&self) -> &[FeatureShape] {
        self.shapes
            .as_ref()
            .and_then(|list| list.shape.as_deref())
            .unwrap_or(&[])
    }
}

impl FeatureShape {
    /// Decode the shape's point string; absent or noisy input yields however
    /// many valid points it contains, possibly none.
    pub fn parsed_points(&self) -> Vec<GeoPoint> {
        self.points
            .as_deref()
            .map(parse_point_string)
            .unwrap_or_default()
    }

    /// Tree size class, defaulting to 1 when unattributed.
    pub fn size_class(&self) -> i32 {
        self.attributes
            .as_ref()
            .and_then(|attributes| attributes.size)
            .unwrap_or(1)
    }

    /// Background terrain description code, defaulting to 0.
    pub fn description_code(&self) -> i32 {
        self.attributes
            .as_ref()
            .and_then(|attributes| attributes.description)
            .unwrap_or(0)
    }
}

impl VectorOverlay {
    pub fn trees(&self) -> &[FeatureShape] {
        category_shapes(&self.tree)
    }

    pub fn clubhouses(&self) -> &[FeatureShape] {
        category_shapes(&self.clubhouse)
    }

    pub fn creeks(&self) -> &[FeatureShape] {
        category_shapes(&self.creek)
    }

    pub fn paths(&self) -> &[FeatureShape] {
        category_shapes(&self.path)
    }

    pub fn backgrounds(&self) -> &[FeatureShape] {
        category_shapes(&self.background)
    }

    pub fn bridges(&self) -> &[FeatureShape] {
        category_shapes(&self.bridge)
    }

    pub fn waters(&self) -> &[FeatureShape] {
        category_shapes(&self.water)
    }

    pub fn holes(&self) -> &[Hole] {
        self.holes
            .as_ref()
            .and_then(|set| set.hole.as_deref())
            .unwrap_or(&[])
    }
}

impl Hole {
    pub fn perimeters(&self) -> &[FeatureShape] {
        category_shapes(&self.perimeter)
    }

    pub fn fairways(&self) -> &[FeatureShape] {
        category_shapes(&self.fairway)
    }

    pub fn greens(&self) -> &[FeatureShape] {
        category_shapes(&self.green)
    }

    pub fn teeboxes(&self) -> &[FeatureShape] {
        category_shapes(&self.teebox)
    }

    pub fn central_paths(&self) -> &[FeatureShape] {
        category_shapes(&self.centralpath)
    }

    pub fn green_centers(&self) -> &[FeatureShape] {
        category_shapes(&self.green_center)
    }

    pub fn teebox_centers(&self) -> &[FeatureShape] {
        category_shapes(&self.teebox_center)
    }

    /// First point of the first green-centre shape, the anchor the hole flag
    /// requires alongside the hole number.
    pub fn green_center_anchor(&self) -> Option<GeoPoint> {
        self.green_centers()
            .first()
            .and_then(|shape| shape.parsed_points().first().copied())
    }
}

fn category_shapes(category: &Option<FeatureCategory>) -> &[FeatureShape] {
    category
        .as_ref()
        .map(FeatureCategory::shapes)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> VectorOverlay {
        serde_json::from_str(raw).expect("overlay fixture should decode")
    }

    #[test]
    fn guarded_accessors_collapse_missing_links_to_empty() {
        let overlay = decode(r#"{ "Water": { "ShapeCount": 3 } }"#);

        assert!(overlay.waters().is_empty());
        assert!(overlay.trees().is_empty());
        assert!(overlay.holes().is_empty());
        assert_eq!(overlay.hole_count, None);
    }

    #[test]
    fn shapes_and_attributes_decode_from_resource_keys() {
        let overlay = decode(
            r#"{
                "Tree": {
                    "Shapes": {
                        "Shape": [
                            { "Attributes": { "Type": 2, "Size": 3 }, "Points": "10.0 20.0" },
                            { "Points": "11.0 21.0" }
                        ]
                    },
                    "ShapeCount": 2
                },
                "Background": {
                    "Shapes": {
                        "Shape": [ { "Attributes": { "Description": 1 }, "Points": "1 2,3 4,5 6" } ]
                    },
                    "ShapeCount": 1
                }
            }"#,
        );

        let trees = overlay.trees();
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].size_class(), 3);
        assert_eq!(trees[1].size_class(), 1);
        assert_eq!(trees[0].parsed_points(), vec![GeoPoint::new(10.0, 20.0)]);

        let background = &overlay.backgrounds()[0];
        assert_eq!(background.description_code(), 1);
        assert_eq!(background.parsed_points().len(), 3);
    }

    #[test]
    fn hole_components_nest_and_expose_the_flag_anchor() {
        let overlay = decode(
            r#"{
                "HoleCount": 1,
                "Holes": {
                    "Hole": [
                        {
                            "HoleNumber": 7,
                            "Green": { "Shapes": { "Shape": [ { "Points": "1 1,2 1,2 2" } ] }, "ShapeCount": 1 },
                            "Greencenter": { "Shapes": { "Shape": [ { "Points": "1.5 1.5,9 9" } ] }, "ShapeCount": 1 }
                        }
                    ]
                }
            }"#,
        );

        let hole = &overlay.holes()[0];
        assert_eq!(hole.hole_number, Some(7));
        assert_eq!(hole.greens().len(), 1);
        assert!(hole.fairways().is_empty());
        assert_eq!(hole.green_center_anchor(), Some(GeoPoint::new(1.5, 1.5)));
    }

    #[test]
    fn hole_without_green_center_has_no_flag_anchor() {
        let overlay = decode(
            r#"{ "Holes": { "Hole": [ { "HoleNumber": 3 } ] } }"#,
        );
        assert_eq!(overlay.holes()[0].green_center_anchor(), None);
    }
}
