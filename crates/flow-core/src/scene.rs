// crates/flow-core/src/scene.rs
use crate::{ContainerConstraints, FlowConfig, FlowError, Item, MeasureMode, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete layout input: configuration, container and items, as read from JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub config: FlowConfig,
    pub container: ContainerConstraints,
    pub items: Vec<Item>,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| FlowError::InvalidScene(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;

        for (field, mode) in [("container width", self.container.width), ("container height", self.container.height)] {
            match mode {
                MeasureMode::Exact(value) | MeasureMode::AtMost(value) if !value.is_finite() => {
                    return Err(FlowError::NonFiniteValue { field, value });
                }
                _ => {}
            }
        }

        for (index, item) in self.items.iter().enumerate() {
            let sizes = [item.width, item.height];
            if sizes.iter().any(|v| !v.is_finite()) {
                return Err(FlowError::InvalidScene(format!(
                    "item {} has a non-finite size ({} x {})",
                    index, item.width, item.height
                )));
            }
            if sizes.iter().any(|v| *v < 0.0) {
                return Err(FlowError::InvalidScene(format!(
                    "item {} has a negative size ({} x {})",
                    index, item.width, item.height
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edges, Orientation};

    const SCENE: &str = r#"{
        "config": {"orientation": "vertical", "line_spacing_horizontal": 10},
        "container": {"width": "unspecified", "height": {"exact": 100}},
        "items": [
            {"width": 30, "height": 60},
            {"width": 20, "height": 50, "margin": {"top": 5, "bottom": 5}}
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::from_json(SCENE).unwrap();
        assert_eq!(scene.config.orientation, Orientation::Vertical);
        assert_eq!(scene.container.height, MeasureMode::Exact(100.0));
        assert_eq!(scene.items.len(), 2);
        assert_eq!(scene.items[1].margin, Edges::new(0.0, 5.0, 0.0, 5.0));
    }

    #[test]
    fn test_scene_json_round_trip() {
        let scene = Scene::from_json(SCENE).unwrap();
        let reparsed = Scene::from_json(&scene.to_json().unwrap()).unwrap();
        assert_eq!(scene, reparsed);
    }

    #[test]
    fn test_rejects_negative_spacing() {
        let json = r#"{"config": {"line_spacing_vertical": -4}}"#;
        assert!(matches!(Scene::from_json(json), Err(FlowError::NegativeSpacing { .. })));
    }

    #[test]
    fn test_rejects_negative_item_size() {
        let json = r#"{"items": [{"width": 10, "height": -1}]}"#;
        assert!(matches!(Scene::from_json(json), Err(FlowError::InvalidScene(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(Scene::from_json("{ items: "), Err(FlowError::Json(_))));
    }
}
