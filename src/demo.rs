// src/demo.rs
use flow_core::{ContainerConstraints, Edges, FlowConfig, Item, MeasureMode, Scene};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const LABEL_COUNT: usize = 25;
const FONT_SIZE: f32 = 14.0;
const ICON_SIZE: f32 = 48.0;

/// Estimated box of a single-line text label: ~8 pixels per character, font height at least 16.
pub fn label_item(text: &str) -> Item {
    let width = text.chars().count() as f32 * 8.0;
    let height = FONT_SIZE.max(16.0);
    Item::new(width, height).with_margin(Edges::uniform(4.0))
}

pub fn icon_item() -> Item {
    Item::new(ICON_SIZE, ICON_SIZE).with_margin(Edges::uniform(4.0))
}

/// Labels of varying length with an icon after every third one.
pub fn demo_scene() -> Scene {
    let mut items = Vec::new();
    for i in 0..LABEL_COUNT {
        let len = (i * 7 + 3) % ALPHABET.len();
        items.push(label_item(&format!("{}{}", i, &ALPHABET[..len])));
        if i % 3 == 0 {
            items.push(icon_item());
        }
    }

    Scene {
        config: FlowConfig::new().with_spacing(6.0, 6.0),
        container: ContainerConstraints::new()
            .with_width(MeasureMode::Exact(360.0))
            .with_padding(Edges::uniform(8.0)),
        items,
    }
}
