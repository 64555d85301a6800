use flow_core::{ContainerConstraints, Edges, FlowConfig, Item, MeasureMode, Orientation, Rect, WrapPolicy};
use flow_layout::{compute, FlowLayout};
use glam::Vec2;

#[test]
fn test_three_items_wrap_into_second_row() {
    let config = FlowConfig::new();
    let items = [Item::new(50.0, 20.0); 3];
    let constraints = ContainerConstraints::new().with_width(MeasureMode::Exact(120.0));

    let result = compute(&config, &items, &constraints);

    assert_eq!(result.rects.len(), 3);
    assert_eq!(result.rects[0].position, Vec2::new(0.0, 0.0));
    assert_eq!(result.rects[1].position, Vec2::new(50.0, 0.0));
    assert_eq!(result.rects[2].position, Vec2::new(0.0, 20.0));
    assert_eq!(result.band_count, 2);
    assert_eq!(result.size, Vec2::new(120.0, 40.0));
}

#[test]
fn test_occupied_width_includes_margins() {
    let config = FlowConfig::new();
    let margin = Edges::new(5.0, 0.0, 5.0, 0.0);
    let items = [Item::new(40.0, 20.0).with_margin(margin); 3];
    let constraints = ContainerConstraints::new().with_width(MeasureMode::Exact(120.0));

    let result = compute(&config, &items, &constraints);

    assert_eq!(result.rects[0], Rect::new(5.0, 0.0, 40.0, 20.0));
    assert_eq!(result.rects[1], Rect::new(55.0, 0.0, 40.0, 20.0));
    assert_eq!(result.rects[2], Rect::new(5.0, 20.0, 40.0, 20.0));
}

#[test]
fn test_empty_sequence_is_padding_only() {
    let config = FlowConfig::new().with_spacing(8.0, 8.0);
    let items: Vec<Item> = Vec::new();
    let padding = Edges::new(3.0, 4.0, 5.0, 6.0);

    // The free main axis spans both paddings, the free cross axis only the leading one.
    let result = compute(&config, &items, &ContainerConstraints::new().with_padding(padding));
    assert!(result.is_empty());
    assert_eq!(result.size, Vec2::new(8.0, 4.0));
    assert_eq!(result.band_count, 0);

    let vertical = config.with_orientation(Orientation::Vertical);
    let result = compute(&vertical, &items, &ContainerConstraints::new().with_padding(padding));
    assert!(result.is_empty());
    assert_eq!(result.size, Vec2::new(3.0, 10.0));

    let padded = config.with_trailing_padding(true);
    let result = compute(&padded, &items, &ContainerConstraints::new().with_padding(padding));
    assert_eq!(result.size, Vec2::new(8.0, 10.0));
}

#[test]
fn test_negative_padding_and_margins_shift_geometry() {
    let config = FlowConfig::new();
    let pulled = Item::new(40.0, 10.0).with_margin(Edges::new(-3.0, 0.0, 0.0, 0.0));
    let items = [pulled, pulled, Item::new(40.0, 10.0)];
    let constraints = ContainerConstraints::new()
        .with_width(MeasureMode::Exact(100.0))
        .with_padding(Edges::new(-5.0, -2.0, 0.0, 0.0));

    let result = compute(&config, &items, &constraints);

    assert_eq!(result.rects[0], Rect::new(-8.0, -2.0, 40.0, 10.0));
    assert_eq!(result.rects[1], Rect::new(29.0, -2.0, 40.0, 10.0));
    // 69 + 40 > 100
    assert_eq!(result.rects[2], Rect::new(-5.0, 8.0, 40.0, 10.0));
    assert_eq!(result.band_count, 2);
    assert_eq!(result.size, Vec2::new(100.0, -2.0 + 10.0 + 10.0));
}

#[test]
fn test_oversized_item_stays_on_first_row() {
    let config = FlowConfig::new();
    let items = [Item::new(200.0, 30.0)];
    let constraints = ContainerConstraints::new().with_width(MeasureMode::Exact(100.0));

    let result = compute(&config, &items, &constraints);

    assert_eq!(result.rects[0], Rect::new(0.0, 0.0, 200.0, 30.0));
    assert_eq!(result.band_count, 1);
    assert_eq!(result.size, Vec2::new(100.0, 30.0));
    // Only the aggregate is clamped to the container.
    assert_eq!(result.extents.max_item_width, 100.0);
}

#[test]
fn test_oversized_item_after_others_gets_its_own_row() {
    let config = FlowConfig::new();
    let items = [Item::new(40.0, 10.0), Item::new(200.0, 10.0), Item::new(40.0, 10.0)];
    let constraints = ContainerConstraints::new().with_width(MeasureMode::Exact(100.0));

    let result = compute(&config, &items, &constraints);

    assert_eq!(result.rects[1].position, Vec2::new(0.0, 10.0));
    assert_eq!(result.rects[2].position, Vec2::new(0.0, 20.0));
    assert_eq!(result.band_count, 3);
}

#[test]
fn test_always_policy_strands_an_empty_row() {
    let config = FlowConfig::new().with_wrap_policy(WrapPolicy::Always);
    let items = [Item::new(200.0, 30.0)];
    let constraints = ContainerConstraints::new().with_width(MeasureMode::Exact(100.0));

    let result = compute(&config, &items, &constraints);

    assert_eq!(result.rects[0].position, Vec2::new(0.0, 30.0));
    assert_eq!(result.band_count, 2);
    assert_eq!(result.size.y, 60.0);
}

#[test]
fn test_vertical_columns_with_spacing() {
    let config = FlowConfig::new()
        .with_orientation(Orientation::Vertical)
        .with_spacing(10.0, 0.0);
    let items = [Item::new(30.0, 60.0), Item::new(20.0, 60.0)];
    let constraints = ContainerConstraints::new().with_height(MeasureMode::Exact(100.0));

    let result = compute(&config, &items, &constraints);

    assert_eq!(result.rects[0].position, Vec2::new(0.0, 0.0));
    // 60 + 60 > 100: new column offset by max_item_width + spacing.
    assert_eq!(result.rects[1].position, Vec2::new(40.0, 0.0));
    assert_eq!(result.size, Vec2::new(70.0, 100.0));
}

#[test]
fn test_both_axes_free_lays_out_a_single_row() {
    let config = FlowConfig::new().with_spacing(2.0, 0.0);
    let items = [Item::new(10.0, 4.0), Item::new(12.0, 8.0), Item::new(14.0, 6.0)];

    let result = compute(&config, &items, &ContainerConstraints::new());

    assert_eq!(result.band_count, 1);
    assert_eq!(result.size, Vec2::new(40.0, 8.0));
    let xs: Vec<f32> = result.rects.iter().map(|r| r.x()).collect();
    assert_eq!(xs, vec![0.0, 12.0, 26.0]);
    let bottoms: Vec<f32> = result.rects.iter().map(|r| r.bottom()).collect();
    assert_eq!(bottoms, vec![8.0, 8.0, 8.0]);
}

#[test]
fn test_stateful_layout_reflows_after_orientation_change() {
    let items = [Item::new(40.0, 40.0); 4];
    let constraints = ContainerConstraints::with_fixed_size(100.0, 100.0);
    let mut layout = FlowLayout::new();

    let rows = layout.compute(&items, &constraints).clone();
    assert_eq!(rows.rects[2].position, Vec2::new(0.0, 40.0));

    layout.set_orientation(Orientation::Vertical);
    assert!(layout.is_layout_requested());
    let columns = layout.compute(&items, &constraints);
    assert_eq!(columns.rects[1].position, Vec2::new(0.0, 40.0));
    assert_eq!(columns.rects[2].position, Vec2::new(40.0, 0.0));
}
