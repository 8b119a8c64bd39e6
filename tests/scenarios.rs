//! End-to-end behaviour of the compiler through the public API.

use hexmap::render::LAYERS;
use hexmap::{
    compile_source, Hex, HexMap, Layout, Orientation, Point, Step, Theme, Viewport, MAX_RUN,
};
use pretty_assertions::assert_eq;

fn compile(source: &str) -> HexMap {
    compile_source("test", source, Theme::TagAndTally)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn single_forest_region() {
    let map = compile("0101 forest");

    assert_eq!(map.regions().len(), 1);
    let region = &map.regions()[0];
    assert_eq!(region.hex, Hex::new(1, 1));
    assert_eq!(region.types, vec!["forest".to_string()]);

    let bounds = map.content_bounds().expect("one region has bounds");
    let half_height = 50.0 * 3f64.sqrt();
    assert!(close(bounds.min_x, 50.0));
    assert!(close(bounds.max_x, 250.0));
    assert!(close(bounds.min_y, 0.0));
    assert!(close(bounds.max_y, 2.0 * half_height));
}

#[test]
fn horizontal_layout_changes_geometry() {
    let vertical = compile("0101 plains");
    let horizontal = compile("option horizontal\n0101 plains");

    assert_eq!(vertical.orientation().layout(), Layout::Vertical);
    assert_eq!(horizontal.orientation().layout(), Layout::Horizontal);
    assert_ne!(
        vertical.orientation().hex_corners(),
        horizontal.orientation().hex_corners()
    );
    assert_ne!(
        vertical.orientation().pixels(Hex::new(1, 1)),
        horizontal.orientation().pixels(Hex::new(1, 1))
    );
    assert_ne!(vertical.content_bounds(), horizontal.content_bounds());
}

#[test]
fn centered_at_sets_initial_center() {
    let map = compile("option centered-at 0402");

    assert_eq!(map.options().centered_at, Some(Hex::new(4, 2)));
    assert_eq!(
        map.initial_center(),
        map.orientation().pixels(Hex::new(4, 2))
    );
}

#[test]
fn centered_at_two_tokens_and_malformed() {
    assert_eq!(
        compile("option centered-at 5 10").options().centered_at,
        Some(Hex::new(5, 10))
    );
    assert_eq!(compile("option centered-at xx02").options().centered_at, None);
    assert_eq!(
        compile("option centered-at 0402\noption centered-at nope")
            .options()
            .centered_at,
        None
    );
}

#[test]
fn road_between_two_hexes() {
    let map = compile("0101 road 0102");

    assert!(map.regions().is_empty());
    assert_eq!(map.splines().len(), 1);
    let road = &map.splines()[0];
    assert_eq!(road.kind, "road");
    assert_eq!(road.start, Hex::new(1, 1));
    assert_eq!(road.steps, vec![Step::To(Hex::new(1, 2))]);

    let scene = map.scene(Viewport::default());
    let paths = scene.find_by_id("paths-test").expect("paths layer");
    let connector = paths.elements().next().expect("road connector");
    assert_eq!(connector.id(), Some("path-1-test"));
    assert_eq!(connector.attributes.get("stroke-dasharray"), Some("10 10"));
    assert_eq!(connector.attributes.get("stroke"), Some("#666"));
}

#[test]
fn compiling_is_idempotent() {
    let source = include_str!("fixtures/valley.map");

    let first = compile(source);
    let second = compile(source);

    assert_eq!(first.regions(), second.regions());
    assert_eq!(first.splines(), second.splines());
    assert_eq!(first.content_bounds(), second.content_bounds());
    assert_eq!(first.to_svg(), second.to_svg());
}

#[test]
fn bounds_absent_only_without_regions() {
    assert!(compile("").content_bounds().is_none());
    assert!(compile("0101-0102 road").content_bounds().is_none());
    assert!(compile("0101").content_bounds().is_some());
}

#[test]
fn empty_map_degrades_gracefully() {
    let map = compile("# nothing here yet\n01");
    let scene = map.scene(Viewport::default());

    assert_eq!(map.initial_center(), Point::new(0.0, 0.0));
    assert!(scene.descendants_named("rect").is_empty());
    assert_eq!(scene.attributes.get("viewBox"), Some("-400.0 -300.0 800.0 600.0"));
}

#[test]
fn pixels_are_pure() {
    let a = Orientation::new(Layout::Vertical, true);
    let b = Orientation::new(Layout::Vertical, true);
    for x in -3..4 {
        for y in -3..4 {
            assert_eq!(a.pixels(Hex::new(x, y)), b.pixels(Hex::new(x, y)));
        }
    }
}

#[test]
fn swap_even_odd_moves_columns() {
    let normal = compile("0101 plains");
    let swapped = compile("option swap-even-odd\n0101 plains");

    assert_ne!(normal.initial_center(), swapped.initial_center());
}

#[test]
fn layers_in_drawing_order() {
    let map = compile(include_str!("fixtures/valley.map"));
    let scene = map.scene(Viewport::default());

    let names: Vec<&str> = scene.elements().map(|e| e.name.as_str()).collect();
    assert_eq!(names[..2], ["rect", "defs"]);

    let layer_ids: Vec<&str> = scene.elements().skip(2).filter_map(|e| e.id()).collect();
    let expected: Vec<String> = LAYERS.iter().map(|l| format!("{l}-test")).collect();
    assert_eq!(layer_ids, expected);
}

#[test]
fn backgrounds_and_things_split_by_fill() {
    let map = compile("0101 forest-bg forest");
    let scene = map.scene(Viewport::default());

    let href = |layer: &str| -> Vec<String> {
        scene
            .find_by_id(layer)
            .map(|g| {
                g.elements()
                    .filter_map(|e| e.attributes.get("href").map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    };

    assert_eq!(href("backgrounds-test"), vec!["#forest-bg-test"]);
    assert_eq!(href("things-test"), vec!["#forest-test"]);
}

#[test]
fn symbol_build_order() {
    let map = compile_source(
        "t",
        r##"glow stroke="white"
hill path M 0,0 l 10,10
marsh attributes fill="green"
marsh path M 0,0 l 5,5
marsh path attributes stroke="blue"
0101 hill marsh"##,
        Theme::Plain,
    );
    let scene = map.scene(Viewport::default());

    let hill: Vec<_> = scene
        .find_by_id("hill-t")
        .expect("hill symbol")
        .elements()
        .map(|e| e.name.as_str())
        .collect();
    // geometry without fill gets a glow halo under it
    assert_eq!(hill, vec!["path", "path"]);

    let marsh = scene.find_by_id("marsh-t").expect("marsh symbol");
    let parts: Vec<_> = marsh.elements().map(|e| e.name.as_str()).collect();
    assert_eq!(parts, vec!["polygon", "path"]);
    let stroked = marsh.elements().nth(1).expect("stroked path");
    assert_eq!(stroked.attributes.get("stroke"), Some("blue"));
}

#[test]
fn coordinates_format_template() {
    let map = compile("option coordinates-format {Y}/{X}\n0312 plains");
    let scene = map.scene(Viewport::default());

    let coordinates = scene.find_by_id("coordinates-test").expect("layer");
    let text = coordinates.elements().next().expect("label");
    assert_eq!(text.text_content(), "12/03");
}

#[test]
fn duplicate_regions_both_render() {
    let map = compile("0101 forest\n0101 hills");
    let scene = map.scene(Viewport::default());

    let outlines = scene.find_by_id("regions-test").expect("layer");
    assert_eq!(outlines.elements().count(), 2);
}

#[test]
fn path_labels_follow_their_path() {
    let map = compile(r#"0301 river "Silver Run" 0201 0101"#);
    let scene = map.scene(Viewport::default());

    let labels = scene.find_by_id("path-labels-test").expect("layer");
    let text_paths = labels.descendants_named("textPath");
    // tag-and-tally has a glow style, so each label is drawn twice
    assert_eq!(text_paths.len(), 2);
    for text_path in text_paths {
        assert_eq!(text_path.attributes.get("href"), Some("#path-1-test"));
        assert_eq!(text_path.attributes.get("side"), Some("right"));
    }
}

#[test]
fn huge_directional_run_is_bounded() {
    let map = compile("0101 road s4000000000");

    let road = &map.splines()[0];
    assert_eq!(road.hexes(map.orientation()).len(), MAX_RUN as usize + 1);
    assert!(map.to_svg().len() < 200_000);
}
