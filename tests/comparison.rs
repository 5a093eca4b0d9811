use nalgebra::Vector2;
use pixelpitch::{
    camera::CameraProfile,
    compare::CameraSet,
    footprint::{FootprintScaler, Rect},
    render,
    sensor::SensorFormat,
};

fn canon_lineup() -> CameraSet {
    [
        ("6DII", SensorFormat::FullFrame, 26.2),
        ("R6", SensorFormat::FullFrame, 20.0),
        ("R5", SensorFormat::FullFrame, 44.7),
        ("700D", SensorFormat::Apsc, 18.0),
        ("80D", SensorFormat::Apsc, 24.2),
        ("90D", SensorFormat::Apsc, 32.5),
    ]
    .into_iter()
    .map(|(name, format, resolution)| {
        CameraProfile::new(name, format, resolution).expect("lineup entries are valid")
    })
    .collect()
}

#[test]
fn apsc_bodies_out_rank_full_frame_bodies() {
    let set = canon_lineup();
    let names: Vec<&str> = set.ranked().iter().map(|camera| camera.name()).collect();

    // Smaller sensors pack their pixels tighter, so every APS-C body in the
    // lineup ranks above every full frame body.
    assert_eq!(names, ["R6", "6DII", "R5", "700D", "80D", "90D"]);
}

#[test]
fn comparison_table_against_the_700d() {
    let rows = canon_lineup().comparison_rows("700D");

    insta::assert_snapshot!(render::render_table(&rows), @r"
    | camera | megapixel | sensor type | width x height | pixel/mm² | normalization |
    |--------|-----------|-------------|----------------|-----------|---------------|
    | R6     | 20.0      | FullFrame   | 5477 x 3651    | 23148     | 42.25%        |
    | 6DII   | 26.2      | FullFrame   | 6268 x 4179    | 30324     | 55.35%        |
    | R5     | 44.7      | FullFrame   | 8188 x 5458    | 51736     | 94.44%        |
    | 700D   | 18.0      | APSC        | 5196 x 3464    | 54784     | 100.0%        |
    | 80D    | 24.2      | APSC        | 6024 x 4016    | 73654     | 134.44%       |
    | 90D    | 32.5      | APSC        | 6982 x 4654    | 98916     | 180.56%       |
    ");
}

#[test]
fn unknown_reference_normalizes_every_camera_to_itself() {
    let rows = canon_lineup().comparison_rows("5D mark V");

    assert!(rows.iter().all(|row| row.normalized == "100.0%"));

    // With every percentage tied, the original insertion order survives the
    // stable sort.
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["6DII", "R6", "R5", "700D", "80D", "90D"]);
}

#[test]
fn footprints_share_the_reference_center() {
    let set = canon_lineup();
    let reference = Rect::new(Vector2::new(320.0, 240.0), 600.0, 400.0);
    let footprints = FootprintScaler::new(reference)
        .scale(set.cameras())
        .expect("lineup is non-empty");

    assert_eq!(footprints.len(), set.cameras().len());
    for footprint in &footprints {
        assert_eq!(footprint.center(), reference.center());
    }

    // The scale maps the densest body, the 90D at 6982 px wide, onto the
    // reference width. The full frame R5 is wider than the 90D, so its
    // footprint overflows the reference; the scale is keyed by density, not
    // by width.
    let extents: Vec<(f64, f64)> = footprints
        .iter()
        .map(|footprint| (footprint.width(), footprint.height()))
        .collect();
    assert_eq!(
        extents,
        [
            (538.0, 359.0),
            (470.0, 313.0),
            (703.0, 469.0),
            (446.0, 297.0),
            (517.0, 345.0),
            (600.0, 399.0),
        ],
    );
}
