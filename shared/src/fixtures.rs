//! Inputs shared by the unit tests of several modules.

/// Two adjacent 10x10 squares `A` and `B`, a point feature, and an unnamed
/// strip along the top edge.
pub const TWO_SQUARES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"name": "A"},
            "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]]}
        },
        {
            "type": "Feature",
            "properties": {"name": "B"},
            "geometry": {"type": "MultiPolygon", "coordinates": [[[[10,0],[20,0],[20,10],[10,10],[10,0]]]]}
        },
        {
            "type": "Feature",
            "properties": {"name": "Capital"},
            "geometry": {"type": "Point", "coordinates": [5,5]}
        },
        {
            "type": "Feature",
            "properties": {},
            "geometry": {"type": "Polygon", "coordinates": [[[0,10],[20,10],[20,12],[0,12],[0,10]]]}
        }
    ]
}"#;

/// Statistics covering `A` and `B` only.
pub const POPULATION: &str = r#"[{"استان":"A","pop":10},{"استان":"B","pop":1000}]"#;
