use minigolf_physics::{
    bodies::{ObstacleKind, SurfaceKind, TerrainKind},
    error::PhysicsError,
    level::{Level, LevelDescription},
    shapes::Collidable,
    math::Vector2,
    SimulationConfig, SimulationSession,
};
use approx::assert_relative_eq;

const LEVEL: &str = r#"{
    "name": "Practice green",
    "height": 720,
    "ball_start": { "x": 100, "y": 220 },
    "zones": [
        {
            "id": 2,
            "type": "lake",
            "vertices": [
                { "x": 600, "y": 0 }, { "x": 800, "y": 0 },
                { "x": 800, "y": 150 }, { "x": 600, "y": 150 }
            ]
        },
        {
            "id": 1,
            "type": "green",
            "vertices": [
                { "x": 0, "y": 0 }, { "x": 600, "y": 0 },
                { "x": 600, "y": 200 }, { "x": 0, "y": 200 }
            ]
        }
    ],
    "obstacles": [
        {
            "id": 7,
            "type": "wall",
            "position": { "x": 400, "y": 260 },
            "rotation": 0,
            "vertices": [
                { "x": -10, "y": -60 }, { "x": 10, "y": -60 },
                { "x": 10, "y": 60 }, { "x": -10, "y": 60 }
            ]
        }
    ]
}"#;

#[test]
fn test_level_build_flips_and_sorts() {
    let level = Level::from_json_str(LEVEL).unwrap();

    assert_eq!(level.get_name(), "Practice green");
    assert_eq!(level.get_ball_start(), Vector2::new(100.0, 500.0));

    let kinds: Vec<SurfaceKind> = level.get_shapes().iter().map(|(_, s)| s.surface_kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SurfaceKind::Terrain(TerrainKind::Green),
            SurfaceKind::Terrain(TerrainKind::Lake),
            SurfaceKind::Obstacle(ObstacleKind::Wall),
        ]
    );

    // Green spans y 0..200 in the file, 520..720 on screen
    let (_, green) = level.get_shapes().iter().next().unwrap();
    let bounds = green.get_bounds();
    assert_relative_eq!(bounds.min.y, 520.0);
    assert_relative_eq!(bounds.max.y, 720.0);

    let (_, wall) = level.get_shapes().iter().nth(2).unwrap();
    let bounds = wall.get_bounds();
    assert_relative_eq!(bounds.min.x, 390.0, epsilon = 1e-3);
    assert_relative_eq!(bounds.max.x, 410.0, epsilon = 1e-3);
    assert_relative_eq!(bounds.min.y, 400.0, epsilon = 1e-3);
    assert_relative_eq!(bounds.max.y, 520.0, epsilon = 1e-3);
}

#[test]
fn test_rotation_is_mirrored_with_the_frame() {
    // A bar leaning to the right in a y-up file leans to the right on screen too
    let json = r#"{
        "height": 100,
        "ball_start": { "x": 0, "y": 0 },
        "obstacles": [{
            "id": 1, "type": "log",
            "position": { "x": 50, "y": 50 },
            "rotation": -45,
            "vertices": [
                { "x": -1, "y": 0 }, { "x": 1, "y": 0 },
                { "x": 1, "y": 20 }, { "x": -1, "y": 20 }
            ]
        }]
    }"#;
    let level = Level::from_json_str(json).unwrap();
    let (_, log) = level.get_shapes().iter().next().unwrap();

    // Top of the bar: (50 + 20 sin 45, 50 + 20 cos 45) y-up, then flipped
    let top = log
        .get_outline()
        .iter()
        .copied()
        .fold(Vector2::new(0.0, f32::MAX), |best, p| if p.y < best.y { p } else { best });
    assert!(top.x > 50.0);
    assert_relative_eq!(top.y, 100.0 - 50.0 - 20.0 * std::f32::consts::FRAC_1_SQRT_2, epsilon = 1.0);
}

#[test]
fn test_coordinates_without_height_are_kept() {
    let json = r#"{
        "ball_start": { "x": 10, "y": 20 },
        "zones": [{ "id": 1, "type": "fairway", "vertices": [
            { "x": 0, "y": 100 }, { "x": 50, "y": 100 }, { "x": 50, "y": 150 }
        ]}]
    }"#;
    let level = Level::from_json_str(json).unwrap();
    assert_eq!(level.get_name(), "");
    assert_eq!(level.get_ball_start(), Vector2::new(10.0, 20.0));
    let (_, zone) = level.get_shapes().iter().next().unwrap();
    assert_relative_eq!(zone.get_bounds().min.y, 100.0);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let json = r#"{
        "ball_start": { "x": 0, "y": 0 },
        "zones": [
            { "id": 1, "type": "green", "vertices": [{ "x": 0, "y": 0 }, { "x": 1, "y": 0 }, { "x": 1, "y": 1 }] },
            { "id": 1, "type": "bunker", "vertices": [{ "x": 0, "y": 0 }, { "x": 1, "y": 0 }, { "x": 1, "y": 1 }] }
        ]
    }"#;
    let err = Level::from_json_str(json).unwrap_err();
    assert!(matches!(err, PhysicsError::InvalidLevel(_)), "{err}");
}

#[test]
fn test_every_editor_terrain_type_loads() {
    let tags = [
        "green", "fairway", "darkgreen", "rocks", "darkrocks", "dirt", "darkdirt", "bunker", "lake",
    ];
    let zones: Vec<String> = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let x = i as f32 * 10.0;
            format!(
                r#"{{ "id": {i}, "type": "{tag}", "vertices": [
                    {{ "x": {x}, "y": 0 }}, {{ "x": {}, "y": 0 }}, {{ "x": {}, "y": 5 }}
                ] }}"#,
                x + 10.0,
                x + 10.0
            )
        })
        .collect();
    let json = format!(
        r#"{{ "ball_start": {{ "x": 0, "y": 0 }}, "zones": [{}] }}"#,
        zones.join(",")
    );

    let level = Level::from_json_str(&json).unwrap();
    assert_eq!(level.get_shapes().len(), tags.len());
    let kinds: Vec<SurfaceKind> = level.get_shapes().iter().map(|(_, s)| s.surface_kind()).collect();
    assert_eq!(kinds[5], SurfaceKind::Terrain(TerrainKind::Dirt));
    assert_eq!(kinds[6], SurfaceKind::Terrain(TerrainKind::DarkDirt));
}

#[test]
fn test_unknown_type_fails_to_parse() {
    let json = r#"{
        "ball_start": { "x": 0, "y": 0 },
        "zones": [{ "id": 1, "type": "lava", "vertices": [] }]
    }"#;
    let err = LevelDescription::from_json_str(json).unwrap_err();
    assert!(matches!(err, PhysicsError::LevelParse(_)));
}

#[test]
fn test_malformed_polygon_fails_to_build() {
    let json = r#"{
        "ball_start": { "x": 0, "y": 0 },
        "zones": [{ "id": 3, "type": "green", "vertices": [{ "x": 0, "y": 0 }, { "x": 5, "y": 0 }] }]
    }"#;
    let description = LevelDescription::from_json_str(json).unwrap();
    let err = description.build().unwrap_err();
    assert!(err.to_string().contains("zone 3"), "{err}");

    let bad_height = LevelDescription { height: Some(-5.0), ..description };
    assert!(matches!(bad_height.build(), Err(PhysicsError::InvalidLevel(_))));
}

#[test]
fn test_description_survives_json() {
    let description = LevelDescription::from_json_str(LEVEL).unwrap();
    let json = description.to_json_string().unwrap();
    assert_eq!(LevelDescription::from_json_str(&json).unwrap(), description);
}

#[test]
fn test_session_from_level() {
    let level = Level::from_json_str(LEVEL).unwrap();
    let mut session = SimulationSession::from_level(SimulationConfig::default(), level, 7.0).unwrap();

    assert_eq!(session.get_shapes().len(), 3);
    assert_eq!(session.get_ball().get_position(), Vector2::new(100.0, 500.0));
    assert_eq!(session.get_start_position(), Vector2::new(100.0, 500.0));

    let other = Level::from_json_str(
        r#"{ "name": "next", "ball_start": { "x": 5, "y": 5 }, "zones": [] }"#,
    )
    .unwrap();
    session.load_level(other);
    assert!(session.get_shapes().is_empty());
    assert_eq!(session.get_ball().get_position(), Vector2::new(5.0, 5.0));
    assert_eq!(session.get_strokes(), 0);

    let level = Level::from_json_str(LEVEL).unwrap();
    assert!(SimulationSession::from_level(SimulationConfig::default(), level, 0.0).is_err());
}
