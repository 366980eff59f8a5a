use minigolf_physics::math::{geometry, normalize_degrees, Aabb, Vector2};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

fn square() -> Vec<Vector2> {
    vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(100.0, 0.0),
        Vector2::new(100.0, 100.0),
        Vector2::new(0.0, 100.0),
    ]
}

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(3.0, 4.0);
    let v2 = Vector2::new(1.0, -2.0);

    assert_eq!(v1 + v2, Vector2::new(4.0, 2.0));
    assert_eq!(v1 - v2, Vector2::new(2.0, 6.0));
    assert_eq!(v1 * 2.0, Vector2::new(6.0, 8.0));
    assert_eq!(2.0 * v1, Vector2::new(6.0, 8.0));
    assert_eq!(-v1, Vector2::new(-3.0, -4.0));
    assert_eq!(v1.dot(&v2), 3.0 - 8.0);
    assert_eq!(v1.cross(&v2), 3.0 * -2.0 - 4.0 * 1.0);
    assert_relative_eq!(v1.length(), 5.0);
    assert_relative_eq!(v1.normalize(), Vector2::new(0.6, 0.8));
    assert!(Vector2::zero().try_normalize().is_none());
}

#[test]
fn test_vector2_rotation() {
    let v = Vector2::new(1.0, 0.0);
    let quarter = v.rotated(std::f32::consts::FRAC_PI_2);
    assert_abs_diff_eq!(quarter, Vector2::new(0.0, 1.0), epsilon = 1e-6);

    let half = v.rotated(std::f32::consts::PI);
    assert_abs_diff_eq!(half, Vector2::new(-1.0, 0.0), epsilon = 1e-6);
}

#[test]
fn test_normalize_degrees() {
    assert_relative_eq!(normalize_degrees(-90.0), 270.0);
    assert_relative_eq!(normalize_degrees(720.0), 0.0);
    assert_relative_eq!(normalize_degrees(45.0), 45.0);
    let tiny = normalize_degrees(-1e-7);
    assert!((0.0..360.0).contains(&tiny));
}

#[test]
fn test_aabb_operations() {
    let aabb = Aabb::from_points(&square()).unwrap();
    assert_eq!(aabb.min, Vector2::new(0.0, 0.0));
    assert_eq!(aabb.max, Vector2::new(100.0, 100.0));
    assert_eq!(aabb.center(), Vector2::new(50.0, 50.0));
    assert_eq!(aabb.extents(), Vector2::new(100.0, 100.0));

    let ball = Aabb::from_circle(Vector2::new(110.0, 50.0), 10.0);
    assert!(aabb.intersects(&ball));
    let far = Aabb::from_circle(Vector2::new(150.0, 50.0), 10.0);
    assert!(!aabb.intersects(&far));

    assert!(Aabb::from_points(&[]).is_none());
    assert_eq!(aabb.closest_point(Vector2::new(150.0, -5.0)), Vector2::new(100.0, 0.0));
}

#[test]
fn test_closest_point_on_segment() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(10.0, 0.0);

    let mid = geometry::closest_point_on_segment(Vector2::new(4.0, 5.0), a, b).unwrap();
    assert_eq!(mid, Vector2::new(4.0, 0.0));

    // Clamped to the endpoints
    let before = geometry::closest_point_on_segment(Vector2::new(-3.0, 1.0), a, b).unwrap();
    assert_eq!(before, a);
    let after = geometry::closest_point_on_segment(Vector2::new(13.0, 1.0), a, b).unwrap();
    assert_eq!(after, b);

    assert!(geometry::closest_point_on_segment(Vector2::new(1.0, 1.0), a, a).is_none());
}

#[test]
fn test_closest_point_on_polygon() {
    let outline = square();

    let closest = geometry::closest_point_on_polygon(&outline, Vector2::new(50.0, -10.0)).unwrap();
    assert_eq!(closest.point, Vector2::new(50.0, 0.0));
    assert_relative_eq!(closest.distance_squared, 100.0);
    assert_eq!(closest.edge_index, 0);

    // The closing edge from the last vertex back to the first is walked too
    let closest = geometry::closest_point_on_polygon(&outline, Vector2::new(-5.0, 50.0)).unwrap();
    assert_eq!(closest.point, Vector2::new(0.0, 50.0));
    assert_eq!(closest.edge_index, 3);
}

#[test]
fn test_malformed_outlines() {
    let two = [Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)];
    assert!(geometry::closest_point_on_polygon(&two, Vector2::zero()).is_none());

    let collapsed = [Vector2::new(5.0, 5.0); 4];
    assert!(geometry::closest_point_on_polygon(&collapsed, Vector2::zero()).is_none());
    assert!(geometry::circle_polygon_penetration(&collapsed, Vector2::new(5.0, 5.0), 3.0, 1e-5)
        .is_none());
}

#[test]
fn test_concave_polygon_closest_point() {
    // An L shape: from inside, the reflex corner at (50, 50) is the closest boundary point
    let outline = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(100.0, 0.0),
        Vector2::new(100.0, 50.0),
        Vector2::new(50.0, 50.0),
        Vector2::new(50.0, 100.0),
        Vector2::new(0.0, 100.0),
    ];
    let closest = geometry::closest_point_on_polygon(&outline, Vector2::new(45.0, 45.0)).unwrap();
    assert_eq!(closest.point, Vector2::new(50.0, 50.0));
    assert!(!geometry::contains_point(&outline, Vector2::new(75.0, 75.0)));
    assert!(geometry::contains_point(&outline, Vector2::new(25.0, 75.0)));
}

#[test]
fn test_circle_polygon_penetration() {
    let outline = square();

    // Ball resting 2 px into the top face (y-down: "up" is -y)
    let hit = geometry::circle_polygon_penetration(&outline, Vector2::new(50.0, -8.0), 10.0, 1e-5)
        .unwrap();
    assert_abs_diff_eq!(hit.normal, Vector2::new(0.0, -1.0), epsilon = 1e-6);
    assert_relative_eq!(hit.depth, 2.0);

    // Clear of the face
    assert!(
        geometry::circle_polygon_penetration(&outline, Vector2::new(50.0, -12.0), 10.0, 1e-5)
            .is_none()
    );
}

#[test]
fn test_center_on_boundary_uses_edge_normal() {
    let outline = square();

    let hit = geometry::circle_polygon_penetration(&outline, Vector2::new(50.0, 0.0), 10.0, 1e-5)
        .unwrap();
    assert_relative_eq!(hit.depth, 10.0);
    assert_abs_diff_eq!(hit.normal, Vector2::new(0.0, -1.0), epsilon = 1e-6);

    // Same answer with the opposite winding
    let reversed: Vec<_> = outline.iter().rev().copied().collect();
    let hit = geometry::circle_polygon_penetration(&reversed, Vector2::new(100.0, 50.0), 10.0, 1e-5)
        .unwrap();
    assert_abs_diff_eq!(hit.normal, Vector2::new(1.0, 0.0), epsilon = 1e-6);
}

proptest! {
    #[test]
    fn closest_point_is_never_farther_than_a_vertex(x in -300.0f32..300.0, y in -300.0f32..300.0) {
        let outline = square();
        let point = Vector2::new(x, y);
        let closest = geometry::closest_point_on_polygon(&outline, point).unwrap();
        for vertex in &outline {
            prop_assert!(closest.distance_squared <= point.distance_squared(vertex) + 1e-2);
        }
    }

    #[test]
    fn penetration_normal_is_unit_length(x in -20.0f32..120.0, y in -20.0f32..120.0) {
        let outline = square();
        if let Some(hit) = geometry::circle_polygon_penetration(&outline, Vector2::new(x, y), 15.0, 1e-5) {
            prop_assert!((hit.normal.length() - 1.0).abs() < 1e-4);
            prop_assert!(hit.depth > 0.0 && hit.depth <= 15.0);
        }
    }
}
