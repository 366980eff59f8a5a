use crate::bodies::Ball;
use crate::collision::{
    BroadPhase, BruteForceBroadPhase, ClosestPointNarrowPhase, Contact, NarrowPhase,
};
use crate::core::{ShapeStorage, SimulationConfig};

/// Finds the deepest contact between the ball and the solid shapes.
///
/// Shapes whose bounding box misses the ball's are skipped, the rest get an exact
/// closest-point test. The deepest penetration wins; between equal depths the shape
/// stored first wins.
pub fn find_deepest_contact<'a>(
    ball: &Ball,
    shapes: &'a ShapeStorage,
    config: &SimulationConfig,
) -> Option<Contact<'a>> {
    find_deepest_contact_with(
        &BruteForceBroadPhase,
        &ClosestPointNarrowPhase,
        ball,
        shapes,
        config,
    )
}

/// [`find_deepest_contact`] with explicit broad and narrow phases
pub fn find_deepest_contact_with<'a, B, N>(
    broad_phase: &B,
    narrow_phase: &N,
    ball: &Ball,
    shapes: &'a ShapeStorage,
    config: &SimulationConfig,
) -> Option<Contact<'a>>
where
    B: BroadPhase + ?Sized,
    N: NarrowPhase + ?Sized,
{
    let mut deepest: Option<Contact<'a>> = None;

    for (shape_id, shape) in broad_phase.candidates(&ball.get_bounds(), shapes) {
        let Some(penetration) = narrow_phase.penetration(ball, shape, config) else {
            continue;
        };

        log::trace!(
            "contact with {} {:?}: depth {}, normal {}",
            shape.shape_type(),
            shape_id,
            penetration.depth,
            penetration.normal
        );

        if deepest.map_or(true, |current| penetration.depth > current.depth) {
            deepest = Some(Contact {
                shape_id,
                shape,
                normal: penetration.normal,
                depth: penetration.depth,
                point: penetration.point,
            });
        }
    }

    deepest
}
