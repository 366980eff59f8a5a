use crate::core::ShapeId;
use crate::math::geometry;
use crate::shapes::Collidable;

/// Ordered storage for the collidable shapes of a level.
///
/// Shapes are kept in insertion order, which is the order the resolver visits them
/// and the order that breaks ties between equally deep contacts. Ids are never
/// reused within one storage, even after [`ShapeStorage::clear`].
#[derive(Debug)]
pub struct ShapeStorage {
    items: Vec<(ShapeId, Box<dyn Collidable>)>,
    next_id: u32,
}

impl Default for ShapeStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStorage {
    /// Creates an empty storage
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1, // Start at 1, so 0 never names a shape
        }
    }

    /// Adds a shape and returns its id
    pub fn add<C: Collidable + 'static>(&mut self, shape: C) -> ShapeId {
        self.add_boxed(Box::new(shape))
    }

    /// Adds an already boxed shape and returns its id
    pub fn add_boxed(&mut self, shape: Box<dyn Collidable>) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;

        let outline = shape.get_outline();
        let usable = outline
            .first()
            .is_some_and(|&probe| geometry::closest_point_on_polygon(outline, probe).is_some());
        if !usable {
            log::warn!("{} {id} has a malformed outline and will never collide", shape.shape_type());
        }

        self.items.push((id, shape));
        id
    }

    /// Gets a shape by id
    pub fn get(&self, id: ShapeId) -> Option<&dyn Collidable> {
        self.items
            .iter()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, shape)| shape.as_ref())
    }

    /// Iterates the shapes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &dyn Collidable)> + '_ {
        self.items.iter().map(|(id, shape)| (*id, shape.as_ref()))
    }

    /// Returns all ids in insertion order
    pub fn handles(&self) -> Vec<ShapeId> {
        self.items.iter().map(|(id, _)| *id).collect()
    }

    /// Returns the number of shapes
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every shape
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<C: Collidable + 'static> FromIterator<C> for ShapeStorage {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut storage = Self::new();
        for shape in iter {
            storage.add(shape);
        }
        storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::TerrainKind;
    use crate::math::Vector2;
    use crate::shapes::Terrain;

    fn square(offset: f32) -> Terrain {
        Terrain::new(
            TerrainKind::Green,
            vec![
                Vector2::new(offset, 0.0),
                Vector2::new(offset + 10.0, 0.0),
                Vector2::new(offset + 10.0, 10.0),
                Vector2::new(offset, 10.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut storage = ShapeStorage::new();
        let a = storage.add(square(0.0));
        let b = storage.add(square(20.0));

        assert_ne!(a, b);
        assert_eq!(storage.handles(), vec![a, b]);
        assert_eq!(storage.len(), 2);
        assert!(storage.get(b).is_some());
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut storage = ShapeStorage::new();
        let a = storage.add(square(0.0));
        storage.clear();
        assert!(storage.is_empty());
        assert!(storage.get(a).is_none());

        let b = storage.add(square(0.0));
        assert_ne!(a, b);
    }
}
