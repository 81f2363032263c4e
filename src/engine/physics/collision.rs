use glam::Vec3;

/// Axis-aligned bounding box in world space
///
/// Bounds are closed: a box with `min == max` on some axis is a flat box,
/// not an empty one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from two opposite corners in any order
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box resting on `base` (bottom face centre), extending `half.x` and
    /// `half.z` sideways and `2 * half.y` upward
    pub fn standing_on(base: Vec3, half: Vec3) -> Self {
        Self {
            min: Vec3::new(base.x - half.x, base.y, base.z - half.z),
            max: Vec3::new(base.x + half.x, base.y + 2.0 * half.y, base.z + half.z),
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Closed-interval overlap test, see [`intersects`]
    pub fn intersects(&self, other: &Aabb) -> bool {
        intersects(self, other)
    }
}

/// Per-axis overlap test for two boxes
///
/// Touching faces count as intersecting so a fast obstacle cannot slip past
/// on a frame where it lands exactly on the player's boundary.
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.min.x <= b.max.x
        && a.max.x >= b.min.x
        && a.min.y <= b.max.y
        && a.max.y >= b.min.y
        && a.min.z <= b.max.z
        && a.max.z >= b.min.z
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::new(Vec3::new(x, y, z), Vec3::new(x + 1.0, y + 1.0, z + 1.0))
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(0.5, 0.5, 0.5);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_touching_faces_intersect() {
        let a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(1.0, 0.0, 0.0);
        assert!(intersects(&a, &b), "Shared face must count as contact");

        let corner = unit_at(1.0, 1.0, 1.0);
        assert!(intersects(&a, &corner), "Shared corner must count as contact");
    }

    #[test]
    fn test_separated_on_any_axis_misses() {
        let a = unit_at(0.0, 0.0, 0.0);
        assert!(!intersects(&a, &unit_at(1.01, 0.0, 0.0)));
        assert!(!intersects(&a, &unit_at(0.0, 1.01, 0.0)));
        assert!(!intersects(&a, &unit_at(0.0, 0.0, -1.01)));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0));
        let inner = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_new_orders_corners() {
        let aabb = Aabb::new(Vec3::new(2.0, -1.0, 3.0), Vec3::new(-2.0, 1.0, -3.0));
        assert_eq!(aabb.min, Vec3::new(-2.0, -1.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn test_standing_on_rests_on_base() {
        let aabb = Aabb::standing_on(Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.5, 1.0, 0.5));
        assert_eq!(aabb.min, Vec3::new(3.5, 0.0, -0.5));
        assert_eq!(aabb.max, Vec3::new(4.5, 2.0, 0.5));
        assert_eq!(aabb.size(), Vec3::new(1.0, 2.0, 1.0));
    }
}
