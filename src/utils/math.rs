use glam::Vec3;

/// Axis-aligned box, min/max corners in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Cube of the given half-extent centered on `center`.
    pub fn cube(center: Vec3, half: f32) -> Self {
        Self {
            min: center - Vec3::splat(half),
            max: center + Vec3::splat(half),
        }
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

#[derive(Debug, Clone)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test. Returns the entry distance along the ray, clamped to zero
    /// when the origin is already inside the box.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;

        for i in 0..3 {
            let t1 = (aabb.min[i] - self.origin[i]) / self.direction[i];
            let t2 = (aabb.max[i] - self.origin[i]) / self.direction[i];

            tmin = tmin.max(t1.min(t2));
            tmax = tmax.min(t1.max(t2));
        }

        if tmax >= tmin && tmax > 0.0 {
            Some(tmin.max(0.0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_box_ahead() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let cube = Aabb::cube(Vec3::new(0.0, 0.0, -5.0), 0.5);
        let t = ray.intersects_aabb(&cube).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_box_behind() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let cube = Aabb::cube(Vec3::new(0.0, 0.0, 5.0), 0.5);
        assert!(ray.intersects_aabb(&cube).is_none());
    }

    #[test]
    fn origin_inside_box_clamps_to_zero() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let cube = Aabb::cube(Vec3::ZERO, 1.0);
        assert_eq!(ray.intersects_aabb(&cube), Some(0.0));
    }

    #[test]
    fn downward_ray_finds_top_face() {
        let ray = Ray::new(Vec3::new(0.2, 10.0, -0.1), Vec3::new(0.0, -1.0, 0.0));
        let cube = Aabb::cube(Vec3::new(0.0, 3.0, 0.0), 0.5);
        let t = ray.intersects_aabb(&cube).unwrap();
        assert!((ray.at(t).y - 3.5).abs() < 1e-5);
    }
}
