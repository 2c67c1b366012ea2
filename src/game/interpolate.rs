use glam::Vec3;

pub trait Interpolate: Copy {
    fn interpolate(left: Self, right: Self, n: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(left: Self, right: Self, n: f32) -> Self {
        left + (right - left) * n
    }
}

impl Interpolate for Vec3 {
    #[inline]
    fn interpolate(left: Self, right: Self, n: f32) -> Self {
        left.lerp(right, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_midpoint() {
        assert_eq!(f32::interpolate(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn vec3_endpoints_are_exact() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 9.0);
        assert_eq!(Vec3::interpolate(a, b, 0.0), a);
        assert_eq!(Vec3::interpolate(a, b, 1.0), b);
    }
}
