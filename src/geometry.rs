//! Compile-time vertex data.

use glam::Vec3;
use glow::HasContext;

use crate::abs::Vertex;

const SQRT_3: f32 = 1.732_050_8;

/// A vertex made of a single position attribute at location 0.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub pos: Vec3,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }
}

impl Vertex for Position {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            gl.vertex_attrib_pointer_f32(
                0,
                3,
                glow::FLOAT,
                false,
                std::mem::size_of::<Position>() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(0);
        }
    }
}

/// An equilateral triangle centered on the origin.
pub const TRIANGLE: [Position; 3] = [
    Position::new(-0.5, -0.5 * SQRT_3 / 3.0, 0.0), // lower left
    Position::new(0.5, -0.5 * SQRT_3 / 3.0, 0.0),  // lower right
    Position::new(0.0, 0.5 * SQRT_3 * 2.0 / 3.0, 0.0), // top
];

/// Two triangles side by side.
pub const TWO_TRIANGLES: [Position; 6] = [
    Position::new(-0.9, -0.5, 0.0),
    Position::new(-0.1, -0.5, 0.0),
    Position::new(-0.5, 0.5, 0.0),
    Position::new(0.1, -0.5, 0.0),
    Position::new(0.9, -0.5, 0.0),
    Position::new(0.5, 0.5, 0.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Position>(), 3 * std::mem::size_of::<f32>());
        assert_eq!(std::mem::size_of_val(&TRIANGLE), 9 * 4);
    }

    #[test]
    fn test_triangle_is_equilateral() {
        let [a, b, c] = TRIANGLE.map(|v| v.pos);
        let ab = a.distance(b);
        assert!((ab - 1.0).abs() < 1e-5);
        assert!((b.distance(c) - ab).abs() < 1e-5);
        assert!((c.distance(a) - ab).abs() < 1e-5);
    }

    #[test]
    fn test_triangle_centroid_at_origin() {
        let centroid = TRIANGLE.iter().fold(Vec3::ZERO, |acc, v| acc + v.pos) / 3.0;
        assert!(centroid.length() < 1e-5);
    }

    #[test]
    fn test_geometry_fits_clip_space() {
        for v in TRIANGLE.iter().chain(TWO_TRIANGLES.iter()) {
            assert!(v.pos.abs().max_element() <= 1.0);
            assert_eq!(v.pos.z, 0.0);
        }
    }

    #[test]
    fn test_two_triangles_do_not_overlap() {
        let (left, right) = TWO_TRIANGLES.split_at(3);
        assert!(left.iter().all(|v| v.pos.x < 0.0));
        assert!(right.iter().all(|v| v.pos.x > 0.0));
    }
}
