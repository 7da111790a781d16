//! Hardcoded vertex data for each demo.

use shuriken_engine::geometry::{Vertex2, Vertex3};

pub const TRIANGLE: [Vertex2; 3] = [
    Vertex2::new([0.0, 0.5], [1.0, 1.0, 0.0]),
    Vertex2::new([-0.5, -0.5], [0.7, 0.0, 1.0]),
    Vertex2::new([0.5, -0.5], [0.1, 1.0, 0.6]),
];

const GRAY: [f32; 3] = [0.3, 0.3, 0.3];

pub const SPINNING_TRIANGLE: [Vertex3; 3] = [
    Vertex3::new([0.0, 0.5, 0.0], GRAY),
    Vertex3::new([-0.5, -0.5, 0.0], GRAY),
    Vertex3::new([0.5, -0.5, 0.0], GRAY),
];

const fn rgb(r: f32, g: f32, b: f32) -> [f32; 3] {
    [r / 255.0, g / 255.0, b / 255.0]
}

const SALMON: [f32; 3] = rgb(244.0, 116.0, 90.0);
const ORANGE: [f32; 3] = rgb(255.0, 42.0, 0.0);
const RUST: [f32; 3] = rgb(175.0, 38.0, 10.0);

// Blade tips.
const A: [f32; 2] = [-0.7, 0.0];
const C: [f32; 2] = [0.0, 0.7];
const E: [f32; 2] = [0.7, 0.0];
const G: [f32; 2] = [0.0, -0.7];

// Inner corners around the hub.
const B: [f32; 2] = [-0.1, 0.1];
const D: [f32; 2] = [0.1, 0.1];
const F: [f32; 2] = [0.1, -0.1];
const H: [f32; 2] = [-0.1, -0.1];

/// Hub apex; the front faces meet at `+HUB`, the back faces at `-HUB`.
const HUB: f32 = 0.1;

/// One blade face: tip, inner corner, hub apex.
const fn face(tip: [f32; 2], corner: [f32; 2], hub_z: f32, color: [f32; 3]) -> [Vertex3; 3] {
    [
        Vertex3::new([tip[0], tip[1], 0.0], color),
        Vertex3::new([corner[0], corner[1], 0.0], color),
        Vertex3::new([0.0, 0.0, hub_z], color),
    ]
}

/// One blade: two faces on each side of the z = 0 plane.
const fn fan(
    tip: [f32; 2],
    (c0, color0): ([f32; 2], [f32; 3]),
    (c1, color1): ([f32; 2], [f32; 3]),
) -> [Vertex3; 12] {
    let faces = [
        face(tip, c0, HUB, color0),
        face(tip, c1, HUB, color1),
        face(tip, c0, -HUB, color0),
        face(tip, c1, -HUB, color1),
    ];

    let mut out = [Vertex3::new([0.0; 3], [0.0; 3]); 12];
    let mut i = 0;
    while i < 12 {
        out[i] = faces[i / 3][i % 3];
        i += 1;
    }
    out
}

const FANS: [[Vertex3; 12]; 4] = [
    fan(A, (B, SALMON), (H, ORANGE)),
    fan(E, (F, RUST), (D, ORANGE)),
    fan(C, (B, SALMON), (D, ORANGE)),
    fan(G, (F, RUST), (H, ORANGE)),
];

/// Four blades, front and back, as a plain triangle list.
pub const SHURIKEN: [Vertex3; 48] = {
    let mut out = [Vertex3::new([0.0; 3], [0.0; 3]); 48];
    let mut i = 0;
    while i < 48 {
        out[i] = FANS[i / 12][i % 12];
        i += 1;
    }
    out
};

#[cfg(test)]
mod tests {
    use super::*;
    use shuriken_engine::geometry::{VertexLayout, FLOAT_BYTES};

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_counts() {
        assert_eq!(TRIANGLE.len(), 3);
        assert_eq!(SPINNING_TRIANGLE.len(), 3);
        assert_eq!(SHURIKEN.len(), 48);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn flat_layout_is_five_floats() {
        let layout = VertexLayout::for_record::<Vertex2>(&[0, 1]).unwrap();
        assert_eq!(layout.stride(), 5 * FLOAT_BYTES);
        assert_eq!(layout.bindings()[0].offset, 0);
        assert_eq!(layout.bindings()[0].components, 2);
        assert_eq!(layout.bindings()[1].offset, 2 * FLOAT_BYTES);
        assert_eq!(layout.bindings()[1].components, 3);
    }

    #[test]
    fn transformed_layout_is_six_floats() {
        let layout = VertexLayout::for_record::<Vertex3>(&[0, 1]).unwrap();
        assert_eq!(layout.stride(), 6 * FLOAT_BYTES);
        assert_eq!(layout.bindings()[0].offset, 0);
        assert_eq!(layout.bindings()[1].offset, 3 * FLOAT_BYTES);
        assert_eq!(layout.bindings()[1].components, 3);
    }

    // ── shuriken shape ────────────────────────────────────────────────────

    #[test]
    fn every_shuriken_face_ends_at_the_hub() {
        for (i, tri) in SHURIKEN.chunks(3).enumerate() {
            let apex = tri[2].position;
            assert_eq!(apex[0], 0.0);
            assert_eq!(apex[1], 0.0);
            let expected = if (i / 2) % 2 == 0 { HUB } else { -HUB };
            assert_eq!(apex[2], expected, "face {i}");
        }
    }

    #[test]
    fn shuriken_faces_are_flat_colored() {
        for tri in SHURIKEN.chunks(3) {
            assert_eq!(tri[0].color, tri[1].color);
            assert_eq!(tri[1].color, tri[2].color);
        }
    }

    #[test]
    fn first_face_matches_left_blade() {
        assert_eq!(SHURIKEN[0].position, [-0.7, 0.0, 0.0]);
        assert_eq!(SHURIKEN[1].position, [-0.1, 0.1, 0.0]);
        assert_eq!(SHURIKEN[0].color, SALMON);
    }
}
