use fixfn::data_structures::{
    shape::{check_strips, strips_of},
    vertex::{ColourVertex, TexturedVertex, Vertex, WHITE, argb},
};

#[test]
fn argb_decodes_channels_in_order() {
    assert_eq!(argb(0xFFFF0000), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(argb(0x0000FF00), [0.0, 1.0, 0.0, 0.0]);
    assert_eq!(argb(0x800000FF)[2], 1.0);
    assert!((argb(0x800000FF)[3] - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn argb_linearizes_colour_but_not_alpha() {
    let [r, g, b, a] = argb(0x80808080);
    // sRGB 0x80 is about 21.6% linear intensity
    assert!((r - 0.2158).abs() < 1e-3);
    assert_eq!(r, g);
    assert_eq!(g, b);
    assert!((a - 0.502).abs() < 1e-3);
}

#[test]
fn vertex_layouts_match_struct_sizes() {
    assert_eq!(ColourVertex::desc().array_stride, 7 * 4);
    assert_eq!(ColourVertex::desc().attributes.len(), 2);
    assert_eq!(TexturedVertex::desc().array_stride, 9 * 4);
    assert_eq!(TexturedVertex::desc().attributes.len(), 3);
    assert_eq!(TexturedVertex::white([0.0; 3], [0.5; 2]).colour, WHITE);
}

#[test]
fn strips_of_splits_into_faces() {
    assert_eq!(strips_of(24, 4), vec![0..4, 4..8, 8..12, 12..16, 16..20, 20..24]);
    assert_eq!(strips_of(3, 3), vec![0..3]);
    assert!(strips_of(2, 3).is_empty());
}

#[test]
fn check_strips_accepts_in_bounds_triangles() {
    assert!(check_strips(3, &[0..3]).is_ok());
    assert!(check_strips(24, &strips_of(24, 4)).is_ok());
}

#[test]
fn check_strips_rejects_bad_ranges() {
    assert!(check_strips(3, &[]).is_err());
    assert!(check_strips(4, &[2..6]).is_err());
    assert!(check_strips(4, &[0..2]).is_err());
}

#[test]
fn check_strips_handles_ranges_at_the_top_of_u32() {
    assert!(check_strips(u32::MAX, &[u32::MAX - 1..u32::MAX]).is_err());
    assert!(check_strips(u32::MAX, &[u32::MAX - 3..u32::MAX]).is_ok());
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = 5..2;
    assert!(check_strips(8, &[reversed]).is_err());
}

#[test]
fn strips_of_zero_length_is_empty() {
    assert!(strips_of(4, 0).is_empty());
    assert!(strips_of(0, 0).is_empty());
}
