use fixfn::{
    KeyCode, Matrix4, Point3, Rad, Transform,
    data_structures::{
        animation::Spin,
        shape::{check_strips, strips_of},
        vertex::argb,
    },
    scenes::{blending, matrices, sprite},
    transform::compose,
};

fn assert_close(actual: Point3<f32>, expected: [f32; 3]) {
    let diff = [actual.x - expected[0], actual.y - expected[1], actual.z - expected[2]];
    assert!(
        diff.iter().all(|d| d.abs() < 1e-4),
        "{actual:?} is not close to {expected:?}"
    );
}

fn origin_at_rest(index: usize) -> Point3<f32> {
    let recipes = matrices::recipes(Rad(0.0));
    compose(&recipes[index]).transform_point(Point3::new(0.0, 0.0, 0.0))
}

#[test]
fn matrices_triangles_share_a_base_except_the_last() {
    for index in 0..matrices::TRIANGLE_COUNT - 1 {
        assert_eq!(
            matrices::positions(index),
            [[-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [0.0, 1.0, 0.0]]
        );
    }
    assert_eq!(matrices::positions(7)[1], [1.0, -2.0, 0.0]);
}

#[test]
fn matrices_vertices_carry_their_corner_colours() {
    let vertices = matrices::vertices(2);
    assert_eq!(vertices[0].colour[..3], argb(0xFF0000)[..3]);
    assert_eq!(vertices[1].colour, argb(0x0000BFFF));
    assert_eq!(vertices[2].position, [0.0, 1.0, 0.0]);
}

#[test]
fn matrices_recipes_place_triangles_at_rest() {
    // translate then scale, the rotations at angle zero leave the origin alone
    assert_close(origin_at_rest(0), [1.05, 0.0, 0.0]);
    assert_close(origin_at_rest(1), [0.0, 0.0, 0.0]);
    assert_close(origin_at_rest(2), [-1.35, 0.0, 0.0]);
    assert_close(origin_at_rest(5), [0.0, 1.2, 0.0]);
    assert_close(origin_at_rest(6), [0.0, -1.29, 0.0]);
    assert_close(origin_at_rest(7), [1.0, 1.0, 1.0]);
}

#[test]
fn matrices_far_triangles_are_rolled_by_two_radians() {
    let (sin, cos) = 2.0f32.sin_cos();
    let (x, y) = (0.75, 0.75);
    assert_close(origin_at_rest(3), [x * cos - y * sin, x * sin + y * cos, 1.25]);
    assert_close(
        origin_at_rest(4),
        [-x * cos + y * sin, -x * sin - y * cos, -1.25],
    );
}

#[test]
fn matrices_scale_applies_after_translation() {
    let recipes = matrices::recipes(Rad(0.0));
    let tip = compose(&recipes[1]).transform_point(Point3::new(0.0, 1.0, 0.0));
    assert_close(tip, [0.0, 0.5, 0.0]);
}

fn assert_matrix_close(actual: Matrix4<f32>, expected: Matrix4<f32>) {
    let (a, e): ([[f32; 4]; 4], [[f32; 4]; 4]) = (actual.into(), expected.into());
    let close = a
        .iter()
        .flatten()
        .zip(e.iter().flatten())
        .all(|(a, e)| (a - e).abs() < 1e-4);
    assert!(close, "{actual:?} is not close to {expected:?}");
}

#[test]
fn matrices_recipes_multiply_in_reverse_at_any_angle() {
    let a = Rad(0.7);
    let two = Rad(2.0);
    let rx = |angle: Rad<f32>| Matrix4::from_angle_x(angle);
    let ry = |angle: Rad<f32>| Matrix4::from_angle_y(angle);
    let rz = |angle: Rad<f32>| Matrix4::from_angle_z(angle);
    let s = |factor: f32| Matrix4::from_scale(factor);
    let t = |x: f32, y: f32, z: f32| Matrix4::from_translation([x, y, z].into());

    let expected = [
        ry(a) * s(0.35) * rx(a) * t(3.0, 0.0, 0.0) * rx(two),
        t(0.0, 0.0, 0.0) * s(0.5) * ry(a) * rx(a),
        ry(-a) * s(0.45) * rx(two) * t(-3.0, 0.0, 0.0) * rx(-a),
        rz(two) * ry(a) * ry(a) * s(0.25) * t(3.0, 3.0, 5.0) * rx(-a) * rx(a + two),
        ry(-a) * rz(two) * ry(-a) * s(0.25) * t(-3.0, -3.0, -5.0) * rx(a) * rx(two - a),
        rx(a) * ry(a) * s(0.4) * t(0.0, 3.0, 0.0) * ry(a) * rz(-a),
        rx(-a) * ry(-a) * s(0.43) * t(0.0, -3.0, 0.0) * ry(-a) * rz(a),
        rz(-a) * rx(-a) * t(1.0, 1.0, 1.0) * s(0.2),
    ];

    for (recipe, expected) in matrices::recipes(a).iter().zip(expected) {
        assert_matrix_close(compose(recipe), expected);
    }
}

#[test]
fn matrices_centre_triangle_spins_in_place() {
    let recipes = matrices::recipes(Rad(1.3));
    let centre = compose(&recipes[1]).transform_point(Point3::new(0.0, 0.0, 0.0));
    assert_close(centre, [0.0, 0.0, 0.0]);
}

#[test]
fn sprite_loads_thirty_four_frames_in_row_order() {
    let files = sprite::texture_files();
    assert_eq!(files.len(), 34);
    assert_eq!(files[0], "1-1.png");
    assert_eq!(files[10], "1-11.png");
    assert_eq!(files[11], "2-1.png");
    assert_eq!(files[22], "3-1.png");
    assert_eq!(files[33], "3-12.png");
}

#[test]
fn sprite_quad_is_a_unit_square_strip() {
    let positions: Vec<_> = sprite::QUAD.iter().map(|v| v.position).collect();
    assert_eq!(
        positions,
        vec![[0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]
    );
    assert_eq!(sprite::QUAD[0].tex_coords, [0.0, 0.0]);
    assert_eq!(sprite::QUAD[3].tex_coords, [1.0, 1.0]);
    assert!(check_strips(4, &[0..4]).is_ok());
}

#[test]
fn arrow_keys_move_the_sprite_by_one_unit() {
    let mut offset = [0.0; 2];
    assert!(sprite::nudge(&mut offset, KeyCode::ArrowUp));
    assert!(sprite::nudge(&mut offset, KeyCode::ArrowUp));
    assert!(sprite::nudge(&mut offset, KeyCode::ArrowLeft));
    assert_eq!(offset, [-1.0, 2.0]);

    assert!(sprite::nudge(&mut offset, KeyCode::ArrowRight));
    assert!(sprite::nudge(&mut offset, KeyCode::ArrowDown));
    assert_eq!(offset, [0.0, 1.0]);

    assert!(!sprite::nudge(&mut offset, KeyCode::KeyB));
    assert_eq!(offset, [0.0, 1.0]);

    let corner = sprite::world(offset).transform_point(Point3::new(1.0, 0.0, 0.0));
    assert_close(corner, [1.0, 1.0, 0.0]);
}

#[test]
fn cube_faces_are_four_vertex_strips_on_the_unit_cube() {
    assert_eq!(blending::CUBE.len(), 24);
    let strips = strips_of(blending::CUBE.len() as u32, blending::FACE_LEN);
    assert_eq!(strips.len(), 6);
    assert!(check_strips(24, &strips).is_ok());

    for face in blending::CUBE.chunks(4) {
        // every face lies in one plane x, y or z = +-1
        let on_plane = (0..3).any(|axis| {
            let c = face[0].position[axis];
            c.abs() == 1.0 && face.iter().all(|v| v.position[axis] == c)
        });
        assert!(on_plane, "{face:?} is not a cube face");
    }
}

#[test]
fn cube_recipe_is_the_spin_rotation() {
    let mut spin = Spin::new(blending::SPIN_RATES);
    spin.step(instant::Duration::from_millis(500));
    let world = compose(&blending::recipe(&spin));
    assert_eq!(world, spin.rotation().matrix());
}

#[test]
fn window_settings_match_the_tutorials() {
    let matrices = matrices::settings();
    assert_eq!(matrices.title, "Tutorial 03: Matrices");
    assert_eq!((matrices.width, matrices.height), (1200, 900));
    assert_eq!((matrices.x, matrices.y), (100, 100));

    assert_eq!(sprite::settings().title, "Tutorial 05: Textures");
    assert_eq!((blending::settings().width, blending::settings().height), (900, 900));
}
