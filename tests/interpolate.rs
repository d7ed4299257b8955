use trs_blend::core::prelude::*;

const TOLERANCE: Float = 1e-3;

fn same_rotation(a: &Quaternion, b: &Quaternion) -> bool {
    a.dot(b).abs() > 0.9999
}

#[test]
fn interpolate_identical_endpoints() {
    let mut rng = RNG::new();
    let flags = InterpolationFlags::all();

    for _ in 0..100 {
        let a = random_affine(&mut rng);
        for i in 0..=10 {
            let t = i as Float / 10.0;
            let m = interpolate(&a, &a, t, &flags);
            assert!(a.max_abs_diff(&m) < TOLERANCE, "t={} {:?} {:?}", t, a, m);
        }
    }
}

#[test]
fn interpolate_endpoints() {
    let mut rng = RNG::new_sequence(1);

    for _ in 0..100 {
        let a = random_affine(&mut rng);
        let b = random_affine(&mut rng);
        let (_, qa, _) = decompose(&a);
        let (_, qb, _) = decompose(&b);

        assert_eq!(interpolate_quaternion(&qa, &qb, 0.0, true), qa);
        assert_eq!(interpolate_quaternion(&qa, &qb, 1.0, true), qb);

        let m0 = interpolate(&a, &b, 0.0, &InterpolationFlags::new(false, true, false));
        assert!(a.max_abs_diff(&m0) < TOLERANCE);

        let m1 = interpolate(&a, &b, 1.0, &InterpolationFlags::all());
        assert!(b.max_abs_diff(&m1) < TOLERANCE);
    }
}

#[test]
fn interpolate_component_gating() {
    let mut rng = RNG::new_sequence(2);

    for _ in 0..50 {
        let a = random_affine(&mut rng);
        let b = random_affine(&mut rng);
        let (ta, qa, sa) = decompose(&a);
        let (tb, _, sb) = decompose(&b);

        for i in 0..=8 {
            let t = i as Float / 8.0;

            let m = interpolate(&a, &b, t, &InterpolationFlags::new(true, false, true));
            assert!(same_rotation(&rotation(&m), &qa));

            let m = interpolate(&a, &b, t, &InterpolationFlags::new(false, true, true));
            assert_eq!(translation(&m), ta);

            let m = interpolate(&a, &b, t, &InterpolationFlags::new(true, true, false));
            assert!(Vector3f::distance(&scale(&m), &sa) < 1e-4);

            let m = interpolate(&a, &b, t, &InterpolationFlags::all());
            let expected = interpolate_vector(&ta, &tb, t, true);
            assert!(Vector3f::distance(&translation(&m), &expected) < 1e-4);
            let expected = interpolate_vector(&sa, &sb, t, true);
            assert!(Vector3f::distance(&scale(&m), &expected) < 1e-4);
        }

        let m = interpolate(&a, &b, 0.5, &InterpolationFlags::none());
        assert!(a.max_abs_diff(&m) < TOLERANCE);
    }
}

#[test]
fn interpolate_half_turn_about_up() {
    let a = Matrix4x4::identity();
    let b = Matrix4x4::translate(5.0, 0.0, 0.0)
        * Matrix4x4::rotate_y(90.0)
        * Matrix4x4::scale(1.0, 1.0, 1.0);
    let time = 0.5;
    let m = interpolate(&a, &b, time, &InterpolationFlags::all());

    let (t, q, s) = decompose(&m);
    assert!(Vector3f::distance(&t, &Vector3f::new(2.5, 0.0, 0.0)) < 1e-5, "{:?}", t);
    assert!(Vector3f::distance(&s, &Vector3f::one()) < 1e-5, "{:?}", s);

    // Recompute the blended rotation by hand.
    let (_, qa, _) = decompose(&a);
    let (_, qb, _) = decompose(&b);
    assert_eq!(qa, Quaternion::identity());
    let mut c = qb * qa.inverse();
    let flipped = c.w > 0.0;
    if flipped {
        c = -c;
    }
    assert!(!flipped, "{:?}", c);
    let angle = (PI - Float::acos(c.w)) * time;
    let axis = c.vector_part().normalize() * Float::sin(angle);
    let expected = Quaternion::from_scalar_vector(-Float::cos(angle), &axis) * qa;

    let blended = interpolate_quaternion(&qa, &qb, time, true);
    assert!((blended - expected).length() < 1e-5, "{:?} {:?}", blended, expected);

    // Not the shortest-arc quaternion for 45 degrees about up.
    let h = PI / 8.0;
    let shortest = Quaternion::new(0.0, Float::sin(h), 0.0, Float::cos(h));
    assert!((blended - shortest).length() > 1.0, "{:?}", blended);
    assert!(blended.w < 0.0);

    let recomposed = compose(&Vector3f::new(2.5, 0.0, 0.0), &expected, &Vector3f::one());
    assert!(m.max_abs_diff(&recomposed) < 1e-5);
    // Opposite sign, same orientation: 45 degrees of yaw.
    assert!(same_rotation(&q, &shortest), "{:?}", q);
}

#[test]
fn interpolate_long_path_flip_branch() {
    // B's rotation stored with w < 0 sends c.w above zero.
    let qa = Quaternion::from_angle_axis(20.0, &Vector3f::right());
    let qb = -Quaternion::from_angle_axis(100.0, &Vector3f::forward());
    let c = qb * qa.inverse();
    assert!(c.w > 0.0);

    let c = c.inverse_full();
    for i in 1..10 {
        let time = i as Float / 10.0;
        let angle = (PI - Float::acos(c.w)) * time;
        let axis = c.vector_part().normalize() * Float::sin(angle);
        let expected = Quaternion::from_scalar_vector(-Float::cos(angle), &axis) * qa;
        let q = interpolate_quaternion(&qa, &qb, time, true);
        assert!((q - expected).length() < 1e-5, "{:?} {:?}", q, expected);
        assert!((q.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn interpolate_request_roundtrip_through_json() {
    let req = InterpolationRequest::new(
        &Matrix4x4::identity(),
        &(Matrix4x4::translate(5.0, 0.0, 0.0) * Matrix4x4::rotate_y(90.0)),
        0.5,
        &InterpolationFlags::all(),
    );
    let s = serde_json::to_string(&req).unwrap();
    let parsed = parse_request(&s).unwrap();
    assert!(parsed.a.max_abs_diff(&req.a) < 1e-6);
    assert_eq!(parsed.flags, req.flags);
    assert!(parsed.interpolate().max_abs_diff(&req.interpolate()) < 1e-5);
}
