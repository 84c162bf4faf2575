use fake::Fake;
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use spacemath::project::{project_points, unproject_points};
use spacemath::scalar::lerp;
use spacemath::{
    DepthRange, Mat3, Mat4, Matrix, Quat, Vec3, Vec4, Vector, Viewport, project, unproject,
};
use std::f64::consts::PI;
use testresult::TestResult;

mod common;

const EPSILON: f64 = 1e-9;
const SAMPLES: usize = 200;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn random_vector<const N: usize>(rng: &mut StdRng) -> Vector<N> {
    Vector(std::array::from_fn(|_| (-10.0..10.0).fake_with_rng(rng)))
}

/// Diagonally dominant, so always invertible and well conditioned.
fn random_invertible(rng: &mut StdRng) -> Mat4 {
    let mut m = Matrix(std::array::from_fn(|_| random_vector(rng).0));
    for i in 0..4 {
        m[(i, i)] += 50.0;
    }
    m
}

fn random_rotation(rng: &mut StdRng) -> Quat {
    let axis: Vec3 = random_vector(rng);
    Quat::from_angle_axis((-PI..PI).fake_with_rng(rng), axis)
}

fn assert_mat_close<const N: usize>(a: &Matrix<N>, b: &Matrix<N>) {
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert!((x - y).abs() < EPSILON, "{a:?} != {b:?}");
    }
}

#[test]
fn inverse_times_matrix_is_identity() -> TestResult {
    common::init_logging();
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let m = random_invertible(&mut rng);
        assert_mat_close(&(m.inverse() * m), &Mat4::identity());
        let m3 = m.to33();
        assert_mat_close(&(m3.inverse() * m3), &Mat3::identity());
    }
    Ok(())
}

#[test]
fn determinant_of_product() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_invertible(&mut rng);
        let b = random_invertible(&mut rng);
        let expected = a.determinant() * b.determinant();
        let actual = (a * b).determinant();
        assert!(((actual - expected) / expected).abs() < EPSILON);
    }
    Ok(())
}

#[test]
fn double_transpose_is_exact() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let m = random_invertible(&mut rng);
        assert_eq!(m.transpose().transpose(), m);
    }
    Ok(())
}

#[test]
fn normalized_vectors_have_unit_length() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let v: Vec4 = random_vector(&mut rng);
        assert!((v.normalize().length() - 1.0).abs() < EPSILON);
        let v: Vec3 = random_vector(&mut rng);
        assert!((v.normalize().length() - 1.0).abs() < EPSILON);
    }
    Ok(())
}

#[test]
fn cross_product_is_anti_commutative() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let u: Vec3 = random_vector(&mut rng);
        let v: Vec3 = random_vector(&mut rng);
        assert_eq!(u.cross(&v), -v.cross(&u));
        let u = u.to2();
        let v = v.to2();
        assert_eq!(u.cross(&v), -v.cross(&u));
    }
    Ok(())
}

#[test]
fn lerp_hits_both_endpoints() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x: f64 = (-1e6..1e6).fake_with_rng(&mut rng);
        let y: f64 = (-1e-6..1e-6).fake_with_rng(&mut rng);
        assert_eq!(lerp(x, y, 0.0), x);
        assert_eq!(lerp(x, y, 1.0), y);
    }
    Ok(())
}

#[test]
fn project_unproject_round_trip() -> TestResult {
    common::init_logging();
    let mut rng = rng();
    let viewport = Viewport::new(0.0, 0.0, 1920.0, 1080.0);
    let depth_range = DepthRange::default();
    let projection = Mat4::perspective(PI / 3.0, 16.0 / 9.0, 0.1, 100.0);
    let view = Mat4::look_at(
        Vec3::new(0.0, 5.0, 30.0),
        Vec3::zero(),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let mvp = projection * view;
    let inverse = mvp.inverse();

    for _ in 0..SAMPLES {
        let p: Vec3 = random_vector(&mut rng);
        let w: f64 = (0.5..2.0).fake_with_rng(&mut rng);
        let point = p.to4(1.0) * w;

        let window = project(point, &mvp, &viewport, &depth_range);
        let back = unproject(window.to3(), &inverse, &viewport, &depth_range);
        let expected = point.project().to3();
        assert!(
            (back.to3() - expected).length() < 1e-6,
            "{back} != {expected}"
        );
    }
    Ok(())
}

#[test]
fn batch_projection_round_trip() -> TestResult {
    common::init_logging();
    let mut rng = rng();
    let viewport = Viewport::from([0.0, 0.0, 640.0, 480.0]);
    let depth_range = DepthRange::from([0.0, 1.0]);
    let mvp = Mat4::perspective(PI / 2.0, 4.0 / 3.0, 1.0, 1000.0)
        * Mat4::translation(Vec3::new(0.0, 0.0, -50.0));

    let points: Vec<Vec4> = (0..1000)
        .map(|_| random_vector::<3>(&mut rng).to4(1.0))
        .collect();
    let windows: Vec<Vec3> = project_points(&points, &mvp, &viewport, &depth_range)
        .iter()
        .map(|w| w.to3())
        .collect();
    let back = unproject_points(&windows, &mvp.inverse(), &viewport, &depth_range);

    assert_eq!(back.len(), points.len());
    for (p, b) in points.iter().zip(&back) {
        assert!((p.to3() - b.to3()).length() < 1e-6, "{p} != {b}");
    }
    Ok(())
}

#[test]
fn quaternion_product_matches_matrix_product() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let p = random_rotation(&mut rng);
        let q = random_rotation(&mut rng);
        assert_mat_close(&(p * q).to_mat3(), &(p.to_mat3() * q.to_mat3()));
    }
    Ok(())
}

#[test]
fn quaternion_matrix_round_trip() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let q = random_rotation(&mut rng);
        let back = Quat::from_mat3(&q.to_mat3());
        // q and -q are the same rotation
        let sign = if back.dot(&q) < 0.0 { -1.0 } else { 1.0 };
        let diff = Vec4::from(back * sign) - Vec4::from(q);
        assert!(diff.length() < EPSILON, "{back:?} != {q:?}");
    }
    Ok(())
}

#[test]
fn quaternion_rotates_like_rotation_matrix() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let axis: Vec3 = random_vector(&mut rng);
        let angle: f64 = (-PI..PI).fake_with_rng(&mut rng);
        let q = Quat::from_angle_axis(angle, axis);
        assert_mat_close(&q.to_mat4(), &Mat4::rotation_angle_axis(angle, axis));

        let (back_angle, back_axis) = q.to_angle_axis();
        // the angle comes back in [0, π], flipping the axis for negative input
        let signed = if back_axis.dot(&axis) < 0.0 {
            -back_angle
        } else {
            back_angle
        };
        assert!((signed - angle).abs() < 1e-6, "{signed} != {angle}");
    }
    Ok(())
}

#[test]
fn euler_angles_round_trip() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x: f64 = (-3.0..3.0).fake_with_rng(&mut rng);
        let y: f64 = (-1.5..1.5).fake_with_rng(&mut rng);
        let z: f64 = (-3.0..3.0).fake_with_rng(&mut rng);
        let back = Quat::from_euler_angles(x, y, z).to_euler_angles();
        assert!(
            (back - Vec3::new(x, y, z)).length() < 1e-6,
            "{back} != ({x}, {y}, {z})"
        );
    }
    Ok(())
}

#[test]
fn affine_mutators_compose_by_post_multiplication() -> TestResult {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let base = random_invertible(&mut rng);
        let v: Vec3 = random_vector(&mut rng);
        let angle: f64 = (-PI..PI).fake_with_rng(&mut rng);

        let mut m = base;
        m.translate(v).scale(v).rotate_angle_axis(angle, v);
        let expected = base
            * Mat4::translation(v)
            * Mat4::scaling(v)
            * Mat4::rotation_angle_axis(angle, v);
        for (a, b) in m.as_slice().iter().zip(expected.as_slice()) {
            assert!((a - b).abs() < 1e-6 * b.abs().max(1.0));
        }
    }
    Ok(())
}
