//! JavaScript bindings
//!
//! Vectors, matrices and quaternions cross the boundary as `Float64Array`s, matrices in
//! column-major order and quaternions as `[x, y, z, w]`. Arrays of the wrong length are
//! rejected with an error.

use wasm_bindgen::prelude::*;

use crate::error::LengthError;
use crate::{DepthRange, Mat4, Quat, Vec3, Vec4, Viewport};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn mat4(m: &[f64]) -> Result<Mat4, LengthError> {
    Mat4::try_from(m)
}

fn vec3(v: &[f64]) -> Result<Vec3, LengthError> {
    Vec3::try_from(v)
}

fn vec4(v: &[f64]) -> Result<Vec4, LengthError> {
    Vec4::try_from(v)
}

fn quat(q: &[f64]) -> Result<Quat, LengthError> {
    vec4(q).map(Quat::from)
}

fn viewport(v: &[f64]) -> Result<Viewport, LengthError> {
    vec4(v).map(|v| Viewport::from(v.0))
}

fn depth_range(d: &[f64]) -> Result<DepthRange, LengthError> {
    LengthError::check(2, d.len())?;
    Ok(DepthRange::from([d[0], d[1]]))
}

fn flat(m: Mat4) -> Vec<f64> {
    m.as_slice().to_vec()
}

#[wasm_bindgen(js_name = mat4Mul)]
pub fn mat4_mul(a: &[f64], b: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(mat4(a)? * mat4(b)?))
}

#[wasm_bindgen(js_name = mat4Inverse)]
pub fn mat4_inverse(m: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(mat4(m)?.inverse()))
}

#[wasm_bindgen(js_name = mat4Transpose)]
pub fn mat4_transpose(m: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(mat4(m)?.transpose()))
}

#[wasm_bindgen(js_name = mat4Determinant)]
pub fn mat4_determinant(m: &[f64]) -> Result<f64, JsError> {
    Ok(mat4(m)?.determinant())
}

#[wasm_bindgen(js_name = mat4Mul4)]
pub fn mat4_mul4(m: &[f64], v: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok((mat4(m)? * vec4(v)?).0.to_vec())
}

#[wasm_bindgen(js_name = lookAt)]
pub fn look_at(eye: &[f64], target: &[f64], up: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(Mat4::look_at(vec3(eye)?, vec3(target)?, vec3(up)?)))
}

#[wasm_bindgen]
pub fn perspective(fov_y: f64, aspect: f64, z_near: f64, z_far: f64) -> Vec<f64> {
    flat(Mat4::perspective(fov_y, aspect, z_near, z_far))
}

#[wasm_bindgen]
pub fn ortho(min: &[f64], max: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(Mat4::ortho(vec3(min)?, vec3(max)?)))
}

#[wasm_bindgen]
pub fn frustum(min: &[f64], max: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(Mat4::frustum(vec3(min)?, vec3(max)?)))
}

#[wasm_bindgen]
pub fn translation(v: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(Mat4::translation(vec3(v)?)))
}

#[wasm_bindgen(js_name = rotationAngleAxis)]
pub fn rotation_angle_axis(angle: f64, axis: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(Mat4::rotation_angle_axis(angle, vec3(axis)?)))
}

#[wasm_bindgen]
pub fn scaling(v: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(Mat4::scaling(vec3(v)?)))
}

#[wasm_bindgen(js_name = quatFromMat4)]
pub fn quat_from_mat4(m: &[f64]) -> Result<Vec<f64>, JsError> {
    let q = Quat::from_mat4(&mat4(m)?);
    Ok(Vec4::from(q).0.to_vec())
}

#[wasm_bindgen(js_name = quatToMat4)]
pub fn quat_to_mat4(q: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(flat(quat(q)?.to_mat4()))
}

#[wasm_bindgen(js_name = quatMul)]
pub fn quat_mul(p: &[f64], q: &[f64]) -> Result<Vec<f64>, JsError> {
    Ok(Vec4::from(quat(p)? * quat(q)?).0.to_vec())
}

#[wasm_bindgen]
pub fn project(
    point: &[f64],
    model_view_projection: &[f64],
    viewport_rect: &[f64],
    depth: &[f64],
) -> Result<Vec<f64>, JsError> {
    let r = crate::project(
        vec4(point)?,
        &mat4(model_view_projection)?,
        &viewport(viewport_rect)?,
        &depth_range(depth)?,
    );
    Ok(r.0.to_vec())
}

#[wasm_bindgen]
pub fn unproject(
    window: &[f64],
    model_view_projection_inverse: &[f64],
    viewport_rect: &[f64],
    depth: &[f64],
) -> Result<Vec<f64>, JsError> {
    let r = crate::unproject(
        vec3(window)?,
        &mat4(model_view_projection_inverse)?,
        &viewport(viewport_rect)?,
        &depth_range(depth)?,
    );
    Ok(r.0.to_vec())
}

#[cfg(all(test, target_family = "wasm"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    const IDENTITY: [f64; 16] = [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ];

    #[wasm_bindgen_test]
    fn test_translation() {
        let m = translation(&[5.0, 0.0, 0.0]).unwrap();
        let r = mat4_mul4(&m, &[0.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(r, vec![5.0, 0.0, 0.0, 1.0]);
    }

    #[wasm_bindgen_test]
    fn test_wrong_length_is_an_error() {
        assert!(mat4_inverse(&[1.0, 2.0, 3.0]).is_err());
        assert!(translation(&[1.0, 2.0]).is_err());
        assert!(project(&[0.0, 0.0, 0.0, 1.0], &IDENTITY, &[0.0, 0.0, 1.0, 1.0], &[0.0]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_identity() {
        assert_eq!(mat4_determinant(&IDENTITY).unwrap(), 1.0);
        assert_eq!(mat4_inverse(&IDENTITY).unwrap(), IDENTITY.to_vec());
        assert_eq!(quat_from_mat4(&IDENTITY).unwrap(), vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[wasm_bindgen_test]
    fn test_project() {
        let r = project(
            &[0.0, 0.0, 0.0, 1.0],
            &IDENTITY,
            &[0.0, 0.0, 640.0, 480.0],
            &[0.0, 1.0],
        )
        .unwrap();
        assert_eq!(r, vec![320.0, 240.0, 0.5, 1.0]);
    }
}
