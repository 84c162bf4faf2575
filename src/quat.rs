//! Rotation quaternions

use crate::matrix::{Mat3, Mat4, Matrix};
use crate::scalar;
use crate::vec::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::ops::{Mul, MulAssign};

/// Quaternion `x i + y j + z k + w`, `w` being the scalar part.
///
/// Only unit quaternions represent rotations. The norm is not enforced, call
/// [`Quat::normalize`] after accumulating products.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub const fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Self {
        let mut q = self;
        q.normalize_mut();
        q
    }

    pub fn normalize_mut(&mut self) -> &mut Self {
        *self *= 1.0 / self.length();
        self
    }

    /// The conjugate, negated vector part.
    ///
    /// This is the true inverse for unit quaternions only.
    pub fn inverse(self) -> Self {
        let mut q = self;
        q.invert();
        q
    }

    pub fn invert(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    /// Trace based conversion, branching on the largest diagonal term when the trace is
    /// not positive.
    pub fn from_mat3(m: &Mat3) -> Self {
        let (m00, m01, m02) = (m.elem(0, 0), m.elem(0, 1), m.elem(0, 2));
        let (m10, m11, m12) = (m.elem(1, 0), m.elem(1, 1), m.elem(1, 2));
        let (m20, m21, m22) = (m.elem(2, 0), m.elem(2, 1), m.elem(2, 2));

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let t = trace + 1.0;
            let s = 0.5 / t.sqrt();
            Self::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, t * s)
        } else if m00 > m11 && m00 > m22 {
            let t = m00 - m11 - m22 + 1.0;
            let s = 0.5 / t.sqrt();
            Self::new(t * s, (m10 + m01) * s, (m02 + m20) * s, (m21 - m12) * s)
        } else if m11 > m22 {
            let t = -m00 + m11 - m22 + 1.0;
            let s = 0.5 / t.sqrt();
            Self::new((m10 + m01) * s, t * s, (m21 + m12) * s, (m02 - m20) * s)
        } else {
            let t = -m00 - m11 + m22 + 1.0;
            let s = 0.5 / t.sqrt();
            Self::new((m02 + m20) * s, (m21 + m12) * s, t * s, (m10 - m01) * s)
        }
    }

    pub fn to_mat3(&self) -> Mat3 {
        let Self { x, y, z, w } = *self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);

        Matrix([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy + zw), 2.0 * (xz - yw)],
            [2.0 * (xy - zw), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + xw)],
            [2.0 * (xz + yw), 2.0 * (yz - xw), 1.0 - 2.0 * (xx + yy)],
        ])
    }

    /// Uses the upper left 3x3 block, translation is ignored.
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_mat3(&m.to33())
    }

    pub fn to_mat4(&self) -> Mat4 {
        self.to_mat3().to44()
    }

    pub fn from_angle_axis(angle: f64, axis: Vec3) -> Self {
        let (s, c) = (angle / 2.0).sin_cos();
        let [x, y, z] = (axis.normalize() * s).0;
        Self::new(x, y, z, c)
    }

    /// Rotation angle in `[0, 2π]` and unit axis.
    ///
    /// A quaternion without a vector part has no defined axis, `(0, +Z)` is returned.
    pub fn to_angle_axis(&self) -> (f64, Vec3) {
        let v = self.vector_part();
        let len = v.length();
        if len == 0.0 {
            return (0.0, Vec3::new(0.0, 0.0, 1.0));
        }
        (2.0 * scalar::atan2(len, self.w), v / len)
    }

    /// Rotation about X by `x`, then about Y by `y`, then about Z by `z` (radians).
    pub fn from_euler_angles(x: f64, y: f64, z: f64) -> Self {
        let (sx, cx) = (x / 2.0).sin_cos();
        let (sy, cy) = (y / 2.0).sin_cos();
        let (sz, cz) = (z / 2.0).sin_cos();

        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Inverse of [`Quat::from_euler_angles`], the `y` angle is limited to `[-π/2, π/2]`.
    pub fn to_euler_angles(&self) -> Vec3 {
        let Self { x, y, z, w } = *self;
        let roll = scalar::atan2(2.0 * (w * x + y * z), 1.0 - 2.0 * (x * x + y * y));
        let pitch = scalar::asin(scalar::clamp(2.0 * (w * y - z * x), -1.0, 1.0));
        let yaw = scalar::atan2(2.0 * (w * z + x * y), 1.0 - 2.0 * (y * y + z * z));
        Vec3::new(roll, pitch, yaw)
    }
}

impl From<Vec4> for Quat {
    fn from(v: Vec4) -> Self {
        let [x, y, z, w] = v.0;
        Self::new(x, y, z, w)
    }
}

impl From<Quat> for Vec4 {
    fn from(q: Quat) -> Self {
        Vec4::new(q.x, q.y, q.z, q.w)
    }
}

/// Hamilton product `self ⊗ rhs`, the rotation applying `rhs` first and `self` second.
impl Mul for Quat {
    type Output = Self;

    fn mul(self, q: Self) -> Self {
        let p = self;
        Self::new(
            p.w * q.x + p.x * q.w + p.y * q.z - p.z * q.y,
            p.w * q.y - p.x * q.z + p.y * q.w + p.z * q.x,
            p.w * q.z + p.x * q.y - p.y * q.x + p.z * q.w,
            p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
        )
    }
}

/// `self = self * rhs`
impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f64> for Quat {
    fn mul_assign(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self.w *= s;
    }
}

impl Mul<f64> for Quat {
    type Output = Self;

    fn mul(mut self, s: f64) -> Self {
        self *= s;
        self
    }
}
