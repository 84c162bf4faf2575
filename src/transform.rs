//! 4x4 transform builders and the affine mutators that compose onto an existing matrix
//!
//! The mutators post-multiply, `m.translate(v)` is `m = m * translation(v)`, so the
//! new transform is applied to vectors before the existing one.

use crate::matrix::Mat4;
use crate::vec::{Vec3, Vec4};

impl Mat4 {
    pub fn translation(v: Vec3) -> Self {
        let mut m = Self::identity();
        m.set_col(3, v.to4(1.0));
        m
    }

    /// Counter clockwise rotation of `angle` radians around `axis` (right-handed).
    ///
    /// The axis is normalized first.
    pub fn rotation_angle_axis(angle: f64, axis: Vec3) -> Self {
        let [x, y, z] = axis.normalize().0;
        let (s, c) = angle.sin_cos();
        let q = 1.0 - c;

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, yz, zx) = (x * y, y * z, z * x);
        let (xs, ys, zs) = (x * s, y * s, z * s);

        Self([
            [q * xx + c, q * xy + zs, q * zx - ys, 0.0],
            [q * xy - zs, q * yy + c, q * yz + xs, 0.0],
            [q * zx + ys, q * yz - xs, q * zz + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn scaling(v: Vec3) -> Self {
        Self::diagonal(v.to4(1.0))
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// The camera basis goes into the rows of the upper left block with `-forward` as the
    /// third row, followed by a translation by `-eye`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let side = forward.cross(&up.normalize()).normalize();
        let up = side.cross(&forward);

        let mut m = Self::identity();
        m.set_row(0, side.to4(0.0))
            .set_row(1, up.to4(0.0))
            .set_row(2, (-forward).to4(0.0))
            .translate(-eye);
        m
    }

    /// Orthographic projection of the box `[min, max]` onto the `[-1, 1]` clip cube.
    pub fn ortho(min: Vec3, max: Vec3) -> Self {
        let sum = max + min;
        let dif = max - min;

        Self([
            [2.0 / dif[0], 0.0, 0.0, 0.0],
            [0.0, 2.0 / dif[1], 0.0, 0.0],
            [0.0, 0.0, -2.0 / dif[2], 0.0],
            [-sum[0] / dif[0], -sum[1] / dif[1], -sum[2] / dif[2], 1.0],
        ])
    }

    /// Perspective projection of the frustum with near plane rectangle `min.xy..max.xy`
    /// at distance `min.z` and far plane at `max.z`.
    pub fn frustum(min: Vec3, max: Vec3) -> Self {
        let sum = max + min;
        let dif = max - min;
        let t = 2.0 * min[2];

        Self([
            [t / dif[0], 0.0, 0.0, 0.0],
            [0.0, t / dif[1], 0.0, 0.0],
            [sum[0] / dif[0], sum[1] / dif[1], -sum[2] / dif[2], -1.0],
            [0.0, 0.0, -t * max[2] / dif[2], 0.0],
        ])
    }

    /// Symmetric perspective projection, `fov_y` in radians.
    pub fn perspective(fov_y: f64, aspect: f64, z_near: f64, z_far: f64) -> Self {
        let a = z_near * (fov_y / 2.0).tan();
        let b = a * aspect;
        Self::frustum(Vec3::new(-b, -a, z_near), Vec3::new(b, a, z_far))
    }

    /// `self = self * translation(v)`
    pub fn translate(&mut self, v: Vec3) -> &mut Self {
        let [x, y, z] = v.0;
        let col = self.col(0) * x + self.col(1) * y + self.col(2) * z + self.col(3);
        self.set_col(3, col)
    }

    /// `self = self * rotation_angle_axis(angle, axis)`
    pub fn rotate_angle_axis(&mut self, angle: f64, axis: Vec3) -> &mut Self {
        *self *= Self::rotation_angle_axis(angle, axis);
        self
    }

    /// `self = self * scaling(v)`
    pub fn scale(&mut self, v: Vec3) -> &mut Self {
        for (c, s) in v.0.into_iter().enumerate() {
            let col: Vec4 = self.col(c) * s;
            self.set_col(c, col);
        }
        self
    }
}
