//! Square matrices stored in column-major order
//!
//! Element `(row, col)` of a [`Matrix<N>`] lives in `self.0[col][row]`, which is flat index
//! `row + col * N` of [`Matrix::as_slice`]. Vectors are transformed by pre-multiplication,
//! `m * v` treats `v` as a column.

use crate::error::LengthError;
use crate::vec::{Vec2, Vec3, Vec4, Vector};
use log::debug;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<const N: usize>(pub [[f64; N]; N]);

pub type Mat3 = Matrix<3>;
pub type Mat4 = Matrix<4>;

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> Matrix<N> {
    /// Every element set to `s`.
    pub const fn scalar(s: f64) -> Self {
        Self([[s; N]; N])
    }

    pub const fn zero() -> Self {
        Self::scalar(0.0)
    }

    /// Every element set to one, not to be confused with [`Matrix::identity`].
    pub const fn one() -> Self {
        Self::scalar(1.0)
    }

    pub fn diagonal(d: Vector<N>) -> Self {
        let mut m = Self::zero();
        for i in 0..N {
            m.0[i][i] = d.0[i];
        }
        m
    }

    pub fn identity() -> Self {
        Self::diagonal(Vector::one())
    }

    pub fn from_cols(cols: [Vector<N>; N]) -> Self {
        Self(cols.map(|c| c.0))
    }

    pub fn from_rows(rows: [Vector<N>; N]) -> Self {
        Self::from_cols(rows).transpose()
    }

    /// Flat column-major elements
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_flattened()
    }

    pub fn elem(&self, row: usize, col: usize) -> f64 {
        self.0[col][row]
    }

    pub fn set_elem(&mut self, row: usize, col: usize, value: f64) -> &mut Self {
        self.0[col][row] = value;
        self
    }

    pub fn row(&self, row: usize) -> Vector<N> {
        Vector(self.0.map(|c| c[row]))
    }

    pub fn set_row(&mut self, row: usize, v: Vector<N>) -> &mut Self {
        for (col, value) in self.0.iter_mut().zip(v.0) {
            col[row] = value;
        }
        self
    }

    pub fn col(&self, col: usize) -> Vector<N> {
        Vector(self.0[col])
    }

    pub fn set_col(&mut self, col: usize, v: Vector<N>) -> &mut Self {
        self.0[col] = v.0;
        self
    }

    /// Exact comparison against the identity, no tolerance is applied.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn trace(&self) -> f64 {
        (0..N).map(|i| self.0[i][i]).sum()
    }

    fn apply(&mut self, f: impl Fn(f64) -> f64) -> &mut Self {
        for e in self.0.as_flattened_mut() {
            *e = f(*e);
        }
        self
    }

    fn zip_apply(&mut self, other: &Self, f: impl Fn(f64, f64) -> f64) -> &mut Self {
        for (e, o) in self
            .0
            .as_flattened_mut()
            .iter_mut()
            .zip(other.as_slice())
        {
            *e = f(*e, *o);
        }
        self
    }

    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.0 = other.0;
        self
    }

    pub fn negate_mut(&mut self) -> &mut Self {
        self.apply(|e| -e)
    }

    /// Component-wise product, see `*` for the matrix product.
    pub fn comp_mul(self, other: &Self) -> Self {
        let mut m = self;
        m.comp_mul_mut(other);
        m
    }

    pub fn comp_mul_mut(&mut self, other: &Self) -> &mut Self {
        self.zip_apply(other, |a, b| a * b)
    }

    pub fn comp_div(self, other: &Self) -> Self {
        let mut m = self;
        m.comp_div_mut(other);
        m
    }

    pub fn comp_div_mut(&mut self, other: &Self) -> &mut Self {
        self.zip_apply(other, |a, b| a / b)
    }

    /// Component-wise reciprocal
    pub fn rcp(self) -> Self {
        let mut m = self;
        m.rcp_mut();
        m
    }

    pub fn rcp_mut(&mut self) -> &mut Self {
        self.apply(|e| 1.0 / e)
    }

    pub fn transpose(self) -> Self {
        let mut m = self;
        m.transpose_mut();
        m
    }

    pub fn transpose_mut(&mut self) -> &mut Self {
        for c in 0..N {
            for r in (c + 1)..N {
                let tmp = self.0[c][r];
                self.0[c][r] = self.0[r][c];
                self.0[r][c] = tmp;
            }
        }
        self
    }
}

impl Mat3 {
    pub fn determinant(&self) -> f64 {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Adjugate divided by the determinant.
    ///
    /// A singular matrix yields non-finite elements.
    pub fn inverse(&self) -> Self {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0;
        let det = self.determinant();
        if det == 0.0 {
            debug!("inverting singular 3x3 matrix");
        }
        let inv = 1.0 / det;
        Self([
            [
                (e * i - f * h) * inv,
                (f * g - d * i) * inv,
                (d * h - e * g) * inv,
            ],
            [
                (c * h - b * i) * inv,
                (a * i - c * g) * inv,
                (b * g - a * h) * inv,
            ],
            [
                (b * f - c * e) * inv,
                (c * d - a * f) * inv,
                (a * e - b * d) * inv,
            ],
        ])
    }

    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Upper left block of a 4x4 identity replaced by `self`.
    pub fn to44(&self) -> Mat4 {
        let mut m = Mat4::identity();
        for c in 0..3 {
            m.0[c][..3].copy_from_slice(&self.0[c]);
        }
        m
    }

    /// Transforms a 2D vector extended with the homogeneous coordinate `z`.
    pub fn mul2(&self, v: Vec2, z: f64) -> Vec2 {
        (*self * v.to3(z)).to2()
    }

    pub fn from_cols_array(a: &[f64; 9]) -> Self {
        Self(std::array::from_fn(|c| {
            std::array::from_fn(|r| a[r + c * 3])
        }))
    }
}

fn others(skip: usize) -> [usize; 3] {
    match skip {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        _ => [0, 1, 2],
    }
}

impl Mat4 {
    /// The 3x3 matrix left after removing `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Mat3 {
        let rows = others(row);
        let cols = others(col);
        Matrix(cols.map(|c| rows.map(|r| self.0[c][r])))
    }

    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        let m = self.minor(row, col).determinant();
        if (row + col) % 2 == 0 { m } else { -m }
    }

    /// Laplace expansion along the first row.
    pub fn determinant(&self) -> f64 {
        (0..4).map(|c| self.0[c][0] * self.cofactor(0, c)).sum()
    }

    /// Adjugate divided by the determinant.
    ///
    /// A singular matrix yields non-finite elements.
    pub fn inverse(&self) -> Self {
        let cofactors: [[f64; 4]; 4] =
            std::array::from_fn(|c| std::array::from_fn(|r| self.cofactor(r, c)));
        let det: f64 = (0..4).map(|c| self.0[c][0] * cofactors[c][0]).sum();
        if det == 0.0 {
            debug!("inverting singular 4x4 matrix");
        }
        let inv = 1.0 / det;
        // adjugate is the transposed cofactor matrix
        Self(std::array::from_fn(|c| {
            std::array::from_fn(|r| cofactors[r][c] * inv)
        }))
    }

    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Inverse transpose of the upper left 3x3 block, the normal matrix of a model view transform.
    pub fn inverse_transpose33(&self) -> Mat3 {
        self.to33().inverse().transpose()
    }

    pub fn to33(&self) -> Mat3 {
        Matrix(std::array::from_fn(|c| {
            std::array::from_fn(|r| self.0[c][r])
        }))
    }

    /// Transforms `[v, w]` and drops the resulting `w`.
    ///
    /// Use `w = 1` for points and `w = 0` for directions.
    pub fn mul3(&self, v: Vec3, w: f64) -> Vec3 {
        (*self * v.to4(w)).to3()
    }

    pub fn mul4(&self, v: Vec4) -> Vec4 {
        *self * v
    }

    pub fn from_cols_array(a: &[f64; 16]) -> Self {
        Self(std::array::from_fn(|c| {
            std::array::from_fn(|r| a[r + c * 4])
        }))
    }
}

impl<const N: usize> From<[[f64; N]; N]> for Matrix<N> {
    fn from(cols: [[f64; N]; N]) -> Self {
        Self(cols)
    }
}

impl<const N: usize> TryFrom<&[f64]> for Matrix<N> {
    type Error = LengthError;

    /// Reads `N * N` elements in column-major order.
    fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
        LengthError::check(N * N, slice.len())?;
        Ok(Self(std::array::from_fn(|c| {
            std::array::from_fn(|r| slice[r + c * N])
        })))
    }
}

/// `m[(row, col)]`
impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.0[col][row]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.0[col][row]
    }
}

impl<const N: usize> Neg for Matrix<N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate_mut();
        self
    }
}

impl<const N: usize> AddAssign for Matrix<N> {
    fn add_assign(&mut self, rhs: Self) {
        self.zip_apply(&rhs, |a, b| a + b);
    }
}

impl<const N: usize> AddAssign<f64> for Matrix<N> {
    fn add_assign(&mut self, s: f64) {
        self.apply(|e| e + s);
    }
}

impl<const N: usize> SubAssign for Matrix<N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.zip_apply(&rhs, |a, b| a - b);
    }
}

impl<const N: usize> SubAssign<f64> for Matrix<N> {
    fn sub_assign(&mut self, s: f64) {
        self.apply(|e| e - s);
    }
}

impl<const N: usize> MulAssign<f64> for Matrix<N> {
    fn mul_assign(&mut self, s: f64) {
        self.apply(|e| e * s);
    }
}

impl<const N: usize> DivAssign<f64> for Matrix<N> {
    fn div_assign(&mut self, s: f64) {
        self.apply(|e| e / s);
    }
}

/// Matrix product, overwrites the left operand.
impl<const N: usize> MulAssign for Matrix<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

macro_rules! binop_from_assign {
    ($trait:ident, $method:ident, $assign:ident, $rhs:ty) => {
        impl<const N: usize> $trait<$rhs> for Matrix<N> {
            type Output = Self;

            fn $method(mut self, rhs: $rhs) -> Self {
                self.$assign(rhs);
                self
            }
        }
    };
}

binop_from_assign!(Add, add, add_assign, Matrix<N>);
binop_from_assign!(Add, add, add_assign, f64);
binop_from_assign!(Sub, sub, sub_assign, Matrix<N>);
binop_from_assign!(Sub, sub, sub_assign, f64);
binop_from_assign!(Mul, mul, mul_assign, f64);
binop_from_assign!(Div, div, div_assign, f64);

impl<const N: usize> Mul<Matrix<N>> for f64 {
    type Output = Matrix<N>;

    fn mul(self, m: Matrix<N>) -> Matrix<N> {
        m * self
    }
}

/// Matrix product, `(a * b) * v == a * (b * v)`.
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|c| (self * Vector(rhs.0[c])).0))
    }
}

impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, v: Vector<N>) -> Vector<N> {
        Vector(std::array::from_fn(|r| {
            (0..N).map(|c| self.0[c][r] * v.0[c]).sum()
        }))
    }
}
