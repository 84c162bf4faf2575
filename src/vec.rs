//! Fixed size vectors
//!
//! [`Vector`] is generic over its dimension. The arity specific operations
//! (construction by components, cross products, dimension changes) live on the
//! [`Vec2`], [`Vec3`] and [`Vec4`] aliases.

use crate::error::LengthError;
use crate::scalar;
use rand::Rng;
use std::fmt::{Display, Formatter};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Column vector of `N` components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize>(pub [f64; N]);

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Vector<N> {
    pub const fn splat(s: f64) -> Self {
        Self([s; N])
    }

    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    pub const fn one() -> Self {
        Self::splat(1.0)
    }

    /// All components set to [`scalar::MAX_NUMBER`], handy as the start of a bounding box.
    pub const fn max_number() -> Self {
        Self::splat(scalar::MAX_NUMBER)
    }

    pub const fn min_number() -> Self {
        Self::splat(scalar::MIN_NUMBER)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    pub fn zip_map(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    fn apply(&mut self, f: impl Fn(f64) -> f64) -> &mut Self {
        for c in &mut self.0 {
            *c = f(*c);
        }
        self
    }

    fn zip_apply(&mut self, other: &Self, f: impl Fn(f64, f64) -> f64) -> &mut Self {
        for (c, o) in self.0.iter_mut().zip(other.0) {
            *c = f(*c, o);
        }
        self
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.iter().zip(other.0).map(|(a, b)| a * b).sum()
    }

    pub fn sq_length(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.sq_length().sqrt()
    }

    /// Scales the vector by `1 / length`.
    ///
    /// A zero length vector yields NaN components.
    pub fn normalize(self) -> Self {
        let mut v = self;
        v.normalize_mut();
        v
    }

    pub fn normalize_mut(&mut self) -> &mut Self {
        *self *= 1.0 / self.length();
        self
    }

    /// `s - v` for every component
    pub fn ssub(self, s: f64) -> Self {
        let mut v = self;
        v.ssub_mut(s);
        v
    }

    pub fn ssub_mut(&mut self, s: f64) -> &mut Self {
        self.apply(|c| s - c)
    }

    /// `s / v` for every component
    pub fn sdiv(self, s: f64) -> Self {
        let mut v = self;
        v.sdiv_mut(s);
        v
    }

    pub fn sdiv_mut(&mut self, s: f64) -> &mut Self {
        self.apply(|c| s / c)
    }

    /// Component-wise reciprocal
    pub fn rcp(self) -> Self {
        self.sdiv(1.0)
    }

    pub fn rcp_mut(&mut self) -> &mut Self {
        self.sdiv_mut(1.0)
    }

    pub fn negate_mut(&mut self) -> &mut Self {
        self.apply(|c| -c)
    }

    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.0 = other.0;
        self
    }

    pub fn abs(self) -> Self {
        self.map(scalar::abs)
    }

    pub fn acos(self) -> Self {
        self.map(scalar::acos)
    }

    pub fn asin(self) -> Self {
        self.map(scalar::asin)
    }

    pub fn atan(self) -> Self {
        self.map(scalar::atan)
    }

    /// Component-wise `atan2(self[i], x[i])`, `self` holding the `y` values.
    pub fn atan2(self, x: Self) -> Self {
        self.zip_map(x, scalar::atan2)
    }

    pub fn ceil(self) -> Self {
        self.map(scalar::ceil)
    }

    /// Component-wise clamp with per-component bounds.
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        Self(std::array::from_fn(|i| {
            scalar::clamp(self.0[i], lo.0[i], hi.0[i])
        }))
    }

    pub fn cos(self) -> Self {
        self.map(scalar::cos)
    }

    pub fn deg_to_rad(self) -> Self {
        self.map(scalar::deg_to_rad)
    }

    pub fn exp(self) -> Self {
        self.map(scalar::exp)
    }

    pub fn floor(self) -> Self {
        self.map(scalar::floor)
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        self.zip_map(other, |a, b| scalar::lerp(a, b, t))
    }

    pub fn ln(self) -> Self {
        self.map(scalar::ln)
    }

    pub fn log2(self) -> Self {
        self.map(scalar::log2)
    }

    pub fn log10(self) -> Self {
        self.map(scalar::log10)
    }

    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, scalar::max)
    }

    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, scalar::min)
    }

    pub fn pow(self, exponent: Self) -> Self {
        self.zip_map(exponent, scalar::pow)
    }

    pub fn rad_to_deg(self) -> Self {
        self.map(scalar::rad_to_deg)
    }

    pub fn round(self) -> Self {
        self.map(scalar::round)
    }

    pub fn sin(self) -> Self {
        self.map(scalar::sin)
    }

    pub fn sqrt(self) -> Self {
        self.map(scalar::sqrt)
    }

    pub fn tan(self) -> Self {
        self.map(scalar::tan)
    }

    /// Components uniform in `[0, 1)`
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random01() -> Self {
        Self::random()
    }

    /// Components uniform in `[-1, 1)`
    pub fn random11() -> Self {
        Self::random11_with(&mut rand::rng())
    }

    /// Each component uniform in `[min[i], max[i])`
    pub fn random_range(min: Self, max: Self) -> Self {
        Self::random_range_with(&mut rand::rng(), min, max)
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| scalar::random_with(rng)))
    }

    pub fn random11_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| scalar::random11_with(rng)))
    }

    pub fn random_range_with<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
        Self(std::array::from_fn(|i| {
            scalar::random_range_with(rng, min.0[i], max.0[i])
        }))
    }
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Perp-dot product, the `z` component of the 3D cross product of the two vectors
    /// lifted to the `z = 0` plane.
    pub fn cross(&self, other: &Self) -> f64 {
        self.0[0] * other.0[1] - self.0[1] * other.0[0]
    }

    /// `[y, -x]`, the vector rotated a quarter turn clockwise.
    pub fn perp(self) -> Self {
        let mut v = self;
        v.perp_mut();
        v
    }

    pub fn perp_mut(&mut self) -> &mut Self {
        let [x, y] = self.0;
        self.0 = [y, -x];
        self
    }

    pub const fn to3(self, z: f64) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], z)
    }

    pub const fn to4(self, z: f64, w: f64) -> Vec4 {
        Vec4::new(self.0[0], self.0[1], z, w)
    }
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let mut v = *self;
        v.cross_mut(other);
        v
    }

    pub fn cross_mut(&mut self, other: &Self) -> &mut Self {
        let [ux, uy, uz] = self.0;
        let [vx, vy, vz] = other.0;
        self.0 = [uy * vz - uz * vy, uz * vx - ux * vz, ux * vy - uy * vx];
        self
    }

    pub const fn to2(self) -> Vec2 {
        Vec2::new(self.0[0], self.0[1])
    }

    pub const fn to4(self, w: f64) -> Vec4 {
        Vec4::new(self.0[0], self.0[1], self.0[2], w)
    }
}

impl Vec4 {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self([x, y, z, w])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn w(&self) -> f64 {
        self.0[3]
    }

    /// Ternary cross product, the vector orthogonal to `self`, `v` and `w`.
    ///
    /// Computed as the cofactor expansion of the 4x4 determinant with the basis
    /// in the first row and the three vectors in the remaining rows.
    pub fn cross(&self, v: &Self, w: &Self) -> Self {
        let [u0, u1, u2, u3] = self.0;
        let [v0, v1, v2, v3] = v.0;
        let [w0, w1, w2, w3] = w.0;

        let a = v0 * w1 - v1 * w0;
        let b = v0 * w2 - v2 * w0;
        let c = v0 * w3 - v3 * w0;
        let d = v1 * w2 - v2 * w1;
        let e = v1 * w3 - v3 * w1;
        let f = v2 * w3 - v3 * w2;

        Self([
            u1 * f - u2 * e + u3 * d,
            -u0 * f + u2 * c - u3 * b,
            u0 * e - u1 * c + u3 * a,
            -u0 * d + u1 * b - u2 * a,
        ])
    }

    /// Homogeneous divide: `[x/w, y/w, z/w, 1]`
    pub fn project(self) -> Self {
        let mut v = self;
        v.project_mut();
        v
    }

    pub fn project_mut(&mut self) -> &mut Self {
        let f = 1.0 / self.0[3];
        self.0 = [self.0[0] * f, self.0[1] * f, self.0[2] * f, 1.0];
        self
    }

    pub const fn to2(self) -> Vec2 {
        Vec2::new(self.0[0], self.0[1])
    }

    pub const fn to3(self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }
}

impl From<Vec2> for Vec3 {
    fn from(v: Vec2) -> Self {
        v.to3(0.0)
    }
}

impl From<Vec2> for Vec4 {
    fn from(v: Vec2) -> Self {
        v.to4(0.0, 1.0)
    }
}

impl From<Vec3> for Vec4 {
    fn from(v: Vec3) -> Self {
        v.to4(1.0)
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(a: [f64; N]) -> Self {
        Self(a)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N] {
    fn from(v: Vector<N>) -> Self {
        v.0
    }
}

impl<const N: usize> TryFrom<&[f64]> for Vector<N> {
    type Error = LengthError;

    fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
        LengthError::check(N, slice.len())?;
        let mut v = Self::zero();
        v.0.copy_from_slice(slice);
        Ok(v)
    }
}

impl<const N: usize> Display for Vector<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate_mut();
        self
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        self.zip_apply(&rhs, |a, b| a + b);
    }
}

impl<const N: usize> AddAssign<f64> for Vector<N> {
    fn add_assign(&mut self, s: f64) {
        self.apply(|c| c + s);
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.zip_apply(&rhs, |a, b| a - b);
    }
}

impl<const N: usize> SubAssign<f64> for Vector<N> {
    fn sub_assign(&mut self, s: f64) {
        self.apply(|c| c - s);
    }
}

impl<const N: usize> MulAssign for Vector<N> {
    fn mul_assign(&mut self, rhs: Self) {
        self.zip_apply(&rhs, |a, b| a * b);
    }
}

impl<const N: usize> MulAssign<f64> for Vector<N> {
    fn mul_assign(&mut self, s: f64) {
        self.apply(|c| c * s);
    }
}

impl<const N: usize> DivAssign for Vector<N> {
    fn div_assign(&mut self, rhs: Self) {
        self.zip_apply(&rhs, |a, b| a / b);
    }
}

impl<const N: usize> DivAssign<f64> for Vector<N> {
    fn div_assign(&mut self, s: f64) {
        self.apply(|c| c / s);
    }
}

/// Implements the value operator on top of its assigning counterpart.
macro_rules! binop_from_assign {
    ($trait:ident, $method:ident, $assign:ident) => {
        impl<const N: usize> $trait for Vector<N> {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self {
                self.$assign(rhs);
                self
            }
        }

        impl<const N: usize> $trait<f64> for Vector<N> {
            type Output = Self;

            fn $method(mut self, s: f64) -> Self {
                self.$assign(s);
                self
            }
        }
    };
}

binop_from_assign!(Add, add, add_assign);
binop_from_assign!(Sub, sub, sub_assign);
binop_from_assign!(Mul, mul, mul_assign);
binop_from_assign!(Div, div, div_assign);

impl<const N: usize> Add<Vector<N>> for f64 {
    type Output = Vector<N>;

    fn add(self, v: Vector<N>) -> Vector<N> {
        v + self
    }
}

impl<const N: usize> Mul<Vector<N>> for f64 {
    type Output = Vector<N>;

    fn mul(self, v: Vector<N>) -> Vector<N> {
        v * self
    }
}

impl<const N: usize> Sub<Vector<N>> for f64 {
    type Output = Vector<N>;

    fn sub(self, v: Vector<N>) -> Vector<N> {
        v.ssub(self)
    }
}

impl<const N: usize> Div<Vector<N>> for f64 {
    type Output = Vector<N>;

    fn div(self, v: Vector<N>) -> Vector<N> {
        v.sdiv(self)
    }
}
