//! Mapping between object space and window coordinates
//!
//! [`project`] runs a point through a model view projection matrix, the perspective
//! divide and the viewport transform. [`unproject`] runs the same steps backwards
//! given the inverse matrix.

use crate::matrix::Mat4;
use crate::vec::{Vec3, Vec4};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Window rectangle in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// `[x, y, width, height]`
impl From<[f64; 4]> for Viewport {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

/// Window depth range, `0..1` unless configured otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthRange {
    pub near: f64,
    pub far: f64,
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            near: 0.0,
            far: 1.0,
        }
    }
}

/// `[near, far]`
impl From<[f64; 2]> for DepthRange {
    fn from([near, far]: [f64; 2]) -> Self {
        Self { near, far }
    }
}

fn window_offset(viewport: &Viewport, depth_range: &DepthRange) -> Vec3 {
    Vec3::new(viewport.x, viewport.y, depth_range.near)
}

fn window_extent(viewport: &Viewport, depth_range: &DepthRange) -> Vec3 {
    Vec3::new(
        viewport.width,
        viewport.height,
        depth_range.far - depth_range.near,
    )
}

/// Object space to window coordinates.
///
/// The returned `x`, `y` are in pixels, `z` is the window depth and `w` holds `1 / w_clip`.
pub fn project(
    point: Vec4,
    model_view_projection: &Mat4,
    viewport: &Viewport,
    depth_range: &DepthRange,
) -> Vec4 {
    let clip = *model_view_projection * point;
    if clip.w() == 0.0 {
        debug!("projecting {point} gives clip w = 0");
    }
    let inv_w = 1.0 / clip.w();

    let mut window = clip.to3();
    window *= inv_w / 2.0;
    window += 0.5;
    window *= window_extent(viewport, depth_range);
    window += window_offset(viewport, depth_range);
    window.to4(inv_w)
}

/// Window coordinates back to object space.
///
/// The returned `xyz` is the object space point after the homogeneous divide, `w` holds the
/// reciprocal of the transformed `w`.
pub fn unproject(
    window: Vec3,
    model_view_projection_inverse: &Mat4,
    viewport: &Viewport,
    depth_range: &DepthRange,
) -> Vec4 {
    let mut ndc = window;
    ndc -= window_offset(viewport, depth_range);
    ndc /= window_extent(viewport, depth_range);
    ndc *= 2.0;
    ndc -= 1.0;

    let r = *model_view_projection_inverse * ndc.to4(1.0);
    if r.w() == 0.0 {
        debug!("unprojecting {window} gives w = 0");
    }
    let inv_w = 1.0 / r.w();
    (r.to3() * inv_w).to4(inv_w)
}

/// [`project`] for every point, in parallel with the `parallel` feature.
#[instrument(skip_all, fields(count = points.len()))]
pub fn project_points(
    points: &[Vec4],
    model_view_projection: &Mat4,
    viewport: &Viewport,
    depth_range: &DepthRange,
) -> Vec<Vec4> {
    let project_one = |p: &Vec4| project(*p, model_view_projection, viewport, depth_range);

    #[cfg(feature = "parallel")]
    let projected = points.par_iter().map(project_one).collect();

    #[cfg(not(feature = "parallel"))]
    let projected = points.iter().map(project_one).collect();

    projected
}

/// [`unproject`] for every window position, in parallel with the `parallel` feature.
#[instrument(skip_all, fields(count = windows.len()))]
pub fn unproject_points(
    windows: &[Vec3],
    model_view_projection_inverse: &Mat4,
    viewport: &Viewport,
    depth_range: &DepthRange,
) -> Vec<Vec4> {
    let unproject_one = |w: &Vec3| {
        unproject(*w, model_view_projection_inverse, viewport, depth_range)
    };

    #[cfg(feature = "parallel")]
    let unprojected = windows.par_iter().map(unproject_one).collect();

    #[cfg(not(feature = "parallel"))]
    let unprojected = windows.iter().map(unproject_one).collect();

    unprojected
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::f64::consts::FRAC_PI_3;

    const EPSILON: f64 = 1e-9;

    fn camera() -> Mat4 {
        let projection = Mat4::perspective(FRAC_PI_3, 4.0 / 3.0, 0.5, 50.0);
        let view = Mat4::look_at(
            Vec3::new(2.0, 3.0, 10.0),
            Vec3::zero(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        projection * view
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DepthRange::default(), DepthRange::from([0.0, 1.0]));
        assert_eq!(
            Viewport::from([1.0, 2.0, 3.0, 4.0]),
            Viewport::new(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_project_identity() {
        let viewport = Viewport::new(0.0, 0.0, 640.0, 480.0);
        let depth_range = DepthRange::default();
        let m = Mat4::identity();

        let center = project(Vec4::new(0.0, 0.0, 0.0, 1.0), &m, &viewport, &depth_range);
        assert_eq!(center, Vec4::new(320.0, 240.0, 0.5, 1.0));

        let corner = project(Vec4::new(-1.0, 1.0, -1.0, 1.0), &m, &viewport, &depth_range);
        assert_eq!(corner, Vec4::new(0.0, 480.0, 0.0, 1.0));
    }

    #[test]
    fn test_project_applies_offset_and_depth_range() {
        let viewport = Viewport::new(100.0, 50.0, 200.0, 100.0);
        let depth_range = DepthRange::from([0.25, 0.75]);
        let m = Mat4::identity();
        let r = project(Vec4::new(1.0, -1.0, 1.0, 1.0), &m, &viewport, &depth_range);
        assert_eq!(r, Vec4::new(300.0, 50.0, 0.75, 1.0));
    }

    #[test]
    fn test_project_stores_reciprocal_w() {
        let viewport = Viewport::new(0.0, 0.0, 2.0, 2.0);
        let r = project(
            Vec4::new(0.0, 0.0, 0.0, 4.0),
            &Mat4::identity(),
            &viewport,
            &DepthRange::default(),
        );
        assert_eq!(r.w(), 0.25);
    }

    #[test]
    fn test_project_zero_w_is_not_finite() {
        let r = project(
            Vec4::new(1.0, 1.0, 1.0, 0.0),
            &Mat4::identity(),
            &Viewport::new(0.0, 0.0, 1.0, 1.0),
            &DepthRange::default(),
        );
        assert!(!r.w().is_finite());
        assert!(!r.x().is_finite());
    }

    #[test]
    fn test_round_trip() {
        let mvp = camera();
        let inverse = mvp.inverse();
        let viewport = Viewport::new(10.0, 20.0, 800.0, 600.0);
        let depth_range = DepthRange::default();

        for p in [
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(1.0, -1.0, 2.0, 1.0),
            Vec4::new(2.0, 4.0, -6.0, 2.0),
        ] {
            let window = project(p, &mvp, &viewport, &depth_range);
            let back = unproject(window.to3(), &inverse, &viewport, &depth_range);
            let expected = p.project().to3();
            assert!(
                (back.to3() - expected).length() < EPSILON,
                "{back} != {expected}"
            );
        }
    }

    #[test]
    fn test_batch_matches_single() {
        let mvp = camera();
        let viewport = Viewport::new(0.0, 0.0, 320.0, 200.0);
        let depth_range = DepthRange::default();
        let points: Vec<Vec4> = (0..100)
            .map(|i| Vec4::new(i as f64 * 0.1, -(i as f64) * 0.05, i as f64 * 0.02, 1.0))
            .collect();

        let projected = project_points(&points, &mvp, &viewport, &depth_range);
        assert_eq!(projected.len(), points.len());
        for (p, r) in points.iter().zip(&projected) {
            assert_eq!(*r, project(*p, &mvp, &viewport, &depth_range));
        }

        let windows: Vec<Vec3> = projected.iter().map(|w| w.to3()).collect();
        let unprojected = unproject_points(&windows, &mvp.inverse(), &viewport, &depth_range);
        for (p, u) in points.iter().zip(&unprojected) {
            assert!((u.to3() - p.to3()).length() < 1e-6);
        }
    }
}
