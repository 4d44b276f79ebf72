use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::geometry::Vec3;

const NEAR_PLANE: f64 = 0.1;

/// Perspective camera orbiting a target point. Dragging rotates it around
/// the target; there is no zoom and no pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f64,
    /// Angle around the vertical axis, 0 looks down -z from +z.
    pub azimuth: f64,
    /// Angle from the vertical axis.
    pub polar: f64,
    pub fov_y: f64,
    pub min_polar: f64,
    pub max_polar: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(0.0, 5.0, 8.0))
    }
}

impl OrbitCamera {
    pub fn looking_from(position: Vec3) -> Self {
        let target = Vec3::ZERO;
        let offset = position - target;
        let radius = offset.length();
        let mut camera = Self {
            target,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            fov_y: 75f64.to_radians(),
            min_polar: FRAC_PI_4,
            max_polar: FRAC_PI_2,
        };
        camera.polar = camera.polar.clamp(camera.min_polar, camera.max_polar);
        camera
    }

    pub fn position(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + Vec3::new(
                self.radius * sin_polar * self.azimuth.sin(),
                self.radius * self.polar.cos(),
                self.radius * sin_polar * self.azimuth.cos(),
            )
    }

    /// Pointer drag of `dx`, `dy` CSS pixels on an element `viewport_height`
    /// pixels tall. A drag across the full height turns the camera once.
    pub fn drag(&mut self, dx: f64, dy: f64, viewport_height: f64) {
        if viewport_height <= 0.0 {
            return;
        }
        self.azimuth -= 2.0 * PI * dx / viewport_height;
        self.polar = (self.polar - 2.0 * PI * dy / viewport_height)
            .clamp(self.min_polar, self.max_polar);
    }

    pub fn view(&self, width: f64, height: f64) -> View {
        let eye = self.position();
        let forward = (self.target - eye).normalize();
        let right = forward.cross(Vec3::UP).normalize();
        let up = right.cross(forward);
        View {
            eye,
            forward,
            right,
            up,
            focal: 1.0 / (self.fov_y / 2.0).tan(),
            width,
            height,
        }
    }
}

/// A camera frozen for one frame, with its basis precomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub eye: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    focal: f64,
    width: f64,
    height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Distance along the view direction.
    pub depth: f64,
}

impl View {
    /// Projects a world point into pixel coordinates, `None` when it lies
    /// behind the near plane.
    pub fn project(&self, world: Vec3) -> Option<ScreenPoint> {
        let rel = world - self.eye;
        let depth = rel.dot(self.forward);
        if depth < NEAR_PLANE || self.height <= 0.0 {
            return None;
        }
        let aspect = self.width / self.height;
        let ndc_x = rel.dot(self.right) * self.focal / (aspect * depth);
        let ndc_y = rel.dot(self.up) * self.focal / depth;
        Some(ScreenPoint {
            x: (ndc_x + 1.0) / 2.0 * self.width,
            y: (1.0 - ndc_y) / 2.0 * self.height,
            depth,
        })
    }
}
