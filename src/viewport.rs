use glam::{Mat4, Vec2, Vec3};

/// Fixed perspective camera looking at the origin from `+Z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub distance: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(fov_y_deg: f32, distance: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y_deg,
            distance,
            near,
            far,
        }
    }

    /// World-space extent visible on the `z = 0` plane for a canvas of
    /// `width` x `height` pixels.
    pub fn viewport_units(&self, width: f32, height: f32) -> Vec2 {
        let h = 2.0 * (self.fov_y_deg.to_radians() * 0.5).tan() * self.distance;
        Vec2::new(h * aspect(width, height), h)
    }

    pub fn view_proj(&self, width: f32, height: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            aspect(width, height),
            self.near,
            self.far,
        );
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.distance), Vec3::ZERO, Vec3::Y);
        proj * view
    }
}

#[inline]
fn aspect(width: f32, height: f32) -> f32 {
    width / height.max(1.0)
}

/// Scale that stretches a unit plane over the whole viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneLayout {
    pub scale: Vec2,
    pub mvp: Mat4,
}

impl PlaneLayout {
    pub fn fit(camera: &Camera, width: f32, height: f32) -> Self {
        let scale = camera.viewport_units(width, height);
        let model = Mat4::from_scale(Vec3::new(scale.x, scale.y, 1.0));
        Self {
            scale,
            mvp: camera.view_proj(width, height) * model,
        }
    }
}
