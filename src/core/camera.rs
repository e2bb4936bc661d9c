//! Camera as a coordinate-transform provider for picking

use crate::core::types::{Vec3, Mat4, Quat};

/// Anything that can hand the resolver a view and projection matrix.
pub trait CameraProvider {
    /// World to camera space
    fn view_matrix(&self) -> Mat4;
    /// Camera to clip space
    fn projection_matrix(&self) -> Mat4;

    /// Inverse of `projection * view`, used to unproject NDC back to world space
    fn view_projection_inverse(&self) -> Mat4 {
        (self.projection_matrix() * self.view_matrix()).inverse()
    }
}

/// Perspective camera with position, rotation, and projection parameters
#[derive(Clone, Debug)]
pub struct Camera {
    /// World position
    pub position: Vec3,
    /// Rotation as quaternion
    pub rotation: Quat,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Camera {
    /// Create a new camera looking down -Z
    pub fn new(position: Vec3, fov_y_degrees: f32, aspect: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near: 0.1,
            far: 500.0,
        }
    }

    /// Create camera looking at a target
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - position).normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);

        let rotation = Quat::from_mat3(&glam::Mat3::from_cols(right, up, -forward));

        Self {
            rotation,
            ..Self::new(position, 60.0, 16.0 / 9.0)
        }
    }

    /// Camera placed in front of and above an edit volume of size `grid_size`,
    /// looking at its centre.
    pub fn framing_grid(grid_size: i32, fov_y_degrees: f32, aspect: f32) -> Self {
        let n = grid_size as f32;
        let center = Vec3::splat(n * 0.5);
        let position = center + Vec3::new(n * 0.8, n * 1.1, n * 1.6);
        let mut camera = Self::look_at(position, center, Vec3::Y);
        camera.fov_y = fov_y_degrees.to_radians();
        camera.aspect = aspect;
        camera
    }

    /// Get forward direction (negative Z in camera space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Update aspect ratio (call on viewport resize)
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }
}

impl CameraProvider for Camera {
    fn view_matrix(&self) -> Mat4 {
        let rotation_matrix = Mat4::from_quat(self.rotation.conjugate());
        let translation_matrix = Mat4::from_translation(-self.position);
        rotation_matrix * translation_matrix
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 5.0), 60.0, 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_forward() {
        let camera = Camera::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let forward = camera.forward();
        assert!((forward.z - (-1.0)).abs() < 0.001);
    }

    #[test]
    fn test_view_matrix_translation() {
        let mut camera = Camera::default();
        camera.position = Vec3::new(10.0, 0.0, 0.0);

        let origin_in_camera = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!((origin_in_camera.x - (-10.0)).abs() < 0.001);
    }

    #[test]
    fn test_center_unprojects_onto_view_axis() {
        let camera = Camera::look_at(Vec3::new(3.0, 4.0, 12.0), Vec3::new(3.0, 4.0, 0.0), Vec3::Y);
        let inv = camera.view_projection_inverse();

        let near = inv.project_point3(Vec3::new(0.0, 0.0, -1.0));
        let far = inv.project_point3(Vec3::new(0.0, 0.0, 1.0));
        assert!((near.x - 3.0).abs() < 0.001 && (near.y - 4.0).abs() < 0.001);
        assert!((far.x - 3.0).abs() < 0.01 && (far.y - 4.0).abs() < 0.01);
        assert!(far.z < near.z);
    }

    #[test]
    fn test_framing_grid_looks_at_center() {
        let camera = Camera::framing_grid(9, 60.0, 1.6);
        let to_center = (Vec3::splat(4.5) - camera.position).normalize();
        assert!(camera.forward().dot(to_center) > 0.999);
    }
}
