//! Camera for 2D simulations drawn in window pixels

use glam::{Mat4, Vec2};

/// Orthographic camera whose world units are window pixels.
///
/// The origin is the top-left corner of the window and y grows downward,
/// matching cursor coordinates.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub viewport: Vec2,
}

impl Camera2D {
    pub fn new(viewport: Vec2) -> Self {
        Self { viewport }
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.viewport.x, self.viewport.y, 0.0, -1.0, 1.0)
    }

    pub fn update_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera_2d(camera: &Camera2D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}
