//! Camera and projection for the tutorials.
//!
//! The tutorials were written for a left-handed API: +X right, +Y up, +Z into
//! the screen, and clip-space depth in `0..=1`. wgpu uses the same clip space,
//! so the left-handed look-at and perspective matrices can be fed to the GPU
//! without any correction matrix.

use cgmath::{Matrix4, Point3, Rad, SquareMatrix, Vector3};

/// A look-at camera: position, point of interest and up direction.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
}

impl Camera {
    pub fn new<E: Into<Point3<f32>>, T: Into<Point3<f32>>>(eye: E, target: T) -> Self {
        Self {
            eye: eye.into(),
            target: target.into(),
            up: Vector3::unit_y(),
        }
    }

    /// Left-handed look-at matrix: the eye lands on the origin and the target
    /// on the positive Z axis.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_lh(self.eye, self.target, self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new((0.0, 3.0, -5.0), (0.0, 0.0, 0.0))
    }
}

/// Left-handed perspective projection.
#[derive(Debug, Clone)]
pub struct Projection {
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width.max(1) as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Maps view-space depth `znear..=zfar` onto clip depth `0..=1`.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let y_scale = 1.0 / (self.fovy.0 / 2.0).tan();
        let x_scale = y_scale / self.aspect;
        let q = self.zfar / (self.zfar - self.znear);

        Matrix4::new(
            x_scale, 0.0, 0.0, 0.0,
            0.0, y_scale, 0.0, 0.0,
            0.0, 0.0, q, 1.0,
            0.0, 0.0, -self.znear * q, 0.0,
        )
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_proj = (projection.calc_matrix() * camera.view_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the GPU needs to know about the camera.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("camera_bind_group_layout"),
    })
}
