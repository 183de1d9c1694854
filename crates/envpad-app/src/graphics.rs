//! wgpu surface and device acquisition.

use std::sync::Arc;

use thiserror::Error;
use winit::window::Window;

/// Errors raised while bringing up the GPU surface.
#[derive(Debug, Error)]
pub enum GraphicsError {
    #[error("Surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("No suitable graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("Device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("Surface is not compatible with the adapter")]
    IncompatibleSurface,
}

/// Owns the wgpu device, queue and the window surface.
pub struct Graphics {
    pub surface: wgpu::Surface<'static>,
    pub config: wgpu::SurfaceConfiguration,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl Graphics {
    /// Create a surface for `window` and configure it at `width` x `height`
    /// physical pixels.
    pub async fn new(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Self, GraphicsError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("envpad device"),
                ..Default::default()
            })
            .await?;

        let mut config = surface
            .get_default_config(&adapter, width.max(1), height.max(1))
            .ok_or(GraphicsError::IncompatibleSurface)?;
        config.present_mode = wgpu::PresentMode::AutoVsync;
        surface.configure(&device, &config);

        log::info!(
            "Graphics initialized: {:?}, {}x{}",
            config.format,
            config.width,
            config.height
        );

        Ok(Self {
            surface,
            config,
            device,
            queue,
        })
    }

    /// Reconfigure the surface after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }
}
