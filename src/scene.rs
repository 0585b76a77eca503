use crate::audio::{AudioSession, AudioSource};
use crate::config::VisualizerConfig;
use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, LEVEL_LOG_INTERVAL_SEC, LEVEL_LOG_LEVEL,
};
use crate::dom;
use crate::error::LoadError;
use crate::render::GpuState;
use crate::uniforms::ShaderUniforms;
use crate::viewport::{Camera, PlaneLayout};
use instant::Instant;
use web_sys as web;

/// The shader plane together with the audio session feeding it.
///
/// Built by the async `mount`, which must finish before the frame loop starts;
/// after that every call is synchronous.
pub struct Scene {
    canvas: web::HtmlCanvasElement,
    session: AudioSession,
    gpu: GpuState,
    camera: Camera,
    layout: PlaneLayout,
    uniforms: ShaderUniforms,
    css_size: (f32, f32),
    last_level_log: Instant,
}

impl Scene {
    pub async fn mount(
        canvas: web::HtmlCanvasElement,
        source: AudioSource,
        config: &VisualizerConfig,
    ) -> Result<Self, LoadError> {
        let session = AudioSession::create(source, config).await?;

        dom::sync_canvas_backing_size(&canvas);
        let gpu = GpuState::new(&canvas).await?;

        let (w, h) = dom::css_size(&canvas);
        let camera = Camera::new(CAMERA_FOV_DEG, CAMERA_Z, CAMERA_NEAR, CAMERA_FAR);
        let uniforms = ShaderUniforms::new(session.data().len(), w, h);
        let mut scene = Self {
            canvas,
            session,
            gpu,
            camera,
            layout: PlaneLayout::fit(&camera, w, h),
            uniforms,
            css_size: (w, h),
            last_level_log: Instant::now(),
        };
        scene.resize(w, h);
        scene.session.connect_output();
        log::info!("[scene] mounted at {:.0}x{:.0}", w, h);
        Ok(scene)
    }

    /// Track a new CSS viewport size: `u_size` and the plane scale follow it.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !self.uniforms.try_set_size(width, height) {
            return;
        }
        self.css_size = (width, height);
        self.layout = PlaneLayout::fit(&self.camera, width, height);
        log::debug!(
            "[scene] resize {:.0}x{:.0} -> plane {:.2}x{:.2}",
            width,
            height,
            self.layout.scale.x,
            self.layout.scale.y
        );
    }

    pub fn frame(&mut self) {
        let size = dom::css_size(&self.canvas);
        if size != self.css_size {
            self.resize(size.0, size.1);
        }
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let level = self.session.sample();
        self.uniforms
            .set_frequency_data(self.session.data().bins());

        match self.gpu.render(self.layout.mvp, &self.uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::warn!("[scene] frame skipped: {:?}", e),
        }

        if self.last_level_log.elapsed().as_secs_f32() >= LEVEL_LOG_INTERVAL_SEC {
            self.last_level_log = Instant::now();
            log::log!(LEVEL_LOG_LEVEL, "[scene] level={:.1}", level);
        }
    }

    /// Silence the scene. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        self.session.disconnect_output();
    }
}
