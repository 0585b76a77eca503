#![cfg(target_arch = "wasm32")]
use crate::audio::AudioSource;
use crate::config::VisualizerConfig;
use crate::gate::Gate;
use crate::lifecycle::TeardownLatch;
use crate::overlay::OverlayDom;
use crate::scene::Scene;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod dom;
mod error;
mod frame;
mod gate;
mod lifecycle;
mod overlay;
mod render;
mod scene;
mod spectrum;
mod uniforms;
mod viewport;

#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::CONSOLE_LOG_LEVEL).ok();
    log::info!("audio-lines loaded");
}

/// Options accepted by `startWithOptions`. Unset fields keep their defaults.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    config: VisualizerConfig,
}

#[wasm_bindgen]
impl StartOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> StartOptions {
        StartOptions::default()
    }

    #[wasm_bindgen(js_name = setFallbackUrl)]
    pub fn set_fallback_url(&mut self, url: String) {
        self.config.fallback_url = url;
    }

    #[wasm_bindgen(js_name = setSmoothing)]
    pub fn set_smoothing(&mut self, smoothing_time_constant: f32) {
        self.config.smoothing_time_constant = smoothing_time_constant;
    }

    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, volume: f32) {
        self.config.output_volume = volume;
    }
}

// Everything one `start` call owns; torn down by `Visualizer::stop`.
struct Mount {
    overlay: OverlayDom,
    gate: Gate,
    config: VisualizerConfig,
    scene: Option<Rc<RefCell<Scene>>>,
    frame_loop: Option<frame::FrameLoop>,
    listeners: Vec<dom::Listener>,
    stop_latch: TeardownLatch,
}

impl Mount {
    fn teardown(&mut self) {
        if !self.stop_latch.begin() {
            return;
        }
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        if let Some(scene) = self.scene.take() {
            scene.borrow_mut().unmount();
        }
        self.listeners.clear();
        self.overlay.remove();
        log::info!("[overlay] stopped");
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Handle to one mounted overlay + scene.
#[wasm_bindgen]
pub struct Visualizer {
    mount: Rc<RefCell<Mount>>,
}

#[wasm_bindgen]
impl Visualizer {
    /// Unmount: stop drawing, disconnect audio output and remove the DOM.
    /// Further calls do nothing.
    pub fn stop(&self) {
        self.mount.borrow_mut().teardown();
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.mount.borrow().gate.is_ready()
    }
}

/// Mount the file picker / Play overlay into the element with `container_id`.
#[wasm_bindgen]
pub fn start(container_id: &str) -> Result<Visualizer, JsValue> {
    start_with_options(container_id, StartOptions::new())
}

#[wasm_bindgen(js_name = startWithOptions)]
pub fn start_with_options(container_id: &str, options: StartOptions) -> Result<Visualizer, JsValue> {
    options.config.validate().map_err(to_js)?;
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", container_id)))?;
    let overlay = overlay::build(&document, &container).map_err(to_js)?;

    let mount = Rc::new(RefCell::new(Mount {
        overlay,
        gate: Gate::new(),
        config: options.config,
        scene: None,
        frame_loop: None,
        listeners: Vec::new(),
        stop_latch: TeardownLatch::new(),
    }));
    wire_overlay(&mount);
    log::info!("[overlay] mounted into #{}", container_id);
    Ok(Visualizer { mount })
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn wire_overlay(mount: &Rc<RefCell<Mount>>) {
    let (file_input, play_button, canvas) = {
        let m = mount.borrow();
        (
            m.overlay.file_input.clone(),
            m.overlay.play_button.clone(),
            m.overlay.canvas.clone(),
        )
    };

    let weak = Rc::downgrade(mount);
    let play = dom::Listener::new(&play_button, "click", move |_| {
        if let Some(m) = weak.upgrade() {
            proceed(&m, AudioSource::Fallback);
        }
    });

    let weak = Rc::downgrade(mount);
    let input = file_input.clone();
    let change = dom::Listener::new(&file_input, "change", move |_| {
        let Some(file) = overlay::selected_file(&input) else {
            return;
        };
        log::info!("[overlay] reading {} ({} bytes)", file.name(), file.size());
        let weak = weak.clone();
        spawn_local(async move {
            match audio::read_file(&file).await {
                Ok(buf) => {
                    if let Some(m) = weak.upgrade() {
                        proceed(&m, AudioSource::File(buf));
                    }
                }
                Err(e) => log::error!("[overlay] {}", e),
            }
        });
    });

    let weak = Rc::downgrade(mount);
    let mut listeners = vec![play, change];
    if let Some(window) = web::window() {
        listeners.push(dom::Listener::new(&window, "resize", move |_| {
            let ready = weak.upgrade().map_or(false, |m| m.borrow().gate.is_ready());
            if ready {
                dom::sync_canvas_backing_size(&canvas);
            }
        }));
    }
    mount.borrow_mut().listeners.extend(listeners);
}

// Selecting -> Ready. Only the first caller gets to start the scene.
fn proceed(mount: &Rc<RefCell<Mount>>, source: AudioSource) {
    let (canvas, config) = {
        let mut m = mount.borrow_mut();
        if m.stop_latch.is_done() || !m.gate.ready() {
            return;
        }
        overlay::enter_ready(&m.overlay);
        (m.overlay.canvas.clone(), m.config.clone())
    };
    match &source {
        AudioSource::File(_) => log::info!("[overlay] ready with selected file"),
        AudioSource::Fallback => log::info!("[overlay] ready with fallback track"),
    }

    let weak = Rc::downgrade(mount);
    spawn_local(async move {
        if let Err(e) = run_scene(weak, canvas, source, config).await {
            log::error!("[scene] load failed: {:#}", e);
        }
    });
}

async fn run_scene(
    mount: Weak<RefCell<Mount>>,
    canvas: web::HtmlCanvasElement,
    source: AudioSource,
    config: VisualizerConfig,
) -> anyhow::Result<()> {
    let scene = Scene::mount(canvas, source, &config).await?;
    let Some(mount) = mount.upgrade() else {
        return Ok(());
    };
    let mut m = mount.borrow_mut();
    if m.stop_latch.is_done() {
        log::info!("[scene] stopped while loading; releasing");
        return Ok(());
    }
    let scene = Rc::new(RefCell::new(scene));
    m.frame_loop = Some(frame::start_loop(scene.clone()));
    m.scene = Some(scene);
    Ok(())
}
