use crate::config::VisualizerConfig;
use crate::constants::ANALYSER_FFT_SIZE;
use crate::error::LoadError;
use crate::lifecycle::OutputLatch;
use crate::spectrum::FrequencySample;
use js_sys::ArrayBuffer;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Where the session's audio bytes come from.
pub enum AudioSource {
    /// Bytes the user picked through the file input.
    File(ArrayBuffer),
    /// Fetch `VisualizerConfig::fallback_url`.
    Fallback,
}

/// Decode context plus the `source -> analyser -> gain` chain.
///
/// Playback starts on creation; sound is only audible between
/// `connect_output` and `disconnect_output`.
pub struct AudioSession {
    ctx: web::AudioContext,
    // Held so the looping node lives exactly as long as the session
    _source: web::AudioBufferSourceNode,
    analyser: web::AnalyserNode,
    gain: web::GainNode,
    data: FrequencySample,
    output: OutputLatch,
}

impl AudioSession {
    pub async fn create(source: AudioSource, config: &VisualizerConfig) -> Result<Self, LoadError> {
        let bytes = match source {
            AudioSource::File(buf) => buf,
            AudioSource::Fallback => fetch_array_buffer(&config.fallback_url).await?,
        };
        log::info!("[audio] decoding {} bytes", bytes.byte_length());

        let ctx = web::AudioContext::new().map_err(|_| LoadError::Unsupported("AudioContext"))?;
        let decoded = decode(&ctx, &bytes).await?;
        log::info!(
            "[audio] decoded {:.1}s, {} ch @ {} Hz",
            decoded.duration(),
            decoded.number_of_channels(),
            decoded.sample_rate()
        );

        let source = ctx.create_buffer_source().map_err(LoadError::decode)?;
        source.set_buffer(Some(&decoded));
        source.set_loop(true);

        let analyser = ctx
            .create_analyser()
            .map_err(|_| LoadError::Unsupported("AnalyserNode"))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE as u32);
        analyser.set_smoothing_time_constant(config.smoothing_time_constant as f64);

        let gain = ctx
            .create_gain()
            .map_err(|_| LoadError::Unsupported("GainNode"))?;
        gain.gain().set_value(config.output_volume);

        _ = source.connect_with_audio_node(&analyser);
        _ = analyser.connect_with_audio_node(&gain);

        #[allow(deprecated)]
        source.start_with_when(0.0).map_err(LoadError::decode)?;
        // Contexts created outside a click handler may start suspended
        match ctx.resume() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] resume rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[audio] resume failed: {:?}", e),
        }

        let data = FrequencySample::for_window(analyser.fft_size() as usize);
        Ok(Self {
            ctx,
            _source: source,
            analyser,
            gain,
            data,
            output: OutputLatch::new(),
        })
    }

    /// Refresh the frequency buffer from the analyser and return its average.
    pub fn sample(&mut self) -> f32 {
        self.analyser.get_byte_frequency_data(self.data.bins_mut());
        self.data.average()
    }

    #[inline]
    pub fn data(&self) -> &FrequencySample {
        &self.data
    }

    pub fn connect_output(&mut self) {
        if !self.output.connect() {
            return;
        }
        if let Err(e) = self.gain.connect_with_audio_node(&self.ctx.destination()) {
            self.output.connect_failed();
            log::error!("[audio] connect to destination failed: {:?}", e);
        }
    }

    /// Detach from the speakers. Runs at most once; the context and source
    /// keep running.
    pub fn disconnect_output(&mut self) {
        if self.output.release() {
            _ = self.gain.disconnect();
            log::info!("[audio] output disconnected");
        }
    }
}

impl Drop for AudioSession {
    fn drop(&mut self) {
        self.disconnect_output();
    }
}

async fn fetch_array_buffer(url: &str) -> Result<ArrayBuffer, LoadError> {
    let window = web::window().ok_or(LoadError::Unsupported("window"))?;
    log::info!("[audio] fetching fallback track {}", url);
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::fetch(url, e))?;
    let resp: web::Response = resp.dyn_into().map_err(|e| LoadError::fetch(url, e))?;
    if !resp.ok() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let body = resp.array_buffer().map_err(|e| LoadError::fetch(url, e))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::fetch(url, e))?;
    body.dyn_into::<ArrayBuffer>()
        .map_err(|e| LoadError::fetch(url, e))
}

async fn decode(ctx: &web::AudioContext, bytes: &ArrayBuffer) -> Result<web::AudioBuffer, LoadError> {
    let promise = ctx.decode_audio_data(bytes).map_err(LoadError::decode)?;
    let decoded = JsFuture::from(promise).await.map_err(LoadError::decode)?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(LoadError::decode)
}

/// Read the first file of an `<input type=file>` into memory.
pub async fn read_file(file: &web::File) -> Result<ArrayBuffer, LoadError> {
    let buf = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| LoadError::FileRead(format!("{:?}", e)))?;
    buf.dyn_into::<ArrayBuffer>()
        .map_err(|e| LoadError::FileRead(format!("{:?}", e)))
}
