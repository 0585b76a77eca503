/// Analysis, camera and layout constants.
///
/// The shader's frequency array is sized from these: a 256-sample analysis
/// window gives 128 bins packed into 32 vec4s.

// Analyser
pub const ANALYSER_FFT_SIZE: usize = 256;
pub const FREQUENCY_BIN_COUNT: usize = ANALYSER_FFT_SIZE / 2;
pub const PACKED_FREQUENCY_LEN: usize = FREQUENCY_BIN_COUNT / 4;
pub const DEFAULT_SMOOTHING_TIME_CONSTANT: f32 = 0.8;
pub const DEFAULT_OUTPUT_VOLUME: f32 = 1.0;

// Played when the user presses Play without choosing a file
pub const DEFAULT_FALLBACK_URL: &str = "https://timmoth.github.io/audio-lines/dist/tetris.mp3";

// Camera: fixed perspective looking down -Z at the plane on z = 0
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Background behind the plane (only visible before the first draw)
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// Console logger threshold, and the severity of the once-per-interval
// loudness line (must pass the threshold to be printed)
pub const CONSOLE_LOG_LEVEL: log::Level = log::Level::Info;
pub const LEVEL_LOG_LEVEL: log::Level = log::Level::Info;
pub const LEVEL_LOG_INTERVAL_SEC: f32 = 1.0;

// DOM classes, shared with style.css
pub const CLASS_APP_CONTAINER: &str = "app-container";
pub const CLASS_CANVAS: &str = "app-canvas";
pub const CLASS_PANEL: &str = "container";
pub const CLASS_FILE_INPUT: &str = "file-input";
pub const CLASS_FILE: &str = "file";
pub const CLASS_FILE_LABEL: &str = "file-input-label";
pub const CLASS_LABEL: &str = "label";
pub const CLASS_PLAY_BUTTON: &str = "playButton";
pub const CLASS_HIDDEN: &str = "hidden";
