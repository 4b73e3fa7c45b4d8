/// Multiplier applied to the zoom factor by the zoom-in button and double-click.
pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 1.5;

/// Multiplier applied to the zoom factor by the zoom-out button.
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 0.5;

/// Largest jump (in 1.0-based zoom units) a pinch gesture may request before
/// it is smoothed down to a fixed step.
pub const DEFAULT_PINCH_THRESHOLD: f64 = 10.0;

/// Step taken instead of the requested jump when a pinch exceeds the threshold.
pub const DEFAULT_PINCH_STEP: f64 = 2.0;

/// Lower bound for the zoom factor. Repeated zoom-out halves the factor, so it
/// needs a floor to stay representable.
pub const DEFAULT_MIN_ZOOM: f64 = 0.01;

/// Upper bound for the zoom factor.
pub const DEFAULT_MAX_ZOOM: f64 = 100.0;

/// Initial viewer window size in logical pixels (width, height).
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [400.0, 300.0];

/// Minimum viewer window size in logical pixels (width, height).
pub const DEFAULT_MIN_WINDOW_SIZE: [f32; 2] = [300.0, 300.0];

/// Prefix of temporary files written when a source image has to be converted.
pub const TEMP_FILE_PREFIX: &str = "panview-";

/// Extension of temporary conversion files.
pub const TEMP_FILE_SUFFIX: &str = ".png";
