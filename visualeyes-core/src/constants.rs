/// VisualEyes system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Platform tag sent with every prediction request.
pub const PLATFORM: &str = "adobexd";

/// Path of the prediction endpoint, relative to the configured base URL.
pub const PREDICT_PATH: &str = "/predict/";

/// MIME type of rendered artboard images.
pub const IMAGE_MIME: &str = "image/jpg";

/// Name given to the generated heatmap layer.
pub const HEATMAP_LAYER_NAME: &str = "VisualEyes Heatmap";

/// Marker name a rectangle layer must carry to count as an AOI.
pub const AOI_LAYER_NAME: &str = "AOI";

/// File holding the persisted API key, under the data directory.
pub const SETTINGS_FILENAME: &str = "settings.txt";
