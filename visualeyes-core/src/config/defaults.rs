// Single source of truth for all default values.

// --- Client ---
pub const DEFAULT_ENDPOINT_URL: &str = "https://www.visualeyes.design";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// --- Render ---
pub const DEFAULT_RENDER_FORMAT: &str = "jpg";
pub const DEFAULT_RENDER_SCALE: f64 = 1.0;
pub const DEFAULT_RENDER_QUALITY: u32 = 100;

// --- AOI ---
pub const DEFAULT_MIN_AOI_WIDTH: f64 = 70.0;
pub const DEFAULT_MIN_AOI_HEIGHT: f64 = 32.0;
pub const DEFAULT_BRANDING_COLOR: &str = "#3E21DE";

// --- Storage ---
pub const DEFAULT_DATA_DIR_NAME: &str = ".visualeyes";
