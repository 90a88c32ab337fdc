//! Global constants for the gridmark core.

/// Maximum number of grid rows.
pub const MAX_ROWS: u32 = 180;

/// Maximum number of grid columns.
pub const MAX_COLS: u32 = 320;

/// Minimum grid dimension (rows and columns).
pub const MIN_DIM: u32 = 1;

/// Default number of grid rows.
pub const DEFAULT_ROWS: u32 = 180;

/// Default number of grid columns.
pub const DEFAULT_COLS: u32 = 320;

/// Fixed hue angles (degrees) used as marker-color candidates.
pub const MARKER_PALETTE_HUES: [f32; 9] =
    [0.0, 30.0, 60.0, 120.0, 180.0, 210.0, 240.0, 270.0, 300.0];

/// Candidate saturation, deliberately above the nominal 1.0 for boosted
/// vividness. Channels are clamped back to 8 bits after selection.
pub const MARKER_SATURATION: f32 = 1.2;

/// Bright value tier for marker candidates.
pub const VALUE_BRIGHT: f32 = 0.95;

/// Dark value tier for marker candidates.
pub const VALUE_DARK: f32 = 0.35;

/// Minimum circular hue distance (degrees) a candidate must keep from the
/// background hue to be considered.
pub const HUE_AVOID_DEG: f32 = 24.0;

/// Rotation cursor step applied after every marker selection.
pub const CURSOR_STEP: usize = 2;

/// Fallback marker color used when the background cannot be sampled or no
/// candidate survives the hue filter.
pub const SENTINEL_COLOR: [u8; 3] = [0, 255, 255];

/// Alpha the collaborator applies when rendering a marker color.
pub const MARKER_ALPHA: f32 = 0.7;

/// Grid configuration file name inside the data directory.
pub const GRID_CONFIG_FILE: &str = "grid_config.json";

/// Product catalog file name inside the data directory.
pub const PRODUCTS_FILE: &str = "products.json";

/// Issue catalog file name inside the data directory.
pub const ISSUES_FILE: &str = "issues.json";

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "timestamp,product,issue,x,y";
