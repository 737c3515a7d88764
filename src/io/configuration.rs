//! Rendering constants and runtime configuration defaults

// Canvas geometry shared by every item in a run
/// Output image width in pixels
pub const CANVAS_WIDTH: u32 = 800;
/// Output image height in pixels
pub const CANVAS_HEIGHT: u32 = 600;

// Persistence settings
/// JPEG quality used for every written thumbnail
pub const JPEG_QUALITY: u8 = 95;
/// Directory written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "public/story-images";

// Text layout
/// Horizontal space reserved around a label before it must wrap
pub const LABEL_MARGIN: u32 = 100;

// Story profile
/// Maximum darkening applied to the last row by the vertical gradient
pub const STORY_GRADIENT_CAP: f32 = 0.3;
/// Title font size for story thumbnails
pub const STORY_TITLE_SIZE: f32 = 40.0;
/// Vertical distance between wrapped title lines
pub const STORY_LINE_ADVANCE: u32 = 50;
/// Item number badge font size
pub const STORY_BADGE_SIZE: f32 = 80.0;
/// Offset of the item number badge from the top-left corner
pub const STORY_BADGE_OFFSET: (i32, i32) = (30, 30);
/// Theme label font size
pub const STORY_THEME_LABEL_SIZE: f32 = 30.0;
/// Distance of the theme label from the bottom edge
pub const STORY_THEME_LABEL_BOTTOM: u32 = 80;

// Blend profile
/// Label font size for blend thumbnails
pub const BLEND_LABEL_SIZE: f32 = 200.0;
/// Vertical distance between wrapped blend label lines
pub const BLEND_LINE_ADVANCE: u32 = 220;

// Single image profile
/// Title font size for the one-off night image
pub const SINGLE_TITLE_SIZE: f32 = 70.0;
/// Vertical distance between wrapped title lines on the night image
pub const SINGLE_LINE_ADVANCE: u32 = 80;
/// Item number badge font size on the night image
pub const SINGLE_BADGE_SIZE: f32 = 30.0;
/// Inset of the item number badge from the bottom-right corner
pub const SINGLE_BADGE_INSET: u32 = 30;
/// Identifier of the one-off night image
pub const SINGLE_ITEM_ID: &str = "007";
/// Title of the one-off night image
pub const SINGLE_ITEM_TITLE: &str = "Bad Mobs at Night";

// Starfield
/// Number of stars scattered over the top half of the canvas
pub const STAR_COUNT: usize = 100;
/// Star color
pub const STAR_COLOR: [u8; 3] = [200, 200, 200];
/// Moon fill color
pub const MOON_COLOR: [u8; 3] = [240, 240, 210];

// Default values for configurable parameters
/// Fixed seed for reproducible decoration
pub const DEFAULT_SEED: u64 = 42;
/// Highest story number whose existing thumbnail is kept by default
pub const DEFAULT_STORY_PROTECT_THROUGH: u32 = 6;

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
