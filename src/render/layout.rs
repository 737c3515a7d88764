//! Label selection, word wrapping and text placement
//!
//! Layout is pure: it decides what text goes where without touching pixels,
//! so placement can be checked independently of rasterization.

use crate::catalog::Item;
use crate::classify::ThemeKey;
use crate::io::configuration::{
    BLEND_LABEL_SIZE, BLEND_LINE_ADVANCE, LABEL_MARGIN, SINGLE_BADGE_INSET, SINGLE_BADGE_SIZE,
    SINGLE_LINE_ADVANCE, SINGLE_TITLE_SIZE, STORY_BADGE_OFFSET, STORY_BADGE_SIZE,
    STORY_GRADIENT_CAP, STORY_LINE_ADVANCE, STORY_THEME_LABEL_BOTTOM, STORY_THEME_LABEL_SIZE,
    STORY_TITLE_SIZE,
};
use crate::render::font::{TextExtent, Typeface};

/// Where the main label text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// Identifier up to the first `-`, uppercased (`br-words` → `BR`)
    FirstToken,
    /// The item's title as written
    Title,
}

impl LabelSource {
    /// Label text for an item
    pub fn text(self, item: &Item) -> String {
        match self {
            Self::FirstToken => item
                .identifier
                .split('-')
                .next()
                .unwrap_or_default()
                .to_uppercase(),
            Self::Title => item.title.clone(),
        }
    }
}

/// Content of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeText {
    /// `#` followed by the identifier, e.g. `#021`
    Number,
    /// The theme key as a label, e.g. `POKEMON`
    ThemeLabel,
}

/// Placement rule for a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Top-left corner of the text at a fixed offset
    TopLeft {
        /// Distance from the left edge
        x: i32,
        /// Distance from the top edge
        y: i32,
    },
    /// Horizontally centred, top of the text at a distance from the bottom edge
    BottomCenter {
        /// Distance from the bottom edge
        bottom: u32,
    },
    /// Bottom-right corner of the text inset from the canvas corner
    BottomRight {
        /// Distance between the text's right edge and the canvas's
        right: u32,
        /// Distance between the text's bottom edge and the canvas's
        bottom: u32,
    },
}

/// A small secondary text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeSpec {
    /// What the badge says
    pub text: BadgeText,
    /// Where it goes
    pub anchor: Anchor,
    /// Font size in pixels
    pub size: f32,
    /// Outline radius in pixels
    pub stroke: u32,
}

/// Per-catalog layout knobs
#[derive(Debug, Clone, PartialEq)]
pub struct RenderProfile {
    /// Darkening reached at the last row, or no gradient
    pub gradient_cap: Option<f32>,
    /// Source of the main label
    pub label: LabelSource,
    /// Main label font size in pixels
    pub title_size: f32,
    /// Vertical distance between wrapped label lines
    pub line_advance: u32,
    /// Main label outline radius
    pub title_stroke: u32,
    /// Horizontal space the label must leave free before wrapping
    pub margin: u32,
    /// Secondary text runs
    pub badges: Vec<BadgeSpec>,
}

impl RenderProfile {
    /// Story thumbnails: gradient, wrapped title, number and theme badges
    pub fn stories() -> Self {
        Self {
            gradient_cap: Some(STORY_GRADIENT_CAP),
            label: LabelSource::Title,
            title_size: STORY_TITLE_SIZE,
            line_advance: STORY_LINE_ADVANCE,
            title_stroke: 2,
            margin: LABEL_MARGIN,
            badges: vec![
                BadgeSpec {
                    text: BadgeText::Number,
                    anchor: Anchor::TopLeft {
                        x: STORY_BADGE_OFFSET.0,
                        y: STORY_BADGE_OFFSET.1,
                    },
                    size: STORY_BADGE_SIZE,
                    stroke: 3,
                },
                BadgeSpec {
                    text: BadgeText::ThemeLabel,
                    anchor: Anchor::BottomCenter {
                        bottom: STORY_THEME_LABEL_BOTTOM,
                    },
                    size: STORY_THEME_LABEL_SIZE,
                    stroke: 2,
                },
            ],
        }
    }

    /// Blend thumbnails: flat background and one large centred label
    pub fn blends() -> Self {
        Self {
            gradient_cap: None,
            label: LabelSource::FirstToken,
            title_size: BLEND_LABEL_SIZE,
            line_advance: BLEND_LINE_ADVANCE,
            title_stroke: 4,
            margin: LABEL_MARGIN,
            badges: Vec::new(),
        }
    }

    /// One-off images: flat background, large title, small corner number
    pub fn single() -> Self {
        Self {
            gradient_cap: None,
            label: LabelSource::Title,
            title_size: SINGLE_TITLE_SIZE,
            line_advance: SINGLE_LINE_ADVANCE,
            title_stroke: 2,
            margin: LABEL_MARGIN,
            badges: vec![BadgeSpec {
                text: BadgeText::Number,
                anchor: Anchor::BottomRight {
                    right: SINGLE_BADGE_INSET,
                    bottom: SINGLE_BADGE_INSET,
                },
                size: SINGLE_BADGE_SIZE,
                stroke: 0,
            }],
        }
    }
}

/// A text run with its resolved position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    /// Text to draw
    pub text: String,
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Measured size
    pub extent: TextExtent,
    /// Font size in pixels
    pub size: f32,
    /// Outline radius
    pub stroke: u32,
}

/// All text placed on one canvas
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    /// Main label, one entry per wrapped line
    pub lines: Vec<PlacedText>,
    /// Secondary runs in profile order
    pub badges: Vec<PlacedText>,
}

/// Greedy word wrap
///
/// Words are added to the current line while its measured width stays within
/// `max_width`; the word that would overflow starts the next line. A word that
/// alone exceeds the limit still gets a line to itself.
pub fn wrap_words(text: &str, max_width: u32, measure: impl Fn(&str) -> u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Place the label and badges for an item on a `width` × `height` canvas
pub fn compute_layout(
    item: &Item,
    theme: &ThemeKey,
    profile: &RenderProfile,
    typeface: &dyn Typeface,
    (width, height): (u32, u32),
) -> Layout {
    let size = profile.title_size;
    let label = profile.label.text(item);
    let limit = width.saturating_sub(profile.margin);

    let wrapped = if typeface.measure(&label, size).width > limit {
        wrap_words(&label, limit, |s| typeface.measure(s, size).width)
    } else if label.trim().is_empty() {
        Vec::new()
    } else {
        vec![label]
    };

    let advance = profile.line_advance as i32;
    let block = advance * wrapped.len() as i32;
    let top = (height as i32 - block) / 2;

    let lines = wrapped
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let extent = typeface.measure(&text, size);
            PlacedText {
                x: (width as i32 - extent.width as i32) / 2,
                y: top + index as i32 * advance + (advance - extent.height as i32) / 2,
                text,
                extent,
                size,
                stroke: profile.title_stroke,
            }
        })
        .collect();

    let badges = profile
        .badges
        .iter()
        .map(|badge| {
            let text = match badge.text {
                BadgeText::Number => format!("#{}", item.identifier),
                BadgeText::ThemeLabel => theme.label(),
            };
            let extent = typeface.measure(&text, badge.size);
            let (x, y) = match badge.anchor {
                Anchor::TopLeft { x, y } => (x, y),
                Anchor::BottomCenter { bottom } => (
                    (width as i32 - extent.width as i32) / 2,
                    height as i32 - bottom as i32,
                ),
                Anchor::BottomRight { right, bottom } => (
                    width as i32 - right as i32 - extent.width as i32,
                    height as i32 - bottom as i32 - extent.height as i32,
                ),
            };
            PlacedText {
                text,
                x,
                y,
                extent,
                size: badge.size,
                stroke: badge.stroke,
            }
        })
        .collect();

    Layout { lines, badges }
}
