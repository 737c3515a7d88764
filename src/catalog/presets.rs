//! Catalogs shipped with the binary

use crate::catalog::item::{Catalog, Item};
use crate::catalog::protection::Protection;
use crate::classify::RuleTable;
use crate::classify::presets::{blend_rules, story_rules};
use crate::io::configuration::{DEFAULT_STORY_PROTECT_THROUGH, SINGLE_ITEM_ID, SINGLE_ITEM_TITLE};
use crate::render::RenderProfile;
use crate::theme::ThemeRegistry;
use crate::theme::presets::{blend_registry, story_registry};
use clap::ValueEnum;

/// Built-in configuration bundle: catalog, rules, styles and layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// Numbered stories with themed motifs
    #[default]
    Stories,
    /// Consonant-blend word lists
    Blends,
    /// The one-off night image
    Single,
}

impl Preset {
    /// Items rendered when no catalog file is given
    pub fn catalog(self) -> Catalog {
        match self {
            Self::Stories => story_catalog(),
            Self::Blends => blend_catalog(),
            Self::Single => single_catalog(),
        }
    }

    /// Classification rules
    pub fn rules(self) -> RuleTable {
        match self {
            Self::Stories | Self::Single => story_rules(),
            Self::Blends => blend_rules(),
        }
    }

    /// Theme styles
    pub fn registry(self) -> ThemeRegistry {
        match self {
            Self::Stories | Self::Single => story_registry(),
            Self::Blends => blend_registry(),
        }
    }

    /// Layout profile
    pub fn profile(self) -> RenderProfile {
        match self {
            Self::Stories => RenderProfile::stories(),
            Self::Blends => RenderProfile::blends(),
            Self::Single => RenderProfile::single(),
        }
    }

    /// Existing outputs kept unless overridden
    ///
    /// The first stories shipped with hand-made artwork, which is never replaced.
    pub const fn protection(self) -> Protection {
        match self {
            Self::Stories => Protection::NumericIdAtMost(DEFAULT_STORY_PROTECT_THROUGH),
            Self::Blends | Self::Single => Protection::Nothing,
        }
    }
}

/// Consonant blends with one thumbnail each, in display order
pub const BLENDS: &[&str] = &[
    "br", "cr", "dr", "fr", "gr", "pr", "tr", "sc", "sk", "sm",
    "sn", "sp", "st", "sw", "scr", "squ", "str", "spr", "spl", "bl",
    "cl", "fl", "gl", "pl", "sl", "ct", "ft", "lt", "nt", "pt",
    "xt", "tw", "qu", "ck", "ld", "lf", "lk", "lm", "lp", "mb",
    "mp", "nd", "nk", "rd", "rf", "rk", "rl", "rm", "rn", "rt",
];

/// Story titles; the story number is the position in this list plus one
pub const STORY_TITLES: &[&str] = &[
    "My First Day in Minecraft",
    "Building with Steve",
    "The Deep Cave",
    "My Animal Farm",
    "Into the Nether",
    "The Village Visit",
    "Ocean Adventure",
    "Redstone Fun",
    "The End Portal",
    "Playing with Friends",
    "My Lego City",
    "The Space Mission",
    "Castle Adventure",
    "Racing Day",
    "Robot Friend",
    "The Train Set",
    "Lego Zoo",
    "Flying High",
    "Dream House",
    "Sailing Away",
    "Pikachu's Big Day",
    "My First Pokemon",
    "Gym Battle",
    "Forest Friends",
    "Water Pokemon Fun",
    "Sky Adventure",
    "Fire Type Friends",
    "Grass Pokemon Park",
    "Team Adventure",
    "Pokemon League",
    "The Mountain Trail",
    "Drawing Rainbows",
    "Painting Day",
    "Jiu Jitsu Class",
    "My New Belt",
    "Game Night",
    "The Chicken Farm",
    "My Garden",
    "Baking Cookies",
    "Soccer Practice",
    "Swimming Lessons",
    "Camping Trip",
    "Library Day",
    "Piano Lessons",
    "Dance Class",
    "Learning to Ride",
    "Pizza Night",
    "Building a Fort",
    "Beach Adventure",
    "The Puppet Show",
];

/// One item per consonant blend: `"br"` becomes `br-words` / `BR Words`
pub fn blend_catalog() -> Catalog {
    Catalog::new(
        BLENDS
            .iter()
            .map(|blend| {
                let identifier = format!("{blend}-words");
                let title = format!("{} Words", blend.to_uppercase());
                let filename = format!("{identifier}.jpg");
                Item::new(identifier, title, filename)
            })
            .collect(),
    )
}

/// One item per story, numbered from `001`
pub fn story_catalog() -> Catalog {
    Catalog::new(
        STORY_TITLES
            .iter()
            .enumerate()
            .map(|(index, title)| {
                let identifier = format!("{:03}", index + 1);
                let filename = format!("{identifier}.jpg");
                Item::new(identifier, *title, filename)
            })
            .collect(),
    )
}

/// The night variant of story 7, pinned to the `night` theme
pub fn single_catalog() -> Catalog {
    let filename = format!("{SINGLE_ITEM_ID}.jpg");
    Catalog::new(vec![
        Item::new(SINGLE_ITEM_ID, SINGLE_ITEM_TITLE, filename).with_theme("night"),
    ])
}
