//! Tests for the built-in catalogs and preset bundles

#[cfg(test)]
mod tests {
    use placard::catalog::presets::{
        BLENDS, STORY_TITLES, blend_catalog, single_catalog, story_catalog,
    };
    use placard::classify::ThemeKey;
    use placard::render::RenderProfile;
    use placard::catalog::{Preset, Protection};

    // Tests stories are numbered from 001 with matching filenames
    // Verified by numbering stories from zero
    #[test]
    fn test_story_catalog() {
        let catalog = story_catalog();

        assert_eq!(catalog.len(), STORY_TITLES.len());
        let first = &catalog.items()[0];
        assert_eq!(first.identifier, "001");
        assert_eq!(first.filename, "001.jpg");
        assert_eq!(first.title, "My First Day in Minecraft");
        assert_eq!(catalog.items()[9].title, "Playing with Friends");
        assert_eq!(catalog.items()[49].identifier, "050");
    }

    // Tests blend identifiers, titles and filenames
    // Verified by keeping the blend lowercase in the title
    #[test]
    fn test_blend_catalog() {
        let catalog = blend_catalog();

        assert_eq!(catalog.len(), BLENDS.len());
        let scr = catalog.iter().find(|i| i.identifier == "scr-words").unwrap();
        assert_eq!(scr.title, "SCR Words");
        assert_eq!(scr.filename, "scr-words.jpg");
    }

    // Tests every preset's registry covers its rules and its own catalog
    // Verified by dropping the night theme from the story registry
    #[test]
    fn test_presets_are_consistent() {
        for preset in [Preset::Stories, Preset::Blends, Preset::Single] {
            let registry = preset.registry();
            assert!(registry.ensure_covers(preset.rules().theme_keys()).is_ok());
            assert!(registry.ensure_covers(preset.catalog().pinned_themes()).is_ok());
        }
    }

    // Tests default protection per preset
    // Verified by protecting story numbers in the blends preset
    #[test]
    fn test_preset_protection() {
        assert_eq!(Preset::Stories.protection(), Protection::NumericIdAtMost(6));
        assert_eq!(Preset::Blends.protection(), Protection::Nothing);
        assert_eq!(Preset::Single.protection(), Protection::Nothing);
        assert_eq!(Preset::default(), Preset::Stories);
    }

    // Tests the single preset is the night variant of story 7
    // Verified by leaving the night item unpinned
    #[test]
    fn test_single_catalog() {
        let catalog = single_catalog();

        assert_eq!(catalog.len(), 1);
        let item = &catalog.items()[0];
        assert_eq!(item.identifier, "007");
        assert_eq!(item.title, "Bad Mobs at Night");
        assert_eq!(item.filename, "007.jpg");
        assert_eq!(item.theme, Some(ThemeKey::new("night")));
        assert_eq!(Preset::Single.catalog(), catalog);
        assert_eq!(Preset::Single.profile(), RenderProfile::single());
        assert!(Preset::Single.profile().gradient_cap.is_none());
    }
}
