//! Tests for label selection, word wrapping and placement

#[cfg(test)]
mod tests {
    use placard::catalog::Item;
    use placard::classify::ThemeKey;
    use placard::render::layout::{
        Anchor, BadgeSpec, BadgeText, LabelSource, compute_layout, wrap_words,
    };
    use placard::render::{BuiltinFont, RenderProfile, Typeface};

    const CANVAS: (u32, u32) = (800, 600);

    fn story(identifier: &str, title: &str) -> Item {
        Item::new(identifier, title, format!("{identifier}.jpg"))
    }

    // Tests a title wider than the limit wraps into lines that each fit
    // Verified by measuring only the new word
    #[test]
    fn test_wrap_fits_limit() {
        let measure = |s: &str| BuiltinFont.measure(s, 40.0).width;
        let lines = wrap_words("Playing with Friends", 400, measure);

        assert_eq!(lines, vec!["Playing with", "Friends"]);
        assert!(lines.iter().all(|line| measure(line) <= 400));
    }

    // Tests a single word wider than the limit still gets its own line
    // Verified by splitting long words
    #[test]
    fn test_wrap_oversize_word() {
        let measure = |s: &str| s.len() as u32 * 10;
        let lines = wrap_words("a supercalifragilistic b", 50, measure);

        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    // Tests empty and whitespace-only input produce no lines
    // Verified by pushing an empty final line
    #[test]
    fn test_wrap_empty() {
        let measure = |s: &str| s.len() as u32;

        assert!(wrap_words("", 100, measure).is_empty());
        assert!(wrap_words("   ", 100, measure).is_empty());
    }

    // Tests the label source picks the uppercased first token or the title
    // Verified by keeping the token lowercase
    #[test]
    fn test_label_source() {
        let item = Item::new("br-words", "BR Words", "br-words.jpg");

        assert_eq!(LabelSource::FirstToken.text(&item), "BR");
        assert_eq!(LabelSource::Title.text(&item), "BR Words");
        assert_eq!(
            LabelSource::FirstToken.text(&Item::new("", "", "x.jpg")),
            ""
        );
    }

    // Tests a blend label is one line centred on the canvas
    // Verified by anchoring the label at the top edge
    #[test]
    fn test_blend_layout_centred() {
        let item = Item::new("br-words", "BR Words", "br-words.jpg");
        let layout = compute_layout(
            &item,
            &ThemeKey::new("r-blends"),
            &RenderProfile::blends(),
            &BuiltinFont,
            CANVAS,
        );

        assert_eq!(layout.lines.len(), 1);
        assert!(layout.badges.is_empty());
        let line = &layout.lines[0];
        assert_eq!(line.text, "BR");
        assert_eq!((line.extent.width, line.extent.height), (275, 175));
        assert_eq!((line.x, line.y), (262, 212));
    }

    // Tests a long story title wraps into a vertically centred block
    // Verified by ignoring the margin
    #[test]
    fn test_story_title_wraps() {
        let item = story("001", "My First Day in Minecraft");
        let layout = compute_layout(
            &item,
            &ThemeKey::new("minecraft"),
            &RenderProfile::stories(),
            &BuiltinFont,
            CANVAS,
        );

        let texts: Vec<&str> = layout.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["My First Day in", "Minecraft"]);
        assert_eq!((layout.lines[0].x, layout.lines[0].y), (177, 257));
        assert_eq!((layout.lines[1].x, layout.lines[1].y), (267, 307));
        assert!(layout.lines.iter().all(|l| l.extent.width <= 700));
    }

    // Tests story badges carry the number and theme label
    // Verified by centring the number badge
    #[test]
    fn test_story_badges() {
        let item = story("021", "Pikachu's Adventure");
        let layout = compute_layout(
            &item,
            &ThemeKey::new("pokemon"),
            &RenderProfile::stories(),
            &BuiltinFont,
            CANVAS,
        );

        assert_eq!(layout.badges.len(), 2);
        let number = &layout.badges[0];
        assert_eq!(number.text, "#021");
        assert_eq!((number.x, number.y), (30, 30));

        let label = &layout.badges[1];
        assert_eq!(label.text, "POKEMON");
        assert_eq!(label.extent.width, 164);
        assert_eq!((label.x, label.y), (318, 520));
    }

    // Tests an empty title leaves only the badges
    // Verified by emitting a blank line for an empty title
    #[test]
    fn test_empty_title() {
        let item = story("007", "");
        let layout = compute_layout(
            &item,
            &ThemeKey::new("minecraft"),
            &RenderProfile::stories(),
            &BuiltinFont,
            CANVAS,
        );

        assert!(layout.lines.is_empty());
        assert_eq!(layout.badges.len(), 2);
    }

    // Tests the night image wraps its title and pins the number bottom-right
    // Verified by placing the bottom-right badge by its top-left corner
    #[test]
    fn test_single_layout() {
        let item = story("007", "Bad Mobs at Night").with_theme("night");
        let layout = compute_layout(
            &item,
            &ThemeKey::new("night"),
            &RenderProfile::single(),
            &BuiltinFont,
            CANVAS,
        );

        let texts: Vec<&str> = layout.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Bad Mobs at", "Night"]);
        assert_eq!((layout.lines[0].x, layout.lines[0].y), (107, 228));
        assert_eq!((layout.lines[1].x, layout.lines[1].y), (269, 308));

        assert_eq!(layout.badges.len(), 1);
        let number = &layout.badges[0];
        assert_eq!(number.text, "#007");
        assert_eq!((number.extent.width, number.extent.height), (92, 28));
        assert_eq!((number.x, number.y), (678, 542));
        assert_eq!(number.stroke, 0);
    }

    // Tests a bottom-right anchor measures the inset from the text's far edges
    // Verified by leaving the text width out of the placement
    #[test]
    fn test_bottom_right_anchor() {
        let mut profile = RenderProfile::blends();
        profile.badges.push(BadgeSpec {
            text: BadgeText::ThemeLabel,
            anchor: Anchor::BottomRight {
                right: 10,
                bottom: 0,
            },
            size: 8.0,
            stroke: 0,
        });
        let item = Item::new("br-words", "BR Words", "br-words.jpg");
        let layout = compute_layout(&item, &ThemeKey::new("r"), &profile, &BuiltinFont, CANVAS);

        let badge = &layout.badges[0];
        assert_eq!(badge.text, "R");
        assert_eq!((badge.extent.width, badge.extent.height), (5, 7));
        assert_eq!((badge.x, badge.y), (785, 593));
    }
}
