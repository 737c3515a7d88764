//! Tests for theme lookup and coverage checks

#[cfg(test)]
mod tests {
    use placard::PlacardError;
    use placard::classify::ThemeKey;
    use placard::theme::{ThemeRegistry, ThemeStyle};

    fn registry() -> ThemeRegistry {
        [
            ("warm", ThemeStyle::new([255, 0, 0], [0, 0, 0], [255, 255, 255])),
            ("cool", ThemeStyle::new([0, 0, 255], [0, 0, 0], [255, 255, 255])),
        ]
        .into_iter()
        .collect()
    }

    // Tests registered keys resolve to their styles
    // Verified by looking up keys case-insensitively
    #[test]
    fn test_lookup_hit() {
        let registry = registry();
        let style = registry.lookup(&ThemeKey::new("cool"));

        assert!(matches!(style, Ok(s) if s.background.0 == [0, 0, 255]));
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    // Tests a missing key is a configuration error naming the key
    // Verified by falling back to the first style
    #[test]
    fn test_lookup_miss_is_configuration_error() {
        let registry = registry();
        let result = registry.lookup(&ThemeKey::new("neon"));

        match result {
            Err(PlacardError::Configuration { theme }) => assert_eq!(theme, "neon"),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    // Tests coverage checks accept known keys and reject the first unknown one
    // Verified by returning Ok after the first unknown key
    #[test]
    fn test_ensure_covers() {
        let registry = registry();
        let known = [ThemeKey::new("warm"), ThemeKey::new("cool")];
        let mixed = [ThemeKey::new("warm"), ThemeKey::new("lava")];

        assert!(registry.ensure_covers(&known).is_ok());
        assert!(registry.ensure_covers(&mixed).is_err());
        assert!(registry.ensure_covers(std::iter::empty()).is_ok());
    }

    // Tests keys iterate in sorted order
    // Verified by storing styles in a hash map
    #[test]
    fn test_keys_sorted() {
        let registry = registry();
        let keys: Vec<&str> = registry.keys().map(ThemeKey::as_str).collect();

        assert_eq!(keys, vec!["cool", "warm"]);
        assert!(registry.contains(&ThemeKey::new("warm")));
        assert!(ThemeRegistry::default().is_empty());
    }
}
