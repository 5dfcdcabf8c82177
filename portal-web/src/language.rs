use std::collections::HashMap;

/// Language the portal is served in.
pub const DEFAULT_LANGUAGE: &str = "fr";

/// Information about a supported language
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        DEFAULT_LANGUAGE,
        LanguageInfo {
            code: DEFAULT_LANGUAGE,
            translation: include_str!("../translations/fr.json"),
            native_name: "Français",
        },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;

    fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
        key.split('.').try_fold(root, |node, part| node.get(part))
    }

    #[test]
    fn test_french_is_default() {
        let languages = supported_languages();
        let info = languages.get(DEFAULT_LANGUAGE).unwrap();
        assert_eq!(info.code, "fr");
        assert_eq!(info.native_name, "Français");
    }

    #[test]
    fn test_every_route_has_title_and_icon() {
        let translation: serde_json::Value =
            serde_json::from_str(supported_languages()[DEFAULT_LANGUAGE].translation).unwrap();

        for route in MainRoute::iter() {
            let key = route.i18n_key();
            assert!(
                lookup(&translation, &format!("{key}.title")).is_some(),
                "missing title for {key}"
            );
            assert!(
                lookup(&translation, &format!("{key}.icon")).is_some(),
                "missing icon for {key}"
            );
        }
    }
}
