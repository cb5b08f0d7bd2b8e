//! Generation settings.

use crate::i18n::DEFAULT_LANG;
use crate::layout::Color;
use crate::render::FontConfig;

/// Colors applied across every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Body text.
    pub foreground: Color,
    /// Descriptions and other de-emphasized text.
    pub secondary: Color,
    /// Hyperlinked text.
    pub link: Color,
    /// Row separators.
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            foreground: Color::BLACK,
            secondary: Color::gray(100),
            link: Color::BLUE,
            border: Color::gray(200),
        }
    }
}

/// Per-request configuration handed to the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Requested display language; unknown languages fall back to English.
    pub lang: String,
    pub fonts: FontConfig,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lang: DEFAULT_LANG.to_string(),
            fonts: FontConfig::default(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        let lang = lang.into();
        if !lang.trim().is_empty() {
            self.lang = lang;
        }
        self
    }

    pub fn with_fonts(mut self, fonts: FontConfig) -> Self {
        self.fonts = fonts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.lang, "en");
        assert_eq!(config.theme.border, Color::gray(200));
        assert!(!config.fonts.uses_custom_fonts());
    }

    #[test]
    fn test_blank_language_keeps_default() {
        assert_eq!(Config::default().with_lang("").lang, "en");
        assert_eq!(Config::default().with_lang("ja").lang, "ja");
    }
}
