//! The one piece of localized text the engine needs itself: the instruction
//! prefix for fraction-reduction prompts. Every other prompt is a formatted
//! expression ("7 × 8 = ?") and language-independent. Full UI localization
//! belongs to the surrounding application.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported UI language tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Ar,
    Dr,
    Es,
    Fa,
    Fr,
    Ku,
    Ka,
    So,
    Ti,
    Tr,
    Uk,
}

impl Language {
    /// Parse a BCP-47-ish tag; anything unknown falls back to English.
    pub fn from_tag(tag: &str) -> Language {
        match tag {
            "de" => Language::De,
            "ar" => Language::Ar,
            "dr" => Language::Dr,
            "es" => Language::Es,
            "fa" => Language::Fa,
            "fr" => Language::Fr,
            "ku" => Language::Ku,
            "ka" => Language::Ka,
            "so" => Language::So,
            "ti" => Language::Ti,
            "tr" => Language::Tr,
            "uk" => Language::Uk,
            _ => Language::En,
        }
    }

    /// "Fully reduce" instruction, used as the fraction prompt prefix.
    pub fn fully_reduce(self) -> &'static str {
        match self {
            Language::En => "Fully Reduce",
            Language::De => "Kürze vollständig",
            Language::Ar => "اختزل بالكامل",
            Language::Dr => "به طور کامل ساده کنید",
            Language::Es => "Reducir completamente",
            Language::Fa => "کاملاً ساده کنید",
            Language::Fr => "Réduire complètement",
            Language::Ku => "Bi tevahî bikar bîne",
            Language::Ka => "სრულად შემცირება",
            Language::So => "Si buuxda u yaree",
            Language::Ti => "ብሙሉእ ንነካካ",
            Language::Tr => "Tamamen Sadeleştir",
            Language::Uk => "Повністю скоротіть",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Language::En => "en",
            Language::De => "de",
            Language::Ar => "ar",
            Language::Dr => "dr",
            Language::Es => "es",
            Language::Fa => "fa",
            Language::Fr => "fr",
            Language::Ku => "ku",
            Language::Ka => "ka",
            Language::So => "so",
            Language::Ti => "ti",
            Language::Tr => "tr",
            Language::Uk => "uk",
        };
        write!(f, "{}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_falls_back_to_english() {
        assert_eq!(Language::from_tag("xx"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[test]
    fn tag_round_trip() {
        for lang in [Language::De, Language::Uk, Language::Tr] {
            assert_eq!(Language::from_tag(&lang.to_string()), lang);
        }
    }
}
