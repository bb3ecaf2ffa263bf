//! Localized Text Model

use serde::{Deserialize, Serialize};

/// Display languages supported by the storefront
///
/// `ru` is the mandatory fallback language: every localized field must
/// carry a `ru` value, the other languages are optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    Ro,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Ro => "ro",
            Language::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Language::Ru),
            "ro" => Ok(Language::Ro),
            "en" => Ok(Language::En),
            _ => Err(()),
        }
    }
}

/// Per-language text value
///
/// Legacy records store these fields as a bare string; the serde boundary
/// normalizes both shapes through [`TextValue`], so application code only
/// ever sees the per-language form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TextValue")]
pub struct LocalizedText {
    #[serde(default)]
    pub ru: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(ru: impl Into<String>) -> Self {
        Self {
            ru: ru.into(),
            ro: None,
            en: None,
        }
    }

    pub fn with_translations(
        ru: impl Into<String>,
        ro: impl Into<String>,
        en: impl Into<String>,
    ) -> Self {
        Self {
            ru: ru.into(),
            ro: Some(ro.into()),
            en: Some(en.into()),
        }
    }

    /// Text in the requested language, falling back to `ru` when the
    /// translation is absent or empty.
    pub fn get(&self, lang: Language) -> &str {
        let translation = match lang {
            Language::Ru => Some(self.ru.as_str()),
            Language::Ro => self.ro.as_deref(),
            Language::En => self.en.as_deref(),
        };
        match translation {
            Some(text) if !text.is_empty() => text,
            _ => &self.ru,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ru.is_empty() && self.ro.is_none() && self.en.is_none()
    }
}

/// Wire form of a localized field
///
/// Current records store a `{ru, ro, en}` map; legacy records a bare
/// string, which becomes the `ru` value.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextValue {
    Localized {
        #[serde(default)]
        ru: Option<String>,
        #[serde(default)]
        ro: Option<String>,
        #[serde(default)]
        en: Option<String>,
    },
    Plain(String),
}

impl From<TextValue> for LocalizedText {
    fn from(value: TextValue) -> Self {
        match value {
            TextValue::Plain(text) => LocalizedText::new(text),
            TextValue::Localized { ru, ro, en } => LocalizedText {
                ru: ru.unwrap_or_default(),
                ro,
                en,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_to_ru() {
        let text = LocalizedText::new("Салаты");
        assert_eq!(text.get(Language::Ru), "Салаты");
        assert_eq!(text.get(Language::Ro), "Салаты");
        assert_eq!(text.get(Language::En), "Салаты");
    }

    #[test]
    fn test_translation_preferred() {
        let text = LocalizedText::with_translations("Салаты", "Salate", "Salads");
        assert_eq!(text.get(Language::Ro), "Salate");
        assert_eq!(text.get(Language::En), "Salads");
    }

    #[test]
    fn test_empty_translation_falls_back() {
        let mut text = LocalizedText::new("Салаты");
        text.en = Some(String::new());
        assert_eq!(text.get(Language::En), "Салаты");
    }

    #[test]
    fn test_legacy_plain_string() {
        let text: LocalizedText = serde_json::from_value(serde_json::json!("Борщ")).unwrap();
        assert_eq!(text.ru, "Борщ");
        assert_eq!(text.ro, None);
    }

    #[test]
    fn test_map_without_ru() {
        let text: LocalizedText =
            serde_json::from_value(serde_json::json!({ "en": "Soup" })).unwrap();
        assert_eq!(text.ru, "");
        assert_eq!(text.get(Language::En), "Soup");
    }
}
