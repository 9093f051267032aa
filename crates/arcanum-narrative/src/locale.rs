//! Locale classification, length bounds, and text measurement.
//!
//! CJK locales measure narrative length in characters; everything else in
//! words. The locale set is a closed enum so that bounds and conclusion
//! prefixes are exhaustively matched instead of living in string-keyed maps.

use serde::{Deserialize, Serialize};

/// The locales the reading site renders. Unknown codes fail closed to
/// [`Locale::En`], the word-counted default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English (default).
    #[serde(rename = "en")]
    En,
    /// Spanish.
    #[serde(rename = "es")]
    Es,
    /// French.
    #[serde(rename = "fr")]
    Fr,
    /// German.
    #[serde(rename = "de")]
    De,
    /// Portuguese.
    #[serde(rename = "pt")]
    Pt,
    /// Russian.
    #[serde(rename = "ru")]
    Ru,
    /// Simplified Chinese.
    #[serde(rename = "zh")]
    Zh,
    /// Traditional Chinese.
    #[serde(rename = "zh-Hant")]
    ZhHant,
    /// Japanese.
    #[serde(rename = "ja")]
    Ja,
    /// Korean.
    #[serde(rename = "ko")]
    Ko,
}

impl Locale {
    /// All supported locales.
    pub fn all() -> &'static [Self] {
        &[
            Self::En,
            Self::Es,
            Self::Fr,
            Self::De,
            Self::Pt,
            Self::Ru,
            Self::Zh,
            Self::ZhHant,
            Self::Ja,
            Self::Ko,
        ]
    }

    /// Parse a locale code such as `"en"`, `"zh-TW"`, or `"pt_BR"`.
    ///
    /// Region and script subtags are honored for the Chinese split; other
    /// subtags reduce to the primary language. Unknown codes fall back to
    /// English rather than erroring.
    pub fn parse(code: &str) -> Self {
        let normalized = code.trim().to_lowercase().replace('_', "-");
        let mut subtags = normalized.split('-');
        let primary = subtags.next().unwrap_or("");
        match primary {
            "en" => Self::En,
            "es" => Self::Es,
            "fr" => Self::Fr,
            "de" => Self::De,
            "pt" => Self::Pt,
            "ru" => Self::Ru,
            "ja" => Self::Ja,
            "ko" => Self::Ko,
            "zh" => match subtags.next() {
                Some("hant" | "tw" | "hk" | "mo") => Self::ZhHant,
                _ => Self::Zh,
            },
            _ => Self::En,
        }
    }

    /// The code this locale serializes as.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::Zh => "zh",
            Self::ZhHant => "zh-Hant",
            Self::Ja => "ja",
            Self::Ko => "ko",
        }
    }

    /// Whether narrative length is measured in characters for this locale.
    pub fn is_cjk(self) -> bool {
        matches!(self, Self::Zh | Self::ZhHant | Self::Ja | Self::Ko)
    }

    /// Target length window for deep readings in this locale.
    pub fn bounds(self) -> Bounds {
        if self.is_cjk() {
            Bounds {
                unit: LengthUnit::Chars,
                min: 300,
                max: 400,
            }
        } else {
            Bounds {
                unit: LengthUnit::Words,
                min: 120,
                max: 170,
            }
        }
    }

    /// The exact prefix the concluding paragraph must begin with.
    pub fn conclusion_prefix(self) -> &'static str {
        match self {
            Self::En => "Overall conclusion:",
            Self::Es => "Conclusión general:",
            Self::Fr => "Conclusion générale :",
            Self::De => "Gesamtfazit:",
            Self::Pt => "Conclusão geral:",
            Self::Ru => "Общий вывод:",
            Self::Zh => "总体结论：",
            Self::ZhHant => "總體結論：",
            Self::Ja => "総合的な結論：",
            Self::Ko => "종합 결론:",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How narrative length is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Character count (CJK locales).
    Chars,
    /// Whitespace-delimited word count.
    Words,
}

/// Per-locale length policy: unit plus the `[min, max]` target window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Unit the window is expressed in.
    pub unit: LengthUnit,
    /// Lower edge of the window. Text below it is accepted, never padded.
    pub min: usize,
    /// Upper edge of the window.
    pub max: usize,
}

/// Both size metrics for a text. Computed together regardless of locale so
/// callers can reason about either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measure {
    /// Character count.
    pub chars: usize,
    /// Count of whitespace-delimited non-empty tokens.
    pub words: usize,
}

impl Measure {
    /// The metric matching a length unit.
    pub fn in_unit(self, unit: LengthUnit) -> usize {
        match unit {
            LengthUnit::Chars => self.chars,
            LengthUnit::Words => self.words,
        }
    }
}

/// Measure a text in both characters and words.
pub fn measure(text: &str) -> Measure {
    Measure {
        chars: text.chars().count(),
        words: text.split_whitespace().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_primary_codes() {
        assert_eq!(Locale::parse("en"), Locale::En);
        assert_eq!(Locale::parse("ja"), Locale::Ja);
        assert_eq!(Locale::parse("RU"), Locale::Ru);
    }

    #[test]
    fn parse_region_subtags() {
        assert_eq!(Locale::parse("en-US"), Locale::En);
        assert_eq!(Locale::parse("pt_BR"), Locale::Pt);
        assert_eq!(Locale::parse("zh-CN"), Locale::Zh);
        assert_eq!(Locale::parse("zh-TW"), Locale::ZhHant);
        assert_eq!(Locale::parse("zh-Hant"), Locale::ZhHant);
        assert_eq!(Locale::parse("zh-HK"), Locale::ZhHant);
    }

    #[test]
    fn unknown_codes_fail_closed_to_english() {
        assert_eq!(Locale::parse("xx"), Locale::En);
        assert_eq!(Locale::parse(""), Locale::En);
        assert_eq!(Locale::parse("tlh-Latn"), Locale::En);
    }

    #[test]
    fn cjk_classification() {
        for locale in [Locale::Zh, Locale::ZhHant, Locale::Ja, Locale::Ko] {
            assert!(locale.is_cjk(), "{locale}");
        }
        for locale in [Locale::En, Locale::Es, Locale::Fr, Locale::De, Locale::Pt, Locale::Ru] {
            assert!(!locale.is_cjk(), "{locale}");
        }
    }

    #[test]
    fn bounds_follow_classification() {
        let zh = Locale::Zh.bounds();
        assert_eq!(zh.unit, LengthUnit::Chars);
        assert_eq!((zh.min, zh.max), (300, 400));

        let en = Locale::En.bounds();
        assert_eq!(en.unit, LengthUnit::Words);
        assert_eq!((en.min, en.max), (120, 170));
    }

    #[test]
    fn every_locale_has_a_conclusion_prefix() {
        for locale in Locale::all() {
            assert!(!locale.conclusion_prefix().is_empty(), "{locale}");
        }
    }

    #[test]
    fn measure_counts_both_metrics() {
        let m = measure("one two  three");
        assert_eq!(m.words, 3);
        assert_eq!(m.chars, 14);
    }

    #[test]
    fn measure_handles_cjk_text() {
        let m = measure("短文本。");
        assert_eq!(m.chars, 4);
        assert_eq!(m.words, 1);
    }

    #[test]
    fn measure_empty() {
        let m = measure("");
        assert_eq!((m.chars, m.words), (0, 0));
    }

    #[test]
    fn in_unit_selects_metric() {
        let m = measure("alpha beta");
        assert_eq!(m.in_unit(LengthUnit::Words), 2);
        assert_eq!(m.in_unit(LengthUnit::Chars), 10);
    }

    #[test]
    fn parse_round_trips_all_codes() {
        for locale in Locale::all() {
            assert_eq!(Locale::parse(locale.code()), *locale, "{locale}");
        }
    }
}
