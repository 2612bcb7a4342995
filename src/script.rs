use strum_macros::{AsRefStr, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Writing system, named as in the Unicode `Script` property,
/// `Kana` joins Hiragana and Katakana.
///
/// Declaration order is the order scripts are tried in,
/// the first declared wins on an equal occurrence.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Script {
    Latin,
    Cyrillic,
    Arabic,
    Devanagari,
    Hebrew,
    Han,
    Hangul,
    /// Hiragana and Katakana
    Kana,
    Greek,
    Armenian,
    Georgian,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    Khmer,
    Sinhala,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Gujarati,
    Gurmukhi,
    Oriya,
    Bengali,
    Ethiopic,
}

impl Script {
    /// Regex class matching one char of this script
    pub const fn pattern(self) -> &'static str {
        use Script::*;
        match self {
            Latin => r"\p{Latin}",
            Cyrillic => r"\p{Cyrillic}",
            Arabic => r"\p{Arabic}",
            Devanagari => r"\p{Devanagari}",
            Hebrew => r"\p{Hebrew}",
            Han => r"\p{Han}",
            Hangul => r"\p{Hangul}",
            Kana => r"[\p{Hiragana}\p{Katakana}]",
            Greek => r"\p{Greek}",
            Armenian => r"\p{Armenian}",
            Georgian => r"\p{Georgian}",
            Thai => r"\p{Thai}",
            Lao => r"\p{Lao}",
            Tibetan => r"\p{Tibetan}",
            Myanmar => r"\p{Myanmar}",
            Khmer => r"\p{Khmer}",
            Sinhala => r"\p{Sinhala}",
            Tamil => r"\p{Tamil}",
            Telugu => r"\p{Telugu}",
            Kannada => r"\p{Kannada}",
            Malayalam => r"\p{Malayalam}",
            Gujarati => r"\p{Gujarati}",
            Gurmukhi => r"\p{Gurmukhi}",
            Oriya => r"\p{Oriya}",
            Bengali => r"\p{Bengali}",
            Ethiopic => r"\p{Ethiopic}",
        }
    }

    /// Language identified by the script alone
    pub const fn singleton_language(self) -> Option<&'static str> {
        use Script::*;
        Some(match self {
            Latin | Cyrillic | Arabic | Devanagari | Hebrew => return None,
            Han => "cmn",
            Hangul => "kor",
            Kana => "jpn",
            Greek => "ell",
            Armenian => "hye",
            Georgian => "kat",
            Thai => "tha",
            Lao => "lao",
            Tibetan => "bod",
            Myanmar => "mya",
            Khmer => "khm",
            Sinhala => "sin",
            Tamil => "tam",
            Telugu => "tel",
            Kannada => "kan",
            Malayalam => "mal",
            Gujarati => "guj",
            Gurmukhi => "pan",
            Oriya => "ory",
            Bengali => "ben",
            Ethiopic => "amh",
        })
    }

    #[inline]
    pub fn into_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::Script;
    use ::core::str::FromStr;
    use regex::Regex;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_patterns_compile() {
        for script in Script::iter() {
            Regex::new(script.pattern()).unwrap();
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Script::from_str("Cyrillic").unwrap(), Script::Cyrillic);
        assert_eq!(Script::Hangul.into_str(), "Hangul");
        assert!(Script::from_str("Klingon").is_err());
    }

    #[test]
    fn test_singletons_count() {
        let singles = Script::iter()
            .filter(|s| s.singleton_language().is_some())
            .count();
        assert_eq!(singles, Script::COUNT - 5);
        assert_eq!(Script::Kana.singleton_language(), Some("jpn"));
        assert_eq!(Script::Latin.singleton_language(), None);
    }
}
