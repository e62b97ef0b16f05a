//! Niveles de un ingrediente y los vocabularios con los que se imprimen
use std::borrow::Cow;

use serde::Deserialize;

/// Nivel ("cuanto") de un ingrediente dentro de una bebida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    #[serde(alias = "middle")]
    Mid,
    Low,
}

/// Las tres etiquetas con las que se imprime cada nivel.
/// Es inmutable una vez construido, y barato de clonar para los vocabularios predefinidos.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelVocabulary {
    high: Cow<'static, str>,
    mid: Cow<'static, str>,
    low: Cow<'static, str>,
}

/// 大 / 中 / 小
pub const BIG_SMALL: LevelVocabulary = LevelVocabulary::fixed("大", "中", "小");
/// 高 / 中 / 低
pub const HIGH_LOW: LevelVocabulary = LevelVocabulary::fixed("高", "中", "低");
/// 多 / 中 / 少
pub const MORE_LESS: LevelVocabulary = LevelVocabulary::fixed("多", "中", "少");
/// Sin etiquetas. Es el que se usa para un ingrediente sin vocabulario registrado.
pub const EMPTY: LevelVocabulary = LevelVocabulary::fixed("", "", "");

impl LevelVocabulary {
    pub fn new(high: impl Into<String>, mid: impl Into<String>, low: impl Into<String>) -> Self {
        LevelVocabulary {
            high: Cow::Owned(high.into()),
            mid: Cow::Owned(mid.into()),
            low: Cow::Owned(low.into()),
        }
    }

    const fn fixed(high: &'static str, mid: &'static str, low: &'static str) -> Self {
        LevelVocabulary {
            high: Cow::Borrowed(high),
            mid: Cow::Borrowed(mid),
            low: Cow::Borrowed(low),
        }
    }

    pub fn label_for(&self, level: Level) -> &str {
        match level {
            Level::High => &self.high,
            Level::Mid => &self.mid,
            Level::Low => &self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_the_label_of_each_level() {
        assert_eq!("大", BIG_SMALL.label_for(Level::High));
        assert_eq!("中", BIG_SMALL.label_for(Level::Mid));
        assert_eq!("小", BIG_SMALL.label_for(Level::Low));
        assert_eq!("少", MORE_LESS.label_for(Level::Low));
    }

    #[test]
    fn should_return_empty_labels_for_the_empty_vocabulary() {
        assert_eq!("", EMPTY.label_for(Level::High));
        assert_eq!("", EMPTY.label_for(Level::Mid));
        assert_eq!("", EMPTY.label_for(Level::Low));
    }

    #[test]
    fn should_accept_a_user_vocabulary() {
        let vocabulary = LevelVocabulary::new("超", "普", "微");
        assert_eq!("微", vocabulary.label_for(Level::Low));
        assert_eq!(vocabulary, LevelVocabulary::new("超", "普", "微"));
    }

    #[test]
    fn should_deserialize_levels_and_vocabularies() {
        let level: Level = serde_json::from_str("\"middle\"").unwrap();
        assert_eq!(Level::Mid, level);

        let vocabulary: LevelVocabulary =
            serde_json::from_str(r#"{ "high": "大", "mid": "中", "low": "小" }"#).unwrap();
        assert_eq!(BIG_SMALL, vocabulary);
    }
}
