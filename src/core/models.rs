use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Polish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Polish];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Polish => "polish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashCard {
    pub id: String, // "{language}_{n}", n counted 1-based over accepted rows
    pub item: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_translation: Option<String>,
    pub is_learned: bool,
    pub language: Language,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageData {
    pub english: Vec<FlashCard>,
    pub polish: Vec<FlashCard>,
}

impl LanguageData {
    pub fn cards(&self, language: Language) -> &[FlashCard] {
        match language {
            Language::English => &self.english,
            Language::Polish => &self.polish,
        }
    }

    pub fn cards_mut(&mut self, language: Language) -> &mut Vec<FlashCard> {
        match language {
            Language::English => &mut self.english,
            Language::Polish => &mut self.polish,
        }
    }

    pub fn total(&self) -> usize {
        self.english.len() + self.polish.len()
    }

    pub fn learned_count(&self, language: Language) -> usize {
        self.cards(language).iter().filter(|card| card.is_learned).count()
    }

    /// Share of learned cards for one language, as a 0-100 percentage.
    pub fn progress(&self, language: Language) -> f32 {
        let cards = self.cards(language);
        if cards.is_empty() {
            return 0.0;
        }
        self.learned_count(language) as f32 / cards.len() as f32 * 100.0
    }
}
