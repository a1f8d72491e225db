use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::{
    models::{
        Language,
        LanguageData,
    },
    KartkiError,
};

const APP_NAME: &str = "kartki";

/// The fixed set of persisted values. Everything is stored wholesale under
/// its own key; there is no partial update and no migration logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Cards,
    CurrentLanguage,
    CurrentCardIndex,
}

impl StorageKey {
    pub fn filename(&self) -> &'static str {
        match self {
            StorageKey::Cards => "flash_cards_data.json",
            StorageKey::CurrentLanguage => "current_language.json",
            StorageKey::CurrentCardIndex => "current_card_index.json",
        }
    }
}

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join(APP_NAME)
    } else {
        PathBuf::from(".")
    }
}

/// JSON-file-backed key-value store for the app state. Read failures count
/// as "no saved data"; write failures are logged and swallowed, since the
/// data can always be re-ingested.
pub struct Storage {
    data_dir: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage {
    pub fn new() -> Self {
        Storage { data_dir: get_app_data_dir() }
    }

    pub fn with_dir(data_dir: impl Into<PathBuf>) -> Self {
        Storage { data_dir: data_dir.into() }
    }

    fn file_path(&self, key: StorageKey) -> PathBuf {
        self.data_dir.join(key.filename())
    }

    fn save_json<T: Serialize>(&self, key: StorageKey, data: &T) -> Result<(), KartkiError> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(data)?;
        fs::write(self.file_path(key), json)?;
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, KartkiError> {
        let file_path = self.file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    pub fn save_cards(&self, cards: &LanguageData) {
        if let Err(e) = self.save_json(StorageKey::Cards, cards) {
            eprintln!("Error saving cards: {}", e);
        }
    }

    pub fn load_cards(&self) -> Option<LanguageData> {
        match self.load_json(StorageKey::Cards) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error loading cards: {}", e);
                None
            }
        }
    }

    pub fn save_current_language(&self, language: Language) {
        if let Err(e) = self.save_json(StorageKey::CurrentLanguage, &language) {
            eprintln!("Error saving current language: {}", e);
        }
    }

    pub fn load_current_language(&self) -> Language {
        match self.load_json(StorageKey::CurrentLanguage) {
            Ok(Some(language)) => language,
            Ok(None) => Language::English,
            Err(e) => {
                eprintln!("Error loading current language: {}", e);
                Language::English
            }
        }
    }

    pub fn save_current_card_index(&self, index: usize) {
        if let Err(e) = self.save_json(StorageKey::CurrentCardIndex, &index) {
            eprintln!("Error saving current card index: {}", e);
        }
    }

    pub fn load_current_card_index(&self) -> usize {
        match self.load_json(StorageKey::CurrentCardIndex) {
            Ok(Some(index)) => index,
            Ok(None) => 0,
            Err(e) => {
                eprintln!("Error loading current card index: {}", e);
                0
            }
        }
    }

    /// Flip one card's learned flag. Reads the whole aggregate back, mutates
    /// the matching record in place and rewrites the whole aggregate; an
    /// unknown id is a no-op.
    pub fn update_card_learned(&self, card_id: &str, is_learned: bool, language: Language) {
        let mut data = match self.load_cards() {
            Some(data) => data,
            None => return,
        };

        if let Some(card) = data.cards_mut(language).iter_mut().find(|card| card.id == card_id) {
            card.is_learned = is_learned;
            self.save_cards(&data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::build_dataset;

    fn temp_storage(name: &str) -> Storage {
        let dir =
            std::env::temp_dir().join(format!("kartki_storage_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        Storage::with_dir(dir)
    }

    fn sample_cards() -> LanguageData {
        build_dataset(
            "Item,Translation,Context,Context translation\nannual,годовой,annual payment for life,",
            "Item,Translation,Context,Context translation\nzapewnić,обеспечить,,",
        )
    }

    #[test]
    fn cards_round_trip() {
        let storage = temp_storage("cards");
        let cards = sample_cards();
        storage.save_cards(&cards);
        assert_eq!(storage.load_cards(), Some(cards));
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let storage = temp_storage("defaults");
        assert_eq!(storage.load_cards(), None);
        assert_eq!(storage.load_current_language(), Language::English);
        assert_eq!(storage.load_current_card_index(), 0);
    }

    #[test]
    fn corrupt_cards_file_counts_as_no_saved_data() {
        let storage = temp_storage("corrupt");
        fs::create_dir_all(&storage.data_dir).unwrap();
        fs::write(storage.file_path(StorageKey::Cards), "not json").unwrap();
        assert_eq!(storage.load_cards(), None);
    }

    #[test]
    fn language_and_index_round_trip() {
        let storage = temp_storage("state");
        storage.save_current_language(Language::Polish);
        storage.save_current_card_index(7);
        assert_eq!(storage.load_current_language(), Language::Polish);
        assert_eq!(storage.load_current_card_index(), 7);
    }

    #[test]
    fn update_card_learned_rewrites_aggregate() {
        let storage = temp_storage("learned");
        storage.save_cards(&sample_cards());

        storage.update_card_learned("polish_1", true, Language::Polish);

        let data = storage.load_cards().unwrap();
        assert!(data.polish[0].is_learned);
        assert!(!data.english[0].is_learned);
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let storage = temp_storage("unknown");
        let cards = sample_cards();
        storage.save_cards(&cards);

        storage.update_card_learned("english_99", true, Language::English);

        assert_eq!(storage.load_cards(), Some(cards));
    }
}
