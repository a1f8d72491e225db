use std::path::PathBuf;

use super::{
    models::{
        Language,
        LanguageData,
    },
    KartkiError,
};
use crate::parser::parse_flashcards;

/// Per-language raw-text collaborator. How the text is obtained (bundled
/// asset, file, network) is the implementor's business.
pub trait VocabularySource {
    async fn raw_text(&self, language: Language) -> Result<String, KartkiError>;
}

/// Reads `{language}_vocabulary.csv` files from an asset directory.
pub struct AssetSource {
    data_dir: PathBuf,
}

impl AssetSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        AssetSource { data_dir: data_dir.into() }
    }

    fn csv_path(&self, language: Language) -> PathBuf {
        self.data_dir.join(format!("{}_vocabulary.csv", language.as_str()))
    }
}

impl VocabularySource for AssetSource {
    async fn raw_text(&self, language: Language) -> Result<String, KartkiError> {
        let path = self.csv_path(language);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| KartkiError::FailedToLoadFile(format!("{}: {}", path.display(), e)))
    }
}

/// Assemble the two-language dataset from raw texts. The per-language runs
/// read disjoint inputs, so their order does not matter.
pub fn build_dataset(english_text: &str, polish_text: &str) -> LanguageData {
    LanguageData {
        english: parse_flashcards(english_text, Language::English),
        polish: parse_flashcards(polish_text, Language::Polish),
    }
}

/// Fetch both language sources and ingest them. Both-or-nothing: if either
/// fetch fails the whole run fails and no partial dataset is produced.
pub async fn load_language_data<S: VocabularySource>(
    source: &S,
) -> Result<LanguageData, KartkiError> {
    let (english_text, polish_text) = futures::try_join!(
        source.raw_text(Language::English),
        source.raw_text(Language::Polish)
    )?;

    let data = build_dataset(&english_text, &polish_text);
    println!("Loaded vocabulary: {} english, {} polish", data.english.len(), data.polish.len());
    Ok(data)
}
