use kartki::{
    core::pipeline::{
        load_language_data,
        AssetSource,
    },
    persistence::Storage,
    Language,
};

const ASSET_DATA_DIR: &str = "assets/data";

#[tokio::main]
async fn main() {
    let storage = Storage::new();

    let cards = match storage.load_cards() {
        Some(saved) => {
            println!("Using saved vocabulary data ({} cards)", saved.total());
            saved
        }
        None => {
            let source = AssetSource::new(ASSET_DATA_DIR);
            let data = match load_language_data(&source).await {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            storage.save_cards(&data);
            data
        }
    };

    for language in Language::ALL {
        let total = cards.cards(language).len();
        println!(
            "{}: {} words, {} learned ({:.1}%)",
            language,
            total,
            cards.learned_count(language),
            cards.progress(language)
        );
        if let Some(card) = cards.cards(language).first() {
            println!("  sample: \"{}\" -> \"{}\"", card.item, card.translation);
        }
    }

    let current_language = storage.load_current_language();
    let current_index = storage.load_current_card_index();
    println!(
        "Current language: {}, card {} of {}",
        current_language,
        current_index + 1,
        cards.cards(current_language).len()
    );
}
