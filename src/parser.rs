use crate::core::models::{
    FlashCard,
    Language,
};

/// Split one CSV line into raw fields. A `"` toggles quoted mode, and a
/// comma splits only outside of it; there is no escape for a literal quote
/// (quote doubling is not supported). Fields come back untrimmed.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    // The last field has no trailing separator, so even an empty line
    // produces one field.
    fields.push(current);
    fields
}

/// Parse the full text of one language's word list into flashcards.
///
/// The first line is always treated as the header row. Blank lines and rows
/// missing either of the two mandatory fields are dropped silently and do
/// not consume an id slot: ids number the accepted records 1-based in file
/// order.
pub fn parse_flashcards(csv_content: &str, language: Language) -> Vec<FlashCard> {
    let mut cards = Vec::new();

    for line in csv_content.split('\n').skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields = tokenize_line(line);
        if let Some(card) = build_card(&fields, language, cards.len() + 1) {
            cards.push(card);
        }
    }

    cards
}

fn build_card(fields: &[String], language: Language, sequence: usize) -> Option<FlashCard> {
    if fields.len() < 2 {
        return None;
    }

    let item = fields[0].trim();
    let translation = fields[1].trim();
    if item.is_empty() || translation.is_empty() {
        return None;
    }

    Some(FlashCard {
        id: format!("{}_{}", language.as_str(), sequence),
        item: item.to_string(),
        translation: translation.to_string(),
        context: optional_field(fields, 2),
        context_translation: optional_field(fields, 3),
        is_learned: false,
        language,
    })
}

fn optional_field(fields: &[String], index: usize) -> Option<String> {
    fields
        .get(index)
        .map(|field| field.trim())
        .filter(|field| !field.is_empty())
        .map(str::to_string)
}
