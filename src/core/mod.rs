pub mod errors;
pub mod models;
pub mod pipeline;

pub use errors::KartkiError;
pub use models::{ FlashCard, Language, LanguageData };
