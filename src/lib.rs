pub mod core;
pub mod parser;
pub mod persistence;

pub use crate::core::{
    models::{
        FlashCard,
        Language,
        LanguageData,
    },
    KartkiError,
};
