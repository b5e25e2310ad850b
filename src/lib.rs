pub mod config;
pub mod core;

pub use crate::core::error::{HangeulError, Result};
pub use crate::core::final_sound::{resyllabify_final_sound, resyllabify_final_sound_with, FinalSoundMode};
pub use crate::core::unicode::{
    add_trailing_consonant, combine_compound_trailing_consonant, compose, compose_syllable,
    decompose_syllable, has_trailing_consonant, is_complete_syllable, is_compound_trailing_consonant,
    is_hangeul_symbol, leading_consonant, split_compound_trailing_consonant, split_syllable,
    split_text, strip_text, strip_trailing_consonant, trailing_consonant, vowel,
};
