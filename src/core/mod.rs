//! 한글 음절 분해/조합 및 종성 연음 변환

pub mod error;
pub mod final_sound;
pub mod unicode;
