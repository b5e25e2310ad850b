//! 종성 연음 변환
//!
//! 마지막 음절의 종성을 떼어 뒤로 넘깁니다.
//! 복합 종성은 앞 자음만 음절에 남기고 뒤 자음을 넘깁니다.
//! ex: "가낙" -> "가나ㄱ", "가낣" -> "가날ㅂ"

use super::error::{HangeulError, Result};
use super::unicode::{
    add_trailing_consonant, is_complete_syllable, split_compound_trailing_consonant,
    strip_trailing_consonant, trailing_consonant,
};

/// 마지막 글자가 완성형 한글이 아닐 때의 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinalSoundMode {
    /// 입력을 그대로 반환
    #[default]
    Lenient,
    /// `HangeulError::NotASyllable` 반환
    Strict,
}

/// 종성 연음된 문자열로 변환 (관대 모드)
pub fn resyllabify_final_sound(s: &str) -> Result<String> {
    resyllabify_final_sound_with(s, FinalSoundMode::Lenient)
}

/// 종성 연음된 문자열로 변환
///
/// 빈 문자열은 `HangeulError::EmptyInput`
pub fn resyllabify_final_sound_with(s: &str, mode: FinalSoundMode) -> Result<String> {
    let mut chars = s.chars();
    let last = chars.next_back().ok_or(HangeulError::EmptyInput)?;
    let front = chars.as_str();

    if mode == FinalSoundMode::Strict && !is_complete_syllable(last) {
        return Err(HangeulError::NotASyllable(last));
    }

    let final_sound = trailing_consonant(last);
    let stripped = strip_trailing_consonant(last);

    let mut result = String::with_capacity(s.len() + 3);
    result.push_str(front);

    match final_sound {
        Some(jong) => match split_compound_trailing_consonant(jong) {
            Some((first, second)) => {
                // 앞 자음은 음절에 남기고 뒤 자음만 넘김
                let new_last = add_trailing_consonant(stripped, first)?;
                log::trace!("복합 종성 연음: {} -> {}{}", last, new_last, second);
                result.push(new_last);
                result.push(second);
            }
            None => {
                log::trace!("종성 연음: {} -> {}{}", last, stripped, jong);
                result.push(stripped);
                result.push(jong);
            }
        },
        None => {
            log::debug!("종성 없음, 연음 생략: '{}'", last);
            result.push(last);
        }
    }

    Ok(result)
}
