//! 유니코드 한글 조합/분해 유틸리티
//!
//! 완성형 한글 음절(가~힣)을 초성/중성/종성으로 분해하고 다시 조합합니다.
//! 자모는 모두 호환용 자모(U+3131~U+3163)로 표현합니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::error::{HangeulError, Result};

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 테이블 (인덱스 순서)
#[rustfmt::skip]
const CHOSEONG_TABLE: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블 (인덱스 순서)
#[rustfmt::skip]
const JUNGSEONG_TABLE: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 테이블 (0번은 종성 없음)
#[rustfmt::skip]
const JONGSEONG_TABLE: [Option<char>; 28] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

lazy_static! {
    /// 자모 -> 초성 인덱스
    static ref CHOSEONG_INDEX: HashMap<char, u32> = index_map(CHOSEONG_TABLE.iter().copied().map(Some));
    /// 자모 -> 중성 인덱스
    static ref JUNGSEONG_INDEX: HashMap<char, u32> = index_map(JUNGSEONG_TABLE.iter().copied().map(Some));
    /// 자모 -> 종성 인덱스 (1~27)
    static ref JONGSEONG_INDEX: HashMap<char, u32> = index_map(JONGSEONG_TABLE.iter().copied());
}

fn index_map(table: impl Iterator<Item = Option<char>>) -> HashMap<char, u32> {
    table
        .enumerate()
        .filter_map(|(i, jamo)| jamo.map(|c| (c, i as u32)))
        .collect()
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_complete_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 자모 기호로 음절 조합 (종성 없으면 None)
/// 테이블에 없는 자모가 있으면 None
pub fn compose(leading: char, vowel: char, trailing: Option<char>) -> Option<char> {
    let cho = *CHOSEONG_INDEX.get(&leading)?;
    let jung = *JUNGSEONG_INDEX.get(&vowel)?;
    let jong = match trailing {
        Some(t) => *JONGSEONG_INDEX.get(&t)?,
        None => 0,
    };
    compose_syllable(cho, jung, jong)
}

/// 완성형 한글(가-힣)인지 확인
pub fn is_complete_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 한글 또는 낱자모(ㄱ-ㅎ, ㅏ-ㅣ)인지 확인
pub fn is_hangeul_symbol(c: char) -> bool {
    is_complete_syllable(c) || ('ㄱ'..='ㅎ').contains(&c) || ('ㅏ'..='ㅣ').contains(&c)
}

/// 종성이 있는 완성형 한글인지 확인
pub fn has_trailing_consonant(c: char) -> bool {
    matches!(decompose_syllable(c), Some((_, _, jong)) if jong != 0)
}

/// 초성 자모
pub fn leading_consonant(c: char) -> Option<char> {
    decompose_syllable(c).map(|(cho, _, _)| CHOSEONG_TABLE[cho as usize])
}

/// 중성 자모
pub fn vowel(c: char) -> Option<char> {
    decompose_syllable(c).map(|(_, jung, _)| JUNGSEONG_TABLE[jung as usize])
}

/// 종성 자모 (종성 없음 또는 비한글이면 None)
pub fn trailing_consonant(c: char) -> Option<char> {
    decompose_syllable(c).and_then(|(_, _, jong)| JONGSEONG_TABLE[jong as usize])
}

/// 음절을 자모 문자열로 분리
/// ex: '가' -> "ㄱㅏ", '각' -> "ㄱㅏㄱ"
///
/// 완성형 한글이 아니면 빈 문자열
pub fn split_syllable(c: char) -> String {
    let mut result = String::with_capacity(9);
    if let (Some(cho), Some(jung)) = (leading_consonant(c), vowel(c)) {
        result.push(cho);
        result.push(jung);
        if let Some(jong) = trailing_consonant(c) {
            result.push(jong);
        }
    }
    result
}

/// 문자열의 모든 음절을 자모로 분리 (비한글은 그대로 유지)
pub fn split_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        if is_complete_syllable(c) {
            result.push_str(&split_syllable(c));
        } else {
            result.push(c);
        }
    }
    result
}

/// 종성 제거
/// ex: '각' -> '가'
///
/// 종성이 없거나 비한글이면 그대로 반환
pub fn strip_trailing_consonant(c: char) -> char {
    match decompose_syllable(c) {
        Some((_, _, jong)) if jong != 0 => char::from_u32(c as u32 - jong).unwrap_or(c),
        _ => c,
    }
}

/// 문자열의 모든 음절에서 종성 제거
pub fn strip_text(text: &str) -> String {
    text.chars().map(strip_trailing_consonant).collect()
}

/// 종성 없는 음절에 종성 추가
/// ex: ('가', 'ㄱ') -> '각', ('나', 'ㄼ') -> '낣'
pub fn add_trailing_consonant(syllable: char, consonant: char) -> Result<char> {
    let (cho, jung, jong) =
        decompose_syllable(syllable).ok_or(HangeulError::NotASyllable(syllable))?;
    if jong != 0 {
        return Err(HangeulError::TrailingConsonantOccupied(syllable));
    }
    let jong = *JONGSEONG_INDEX
        .get(&consonant)
        .ok_or(HangeulError::UnknownTrailingConsonant(consonant))?;
    compose_syllable(cho, jung, jong).ok_or(HangeulError::NotASyllable(syllable))
}

/// 복합 종성을 두 자음으로 분리
/// 단일 종성이나 자음이 아닌 문자는 None
pub fn split_compound_trailing_consonant(jong: char) -> Option<(char, char)> {
    match jong {
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),
        _ => None,
    }
}

/// 두 자음을 복합 종성으로 조합
/// 반환: 복합 종성 자모 (조합 불가 시 None)
pub fn combine_compound_trailing_consonant(first: char, second: char) -> Option<char> {
    match (first, second) {
        ('ㄱ', 'ㅅ') => Some('ㄳ'),
        ('ㄴ', 'ㅈ') => Some('ㄵ'),
        ('ㄴ', 'ㅎ') => Some('ㄶ'),
        ('ㄹ', 'ㄱ') => Some('ㄺ'),
        ('ㄹ', 'ㅁ') => Some('ㄻ'),
        ('ㄹ', 'ㅂ') => Some('ㄼ'),
        ('ㄹ', 'ㅅ') => Some('ㄽ'),
        ('ㄹ', 'ㅌ') => Some('ㄾ'),
        ('ㄹ', 'ㅍ') => Some('ㄿ'),
        ('ㄹ', 'ㅎ') => Some('ㅀ'),
        ('ㅂ', 'ㅅ') => Some('ㅄ'),
        _ => None,
    }
}

/// 복합 종성인지 확인
pub fn is_compound_trailing_consonant(jong: char) -> bool {
    split_compound_trailing_consonant(jong).is_some()
}
