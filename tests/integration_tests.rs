//! 통합 테스트 - 자모 분해/조합 및 종성 연음

use hangeul::{
    add_trailing_consonant, compose, has_trailing_consonant, leading_consonant,
    resyllabify_final_sound, split_compound_trailing_consonant, split_syllable, split_text,
    strip_trailing_consonant, trailing_consonant, vowel, HangeulError,
};

#[test]
fn test_split_syllable() {
    assert_eq!(split_syllable('가'), "ㄱㅏ");
    assert_eq!(split_syllable('각'), "ㄱㅏㄱ");
}

#[test]
fn test_final_sound_carry_over() {
    assert_eq!(resyllabify_final_sound("가낙").unwrap(), "가나ㄱ");
    assert_eq!(resyllabify_final_sound("가낣").unwrap(), "가날ㅂ"); // ㄼ -> ㄹ + ㅂ
    assert_eq!(resyllabify_final_sound("가나").unwrap(), "가나"); // 종성 없음
}

#[test]
fn test_strip_trailing_consonant() {
    assert_eq!(strip_trailing_consonant('각'), '가');
}

#[test]
fn test_empty_input() {
    assert_eq!(resyllabify_final_sound(""), Err(HangeulError::EmptyInput));
}

#[test]
fn test_decompose_and_recompose() {
    for c in "안녕하세요 읽었습니다".chars().filter(|c| !c.is_whitespace()) {
        let cho = leading_consonant(c).unwrap();
        let jung = vowel(c).unwrap();
        assert_eq!(compose(cho, jung, trailing_consonant(c)), Some(c));
    }
}

#[test]
fn test_add_to_occupied_syllable() {
    assert_eq!(
        add_trailing_consonant('닭', 'ㄱ'),
        Err(HangeulError::TrailingConsonantOccupied('닭'))
    );
    assert!(has_trailing_consonant('닭'));
}

#[test]
fn test_compound_split() {
    assert_eq!(split_compound_trailing_consonant('ㄼ'), Some(('ㄹ', 'ㅂ')));
    assert_eq!(split_compound_trailing_consonant('ㄹ'), None);
}

#[test]
fn test_mixed_text() {
    assert_eq!(split_text("값 100원"), "ㄱㅏㅄ 100ㅇㅝㄴ");
    assert_eq!(resyllabify_final_sound("값").unwrap(), "갑ㅅ");
}
