//! 한글 조합/연음 에러

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangeulError {
    /// 종성이 이미 있는 음절에 종성 추가 시도
    #[error("'{0}' already has a trailing consonant")]
    TrailingConsonantOccupied(char),
    /// 종성 테이블에 없는 자모
    #[error("'{0}' is not a trailing consonant")]
    UnknownTrailingConsonant(char),
    /// 완성형 한글 음절이 아님
    #[error("'{0}' is not a complete Hangeul syllable")]
    NotASyllable(char),
    /// 빈 문자열 입력
    #[error("input text is empty")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, HangeulError>;
