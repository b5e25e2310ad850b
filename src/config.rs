//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::final_sound::FinalSoundMode;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_ENV: &str = "HANGEUL_CONFIG";

/// hangeul 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HangeulConfig {
    /// 마지막 글자가 완성형 한글이 아니면 연음 변환을 에러로 처리
    #[serde(default)]
    pub strict_final_sound: bool,
    /// 자모 분리 출력 시 자모 사이 구분자
    #[serde(default)]
    pub jamo_separator: String,
}

impl HangeulConfig {
    pub fn final_sound_mode(&self) -> FinalSoundMode {
        if self.strict_final_sound {
            FinalSoundMode::Strict
        } else {
            FinalSoundMode::Lenient
        }
    }
}

/// 설정 파일 경로: $HANGEUL_CONFIG 또는 ~/.config/hangeul/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hangeul").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> HangeulConfig {
    load_config_from(&config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> HangeulConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            HangeulConfig::default()
        }),
        Err(_) => HangeulConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &HangeulConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HangeulConfig::default();
        assert!(!config.strict_final_sound);
        assert_eq!(config.jamo_separator, "");
        assert_eq!(config.final_sound_mode(), FinalSoundMode::Lenient);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = HangeulConfig {
            strict_final_sound: true,
            jamo_separator: " ".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: HangeulConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.final_sound_mode(), FinalSoundMode::Strict);
    }

    #[test]
    fn test_missing_field() {
        // 일부 필드만 있는 경우 나머지는 기본값
        let json = r#"{"jamo_separator": "-"}"#;
        let config: HangeulConfig = serde_json::from_str(json).unwrap();
        assert!(!config.strict_final_sound);
        assert_eq!(config.jamo_separator, "-");
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("hangeul-config-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = HangeulConfig {
            strict_final_sound: true,
            jamo_separator: "/".to_string(),
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);

        // 파싱 실패 시 기본값
        fs::write(&path, "not json").unwrap();
        assert_eq!(load_config_from(&path), HangeulConfig::default());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("hangeul-config-does-not-exist.json");
        assert_eq!(load_config_from(&path), HangeulConfig::default());
    }
}
