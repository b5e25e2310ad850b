//! hangeul - 한글 자모 분리 및 종성 연음 변환 CLI

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use hangeul::config::{load_config, load_config_from, HangeulConfig};
use hangeul::{
    has_trailing_consonant, is_complete_syllable, is_hangeul_symbol, leading_consonant,
    resyllabify_final_sound_with, split_syllable, split_compound_trailing_consonant, strip_text,
    trailing_consonant, vowel, FinalSoundMode,
};

#[derive(Parser)]
#[command(name = "hangeul")]
#[command(about = "Hangeul syllable decomposition and final-sound carry-over", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path (default: $HANGEUL_CONFIG or ~/.config/hangeul/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split every syllable into jamo
    Split { text: String },
    /// Carry the final sound of the last syllable over
    Carry {
        text: String,
        /// Reject a last character that is not a complete syllable
        #[arg(long)]
        strict: bool,
    },
    /// Remove trailing consonants from every syllable
    Strip { text: String },
    /// Print per-character decomposition as JSON lines
    Inspect { text: String },
}

/// `inspect` 출력 항목
#[derive(Serialize)]
struct CharInfo {
    ch: char,
    code_point: String,
    is_syllable: bool,
    is_hangeul: bool,
    leading: Option<char>,
    vowel: Option<char>,
    trailing: Option<char>,
    has_trailing: bool,
    compound: Option<(char, char)>,
}

impl CharInfo {
    fn new(ch: char) -> Self {
        let trailing = trailing_consonant(ch);
        Self {
            ch,
            code_point: format!("U+{:04X}", ch as u32),
            is_syllable: is_complete_syllable(ch),
            is_hangeul: is_hangeul_symbol(ch),
            leading: leading_consonant(ch),
            vowel: vowel(ch),
            trailing,
            has_trailing: has_trailing_consonant(ch),
            compound: trailing.and_then(split_compound_trailing_consonant),
        }
    }
}

/// 자모 분리 (구분자 적용, 비한글은 그대로)
fn split_with_separator(text: &str, separator: &str) -> String {
    text.chars()
        .map(|c| {
            if is_complete_syllable(c) {
                split_syllable(c)
                    .chars()
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join(separator)
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}

fn run(command: Commands, config: &HangeulConfig) -> Result<(), String> {
    match command {
        Commands::Split { text } => {
            println!("{}", split_with_separator(&text, &config.jamo_separator));
        }
        Commands::Carry { text, strict } => {
            let mode = if strict {
                FinalSoundMode::Strict
            } else {
                config.final_sound_mode()
            };
            let result = resyllabify_final_sound_with(&text, mode).map_err(|e| e.to_string())?;
            println!("{}", result);
        }
        Commands::Strip { text } => {
            println!("{}", strip_text(&text));
        }
        Commands::Inspect { text } => {
            for c in text.chars() {
                let line = serde_json::to_string(&CharInfo::new(c))
                    .map_err(|e| format!("직렬화 실패: {}", e))?;
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    log::debug!("설정: {:?}", config);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
