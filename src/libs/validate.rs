//! Input validation and data normalization.
//!
//! All user-supplied values pass through this layer before reaching the
//! database. The module is split in two halves:
//!
//! - **Pure parsers** (`parse_*`): take a candidate string and return a
//!   normalized value or a [`ValidationError`]. They never touch the
//!   terminal, which keeps them testable and reusable.
//! - **Prompt wrappers** (`prompt_*`): own the interactive retry loop.
//!   They read from the console via `dialoguer`, feed the input to the
//!   matching parser and re-prompt with a diagnostic until a legal value
//!   is obtained. They only fail outward on terminal I/O errors.
//!
//! The inverse direction lives here too: [`serialize_datetime`] converts a
//! validated timestamp into the ISO-8601 text form used for storage and
//! JSON transport, and [`generate_id`] produces the UUIDv4 primary keys.

use crate::msg_error;
use anyhow::Result;
use chrono::{Local, NaiveDateTime, Timelike};
use dialoguer::{theme::ColorfulTheme, Input};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use uuid::Uuid;

/// Exact input format accepted for interactive date entry.
pub const DATE_INPUT_FORMAT: &str = "%d/%m/%Y %H:%M";
/// ISO-8601 form used for storage and JSON transport.
pub const DATE_STORE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Default length bounds applied to free-form string fields.
pub const STRING_MIN: usize = 1;
pub const STRING_MAX: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Entrada inválida. Por favor, digite um número inteiro.")]
    NotAnInteger,
    #[error("Entrada inválida. Por favor, digite um número decimal.")]
    NotAFloat,
    #[error("Entrada inválida. O campo não pode ficar vazio.")]
    Empty,
    #[error("Entrada inválida. O valor deve ter pelo menos {0} caracteres.")]
    TooShort(usize),
    #[error("Entrada inválida. O valor deve ter no máximo {0} caracteres.")]
    TooLong(usize),
    #[error("Entrada inválida. Inserir apenas letras válidas.")]
    InvalidName,
    #[error("Entrada inválida. Digite um e-mail válido (ex: nome@dominio.com).")]
    InvalidEmail,
    #[error("Entrada inválida. Inserir apenas no formato exato 'DD/MM/AAAA HH:MM'.")]
    BadDateFormat,
    #[error("Entrada inválida. Inserir apenas uma data/hora válida a partir de agora.")]
    DateInPast,
    #[error("o valor do tipo {0} não pode ser serializado")]
    UnsupportedType(&'static str),
}

/// Scalar value produced by the validators, as it travels towards storage
/// and JSON transport.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "Text",
            FieldValue::Integer(_) => "Integer",
            FieldValue::Float(_) => "Float",
            FieldValue::DateTime(_) => "DateTime",
        }
    }
}

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Unicode letters and spaces only, accented forms included.
    RE.get_or_init(|| Regex::new(r"^[\p{L}\s]+$").unwrap())
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Conservative local@domain.tld shape with a TLD of at least two letters.
    RE.get_or_init(|| Regex::new(r"(?i)^[\p{L}0-9._%+-]+@[\p{L}0-9.-]+\.\p{L}{2,}$").unwrap())
}

/// Generates a fresh UUIDv4 token for use as a primary key.
///
/// Pure generation: uniqueness is probabilistic and never checked against
/// existing rows.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parses a base-10 integer, falling back to `default` on empty input.
pub fn parse_integer(input: &str, default: Option<i64>) -> Result<i64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return default.ok_or(ValidationError::NotAnInteger);
    }
    input.parse::<i64>().map_err(|_| ValidationError::NotAnInteger)
}

/// Parses a decimal number, falling back to `default` on empty input.
pub fn parse_float(input: &str, default: Option<f64>) -> Result<f64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return default.ok_or(ValidationError::NotAFloat);
    }
    input.parse::<f64>().map_err(|_| ValidationError::NotAFloat)
}

/// Trims a string and enforces the `[min, max]` character length bounds.
///
/// Empty input returns `default` when one is configured and is rejected
/// otherwise. Length is counted in characters, not bytes.
pub fn parse_string(input: &str, min: usize, max: usize, default: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return match default {
            Some(value) => Ok(value.to_string()),
            None => Err(ValidationError::Empty),
        };
    }
    let len = trimmed.chars().count();
    if len < min {
        return Err(ValidationError::TooShort(min));
    }
    if len > max {
        return Err(ValidationError::TooLong(max));
    }
    Ok(trimmed.to_string())
}

/// Validates a personal name: Unicode letters and spaces only, trimmed.
pub fn parse_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !name_pattern().is_match(trimmed) {
        return Err(ValidationError::InvalidName);
    }
    Ok(trimmed.to_string())
}

/// Validates an e-mail address and normalizes it to lower case.
pub fn parse_email(input: &str) -> Result<String, ValidationError> {
    let email = input.trim().to_lowercase();
    if !email_pattern().is_match(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

/// Parses a date in the exact `DD/MM/AAAA HH:MM` format.
///
/// Empty input returns `now`. A parsed value earlier than `now` truncated
/// to the minute is rejected; this present-or-future rule applies to the
/// interactive path only.
pub fn parse_date(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(now);
    }
    let parsed = NaiveDateTime::parse_from_str(input, DATE_INPUT_FORMAT).map_err(|_| ValidationError::BadDateFormat)?;
    let floor = now
        .with_second(0)
        .and_then(|trunc| trunc.with_nanosecond(0))
        .unwrap_or(now);
    if parsed < floor {
        return Err(ValidationError::DateInPast);
    }
    Ok(parsed)
}

/// Converts a date-time value into its ISO-8601 text form.
///
/// The only validator-layer operation that fails outward: any variant other
/// than [`FieldValue::DateTime`] is an unsupported-type error naming the
/// offending type.
pub fn serialize_datetime(value: &FieldValue) -> Result<String, ValidationError> {
    match value {
        FieldValue::DateTime(dt) => Ok(dt.format(DATE_STORE_FORMAT).to_string()),
        other => Err(ValidationError::UnsupportedType(other.type_name())),
    }
}

fn read_line(prompt: &str) -> Result<String> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompts for an integer until a legal value is entered.
pub fn prompt_integer(prompt: &str, default: Option<i64>) -> Result<i64> {
    loop {
        match parse_integer(&read_line(prompt)?, default) {
            Ok(value) => return Ok(value),
            Err(err) => msg_error!(err),
        }
    }
}

/// Prompts for a decimal number until a legal value is entered.
pub fn prompt_float(prompt: &str, default: Option<f64>) -> Result<f64> {
    loop {
        match parse_float(&read_line(prompt)?, default) {
            Ok(value) => return Ok(value),
            Err(err) => msg_error!(err),
        }
    }
}

/// Prompts for a bounded string (1 to 100 characters after trimming).
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    loop {
        match parse_string(&read_line(prompt)?, STRING_MIN, STRING_MAX, default) {
            Ok(value) => return Ok(value),
            Err(err) => msg_error!(err),
        }
    }
}

/// Prompts for a personal name until a legal value is entered.
pub fn prompt_name(prompt: &str) -> Result<String> {
    loop {
        match parse_name(&read_line(prompt)?) {
            Ok(value) => return Ok(value),
            Err(err) => msg_error!(err),
        }
    }
}

/// Prompts for an e-mail address until a legal value is entered.
pub fn prompt_email(prompt: &str) -> Result<String> {
    loop {
        match parse_email(&read_line(prompt)?) {
            Ok(value) => return Ok(value),
            Err(err) => msg_error!(err),
        }
    }
}

/// Prompts for a present-or-future date; empty input means "now".
pub fn prompt_date(prompt: &str) -> Result<NaiveDateTime> {
    loop {
        match parse_date(&read_line(prompt)?, Local::now().naive_local()) {
            Ok(value) => return Ok(value),
            Err(err) => msg_error!(err),
        }
    }
}
