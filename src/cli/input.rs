//! Parsing of typed answers
//!
//! The only validation performed is whether an answer parses; range checks
//! apply to menu and crop positions.

use thiserror::Error;

use crate::domain::{Crop, RecordId};

/// A rejected answer. The message is what the user sees.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Opção inválida! Digite um número.")]
    NotANumber,

    #[error("Opção inválida!")]
    InvalidSelection,

    #[error("Valor inválido! Use números.")]
    InvalidNumber,

    #[error("ID inválido! Digite um número.")]
    InvalidId,

    #[error("Registro não encontrado!")]
    RecordNotFound(RecordId),
}

/// Parses a 1-based position in a list of `count` entries
pub fn parse_position(input: &str, count: usize) -> Result<usize, InputError> {
    let position: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    usize::try_from(position)
        .ok()
        .filter(|p| (1..=count).contains(p))
        .ok_or(InputError::InvalidSelection)
}

/// Parses a crop choice from the numbered catalog list
pub fn parse_crop(input: &str) -> Result<Crop, InputError> {
    let position = parse_position(input, Crop::ALL.len())?;
    Crop::from_position(position).ok_or(InputError::InvalidSelection)
}

/// Parses a measurement in meters
pub fn parse_number(input: &str) -> Result<f64, InputError> {
    input.trim().parse().map_err(|_| InputError::InvalidNumber)
}

pub fn parse_id(input: &str) -> Result<RecordId, InputError> {
    input.parse().map_err(|_| InputError::InvalidId)
}

/// True only for an explicit yes (`S`, any case)
pub fn is_confirmation(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("s")
}
