//! URL fragment codec.
//!
//! A palette is stored in the location hash as hyphen-joined hex digits,
//! one token per swatch from left to right: `#ff0000-00ff00-0000ff`.

use crate::color::HexColor;
use thiserror::Error;

/// Separator between color tokens.
pub const TOKEN_SEPARATOR: char = '-';

/// Strict fragment decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("Invalid color token {token:?} at position {index}")]
    InvalidToken { index: usize, token: String },
}

/// Encode colors as fragment text, without the leading `#`.
pub fn encode_fragment(colors: &[HexColor]) -> String {
    colors
        .iter()
        .map(HexColor::digits)
        .collect::<Vec<_>>()
        .join("-")
}

fn tokens(fragment: &str) -> impl Iterator<Item = &str> {
    let body = fragment.strip_prefix('#').unwrap_or(fragment);
    // An empty body means "no saved palette", not one empty token.
    body.split(TOKEN_SEPARATOR).filter(move |_| !body.is_empty())
}

/// Best-effort decoding: one entry per token, `None` for malformed tokens.
pub fn decode_fragment(fragment: &str) -> Vec<Option<HexColor>> {
    tokens(fragment)
        .enumerate()
        .map(|(index, token)| match HexColor::parse(token) {
            Ok(color) => Some(color),
            Err(e) => {
                log::warn!("Ignoring fragment token {}: {}", index, e);
                None
            }
        })
        .collect()
}

/// Strict decoding: fails on the first malformed token.
pub fn parse_fragment(fragment: &str) -> Result<Vec<HexColor>, FragmentError> {
    tokens(fragment)
        .enumerate()
        .map(|(index, token)| {
            HexColor::parse(token).map_err(|_| FragmentError::InvalidToken {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}
