//! Embedded pixel-art assets for the pixeldrift sprite field.
//!
//! Assets are stored as text art and decoded to [`Bitmap`]s at load time.
//! Decoding is fallible on purpose: a broken asset degrades the usable pool
//! instead of aborting startup, matching the field's load-failure policy.

use pixeldrift_core::{Bitmap, Rgb};
use thiserror::Error;

mod art;

pub use art::NAMES;

/// Why an asset failed to decode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no asset named `{0}`")]
    UnknownAsset(String),
    #[error("asset `{0}` has no rows")]
    EmptyArt(String),
    #[error("asset `{name}` row {row} is {found} chars wide, expected {expected}")]
    RaggedRow {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("asset `{name}` has unknown pixel char `{ch}` at row {row}, col {col}")]
    UnknownPixel {
        name: String,
        row: usize,
        col: usize,
        ch: char,
    },
}

/// Decode the named built-in asset.
pub fn load(name: &str) -> Result<Bitmap, DecodeError> {
    let rows = art::rows(name).ok_or_else(|| DecodeError::UnknownAsset(name.to_string()))?;
    decode(name, rows)
}

/// Decode text-art rows into a bitmap.
///
/// Every row must have the same width and every char must be in the palette
/// (`.` for transparent).
pub fn decode(name: &str, rows: &[&str]) -> Result<Bitmap, DecodeError> {
    if rows.is_empty() {
        return Err(DecodeError::EmptyArt(name.to_string()));
    }

    let width = rows[0].chars().count();
    if width == 0 {
        return Err(DecodeError::EmptyArt(name.to_string()));
    }

    let mut pixels = Vec::with_capacity(width * rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(DecodeError::RaggedRow {
                name: name.to_string(),
                row: row_idx,
                expected: width,
                found,
            });
        }
        for (col_idx, ch) in row.chars().enumerate() {
            let pixel = palette(ch).ok_or(DecodeError::UnknownPixel {
                name: name.to_string(),
                row: row_idx,
                col: col_idx,
                ch,
            })?;
            pixels.push(pixel);
        }
    }

    // Dimensions were validated above, so the grid always matches.
    Bitmap::from_pixels(name, width as u32, rows.len() as u32, pixels)
        .ok_or_else(|| DecodeError::EmptyArt(name.to_string()))
}

/// Map a palette char to a pixel (`None` = transparent).
fn palette(ch: char) -> Option<Option<Rgb>> {
    let pixel = match ch {
        '.' => None,
        'W' => Some(Rgb(236, 240, 241)),
        'K' => Some(Rgb(40, 42, 48)),
        'E' => Some(Rgb(99, 110, 114)),
        'R' => Some(Rgb(214, 48, 49)),
        'G' => Some(Rgb(0, 184, 148)),
        'B' => Some(Rgb(9, 132, 227)),
        'Y' => Some(Rgb(253, 203, 110)),
        'O' => Some(Rgb(230, 126, 34)),
        'M' => Some(Rgb(232, 67, 147)),
        'C' => Some(Rgb(0, 206, 201)),
        'N' => Some(Rgb(139, 94, 60)),
        _ => return None,
    };
    Some(pixel)
}
