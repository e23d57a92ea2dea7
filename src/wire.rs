//! JSON payload codec for the transport seam.
//!
//! The core never touches a socket; instead it fixes the two payload shapes
//! the surrounding transport carries and leaves the carrying to that layer:
//!
//! - outbound state: a JSON array of `{"X":..,"Y":..}` objects, one per live
//!   cell, serialized verbatim from a snapshot;
//! - inbound injection: `{"cells": [{"X":..,"Y":..}, ...]}`, with lowercase
//!   `x`/`y` accepted as well (the shape the reference client posts).
//!
//! Malformed inbound payloads are the transport's only real failure surface.
//! They are rejected here, before any coordinate can reach the board, and the
//! transport translates [`PayloadError`] into its client-visible rejection.
//! Note the asymmetry with bounds checking: an out-of-bounds coordinate in a
//! well-formed payload is not an error — the board ignores it and the count in
//! the receipt tells the client how many cells actually landed.

use std::fmt;

use serde::Deserialize;

use crate::coord::Coord;

/// Encodes a snapshot as the broadcast wire format.
pub fn encode_snapshot(cells: &[Coord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(cells)
}

/// Decodes an injection payload, rejecting malformed or empty cell lists.
pub fn decode_cells(bytes: &[u8]) -> Result<Vec<Coord>, PayloadError> {
    let payload: CellsPayload = serde_json::from_slice(bytes)?;
    if payload.cells.is_empty() {
        return Err(PayloadError::NoCells);
    }
    Ok(payload.cells)
}

/// Human-readable confirmation the transport returns to an injector.
pub fn receipt(accepted: usize) -> String {
    format!("Received {accepted} cells (in bounds)")
}

// `default` keeps a body without a `cells` key on the NoCells path rather
// than the malformed-JSON path, matching how the previous server treated a
// missing list as an empty one.
#[derive(Deserialize)]
struct CellsPayload {
    #[serde(default)]
    cells: Vec<Coord>,
}

/// Errors returned while decoding injection payloads.
#[derive(Debug)]
pub enum PayloadError {
    /// Body is not valid JSON of the expected shape.
    Json(serde_json::Error),
    /// Body decoded but supplied no cells.
    NoCells,
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid injection payload: {err}"),
            Self::NoCells => write!(f, "injection payload contains no cells"),
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::NoCells => None,
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
