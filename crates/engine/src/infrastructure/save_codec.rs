//! Save-blob codec for import/export.
//!
//! The on-the-wire shape is minified JSON - a list of `{id, variants}`
//! entries restricted to Pokémon with at least one caught variant -
//! DEFLATE-compressed and base64-framed so it survives copy/paste.
//! Decoding also accepts bare JSON for payloads predating the framing.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use catchdex_domain::{Catalogue, PokemonId, VariantKind};

/// One exported Pokémon. Both fields are required; a payload missing
/// either anywhere is rejected wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEntry {
    pub id: PokemonId,
    pub variants: Vec<SaveVariant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveVariant {
    pub kind: VariantKind,
    pub caught: bool,
}

/// Rejected import payload. The resident catalogue is never touched when
/// decoding fails: decode fully, then merge.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Import payload framing invalid: {0}")]
    Framing(String),

    #[error("Import payload malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export encoding failed: {0}")]
    Encoding(String),
}

/// Extract the caught subset of `catalogue` as save entries.
pub fn caught_entries(catalogue: &Catalogue) -> Vec<SaveEntry> {
    catalogue
        .iter()
        .filter(|p| p.caught_count() > 0)
        .map(|p| SaveEntry {
            id: p.id,
            variants: p
                .variants
                .iter()
                .map(|v| SaveVariant {
                    kind: v.kind,
                    caught: v.caught,
                })
                .collect(),
        })
        .collect()
}

/// Encode the caught subset into the compressed base64 transport form.
pub fn encode(catalogue: &Catalogue) -> Result<String, ExportError> {
    let json = serde_json::to_vec(&caught_entries(catalogue))
        .map_err(|e| ExportError::Encoding(e.to_string()))?;
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&json)
        .and_then(|_| encoder.finish())
        .map(|compressed| BASE64.encode(compressed))
        .map_err(|e| ExportError::Encoding(e.to_string()))
}

/// Decode a pasted payload back into save entries.
pub fn decode(payload: &str) -> Result<Vec<SaveEntry>, ImportError> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(ImportError::Framing("empty payload".into()));
    }

    // Bare JSON predates the compressed framing.
    if payload.starts_with('[') {
        return serde_json::from_str(payload)
            .map_err(|e| ImportError::Malformed(e.to_string()));
    }

    let compressed = BASE64
        .decode(payload)
        .map_err(|e| ImportError::Framing(e.to_string()))?;
    let mut json = Vec::new();
    DeflateDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .map_err(|e| ImportError::Framing(e.to_string()))?;
    serde_json::from_slice(&json).map_err(|e| ImportError::Malformed(e.to_string()))
}

/// Merge decoded entries into the catalogue by id + variant kind.
///
/// Unknown ids and unobtainable kinds are skipped; variants absent from
/// the payload keep their current flag. Returns the number of variant
/// flags applied.
pub fn merge(catalogue: &mut Catalogue, entries: &[SaveEntry]) -> usize {
    let mut applied = 0;
    for entry in entries {
        let Some(pokemon) = catalogue.get_mut(entry.id) else {
            continue;
        };
        for saved in &entry.variants {
            if let Some(variant) = pokemon.variant_mut(saved.kind) {
                variant.caught = saved.caught;
                applied += 1;
            }
        }
    }
    applied
}
