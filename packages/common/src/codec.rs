//! Cross-chain wire codec.
//!
//! The transfer payload must decode to identical bytes on both chains, so it
//! is a hand-rolled, self-describing, length-prefixed format rather than a
//! JSON envelope. All integers are u64 big-endian.
//!
//! # Payload layout
//! - holder length (8 bytes) + holder address (utf8)
//! - count (8 bytes) + `count` quad sizes (8 bytes each)
//! - count (8 bytes) + `count` x coordinates
//! - count (8 bytes) + `count` y coordinates
//! - sidecar length (8 bytes) + opaque sidecar bytes
//!
//! The three coordinate arrays mirror the flat-array shape used by the batch
//! operations everywhere else in the system; `decode_transfer` converts them
//! to a structured quad list immediately at the boundary.
//!
//! # Proof layout
//! - source transaction id (32 bytes)
//! - transfer payload (remainder)

use thiserror::Error;

use crate::quad::Quad;

/// Length of the source-transaction id prefixing an exit proof.
pub const TX_ID_LEN: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("payload truncated: wanted {wanted} more bytes at offset {offset}")]
    Truncated { offset: usize, wanted: u64 },

    #[error("payload has {extra} trailing bytes")]
    TrailingBytes { extra: usize },

    #[error("array length mismatch: {sizes} sizes, {xs} xs, {ys} ys")]
    LengthMismatch { sizes: usize, xs: usize, ys: usize },

    #[error("holder address is not valid utf8")]
    InvalidUtf8,

    #[error("proof shorter than the {TX_ID_LEN}-byte transaction id")]
    BadProofLength,
}

/// A decoded transfer payload: the holder plus a structured quad list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPayload {
    pub holder: String,
    pub quads: Vec<Quad>,
    pub sidecar: Vec<u8>,
}

/// Encode a transfer payload.
pub fn encode_transfer(holder: &str, quads: &[Quad], sidecar: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + holder.len() + 8 * (1 + quads.len()) * 3 + 8 + sidecar.len());
    put_bytes(&mut out, holder.as_bytes());
    put_array(&mut out, quads.iter().map(|q| q.size));
    put_array(&mut out, quads.iter().map(|q| q.x));
    put_array(&mut out, quads.iter().map(|q| q.y));
    put_bytes(&mut out, sidecar);
    out
}

/// Decode a transfer payload, enforcing structural shape.
///
/// Array counts must agree and no bytes may remain, so a payload accepted
/// here has exactly one encoding.
pub fn decode_transfer(bytes: &[u8]) -> Result<TransferPayload, CodecError> {
    let mut cursor = Cursor::new(bytes);
    let holder_bytes = cursor.take_bytes()?;
    let holder = String::from_utf8(holder_bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8)?;
    let sizes = cursor.take_array()?;
    let xs = cursor.take_array()?;
    let ys = cursor.take_array()?;
    let sidecar = cursor.take_bytes()?.to_vec();
    cursor.finish()?;

    if sizes.len() != xs.len() || xs.len() != ys.len() {
        return Err(CodecError::LengthMismatch {
            sizes: sizes.len(),
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let quads = sizes
        .into_iter()
        .zip(xs)
        .zip(ys)
        .map(|((size, x), y)| Quad { size, x, y })
        .collect();

    Ok(TransferPayload {
        holder,
        quads,
        sidecar,
    })
}

/// Frame an exit proof: the source transaction id followed by the payload.
pub fn encode_proof(tx_id: &[u8; 32], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(TX_ID_LEN + payload.len());
    out.extend_from_slice(tx_id);
    out.extend_from_slice(payload);
    out
}

/// Split an exit proof into its transaction id and payload halves.
pub fn split_proof(proof: &[u8]) -> Result<([u8; 32], &[u8]), CodecError> {
    if proof.len() < TX_ID_LEN {
        return Err(CodecError::BadProofLength);
    }
    let mut tx_id = [0u8; 32];
    tx_id.copy_from_slice(&proof[..TX_ID_LEN]);
    Ok((tx_id, &proof[TX_ID_LEN..]))
}

fn put_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
    out.extend_from_slice(bytes);
}

fn put_array(out: &mut Vec<u8>, values: impl ExactSizeIterator<Item = u64>) {
    out.extend_from_slice(&(values.len() as u64).to_be_bytes());
    for value in values {
        out.extend_from_slice(&value.to_be_bytes());
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, offset: 0 }
    }

    fn remaining(&self) -> u64 {
        (self.bytes.len() - self.offset) as u64
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        if self.bytes.len() - self.offset < len {
            return Err(CodecError::Truncated {
                offset: self.offset,
                wanted: (len - (self.bytes.len() - self.offset)) as u64,
            });
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn take_u64(&mut self) -> Result<u64, CodecError> {
        let raw = self.take(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(raw);
        Ok(u64::from_be_bytes(buf))
    }

    // Length and count fields stay u64 until bounded by the buffer: an
    // `as usize` cast would truncate them on a 32-bit target and make the
    // same bytes parse differently there.

    fn take_bytes(&mut self) -> Result<&'a [u8], CodecError> {
        let len = self.take_u64()?;
        if len > self.remaining() {
            return Err(CodecError::Truncated {
                offset: self.offset,
                wanted: len - self.remaining(),
            });
        }
        self.take(len as usize)
    }

    fn take_array(&mut self) -> Result<Vec<u64>, CodecError> {
        let count = self.take_u64()?;
        // Also bounds the allocation by what the buffer could actually hold.
        if count > self.remaining() / 8 {
            return Err(CodecError::Truncated {
                offset: self.offset,
                wanted: count.saturating_mul(8) - self.remaining(),
            });
        }
        let count = count as usize;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.take_u64()?);
        }
        Ok(values)
    }

    fn finish(&self) -> Result<(), CodecError> {
        if self.offset != self.bytes.len() {
            return Err(CodecError::TrailingBytes {
                extra: self.bytes.len() - self.offset,
            });
        }
        Ok(())
    }
}
