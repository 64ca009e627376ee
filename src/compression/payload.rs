use crate::error::{HufError, Result};

/// Packed code bits plus the number of zero bits padding the last byte.
///
/// On disk this is the bare format: one byte holding the padding length (0-7)
/// followed by the packed bytes, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    pub padding: u8,
    pub bytes: Vec<u8>,
}

impl EncodedPayload {
    /// Number of meaningful bits, padding excluded.
    pub fn bit_len(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.padding as usize)
    }

    /// Size on disk in the bare format.
    pub fn encoded_len(&self) -> usize {
        self.bytes.len() + 1
    }

    /// Serialize to the bare format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(self.padding);
        out.extend_from_slice(&self.bytes);
        out
    }

    /// True when the padding length is 0-7 and every padding bit in the last byte is zero.
    pub fn padding_is_clean(&self) -> bool {
        if self.padding > 7 {
            return false;
        }
        match self.bytes.last() {
            Some(&last) => last & ((1_u16 << self.padding) - 1) as u8 == 0,
            None => self.padding == 0,
        }
    }

    /// Parse the bare format. Only the header is checked here, the padding bits
    /// are checked by the decoder once the symbols are out.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (&padding, bytes) = data.split_first().ok_or(HufError::TruncatedStream {
            decoded: 0,
            expected: 1,
        })?;
        if padding > 7 {
            return Err(HufError::InvalidPadding(padding));
        }
        if bytes.is_empty() && padding > 0 {
            // Padding with nothing to pad
            return Err(HufError::TruncatedStream {
                decoded: 0,
                expected: padding as usize,
            });
        }
        Ok(EncodedPayload {
            padding,
            bytes: bytes.to_vec(),
        })
    }
}
