//! BitReader: reads a packed bitstream, most significant bit first.
//!
//! The whole compressed input is held in memory, so the reader works over a byte
//! slice. The readable length can be cut short with `limit()` so trailing padding
//! bits are never handed to the decoder.
//!

/// Reads bits and big-endian integers from a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    /// Absolute position of the next bit.
    pos: usize,
    /// One past the last readable bit.
    end: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            pos: 0,
            end: buffer.len() * 8,
        }
    }

    /// Stop reading after `bits` bits from the start of the buffer.
    pub fn limit(&mut self, bits: usize) {
        self.end = bits.min(self.buffer.len() * 8);
    }

    /// Bits left before the limit.
    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.pos >= self.end {
            return None;
        }
        let bit = (self.buffer[self.pos / 8] >> (7 - self.pos % 8)) & 1;
        self.pos += 1;
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<u64> of the next n bits (n <= 64), or None if fewer than n remain.
    /// Nothing is consumed when the read fails.
    pub fn bint(&mut self, n: usize) -> Option<u64> {
        debug_assert!(n <= 64);
        if self.remaining() < n {
            return None;
        }
        let mut result = 0_u64;
        for _ in 0..n {
            result = result << 1 | self.bit()? as u64;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read.
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Returns an Option<Vec<u8>> of n bytes, or None if fewer than n bytes remain.
    pub fn bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        if self.remaining() < n * 8 {
            return None;
        }
        (0..n).map(|_| self.byte()).collect()
    }

    /// Everything from the current (byte aligned) position to the end of the buffer.
    pub fn rest(&mut self) -> &'a [u8] {
        debug_assert!(self.pos % 8 == 0);
        let start = (self.pos / 8).min(self.buffer.len());
        self.pos = self.end;
        &self.buffer[start..]
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.pos / 8, self.pos % 8)
    }
}
