use log::error;

use crate::huffman_coding::code_table::Code;

/// Packs variable length codes into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to push the
    /// final partial byte to the buffer before using the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the low `depth` bits of `data` (at most 32).
    fn out_n(&mut self, depth: u8, data: u64) {
        debug_assert!(depth <= 32);
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= data & (u64::MAX >> (64 - depth)); //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.write_stream();
    }

    /// Puts one huffman code on the stream.
    pub fn out_code(&mut self, code: &Code) {
        // Feed the code in slices of up to 32 bits, high bits first.
        let mut left = code.len;
        while left > 0 {
            let take = left.min(32);
            left -= take;
            self.out_n(take, (code.bits >> left) as u64);
        }
    }

    /// Puts a 32 bit word of pre-packed binary encoded data on the stream.
    pub fn out32(&mut self, data: u32) {
        self.out_n(32, data as u64);
    }

    /// Puts a 16 bit word of pre-packed binary encoded data on the stream.
    pub fn out16(&mut self, data: u16) {
        self.out_n(16, data as u64);
    }

    /// Puts an 8 bit word of pre-packed binary encoded data on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out_n(8, data as u64);
    }

    /// Puts a 64 bit word on the stream, big-endian.
    pub fn out64(&mut self, data: u64) {
        self.out32((data >> 32) as u32);
        self.out32(data as u32);
    }

    /// Number of bits written so far, including any still in the queue.
    pub fn bit_count(&self) -> usize {
        self.output.len() * 8 + self.q_bits as usize
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits. Returns how many padding bits were added (0-7).
    pub fn flush(&mut self) -> u8 {
        let mut padding = 0;
        if self.q_bits > 0 {
            padding = 8 - self.q_bits;
            self.queue <<= padding; //pad the queue with zeros
            self.q_bits += padding;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        padding
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_count() / 8, self.bit_count() % 8)
    }
}
