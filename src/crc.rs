/// CCSDS CRC-16 generator polynomial (x^16 + x^12 + x^5 + 1).
pub const CRC16_CCSDS_POLY: u16 = 0x1021;

/// Register value at the start of every computation.
pub const CRC16_CCSDS_INIT: u16 = 0xFFFF;

/// CRC-16/CCSDS (poly 0x1021, init 0xFFFF, MSB first, no final XOR),
/// bit-by-bit implementation.
pub fn crc16_ccsds(data: &[u8]) -> u16 {
    let mut crc = CRC16_CCSDS_INIT;

    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            // u16 shift drops bit 15, so the register stays masked.
            let msb_set = (crc & 0x8000) != 0;
            crc <<= 1;
            if msb_set {
                crc ^= CRC16_CCSDS_POLY;
            }
        }
    }

    crc
}

const CRC16_CCSDS_TABLE: [u16; 256] = {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ CRC16_CCSDS_POLY;
            } else {
                crc <<= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// Table-driven CRC-16/CCSDS. Same result as [`crc16_ccsds`], one lookup per byte.
pub fn crc16_ccsds_table(data: &[u8]) -> u16 {
    data.iter().fold(CRC16_CCSDS_INIT, |crc, &byte| {
        let index = ((crc >> 8) ^ byte as u16) as usize;
        (crc << 8) ^ CRC16_CCSDS_TABLE[index]
    })
}
