const POLY: u16 = 0x1021;
const INIT: u16 = 0xFFFF;

/// CRC-16/CCITT-FALSE: polynomial 0x1021, initial value 0xFFFF, no reflection.
pub fn crc16_ccitt(bytes: &[u8]) -> u16 {
    bytes.iter().fold(INIT, |crc, byte| {
        (0..8).fold(crc ^ (u16::from(*byte) << 8), |crc, _| {
            if crc & 0x8000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            }
        })
    })
}

/// CRC of `text` as four uppercase hex digits, the form Pix payloads carry.
pub fn crc16_hex(text: &str) -> String {
    format!("{:04X}", crc16_ccitt(text.as_bytes()))
}
