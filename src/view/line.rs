//! Row slicing and text formatting
//!
//! Splits the byte buffer into rows of [`BYTES_PER_LINE`] bytes and turns
//! each row into the three strings the grid shows: the address label, the
//! per-byte hex tokens, and the ASCII translation.

use super::layout::BYTES_PER_LINE;

/// One row of the hex grid, borrowed from the source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Row number within the viewport, starting at 0
    pub index: usize,
    /// Absolute address of the first byte in this row
    pub start_addr: u64,
    /// The row's bytes; shorter than 16 only on the final row
    pub bytes: &'a [u8],
}

impl Line<'_> {
    /// Address label for this row, eg `"DEADBEEF: "`
    pub fn address_label(&self) -> String {
        address_label(self.start_addr)
    }

    /// ASCII translation of the row's bytes
    pub fn ascii_text(&self) -> String {
        self.bytes.iter().map(|&b| ascii_char(b)).collect()
    }
}

/// Uppercase address label, zero-padded to 8 digits with a `": "` suffix.
///
/// Addresses above `0xFFFFFFFF` widen the field rather than truncate; the
/// 8-digit pad is a minimum width.
pub fn address_label(addr: u64) -> String {
    format!("{:08X}: ", addr)
}

/// Two-digit uppercase hex token for one byte
pub fn hex_token(byte: u8) -> String {
    format!("{:02X}", byte)
}

/// ASCII translation of one byte.
///
/// Only bytes strictly between space (0x20) and tilde (0x7E) render as
/// themselves; both boundary bytes render as `'.'`.
pub fn ascii_char(byte: u8) -> char {
    if byte > 0x20 && byte < 0x7E {
        byte as char
    } else {
        '.'
    }
}

/// Slice the buffer into rows of 16 bytes.
///
/// Stops after `lines_per_page` rows or when the buffer runs out,
/// whichever comes first. A row shorter than 16 bytes is the last one; any
/// buffer content past the viewport capacity is dropped. An empty buffer
/// yields no rows.
pub fn lines(data: &[u8], base_addr: u64, lines_per_page: usize) -> Vec<Line<'_>> {
    let mut result = Vec::new();

    for index in 0..lines_per_page {
        let offset = index * BYTES_PER_LINE;
        if offset >= data.len() {
            break;
        }

        let end = (offset + BYTES_PER_LINE).min(data.len());
        let chunk = &data[offset..end];

        result.push(Line {
            index,
            start_addr: base_addr.wrapping_add(offset as u64),
            bytes: chunk,
        });

        // a short row means the buffer is exhausted
        if chunk.len() < BYTES_PER_LINE {
            break;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_boundaries_are_strict() {
        // space and tilde are both outside the printable window
        assert_eq!(ascii_char(0x20), '.');
        assert_eq!(ascii_char(0x7E), '.');
        assert_eq!(ascii_char(0x21), '!');
        assert_eq!(ascii_char(0x7D), '}');
        assert_eq!(ascii_char(0x00), '.');
        assert_eq!(ascii_char(0x7F), '.');
        assert_eq!(ascii_char(0xFF), '.');
        assert_eq!(ascii_char(b'A'), 'A');
    }

    #[test]
    fn test_address_label_format() {
        assert_eq!(address_label(0x1000), "00001000: ");
        assert_eq!(address_label(0), "00000000: ");
        assert_eq!(address_label(0xDEADBEEF), "DEADBEEF: ");
    }

    #[test]
    fn test_address_label_expands_past_eight_digits() {
        assert_eq!(address_label(0x1_0000_0000), "100000000: ");
    }

    #[test]
    fn test_hex_token_format() {
        assert_eq!(hex_token(0x00), "00");
        assert_eq!(hex_token(0x7F), "7F");
        assert_eq!(hex_token(0xFF), "FF");
    }

    #[test]
    fn test_empty_buffer_yields_no_lines() {
        assert!(lines(&[], 0x1000, 16).is_empty());
    }

    #[test]
    fn test_exact_line_boundary() {
        let data = [0u8; 16];
        let rows = lines(&data, 0x1000, 16);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].start_addr, 0x1000);
        assert_eq!(rows[0].bytes.len(), 16);
    }

    #[test]
    fn test_partial_final_line_stops_iteration() {
        let data = [0u8; 20];
        let rows = lines(&data, 0x1000, 16);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].bytes.len(), 16);
        assert_eq!(rows[1].bytes.len(), 4);
        assert_eq!(rows[1].start_addr, 0x1010);
    }

    #[test]
    fn test_addresses_are_monotone() {
        let data = [0u8; 64];
        let rows = lines(&data, 0x4000, 16);
        assert_eq!(rows.len(), 4);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.index, i);
            assert_eq!(row.start_addr, 0x4000 + 16 * i as u64);
        }
    }

    #[test]
    fn test_viewport_capacity_truncates() {
        // one byte past capacity: 16 full rows, final byte dropped
        let data = [0xAAu8; 257];
        let rows = lines(&data, 0, 16);
        assert_eq!(rows.len(), 16);
        assert!(rows.iter().all(|r| r.bytes.len() == 16));
    }

    #[test]
    fn test_base_address_wraps() {
        let data = [0u8; 32];
        let rows = lines(&data, u64::MAX - 7, 16);
        assert_eq!(rows[0].start_addr, u64::MAX - 7);
        assert_eq!(rows[1].start_addr, 8);
    }

    #[test]
    fn test_ascii_text_of_row() {
        let line = Line {
            index: 0,
            start_addr: 0,
            bytes: b"Hi \x7F!",
        };
        assert_eq!(line.ascii_text(), "Hi..!");
    }
}
