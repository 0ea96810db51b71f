use solardocs_layout::MM_PER_PT;

/// Converts millimetres to PDF points.
pub fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encodes text for the WinAnsi standard fonts; characters outside
/// Latin-1 become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20ac}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_width_in_points() {
        assert!((mm_to_pt(210.0) - 595.28).abs() < 0.01);
    }

    #[test]
    fn flips_against_page_height() {
        assert_eq!(flip_y(20.0, 297.0), 277.0);
    }

    #[test]
    fn win_ansi_replaces_unsupported_characters() {
        assert_eq!(to_win_ansi("Rs. 10"), b"Rs. 10");
        assert_eq!(to_win_ansi("\u{20b9}10"), b"?10");
        assert_eq!(to_win_ansi("caf\u{e9} \u{2013}"), vec![b'c', b'a', b'f', 0xe9, b' ', 0x96]);
    }
}
