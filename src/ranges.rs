/// An inclusive range of Unicode code points belonging to one script block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRange {
    pub start: u32,
    pub end: u32,
}

impl ScriptRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Inclusive on both ends.
    pub const fn contains(&self, code_point: u32) -> bool {
        self.start <= code_point && code_point <= self.end
    }
}

/// Script blocks removed from pretraining text by default.
///
/// CJK Unified Ideographs [4E00, 9FFF] are deliberately absent so Chinese
/// Hanzi always survives. Latin, digits, punctuation and whitespace are
/// untouched as well.
pub const DEFAULT_REMOVAL_RANGES: &[ScriptRange] = &[
    // Arabic
    ScriptRange::new(0x0600, 0x06FF),
    // Arabic Presentation Forms-A (includes the Basmala, U+FDFD)
    ScriptRange::new(0xFB50, 0xFDFF),
    // Gurmukhi
    ScriptRange::new(0x0A00, 0x0A7F),
    // Malayalam
    ScriptRange::new(0x0D00, 0x0D7F),
    // Thai
    ScriptRange::new(0x0E00, 0x0E7F),
    // Myanmar
    ScriptRange::new(0x1000, 0x109F),
    // Hangul Jamo (decomposed)
    ScriptRange::new(0x1100, 0x11FF),
    // Hiragana
    ScriptRange::new(0x3040, 0x309F),
    // Katakana
    ScriptRange::new(0x30A0, 0x30FF),
    // Hangul Compatibility Jamo
    ScriptRange::new(0x3130, 0x318F),
    // Hangul Syllables (composed)
    ScriptRange::new(0xAC00, 0xD7A3),
    // Cyrillic
    ScriptRange::new(0x0400, 0x04FF),
    // Khmer
    ScriptRange::new(0x1780, 0x17FF),
    // Telugu
    ScriptRange::new(0x0C00, 0x0C7F),
    // Georgian
    ScriptRange::new(0x10A0, 0x10FF),
    // Mongolian
    ScriptRange::new(0x1800, 0x18AF),
];
