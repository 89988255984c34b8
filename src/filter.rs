use crate::ranges::ScriptRange;

/// Removes every character whose code point falls inside any of `ranges`,
/// keeping all other characters in their original order.
///
/// Pure and idempotent; an empty table is the identity transform. The table
/// is small (tens of entries) so membership is a plain linear scan per
/// character. Leading/trailing whitespace left behind by removed characters
/// is the caller's to trim.
pub fn strip_scripts(text: &str, ranges: &[ScriptRange]) -> String {
    text.chars()
        .filter(|c| !ranges.iter().any(|range| range.contains(*c as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::DEFAULT_REMOVAL_RANGES;

    #[test]
    fn empty_table_is_identity() {
        let text = "你好 hello Привет ありがとう";
        assert_eq!(strip_scripts(text, &[]), text);
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(strip_scripts("", DEFAULT_REMOVAL_RANGES), "");
    }

    #[test]
    fn output_is_a_subsequence_of_input() {
        let text = "漢字abc가나다あいうκλμ123";
        let cleaned = strip_scripts(text, DEFAULT_REMOVAL_RANGES);
        let mut input = text.chars();
        for c in cleaned.chars() {
            assert!(
                input.any(|i| i == c),
                "'{c}' not found in input after previous matches"
            );
        }
    }

    #[test]
    fn idempotent() {
        let text = "你好katakana:ア hiragana:あ Hangul:가 end";
        let once = strip_scripts(text, DEFAULT_REMOVAL_RANGES);
        let twice = strip_scripts(&once, DEFAULT_REMOVAL_RANGES);
        assert_eq!(once, twice);
    }

    #[test]
    fn hanzi_is_always_preserved() {
        // Sampled across CJK Unified Ideographs [4E00, 9FFF]
        for code_point in [0x4E00u32, 0x4F60, 0x597D, 0x6C49, 0x8BED, 0x9FFF] {
            let c = char::from_u32(code_point).unwrap();
            let text = c.to_string();
            assert_eq!(strip_scripts(&text, DEFAULT_REMOVAL_RANGES), text);
        }
    }

    #[test]
    fn interval_boundaries_are_inclusive() {
        // One code point either side of the Hiragana and Katakana blocks
        assert_eq!(strip_scripts("\u{3040}", DEFAULT_REMOVAL_RANGES), "");
        assert_eq!(strip_scripts("\u{303F}", DEFAULT_REMOVAL_RANGES), "\u{303F}");
        assert_eq!(strip_scripts("\u{30FF}", DEFAULT_REMOVAL_RANGES), "");
        assert_eq!(strip_scripts("\u{3100}", DEFAULT_REMOVAL_RANGES), "\u{3100}");
    }

    #[test]
    fn mixed_script_text() {
        let text = "你好katakana:ア hiragana:あ Hangul:가 end";
        assert_eq!(
            strip_scripts(text, DEFAULT_REMOVAL_RANGES),
            "你好katakana: hiragana: Hangul: end"
        );
    }

    #[test]
    fn removes_each_listed_script() {
        // One representative character per block in the default table
        let text = "مあアㄱ가аကខతலഗਠᠠთ한";
        let cleaned = strip_scripts(text, DEFAULT_REMOVAL_RANGES);
        // Tamil (U+0BB2) is not in the table and survives
        assert_eq!(cleaned, "ல");
    }

    #[test]
    fn non_bmp_scalars_are_classified_per_scalar() {
        // Outside every listed range, so kept as-is
        let text = "𝄞😀你";
        assert_eq!(strip_scripts(text, DEFAULT_REMOVAL_RANGES), text);
    }
}
