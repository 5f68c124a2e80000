//! Heuristic English syllable counting.
//!
//! Counts groups of consecutive vowels (`a e i o u y`) and then applies one
//! suffix correction:
//!
//! - a silent trailing `e` ("make"), except `le` after a consonant ("table")
//! - `ed` not preceded by `t` or `d` ("jumped", but not "wanted")
//! - `es` not preceded by a sibilant ("makes", "websites", but not "boxes")
//!
//! Every non-empty word has at least one syllable. The count is a pure
//! function of the word, so exact values can be pinned in tests.
//!
//! # Examples
//!
//! ```
//! use seoscribe::analysis::syllable::count_syllables;
//!
//! assert_eq!(count_syllables("readability"), 5);
//! assert_eq!(count_syllables("make"), 1);
//! assert_eq!(count_syllables("table"), 2);
//! assert_eq!(count_syllables(""), 0);
//! ```

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Count the syllables of a single word.
pub fn count_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    // Numbers and symbols still read as one unit.
    if letters.len() <= 3 {
        return 1;
    }

    let mut groups = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    if groups > 1 && has_silent_suffix(&letters) {
        groups -= 1;
    }

    groups.max(1)
}

fn has_silent_suffix(letters: &[char]) -> bool {
    let n = letters.len();
    let last = letters[n - 1];
    let second = letters[n - 2];
    let third = letters[n - 3];

    match (second, last) {
        ('l', 'e') => is_vowel(third),
        (_, 'e') => !is_vowel(second),
        ('e', 'd') => !matches!(third, 't' | 'd'),
        ('e', 's') => {
            let sibilant = matches!(third, 's' | 'x' | 'z' | 'c' | 'g')
                || (third == 'h' && matches!(letters[n - 4], 'c' | 's'));
            !sibilant && !is_vowel(third)
        }
        _ => false,
    }
}
