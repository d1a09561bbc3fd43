//! Numbered-tone pinyin to tone-marked pinyin.
//!
//! A syllable is a run of latin letters ending in a vowel with an optional
//! `n`/`ng` coda, immediately followed by a tone digit. Only that last vowel
//! is marked, so `hao3` becomes `haǒ`, not `hǎo`. Digits 1-4
//! pick a mark; 5 and anything else render the bare vowel. The digit itself
//! is always consumed. Text that does not fit that shape is copied through.

/// Tone table per base vowel; slot 4 is the neutral (unmarked) form
const TONE_MARKS: [(char, [char; 5]); 6] = [
    ('a', ['ā', 'á', 'ǎ', 'à', 'a']),
    ('e', ['ē', 'é', 'ě', 'è', 'e']),
    ('i', ['ī', 'í', 'ǐ', 'ì', 'i']),
    ('o', ['ō', 'ó', 'ǒ', 'ò', 'o']),
    ('u', ['ū', 'ú', 'ǔ', 'ù', 'u']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ', 'ü']),
];

/// Replace every `vowel(+n|ng)+digit` syllable in `text` with its marked form
pub fn convert(text: &str) -> String {
    // CC-CEDICT spells ü as "u:"
    let text = text.replace("u:", "ü").replace("U:", "Ü");

    let mut out = String::with_capacity(text.len());
    let mut syllable = String::new();

    for c in text.chars() {
        if is_syllable_char(c) {
            syllable.push(c);
            continue;
        }

        if let Some(tone) = c.to_digit(10)
            && let Some(marked) = mark_syllable(&syllable, tone)
        {
            out.push_str(&marked);
            syllable.clear();
            continue;
        }

        out.push_str(&syllable);
        syllable.clear();
        out.push(c);
    }

    out.push_str(&syllable);
    out
}

/// Map tone-marked vowels back to their bare letters, leaving the rest as-is
pub fn strip_tone_marks(text: &str) -> String {
    text.chars()
        .map(|c| {
            let lower = c.to_lowercase().next().unwrap_or(c);
            match base_vowel(lower) {
                Some(base) if c.is_uppercase() => base.to_uppercase().next().unwrap_or(base),
                Some(base) => base,
                None => c,
            }
        })
        .collect()
}

fn base_vowel(marked: char) -> Option<char> {
    TONE_MARKS
        .iter()
        .find(|(_, marks)| marks[..4].contains(&marked))
        .map(|(base, _)| *base)
}

fn is_syllable_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == 'ü' || c == 'Ü'
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ü')
}

fn mark_syllable(syllable: &str, tone: u32) -> Option<String> {
    let mut chars: Vec<char> = syllable
        .chars()
        .map(|c| match c {
            'v' => 'ü',
            'V' => 'Ü',
            other => other,
        })
        .collect();
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    // Peel the nasal coda
    let mut end = lower.len();
    if lower.ends_with(&['n', 'g']) && end >= 3 && is_vowel(lower[end - 3]) {
        end -= 2;
    } else if lower.ends_with(&['n']) && end >= 2 && is_vowel(lower[end - 2]) {
        end -= 1;
    }

    if end == 0 || !is_vowel(lower[end - 1]) {
        return None;
    }

    // The mark goes on the vowel touching the coda or the digit
    let target = end - 1;

    let slot = match tone {
        1..=4 => tone as usize - 1,
        _ => 4,
    };
    let (_, marks) = TONE_MARKS.iter().find(|(base, _)| *base == lower[target])?;
    let marked = marks[slot];

    chars[target] = if chars[target].is_uppercase() {
        marked.to_uppercase().next().unwrap_or(marked)
    } else {
        marked
    };

    Some(chars.into_iter().collect())
}
