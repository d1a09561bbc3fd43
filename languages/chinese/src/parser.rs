//! CC-CEDICT line parser.
//!
//! Entry lines look like
//! `中國 中国 [Zhong1 guo2] /China/Middle Kingdom/`. Lines starting with `#`
//! are comments. Anything that does not fit the entry shape is dropped
//! without a diagnostic: partial lines at file boundaries are expected.

use std::sync::Arc;

use crate::dictionary::CedictEntry;
use crate::tone;

/// The four fields of an entry line, borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub traditional: &'a str,
    pub simplified: &'a str,
    pub pronunciation: &'a str,
    pub definitions: &'a str,
}

/// A parsed entry together with both of its pronunciation keys
#[derive(Debug, Clone)]
pub struct Record {
    pub entry: Arc<CedictEntry>,
    /// Lowercase, no whitespace, no tone digits: `zhongguo`
    pub bare_key: String,
    /// Lowercase, no whitespace, tone digits turned into marks: `zhōngguó`
    pub diacritic_key: String,
}

/// Parse every entry line of `text`, in source order
pub fn parse(text: &str) -> Vec<Record> {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(parse_line)
        .map(build_record)
        .collect()
}

/// Match `<trad> <simp> [<pinyin>] /<defs>/`.
///
/// Fields are separated by exactly one whitespace character. The definition
/// blob runs from the first `/` to the last one on the line; whatever follows
/// the last `/` is ignored.
pub fn parse_line(line: &str) -> Option<RawRecord<'_>> {
    let (traditional, rest) = split_token(line)?;
    let (simplified, rest) = split_token(rest)?;

    let rest = rest.strip_prefix('[')?;
    let close = rest.find(']')?;
    let pronunciation = &rest[..close];
    if pronunciation.is_empty() {
        return None;
    }

    let rest = skip_one_whitespace(&rest[close + 1..])?;
    let rest = rest.strip_prefix('/')?;
    let last = rest.rfind('/')?;
    let definitions = &rest[..last];
    if definitions.is_empty() {
        return None;
    }

    Some(RawRecord {
        traditional,
        simplified,
        pronunciation,
        definitions,
    })
}

pub fn bare_key(pronunciation: &str) -> String {
    pronunciation
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_ascii_digit())
        .collect()
}

/// Tone-marked pronunciation with whitespace removed, case kept
pub fn marked_pronunciation(pronunciation: &str) -> String {
    let compact: String = pronunciation
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    tone::convert(&compact)
}

/// Split a `/`-delimited blob, dropping blank fragments
pub fn split_definitions(blob: &str) -> Vec<String> {
    blob.split('/')
        .filter(|def| !def.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn build_record(raw: RawRecord<'_>) -> Record {
    let pronunciation = marked_pronunciation(raw.pronunciation);
    let diacritic_key = pronunciation.to_lowercase();

    Record {
        bare_key: bare_key(raw.pronunciation),
        diacritic_key,
        entry: Arc::new(CedictEntry {
            traditional: raw.traditional.to_string(),
            simplified: raw.simplified.to_string(),
            pronunciation,
            definitions: split_definitions(raw.definitions),
        }),
    }
}

/// `\S+\s`: a non-empty run of non-whitespace followed by one whitespace char
fn split_token(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace)?;
    if end == 0 {
        return None;
    }
    let rest = skip_one_whitespace(&s[end..])?;
    Some((&s[..end], rest))
}

fn skip_one_whitespace(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    let c = chars.next()?;
    c.is_whitespace().then(|| chars.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entry_line() {
        let raw = parse_line("中國 中国 [Zhong1 guo2] /China/Middle Kingdom/").unwrap();
        assert_eq!(
            raw,
            RawRecord {
                traditional: "中國",
                simplified: "中国",
                pronunciation: "Zhong1 guo2",
                definitions: "China/Middle Kingdom",
            }
        );
    }

    #[test]
    fn builds_both_keys() {
        let records = parse("中國 中国 [Zhong1 guo2] /China/Middle Kingdom/\n");
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.bare_key, "zhongguo");
        assert_eq!(record.diacritic_key, "zhōngguó");
        assert_eq!(record.entry.pronunciation, "Zhōngguó");
        assert_eq!(record.entry.definitions, vec!["China", "Middle Kingdom"]);
    }

    #[test]
    fn skips_comments_and_noise() {
        let text = [
            "# CC-CEDICT",
            "#! version=1",
            "",
            "not an entry",
            "中國 中国 Zhong1 guo2 /China/",
            "中國  中国 [Zhong1 guo2] /China/",
            "中國 中国 [] /China/",
            "中國 中国 [Zhong1 guo2] //",
            "中國 中国 [Zhong1 guo2]/China/",
            " 中國 中国 [Zhong1 guo2] /China/",
            "你好 你好 [ni3 hao3] /hello/",
        ]
        .join("\n");
        let records = parse(&text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].entry.simplified, "你好");
    }

    #[test]
    fn tolerates_trailing_content_after_last_slash() {
        let raw = parse_line("好 好 [hao3] /good/well/ trailing junk").unwrap();
        assert_eq!(raw.definitions, "good/well");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let records = parse("好 好 [hao3] /good/\r\n你 你 [ni3] /you/\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].entry.definitions, vec!["good"]);
        assert_eq!(records[1].entry.definitions, vec!["you"]);
    }

    #[test]
    fn blank_definition_fragments_are_dropped() {
        assert_eq!(split_definitions("a// /b"), vec!["a", "b"]);
        assert_eq!(split_definitions("/"), Vec::<String>::new());

        // Re-splitting the joined result is stable
        let once = split_definitions("to go/ /to leave//");
        let again = split_definitions(&once.join("/"));
        assert_eq!(once, again);
    }

    #[test]
    fn cedict_umlaut_spelling() {
        let records = parse("綠 绿 [lu:4] /green/");
        assert_eq!(records[0].entry.pronunciation, "lǜ");
        assert_eq!(records[0].diacritic_key, "lǜ");
        assert_eq!(records[0].bare_key, "lu:");
    }
}
