#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub time_ms: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lyrics {
    Synced(Vec<Sentence>),
    Plain(Vec<String>),
}

impl Lyrics {
    pub fn from_text(text: &str) -> Self {
        let sentences = parse_lrc(text);
        if sentences.is_empty() {
            Lyrics::Plain(text.lines().map(str::to_string).collect())
        } else {
            Lyrics::Synced(sentences)
        }
    }

    pub fn is_synced(&self) -> bool {
        matches!(self, Lyrics::Synced(_))
    }
}

/// Parses `[mm:ss.xx]` tagged lines. A line may carry several tags; each
/// produces its own sentence. Tags that are not timestamps (`[ar:...]`) are
/// skipped. Timed blank lines are kept since they mark instrumental gaps.
pub fn parse_lrc(text: &str) -> Vec<Sentence> {
    let mut entries = Vec::new();
    for raw_line in text.lines() {
        let mut rest = raw_line.trim_start();
        let mut timestamps: Vec<u64> = Vec::new();

        while rest.starts_with('[') {
            let Some(close) = rest.find(']') else {
                break;
            };
            if let Some(ms) = parse_timestamp(&rest[1..close]) {
                timestamps.push(ms);
            }
            rest = &rest[close + 1..];
        }

        let content = rest.trim();
        for t in timestamps {
            entries.push(Sentence {
                time_ms: t,
                text: content.to_string(),
            });
        }
    }

    entries.sort_by_key(|e| e.time_ms);
    entries
}

fn parse_timestamp(tag: &str) -> Option<u64> {
    let (min_s, sec_s) = tag.split_once(':')?;
    let min = min_s.trim().parse::<u64>().ok()?;

    let (sec, frac_ms) = match sec_s.split_once('.') {
        Some((sec, frac)) => (sec.parse::<u64>().ok()?, parse_fraction(frac)?),
        None => (sec_s.parse::<u64>().ok()?, 0),
    };
    if sec >= 60 {
        return None;
    }

    min.checked_mul(60)?
        .checked_add(sec)?
        .checked_mul(1000)?
        .checked_add(frac_ms)
}

fn parse_fraction(frac: &str) -> Option<u64> {
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = &frac[..frac.len().min(3)];
    let value = digits.parse::<u64>().ok()?;
    Some(match digits.len() {
        1 => value * 100,
        2 => value * 10,
        _ => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(sentences: &[Sentence]) -> Vec<u64> {
        sentences.iter().map(|s| s.time_ms).collect()
    }

    #[test]
    fn parses_fraction_widths() {
        let parsed = parse_lrc("[00:01.5]a\n[00:02.25]b\n[00:03.125]c\n[00:04.98765]d\n[01:05]e");
        assert_eq!(times(&parsed), vec![1500, 2250, 3125, 4987, 65000]);
    }

    #[test]
    fn repeated_tags_expand_and_sort() {
        let parsed = parse_lrc("[00:10.00][00:02.00]chorus\n[00:05.00]verse");
        assert_eq!(times(&parsed), vec![2000, 5000, 10000]);
        assert_eq!(parsed[0].text, "chorus");
        assert_eq!(parsed[2].text, "chorus");
    }

    #[test]
    fn metadata_tags_are_ignored() {
        let parsed = parse_lrc("[ar:Someone]\n[ti:Song]\n[00:01.00]line");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, "line");
    }

    #[test]
    fn timed_blank_lines_are_kept() {
        let parsed = parse_lrc("[00:01.00]line\n[00:04.00]");
        assert_eq!(parsed.len(), 2);
        assert!(parsed[1].text.is_empty());
    }

    #[test]
    fn untimed_text_is_plain() {
        let lyrics = Lyrics::from_text("first line\nsecond line");
        assert_eq!(
            lyrics,
            Lyrics::Plain(vec!["first line".into(), "second line".into()])
        );
        assert!(Lyrics::from_text("[00:00.10]x").is_synced());
    }

    #[test]
    fn malformed_tags_do_not_panic() {
        assert!(parse_lrc("[00:xx.00]a\n[0:61]b\n[00:01.]c\n[unterminated").is_empty());
        assert!(parse_lrc("[99999999999999999:00.00]far too late").is_empty());
    }
}
