use std::borrow::Cow;

fn is_space_or_tab(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

/// Remove the run of leading spaces and tabs shared by every non-blank line.
/// Blank lines keep only their line ending.
pub fn dedent(s: &str) -> Cow<'_, str> {
    let mut common: Option<&str> = None;
    for line in s.lines().filter(|l| !l.trim().is_empty()) {
        let indent = &line[..line.len() - line.trim_start_matches(is_space_or_tab).len()];
        common = Some(match common {
            None => indent,
            Some(prefix) => {
                let shared = prefix
                    .bytes()
                    .zip(indent.bytes())
                    .take_while(|(a, b)| a == b)
                    .count();
                &prefix[..shared]
            }
        });
    }

    let prefix = match common {
        Some(prefix) if !prefix.is_empty() => prefix,
        _ => return Cow::Borrowed(s),
    };

    let mut out = String::with_capacity(s.len());
    for line in s.split_inclusive('\n') {
        match line.strip_prefix(prefix) {
            Some(rest) => out.push_str(rest),
            None => out.push_str(line.trim_start_matches(is_space_or_tab)),
        }
    }
    Cow::Owned(out)
}
