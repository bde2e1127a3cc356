// src/core/html.rs
//
// Case-insensitive tag-block scanning over raw HTML text. The cargo portal
// emits inconsistent tag casing and attribute quoting, so everything here
// scans a lowercased shadow of the source and slices the original.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Locate the next `<open ...> ... </close>` block at or after `from`.
/// Returns byte offsets spanning the whole block, opener included.
pub fn next_tag_block_ci(s: &str, open_pat: &str, close_pat: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(open_pat);
    let cl = to_lower(close_pat);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + close_pat.len();
    Some((start, end))
}

/// Inner text of a block produced by `next_tag_block_ci`:
/// everything between the opener's `>` and the closer's `<`.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Drop every `<...>` tag and collapse the remaining whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}
