// src/core/html.rs

// Case-insensitive scan helpers for the contest pages. The markup is
// machine-generated and flat; we walk tag blocks by name and strip
// whatever is inside, which holds up better than full-document
// regexes against attribute noise.

fn ascii_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the next `<tag ...> … </tag>` block at or after `from`.
/// Returns byte positions (start of open tag, end after close tag).
pub fn tag_block(doc: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = ascii_lower(doc);
    let open = join!("<", tag);
    let close = join!("</", tag, ">");

    let start = lc.get(from..)?.find(&open)? + from;
    let open_end = doc[start..].find('>')? + start + 1;
    let close_rel = lc[open_end..].find(&close)?;
    Some((start, open_end + close_rel + close.len()))
}

/// Iterate every `<tag>…</tag>` block in `doc`, in document order.
pub fn tag_blocks<'a>(doc: &'a str, tag: &'a str) -> TagBlocks<'a> {
    TagBlocks { doc, tag, pos: 0 }
}

pub struct TagBlocks<'a> {
    doc: &'a str,
    tag: &'a str,
    pos: usize,
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (start, end) = tag_block(self.doc, self.tag, self.pos)?;
        self.pos = end;
        Some(&self.doc[start..end])
    }
}

/// Visible text of a block: drop the open/close tags and any nested
/// markup, decode the entities we actually meet, collapse whitespace.
pub fn block_text(block: &str) -> String {
    let inner = match (block.find('>'), block.rfind('<')) {
        (Some(open_end), Some(close_start)) if close_start > open_end => {
            &block[open_end + 1..close_start]
        }
        _ => "",
    };
    collapse_ws(&decode_entities(&strip_tags(inner)))
}

pub fn strip_tags(s: &str) -> String {
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
    out
}

// Decoded after strip_tags so a literal &lt; cannot open a fake tag.
pub fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
