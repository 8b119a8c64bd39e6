//! Per-compile identifier namespacing.
//!
//! Two maps drawn into the same page may both declare a `forest` symbol or
//! a `<circle id="dot">` fragment. Every identifier a compile emits gets the
//! instance token appended (`forest-a1`) unless the map opted into the
//! global scope.
//!
//! Raw markup fragments are rewritten with a small single-pass tokenizer
//! that finds identifier-bearing attributes and renames only the identifier
//! text, copying everything else through unchanged.

/// How an identifier appears in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `id="name"`
    Id,
    /// `href="#name"` or `xlink:href="#name"`
    Href,
    /// `url(#name)`
    Url,
}

/// An identifier located in a markup string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    pub kind: ReferenceKind,
    pub name: &'a str,
    /// Byte range of `name` within the markup.
    pub start: usize,
    pub end: usize,
}

/// Identifier scope for one compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    suffix: Option<String>,
}

impl Namespace {
    /// Namespace for `instance`; `global` disables suffixing entirely.
    pub fn new(instance: &str, global: bool) -> Self {
        let suffix = if global || instance.is_empty() {
            None
        } else {
            Some(instance.to_string())
        };
        Self { suffix }
    }

    pub fn is_global(&self) -> bool {
        self.suffix.is_none()
    }

    /// Namespaced form of an identifier.
    pub fn apply(&self, id: &str) -> String {
        match &self.suffix {
            Some(suffix) => format!("{id}-{suffix}"),
            None => id.to_string(),
        }
    }

    /// Fragment reference to a namespaced identifier, e.g. `#forest-a1`.
    pub fn href(&self, id: &str) -> String {
        format!("#{}", self.apply(id))
    }

    /// Rename every identifier in a raw markup fragment and collapse the
    /// whitespace between adjacent tags.
    pub fn rewrite_markup(&self, markup: &str) -> String {
        let mut out = String::with_capacity(markup.len());
        let mut copied = 0;
        for reference in references(markup) {
            out.push_str(&markup[copied..reference.start]);
            out.push_str(&self.apply(reference.name));
            copied = reference.end;
        }
        out.push_str(&markup[copied..]);
        collapse_whitespace(&out)
    }
}

fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

/// Find the identifier following a quoted attribute value opener at `at`.
///
/// `at` points at the opening quote; with `fragment` set the value must
/// start with `#`.
fn quoted_name(bytes: &[u8], at: usize, fragment: bool) -> Option<(usize, usize)> {
    let quote = *bytes.get(at)?;
    if !is_quote(quote) {
        return None;
    }
    let mut start = at + 1;
    if fragment {
        if bytes.get(start) != Some(&b'#') {
            return None;
        }
        start += 1;
    }
    let len = bytes[start..].iter().position(|&b| b == quote)?;
    (len > 0).then_some((start, start + len))
}

/// Locate every identifier declaration and reference in `markup`, in
/// order of appearance.
pub fn references(markup: &str) -> Vec<Reference<'_>> {
    let bytes = markup.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let rest = &bytes[i..];
        let after_space = i > 0 && bytes[i - 1].is_ascii_whitespace();
        let after_attr_boundary = after_space || (i > 0 && bytes[i - 1] == b':');

        let hit = if after_space && rest.starts_with(b"id=") {
            quoted_name(bytes, i + 3, false).map(|range| (ReferenceKind::Id, range))
        } else if after_attr_boundary && rest.starts_with(b"href=") {
            quoted_name(bytes, i + 5, true).map(|range| (ReferenceKind::Href, range))
        } else if rest.starts_with(b"url(#") {
            let start = i + 5;
            bytes[start..]
                .iter()
                .position(|&b| b == b')')
                .filter(|&len| len > 0)
                .map(|len| (ReferenceKind::Url, (start, start + len)))
        } else {
            None
        };

        match hit {
            Some((kind, (start, end))) => {
                found.push(Reference {
                    kind,
                    name: &markup[start..end],
                    start,
                    end,
                });
                i = end;
            }
            None => i += 1,
        }
    }

    found
}

/// Drop whitespace runs that sit between a `>` and the next `<`.
pub fn collapse_whitespace(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(pos) = rest.find('>') {
        out.push_str(&rest[..=pos]);
        rest = &rest[pos + 1..];
        let trimmed = rest.trim_start();
        if trimmed.starts_with('<') {
            rest = trimmed;
        }
    }
    out.push_str(rest);
    out
}
