//! HTML → plain text.
//!
//! Renders the visible text of an HTML fragment the way a browser's
//! "copy as plain text" would, without building a DOM.

use pp_core::ports::{DecodeError, RichTextDecoderPort};

use super::entities;

const FORMAT: &str = "HTML";

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table",
    "tbody", "textarea", "tfoot", "thead", "tr", "ul",
];

/// Elements whose content is never rendered. Their end tag is searched for
/// literally.
const RAW_HIDDEN_ELEMENTS: &[&str] = &["script", "style", "title", "template", "noscript"];

const PRESERVE_WHITESPACE: &[&str] = &["pre", "textarea", "listing", "plaintext"];

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlDecoder;

impl HtmlDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl RichTextDecoderPort for HtmlDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(DecodeError::Empty);
        }
        let source =
            std::str::from_utf8(bytes).map_err(|_| DecodeError::Encoding { encoding: "UTF-8" })?;

        let text = Renderer::default().render(strip_cf_html_header(source));
        if text.trim().is_empty() {
            return Err(DecodeError::NoText { format: FORMAT });
        }
        Ok(text)
    }
}

/// Windows "HTML Format" payloads start with a `Version:` / offsets header.
fn strip_cf_html_header(source: &str) -> &str {
    if source.starts_with("Version:") {
        source.find('<').map_or("", |i| &source[i..])
    } else {
        source
    }
}

struct Tag<'a> {
    name: String,
    closing: bool,
    /// Remaining input after the tag's `>`.
    rest: &'a str,
}

#[derive(Default)]
struct Renderer {
    out: String,
    pending_space: bool,
    preserve_depth: usize,
    in_head: bool,
    cell_open_in_row: bool,
}

impl Renderer {
    fn render(mut self, mut input: &str) -> String {
        while let Some(c) = input.chars().next() {
            match c {
                '<' => input = self.markup(input),
                '&' => {
                    let after = &input[1..];
                    match entities::decode_reference(after) {
                        Some((decoded, consumed)) => {
                            self.push_char(decoded);
                            input = &after[consumed..];
                        }
                        None => {
                            self.push_char('&');
                            input = after;
                        }
                    }
                }
                c => {
                    if self.preserve_depth > 0 {
                        self.push_raw(c);
                    } else if c.is_ascii_whitespace() {
                        self.pending_space = true;
                    } else {
                        self.push_char(c);
                    }
                    input = &input[c.len_utf8()..];
                }
            }
        }

        self.out
            .trim_end_matches([' ', '\t', '\n'])
            .trim_start_matches('\n')
            .to_string()
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with(['\n', '\t', '\u{2028}'])
    }

    fn push_char(&mut self, c: char) {
        if self.in_head {
            return;
        }
        if self.pending_space && !self.at_line_start() {
            self.out.push(' ');
        }
        self.pending_space = false;
        self.out.push(c);
    }

    fn push_raw(&mut self, c: char) {
        if !self.in_head {
            self.out.push(c);
        }
    }

    fn line_break(&mut self) {
        self.pending_space = false;
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            // trailing spaces before a break are not significant
            let trimmed = self.out.trim_end_matches(' ').len();
            self.out.truncate(trimmed);
            self.out.push('\n');
        }
    }

    /// Handles one `<...>` construct and returns the input after it.
    fn markup<'a>(&mut self, input: &'a str) -> &'a str {
        if let Some(rest) = input.strip_prefix("<!--") {
            return rest.find("-->").map_or("", |i| &rest[i + 3..]);
        }

        let next = input[1..].chars().next();
        match next {
            Some('!') | Some('?') => {
                return input.find('>').map_or("", |i| &input[i + 1..]);
            }
            Some(c) if c.is_ascii_alphabetic() || c == '/' => {}
            _ => {
                // a bare '<' is text
                self.push_char('<');
                return &input[1..];
            }
        }

        let Some(tag) = parse_tag(input) else {
            return "";
        };
        let rest = tag.rest;
        let name = tag.name.as_str();

        if !tag.closing && RAW_HIDDEN_ELEMENTS.contains(&name) {
            return skip_raw_element(rest, name);
        }

        match (name, tag.closing) {
            ("head", false) => self.in_head = true,
            ("head", true) | ("body", false) => self.in_head = false,
            ("br", _) => {
                if !self.in_head {
                    self.pending_space = false;
                    self.out.push('\u{2028}');
                }
            }
            ("tr", false) => {
                self.cell_open_in_row = false;
                self.line_break();
            }
            ("td" | "th", false) => {
                if self.cell_open_in_row && !self.in_head {
                    self.pending_space = false;
                    self.out.push('\t');
                }
                self.cell_open_in_row = true;
            }
            _ => {}
        }

        if PRESERVE_WHITESPACE.contains(&name) {
            if tag.closing {
                self.preserve_depth = self.preserve_depth.saturating_sub(1);
            } else {
                self.preserve_depth += 1;
            }
        }
        if BLOCK_ELEMENTS.contains(&name) {
            self.line_break();
        }

        rest
    }
}

fn parse_tag(input: &str) -> Option<Tag<'_>> {
    let body = &input[1..];
    let (closing, body) = match body.strip_prefix('/') {
        Some(b) => (true, b),
        None => (false, body),
    };
    let name_len = body
        .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
        .unwrap_or(body.len());
    let name = body[..name_len].to_ascii_lowercase();

    // find the closing '>' outside quoted attribute values
    let mut quote: Option<char> = None;
    for (i, c) in body[name_len..].char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => {
                let end = name_len + i + 1;
                return Some(Tag {
                    name,
                    closing,
                    rest: &body[end..],
                });
            }
            _ => {}
        }
    }
    None
}

fn skip_raw_element<'a>(rest: &'a str, name: &str) -> &'a str {
    let closing = format!("</{name}");
    let lower = rest.to_ascii_lowercase();
    match lower.find(&closing) {
        Some(start) => rest[start..].find('>').map_or("", |i| &rest[start + i + 1..]),
        None => "",
    }
}
