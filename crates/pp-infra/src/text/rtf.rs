//! RTF → plain text.
//!
//! A single-pass reader over the RTF token stream. It keeps a group stack with
//! the two properties that affect visible text (destination skipping and the
//! `\ucN` fallback count) and ignores all formatting.

use pp_core::ports::{DecodeError, RichTextDecoderPort};

use super::cp1252;

const FORMAT: &str = "RTF";

/// Destinations whose content is never visible text.
const SKIPPED_DESTINATIONS: &[&str] = &[
    "fonttbl",
    "colortbl",
    "stylesheet",
    "info",
    "pict",
    "object",
    "objdata",
    "fldinst",
    "header",
    "headerl",
    "headerr",
    "headerf",
    "footer",
    "footerl",
    "footerr",
    "footerf",
    "footnote",
    "listtable",
    "listoverridetable",
    "revtbl",
    "rsidtbl",
    "xmlnstbl",
    "generator",
    "filetbl",
    "themedata",
    "colorschememapping",
    "datastore",
    "latentstyles",
    "pgdsctbl",
    "nonshppict",
    "shpinst",
    "bkmkstart",
    "bkmkend",
    "mmathPr",
    "expandedcolortbl",
];

#[derive(Debug, Clone, Copy)]
struct GroupState {
    skip: bool,
    /// Fallback characters following each `\uN`.
    uc: usize,
}

impl Default for GroupState {
    fn default() -> Self {
        Self { skip: false, uc: 1 }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RtfDecoder;

impl RtfDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl RichTextDecoderPort for RtfDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let text = Reader::new(bytes)?.run()?;
        if text.trim().is_empty() {
            return Err(DecodeError::NoText { format: FORMAT });
        }
        Ok(text)
    }
}

fn malformed(reason: impl Into<String>) -> DecodeError {
    DecodeError::Malformed {
        format: FORMAT,
        reason: reason.into(),
    }
}

struct Reader<'a> {
    input: &'a [u8],
    pos: usize,
    stack: Vec<GroupState>,
    state: GroupState,
    /// Remaining `\uN` fallback characters to drop.
    pending_fallback: usize,
    pending_high_surrogate: Option<u16>,
    out: String,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        let start = bytes
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .ok_or(DecodeError::Empty)?;
        let input = &bytes[start..];
        if !input.starts_with(b"{\\rtf") {
            return Err(malformed("missing {\\rtf header"));
        }
        Ok(Self {
            input,
            pos: 0,
            stack: Vec::new(),
            state: GroupState::default(),
            pending_fallback: 0,
            pending_high_surrogate: None,
            out: String::new(),
        })
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn run(mut self) -> Result<String, DecodeError> {
        let mut depth = 0usize;
        while let Some(byte) = self.peek() {
            self.pos += 1;
            match byte {
                b'{' => {
                    self.stack.push(self.state);
                    self.pending_fallback = 0;
                    depth += 1;
                }
                b'}' => {
                    self.state = self.stack.pop().ok_or_else(|| malformed("unbalanced '}'"))?;
                    self.pending_fallback = 0;
                    depth -= 1;
                    if depth == 0 {
                        return Ok(self.out);
                    }
                }
                b'\\' => self.control()?,
                b'\r' | b'\n' => {}
                other => self.text(cp1252::decode_byte(other)),
            }
        }
        Err(malformed("unbalanced groups: missing closing '}'"))
    }

    fn text(&mut self, c: char) {
        if self.pending_fallback > 0 {
            self.pending_fallback -= 1;
            return;
        }
        self.emit(c);
    }

    fn emit(&mut self, c: char) {
        if !self.state.skip {
            self.out.push(c);
        }
    }

    fn control(&mut self) -> Result<(), DecodeError> {
        let Some(next) = self.peek() else {
            return Err(malformed("dangling backslash"));
        };

        if next.is_ascii_alphabetic() {
            let (word, param) = self.read_word();
            return self.control_word(&word, param);
        }

        self.pos += 1;
        match next {
            b'\'' => {
                let hex = self
                    .input
                    .get(self.pos..self.pos + 2)
                    .and_then(|h| std::str::from_utf8(h).ok())
                    .and_then(|h| u8::from_str_radix(h, 16).ok())
                    .ok_or_else(|| malformed("invalid \\' escape"))?;
                self.pos += 2;
                self.text(cp1252::decode_byte(hex));
            }
            b'\\' | b'{' | b'}' => self.text(char::from(next)),
            b'~' => self.text('\u{00A0}'),
            b'_' => self.text('\u{2011}'),
            b'*' => self.state.skip = true,
            // `\` followed by a line break is a paragraph.
            b'\n' | b'\r' => self.emit('\n'),
            // optional hyphen, index subentry, formula
            b'-' | b':' | b'|' => {}
            _ => {}
        }
        Ok(())
    }

    fn read_word(&mut self) -> (String, Option<i32>) {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        let word = String::from_utf8_lossy(&self.input[start..self.pos]).into_owned();

        let param_start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let param = std::str::from_utf8(&self.input[param_start..self.pos])
            .ok()
            .and_then(|p| p.parse::<i32>().ok());
        if param.is_none() {
            // a lone '-' is not a parameter
            self.pos = param_start;
        }

        if self.peek() == Some(b' ') {
            self.pos += 1;
        }
        (word, param)
    }

    fn control_word(&mut self, word: &str, param: Option<i32>) -> Result<(), DecodeError> {
        match word {
            "par" | "sect" | "page" => self.emit('\n'),
            "line" => self.emit('\u{2028}'),
            "tab" | "cell" | "nestcell" => self.emit('\t'),
            "row" | "nestrow" => {
                if !self.state.skip && self.out.ends_with('\t') {
                    self.out.pop();
                }
                self.emit('\n');
            }
            "emdash" => self.emit('\u{2014}'),
            "endash" => self.emit('\u{2013}'),
            "emspace" => self.emit('\u{2003}'),
            "enspace" => self.emit('\u{2002}'),
            "qmspace" => self.emit('\u{2005}'),
            "bullet" => self.emit('\u{2022}'),
            "lquote" => self.emit('\u{2018}'),
            "rquote" => self.emit('\u{2019}'),
            "ldblquote" => self.emit('\u{201C}'),
            "rdblquote" => self.emit('\u{201D}'),
            "zwj" => self.emit('\u{200D}'),
            "zwnj" => self.emit('\u{200C}'),
            "ltrmark" => self.emit('\u{200E}'),
            "rtlmark" => self.emit('\u{200F}'),
            "uc" => self.state.uc = param.unwrap_or(1).max(0) as usize,
            "u" => self.unicode(param.ok_or_else(|| malformed("\\u without a value"))?),
            "bin" => {
                let len = param.unwrap_or(0).max(0) as usize;
                self.pos = (self.pos + len).min(self.input.len());
            }
            w if SKIPPED_DESTINATIONS.contains(&w) => self.state.skip = true,
            _ => {}
        }
        Ok(())
    }

    fn unicode(&mut self, value: i32) {
        // Values above 32767 are written as negative 16-bit numbers.
        let unit = (if value < 0 { value + 0x1_0000 } else { value }) as u16;
        self.pending_fallback = self.state.uc;

        match unit {
            0xD800..=0xDBFF => self.pending_high_surrogate = Some(unit),
            0xDC00..=0xDFFF => {
                if let Some(high) = self.pending_high_surrogate.take() {
                    let decoded = char::decode_utf16([high, unit])
                        .next()
                        .and_then(|r| r.ok())
                        .unwrap_or('\u{FFFD}');
                    self.emit(decoded);
                } else {
                    self.emit('\u{FFFD}');
                }
            }
            _ => {
                if self.pending_high_surrogate.take().is_some() {
                    self.emit('\u{FFFD}');
                }
                self.emit(char::from_u32(u32::from(unit)).unwrap_or('\u{FFFD}'));
            }
        }
    }
}
