//! Flatten rendered HTML into text lines for page layout.
//!
//! Only the subset the receipt template uses is understood: block tags break
//! lines, table cells become columns, `<head>`/`<style>`/`<script>` content is
//! dropped, and character references are decoded.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: LineStyle,
    /// One entry per table cell; plain paragraphs have a single cell.
    pub cells: Vec<String>,
}

pub fn flatten(markup: &str) -> Vec<Line> {
    let mut f = Flattener::default();
    let mut rest = markup;

    while let Some(lt) = rest.find('<') {
        f.text(&rest[..lt]);
        let after = &rest[lt + 1..];
        match after.find('>') {
            Some(gt) => {
                f.tag(&after[..gt]);
                rest = &after[gt + 1..];
            }
            None => {
                rest = "";
            }
        }
    }
    f.text(rest);
    f.end_line();
    f.lines
}

struct Flattener {
    lines: Vec<Line>,
    cells: Vec<String>,
    text: String,
    style: LineStyle,
    skip_depth: usize,
}

impl Default for Flattener {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            cells: Vec::new(),
            text: String::new(),
            style: LineStyle::Body,
            skip_depth: 0,
        }
    }
}

impl Flattener {
    fn text(&mut self, raw: &str) {
        if self.skip_depth > 0 {
            return;
        }
        for c in decode_entities(raw).chars() {
            if c.is_whitespace() {
                if !self.text.is_empty() && !self.text.ends_with(' ') {
                    self.text.push(' ');
                }
            } else {
                self.text.push(c);
            }
        }
    }

    fn tag(&mut self, raw: &str) {
        if raw.starts_with('!') || raw.starts_with('?') {
            return;
        }
        let closing = raw.starts_with('/');
        let name = raw
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match name.as_str() {
            "head" | "style" | "script" | "title" => {
                if closing {
                    self.skip_depth = self.skip_depth.saturating_sub(1);
                } else {
                    self.skip_depth += 1;
                }
            }
            "td" | "th" if closing => self.push_cell(),
            "tr" if closing => self.end_line(),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.end_line();
                if !closing {
                    self.style = LineStyle::Heading;
                }
            }
            "br" | "p" | "div" | "li" | "table" | "section" | "header" | "footer" => {
                self.end_line()
            }
            _ => {}
        }
    }

    fn push_cell(&mut self) {
        self.cells.push(self.text.trim().to_string());
        self.text.clear();
    }

    fn end_line(&mut self) {
        if !self.text.trim().is_empty() {
            self.push_cell();
        }
        if self.cells.iter().any(|c| !c.is_empty()) {
            self.lines.push(Line {
                style: self.style,
                cells: std::mem::take(&mut self.cells),
            });
        }
        self.cells.clear();
        self.text.clear();
        self.style = LineStyle::Body;
    }
}

/// Decode named (`&amp;` etc.) and numeric (`&#39;`, `&#x2F;`) references.
/// Unknown references are kept verbatim.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let decoded = after
            .find(';')
            .filter(|&semi| semi <= 8)
            .and_then(|semi| decode_one(&after[..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
