use proc_macro2::{LineColumn, TokenStream};
use quote::ToTokens;
use unicode_width::UnicodeWidthChar;

/// Source text with a line table, used to slice spans back out of a file.
pub(crate) struct SourceText<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(idx, _)| idx + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// Renders a syntax node as the text it was written with, falling back to
    /// token printing when the span cannot be mapped onto the source.
    pub(crate) fn render<T: ToTokens + ?Sized>(&self, node: &T) -> String {
        let tokens = node.to_token_stream();
        token_extent(tokens.clone())
            .and_then(|(start, end)| self.slice(start, end))
            .map(normalize_whitespace)
            .unwrap_or_else(|| tokens.to_string())
    }

    fn slice(&self, start: LineColumn, end: LineColumn) -> Option<&'a str> {
        let start = self.offset(start)?;
        let end = self.offset(end)?;
        self.source.get(start..end)
    }

    /// Byte offset of a 1-based line and 0-based character column.
    fn offset(&self, at: LineColumn) -> Option<usize> {
        let (line_start, line) = self.line(at.line)?;
        line.char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(line.len()))
            .nth(at.column)
            .map(|idx| line_start + idx)
    }

    /// 1-based column of a 1-based line and 0-based character column, in
    /// the display units rustc uses for `Location::column`: a tab counts as
    /// four, a wide character as two.
    pub(crate) fn display_column(&self, at: LineColumn) -> Option<usize> {
        let (_, line) = self.line(at.line)?;
        let width: usize = line.chars().take(at.column).map(char_width).sum();
        Some(width + 1)
    }

    fn line(&self, line: usize) -> Option<(usize, &'a str)> {
        let line_start = *self.line_starts.get(line.checked_sub(1)?)?;
        let rest = self.source.get(line_start..)?;
        Some((line_start, rest.split('\n').next().unwrap_or_default()))
    }
}

fn char_width(ch: char) -> usize {
    match ch {
        '\t' => 4,
        _ => ch.width().unwrap_or(1),
    }
}

/// Start of the first token and end of the last token in `tokens`.
pub(crate) fn token_extent(tokens: TokenStream) -> Option<(LineColumn, LineColumn)> {
    let mut iter = tokens.into_iter();
    let first = iter.next()?;
    let start = first.span().start();
    let end = iter
        .last()
        .map_or_else(|| first.span().end(), |last| last.span().end());
    Some((start, end))
}

/// Joins a multi-line expression into a single line.
fn normalize_whitespace(text: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.starts_with([')', ']']) {
            if out.ends_with(',') {
                out.pop();
            }
        } else if !out.is_empty() && !out.ends_with(['(', '[']) {
            out.push(' ');
        }
        out.push_str(line);
    }
    out
}
