use std::io::{self, IsTerminal, Write};

use glossa_core::listing::PageView;
use glossa_shared::TermPayload;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DEFINITION_WIDTH: usize = 48;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new() -> Self {
        let color = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip_all)]
    pub fn write_page<W: Write>(&self, mut out: W, view: &PageView) -> anyhow::Result<()> {
        if view.items.is_empty() {
            writeln!(out, "No terms found.")?;
        } else {
            let headers = [
                "Term",
                "Definition",
                "Translation",
                "Category",
                "Theme",
                "Language",
            ]
            .map(str::to_string)
            .to_vec();

            let rows = view
                .items
                .iter()
                .map(|term| {
                    vec![
                        self.paint(&term.term, "1"),
                        truncate_to_width(&term.definition, DEFINITION_WIDTH),
                        term.translation.clone(),
                        term.grammatical_category.clone(),
                        term.theme.clone(),
                        term.language.clone(),
                    ]
                })
                .collect();
            write_table(&mut out, headers, rows)?;
        }

        writeln!(
            out,
            "page {}/{} ({} {})",
            view.page,
            view.page_count,
            view.total,
            if view.total == 1 { "term" } else { "terms" }
        )?;
        Ok(())
    }

    pub fn write_payload<W: Write>(
        &self,
        mut out: W,
        heading: &str,
        payload: &TermPayload,
    ) -> anyhow::Result<()> {
        writeln!(out, "{}", self.paint(heading, "32"))?;
        writeln!(out, "term         {}", payload.term)?;
        writeln!(out, "definition   {}", payload.definition)?;
        writeln!(out, "translation  {}", payload.translation)?;
        writeln!(out, "category     {}", payload.grammatical_category)?;
        writeln!(out, "theme        {}", payload.theme)?;
        writeln!(out, "language     {}", payload.language)?;
        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    write_row(&mut writer, &headers, &widths)?;
    for width in &widths {
        write!(writer, "{:-<width$} ", "", width = width)?;
    }
    writeln!(writer)?;

    for row in &rows {
        write_row(&mut writer, row, &widths)?;
    }

    Ok(())
}

fn write_row<W: Write>(writer: &mut W, cells: &[String], widths: &[usize]) -> anyhow::Result<()> {
    for (cell, width) in cells.iter().zip(widths) {
        let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
        let padding = width.saturating_sub(visible_width);
        write!(writer, "{}{} ", cell, " ".repeat(padding))?;
    }
    writeln!(writer)?;
    Ok(())
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width + 1 > max {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use glossa_shared::{TermDto, TermStatus};

    use super::*;

    fn view(items: Vec<TermDto>) -> PageView {
        let total = items.len();
        PageView {
            items,
            page: 1,
            page_count: 1,
            total,
        }
    }

    #[test]
    fn page_lists_terms_and_footer() {
        let items = vec![TermDto {
            id: "1".to_string(),
            term: "Chat".to_string(),
            definition: "Animal domestique".to_string(),
            translation: "Cat".to_string(),
            grammatical_category: "Noun".to_string(),
            theme: "Animals".to_string(),
            language: "French".to_string(),
            status: TermStatus::Approved,
        }];

        let mut out = Vec::new();
        Renderer::plain()
            .write_page(&mut out, &view(items))
            .expect("render succeeds");
        let text = String::from_utf8(out).expect("utf8 output");

        assert!(text.starts_with("Term "));
        assert!(text.contains("Animal domestique"));
        assert!(text.trim_end().ends_with("page 1/1 (1 term)"));
    }

    #[test]
    fn empty_page_says_so() {
        let mut out = Vec::new();
        Renderer::plain()
            .write_page(&mut out, &view(Vec::new()))
            .expect("render succeeds");
        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.starts_with("No terms found."));
        assert!(text.contains("(0 terms)"));
    }

    #[test]
    fn long_definitions_are_truncated_by_display_width() {
        let long = "é".repeat(60);
        let cut = truncate_to_width(&long, 10);
        assert_eq!(UnicodeWidthStr::width(cut.as_str()), 10);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn strip_ansi_removes_color_codes() {
        assert_eq!(strip_ansi("\x1b[1mChat\x1b[0m"), "Chat");
    }
}
