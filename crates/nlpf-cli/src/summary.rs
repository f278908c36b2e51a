use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::PreprocessResult;

/// Origin of a listed stop-word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordSource {
    English,
    Negation,
    Extra,
}

impl StopwordSource {
    fn label(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Negation => "negation",
            Self::Extra => "extra",
        }
    }
}

pub fn print_summary(result: &PreprocessResult) {
    print!("{}", render_summary(result));
    if !result.top_tokens.is_empty() {
        println!();
        println!("Top tokens:");
        println!("{}", top_tokens_table(result));
    }
}

/// Plain-text run summary, one `key: value` line per fact.
pub fn render_summary(result: &PreprocessResult) -> String {
    let mut lines = vec![
        format!("Input: {}", result.input.display()),
        format!("Output: {}", result.output.display()),
        format!("Text column: {}", result.text_column),
        format!(
            "Label column: {}",
            result.label_column.as_deref().unwrap_or("-")
        ),
    ];
    match &result.lexicon {
        Some(path) => {
            lines.push(format!("Lexicon: {}", path.display()));
            lines.push(format!("Subjectivity threshold: {:.2}", result.threshold));
        }
        None => lines.push("Lexicon: none (all sentences kept)".to_string()),
    }
    lines.push(format!("Stop-words: {}", result.stopwords));
    lines.push(format!(
        "Documents: {} ({} empty)",
        result.documents, result.empty_documents
    ));
    lines.push(format!(
        "Tokens: {} ({:.2} per document, {} distinct)",
        result.tokens,
        result.mean_tokens(),
        result.vocabulary
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn top_tokens_table(result: &PreprocessResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Token"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rank, entry) in result.top_tokens.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            token_cell(&entry.token),
            Cell::new(entry.count),
        ]);
    }
    table
}

pub fn stopwords_table(words: &[(String, StopwordSource)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Word"), header_cell("Source")]);
    apply_table_style(&mut table);
    for (word, source) in words {
        let source_cell = match source {
            StopwordSource::English => dim_cell(source.label()),
            StopwordSource::Negation => Cell::new(source.label()).fg(Color::Yellow),
            StopwordSource::Extra => Cell::new(source.label()).fg(Color::Green),
        };
        table.add_row(vec![Cell::new(word), source_cell]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn token_cell(token: &str) -> Cell {
    if token.ends_with("_NEG") {
        Cell::new(token).fg(Color::Magenta)
    } else {
        Cell::new(token).fg(Color::Blue)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
