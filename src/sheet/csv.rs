//! Delimited-text row parsing.

use std::mem::take;

/// RawRow is one line of delimited text split into trimmed fields.
///
/// No schema is enforced at this level: the field count may vary row to row,
/// and a field may be empty. Positional access lives in the classification
/// step, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: Vec<String>,
}

impl RawRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `index`, if the row is wide enough.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Splits the full text of a CSV document into rows of trimmed fields.
///
/// Double quotes toggle quoting; a comma inside quotes is literal content and
/// the quotes themselves are dropped. An empty line yields a row with one
/// empty field, which callers skip during classification. Unbalanced quotes
/// swallow the rest of the line rather than failing.
///
/// Never fails: worst case the caller sees rows with unexpected field counts.
pub fn parse_rows(text: &str) -> Vec<RawRow> {
    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> RawRow {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(take(&mut current)),
            _ => current.push(ch),
        }
    }
    // The final field always flushes, even when empty.
    fields.push(current);

    RawRow::new(fields.iter().map(|f| f.trim().to_string()).collect())
}
