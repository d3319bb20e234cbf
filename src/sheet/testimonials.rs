//! Testimonial sheet parsing.

use crate::domain::Testimonial;

use super::csv::{RawRow, parse_rows};

/// Parses a header-row testimonial sheet.
///
/// The first non-blank row is the header; the name, quote and member-since
/// columns are located case-insensitively ("MemberSince" and "Member Since"
/// both match). Rows missing a name or a quote are dropped. A sheet without
/// the name and quote columns yields nothing.
pub fn parse_testimonials(text: &str) -> Vec<Testimonial> {
    let rows = parse_rows(text);
    let Some(header_idx) = rows.iter().position(|r| !is_blank(r)) else {
        return Vec::new();
    };

    let header = &rows[header_idx];
    let (Some(name_col), Some(quote_col)) = (
        find_column(header, &["name"]),
        find_column(header, &["quote"]),
    ) else {
        return Vec::new();
    };
    let since_col = find_column(header, &["membersince", "member since"]);

    rows[header_idx + 1..]
        .iter()
        .filter_map(|row| {
            let name = row.field(name_col)?;
            let quote = row.field(quote_col)?;
            if name.is_empty() || quote.is_empty() {
                return None;
            }
            let member_since = since_col
                .and_then(|col| row.field(col))
                .unwrap_or_default()
                .to_string();
            Some(Testimonial {
                name: name.to_string(),
                quote: quote.to_string(),
                member_since,
            })
        })
        .collect()
}

fn is_blank(row: &RawRow) -> bool {
    row.fields().iter().all(|f| f.is_empty())
}

fn find_column(header: &RawRow, names: &[&str]) -> Option<usize> {
    header.fields().iter().position(|field| {
        let field = field.to_lowercase();
        names.iter().any(|name| field == *name)
    })
}
