use super::state::SortDirection;
use super::view::{TableBody, TableView};

/// Renders a view as a boxed plain-text table for terminals and logs.
pub fn render_text(view: &TableView) -> String {
    let headers: Vec<String> = view
        .headers
        .iter()
        .map(|header| match header.sorted {
            Some(SortDirection::Ascending) => format!("{} ^", header.label),
            Some(SortDirection::Descending) => format!("{} v", header.label),
            None => header.label.clone(),
        })
        .collect();

    let rows: Vec<Vec<String>> = view
        .body
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.plain_text()).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|label| width(label)).collect();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = (*slot).max(width(cell));
            }
        }
    }

    let inner = if widths.is_empty() {
        0
    } else {
        widths.iter().sum::<usize>() + 3 * widths.len() - 1
    };
    let rule = separator(&widths);

    let mut out = String::new();
    out.push_str(&format!("{}\n", view.title));
    if view.search.visible {
        out.push_str(&format!("Search: {}\n", view.search.term));
    }
    out.push_str(&rule);
    out.push_str(&line(&headers, &widths));
    out.push_str(&rule);

    match &view.body {
        TableBody::Rows { .. } => {
            for row in &rows {
                out.push_str(&line(row, &widths));
            }
        }
        TableBody::Empty { message, .. } => {
            out.push_str(&format!("|{}|\n", center(message, inner)));
        }
    }

    out.push_str(&rule);
    let nav = format!(
        "{} | {} | {}",
        if view.footer.previous_enabled {
            "< Previous"
        } else {
            "(Previous)"
        },
        view.footer.page_label,
        if view.footer.next_enabled {
            "Next >"
        } else {
            "(Next)"
        }
    );
    out.push_str(&format!("{}    {}\n", view.footer.summary(), nav));
    out
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn separator(widths: &[usize]) -> String {
    let mut rule = String::from("+");
    for width in widths {
        rule.push_str(&"-".repeat(width + 2));
        rule.push('+');
    }
    rule.push('\n');
    rule
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let mut out = String::from("|");
    for (index, width) in widths.iter().enumerate() {
        let cell = cells.get(index).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(self::width(cell));
        out.push_str(&format!(" {}{} |", cell, " ".repeat(pad)));
    }
    out.push('\n');
    out
}

fn center(text: &str, width: usize) -> String {
    let len = self::width(text);
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
