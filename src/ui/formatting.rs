use colored::Colorize;
use p360_core::{Attribute, ComparisonResult, ComparisonRow, Item};

use crate::images::ProductImage;
use crate::state::PageView;

/// "Page X of Y" heading plus the item count line
pub fn format_page_header(view: &PageView) -> String {
    let shown = match view.range {
        Some((first, last)) => format!("{}-{}", first, last),
        None => "0".to_string(),
    };
    format!(
        "{}\nShowing {} of {} items found",
        format!("Page {} of {}", view.page_number, view.total_pages).bold(),
        shown,
        view.total_items
    )
}

/// Previous/next hints shown under a page
pub fn format_page_controls(view: &PageView) -> String {
    let previous = if view.has_previous {
        format!("--page {}  < previous", view.page_number - 1)
    } else {
        String::new()
    };
    let next = if view.has_next {
        format!("next >  --page {}", view.page_number + 1)
    } else {
        String::new()
    };

    match (previous.is_empty(), next.is_empty()) {
        (true, true) => String::new(),
        (false, true) => previous,
        (true, false) => next,
        (false, false) => format!("{}    {}", previous, next),
    }
}

/// Attribute list as two aligned columns, without headers
/// Missing names or values render as blanks
pub fn format_attributes(attributes: &[Attribute]) -> String {
    let rows: Vec<(&str, &str)> = attributes
        .iter()
        .map(|attr| {
            (
                attr.name.as_deref().unwrap_or(""),
                attr.value.as_deref().unwrap_or(""),
            )
        })
        .collect();

    let width = rows.iter().map(|(name, _)| display_width(name)).max().unwrap_or(0);

    rows.iter()
        .map(|(name, value)| format!("  {}  {}", pad(name, width), value).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One product card
pub fn format_item_card(item: &Item, image: Option<&ProductImage>) -> String {
    let mut lines = Vec::new();

    lines.push(format!("### {}", item.name).bold().to_string());
    lines.push(format!("{} {}", "Segment:".bold(), item.segment));

    if let Some(image) = image {
        lines.push(format!("[{}]", image.caption()).dimmed().to_string());
    }

    if !item.description.is_empty() {
        lines.push(item.description.clone());
    }
    if !item.brand.is_empty() {
        lines.push(item.brand.clone());
    }

    lines.push(format!("{} R$ {}", "Price:".bold(), item.price));

    if !item.attributes.is_empty() {
        lines.push(format_attributes(&item.attributes));
    }

    lines.push("-".repeat(40).dimmed().to_string());
    lines.join("\n")
}

/// Render comparison rows as an aligned table with a header row
pub fn format_table(first_header: &str, columns: &[String], rows: &[ComparisonRow]) -> String {
    let mut widths: Vec<usize> = std::iter::once(display_width(first_header))
        .chain(columns.iter().map(|c| display_width(c)))
        .collect();

    for row in rows {
        widths[0] = widths[0].max(display_width(&row.label));
        for (idx, value) in row.values.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx + 1) {
                *width = (*width).max(display_width(value));
            }
        }
    }

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let header = render(
        std::iter::once(first_header)
            .chain(columns.iter().map(String::as_str))
            .collect(),
    );
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![header, separator];
    for row in rows {
        lines.push(render(
            std::iter::once(row.label.as_str())
                .chain(row.values.iter().map(String::as_str))
                .collect(),
        ));
    }
    lines.join("\n")
}

/// Summary table followed by the attribute table
pub fn format_comparison(result: &ComparisonResult) -> String {
    let title = format!("Comparing: {}", result.columns.join(" VS "));
    let mut sections = vec![
        title.bold().to_string(),
        format_table("Attribute", &result.columns, &result.summary),
    ];

    sections.push("Attributes".bold().to_string());
    if result.attributes.is_empty() {
        sections.push("_No attributes on the selected products._".to_string());
    } else {
        sections.push(format_table("Attribute", &result.columns, &result.attributes));
    }

    sections.join("\n\n")
}

/// Selection options with the first entry marked as default
pub fn format_options(heading: &str, options: &[String]) -> String {
    let mut lines = vec![heading.bold().to_string()];
    for (idx, option) in options.iter().enumerate() {
        if idx == 0 {
            lines.push(format!("  * {} (default)", option));
        } else {
            lines.push(format!("  - {}", option));
        }
    }
    lines.join("\n")
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}
