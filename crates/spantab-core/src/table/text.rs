use scraper::{ElementRef, Node};

/// Presentational descendants left out of cell text (footnote markers, small print, line breaks).
const STRIPPED_TAGS: &[&str] = &["sup", "small", "br"];

const EN_DASH: char = '\u{2013}';

/// Display text of a table cell.
///
/// Footnote markers, small print and line breaks are skipped. When the cell
/// holds a geo-coordinate marker (`<span class="geo">`) only the marker's text
/// is used. The result is trimmed, every newline becomes a space, and en
/// dashes become plain hyphens.
pub fn clean_text(cell: ElementRef<'_>) -> String {
    let source = find_geo_marker(cell).unwrap_or(cell);
    let mut raw = String::new();
    collect_text(source, &mut raw);
    normalize(&raw)
}

fn is_stripped(element: ElementRef<'_>) -> bool {
    STRIPPED_TAGS.contains(&element.value().name())
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child) {
                    if !is_stripped(el) {
                        collect_text(el, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn find_geo_marker(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    for child in element.children().filter_map(ElementRef::wrap) {
        if is_stripped(child) {
            continue;
        }
        let el = child.value();
        if el.name() == "span" && el.classes().any(|c| c == "geo") {
            return Some(child);
        }
        if let Some(found) = find_geo_marker(child) {
            return Some(found);
        }
    }
    None
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| match ch {
            '\n' => ' ',
            EN_DASH => '-',
            _ => ch,
        })
        .collect()
}
