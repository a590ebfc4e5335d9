/// Layout options resolved from [`crate::ui::prefs`].
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Render an aligned text table. Numeric cells are right-aligned; the widest
/// columns give up space first when `max_width` is set.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let widths = column_widths(headers, rows, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, Align::Left))
        .collect::<Vec<_>>()
        .join(GAP);

    let divider = "-".repeat(visible_len(&header_line));
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);

    for row in rows {
        let cells = widths.iter().enumerate().map(|(index, width)| {
            let text = clip(row.get(index).map_or("-", String::as_str), *width);
            let align = if looks_numeric(&text) {
                Align::Right
            } else {
                Align::Left
            };
            let text = if options.color {
                colorize_result(&text)
            } else {
                text
            };
            pad(&text, *width, align)
        });
        lines.push(cells.collect::<Vec<_>>().join(GAP));
    }

    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> Vec<usize> {
    let floor = |index: usize| headers[index].chars().count().max(MIN_COLUMN);
    let mut widths = (0..headers.len())
        .map(|index| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .fold(floor(index), usize::max)
        })
        .collect::<Vec<_>>();

    let Some(max_width) = max_width else {
        return widths;
    };
    let gaps = widths.len().saturating_sub(1) * GAP.len();

    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floor(*index))
            .max_by_key(|(index, width)| (**width, std::cmp::Reverse(*index)))
            .map(|(index, _)| index);
        match widest {
            Some(index) => widths[index] -= 1,
            None => break,
        }
    }
    widths
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value
        .chars()
        .take(width.saturating_sub(1))
        .collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_len(value)));
    match align {
        Align::Left => format!("{value}{fill}"),
        Align::Right => format!("{fill}{value}"),
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

/// Color playoff results and game outcomes: wins green, losses red,
/// missed postseasons yellow.
fn colorize_result(value: &str) -> String {
    let lower = value.trim().to_ascii_lowercase();
    let code = if lower.starts_with("won") {
        "32"
    } else if lower.starts_with("lost") {
        "31"
    } else if lower.starts_with("missed") || lower == "did not qualify" {
        "33"
    } else {
        return value.to_string();
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

/// Character count with ANSI color sequences removed.
fn visible_len(value: &str) -> usize {
    strip_ansi(value).chars().count()
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.by_ref().find(|next| *next == 'm');
            continue;
        }
        out.push(ch);
    }
    out
}
