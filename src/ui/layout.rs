use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom: header, nav bar, main content, footer.
pub struct AppLayout {
    pub header: Rect,
    pub nav: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, footer_lines: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(footer_lines.max(1)),
            ])
            .split(area);

        Self {
            header: vertical[0],
            nav: vertical[1],
            main: vertical[2],
            footer: vertical[3],
        }
    }
}

/// Main content split: section heading, optional add-word form, card list.
pub struct SectionLayout {
    pub heading: Rect,
    pub form: Option<Rect>,
    pub cards: Rect,
}

impl SectionLayout {
    pub const FORM_HEIGHT: u16 = 6;

    pub fn new(area: Rect, with_form: bool) -> Self {
        let form_height = if with_form { Self::FORM_HEIGHT } else { 0 };
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(form_height),
                Constraint::Min(0),
            ])
            .split(area);

        Self {
            heading: vertical[0],
            form: with_form.then_some(vertical[1]),
            cards: vertical[2],
        }
    }
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width || !has_hint {
            current = candidate;
        } else {
            out.push(current);
            current = format!("{prefix}{hint}");
        }
        has_hint = true;
    }

    if has_hint {
        out.push(current);
    }
    out
}
