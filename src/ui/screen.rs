use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, Focus};
use crate::navigation::Section;
use crate::ui::components::card_list::CardList;
use crate::ui::components::nav_bar::NavBar;
use crate::ui::components::section_heading::SectionHeading;
use crate::ui::components::word_form::WordFormView;
use crate::ui::layout::{AppLayout, SectionLayout, pack_hint_lines};

pub const TITLE: &str = "Advanced English Learning";

pub fn footer_hints(app: &App) -> Vec<&'static str> {
    let mut hints = match app.focus {
        Focus::Nav => vec!["[←/→ 1-6] Section", "[↓/Enter] Cards"],
        Focus::Cards => vec![
            "[↑/↓] Move",
            "[Enter/Space] Flip",
            "[e] Example",
            "[Tab] Nav",
        ],
        Focus::Form => vec![
            "[Tab/↑/↓] Field",
            "[Enter] Add Word",
            "[Esc] Done",
        ],
    };
    if app.focus != Focus::Form {
        if app.section() == Section::Vocabulary {
            hints.push("[a] Add word");
        }
        hints.push("[t] Theme");
        hints.push("[q] Quit");
    }
    hints
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let hints = footer_hints(app);
    let hint_lines = pack_hint_lines(&hints, area.width as usize);
    let layout = AppLayout::new(area, hint_lines.len() as u16);

    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {TITLE}"),
            Style::default()
                .fg(colors.header_fg())
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    frame.render_widget(
        NavBar::new(app.section(), app.focus == Focus::Nav, &app.theme),
        layout.nav,
    );

    let section = app.section();
    if section.heading().is_some() {
        let with_form = section == Section::Vocabulary;
        let section_layout = SectionLayout::new(layout.main, with_form);

        frame.render_widget(SectionHeading::new(section, &app.theme), section_layout.heading);
        if let Some(form_area) = section_layout.form {
            frame.render_widget(
                WordFormView::new(&app.form, app.focus == Focus::Form, &app.theme),
                form_area,
            );
        }

        let content = app.content();
        let list = CardList::new(
            content.faces(),
            &app.deck,
            app.focus == Focus::Cards,
            &app.theme,
        );
        frame.render_widget(list, section_layout.cards);
    }

    let footer = Paragraph::new(
        hint_lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text_muted()))))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(footer, layout.footer);
}
