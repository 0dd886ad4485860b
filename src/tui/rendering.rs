use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::Pokemon;
use crate::squad::{MAX_SQUAD_SIZE, Squad};
use crate::utils::{capitalize, format_dex_number, format_height, format_weight};

const TEXT_BRIGHT: Color = Color::Rgb(250, 250, 250);
const TEXT_MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// View-independent state handed to the renderer each frame
pub struct RenderState<'a> {
    pub search_query: &'a str,
    pub total_count: usize,
    pub squad: &'a Squad,
    pub status_message: Option<&'a StatusMessage>,
    /// When set, the main pane shows this record instead of the roster list
    pub detail: Option<&'a Pokemon>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, entries: &[&Pokemon], selected_idx: usize, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    if let Some(pokemon) = state.detail {
        render_detail_card(frame, layout.main_area, pokemon, state.squad);
    } else {
        render_roster_list(frame, layout.main_area, entries, selected_idx, state.squad);
    }
    render_squad_panel(frame, layout.squad_area, state.squad);
    render_status_bar(frame, layout.status_area, entries.len(), selected_idx, state);
}

fn render_roster_list(
    frame: &mut Frame,
    area: Rect,
    entries: &[&Pokemon],
    selected_idx: usize,
    squad: &Squad,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, pokemon)| {
            let marker = if squad.contains(pokemon.id) { "●" } else { " " };
            let types = pokemon.type_names().join("/");
            let content = format!(
                "{} {} {} | {}",
                marker,
                format_dex_number(pokemon.id),
                capitalize(&pokemon.name),
                types
            );

            let style = if idx == selected_idx {
                Style::default().fg(TEXT_BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_MUTED)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_MUTED))
            .title(" Roster "),
    );

    frame.render_widget(list, area);
}

fn render_detail_card(frame: &mut Frame, area: Rect, pokemon: &Pokemon, squad: &Squad) {
    let label = Style::default().fg(TEXT_MUTED);

    let membership = if squad.contains(pokemon.id) {
        Span::styled("in squad (Ctrl+S to remove)", Style::default().fg(ACCENT))
    } else if squad.is_full() {
        Span::styled("squad is full", Style::default().fg(ERROR))
    } else {
        Span::raw("not in squad (Ctrl+S to add)")
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", format_dex_number(pokemon.id), capitalize(&pokemon.name)),
            Style::default().fg(TEXT_BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Height: ", label), Span::raw(format_height(pokemon.height))]),
        Line::from(vec![Span::styled("Weight: ", label), Span::raw(format_weight(pokemon.weight))]),
        Line::from(vec![
            Span::styled("Types: ", label),
            Span::raw(pokemon.type_names().join(", ")),
        ]),
        Line::from(vec![
            Span::styled("Abilities: ", label),
            Span::raw(pokemon.ability_names().join(", ")),
        ]),
    ];

    if let Some(sprite) = &pokemon.sprites.front_default {
        lines.push(Line::from(vec![Span::styled("Sprite: ", label), Span::raw(sprite.clone())]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled("Squad: ", label), membership]));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(TEXT_MUTED))
                .title(" Details "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_squad_panel(frame: &mut Frame, area: Rect, squad: &Squad) {
    let mut lines: Vec<Line> = squad
        .members()
        .iter()
        .map(|member| {
            Line::from(format!(
                "{} {}",
                format_dex_number(member.id),
                capitalize(&member.name)
            ))
        })
        .collect();

    for _ in squad.len()..MAX_SQUAD_SIZE {
        lines.push(Line::from(Span::styled("· empty", Style::default().fg(TEXT_MUTED))));
    }

    lines.push(Line::from(""));
    let capacity_line = if squad.is_full() {
        Span::styled("Squad is full", Style::default().fg(ERROR))
    } else {
        let slots = squad.remaining_slots();
        let plural = if slots == 1 { "" } else { "s" };
        Span::styled(format!("{slots} slot{plural} left"), Style::default().fg(TEXT_MUTED))
    };
    lines.push(Line::from(capacity_line));

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_MUTED))
            .title(format!(" Squad ({}/{}) ", squad.len(), MAX_SQUAD_SIZE)),
    );

    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    filtered_count: usize,
    selected_idx: usize,
    state: &RenderState,
) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(color).bg(STATUS_BG))
    } else if state.detail.is_some() {
        (
            " Detail | Ctrl+S: toggle squad | Ctrl+Y: copy | Esc: back | Ctrl+C: quit ".to_string(),
            Style::default().fg(TEXT_BRIGHT).bg(STATUS_BG),
        )
    } else {
        let mut parts = vec![];

        parts.push(format!("Showing {}/{}", filtered_count, state.total_count));

        if !state.search_query.is_empty() {
            parts.push(format!("search: {}", state.search_query));
        }

        if filtered_count > 0 {
            parts.push(format!("entry {}/{}", selected_idx + 1, filtered_count));
        }

        parts.push("Enter: details".to_string());
        parts.push("Ctrl+S: squad".to_string());
        if !state.search_query.is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(TEXT_BRIGHT).bg(STATUS_BG))
    };

    let paragraph = Paragraph::new(status_text).style(style);

    frame.render_widget(paragraph, area);
}
