use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split-pane layout configuration
pub struct AppLayout {
    pub main_area: Rect,
    pub squad_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the application layout:
    /// - Main pane (roster list or detail card): 60% width (left)
    /// - Squad pane: 40% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        // Vertical split: main area + status bar
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        // Horizontal split: main + squad
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Roster list / detail card
                Constraint::Percentage(40), // Squad pane
            ])
            .split(vertical_chunks[0]);

        Self {
            main_area: horizontal_chunks[0],
            squad_area: horizontal_chunks[1],
            status_area: vertical_chunks[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area);

        // Status bar should be 1 row at bottom
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        // Main panes share the remaining rows
        assert_eq!(layout.main_area.height, 29);
        assert_eq!(layout.squad_area.height, 29);

        // Main should be ~60% width, squad ~40%
        assert_eq!(layout.main_area.width, 60);
        assert_eq!(layout.squad_area.width, 40);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 100, 4);
        let layout = AppLayout::new(area);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.main_area.height, 3);
        assert_eq!(layout.squad_area.height, 3);
    }
}
