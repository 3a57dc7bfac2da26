use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// A horizontally and vertically centred box, clamped to the available area.
pub fn calculate_dialog_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_screen_chunks(area);

        // Margin 1 leaves 38 rows: 3 header, 3 footer, 32 body.
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        assert_eq!(layout.body_area.height, 32);
        assert_eq!(layout.body_area.y, 4);
    }

    #[test]
    fn test_dialog_area_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let dialog = calculate_dialog_area(area, 50, 10);
        assert_eq!(dialog, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_dialog_area_clamped() {
        let area = Rect::new(2, 2, 30, 8);
        let dialog = calculate_dialog_area(area, 50, 10);
        assert_eq!(dialog, Rect::new(2, 2, 30, 8));
    }
}
