pub mod file_picker;
pub mod preview_table;
pub mod status_bar;
pub mod text_input;

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::prelude::{Frame, Rect};
    use ratatui::Terminal;

    pub fn draw(width: u16, height: u16, f: impl FnOnce(&mut Frame, Rect)) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                f(frame, area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    pub fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default()).collect()
    }

    pub fn all_text(buf: &Buffer) -> String {
        (0..buf.area.height).map(|y| row_text(buf, y)).collect::<Vec<_>>().join("\n")
    }
}
