//! Line-addressed status text on the brain screen.

use vexide::{
    color::Rgb,
    display::{Display, Font, FontFamily, FontSize, Rect, Text},
};

const LINE_HEIGHT: i16 = 20;
const LINES: u8 = 8;

pub struct Lcd {
    display: Display,
}

impl Lcd {
    pub fn new(display: Display) -> Self {
        Self { display }
    }

    /// Replaces the contents of `line` with `text`. Lines past the bottom of
    /// the screen are ignored.
    pub fn set_text(&mut self, line: u8, text: &str) {
        if line >= LINES {
            return;
        }
        let top = i16::from(line) * LINE_HEIGHT;

        self.display.fill(
            &Rect::new(
                [0, top],
                [Display::HORIZONTAL_RESOLUTION as i16, top + LINE_HEIGHT],
            ),
            Rgb::new(0, 0, 0),
        );
        self.display.draw_text(
            &Text::new(
                text,
                Font::new(FontSize::MEDIUM, FontFamily::Monospace),
                [0, top],
            ),
            Rgb::new(255, 255, 255),
            None,
        );
    }
}
