//! Game selection screen

use crate::platform::PixelDisplay;
use crate::sim::GameId;

const TITLE: &str = "Select a game";
const FIRST_ROW_Y: i32 = 25;
const ROW_HEIGHT: i32 = 10;

/// Row of `id` on the menu
pub fn row_y(id: GameId) -> i32 {
    FIRST_ROW_Y + id.index() as i32 * ROW_HEIGHT
}

pub fn render(selection: GameId, display: &mut dyn PixelDisplay) {
    display.clear();
    display.draw_text(20, 10, TITLE);
    for id in GameId::ALL {
        display.draw_text(30, row_y(id), id.title());
    }
    display.draw_text(15, row_y(selection), ">");
    display.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrameBuffer;

    #[test]
    fn test_marker_follows_selection() {
        let mut fb = FrameBuffer::new();
        render(GameId::Dodge, &mut fb);
        let marker = fb.texts().iter().find(|t| t.text == ">").unwrap();
        assert_eq!((marker.x, marker.y), (15, 45));
        assert!(GameId::ALL.iter().all(|id| fb.has_text(id.title())));
        assert_eq!(fb.present_count(), 1);
    }
}
