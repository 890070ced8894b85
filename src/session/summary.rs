//! Game-over summary screen

use super::wait_for_release;
use crate::consts::{BUTTON_POLL_MS, WIDTH};
use crate::platform::{Buttons, Clock, PixelDisplay};
use crate::sim::GameId;

/// How a finished game went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub game: GameId,
    pub score: u32,
    /// Record after this game
    pub high_score: u32,
    pub new_record: bool,
    /// Maze run that cleared every level
    pub won: bool,
}

impl GameSummary {
    pub fn headline(&self) -> &'static str {
        if self.won { "You win!" } else { "Game Over" }
    }
}

pub fn render(summary: &GameSummary, display: &mut dyn PixelDisplay) {
    let x = WIDTH / 2 - 30;
    display.clear();
    display.draw_text(x, 15, summary.headline());
    display.draw_text(x, 30, &format!("Score: {}", summary.score));
    display.draw_text(x, 40, &format!("Record: {}", summary.high_score));
    if summary.new_record {
        display.draw_text(WIDTH / 2 - 40, 50, "New record!");
    } else {
        display.draw_text(WIDTH / 2 - 50, 55, "Press any button");
    }
    display.present();
}

/// Show the summary and block until a button is pressed and released
pub fn show(
    summary: &GameSummary,
    display: &mut dyn PixelDisplay,
    buttons: &mut dyn Buttons,
    clock: &mut dyn Clock,
) {
    render(summary, display);
    while !buttons.poll().any() {
        clock.delay_ms(BUTTON_POLL_MS);
    }
    wait_for_release(buttons, clock);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::scripted::{ManualClock, ScriptedButtons};
    use crate::platform::{ButtonState, FrameBuffer};

    fn summary(new_record: bool, won: bool) -> GameSummary {
        GameSummary {
            game: GameId::TiltMaze,
            score: 500,
            high_score: 500,
            new_record,
            won,
        }
    }

    #[test]
    fn test_record_and_win_text() {
        let mut fb = FrameBuffer::new();
        render(&summary(true, true), &mut fb);
        assert!(fb.has_text("You win!"));
        assert!(fb.has_text("New record!"));
        assert!(!fb.has_text("Press any button"));

        render(&summary(false, false), &mut fb);
        assert!(fb.has_text("Game Over"));
        assert!(fb.has_text("Press any button"));
    }

    #[test]
    fn test_blocks_until_press_and_release() {
        let mut fb = FrameBuffer::new();
        let mut buttons = ScriptedButtons::new([
            ButtonState::RELEASED,
            ButtonState::RELEASED,
            ButtonState::NAVIGATE,
            ButtonState::NAVIGATE,
            ButtonState::RELEASED,
        ]);
        let mut clock = ManualClock::default();
        show(&summary(false, false), &mut fb, &mut buttons, &mut clock);
        assert_eq!(buttons.remaining(), 0);
        // Two idle polls, one while held
        assert_eq!(clock.delays, vec![BUTTON_POLL_MS; 3]);
    }
}
