/// Display collaborators: the score counter, life counter and game-over
/// panel.  The game only ever writes to these.
pub trait Hud {
    fn set_score(&mut self, score: u32);
    fn set_life(&mut self, life: u32);
    fn show_game_over(&mut self, final_score: u32);
    fn hide_game_over(&mut self);
}

/// Plain snapshot of what a HUD is currently showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HudValues {
    pub score: u32,
    pub life: u32,
    /// `Some(final_score)` while the game-over panel is visible.
    pub game_over: Option<u32>,
}

impl Hud for HudValues {
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_life(&mut self, life: u32) {
        self.life = life;
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.game_over = Some(final_score);
    }

    fn hide_game_over(&mut self) {
        self.game_over = None;
    }
}
