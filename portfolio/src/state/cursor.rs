//! Pointer position for the decorative cursor glow.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovering_link: bool,
}

impl CursorState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering_link = hovering;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_keeps_hover_flag() {
        let mut cursor = CursorState::default();
        cursor.set_hovering(true);
        cursor.move_to(12.0, 34.0);
        assert_eq!(
            cursor,
            CursorState {
                x: 12.0,
                y: 34.0,
                hovering_link: true
            }
        );
    }
}
