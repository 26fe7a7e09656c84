//! GameView: maps a `GameSnapshot` into queued terminal draw commands.
//!
//! Pure with respect to the terminal: everything is encoded into a byte
//! buffer, which keeps it unit-testable.

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::types::{PieceKind, BOARD_COLS, BOARD_ROWS};

/// Each board cell is drawn two terminal columns wide to compensate for
/// glyph aspect ratio.
const CELL_W: u16 = 2;

const FILLED: &str = "██";
const GHOST: &str = "░░";
const EMPTY: &str = "  ";

/// Per-kind foreground colors.
fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Rgb { r: 0x26, g: 0xc6, b: 0xda },
        PieceKind::O => Color::Rgb { r: 0xff, g: 0xd5, b: 0x4f },
        PieceKind::T => Color::Rgb { r: 0xba, g: 0x68, b: 0xc8 },
        PieceKind::S => Color::Rgb { r: 0x66, g: 0xbb, b: 0x6a },
        PieceKind::Z => Color::Rgb { r: 0xef, g: 0x53, b: 0x50 },
        PieceKind::J => Color::Rgb { r: 0x42, g: 0xa5, b: 0xf5 },
        PieceKind::L => Color::Rgb { r: 0xff, g: 0x8a, b: 0x65 },
    }
}

fn kind_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::I => 'I',
        PieceKind::O => 'O',
        PieceKind::T => 'T',
        PieceKind::S => 'S',
        PieceKind::Z => 'Z',
        PieceKind::J => 'J',
        PieceKind::L => 'L',
    }
}

/// Snapshot-to-screen view with a fixed top-left anchor.
pub struct GameView {
    origin_x: u16,
    origin_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            origin_x: 2,
            origin_y: 1,
        }
    }
}

impl GameView {
    pub fn new(origin_x: u16, origin_y: u16) -> Self {
        Self { origin_x, origin_y }
    }

    /// Encode a full frame for the snapshot into `out`.
    pub fn encode_into(&self, snap: &GameSnapshot, out: &mut Vec<u8>) -> Result<()> {
        out.queue(Clear(ClearType::All))?;

        self.encode_frame(out)?;
        self.encode_cells(snap, out)?;
        self.encode_panel(snap, out)?;
        self.encode_overlay(snap, out)?;

        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Screen position of board cell (x, y), inside the border.
    fn cell_pos(&self, x: i8, y: i8) -> (u16, u16) {
        (
            self.origin_x + 1 + (x as u16) * CELL_W,
            self.origin_y + 1 + y as u16,
        )
    }

    fn encode_frame(&self, out: &mut Vec<u8>) -> Result<()> {
        let inner_w = (BOARD_COLS as u16) * CELL_W;
        out.queue(SetForegroundColor(Color::Grey))?;

        out.queue(MoveTo(self.origin_x, self.origin_y))?;
        out.queue(Print('┌'))?;
        for _ in 0..inner_w {
            out.queue(Print('─'))?;
        }
        out.queue(Print('┐'))?;

        for y in 0..BOARD_ROWS as u16 {
            out.queue(MoveTo(self.origin_x, self.origin_y + 1 + y))?;
            out.queue(Print('│'))?;
            out.queue(MoveTo(self.origin_x + 1 + inner_w, self.origin_y + 1 + y))?;
            out.queue(Print('│'))?;
        }

        out.queue(MoveTo(self.origin_x, self.origin_y + 1 + BOARD_ROWS as u16))?;
        out.queue(Print('└'))?;
        for _ in 0..inner_w {
            out.queue(Print('─'))?;
        }
        out.queue(Print('┘'))?;
        Ok(())
    }

    fn encode_cells(&self, snap: &GameSnapshot, out: &mut Vec<u8>) -> Result<()> {
        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (px, py) = self.cell_pos(x as i8, y as i8);
                out.queue(MoveTo(px, py))?;
                match cell {
                    Some(kind) => {
                        out.queue(SetForegroundColor(kind_color(*kind)))?;
                        out.queue(Print(FILLED))?;
                    }
                    None => {
                        out.queue(Print(EMPTY))?;
                    }
                }
            }
        }

        let Some(active) = snap.active else {
            return Ok(());
        };

        out.queue(SetForegroundColor(kind_color(active.kind)))?;

        // Ghost first, then the piece over it.
        if let Some(ghost_y) = snap.ghost_y {
            out.queue(SetAttribute(Attribute::Dim))?;
            for (dx, dy) in active.cells {
                let y = ghost_y + dy;
                if y >= 0 {
                    let (px, py) = self.cell_pos(active.x + dx, y);
                    out.queue(MoveTo(px, py))?;
                    out.queue(Print(GHOST))?;
                }
            }
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(kind_color(active.kind)))?;
        }

        for (dx, dy) in active.cells {
            let y = active.y + dy;
            if y >= 0 {
                let (px, py) = self.cell_pos(active.x + dx, y);
                out.queue(MoveTo(px, py))?;
                out.queue(Print(FILLED))?;
            }
        }

        Ok(())
    }

    fn encode_panel(&self, snap: &GameSnapshot, out: &mut Vec<u8>) -> Result<()> {
        let panel_x = self.origin_x + (BOARD_COLS as u16) * CELL_W + 4;
        let mut line = self.origin_y;

        out.queue(ResetColor)?;

        let hold = match snap.hold {
            Some(kind) => kind_letter(kind),
            None => '-',
        };
        out.queue(MoveTo(panel_x, line))?;
        out.queue(Print(format!("HOLD  {}", hold)))?;
        line += 2;

        out.queue(MoveTo(panel_x, line))?;
        out.queue(Print("NEXT  "))?;
        for kind in snap.queue {
            out.queue(SetForegroundColor(kind_color(kind)))?;
            out.queue(Print(kind_letter(kind)))?;
            out.queue(Print(' '))?;
        }
        out.queue(ResetColor)?;
        line += 2;

        for (label, value) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            out.queue(MoveTo(panel_x, line))?;
            out.queue(Print(format!("{}  {}", label, value)))?;
            line += 1;
        }

        out.queue(MoveTo(panel_x, line + 1))?;
        out.queue(SetAttribute(Attribute::Dim))?;
        out.queue(Print("←→ move  ↓ soft  space hard"))?;
        out.queue(MoveTo(panel_x, line + 2))?;
        out.queue(Print("z/x/↑ rotate  c hold  p pause"))?;
        out.queue(MoveTo(panel_x, line + 3))?;
        out.queue(Print("r restart  q quit"))?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn encode_overlay(&self, snap: &GameSnapshot, out: &mut Vec<u8>) -> Result<()> {
        let text = if snap.over {
            "GAME OVER - R: restart"
        } else if snap.paused {
            "PAUSED"
        } else {
            return Ok(());
        };

        let inner_w = (BOARD_COLS as u16) * CELL_W;
        let x = self.origin_x + 1 + inner_w.saturating_sub(text.len() as u16) / 2;
        let y = self.origin_y + 1 + (BOARD_ROWS as u16) / 2;
        out.queue(MoveTo(x, y))?;
        out.queue(SetAttribute(Attribute::Bold))?;
        out.queue(ResetColor)?;
        out.queue(Print(text))?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use crate::types::GameAction;

    fn encode(snap: &GameSnapshot) -> String {
        let view = GameView::default();
        let mut out = Vec::new();
        view.encode_into(snap, &mut out).unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn test_frame_contains_panel_labels() {
        let game = Game::new(1);
        let frame = encode(&game.snapshot());

        assert!(frame.contains("HOLD"));
        assert!(frame.contains("NEXT"));
        assert!(frame.contains("SCORE"));
        assert!(frame.contains("LEVEL"));
        assert!(!frame.contains("PAUSED"));
    }

    #[test]
    fn test_paused_overlay_present() {
        let mut game = Game::new(1);
        game.apply(GameAction::PauseToggle);
        let frame = encode(&game.snapshot());

        assert!(frame.contains("PAUSED"));
    }

    #[test]
    fn test_hold_letter_shown_after_hold() {
        let mut game = Game::new(1);
        let kind = game.active().unwrap().kind;
        game.apply(GameAction::Hold);
        let frame = encode(&game.snapshot());

        assert!(frame.contains(&format!("HOLD  {}", kind_letter(kind))));
    }
}
