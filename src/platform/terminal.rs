//! Terminal frontend
//!
//! Scales the play area onto a grid of character cells, feeds crossterm
//! mouse/key events to the game and rings the bell for sound cues.

use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{QueueableCommand, cursor, terminal};
use glam::Vec2;

use super::input::{InputEvent, KeyAction};
use crate::Rgb;
use crate::audio::{AudioBackend, Cue, Tone};
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::renderer::{Align, Canvas, TextSize};
use crate::sim::Rect;

/// A single terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
        }
    }
}

/// Character-cell canvas covering the whole play area
#[derive(Debug, Clone)]
pub struct CellCanvas {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        *self = Self::new(cols, rows);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn get(&self, col: u16, row: u16) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    fn get_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        self.cells
            .get_mut(row as usize * self.cols as usize + col as usize)
    }

    /// Cells per play-area unit
    fn scale(&self) -> Vec2 {
        Vec2::new(self.cols as f32 / SCREEN_W, self.rows as f32 / SCREEN_H)
    }

    /// Play-area position at the center of a cell
    pub fn cell_to_world(&self, col: u16, row: u16) -> Vec2 {
        (Vec2::new(col as f32, row as f32) + 0.5) / self.scale()
    }

    /// Half-open cell span covered by `rect`
    fn cell_span(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let s = self.scale();
        let x0 = (rect.left() * s.x).round() as i32;
        let y0 = (rect.top() * s.y).round() as i32;
        let x1 = ((rect.right() * s.x).round() as i32).max(x0 + 1);
        let y1 = ((rect.bottom() * s.y).round() as i32).max(y0 + 1);
        (
            x0.max(0),
            y0.max(0),
            x1.min(self.cols as i32),
            y1.min(self.rows as i32),
        )
    }

    fn print(&mut self, col: i32, row: i32, text: &str, fg: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.get_mut(col + i as i32, row) {
                cell.ch = ch;
                cell.fg = fg;
            }
        }
    }
}

impl Canvas for CellCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb, _corner_radius: f32) {
        let (x0, y0, x1, y1) = self.cell_span(rect);
        for row in y0..y1 {
            for col in x0..x1 {
                if let Some(cell) = self.get_mut(col, row) {
                    *cell = Cell {
                        ch: ' ',
                        fg: Rgb::WHITE,
                        bg: color,
                    };
                }
            }
        }
    }

    fn shade(&mut self, rect: Rect, alpha: u8) {
        let keep = 1.0 - alpha as f32 / 255.0;
        let (x0, y0, x1, y1) = self.cell_span(rect);
        for row in y0..y1 {
            for col in x0..x1 {
                if let Some(cell) = self.get_mut(col, row) {
                    cell.bg = cell.bg.scaled(keep);
                    cell.fg = cell.fg.scaled(keep);
                }
            }
        }
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, _size: TextSize, color: Rgb, align: Align) {
        let s = self.scale();
        let len = text.chars().count() as i32;
        let (col, row) = match align {
            Align::TopLeft => ((pos.x * s.x).round() as i32, (pos.y * s.y).floor() as i32),
            Align::Center => (
                (pos.x * s.x).round() as i32 - len / 2,
                (pos.y * s.y).floor() as i32,
            ),
        };
        self.print(col, row, text, color);
    }

    fn draw_tag(&mut self, rect: Rect, _rotation: f32, color: Rgb, label: &str) {
        self.fill_rect(rect, color, 0.0);
        let (x0, y0, x1, y1) = self.cell_span(rect);
        let width = (x1 - x0).max(0) as usize;
        let label: String = label.chars().take(width).collect();
        let len = label.chars().count() as i32;
        let col = x0 + (x1 - x0 - len) / 2;
        let row = y0 + (y1 - y0 - 1) / 2;
        self.print(col, row, &label, Rgb::WHITE);
    }

    fn measure_text(&self, text: &str, _size: TextSize) -> Vec2 {
        Vec2::new(text.chars().count() as f32, 1.0) / self.scale()
    }
}

/// Translate a terminal event into a game input event
pub fn map_event(event: &Event, canvas: &CellCanvas) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key).map(InputEvent::Key),
        Event::Mouse(mouse) => map_mouse(mouse, canvas),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            ' ' => Some(KeyAction::Start),
            'p' => Some(KeyAction::PauseToggle),
            'm' => Some(KeyAction::MuteToggle),
            'r' => Some(KeyAction::Restart),
            'q' => Some(KeyAction::Quit),
            _ => None,
        },
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, canvas: &CellCanvas) -> Option<InputEvent> {
    let pos = canvas.cell_to_world(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerDown(pos)),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp(pos)),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(InputEvent::PointerMove(pos))
        }
        _ => None,
    }
}

/// Real terminal: raw mode, alternate screen, mouse capture
pub struct Terminal {
    stdout: io::Stdout,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn size() -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(EnableMouseCapture)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Collect every event that arrives before `deadline`, plus anything
    /// still queued once it has passed
    pub fn events_until(&mut self, deadline: Instant) -> Result<Vec<Event>> {
        Ok(collect_events(deadline, event::poll, event::read)?)
    }

    /// Full redraw of `canvas`
    pub fn present(&mut self, canvas: &CellCanvas) -> Result<()> {
        let mut style: Option<(Rgb, Rgb)> = None;
        for row in 0..canvas.rows() {
            self.stdout.queue(cursor::MoveTo(0, row))?;
            for col in 0..canvas.cols() {
                let cell = canvas.get(col, row).copied().unwrap_or_default();
                if style != Some((cell.fg, cell.bg)) {
                    self.stdout.queue(SetForegroundColor(rgb_to_color(cell.fg)))?;
                    self.stdout.queue(SetBackgroundColor(rgb_to_color(cell.bg)))?;
                    style = Some((cell.fg, cell.bg));
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Waits on `poll` until `deadline`, then keeps reading until the queue is
/// empty. A late frame (deadline already gone) still drains the whole backlog.
fn collect_events(
    deadline: Instant,
    mut poll: impl FnMut(Duration) -> io::Result<bool>,
    mut read: impl FnMut() -> io::Result<Event>,
) -> io::Result<Vec<Event>> {
    let mut events = Vec::new();
    while poll(deadline.saturating_duration_since(Instant::now()))? {
        events.push(read()?);
    }
    Ok(events)
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

/// Rings the terminal bell for every cue
#[derive(Debug, Default)]
pub struct BellAudio;

impl AudioBackend for BellAudio {
    fn available(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn play(&mut self, _cue: Cue, _tone: Tone) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}
