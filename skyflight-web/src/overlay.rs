use macroquad::prelude::*;
use skyflight_core::{CONTROLS_TITLE, HudReadout};

const PANEL_BG: Color = Color::from_rgba(0, 0, 0, 150);
const HUD_TEXT: Color = Color::from_rgba(0, 255, 0, 255);
const FONT_SIZE: f32 = 22.0;
const LINE_HEIGHT: f32 = 26.0;
const PADDING: f32 = 14.0;
const PANEL_MARGIN: f32 = 20.0;
const HUD_WIDTH: f32 = 220.0;
const CONTROLS_WIDTH: f32 = 300.0;

pub fn draw_hud(readout: &HudReadout) {
    let lines = readout.lines();
    let height = panel_height(lines.len());
    let x = screen_width() - HUD_WIDTH - PANEL_MARGIN;
    let y = PANEL_MARGIN;

    draw_rectangle(x, y, HUD_WIDTH, height, PANEL_BG);
    for (row, line) in lines.iter().enumerate() {
        draw_text(line, x + PADDING, baseline(y, row), FONT_SIZE, HUD_TEXT);
    }
}

pub fn draw_controls(legend: &[String]) {
    let height = panel_height(legend.len() + 1);
    let x = PANEL_MARGIN;
    let y = PANEL_MARGIN;

    draw_rectangle(x, y, CONTROLS_WIDTH, height, PANEL_BG);
    draw_text(CONTROLS_TITLE, x + PADDING, baseline(y, 0), FONT_SIZE + 4.0, WHITE);
    for (row, line) in legend.iter().enumerate() {
        draw_text(line, x + PADDING, baseline(y, row + 1), FONT_SIZE, WHITE);
    }
}

fn panel_height(rows: usize) -> f32 {
    rows as f32 * LINE_HEIGHT + PADDING * 2.0
}

fn baseline(top: f32, row: usize) -> f32 {
    top + PADDING + FONT_SIZE + row as f32 * LINE_HEIGHT
}
