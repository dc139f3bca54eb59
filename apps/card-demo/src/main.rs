use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use boxcard_layout::prelude::*;
use boxcard_render_pixels::{render_png, GlyphRasterizer, RenderOptions, DEFAULT_CACHE_CAPACITY};

const CARD_WIDTH: f32 = 384.0;
const HEADER_HEIGHT: f32 = 32.0;
const CELL_WIDTH: f32 = 124.0;
const CELL_HEIGHT: f32 = 36.0;
const LABEL_SIZE: f32 = 12.0;
const VALUE_SIZE: f32 = 16.0;

const STATS: [[(&str, &str); 3]; 3] = [
    [("Wins", "1,204"), ("Losses", "388"), ("W/L", "3.10")],
    [("Kills", "9,871"), ("Deaths", "2,415"), ("K/D", "4.09")],
    [("Final Kills", "2,930"), ("Beds Broken", "1,712"), ("Level", "412")],
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = env::args().skip(1);
    let output = args.next().map(PathBuf::from).unwrap_or_else(|| "card.png".into());
    let glyphs = match args.next() {
        Some(path) => {
            let bytes = fs::read(&path).with_context(|| format!("reading font {path}"))?;
            Some(GlyphRasterizer::from_bytes(bytes, DEFAULT_CACHE_CAPACITY)?)
        }
        None => {
            log::warn!("no font given; the card will be rendered without text");
            None
        }
    };

    let card = stat_card("Bedwars", glyphs.as_ref());
    let width = CARD_WIDTH + 16.0;
    let height = HEADER_HEIGHT + (CELL_HEIGHT + 12.0) * STATS.len() as f32 + 16.0;
    let mut options = RenderOptions::new(width as u32, height as u32)
        .with_background(Color::from_rgb_u8(16, 16, 24));
    if let Some(glyphs) = glyphs {
        options = options.with_glyphs(glyphs);
    }

    let png = render_png(&card, &options).context("rendering card")?;
    fs::write(&output, &png).with_context(|| format!("writing {}", output.display()))?;
    log::info!(
        "wrote {}x{} card ({} bytes) to {}",
        options.width,
        options.height,
        png.len(),
        output.display()
    );
    Ok(())
}

fn stat_card(title: &str, glyphs: Option<&GlyphRasterizer>) -> InstructionNode {
    let header = InstructionNode::new(CARD_WIDTH - 8.0, HEADER_HEIGHT)
        .with_label("header")
        .with_padding(EdgeInsets::from_components(8.0, 0.0, 0.0, 0.0))
        .with_draw(DrawOp::fill(Color::from_rgba_u8(0, 0, 0, 96)))
        .with_child(text_node(title, Color::from_rgb_u8(255, 170, 0), VALUE_SIZE, glyphs).centered());

    let rows = STATS.iter().enumerate().map(|(index, row)| {
        InstructionNode::new(CARD_WIDTH, CELL_HEIGHT + 12.0)
            .with_label(format!("row-{index}"))
            .with_children(row.iter().map(|&(label, value)| stat_cell(label, value, glyphs).centered()))
    });

    InstructionNode::new(CARD_WIDTH, HEADER_HEIGHT + (CELL_HEIGHT + 12.0) * STATS.len() as f32)
        .with_label("card")
        .with_direction(Direction::Column)
        .with_padding(EdgeInsets::uniform(8.0))
        .with_draw(DrawOp::gradient(vec![
            Color::from_rgb_u8(40, 44, 68),
            Color::from_rgb_u8(18, 20, 32),
        ]))
        .with_child(header)
        .with_children(rows)
}

fn stat_cell(label: &str, value: &str, glyphs: Option<&GlyphRasterizer>) -> InstructionNode {
    InstructionNode::new(CELL_WIDTH, CELL_HEIGHT)
        .with_label(label)
        .with_direction(Direction::Column)
        .with_padding(EdgeInsets::symmetric(0.0, 4.0))
        .with_margin(EdgeInsets::uniform(2.0))
        .with_draw(DrawOp::fill(Color::from_rgba_u8(255, 255, 255, 24)))
        .with_children([
            text_node(label, Color::from_rgb_u8(170, 170, 170), LABEL_SIZE, glyphs).centered(),
            text_node(value, Color::WHITE, VALUE_SIZE, glyphs).centered(),
        ])
}

/// Text leaf sized to its measured extent, or to a rough estimate without a font.
fn text_node(text: &str, color: Color, size: f32, glyphs: Option<&GlyphRasterizer>) -> InstructionNode {
    let (width, height) = match glyphs {
        Some(glyphs) => {
            let metrics = glyphs.measure(text, size);
            (metrics.width, metrics.height)
        }
        None => (text.chars().count() as f32 * size * 0.6, size),
    };
    InstructionNode::new(width, height).with_draw(DrawOp::text(text, color, size))
}
