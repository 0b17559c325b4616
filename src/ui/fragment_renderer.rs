//! Fragment rendering for the preview
//!
//! Draws each patch note fragment natively so the operator sees roughly what
//! the exported markup will look like.

use eframe::egui::{self, Color32, FontId, RichText, Ui};

use crate::core::fragment::{Fragment, IconKind, IMAGE_CORNER_RADIUS, IMAGE_WIDTH};
use crate::core::linkify::InlineSpan;

/// Action triggered by interacting with a rendered fragment
#[derive(Debug, Clone)]
pub enum FragmentAction {
    /// Open external URL
    OpenUrl(String),
}

/// Render a fragment to the UI
pub fn render_fragment(ui: &mut Ui, fragment: &Fragment) -> Option<FragmentAction> {
    match fragment {
        Fragment::Metadata { text } => {
            ui.label(RichText::new(text).color(ui.visuals().weak_text_color()));
            None
        }
        Fragment::LineBreak => {
            ui.add_space(ui.text_style_height(&egui::TextStyle::Body));
            None
        }
        Fragment::Title { heading } => {
            ui.label(
                RichText::new(heading)
                    .font(FontId::proportional(28.0))
                    .strong(),
            );
            None
        }
        Fragment::TitleRule => {
            render_title_rule(ui, &fragment.text());
            None
        }
        Fragment::Category { text } => {
            ui.label(RichText::new(text).font(FontId::proportional(20.0)).strong());
            ui.add_space(4.0);
            None
        }
        Fragment::ContentLine { icon, color, text } => {
            render_content_line(ui, *icon, color, text);
            None
        }
        Fragment::Description { spans } => render_description(ui, spans),
        Fragment::Image { alt, src } => {
            render_image(ui, alt, src);
            None
        }
        Fragment::Quote { text } => {
            render_quote(ui, text);
            None
        }
        Fragment::Table { cells } => {
            render_table(ui, cells);
            None
        }
        Fragment::Closing { text } => {
            ui.vertical_centered(|ui| {
                ui.label(text);
            });
            None
        }
    }
}

/// Struck-through run of spaces under the title
fn render_title_rule(ui: &mut Ui, spacer: &str) {
    ui.label(
        RichText::new(spacer)
            .font(FontId::proportional(22.0))
            .color(Color32::from_gray(204))
            .strikethrough(),
    );
}

/// Render an icon in the requested color followed by the line text
pub fn render_content_line(ui: &mut Ui, icon: IconKind, color: &str, text: &str) {
    let icon_color = parse_color(color).unwrap_or_else(|| ui.visuals().text_color());

    ui.horizontal_wrapped(|ui| {
        ui.add_space(16.0);
        ui.label(RichText::new(icon.glyph()).color(icon_color));
        ui.label(text);
    });
}

/// Render a small-font paragraph with its link
pub fn render_description(ui: &mut Ui, spans: &[InlineSpan]) -> Option<FragmentAction> {
    let mut action = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            match span {
                InlineSpan::Text(text) => {
                    ui.label(RichText::new(text).small());
                }
                InlineSpan::Link { url } => {
                    let response = ui.link(RichText::new(url).small());
                    if response.clicked() {
                        action = Some(FragmentAction::OpenUrl(url.clone()));
                    }
                    response.on_hover_text(format!("Open: {}", url));
                }
            }
        }
    });

    action
}

/// Render an image at the fixed width with rounded corners
pub fn render_image(ui: &mut Ui, alt: &str, src: &str) {
    if src.is_empty() {
        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(70, 70, 70)))
            .inner_margin(egui::Margin::same(8))
            .corner_radius(IMAGE_CORNER_RADIUS)
            .show(ui, |ui| {
                ui.label(RichText::new(format!("🖼 {}", alt)).italics());
            });
        return;
    }

    let response = ui.add(preview_image(src));
    if !alt.is_empty() {
        response.on_hover_text(alt);
    }
}

/// Image scaled to the fixed export width, keeping its aspect ratio
fn preview_image(src: &str) -> egui::Image<'_> {
    egui::Image::new(src)
        .fit_to_exact_size(egui::vec2(IMAGE_WIDTH as f32, f32::INFINITY))
        .maintain_aspect_ratio(true)
        .corner_radius(IMAGE_CORNER_RADIUS)
}

/// Render a quoted block with a bar on the left
pub fn render_quote(ui: &mut Ui, text: &str) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(egui::Margin {
            left: 12,
            right: 8,
            top: 8,
            bottom: 8,
        })
        .show(ui, |ui| {
            let rect = ui.max_rect();
            ui.painter().rect_filled(
                egui::Rect::from_min_size(
                    rect.min - egui::vec2(12.0, 8.0),
                    egui::vec2(4.0, rect.height() + 16.0),
                ),
                0.0,
                Color32::from_rgb(100, 100, 120),
            );
            ui.label(text);
        });
}

/// Render the table cells as a single row
pub fn render_table(ui: &mut Ui, cells: &[String]) {
    use egui_extras::{Column, TableBuilder};

    if cells.is_empty() {
        ui.label(RichText::new("(empty table)").weak());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(60.0), cells.len())
        .body(|mut body| {
            body.row(20.0, |mut row| {
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

/// Parse a CSS-style color: hex notation or a few common names
pub fn parse_color(color: &str) -> Option<Color32> {
    let color = color.trim();
    if color.starts_with('#') {
        return Color32::from_hex(color).ok();
    }

    match color.to_ascii_lowercase().as_str() {
        "red" => Some(Color32::from_rgb(239, 68, 68)),
        "green" => Some(Color32::from_rgb(34, 197, 94)),
        "blue" => Some(Color32::from_rgb(59, 130, 246)),
        "orange" => Some(Color32::from_rgb(249, 115, 22)),
        "yellow" => Some(Color32::from_rgb(234, 179, 8)),
        "purple" => Some(Color32::from_rgb(168, 85, 247)),
        "gray" | "grey" => Some(Color32::GRAY),
        "black" => Some(Color32::BLACK),
        "white" => Some(Color32::WHITE),
        _ => None,
    }
}
