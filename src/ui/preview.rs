//! Rendered and markup views of the assembled patch note

use eframe::egui;

use super::fragment_renderer::{render_fragment, FragmentAction};
use crate::core::fragment::Fragment;

/// Rendered preview panel
pub struct PreviewPanel;

impl PreviewPanel {
    /// Show the preview panel
    pub fn show(ui: &mut egui::Ui, fragments: &[Fragment]) -> Option<FragmentAction> {
        let mut action = None;

        egui::ScrollArea::vertical()
            .id_salt("preview_scroll")
            .auto_shrink(false)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if fragments.is_empty() {
                    Self::show_empty(ui);
                    return;
                }

                for (idx, fragment) in fragments.iter().enumerate() {
                    ui.push_id((idx, fragment.kind()), |ui| {
                        if let Some(a) = render_fragment(ui, fragment) {
                            action = Some(a);
                        }
                    });
                }
            });

        action
    }

    /// Show empty state
    fn show_empty(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label("Nothing added yet");
            ui.label("Fill in a form on the left to start the patch note");
        });
    }
}

/// Read-only HTML markup view
pub struct MarkupPanel;

impl MarkupPanel {
    /// Show the markup panel; returns true when the copy button was pressed
    pub fn show(ui: &mut egui::Ui, html: &str) -> bool {
        let mut copy = false;

        ui.horizontal(|ui| {
            ui.strong("HTML");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Copy").on_hover_text("Copy HTML").clicked() {
                    copy = true;
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("markup_scroll")
            .auto_shrink(false)
            .show(ui, |ui| {
                let mut text = html;
                egui::TextEdit::multiline(&mut text)
                    .font(egui::TextStyle::Monospace)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .show(ui);
            });

        copy
    }
}
