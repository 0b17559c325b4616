//! Form panels, one per fragment kind
//!
//! Each form owns its input state and hands the values to the builder when
//! the operator submits it. Text fields clear after a submit; the version,
//! icon and color stay so consecutive entries are quicker to type.

use eframe::egui::{self, RichText, Ui};

use crate::core::builder::PatchNoteBuilder;
use crate::core::config::AppConfig;
use crate::core::fragment::IconKind;

use super::fragment_renderer::parse_color;

#[derive(Debug, Default)]
pub struct MetadataForm {
    content: String,
}

impl MetadataForm {
    pub fn show(&mut self, ui: &mut Ui, builder: &mut PatchNoteBuilder) {
        ui.add(egui::TextEdit::singleline(&mut self.content).hint_text("Season or event name"));
        if ui.button("Add metadata").clicked() {
            builder.metadata(&self.content);
            self.content.clear();
        }
    }
}

#[derive(Debug, Default)]
pub struct TitleForm {
    content: String,
    version: String,
}

impl TitleForm {
    pub fn show(&mut self, ui: &mut Ui, builder: &mut PatchNoteBuilder) {
        ui.add(egui::TextEdit::singleline(&mut self.content).hint_text("Title"));
        ui.add(egui::TextEdit::singleline(&mut self.version).hint_text("Version"));
        if ui.button("Add title").clicked() {
            builder.title(&self.content, &self.version);
            self.content.clear();
        }
    }
}

#[derive(Debug, Default)]
pub struct CategoryForm {
    content: String,
}

impl CategoryForm {
    pub fn show(&mut self, ui: &mut Ui, builder: &mut PatchNoteBuilder) {
        ui.add(egui::TextEdit::singleline(&mut self.content).hint_text("Category"));
        if ui.button("Add category").clicked() {
            builder.category(&self.content);
            self.content.clear();
        }
    }
}

#[derive(Debug, Default)]
pub struct ContentLineForm {
    icon: IconKind,
    color: String,
    content: String,
}

impl ContentLineForm {
    pub fn show(&mut self, ui: &mut Ui, builder: &mut PatchNoteBuilder, palette: &[String]) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("content_line_icon")
                .selected_text(format!("{} {}", self.icon.glyph(), self.icon.label()))
                .show_ui(ui, |ui| {
                    for icon in IconKind::ALL {
                        ui.selectable_value(
                            &mut self.icon,
                            icon,
                            format!("{} {}", icon.glyph(), icon.label()),
                        );
                    }
                });
            ui.add(
                egui::TextEdit::singleline(&mut self.color)
                    .hint_text("Color")
                    .desired_width(90.0),
            );
        });

        // Palette swatches
        ui.horizontal_wrapped(|ui| {
            for preset in palette {
                let swatch = parse_color(preset).unwrap_or(ui.visuals().text_color());
                if ui
                    .button(RichText::new("■").color(swatch))
                    .on_hover_text(preset)
                    .clicked()
                {
                    self.color = preset.clone();
                }
            }
        });

        ui.add(egui::TextEdit::singleline(&mut self.content).hint_text("Change"));
        if ui.button("Add line").clicked() {
            builder.content_line(self.icon, &self.color, &self.content);
            self.content.clear();
        }
    }
}

#[derive(Debug, Default)]
pub struct DescriptionForm {
    content: String,
}

impl DescriptionForm {
    pub fn show(&mut self, ui: &mut Ui, builder: &mut PatchNoteBuilder) {
        ui.add(
            egui::TextEdit::multiline(&mut self.content)
                .hint_text("Description, the first URL becomes a link")
                .desired_rows(3),
        );
        if ui.button("Add description").clicked() {
            builder.description(&self.content);
            self.content.clear();
        }
    }
}

#[derive(Debug, Default)]
pub struct ImageForm {
    alt: String,
    src: String,
}

impl ImageForm {
    pub fn show(&mut self, ui: &mut Ui, builder: &mut PatchNoteBuilder) {
        ui.add(egui::TextEdit::singleline(&mut self.alt).hint_text("Alt text"));
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.src).hint_text("Image URL"));
            if ui.button("Browse...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                    .pick_file()
                {
                    self.src = format!("file://{}", path.display());
                }
            }
        });
        if ui.button("Add image").clicked() {
            builder.image(&self.alt, &self.src);
            self.alt.clear();
            self.src.clear();
        }
    }
}

#[derive(Debug, Default)]
pub struct QuoteForm {
    content: String,
}

impl QuoteForm {
    pub fn show(&mut self, ui: &mut Ui, builder: &mut PatchNoteBuilder) {
        ui.add(
            egui::TextEdit::multiline(&mut self.content)
                .hint_text("Quote")
                .desired_rows(2),
        );
        if ui.button("Add quote").clicked() {
            builder.quote(&self.content);
            self.content.clear();
        }
    }
}

#[derive(Debug)]
pub struct TableForm {
    cells: Vec<String>,
}

impl Default for TableForm {
    fn default() -> Self {
        Self {
            cells: vec![String::new(); 2],
        }
    }
}

impl TableForm {
    pub fn show(&mut self, ui: &mut Ui, builder: &mut PatchNoteBuilder) {
        let mut remove = None;

        for (idx, cell) in self.cells.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(cell)
                        .id_salt(("table_cell", idx))
                        .hint_text(format!("Cell {}", idx + 1)),
                );
                if ui.small_button("✖").on_hover_text("Remove cell").clicked() {
                    remove = Some(idx);
                }
            });
        }

        if let Some(idx) = remove {
            self.cells.remove(idx);
        }

        ui.horizontal(|ui| {
            if ui.button("+ Cell").clicked() {
                self.cells.push(String::new());
            }
            if ui.button("Add table").clicked() {
                builder.table(std::mem::take(&mut self.cells));
                self.cells = vec![String::new(); 2];
            }
        });
    }
}

/// All forms in the order they appear in the side panel
#[derive(Debug, Default)]
pub struct FormPanel {
    metadata: MetadataForm,
    title: TitleForm,
    category: CategoryForm,
    content_line: ContentLineForm,
    description: DescriptionForm,
    image: ImageForm,
    quote: QuoteForm,
    table: TableForm,
}

impl FormPanel {
    /// Create the forms with configured defaults filled in
    pub fn new(config: &AppConfig) -> Self {
        let mut panel = Self::default();
        panel.title.version = config.defaults.version.clone();
        panel.content_line.color = config.palette.first().cloned().unwrap_or_default();
        panel
    }

    /// Show every form
    pub fn show(&mut self, ui: &mut Ui, builder: &mut PatchNoteBuilder, palette: &[String]) {
        egui::ScrollArea::vertical()
            .id_salt("form_scroll")
            .show(ui, |ui| {
                ui.collapsing("Metadata", |ui| self.metadata.show(ui, builder));
                egui::CollapsingHeader::new("Title")
                    .default_open(true)
                    .show(ui, |ui| self.title.show(ui, builder));
                egui::CollapsingHeader::new("Category")
                    .default_open(true)
                    .show(ui, |ui| self.category.show(ui, builder));
                egui::CollapsingHeader::new("Content line")
                    .default_open(true)
                    .show(ui, |ui| self.content_line.show(ui, builder, palette));
                ui.collapsing("Description", |ui| self.description.show(ui, builder));
                ui.collapsing("Image", |ui| self.image.show(ui, builder));
                ui.collapsing("Quote", |ui| self.quote.show(ui, builder));
                ui.collapsing("Table", |ui| self.table.show(ui, builder));

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Line break").clicked() {
                        builder.line_break();
                    }
                    if ui
                        .button("Finish")
                        .on_hover_text("Append the closing messages")
                        .clicked()
                    {
                        builder.finish();
                    }
                });
            });
    }
}
