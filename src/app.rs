//! Main application state and UI coordination

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Context as _;
use eframe::egui;

use crate::core::builder::PatchNoteBuilder;
use crate::core::config::AppConfig;
use crate::core::export;
use crate::core::fragment::Fragment;
use crate::ui::forms::FormPanel;
use crate::ui::fragment_renderer::FragmentAction;
use crate::ui::preview::{MarkupPanel, PreviewPanel};

/// View mode for the preview area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Rendered,
    Markup,
    #[default]
    Split,
}

/// What the builder last reported through its update handler
#[derive(Debug, Default)]
pub struct PreviewState {
    pub fragments: Vec<Fragment>,
    pub html: String,
}

/// Main application state
pub struct PatchNoteApp {
    /// Builder for the current patch note
    builder: PatchNoteBuilder,
    /// Shared with the builder's update handler
    preview: Rc<RefCell<PreviewState>>,
    /// Form inputs
    forms: FormPanel,
    /// Application configuration
    config: AppConfig,
    /// Current view mode
    view_mode: ViewMode,
    /// Whether the form panel is visible
    forms_visible: bool,
}

impl PatchNoteApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // Load config or use defaults
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {}", e);
            AppConfig::default()
        });

        Self::configure_fonts(&cc.egui_ctx, &config);
        Self::apply_theme(&cc.egui_ctx, &config);

        let preview = Rc::new(RefCell::new(PreviewState::default()));
        let builder = Self::new_builder(&cc.egui_ctx, &preview);

        Self {
            builder,
            preview,
            forms: FormPanel::new(&config),
            config,
            view_mode: ViewMode::default(),
            forms_visible: true,
        }
    }

    /// Builder whose handler refreshes the preview state
    fn new_builder(ctx: &egui::Context, preview: &Rc<RefCell<PreviewState>>) -> PatchNoteBuilder {
        let ctx = ctx.clone();
        let preview = Rc::clone(preview);

        PatchNoteBuilder::with_handler(move |fragments| {
            let mut state = preview.borrow_mut();
            state.fragments = fragments.to_vec();
            state.html = export::to_html(fragments);
            ctx.request_repaint();
        })
    }

    /// Register a Hangul-capable font as fallback for both families
    fn configure_fonts(ctx: &egui::Context, config: &AppConfig) {
        let Some((path, bytes)) = config
            .font_candidates()
            .into_iter()
            .find_map(|path| std::fs::read(&path).ok().map(|bytes| (path, bytes)))
        else {
            tracing::warn!("No Hangul font found, Korean text may not render");
            return;
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts.font_data.insert(
            "hangul".to_owned(),
            Arc::new(egui::FontData::from_owned(bytes)),
        );
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push("hangul".to_owned());
        }
        ctx.set_fonts(fonts);

        tracing::info!("Loaded font: {}", path.display());
    }

    fn apply_theme(ctx: &egui::Context, config: &AppConfig) {
        if config.ui.is_dark() {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    /// Start over with an empty patch note
    fn new_document(&mut self, ctx: &egui::Context) {
        *self.preview.borrow_mut() = PreviewState::default();
        self.builder = Self::new_builder(ctx, &self.preview);
        tracing::info!("Started a new patch note");
    }

    /// Copy the exported HTML to the clipboard
    fn copy_html(&self, ctx: &egui::Context) {
        let html = self.preview.borrow().html.clone();
        tracing::info!("Copied {} bytes of HTML", html.len());
        ctx.copy_text(html);
    }

    /// Copy the plain text to the clipboard
    fn copy_text(&self, ctx: &egui::Context) {
        let text = export::to_text(&self.preview.borrow().fragments);
        tracing::info!("Copied {} bytes of text", text.len());
        ctx.copy_text(text);
    }

    fn save_settings(&self) -> anyhow::Result<()> {
        self.config.save().context("Failed to save settings")
    }

    fn handle_action(action: FragmentAction) {
        match action {
            FragmentAction::OpenUrl(url) => {
                if let Err(e) = open::that(&url) {
                    tracing::error!("Failed to open {}: {}", url, e);
                }
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Patch Note").clicked() {
                        self.new_document(ctx);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Copy HTML").clicked() {
                        self.copy_html(ctx);
                        ui.close();
                    }
                    if ui.button("Copy Text").clicked() {
                        self.copy_text(ctx);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Toggle Forms").clicked() {
                        self.forms_visible = !self.forms_visible;
                        ui.close();
                    }
                    ui.separator();
                    if ui.selectable_label(self.view_mode == ViewMode::Rendered, "Preview Only").clicked() {
                        self.view_mode = ViewMode::Rendered;
                        ui.close();
                    }
                    if ui.selectable_label(self.view_mode == ViewMode::Markup, "Markup Only").clicked() {
                        self.view_mode = ViewMode::Markup;
                        ui.close();
                    }
                    if ui.selectable_label(self.view_mode == ViewMode::Split, "Split View").clicked() {
                        self.view_mode = ViewMode::Split;
                        ui.close();
                    }
                    ui.separator();
                    let dark = self.config.ui.is_dark();
                    if ui.selectable_label(dark, "Dark Theme").clicked() {
                        self.config.ui.theme = "dark".to_string();
                        Self::apply_theme(ctx, &self.config);
                        ui.close();
                    }
                    if ui.selectable_label(!dark, "Light Theme").clicked() {
                        self.config.ui.theme = "light".to_string();
                        Self::apply_theme(ctx, &self.config);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Save Settings").clicked() {
                        if let Err(e) = self.save_settings() {
                            tracing::error!("{:#}", e);
                        }
                        ui.close();
                    }
                });
            });
        });
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        let count = self.builder.len();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.builder.is_empty() {
                    ui.label(egui::RichText::new("Empty patch note").weak());
                    return;
                }
                ui.label(format!("{} fragments", count));
                if matches!(self.builder.fragments().last(), Some(Fragment::Closing { .. })) {
                    ui.label(egui::RichText::new("finished").weak());
                }
            });
        });
    }
}

/// Ctrl+Shift+C (Cmd+Shift+C on macOS).
///
/// Native backends turn Command+C into `Event::Copy` instead of a key event,
/// so both forms are accepted.
fn is_copy_html_shortcut(modifiers: egui::Modifiers, events: &[egui::Event]) -> bool {
    if !(modifiers.shift && modifiers.command) {
        return false;
    }

    events.iter().any(|event| match event {
        egui::Event::Copy => true,
        egui::Event::Key {
            key: egui::Key::C,
            pressed: true,
            ..
        } => true,
        _ => false,
    })
}

impl eframe::App for PatchNoteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        let (copy, toggle) = ctx.input(|i| {
            (
                is_copy_html_shortcut(i.modifiers, &i.events),
                i.modifiers.ctrl && i.key_pressed(egui::Key::B),
            )
        });
        if copy {
            self.copy_html(ctx);
        }
        if toggle {
            self.forms_visible = !self.forms_visible;
        }

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        // Forms append to the builder, which updates the preview state
        if self.forms_visible {
            egui::SidePanel::left("form_panel")
                .resizable(true)
                .default_width(self.config.ui.form_panel_width)
                .min_width(240.0)
                .show(ctx, |ui| {
                    ui.heading("Patch Note");
                    ui.separator();
                    self.forms.show(ui, &mut self.builder, &self.config.palette);
                });
        }

        let preview = Rc::clone(&self.preview);
        let mut action = None;
        let mut copy_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            let state = preview.borrow();
            match self.view_mode {
                ViewMode::Rendered => {
                    action = PreviewPanel::show(ui, &state.fragments);
                }
                ViewMode::Markup => {
                    copy_requested = MarkupPanel::show(ui, &state.html);
                }
                ViewMode::Split => {
                    let available_width = ui.available_width();
                    ui.horizontal(|ui| {
                        ui.set_min_width(available_width);

                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            action = PreviewPanel::show(ui, &state.fragments);
                        });

                        ui.separator();

                        ui.vertical(|ui| {
                            ui.set_width(available_width / 2.0 - 4.0);
                            copy_requested = MarkupPanel::show(ui, &state.html);
                        });
                    });
                }
            }
        });

        if copy_requested {
            self.copy_html(ctx);
        }
        if let Some(action) = action {
            Self::handle_action(action);
        }
    }
}
