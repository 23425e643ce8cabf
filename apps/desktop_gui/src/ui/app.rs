use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Tone;

use crate::backend_bridge::commands::BackendCommand;
use crate::clipboard::SystemClipboard;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::submit_reply_request;
use crate::controller::reducer::FormState;
use crate::ui::theme::{visuals_for_mode, ThemeMode};
use crate::ui::widgets;

const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(250);
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);
const CONTENT_MAX_WIDTH: f32 = 760.0;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
}

pub struct EmailReplyApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    server_url: String,

    form: FormState,
    clipboard: SystemClipboard,
    applied_theme: Option<ThemeMode>,
}

impl EmailReplyApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            server_url: startup.server_url,
            form: FormState::default(),
            clipboard: SystemClipboard::default(),
            applied_theme: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.form.apply(event);
        }
    }

    fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_dark_mode(self.form.dark_mode())
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let mode = self.theme_mode();
        if self.applied_theme != Some(mode) {
            ctx.set_visuals(visuals_for_mode(mode));
            self.applied_theme = Some(mode);
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let mode = self.theme_mode();
        egui::TopBottomPanel::top("app_header")
            .resizable(false)
            .exact_height(52.0)
            .frame(
                egui::Frame::new()
                    .fill(crate::ui::theme::PRIMARY)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new("📧 Email Generator")
                            .size(22.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let toggle = egui::Button::new(
                            egui::RichText::new(mode.toggle_icon())
                                .size(20.0)
                                .color(egui::Color32::WHITE),
                        )
                        .frame(false);
                        if ui
                            .add(toggle)
                            .on_hover_text("Toggle dark mode")
                            .clicked()
                        {
                            self.form.toggle_dark_mode();
                        }
                    });
                });
            });
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        widgets::section_label(ui, "✍️ Original Email Content");
        let mut draft = self.form.email_content().to_string();
        let response = ui.add(
            egui::TextEdit::multiline(&mut draft)
                .id_salt("email_content")
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .hint_text("Paste the email you want to reply to"),
        );
        if response.changed() {
            self.form.update_email_content(draft);
        }

        ui.add_space(12.0);
        widgets::section_label(ui, "🎨 Tone (Optional)");
        let mut tone = self.form.tone();
        egui::ComboBox::from_id_salt("tone_selector")
            .selected_text(tone.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for option in Tone::ALL {
                    ui.selectable_value(&mut tone, option, option.label());
                }
            });
        if tone != self.form.tone() {
            self.form.update_tone(tone);
        }

        ui.add_space(16.0);
        if self.form.loading() {
            widgets::loading_button(ui);
        } else {
            let enabled = self.form.can_submit();
            let button = widgets::primary_button(ui, "🚀 Generate Reply", enabled);
            if ui.add_enabled(enabled, button).clicked() {
                submit_reply_request(&mut self.form, &self.cmd_tx);
            }
        }
    }

    fn show_error(&self, ui: &mut egui::Ui) {
        if let Some(message) = self.form.error_message() {
            ui.add_space(16.0);
            ui.colored_label(self.theme_mode().error_color(), message);
        }
    }

    fn show_reply(&mut self, ui: &mut egui::Ui) {
        if self.form.generated_reply().is_empty() {
            return;
        }

        ui.add_space(24.0);
        ui.label(egui::RichText::new("✉️ Generated Reply:").size(18.0).strong());
        let mut reply_view = self.form.generated_reply().to_string();
        ui.add(
            egui::TextEdit::multiline(&mut reply_view)
                .id_salt("generated_reply")
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .interactive(false),
        );

        ui.add_space(8.0);
        if ui.button("📋 Copy to Clipboard").clicked() {
            self.form
                .copy_to_clipboard(&mut self.clipboard, Instant::now());
        }
    }

    fn show_copy_toast(&mut self, ctx: &egui::Context) {
        self.form.expire_copy_confirmation(Instant::now());
        if !self.form.copy_confirmed() {
            return;
        }
        if widgets::copy_toast(ctx, self.theme_mode()) {
            self.form.dismiss_copy_confirmation();
        }
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.add_space(24.0);
                    ui.heading(
                        egui::RichText::new("Generate Professional Email Replies ✨")
                            .size(26.0)
                            .strong(),
                    );
                    ui.add_space(16.0);
                });
                ui.vertical(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    self.show_form(ui);
                    self.show_error(ui);
                    self.show_reply(ui);
                    ui.add_space(12.0);
                    let status = if self.form.status().is_empty() {
                        "Ready"
                    } else {
                        self.form.status()
                    };
                    ui.weak(format!("{status} · {}", self.server_url));
                });
            });
        });
    }

    fn next_repaint(&self, now: Instant) -> Duration {
        if self.form.loading() {
            return LOADING_REPAINT_INTERVAL;
        }
        self.form
            .copy_confirmation_remaining(now)
            .map(|remaining| remaining.min(IDLE_REPAINT_INTERVAL))
            .unwrap_or(IDLE_REPAINT_INTERVAL)
    }
}

impl eframe::App for EmailReplyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        self.show_header(ctx);
        self.show_main(ctx);
        self.show_copy_toast(ctx);

        ctx.request_repaint_after(self.next_repaint(Instant::now()));
    }
}
