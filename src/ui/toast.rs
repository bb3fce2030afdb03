//! Toast notifications for brief feedback messages.
//!
//! Used for action confirmations ("Saved timetable image") and for the
//! generic import/render error notices; they appear bottom-right and
//! fade away on their own.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }

    fn background_color(&self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(220, 255, 220),
            ToastLevel::Error => Color32::from_rgb(255, 220, 220),
        }
    }

    fn text_color(&self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(30, 120, 50),
            ToastLevel::Error => Color32::from_rgb(180, 40, 40),
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    level: ToastLevel,
    created_at: Instant,
}

const TOAST_DURATION: Duration = Duration::from_secs(3);
const FADE: Duration = Duration::from_millis(500);

impl Toast {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        if elapsed >= TOAST_DURATION {
            0.0
        } else if elapsed >= TOAST_DURATION - FADE {
            (TOAST_DURATION - elapsed).as_secs_f32() / FADE.as_secs_f32()
        } else {
            1.0
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }

    fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.push(Toast {
            message: message.into(),
            level,
            created_at: Instant::now(),
        });
    }

    /// Render active toasts bottom-right, stacking upward.
    pub fn render(&mut self, ctx: &Context) {
        self.toasts.retain(|toast| !toast.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        // Keep repainting while a fade is in progress.
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 300.0;
        let toast_height = 40.0;
        let margin = 10.0;

        for (index, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom()
                    - toast_height
                    - margin
                    - (index as f32) * (toast_height + 5.0),
            );

            let background = toast.level.background_color();
            let background = Color32::from_rgba_unmultiplied(
                background.r(),
                background.g(),
                background.b(),
                (230.0 * opacity) as u8,
            );
            let text_color = toast.level.text_color();
            let text_color = Color32::from_rgba_unmultiplied(
                text_color.r(),
                text_color.g(),
                text_color.b(),
                (255.0 * opacity) as u8,
            );

            egui::Area::new(egui::Id::new(("toast", index)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(background)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(toast.level.icon()).color(text_color).strong(),
                                );
                                ui.label(RichText::new(&toast.message).color(text_color));
                            });
                        });
                });
        }
    }
}
