//! Centralized theme constants for the contact form
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x05, 0x05, 0x07);
pub const BG_FORM: Color32 = Color32::from_rgba_premultiplied(0x00, 0x00, 0x00, 0xB3); // black/70
pub const BG_INPUT: Color32 = Color32::from_rgba_premultiplied(0x00, 0x00, 0x00, 0x99); // black/60
pub const BG_INPUT_FOCUS: Color32 = Color32::from_rgba_premultiplied(0x00, 0x00, 0x00, 0xCC); // black/80

// =============================================================================
// COLORS - Primary (Magenta)
// =============================================================================
pub const PRIMARY: Color32 = Color32::from_rgb(0xf2, 0x0d, 0xf2);
pub const PRIMARY_GLOW: Color32 = Color32::from_rgba_premultiplied(0x79, 0x06, 0x79, 0x80); // primary @ 50%

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_LABEL: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb); // gray-300
pub const TEXT_HINT: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf); // gray-400

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_FORM: Color32 = Color32::from_rgba_premultiplied(0x1a, 0x1a, 0x1a, 0x1a); // white/10
pub const BORDER_INPUT: Color32 = Color32::from_rgba_premultiplied(0x33, 0x33, 0x33, 0x33); // white/20

// =============================================================================
// COLORS - Feedback
// =============================================================================
pub const SUCCESS_BG: Color32 = Color32::from_rgba_premultiplied(0x04, 0x25, 0x0f, 0x33); // green-500/20
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(0x86, 0xef, 0xac); // green-300
pub const SUCCESS_BORDER: Color32 = Color32::from_rgba_premultiplied(0x16, 0x40, 0x1e, 0x4d); // green-400/30
pub const ERROR_BG: Color32 = Color32::from_rgba_premultiplied(0x31, 0x0d, 0x0d, 0x33); // red-500/20
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xfc, 0xa5, 0xa5); // red-300
pub const ERROR_BORDER: Color32 = Color32::from_rgba_premultiplied(0x4a, 0x22, 0x22, 0x4d); // red-400/30

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_PRIMARY_HOVER: Color32 = Color32::from_rgb(0xf5, 0x3d, 0xf5);
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80); // gray-500

// =============================================================================
// SIZES
// =============================================================================
pub const FORM_MAX_WIDTH: f32 = 672.0; // max-w-2xl
pub const FORM_TOP_MARGIN: f32 = 96.0;
pub const BUTTON_HEIGHT: f32 = 44.0;
pub const DISABLED_OPACITY: f32 = 0.6;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 8.0;
pub const RADIUS_LARGE: f32 = 16.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_FOCUS: f32 = 2.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_LG: f32 = 24.0;
pub const SPACING_XL: f32 = 40.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_BASE,
        extreme_bg_color: BG_INPUT,
        hyperlink_color: PRIMARY,
        text_cursor: egui::style::TextCursorStyle {
            stroke: egui::Stroke::new(STROKE_FOCUS, PRIMARY),
            ..Default::default()
        },
        selection: egui::style::Selection {
            bg_fill: PRIMARY_GLOW,
            stroke: egui::Stroke::new(STROKE_FOCUS, PRIMARY),
        },
        widgets: egui::style::Widgets {
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT,
                weak_bg_fill: BG_INPUT,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_INPUT),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT_FOCUS,
                weak_bg_fill: BTN_PRIMARY_HOVER,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, PRIMARY),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 1.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BG_INPUT_FOCUS,
                weak_bg_fill: PRIMARY,
                bg_stroke: egui::Stroke::new(STROKE_FOCUS, PRIMARY),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            ..egui::style::Widgets::dark()
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_SM, SPACING_SM);
        style.spacing.button_padding = egui::vec2(16.0, 12.0);
        style.spacing.text_edit_width = FORM_MAX_WIDTH;
    });
}

// =============================================================================
// HELPER - Form frame
// =============================================================================
pub fn form_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_FORM)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_FORM))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
        .shadow(egui::epaint::Shadow {
            offset: [0, 25],
            blur: 50,
            spread: 0,
            color: Color32::from_black_alpha(100),
        })
}

/// Frame around a single-line or multi-line input
pub fn input_frame(focused: bool) -> egui::Frame {
    let (fill, stroke) = if focused {
        (BG_INPUT_FOCUS, egui::Stroke::new(STROKE_FOCUS, PRIMARY))
    } else {
        (BG_INPUT, egui::Stroke::new(STROKE_DEFAULT, BORDER_INPUT))
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(16, 12))
}

/// Inline feedback message frame
pub fn feedback_frame(success: bool) -> egui::Frame {
    let (fill, border) = if success {
        (SUCCESS_BG, SUCCESS_BORDER)
    } else {
        (ERROR_BG, ERROR_BORDER)
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, border))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(16))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Primary magenta button, gray while a submission is in flight
pub fn button_submit(text: impl Into<String>, busy: bool) -> egui::Button<'static> {
    let fill = if busy { BTN_DISABLED } else { PRIMARY };
    egui::Button::new(egui::RichText::new(text.into()).strong().color(TEXT_PRIMARY))
        .fill(fill)
        .corner_radius(RADIUS_DEFAULT)
}
