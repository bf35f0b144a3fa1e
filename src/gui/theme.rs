use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin()
    }
}

impl Theme {
    pub fn catppuccin() -> Self {
        Theme { dark: ThemeDetails::mocha(), light: ThemeDetails::latte() }
    }

    /// Accent colors follow whichever variant egui is currently rendering.
    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).mauve)
    }

    pub fn bold(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).peach)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).yellow
    }

    pub fn pink(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).pink
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    peach: Color32,
    yellow: Color32,
    green: Color32,
    mauve: Color32,
    sky: Color32,
    pink: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    //Colors from https://catppuccin.com/palette (Mocha / Latte)
    fn mocha() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            foreground: Color32::from_rgb(0xcd, 0xd6, 0xf4),
            selection: Color32::from_rgb(0x45, 0x47, 0x5a),
            comment: Color32::from_rgb(0x6c, 0x70, 0x86),
            red: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            peach: Color32::from_rgb(0xfa, 0xb3, 0x87),
            yellow: Color32::from_rgb(0xf9, 0xe2, 0xaf),
            green: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            mauve: Color32::from_rgb(0xcb, 0xa6, 0xf7),
            sky: Color32::from_rgb(0x89, 0xdc, 0xeb),
            pink: Color32::from_rgb(0xf5, 0xc2, 0xe7),
            background_darker: Color32::from_rgb(0x11, 0x11, 0x1b),
            background_dark: Color32::from_rgb(0x18, 0x18, 0x25),
            background_light: Color32::from_rgb(0x31, 0x32, 0x44),
            background_lighter: Color32::from_rgb(0x58, 0x5b, 0x70),
        }
    }

    fn latte() -> Self {
        Self {
            background: Color32::from_rgb(0xef, 0xf1, 0xf5),
            foreground: Color32::from_rgb(0x4c, 0x4f, 0x69),
            selection: Color32::from_rgb(0xbc, 0xc0, 0xcc),
            comment: Color32::from_rgb(0x9c, 0xa0, 0xb0),
            red: Color32::from_rgb(0xd2, 0x0f, 0x39),
            peach: Color32::from_rgb(0xfe, 0x64, 0x0b),
            yellow: Color32::from_rgb(0xdf, 0x8e, 0x1d),
            green: Color32::from_rgb(0x40, 0xa0, 0x2b),
            mauve: Color32::from_rgb(0x88, 0x39, 0xef),
            sky: Color32::from_rgb(0x04, 0xa5, 0xe5),
            pink: Color32::from_rgb(0xea, 0x76, 0xcb),
            background_darker: Color32::from_rgb(0xdc, 0xe0, 0xe8),
            background_dark: Color32::from_rgb(0xe6, 0xe9, 0xef),
            background_light: Color32::from_rgb(0xcc, 0xd0, 0xda),
            background_lighter: Color32::from_rgb(0xff, 0xff, 0xff),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.sky, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke { color: theme.sky, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.mauve, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.sky,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.peach,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
