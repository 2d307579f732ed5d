use phage_core::palette::{self, ColorError};

const TINT_ALPHA: f32 = 0.2;

/// CSS custom properties for the brand palette.
#[must_use]
pub fn palette_css() -> String {
    let solid = [
        ("accent", palette::ACCENT),
        ("accent-dark-1", palette::ACCENT_DARK_1),
        ("accent-dark-2", palette::ACCENT_DARK_2),
        ("accent-dark-3", palette::ACCENT_DARK_3),
        ("accent-dark-4", palette::ACCENT_DARK_4),
        ("background", palette::BACKGROUND),
        ("recommended", palette::RECOMMENDED),
        ("not-recommended", palette::NOT_RECOMMENDED),
    ];
    let tinted = [
        ("recommended-tint", palette::RECOMMENDED),
        ("not-recommended-tint", palette::NOT_RECOMMENDED),
    ];

    let mut css = String::from(":root {\n");
    for (name, hex) in solid {
        css.push_str(&format!("  --{name}: {hex};\n"));
    }
    for (name, hex) in tinted {
        css.push_str(&format!("  --{name}: {};\n", tint(hex)));
    }
    css.push_str("  --text: #ffffff;\n  --muted: #9aa7b8;\n}\n");
    css
}

fn tint(hex: &str) -> String {
    palette::hex_to_rgba(hex, TINT_ALPHA)
        .map(|rgba| rgba.to_string())
        .unwrap_or_else(|err: ColorError| {
            tracing::warn!(%err, "palette colour left untinted");
            hex.to_owned()
        })
}
