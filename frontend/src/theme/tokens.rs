//! Design tokens shared by every component.
//!
//! The tables here are the single source for colors, the type scale, the
//! spacing scale and corner radii. Components never hard-code these values;
//! they reference the CSS custom properties and utility classes that
//! `global_style` generates from these tables.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    BrandPrimary,
    BrandSecondary,
    BrandAccent,
    BrandInfo,
    SurfaceBg,
    SurfacePanel,
    TextMain,
    TextMuted,
    Stroke,
}

impl ColorName {
    pub const ALL: [ColorName; 9] = [
        ColorName::BrandPrimary,
        ColorName::BrandSecondary,
        ColorName::BrandAccent,
        ColorName::BrandInfo,
        ColorName::SurfaceBg,
        ColorName::SurfacePanel,
        ColorName::TextMain,
        ColorName::TextMuted,
        ColorName::Stroke,
    ];

    pub fn token(self) -> &'static ColorToken {
        // PALETTE is laid out in declaration order of the enum
        &PALETTE[self as usize]
    }

    pub fn hex(self) -> &'static str {
        self.token().hex
    }

    /// `var(--brand-primary)` style reference for use inside CSS.
    pub fn css_var(self) -> String {
        format!("var({})", self.token().css_property())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorToken {
    pub name: &'static str,
    pub hex: &'static str,
    #[serde(skip)]
    pub label: &'static str,
    #[serde(skip)]
    pub description: &'static str,
}

impl ColorToken {
    /// Custom property name, `brand.primary` becomes `--brand-primary`.
    pub fn css_property(&self) -> String {
        format!("--{}", self.name.replace('.', "-"))
    }
}

pub static PALETTE: [ColorToken; 9] = [
    ColorToken {
        name: "brand.primary",
        hex: "#6F8D6A",
        label: "Primary",
        description: "주요 브랜드 색상",
    },
    ColorToken {
        name: "brand.secondary",
        hex: "#ACBBA3",
        label: "Secondary",
        description: "보조 색상",
    },
    ColorToken {
        name: "brand.accent",
        hex: "#9DC595",
        label: "Accent",
        description: "강조 색상",
    },
    ColorToken {
        name: "brand.info",
        hex: "#6F8D6A",
        label: "Info",
        description: "정보 색상",
    },
    ColorToken {
        name: "surface.bg",
        hex: "#F5F7FA",
        label: "Background",
        description: "배경 색상",
    },
    ColorToken {
        name: "surface.panel",
        hex: "#FFFFFF",
        label: "Panel",
        description: "패널 색상",
    },
    ColorToken {
        name: "text.main",
        hex: "#1B2A3A",
        label: "Text",
        description: "텍스트 색상",
    },
    ColorToken {
        name: "text.muted",
        hex: "#607089",
        label: "Muted",
        description: "보조 텍스트 색상",
    },
    ColorToken {
        name: "stroke",
        hex: "#E5EAF1",
        label: "Stroke",
        description: "테두리 색상",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u16")]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
    ExtraBold,
}

impl FontWeight {
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
        }
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeScaleEntry {
    pub label: &'static str,
    pub size_px: u32,
    pub line_height_px: u32,
    pub weight: FontWeight,
}

impl TypeScaleEntry {
    pub fn by_label(label: &str) -> Option<&'static TypeScaleEntry> {
        TYPE_SCALE.iter().find(|entry| entry.label == label)
    }

    pub fn class_name(&self) -> String {
        format!("text-{}", self.label)
    }
}

pub static TYPE_SCALE: [TypeScaleEntry; 7] = [
    TypeScaleEntry { label: "44", size_px: 44, line_height_px: 56, weight: FontWeight::ExtraBold },
    TypeScaleEntry { label: "36", size_px: 36, line_height_px: 44, weight: FontWeight::Bold },
    TypeScaleEntry { label: "28", size_px: 28, line_height_px: 36, weight: FontWeight::Bold },
    TypeScaleEntry { label: "22", size_px: 22, line_height_px: 30, weight: FontWeight::Semibold },
    TypeScaleEntry { label: "18", size_px: 18, line_height_px: 28, weight: FontWeight::Medium },
    TypeScaleEntry { label: "16", size_px: 16, line_height_px: 26, weight: FontWeight::Regular },
    TypeScaleEntry { label: "14", size_px: 14, line_height_px: 22, weight: FontWeight::Regular },
];

/// Spacing scale in pixels, ascending.
pub const SPACING_SCALE: [u32; 11] = [4, 6, 8, 12, 16, 20, 24, 32, 40, 48, 64];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadiusToken {
    pub name: &'static str,
    pub px: u32,
}

pub static RADII: [RadiusToken; 4] = [
    RadiusToken { name: "lg", px: 12 },
    RadiusToken { name: "xl", px: 16 },
    RadiusToken { name: "2xl", px: 20 },
    RadiusToken { name: "3xl", px: 24 },
];

pub const FONT_SANS: &str = "'Inter', 'Noto Sans KR', system-ui, sans-serif";
pub const FONT_DISPLAY: &str = "'Inter', 'SF Pro Display', system-ui, sans-serif";

#[derive(Serialize)]
struct TokenExport {
    colors: BTreeMap<&'static str, &'static str>,
    #[serde(rename = "typeScale")]
    type_scale: &'static [TypeScaleEntry],
    spacing: &'static [u32],
    radii: &'static [RadiusToken],
}

/// Pretty-printed JSON of the whole registry, shown by the design-system
/// preview so the tokens can be copied into other tools.
pub fn export_json() -> serde_json::Result<String> {
    let export = TokenExport {
        colors: PALETTE.iter().map(|token| (token.name, token.hex)).collect(),
        type_scale: &TYPE_SCALE,
        spacing: &SPACING_SCALE,
        radii: &RADII,
    };
    serde_json::to_string_pretty(&export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_hex_color(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn every_color_name_resolves() {
        for name in ColorName::ALL {
            let token = name.token();
            assert!(is_hex_color(token.hex), "{} has bad value {}", token.name, token.hex);
            assert_eq!(name.hex(), token.hex);
        }
    }

    #[test]
    fn enum_order_matches_palette() {
        let expected = [
            "brand.primary",
            "brand.secondary",
            "brand.accent",
            "brand.info",
            "surface.bg",
            "surface.panel",
            "text.main",
            "text.muted",
            "stroke",
        ];
        for (name, expected) in ColorName::ALL.iter().zip(expected) {
            assert_eq!(name.token().name, expected);
        }
    }

    #[test]
    fn palette_names_are_unique() {
        let names: HashSet<_> = PALETTE.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), PALETTE.len());
    }

    #[test]
    fn css_property_names() {
        assert_eq!(ColorName::BrandPrimary.token().css_property(), "--brand-primary");
        assert_eq!(ColorName::Stroke.css_var(), "var(--stroke)");
        assert_eq!(ColorName::TextMuted.hex(), "#607089");
    }

    #[test]
    fn type_scale_lookup() {
        let labels: HashSet<_> = TYPE_SCALE.iter().map(|e| e.label).collect();
        assert_eq!(labels.len(), 7);

        let headline = TypeScaleEntry::by_label("44").unwrap();
        assert_eq!(headline.line_height_px, 56);
        assert_eq!(headline.weight.value(), 800);
        assert_eq!(headline.class_name(), "text-44");

        let caption = TypeScaleEntry::by_label("14").unwrap();
        assert_eq!((caption.size_px, caption.line_height_px), (14, 22));
        assert!(TypeScaleEntry::by_label("12").is_none());
    }

    #[test]
    fn spacing_scale_is_ascending() {
        assert_eq!(SPACING_SCALE.len(), 11);
        assert!(SPACING_SCALE.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn export_contains_every_token() {
        let json = export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["colors"]["brand.primary"], "#6F8D6A");
        assert_eq!(value["colors"].as_object().unwrap().len(), 9);
        assert_eq!(value["typeScale"][0]["weight"], 800);
        assert_eq!(value["spacing"].as_array().unwrap().len(), 11);
        assert_eq!(value["radii"][3]["px"], 24);
    }
}
