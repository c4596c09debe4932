// SPDX-License-Identifier: MPL-2.0
//! Design tokens: palette, spacing, typography and decorative layer sizes.
//!
//! Every color and metric used by the page view lives here so the section
//! renderers stay free of magic numbers.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::from_rgb(0.043, 0.055, 0.086);
    pub const SURFACE: Color = Color::from_rgb(0.075, 0.09, 0.13);
    pub const SURFACE_RAISED: Color = Color::from_rgb(0.11, 0.13, 0.18);
    pub const BORDER: Color = Color::from_rgb(0.18, 0.21, 0.28);

    pub const TEXT: Color = Color::from_rgb(0.93, 0.94, 0.96);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.6, 0.64, 0.72);

    pub const ACCENT: Color = Color::from_rgb(0.39, 0.4, 0.95); // Indigo
    pub const ACCENT_SOFT: Color = Color::from_rgb(0.55, 0.36, 0.96); // Violet
    pub const ACCENT_WARM: Color = Color::from_rgb(0.93, 0.29, 0.6); // Pink
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Decorative blobs behind section content.
    pub const BLOB: f32 = 0.12;
    /// Navigation bar once the page has scrolled.
    pub const NAV_SCROLLED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAV_HEIGHT: f32 = 64.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;
    pub const PROJECT_IMAGE_HEIGHT: f32 = 160.0;

    /// Diameter of a parallax blob.
    pub const BLOB_SIZE: f32 = 320.0;
    /// Resting distance of a blob from the section top, before parallax.
    pub const BLOB_BASE_OFFSET: f32 = 140.0;
    /// Diameter of the ring that follows the pointer.
    pub const CURSOR_RING: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 56.0;
    pub const TITLE_LG: f32 = 36.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 17.0;
    pub const BODY: f32 = 15.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Hovered card glow.
    pub const GLOW: Shadow = Shadow {
        color: palette::ACCENT,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BLOB > 0.0 && opacity::BLOB < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Blobs must fit inside the shortest section even at their largest offset.
    assert!(sizing::BLOB_BASE_OFFSET >= 100.0);
};
