//! CLI option enums shared between argument parsing and request building.

use clap::ValueEnum;
use serde::Serialize;

/// Reasoning effort requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThinkingLevel {
    Low,
    High,
}

impl ThinkingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThinkingLevel::Low => "low",
            ThinkingLevel::High => "high",
        }
    }
}

impl std::fmt::Display for ThinkingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fidelity at which attached media is tokenized for the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[value(rename_all = "snake_case")]
pub enum MediaResolution {
    #[serde(rename = "MEDIA_RESOLUTION_LOW")]
    Low,
    #[serde(rename = "MEDIA_RESOLUTION_MEDIUM")]
    Medium,
    #[serde(rename = "MEDIA_RESOLUTION_HIGH")]
    High,
    #[serde(rename = "MEDIA_RESOLUTION_ULTRA_HIGH")]
    UltraHigh,
}

impl MediaResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaResolution::Low => "low",
            MediaResolution::Medium => "medium",
            MediaResolution::High => "high",
            MediaResolution::UltraHigh => "ultra_high",
        }
    }
}

impl std::fmt::Display for MediaResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aspect ratios accepted by the image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AspectRatio {
    #[value(name = "1:1")]
    R1x1,
    #[value(name = "2:3")]
    R2x3,
    #[value(name = "3:2")]
    R3x2,
    #[value(name = "3:4")]
    R3x4,
    #[value(name = "4:3")]
    R4x3,
    #[value(name = "4:5")]
    R4x5,
    #[value(name = "5:4")]
    R5x4,
    #[value(name = "9:16")]
    R9x16,
    #[value(name = "16:9")]
    R16x9,
    #[value(name = "21:9")]
    R21x9,
}

impl AspectRatio {
    /// Returns the ratio in the `W:H` form the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::R1x1 => "1:1",
            AspectRatio::R2x3 => "2:3",
            AspectRatio::R3x2 => "3:2",
            AspectRatio::R3x4 => "3:4",
            AspectRatio::R4x3 => "4:3",
            AspectRatio::R4x5 => "4:5",
            AspectRatio::R5x4 => "5:4",
            AspectRatio::R9x16 => "9:16",
            AspectRatio::R16x9 => "16:9",
            AspectRatio::R21x9 => "21:9",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output resolution tier for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageSize {
    #[value(name = "1K")]
    K1,
    #[value(name = "2K")]
    K2,
    #[value(name = "4K")]
    K4,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::K1 => "1K",
            ImageSize::K2 => "2K",
            ImageSize::K4 => "4K",
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_level_serializes_to_screaming_snake() {
        assert_eq!(
            serde_json::to_value(ThinkingLevel::Low).unwrap(),
            serde_json::json!("LOW")
        );
        assert_eq!(
            serde_json::to_value(ThinkingLevel::High).unwrap(),
            serde_json::json!("HIGH")
        );
    }

    #[test]
    fn test_media_resolution_serializes_with_enum_prefix() {
        assert_eq!(
            serde_json::to_value(MediaResolution::Medium).unwrap(),
            serde_json::json!("MEDIA_RESOLUTION_MEDIUM")
        );
        assert_eq!(
            serde_json::to_value(MediaResolution::UltraHigh).unwrap(),
            serde_json::json!("MEDIA_RESOLUTION_ULTRA_HIGH")
        );
    }

    #[test]
    fn test_media_resolution_parses_snake_case_cli_values() {
        let parsed = <MediaResolution as ValueEnum>::from_str("ultra_high", false).unwrap();
        assert_eq!(parsed, MediaResolution::UltraHigh);
    }

    #[test]
    fn test_aspect_ratio_parses_colon_form() {
        let parsed = <AspectRatio as ValueEnum>::from_str("9:16", false).unwrap();
        assert_eq!(parsed, AspectRatio::R9x16);
        assert_eq!(parsed.as_str(), "9:16");
    }

    #[test]
    fn test_image_size_parses_uppercase_k() {
        let parsed = <ImageSize as ValueEnum>::from_str("4K", false).unwrap();
        assert_eq!(parsed, ImageSize::K4);
    }

    #[test]
    fn test_display_round_trips_through_value_enum() {
        // Defaults rendered by clap's `default_value_t` must parse back.
        for level in [ThinkingLevel::Low, ThinkingLevel::High] {
            let parsed = <ThinkingLevel as ValueEnum>::from_str(&level.to_string(), false).unwrap();
            assert_eq!(parsed, level);
        }
        for resolution in [
            MediaResolution::Low,
            MediaResolution::Medium,
            MediaResolution::High,
            MediaResolution::UltraHigh,
        ] {
            let parsed =
                <MediaResolution as ValueEnum>::from_str(&resolution.to_string(), false).unwrap();
            assert_eq!(parsed, resolution);
        }
        for ratio in [AspectRatio::R1x1, AspectRatio::R21x9] {
            let parsed = <AspectRatio as ValueEnum>::from_str(&ratio.to_string(), false).unwrap();
            assert_eq!(parsed, ratio);
        }
        for size in [ImageSize::K1, ImageSize::K2, ImageSize::K4] {
            let parsed = <ImageSize as ValueEnum>::from_str(&size.to_string(), false).unwrap();
            assert_eq!(parsed, size);
        }
    }
}
