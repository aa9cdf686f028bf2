//! Rendering of consultation answers and saving of generated images.

use crate::gemini::{Consultation, ImageGeneration};
use crate::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write the consultation answer, and any cited sources, to `out`.
pub fn write_consultation(out: &mut impl Write, consultation: &Consultation) -> Result<()> {
    for text in &consultation.text_parts {
        writeln!(out, "{}", text)?;
    }

    if let Some(sources) = &consultation.sources {
        writeln!(out, "\n{}", "-".repeat(50))?;
        writeln!(out, "Sources:")?;
        for source in sources {
            writeln!(out, "  - {}: {}", source.title, source.uri)?;
        }
    }

    Ok(())
}

/// Write every generated image to `output_path`, creating parent directories
/// as needed.
///
/// Each image is written to the same path, so the last one wins. Returns the
/// absolute path for each write, in response order.
pub fn save_images(generation: &ImageGeneration, output_path: &Path) -> Result<Vec<PathBuf>> {
    let mut saved = Vec::with_capacity(generation.images.len());

    for image in &generation.images {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(output_path, &image.bytes)?;
        saved.push(std::path::absolute(output_path)?);
    }

    Ok(saved)
}
