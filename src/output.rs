//! Output files
//!
//! Renders the match set into the three export artifacts and writes them.

use crate::resource::Resource;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const JS_FILE: &str = "mansion-images-js.txt";
pub const URLS_FILE: &str = "mansion-images-urls.txt";
pub const JSON_FILE: &str = "mansion-images-full.json";

const CDN_HOST: &str = "https://res.cloudinary.com";

/// Automatic format and quality, served from the `v1` version path
const DELIVERY_TRANSFORMATION: &str = "f_auto,q_auto/v1";

const GALLERY_CATEGORY: &str = "filter-mansion";

/// Public delivery URL for an uploaded image
pub fn cdn_url(cloud_name: &str, public_id: &str) -> String {
    format!(
        "{}/{}/image/upload/{}/{}",
        CDN_HOST, cloud_name, DELIVERY_TRANSFORMATION, public_id
    )
}

pub fn render_urls(cloud_name: &str, matches: &[Resource]) -> Vec<String> {
    matches
        .iter()
        .map(|r| cdn_url(cloud_name, r.public_id()))
        .collect()
}

/// JavaScript array literal ready to paste into a gallery's image list
pub fn render_js_snippet(cloud_name: &str, matches: &[Resource]) -> Result<String> {
    let mut lines = Vec::with_capacity(matches.len());
    for (index, url) in render_urls(cloud_name, matches).iter().enumerate() {
        // JSON string syntax is valid JS and escapes quotes in odd public ids
        let src = serde_json::to_string(url)?;
        lines.push(format!(
            "      {{ src: {}, category: \"{}\", title: \"Luxury Mansion Project {}\" }},",
            src,
            GALLERY_CATEGORY,
            index + 1
        ));
    }

    Ok(format!(
        "// Mansion Builder Images - Add these to your images array\n\
         const mansionImages = [\n\
         {}\n\
         ];\n\
         \n\
         // To add to your existing array:\n\
         // images = [...images, ...mansionImages];",
        lines.join("\n")
    ))
}

#[derive(Serialize)]
struct FullExport<'a> {
    total_images: usize,
    resources: &'a [Resource],
}

/// Pretty-printed (2-space) JSON with the untouched provider records
pub fn render_full_json(matches: &[Resource]) -> Result<String> {
    let export = FullExport {
        total_images: matches.len(),
        resources: matches,
    };
    serde_json::to_string_pretty(&export).context("Failed to serialize resources")
}

/// A file written by [`write_outputs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub description: &'static str,
}

/// Write all three artifacts into `dir`, overwriting existing files.
///
/// Nothing is written for an empty match set. Files are written one at a
/// time; a failure leaves earlier files in place.
pub fn write_outputs(
    dir: &Path,
    cloud_name: &str,
    matches: &[Resource],
) -> Result<Vec<WrittenFile>> {
    if matches.is_empty() {
        tracing::debug!("No matches, skipping output files");
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {:?}", dir))?;

    let artifacts = [
        (
            JS_FILE,
            render_js_snippet(cloud_name, matches)?,
            "ready to copy-paste into your code",
        ),
        (
            URLS_FILE,
            render_urls(cloud_name, matches).join("\n"),
            "simple URLs list",
        ),
        (JSON_FILE, render_full_json(matches)?, "complete data"),
    ];

    let mut written = Vec::with_capacity(artifacts.len());
    for (name, content, description) in artifacts {
        let path = dir.join(name);
        std::fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
        tracing::info!("Wrote {:?}", path);
        written.push(WrittenFile { path, description });
    }

    Ok(written)
}
