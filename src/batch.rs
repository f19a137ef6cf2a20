use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageReader;

use crate::detection::quads::{find_quads, DEFAULT_AREA_THRESHOLD};
use crate::draw::render_quads;
use crate::rectify::warp::rectify;

/// Options controlling a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory containing the input images.
    pub load_dir: PathBuf,
    /// Output root; each input gets its own subdirectory.
    pub save_dir: PathBuf,
    /// Extension used to discover input images.
    pub ext: String,
    /// Also save a copy of each source image with detected contours drawn.
    pub save_contour: bool,
    /// Print per-stage diagnostics.
    pub verbose: bool,
}

/// Process every matching image under `load_dir`, writing rectified crops
/// (and optional contour overlays) under `save_dir`. Fail-fast: the first
/// unreadable input or unwritable output aborts the whole batch.
pub fn run(options: &BatchOptions) -> Result<()> {
    let files = list_images(&options.load_dir, &options.ext)?;

    for (i, file) in files.iter().enumerate() {
        let detected = process_file(file, options)?;
        println!(
            "{} / {} finished! Detected {} rectangles.",
            i + 1,
            files.len(),
            detected
        );
    }

    Ok(())
}

/// Enumerate `*.{ext}` files directly under `dir`, sorted by path.
pub fn list_images(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read input directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Run the detect-match-rectify pipeline on a single image and write its
/// outputs. Returns the number of quadrilaterals detected.
pub fn process_file(path: &Path, options: &BatchOptions) -> Result<usize> {
    let file_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("input file has no usable name: {}", path.display()))?;

    let img = ImageReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?;

    if options.verbose {
        println!(
            "Loaded {} ({}x{})",
            path.display(),
            img.width(),
            img.height()
        );
    }

    let quads = find_quads(&img, DEFAULT_AREA_THRESHOLD);
    if options.verbose {
        println!("  {} quadrilateral contour(s) above area threshold", quads.len());
    }

    if options.save_contour {
        let overlay = render_quads(&img, &quads);
        let contour_dir = options.save_dir.join(file_name).join("contour");
        fs::create_dir_all(&contour_dir)
            .with_context(|| format!("failed to create {}", contour_dir.display()))?;
        let overlay_path = contour_dir.join("contour.png");
        overlay
            .save(&overlay_path)
            .with_context(|| format!("failed to save {}", overlay_path.display()))?;
        if options.verbose {
            println!("  Saved contour overlay to {}", overlay_path.display());
        }
    }

    let rectified = rectify(&img, &quads);
    if !rectified.is_empty() {
        let perspective_dir = options.save_dir.join(file_name).join("perspective");
        fs::create_dir_all(&perspective_dir)
            .with_context(|| format!("failed to create {}", perspective_dir.display()))?;
        for (j, out) in rectified.iter().enumerate() {
            let out_path = perspective_dir.join(format!("{j:03}.png"));
            out.save(&out_path)
                .with_context(|| format!("failed to save {}", out_path.display()))?;
        }
    }

    Ok(quads.len())
}
