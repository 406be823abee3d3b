use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tape_patterns::{Identity, PatternConfig, PatternEngine, WavePattern};

const DEFAULT_OUTPUT_DIR: &str = "content/labels";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "render_labels",
    version,
    about = "Offline label pre-render (identity manifest -> one SVG per entry)"
)]
struct Cli {
    /// JSON manifest: an array of {"creator", "title", "year"?} records.
    #[arg(long, value_name = "JSON")]
    manifest: PathBuf,

    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    #[arg(long, default_value_t = 60)]
    max_elements: usize,

    #[arg(long, default_value_t = false)]
    gradients: bool,

    /// Sample curves at full density instead of the simplified default.
    #[arg(long, default_value_t = false)]
    full_paths: bool,

    /// Overwrite files that already exist in the output directory.
    #[arg(long, default_value_t = false)]
    force: bool,
}

fn validate_args(args: &Cli) -> Result<()> {
    if args.max_elements == 0 {
        bail!("--max-elements must be >= 1");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    run(args)
}

fn run(args: Cli) -> Result<()> {
    validate_args(&args)?;

    let manifest_text = fs::read_to_string(&args.manifest)
        .with_context(|| format!("read manifest {}", args.manifest.display()))?;
    let identities: Vec<Identity> = serde_json::from_str(&manifest_text)
        .with_context(|| format!("parse manifest {}", args.manifest.display()))?;
    if identities.is_empty() {
        bail!("manifest has no entries");
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output directory {}", args.out_dir.display()))?;

    let config = PatternConfig {
        max_elements: args.max_elements,
        enable_gradients: args.gradients,
        simplify_paths: !args.full_paths,
    };
    let engine = PatternEngine::new();

    let mut written = 0usize;
    let mut skipped = 0usize;
    for identity in &identities {
        let file = args.out_dir.join(format!("{}.svg", slug(&identity.key())));
        if file.exists() && !args.force {
            log::info!("skipping existing {}", file.display());
            skipped += 1;
            continue;
        }

        let pattern = engine.generate(identity, &config);
        let meta = engine.meta(identity, &config);
        log::info!(
            "{} -> {} ({}, {} elements)",
            identity.key(),
            file.display(),
            meta.algorithm,
            meta.element_count
        );

        fs::write(&file, pattern_to_svg(&pattern))
            .with_context(|| format!("write {}", file.display()))?;
        written += 1;
    }

    println!(
        "rendered {written} label(s) to {} ({skipped} skipped)",
        args.out_dir.display()
    );
    Ok(())
}

/// Filesystem-safe name derived from the identity key. Lossy by design;
/// distinct identities that collide here overwrite each other, matching
/// how the gallery resolves artwork by slug.
fn slug(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut last_dash = false;
    for ch in key.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !out.is_empty() {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Standalone SVG for one pattern: background, gradient defs, paths.
/// The generated geometry lives in the fixed 337x161 label space.
fn pattern_to_svg(pattern: &WavePattern) -> String {
    let mut svg = String::with_capacity(pattern.elements.len() * 160 + 512);
    svg.push_str(r#"<svg viewBox="0 0 337 161" xmlns="http://www.w3.org/2000/svg">"#);
    svg.push('\n');
    let _ = writeln!(
        svg,
        r#"  <rect width="337" height="161" fill="{}"/>"#,
        pattern.background_color
    );

    if !pattern.gradients.is_empty() {
        svg.push_str("  <defs>\n");
        for g in &pattern.gradients {
            let _ = writeln!(
                svg,
                r#"    <linearGradient id="{}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                g.id, g.x1, g.y1, g.x2, g.y2
            );
            for stop in &g.stops {
                let _ = writeln!(
                    svg,
                    r#"      <stop offset="{}" stop-color="{}" stop-opacity="{:.2}"/>"#,
                    stop.offset, stop.color, stop.opacity
                );
            }
            svg.push_str("    </linearGradient>\n");
        }
        svg.push_str("  </defs>\n");
    }

    for el in &pattern.elements {
        let _ = writeln!(
            svg,
            r#"  <path d="{}" stroke="{}" stroke-width="{:.2}" fill="{}" opacity="{:.2}"/>"#,
            el.path_data,
            el.stroke.as_svg(),
            el.stroke_width,
            el.fill.as_svg(),
            el.opacity
        );
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_flattens_delimiters_and_case() {
        assert_eq!(slug("DJ Dan::Housing Project::1992"), "dj-dan-housing-project-1992");
        assert_eq!(slug("::edge::"), "edge");
    }

    #[test]
    fn validate_rejects_zero_cap() {
        let args = Cli::parse_from([
            "render_labels",
            "--manifest",
            "m.json",
            "--max-elements",
            "0",
        ]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn svg_embeds_every_element_and_the_background() {
        let engine = PatternEngine::new();
        let identity = Identity::new("DJ Dan", "Housing Project", Some("1992"));
        let pattern = engine.generate(&identity, &PatternConfig::default());

        let svg = pattern_to_svg(&pattern);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"fill="#000000""##));
        assert_eq!(svg.matches("<path ").count(), pattern.elements.len());
    }

    #[test]
    fn svg_defines_gradients_only_when_present() {
        let engine = PatternEngine::new();
        let config = PatternConfig {
            enable_gradients: true,
            ..PatternConfig::default()
        };
        // Sweep identities until one pattern carries a gradient.
        let mut saw_gradient = false;
        for n in 0..64 {
            let identity = Identity::new("Crew", format!("Volume {n}"), None);
            let pattern = engine.generate(&identity, &config);
            let svg = pattern_to_svg(&pattern);
            assert_eq!(!pattern.gradients.is_empty(), svg.contains("<linearGradient"));
            saw_gradient |= !pattern.gradients.is_empty();
        }
        assert!(saw_gradient, "no sampled identity produced a gradient");
    }
}
