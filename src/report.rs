//! Console reporting
//!
//! Line builders are pure so their output can be checked in tests; the
//! `print_*` wrappers send them to stdout.

use crate::cloudinary::format_api_error;
use crate::output::WrittenFile;
use crate::resource::{PageProgress, Resource, ScanOutcome};

/// Matched identifiers listed after a scan
pub const MATCH_PREVIEW_LIMIT: usize = 10;

/// Scanned identifiers listed when nothing matched
pub const SAMPLE_LIMIT: usize = 20;

/// Numbered `public_id` listing, cut at `limit` with a remainder line
pub fn numbered_listing(resources: &[Resource], limit: usize, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = resources
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, r)| format!("   {:>width$}. {}", i + 1, r.public_id(), width = width))
        .collect();

    if resources.len() > limit {
        lines.push(format!("   ... and {} more", resources.len() - limit));
    }
    lines
}

pub fn progress_line(progress: &PageProgress) -> String {
    format!(
        "   📦 Scanned {} images | Total: {} | Mansion candidates: {}",
        progress.page_size, progress.total_scanned, progress.total_matches
    )
}

/// Everything printed once pagination is over
pub fn summary_lines(outcome: &ScanOutcome) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(err) = &outcome.error {
        lines.push(format!("❌ Error: {}", format_api_error(err)));
    }

    lines.push(String::new());
    lines.push(format!(
        "🎯 Found {} potential mansion images out of {} total images",
        outcome.matches.len(),
        outcome.scanned.len()
    ));

    if outcome.matches.is_empty() {
        lines.push(String::new());
        lines.push(
            "❌ No mansion images found. Let me show you all image names to help identify the pattern..."
                .to_string(),
        );
        lines.push(String::new());
        lines.push(format!("📋 Sample image names (first {}):", SAMPLE_LIMIT));
        lines.extend(numbered_listing(&outcome.scanned, SAMPLE_LIMIT, 2));
        lines.push(String::new());
        lines.push(
            "💡 Check the names above and rerun with --keyword <WORD> to match them".to_string(),
        );
    } else {
        lines.push(String::new());
        lines.push("📸 Mansion images found:".to_string());
        lines.extend(numbered_listing(&outcome.matches, MATCH_PREVIEW_LIMIT, 1));
    }

    lines
}

pub fn written_lines(written: &[WrittenFile]) -> Vec<String> {
    let mut lines: Vec<String> = written
        .iter()
        .map(|f| format!("✅ Saved: {}", f.path.display()))
        .collect();

    lines.push(String::new());
    lines.push("🎉 SUCCESS! Files created:".to_string());
    lines.extend(written.iter().map(|f| {
        let name = f
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| f.path.display().to_string());
        format!("- {} ({})", name, f.description)
    }));
    lines
}

pub fn print_banner() {
    println!("🔍 Scanning ALL images in your Cloudinary account to find mansion images...");
}

pub fn print_progress(progress: &PageProgress) {
    println!("{}", progress_line(progress));
}

pub fn print_summary(outcome: &ScanOutcome) {
    for line in summary_lines(outcome) {
        println!("{}", line);
    }
}

pub fn print_saving(count: usize) {
    println!();
    println!("💾 Saving {} mansion images to files...", count);
}

pub fn print_written(written: &[WrittenFile]) {
    for line in written_lines(written) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn resources(prefix: &str, count: usize) -> Vec<Resource> {
        (1..=count)
            .map(|i| Resource::new(&format!("{}-{}", prefix, i)))
            .collect()
    }

    #[test]
    fn test_progress_line() {
        let progress = PageProgress {
            page_size: 500,
            total_scanned: 1500,
            total_matches: 42,
        };

        assert_eq!(
            progress_line(&progress),
            "   📦 Scanned 500 images | Total: 1500 | Mansion candidates: 42"
        );
    }

    #[test]
    fn test_listing_under_limit() {
        let lines = numbered_listing(&resources("villa", 3), 10, 1);
        assert_eq!(lines, vec!["   1. villa-1", "   2. villa-2", "   3. villa-3"]);
    }

    #[test]
    fn test_listing_truncates_with_remainder() {
        let lines = numbered_listing(&resources("villa", 13), 10, 1);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[9], "   10. villa-10");
        assert_eq!(lines[10], "   ... and 3 more");
    }

    #[test]
    fn test_sample_is_right_aligned() {
        let lines = numbered_listing(&resources("img", 2), 20, 2);
        assert_eq!(lines[0], "    1. img-1");
    }

    #[test]
    fn test_no_matches_shows_sample_of_scanned() {
        let outcome = ScanOutcome {
            scanned: resources("house", 25),
            pages: 1,
            ..Default::default()
        };

        let lines = summary_lines(&outcome);

        assert!(lines.iter().any(|l| l == "   20. house-20"));
        assert!(!lines.iter().any(|l| l.contains("house-21")));
        assert!(lines.iter().any(|l| l == "   ... and 5 more"));
        assert!(lines.iter().any(|l| l.contains("--keyword")));
    }

    #[test]
    fn test_matches_listed_instead_of_sample() {
        let outcome = ScanOutcome {
            scanned: resources("house", 5),
            matches: resources("villa", 2),
            pages: 1,
            ..Default::default()
        };

        let lines = summary_lines(&outcome);

        assert!(lines.iter().any(|l| l.contains("Found 2 potential mansion images out of 5")));
        assert!(lines.iter().any(|l| l == "   2. villa-2"));
        assert!(!lines.iter().any(|l| l.contains("house-1")));
    }

    #[test]
    fn test_request_error_is_reported_first() {
        let outcome = ScanOutcome {
            error: Some(anyhow::anyhow!("API request failed: 401 Unauthorized")),
            ..Default::default()
        };

        let lines = summary_lines(&outcome);
        assert!(lines[0].starts_with("❌ Error: Authentication failed"));
    }

    #[test]
    fn test_written_lines_name_files() {
        let written = vec![WrittenFile {
            path: PathBuf::from("out/mansion-images-urls.txt"),
            description: "simple URLs list",
        }];

        let lines = written_lines(&written);
        assert_eq!(lines[0], "✅ Saved: out/mansion-images-urls.txt");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("- mansion-images-urls.txt (simple URLs list)")
        );
    }
}
