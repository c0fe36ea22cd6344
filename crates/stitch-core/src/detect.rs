//! Framework detection for JavaScript front-end projects.
//!
//! Classification is deliberately crude: the project's `package.json`
//! is read as raw text and tested for quoted dependency-name
//! substrings, never parsed as JSON. A manifest declaring both marker
//! pairs matches both frameworks; a missing or unreadable manifest
//! matches neither.

use std::fs;
use std::path::Path;
use tracing::warn;

/// File name of the package manifest probed in the project root.
pub const MANIFEST: &str = "package.json";

/// A front-end framework stitch knows how to configure Tailwind for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    /// Vite with React
    ViteReact,
    /// Next.js
    NextJs,
}

impl Framework {
    /// The `content` glob list substituted into `tailwind.config.js`
    /// for this framework.
    pub fn content_globs(&self) -> &'static str {
        match self {
            Framework::ViteReact => {
                "content: ['./index.html', './src/**/*.{js,ts,jsx,tsx}'],"
            }
            Framework::NextJs => {
                "content: ['./app/**/*.{js,ts,jsx,tsx,mdx}','./pages/**/*.{js,ts,jsx,tsx,mdx}','./components/**/*.{js,ts,jsx,tsx,mdx}'],"
            }
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Framework::ViteReact => write!(f, "Vite React"),
            Framework::NextJs => write!(f, "Next.js"),
        }
    }
}

/// Outcome of probing a project's manifest.
///
/// The two classifications are independent booleans, not variants of
/// an enum: nothing stops a manifest from carrying both marker pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectProfile {
    /// Manifest contains both `"vite"` and `"react"`
    pub vite_react: bool,
    /// Manifest contains both `"next"` and `"react"`
    pub next_js: bool,
}

impl ProjectProfile {
    /// Whether at least one supported framework matched.
    pub fn is_recognized(&self) -> bool {
        self.vite_react || self.next_js
    }

    /// The matched frameworks, Vite+React first.
    pub fn frameworks(&self) -> Vec<Framework> {
        let mut matched = Vec::new();
        if self.vite_react {
            matched.push(Framework::ViteReact);
        }
        if self.next_js {
            matched.push(Framework::NextJs);
        }
        matched
    }
}

/// Probe the project root for supported frameworks.
///
/// Reads `package.json` once and substring-matches it. A read failure
/// (missing manifest included) is logged and reported as "no match";
/// it never aborts the caller.
pub fn probe(root: &Path) -> ProjectProfile {
    let manifest_path = root.join(MANIFEST);
    match fs::read_to_string(&manifest_path) {
        Ok(manifest) => ProjectProfile {
            vite_react: is_vite_react(&manifest),
            next_js: is_next_js(&manifest),
        },
        Err(err) => {
            warn!(
                "Could not read {}: {}; treating project as unrecognized",
                manifest_path.display(),
                err
            );
            ProjectProfile::default()
        }
    }
}

/// Whether manifest text declares both `"vite"` and `"react"`.
pub fn is_vite_react(manifest: &str) -> bool {
    manifest.contains("\"vite\"") && manifest.contains("\"react\"")
}

/// Whether manifest text declares both `"next"` and `"react"`.
pub fn is_next_js(manifest: &str) -> bool {
    manifest.contains("\"next\"") && manifest.contains("\"react\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VITE_MANIFEST: &str = r#"{
        "devDependencies": { "vite": "^5.0.0" },
        "dependencies": { "react": "^18.0.0", "react-dom": "^18.0.0" }
    }"#;

    const NEXT_MANIFEST: &str = r#"{
        "dependencies": { "next": "13.0.0", "react": "18.0.0" }
    }"#;

    #[test]
    fn vite_react_markers_match() {
        assert!(is_vite_react(VITE_MANIFEST));
        assert!(!is_next_js(VITE_MANIFEST));
    }

    #[test]
    fn next_markers_match() {
        assert!(is_next_js(NEXT_MANIFEST));
        assert!(!is_vite_react(NEXT_MANIFEST));
    }

    #[test]
    fn both_marker_pairs_match_both() {
        let manifest = r#"{ "vite": "5", "next": "13", "react": "18" }"#;
        assert!(is_vite_react(manifest));
        assert!(is_next_js(manifest));
    }

    #[test]
    fn single_marker_is_not_enough() {
        assert!(!is_vite_react(r#"{ "vite": "5" }"#));
        assert!(!is_next_js(r#"{ "react": "18" }"#));
    }

    #[test]
    fn unquoted_markers_do_not_match() {
        // The probe looks for quoted dependency names, not bare words.
        assert!(!is_vite_react(r#"{ "description": "vite react app" }"#));
    }

    #[test]
    fn probe_reads_manifest_from_root() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST), NEXT_MANIFEST).unwrap();

        let profile = probe(temp.path());
        assert!(profile.next_js);
        assert!(!profile.vite_react);
        assert!(profile.is_recognized());
    }

    #[test]
    fn probe_missing_manifest_matches_nothing() {
        let temp = TempDir::new().unwrap();

        let profile = probe(temp.path());
        assert_eq!(profile, ProjectProfile::default());
        assert!(!profile.is_recognized());
    }

    #[test]
    fn frameworks_are_vite_first() {
        let profile = ProjectProfile {
            vite_react: true,
            next_js: true,
        };
        assert_eq!(
            profile.frameworks(),
            vec![Framework::ViteReact, Framework::NextJs]
        );
    }

    #[test]
    fn framework_display_names() {
        assert_eq!(Framework::ViteReact.to_string(), "Vite React");
        assert_eq!(Framework::NextJs.to_string(), "Next.js");
    }
}
