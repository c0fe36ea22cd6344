//! Integration tests for the stitch binary.
//!
//! These run the real binary against temporary project directories.
//! Only the HAS_CONFIG paths (and the install-failure path with a
//! crippled PATH) are exercised end to end, so no test ever invokes a
//! real package manager.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DEFAULT_CONFIG: &str = "/** @type {import('tailwindcss').Config} */\n\
    module.exports = {\n  content: [],\n  theme: {\n    extend: {},\n  },\n  plugins: [],\n}\n";

const VITE_MANIFEST: &str = r#"{
  "devDependencies": { "vite": "^5.0.0" },
  "dependencies": { "react": "^18.0.0" }
}"#;

const NEXT_MANIFEST: &str = r#"{
  "dependencies": { "next": "13.0.0", "react": "18.0.0" }
}"#;

fn stitch_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stitch").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("stitch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tailwind CSS"));
}

#[test]
fn verbose_and_quiet_conflict() {
    Command::cargo_bin("stitch")
        .unwrap()
        .args(["--verbose", "--quiet"])
        .assert()
        .failure();
}

#[test]
fn vite_project_gets_vite_globs() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), VITE_MANIFEST).unwrap();
    fs::write(temp.path().join("tailwind.config.js"), DEFAULT_CONFIG).unwrap();

    stitch_in(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Patched tailwind.config.js for Vite React"));

    let config = fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap();
    assert!(config.contains("content: ['./index.html', './src/**/*.{js,ts,jsx,tsx}'],"));
    assert!(!config.contains("content: [],"));
}

#[test]
fn next_project_gets_next_globs_and_nested_stylesheets() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), NEXT_MANIFEST).unwrap();
    fs::write(temp.path().join("tailwind.config.js"), DEFAULT_CONFIG).unwrap();

    let nested = temp.path().join("app").join("styles").join("base");
    fs::create_dir_all(&nested).unwrap();
    fs::write(temp.path().join("index.css"), "body{}").unwrap();
    fs::write(nested.join("index.css"), "h1{}").unwrap();

    stitch_in(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Patched tailwind.config.js for Next.js"));

    let config = fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap();
    assert!(config.contains(
        "content: ['./app/**/*.{js,ts,jsx,tsx,mdx}','./pages/**/*.{js,ts,jsx,tsx,mdx}','./components/**/*.{js,ts,jsx,tsx,mdx}'],"
    ));

    for css in [temp.path().join("index.css"), nested.join("index.css")] {
        let content = fs::read_to_string(css).unwrap();
        assert!(content.starts_with(
            "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n"
        ));
    }
}

#[test]
fn missing_placeholder_warns_and_leaves_config_alone() {
    let temp = TempDir::new().unwrap();
    let hand_edited = "module.exports = { content: ['./lib/**/*.tsx'] }\n";
    fs::write(temp.path().join("package.json"), VITE_MANIFEST).unwrap();
    fs::write(temp.path().join("tailwind.config.js"), hand_edited).unwrap();

    stitch_in(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("placeholder"));

    assert_eq!(
        fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap(),
        hand_edited
    );
}

#[test]
fn second_run_duplicates_directives() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), VITE_MANIFEST).unwrap();
    fs::write(temp.path().join("tailwind.config.js"), DEFAULT_CONFIG).unwrap();
    fs::write(temp.path().join("index.css"), "body{}").unwrap();

    stitch_in(temp.path()).assert().success();
    stitch_in(temp.path()).assert().success();

    let css = fs::read_to_string(temp.path().join("index.css")).unwrap();
    let directives = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n";
    assert_eq!(css, format!("{d}{d}body{{}}", d = directives));
}

#[test]
fn unrecognized_project_keeps_placeholder_but_patches_stylesheets() {
    let temp = TempDir::new().unwrap();
    // No package.json at all: the probe logs and matches nothing.
    fs::write(temp.path().join("tailwind.config.js"), DEFAULT_CONFIG).unwrap();
    fs::write(temp.path().join("index.css"), "body{}").unwrap();

    stitch_in(temp.path()).assert().success();

    let config = fs::read_to_string(temp.path().join("tailwind.config.js")).unwrap();
    assert!(config.contains("content: [],"));

    let css = fs::read_to_string(temp.path().join("index.css")).unwrap();
    assert!(css.starts_with("@tailwind base;"));
}

#[test]
fn missing_config_with_unusable_path_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), VITE_MANIFEST).unwrap();

    // No tailwind.config.js, so stitch must shell out to npm; an empty
    // PATH makes the launch itself fail, which is fatal.
    stitch_in(temp.path())
        .env("PATH", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("npm"));

    assert!(!temp.path().join("tailwind.config.js").exists());
}
