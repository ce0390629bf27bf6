//! End-to-end tests for the genblog binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn genblog() -> Command {
    let mut cmd = cargo_bin_cmd!("genblog");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A temp dir to run in, so a stray `genblog.toml` never leaks in.
fn workdir() -> TempDir {
    TempDir::new().expect("temp dir")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        genblog()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("export"))
            .stdout(predicate::str::contains("routes"));
    }

    #[test]
    fn shows_version() {
        genblog()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn prints_route_table() {
        genblog()
            .arg("routes")
            .assert()
            .success()
            .stdout(predicate::str::contains("/author/{id}"))
            .stdout(predicate::str::contains("/post/{id}"));
    }
}

mod render {
    use super::*;

    #[test]
    fn renders_article() {
        let dir = workdir();
        genblog()
            .current_dir(dir.path())
            .args(["render", "/post/0"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(
                "CRISPR Teknolojisinde Yeni Nesil Gen Düzenleme",
            ))
            .stdout(predicate::str::contains("Dr. A. Genetik"));
    }

    #[test]
    fn missing_article_renders_not_found() {
        let dir = workdir();
        genblog()
            .current_dir(dir.path())
            .args(["render", "/post/99"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Aradığınız içerik bulunamadı."));
    }

    #[test]
    fn unknown_path_renders_home() {
        let dir = workdir();
        genblog()
            .current_dir(dir.path())
            .args(["render", "/nereye"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Popüler Konular"));
    }

    #[test]
    fn logs_stay_off_stdout() {
        let dir = workdir();
        genblog()
            .current_dir(dir.path())
            .args(["render", "/", "--log-level", "debug"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn picks_up_genblog_toml() {
        let dir = workdir();
        std::fs::write(
            dir.path().join("genblog.toml"),
            "title = \"Hücre Günlüğü\"\nanalytics_id = \"G-E2E\"\n",
        )
        .expect("write config");

        genblog()
            .current_dir(dir.path())
            .args(["render", "/about", "--theme", "light"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Hücre Günlüğü"))
            .stdout(predicate::str::contains("G-E2E"))
            .stdout(predicate::str::contains("theme-light"));
    }

    #[test]
    fn invalid_theme_is_rejected() {
        genblog()
            .args(["render", "/", "--theme", "sepia"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("sepia"));
    }

    #[test]
    fn broken_dataset_fails() {
        let dir = workdir();
        std::fs::write(dir.path().join("content.json"), "{ not json").expect("write content");
        std::fs::write(
            dir.path().join("genblog.toml"),
            "content_path = \"content.json\"\n",
        )
        .expect("write config");

        genblog()
            .current_dir(dir.path())
            .args(["render", "/"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("content.json"));
    }
}

mod export {
    use super::*;

    #[test]
    fn exports_every_page() {
        let dir = workdir();
        let out = dir.path().join("public");

        genblog()
            .current_dir(dir.path())
            .arg("export")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("Exported 8 pages"));

        for page in [
            "index.html",
            "articles/index.html",
            "authors/index.html",
            "about/index.html",
            "contact/index.html",
            "author/0/index.html",
            "author/1/index.html",
            "post/0/index.html",
        ] {
            assert!(out.join(page).is_file(), "{page} not exported");
        }
    }
}
