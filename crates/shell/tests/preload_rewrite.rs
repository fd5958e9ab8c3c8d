#![cfg(unix)]

use runglob_shell::{local_bin_dirs, tokenize, tokenize_spanned, Preload, SearchPath, Token};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn install(dir: &Path, name: &str, mode: u32) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

fn rewrite(search: &SearchPath, raw: &str) -> Option<runglob_shell::Rewrite> {
    Preload {
        module: "reify",
        interpreter: "node",
        search,
    }
    .rewrite(raw, &tokenize_spanned(raw))
}

#[test]
fn test_rewrites_shim_relative_to_cwd() {
    let temp = TempDir::new().unwrap();
    let fixtures = temp.path().join("test").join("fixtures");
    install(&fixtures.join("node_modules/.bin"), "node-bin", 0o755);

    let search = SearchPath::new(temp.path(), local_bin_dirs(&fixtures));
    let rewritten = rewrite(&search, "node-bin").expect("shim should be rewritten");

    assert_eq!(
        rewritten.raw,
        "node --require reify test/fixtures/node_modules/.bin/node-bin"
    );
    assert_eq!(
        rewritten.executable,
        PathBuf::from("test/fixtures/node_modules/.bin/node-bin")
    );
    assert!(rewritten.tokens.iter().all(Token::is_plain));
}

#[test]
fn test_rewrite_keeps_tail_verbatim() {
    let temp = TempDir::new().unwrap();
    install(&temp.path().join("node_modules/.bin"), "lint", 0o755);

    let search = SearchPath::new(temp.path(), local_bin_dirs(temp.path()));
    let rewritten = rewrite(&search, "lint --watch 'a b' && echo done").unwrap();

    assert_eq!(
        rewritten.raw,
        "node --require reify node_modules/.bin/lint --watch 'a b' && echo done"
    );
    assert_eq!(rewritten.tokens, tokenize(&rewritten.raw));
}

#[test]
fn test_executable_outside_local_bin_is_untouched() {
    let temp = TempDir::new().unwrap();
    let tools = temp.path().join("tools");
    install(&tools, "global-tool", 0o755);

    let search = SearchPath::new(temp.path(), vec![tools]);
    assert_eq!(rewrite(&search, "global-tool run"), None);
}

#[test]
fn test_non_executable_shim_is_untouched() {
    let temp = TempDir::new().unwrap();
    install(&temp.path().join("node_modules/.bin"), "plain-file", 0o644);

    let search = SearchPath::new(temp.path(), local_bin_dirs(temp.path()));
    assert_eq!(rewrite(&search, "plain-file"), None);
}

#[test]
fn test_nearest_local_bin_wins() {
    let temp = TempDir::new().unwrap();
    let package = temp.path().join("packages").join("app");
    install(&temp.path().join("node_modules/.bin"), "shared", 0o755);
    install(&package.join("node_modules/.bin"), "shared", 0o755);

    let search = SearchPath::new(&package, local_bin_dirs(&package));
    let rewritten = rewrite(&search, "shared").unwrap();
    assert_eq!(rewritten.raw, "node --require reify node_modules/.bin/shared");
}
