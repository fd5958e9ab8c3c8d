use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "name": "fixture",
  "scripts": {
    "test1": "echo test1 && exit 0",
    "test2": "echo test2 && exit 1",
    "preother": "echo pre",
    "other": "echo main",
    "postother": "echo post",
    "lint": "eslint ."
  }
}"#;

fn project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), manifest).unwrap();
    temp
}

fn runglob(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("runglob").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUNGLOB_SERIAL")
        .env_remove("RUNGLOB_RAW")
        .env_remove("RUNGLOB_REQUIRE")
        .env_remove("RUNGLOB_INTERPRETER")
        .env_remove("RUNGLOB_LOG");
    cmd
}

fn json_plan(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.arg("--format").arg("json").output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_tree_output() {
    let temp = project(MANIFEST);
    runglob(temp.path())
        .args(["other", "lint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("group 1: other"))
        .stdout(predicate::str::contains("pre  preother: echo pre"))
        .stdout(predicate::str::contains("post postother: echo post"))
        .stdout(predicate::str::contains("group 2: lint"))
        .stdout(predicate::str::contains("main lint: eslint ."));
}

#[test]
fn test_no_match_exits_with_failure() {
    let temp = project(MANIFEST);
    runglob(temp.path())
        .arg("nothing")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no scripts found: nothing"));
}

#[test]
fn test_raw_flag_runs_unknown_pattern() {
    let temp = project(MANIFEST);
    let plan = json_plan(runglob(temp.path()).args(["--raw", "echo foo"]));
    let main = &plan["groups"][0]["phases"][0]["steps"][0]["main"];
    assert_eq!(main["name"], "echo foo");
    assert_eq!(main["meta"]["raw"], true);
}

#[test]
fn test_serial_flag_and_suffixes() {
    let temp = project(MANIFEST);
    let plan = json_plan(runglob(temp.path()).args(["-s", "test*", "--", "--watch", "me"]));
    let phases = plan["groups"][0]["phases"].as_array().unwrap();
    assert_eq!(phases.len(), 2);
    assert_eq!(
        phases[0]["steps"][0]["main"]["raw"],
        "echo test1 && exit 0 --watch me"
    );
    assert_eq!(
        phases[1]["steps"][0]["main"]["raw"],
        "echo test2 && exit 1 --watch me"
    );
}

#[test]
fn test_comma_joins_groups() {
    let temp = project(MANIFEST);
    let plan = json_plan(runglob(temp.path()).args(["test1,", "test2", "lint"]));
    let groups = plan["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["pattern"], "test1,test2");
    assert_eq!(groups[0]["phases"].as_array().unwrap().len(), 2);
}

#[test]
fn test_manifest_section_and_env_layering() {
    let manifest = r#"{
      "scripts": { "test1": "echo 1", "test2": "echo 2" },
      "runglob": { "serial": true, "suffixes": ["--from-manifest"] }
    }"#;
    let temp = project(manifest);

    let plan = json_plan(runglob(temp.path()).arg("test*"));
    let phases = plan["groups"][0]["phases"].as_array().unwrap();
    assert_eq!(phases.len(), 2);
    assert_eq!(phases[0]["steps"][0]["main"]["raw"], "echo 1 --from-manifest");

    let plan = json_plan(runglob(temp.path()).env("RUNGLOB_SERIAL", "false").arg("test*"));
    assert_eq!(plan["groups"][0]["phases"].as_array().unwrap().len(), 1);

    let plan = json_plan(runglob(temp.path()).args(["test1", "--", "--from-cli"]));
    assert_eq!(
        plan["groups"][0]["phases"][0]["steps"][0]["main"]["raw"],
        "echo 1 --from-cli"
    );
}

#[test]
fn test_invalid_env_flag_is_an_error() {
    let temp = project(MANIFEST);
    runglob(temp.path())
        .env("RUNGLOB_RAW", "maybe")
        .arg("lint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("RUNGLOB_RAW"));
}

#[test]
fn test_manifest_is_discovered_from_subdirectory() {
    let temp = project(MANIFEST);
    let nested = temp.path().join("packages").join("web");
    fs::create_dir_all(&nested).unwrap();
    runglob(&nested)
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("main lint: eslint ."));
}

#[test]
fn test_explicit_manifest_path() {
    let temp = project(MANIFEST);
    let elsewhere = TempDir::new().unwrap();
    runglob(elsewhere.path())
        .arg("--manifest")
        .arg(temp.path().join("package.json"))
        .arg("other")
        .assert()
        .success()
        .stdout(predicate::str::contains("main other: echo main"));
}

#[test]
fn test_missing_manifest_is_an_error() {
    let temp = TempDir::new().unwrap();
    runglob(temp.path())
        .arg("--manifest")
        .arg(temp.path().join("absent.json"))
        .arg("lint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[cfg(unix)]
#[test]
fn test_require_rewrites_local_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = project(r#"{ "scripts": { "work-on-node6": "node-bin --flag" } }"#);
    let bin = temp.path().join("node_modules").join(".bin");
    fs::create_dir_all(&bin).unwrap();
    let shim = bin.join("node-bin");
    fs::write(&shim, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&shim, fs::Permissions::from_mode(0o755)).unwrap();

    let plan = json_plan(runglob(temp.path()).args(["--require", "reify", "work-on-node6"]));
    let main = &plan["groups"][0]["phases"][0]["steps"][0]["main"];
    assert_eq!(
        main["raw"],
        "node --require reify node_modules/.bin/node-bin --flag"
    );
    assert_eq!(main["meta"]["preload"], "node_modules/.bin/node-bin");
}
