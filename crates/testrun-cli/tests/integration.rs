use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn testrun(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("testrun").unwrap();
    cmd.current_dir(dir.path()).env("TESTRUN_ROOT", dir.path());
    cmd
}

fn touch(dir: &TempDir, name: &str) {
    std::fs::write(dir.path().join(name), "").unwrap();
}

// ---------------------------------------------------------------------------
// testrun run --dry-run
// ---------------------------------------------------------------------------

#[test]
fn empty_directory_fails_with_no_framework() {
    let dir = TempDir::new().unwrap();
    testrun(&dir)
        .args(["run", "--dry-run"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no test framework detected"))
        .stderr(predicate::str::contains("go.mod"));
}

#[test]
fn pytest_marker_resolves_to_pytest() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "pytest.ini");
    testrun(&dir)
        .args(["run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pytest"));
}

#[test]
fn python_marker_beats_javascript_marker() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "pytest.ini");
    touch(&dir, "package.json");
    testrun(&dir)
        .args(["run", "--dry-run", "--coverage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pytest --cov --cov-report=term-missing"));
}

#[test]
fn vitest_config_wins_within_javascript() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "package.json");
    touch(&dir, "vitest.config.ts");
    touch(&dir, "jest.config.js");
    // Launcher depends on what's on PATH (npx vs bun x); the tool and flag
    // must not.
    testrun(&dir)
        .args(["run", "--dry-run", "--coverage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vitest run --coverage"))
        .stdout(predicate::str::contains("jest").not());
}

#[test]
fn go_combines_verbose_and_coverage() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "go.mod");
    testrun(&dir)
        .args(["run", "--dry-run", "--verbose", "--coverage"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go test -v -cover ./..."));
}

#[test]
fn maven_beats_gradle_wrapper() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "pom.xml");
    touch(&dir, "gradlew");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(
            dir.path().join("gradlew"),
            std::fs::Permissions::from_mode(0o755),
        )
        .unwrap();
    }
    testrun(&dir)
        .args(["run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mvn test"))
        .stdout(predicate::str::contains("gradlew").not());
}

#[test]
fn dry_run_json_emits_the_plan() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "go.mod");
    testrun(&dir)
        .args(["run", "--dry-run", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"framework\": \"go_test\""))
        .stdout(predicate::str::contains("\"program\": \"go\""));
}

#[test]
fn dry_run_is_stable_across_invocations() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "go.mod");
    let first = testrun(&dir)
        .args(["run", "--dry-run", "--coverage"])
        .output()
        .unwrap();
    let second = testrun(&dir)
        .args(["run", "--dry-run", "--coverage"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

// ---------------------------------------------------------------------------
// testrun plan
// ---------------------------------------------------------------------------

#[test]
fn plan_prints_ecosystem_and_command() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "App.csproj");
    testrun(&dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("dotnet"))
        .stdout(predicate::str::contains("dotnet test"));
}

#[test]
fn plan_fails_on_unrecognized_directory() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "README.md");
    testrun(&dir).arg("plan").assert().failure().code(1);
}

// ---------------------------------------------------------------------------
// testrun detect
// ---------------------------------------------------------------------------

#[test]
fn detect_reports_pytest_with_confidence() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "pytest.ini");
    testrun(&dir)
        .args(["detect", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"framework\": \"pytest\""))
        .stdout(predicate::str::contains("\"confidence\": 90"));
}

#[test]
fn detect_never_fails_on_empty_directory() {
    let dir = TempDir::new().unwrap();
    testrun(&dir)
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"));
}

// ---------------------------------------------------------------------------
// testrun rules
// ---------------------------------------------------------------------------

#[test]
fn rules_lists_the_marker_table_in_order() {
    let dir = TempDir::new().unwrap();
    let output = testrun(&dir).arg("rules").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let python = stdout.find("python").unwrap();
    let go = stdout.find("go.mod").unwrap();
    assert!(python < go, "python row should print before go");
    assert!(stdout.contains("*.csproj"));
}
