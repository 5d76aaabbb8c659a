use crate::common::{GRAPH, PIPFILE, pipgraph_command, project_dir, write_project};

#[test]
fn quiet_suppresses_info() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dir = project_dir(&tmp);
    write_project(&dir, PIPFILE, GRAPH);

    let output = pipgraph_command()
        .current_dir(&dir)
        .args(["--quiet", "generate"])
        .output()
        .expect("Failed to execute pipgraph-build");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        stderr.is_empty(),
        "Expected no output with --quiet, got: {stderr}"
    );
}

#[test]
fn quiet_still_reports_errors() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dir = project_dir(&tmp);
    write_project(&dir, "[packages]\nrequests = \"*\"\n", GRAPH);

    let output = pipgraph_command()
        .current_dir(&dir)
        .args(["--quiet", "generate"])
        .output()
        .expect("Failed to execute pipgraph-build");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("error:"), "{stderr}");
}

#[test]
fn verbose_emits_debug_logs() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dir = project_dir(&tmp);
    write_project(&dir, PIPFILE, GRAPH);

    let output = pipgraph_command()
        .current_dir(&dir)
        .args(["--verbose", "generate"])
        .output()
        .expect("Failed to execute pipgraph-build");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        stderr.contains("Closure of top-dependency has 3 transitive dependencies"),
        "Expected debug logs with --verbose, got: {stderr}"
    );
}

#[test]
fn log_level_can_be_set_from_environment() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dir = project_dir(&tmp);
    write_project(&dir, PIPFILE, GRAPH);

    let output = pipgraph_command()
        .current_dir(&dir)
        .env("PIPGRAPH_LOG", "trace")
        .arg("generate")
        .output()
        .expect("Failed to execute pipgraph-build");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("Declared attrs 18.1.0"), "{stderr}");
}

#[test]
fn double_verbose_accepted() {
    let mut cmd = pipgraph_command();
    cmd.args(["-vv", "--version"]);

    let output = cmd.output().expect("Failed to execute pipgraph-build");
    assert!(output.status.success());
}
