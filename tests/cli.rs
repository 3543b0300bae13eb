use std::process::Command;

#[test]
fn failure_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_kustpatch"))
        .arg("--parent")
        .arg(dir.path().join("missing.yaml"))
        .env_remove("RUST_LOG")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("StdError").count(), 1, "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn writes_bundle_to_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("parent.yaml"),
        "apiVersion: example.org/v1\nkind: Thing\nmetadata:\n  name: one\n  namespace: ns\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("kustomization.yaml"),
        "vars:\n- name: THING\n  objref:\n    apiVersion: example.org/v1\n    kind: Thing\n    name: x\n  fieldref:\n    fieldpath: spec.size\n",
    )
    .unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_kustpatch"))
        .args(["--parent", "parent.yaml", "--out-dir", "out"])
        .env_remove("RUST_LOG")
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());
    let written = std::fs::read_to_string(dir.path().join("out/kustomization.yaml")).unwrap();
    assert!(written.contains("namePrefix: one-"));
    assert!(written.contains("fieldpath: spec.size"));
}
