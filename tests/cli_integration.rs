use assert_cmd::Command;
use serde_json::Value;
use std::fs;

// {1: [{1: "Fee", 2: "0.01 ATOM", 3: 1, 4: true}, {2: "Send 10 ATOM to alice"}]}
const SIGN_DOC_HEX: &str =
    "a10182a401634665650269302e30312041544f4d030104f5a1027553656e642031302041544f4d20746f20616c696365";

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("eip191-textual"))
}

fn expected_envelope() -> Vec<u8> {
    let plaintext = "*\tFee: 0.01 ATOM\nSend 10 ATOM to alice";
    let mut out = b"\x19Ethereum Signed Message:\n".to_vec();
    out.extend_from_slice(plaintext.len().to_string().as_bytes());
    out.extend_from_slice(plaintext.as_bytes());
    out
}

#[test]
fn cli_renders_sign_doc_from_stdin() {
    let output = cli()
        .write_stdin(format!("0x{}\n", SIGN_DOC_HEX))
        .output()
        .expect("cli runs");
    assert!(output.status.success(), "cli failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert_eq!(stdout.trim(), hex::encode(expected_envelope()));
}

#[test]
fn cli_emits_json() {
    let path = std::env::temp_dir().join(format!("eip191-textual-{}.hex", std::process::id()));
    fs::write(&path, SIGN_DOC_HEX).expect("write sign doc");

    let output = cli().arg(&path).arg("--json").output().expect("cli runs");
    let _ = fs::remove_file(&path);
    assert!(output.status.success(), "cli failed: {:?}", output);

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is valid json");
    assert_eq!(json["plaintext"], "*\tFee: 0.01 ATOM\nSend 10 ATOM to alice");
    assert_eq!(json["screens"], 2);
    assert_eq!(
        json["signBytes"],
        format!("0x{}", hex::encode(expected_envelope()))
    );
    assert!(json["digest"].as_str().expect("digest").starts_with("0x"));
}

#[test]
fn cli_rejects_malformed_sign_doc() {
    let output = cli().write_stdin("ff00").output().expect("cli runs");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid textual sign doc"), "stderr: {}", stderr);
}

#[test]
fn cli_rejects_empty_input() {
    let output = cli().write_stdin("").output().expect("cli runs");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_renders_demo_sign_doc() {
    let output = cli().arg("--demo").arg("--json").output().expect("cli runs");
    assert!(output.status.success(), "cli failed: {:?}", output);

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is valid json");
    assert_eq!(json["screens"], 7);
    let plaintext = json["plaintext"].as_str().expect("plaintext");
    assert!(plaintext.starts_with("Chain id: cosmoshub-4\n"));
    assert!(plaintext.contains("\n\tAmount: 10 ATOM\n"));
    assert!(plaintext.ends_with("\n*Gas limit: 100000"));

    let prefix = format!("\x19Ethereum Signed Message:\n{}", plaintext.len());
    assert!(json["signBytes"]
        .as_str()
        .expect("signBytes")
        .starts_with(&format!("0x{}", hex::encode(prefix))));
}

#[test]
fn cli_demo_conflicts_with_file() {
    let output = cli().arg("--demo").arg("doc.hex").output().expect("cli runs");
    assert!(!output.status.success());
}
