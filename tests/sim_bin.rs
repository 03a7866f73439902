use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "m"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 1);
    assert_eq!(v["difficulty"], "Medium");
    assert!(v["summary"]["rounds_played"].as_u64().unwrap() <= 25);
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .arg("42")
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn sim_binary_rejects_bad_difficulty() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "z"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
