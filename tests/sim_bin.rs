#![cfg(feature = "std")]

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "7", "--first", "Ann", "--second", "Ben"])
        .env("BATTLEGRID_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    let winner = v["winner"].as_str().expect("winner is a name");
    assert!(winner == "Ann" || winner == "Ben");
    let shots = v["player1"]["shots"].as_u64().unwrap() + v["player2"]["shots"].as_u64().unwrap();
    assert_eq!(v["turns"].as_u64(), Some(shots));
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["--seed", "99"])
            .env("BATTLEGRID_LOG", "off")
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
