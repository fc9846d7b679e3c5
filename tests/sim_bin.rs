use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_salvo"))
        .args(["sim", "--seed", "12", "--games", "2", "--shots"])
        .output()
        .expect("failed to run salvo binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let v: serde_json::Value = serde_json::from_str(line).expect("invalid json");
        assert!(v["winner"].is_string());
        let shots = v["shots"].as_array().expect("shots missing");
        assert_eq!(shots.len() as u64, v["turns"].as_u64().unwrap());
        assert_eq!(shots.last().unwrap()["report"], "Destroyed");
    }
}

#[test]
fn board_binary_prints_grid() {
    let output = Command::new(env!("CARGO_BIN_EXE_salvo"))
        .args(["board", "--seed", "4"])
        .output()
        .expect("failed to run salvo binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert_eq!(stdout.matches('O').count(), 20);
}
