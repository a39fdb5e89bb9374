use std::path::PathBuf;

fn framesift_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_framesift")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "framesift.exe"
            } else {
                "framesift"
            });
            p
        })
}

fn fixture_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("cli_smoke").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn cli_reports_gaps_from_env_configured_directory() {
    let dir = fixture_dir("gaps");
    for i in [0u32, 1, 3] {
        let body = format!("Frame: {i}\nDisplayingAlt: {}\n", i % 2 == 1);
        std::fs::write(dir.join(format!("gifbolt_frame_{i:04}.txt")), body).unwrap();
    }

    let output = std::process::Command::new(framesift_exe())
        .env("TEMP", &dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Found 3 metadata files"));
    assert!(stdout.contains("Gap between frame 1 and 3 (missing 1 frames)"));
    assert!(stdout.contains("=== Double-Buffering Pattern ==="));
}

#[test]
fn cli_treats_no_dumps_as_success() {
    let dir = fixture_dir("none");

    let output = std::process::Command::new(framesift_exe())
        .env("TEMP", &dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No frame dumps found"));
}

#[test]
fn cli_fails_on_unlistable_directory() {
    let dir = PathBuf::from("target").join("cli_smoke").join("missing");
    let _ = std::fs::remove_dir_all(&dir);

    let output = std::process::Command::new(framesift_exe())
        .env("TEMP", &dir)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("scratch directory unavailable"));
}
