//! CLI integration tests for md2-rs
//!
//! Each test writes a small synthetic model to a temporary directory and runs
//! the real binary against it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FRAME_COUNT: usize = 199;

/// Encode a one-triangle model; `vertex_index` is the first triangle corner
fn encode_model(vertex_index: u16) -> Vec<u8> {
    let header_size = 68;
    let skin_offset = header_size;
    let tex_coord_offset = skin_offset + 64;
    let triangle_offset = tex_coord_offset + 3 * 4;
    let frame_size = 40 + 3 * 4;
    let frame_offset = triangle_offset + 12;
    let end_offset = frame_offset + FRAME_COUNT * frame_size;

    let header: [i32; 17] = [
        i32::from_le_bytes(*b"IDP2"),
        8,
        64,
        32,
        frame_size as i32,
        1,
        3,
        3,
        1,
        0,
        FRAME_COUNT as i32,
        skin_offset as i32,
        tex_coord_offset as i32,
        triangle_offset as i32,
        frame_offset as i32,
        end_offset as i32,
        end_offset as i32,
    ];

    let mut data = Vec::with_capacity(end_offset);
    for value in header {
        data.extend_from_slice(&value.to_le_bytes());
    }

    let mut skin = [0u8; 64];
    skin[..16].copy_from_slice(b"models/skin0.pcx");
    data.extend_from_slice(&skin);

    for (s, t) in [(0i16, 0i16), (32, 0), (16, 32)] {
        data.extend_from_slice(&s.to_le_bytes());
        data.extend_from_slice(&t.to_le_bytes());
    }

    for index in [vertex_index, 1, 2, 0, 1, 2] {
        data.extend_from_slice(&index.to_le_bytes());
    }

    for f in 0..FRAME_COUNT {
        for v in [1.0f32, 1.0, 1.0, 0.0, 0.0, 0.0] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        let mut name = [0u8; 16];
        let label = format!("frame{f:03}");
        name[..label.len()].copy_from_slice(label.as_bytes());
        data.extend_from_slice(&name);
        let f8 = f as u8;
        data.extend_from_slice(&[f8, 1, 2, 5, 3, f8, 5, 5, 6, 7, f8, 5]);
    }

    data
}

fn write_model(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}

fn md2_rs() -> Command {
    Command::cargo_bin("md2-rs").unwrap()
}

fn run(args: &[&str], path: &Path) -> assert_cmd::assert::Assert {
    md2_rs().args(args).arg(path).assert()
}

#[test]
fn test_help() {
    md2_rs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vertices"))
        .stdout(predicate::str::contains("animations"));
}

#[test]
fn test_animations_table() {
    md2_rs()
        .arg("animations")
        .assert()
        .success()
        .stdout(predicate::str::contains("death_fallbackslow"))
        .stdout(predicate::str::contains("boom"));
}

#[test]
fn test_info() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, "tri.md2", &encode_model(0));

    run(&["info"], &path)
        .success()
        .stdout(predicate::str::contains("IDP2"))
        .stdout(predicate::str::contains("models/skin0.pcx"))
        .stdout(predicate::str::contains("Triangles: 1"));
}

#[test]
fn test_info_missing_file() {
    let dir = TempDir::new().unwrap();
    run(&["info"], &dir.path().join("missing.md2"))
        .failure()
        .stderr(predicate::str::contains("Failed to load MD2 model"));
}

#[test]
fn test_info_bad_version() {
    let dir = TempDir::new().unwrap();
    let mut data = encode_model(0);
    data[4..8].copy_from_slice(&7i32.to_le_bytes());
    let path = write_model(&dir, "old.md2", &data);

    run(&["info"], &path)
        .failure()
        .stderr(predicate::str::contains("version"));
}

#[test]
fn test_frames_filtered_by_animation() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, "tri.md2", &encode_model(0));

    run(&["frames", "--animation", "run"], &path)
        .success()
        .stdout(predicate::str::contains("frame040"))
        .stdout(predicate::str::contains("frame045"))
        .stdout(predicate::str::contains("frame046").not())
        .stdout(predicate::str::contains("frame039").not());
}

#[test]
fn test_validate_ok() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, "tri.md2", &encode_model(0));

    run(&["validate"], &path)
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn test_validate_reports_bad_index() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, "bad.md2", &encode_model(9));

    run(&["validate"], &path)
        .failure()
        .stdout(predicate::str::contains("problem"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_vertices_json() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, "tri.md2", &encode_model(0));

    let output = md2_rs()
        .args(["vertices", "--animation", "run", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["animation"], "run");
    assert_eq!(value["frame_a"], 40);
    assert_eq!(value["frame_b"], 41);
    assert_eq!(value["vertex_count"], 3);

    let first = &value["vertices"][0];
    assert_eq!(first["position"][0], 40.0);
    assert_eq!(first["tex_coord"][1], 1.0);
}

#[test]
fn test_vertices_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, "tri.md2", &encode_model(0));

    let output = md2_rs()
        .args(["vertices", "--json", "--limit", "1", "--time", "0.5"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["vertices"].as_array().unwrap().len(), 1);
    assert_eq!(value["frame_a"], 4);
}

#[test]
fn test_vertices_unknown_animation() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, "tri.md2", &encode_model(0));

    run(&["vertices", "--animation", "dance"], &path)
        .failure()
        .stderr(predicate::str::contains("Unknown animation"));
}

#[test]
fn test_vertices_refuses_invalid_model() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, "bad.md2", &encode_model(9));

    run(&["vertices"], &path)
        .failure()
        .stderr(predicate::str::contains("invalid index"));
}

#[test]
fn test_vertices_rejects_negative_speed() {
    let dir = TempDir::new().unwrap();
    let path = write_model(&dir, "tri.md2", &encode_model(0));

    md2_rs()
        .env("MD2_SPEED", "-1")
        .args(["vertices", "--time", "1"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Playback speed"));

    run(&["vertices", "--speed", "NaN"], &path)
        .failure()
        .stderr(predicate::str::contains("Playback speed"));
}
