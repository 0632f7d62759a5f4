use std::fs;
use std::process::Command;

fn og_image() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_og-image"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn writes_default_path_with_fallback_font() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("web"))?;
    let missing_font = dir.path().join("no-such-font.ttc");

    let out = og_image()
        .current_dir(dir.path())
        .arg("--font")
        .arg(&missing_font)
        .output()?;

    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.starts_with('✅'), "unexpected stdout {:?}", stdout);
    assert!(stdout.contains("web/og-image.png"));
    assert_eq!(stdout.lines().count(), 1);

    let png = fs::read(dir.path().join("web/og-image.png"))?;
    let img = image::load_from_memory(&png)?;
    assert_eq!((img.width(), img.height()), (1200, 630));
    Ok(())
}

#[test]
fn repeated_runs_are_byte_identical() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("card.png");
    let mut outputs = Vec::new();
    for _ in 0..2 {
        let status = og_image()
            .arg("--output")
            .arg(&target)
            .arg("--font")
            .arg(dir.path().join("absent.ttf"))
            .status()?;
        assert!(status.success());
        outputs.push(fs::read(&target)?);
    }
    assert_eq!(outputs[0], outputs[1]);
    Ok(())
}

#[test]
fn missing_output_directory_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let out = og_image()
        .current_dir(dir.path())
        .arg("--font")
        .arg(dir.path().join("absent.ttf"))
        .output()?;

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("og-image.png"), "stderr: {}", stderr);
    assert!(!dir.path().join("web").exists());
    Ok(())
}
