use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

const APPLE: &str = "Apple was founded in 1976 by Steve Jobs. It is \
    headquartered in Cupertino, California. The company makes phones and \
    computers.";

fn docanswer_bin() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(bin) = std::env::var("CARGO_BIN_EXE_docanswer") {
        return Ok(PathBuf::from(bin));
    }

    let mut path = std::env::current_exe()?;
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("docanswer");

    if cfg!(windows) {
        path.set_extension("exe");
    }

    Ok(path)
}

fn run(
    args: &[&str],
    stdin: Option<&str>,
) -> Result<Output, Box<dyn std::error::Error>> {
    let mut child = Command::new(docanswer_bin()?)
        .args(args)
        .env_remove("DOCANSWER_CONFIG")
        .env("DOCANSWER_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    {
        let mut pipe = child.stdin.take().expect("stdin pipe");
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes())?;
        }
    }
    Ok(child.wait_with_output()?)
}

#[test]
fn ask_json_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let doc = dir.path().join("apple.txt");
    std::fs::write(&doc, APPLE)?;

    let out = run(
        &[
            "ask",
            "When was Apple founded?",
            "--document",
            doc.to_str().unwrap(),
            "--json",
        ],
        None,
    )?;
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(value["question_type"], "WHEN");
    assert_eq!(value["method"], "hybrid-tfidf-lexical-type");
    assert!(value["answer"].as_str().unwrap().contains("founded in 1976"));
    let confidence = value["confidence"].as_f64().unwrap();
    assert!(confidence > 0.05 && confidence <= 1.0);
    Ok(())
}

#[test]
fn ask_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let out = run(&["ask", "Where is Apple headquartered?"], Some(APPLE))?;
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout)?;
    assert!(stdout.contains("Cupertino"));
    assert!(stdout.contains("type: WHERE"));
    Ok(())
}

#[test]
fn ask_without_content_is_not_an_error()
-> Result<(), Box<dyn std::error::Error>> {
    let out = run(&["ask", "What is this?", "--json"], Some("Hi. Bye. OK."))?;
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(value["confidence"], 0.0);
    assert!(value.get("question_type").is_none());
    assert!(value.get("method").is_none());
    Ok(())
}

#[test]
fn ask_missing_document_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("absent.txt");
    let out = run(
        &["ask", "Who?", "--document", missing.to_str().unwrap()],
        None,
    )?;
    assert!(!out.status.success());
    Ok(())
}

#[test]
fn invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("engine.json");
    std::fs::write(&config, "{\"window_size\": 0}")?;
    let out = run(
        &["--config", config.to_str().unwrap(), "ask", "Who founded Apple?"],
        Some(APPLE),
    )?;
    assert!(!out.status.success());
    Ok(())
}

#[test]
fn config_env_var_is_honoured() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("engine.json");
    let doc = dir.path().join("apple.txt");
    std::fs::write(&config, "{\"confidence_floor\": 2.0}")?;
    std::fs::write(&doc, APPLE)?;
    let out = Command::new(docanswer_bin()?)
        .args(["ask", "Who founded Apple?", "--document"])
        .arg(&doc)
        .env("DOCANSWER_CONFIG", &config)
        .env("DOCANSWER_LOG", "off")
        .output()?;
    assert!(!out.status.success());
    Ok(())
}

#[test]
fn explain_lists_top_windows() -> Result<(), Box<dyn std::error::Error>> {
    let out = run(
        &["explain", "When was Apple founded?", "-n", "2", "--json"],
        Some(APPLE),
    )?;
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    assert_eq!(value["question_type"], "WHEN");
    assert_eq!(value["window_count"], 3);
    let windows = value["windows"].as_array().unwrap();
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0]["start"], 0);
    Ok(())
}

#[test]
fn classify_prints_tag() -> Result<(), Box<dyn std::error::Error>> {
    let out = run(&["classify", "How many employees does it have?"], None)?;
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout)?.trim(), "HOW_MANY");
    Ok(())
}
