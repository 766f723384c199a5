use std::path::Path;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::engine::{OcrConfig, OcrError};

/// Command line for reading a PNG from stdin and writing plain text to stdout.
pub(crate) fn build_args(config: &OcrConfig) -> Vec<String> {
    let mut args = vec![
        "stdin".to_string(),
        "stdout".to_string(),
        "-l".to_string(),
        config.language.clone(),
    ];
    if let Some(psm) = config.page_segmentation {
        args.push("--psm".to_string());
        args.push(psm.to_string());
    }
    if let Some(whitelist) = &config.char_whitelist {
        args.push("-c".to_string());
        args.push(format!("tessedit_char_whitelist={whitelist}"));
    }
    args
}

pub(crate) async fn run(binary: &Path, config: &OcrConfig, png: Vec<u8>) -> Result<String, OcrError> {
    let mut child = Command::new(binary)
        .args(build_args(config))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            OcrError::EngineError(format!("failed to launch {}: {e}", binary.display()))
        })?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| OcrError::EngineError("tesseract stdin unavailable".into()))?;

    // Feed stdin while collecting output so a chatty child cannot block on a full pipe.
    let write = async move {
        stdin.write_all(&png).await?;
        stdin.shutdown().await
    };
    let (written, output) = tokio::join!(write, child.wait_with_output());
    let output = output?;
    written?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OcrError::EngineError(format!(
            "tesseract exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
