use crate::domain::browser::Browser;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

fn opener(os: &str, url: &str) -> Command {
    match os {
        "macos" => {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }
        // `cmd /C start` would split the URL on `&`.
        "windows" => {
            let mut cmd = Command::new("rundll32");
            cmd.args(["url.dll,FileProtocolHandler", url]);
            cmd
        }
        _ => {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

/// Runs the opener to completion. The openers hand the URL off and exit.
fn launch(mut cmd: Command) -> Result<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    let program = cmd.get_program().to_os_string();
    let status = cmd
        .spawn()
        .and_then(|mut child| child.wait())
        .with_context(|| format!("launching {program:?}"))?;
    if !status.success() {
        anyhow::bail!("{program:?} exited with {status}");
    }
    Ok(())
}

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        launch(opener(std::env::consts::OS, url))?;
        tracing::info!(%url, "opened url");
        Ok(())
    }
}
