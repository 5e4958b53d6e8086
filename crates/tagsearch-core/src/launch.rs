//! Launcher — hands search URLs to a browser and share text to a share target.
//!
//! Both are external programs named in the config. The caller never waits on
//! them: each child is handed to a detached waiter thread that reaps it when
//! it exits.

use crate::config::Config;
use crate::error::LaunchError;
use crate::types::SharePayload;
use std::io::Write;
use std::process::{Child, Command, Stdio};

/// Opens search URLs and shares payloads.
pub trait Launcher {
    fn open_url(&mut self, url: &str) -> Result<(), LaunchError>;

    fn share(&mut self, payload: &SharePayload) -> Result<(), LaunchError>;
}

/// Launcher backed by configured shell-style commands.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    browser: Vec<String>,
    share: Option<Vec<String>>,
}

impl SystemLauncher {
    pub fn new(browser: &str, share: Option<&str>) -> Self {
        Self {
            browser: split_command(browser),
            share: share.map(split_command).filter(|argv| !argv.is_empty()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.launcher.browser, config.share.command.as_deref())
    }
}

impl Launcher for SystemLauncher {
    fn open_url(&mut self, url: &str) -> Result<(), LaunchError> {
        let (program, args) = self
            .browser
            .split_first()
            .ok_or(LaunchError::NoCommand("the browser"))?;

        tracing::debug!(program = %program, url = %url, "opening search");
        let child = Command::new(program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.clone(),
                source,
            })?;
        reap(program, child);
        Ok(())
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), LaunchError> {
        let Some((program, args)) = self.share.as_ref().and_then(|argv| argv.split_first()) else {
            tracing::debug!("no share command configured; payload shown only");
            return Ok(());
        };

        tracing::debug!(program = %program, "sharing search");
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.clone(),
                source,
            })?;

        // Dropping stdin closes the pipe so the share target sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => {
                let body = format!("{}\n\n{}\n", payload.subject, payload.text);
                stdin.write_all(body.as_bytes())
            }
            None => Ok(()),
        };
        reap(program, child);

        written.map_err(|source| LaunchError::Io {
            program: program.clone(),
            source,
        })
    }
}

/// Wait for `child` on a detached thread so it never lingers as a zombie.
fn reap(program: &str, mut child: Child) {
    let program = program.to_string();
    let spawned = std::thread::Builder::new()
        .name(format!("reap-{program}"))
        .spawn(move || match child.wait() {
            Ok(status) => tracing::debug!(program = %program, %status, "launched program exited"),
            Err(e) => tracing::warn!(program = %program, error = %e, "could not wait on launched program"),
        });
    if let Err(e) = spawned {
        tracing::warn!(error = %e, "could not start waiter thread");
    }
}

/// Whitespace split; quoting is not supported.
fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
