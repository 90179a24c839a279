use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use runall::exec::{ProcessExit, ProcessRunner, RunFuture};

/// What a scripted command does when run.
#[derive(Debug, Clone)]
pub enum Script {
    /// Exit with the given result after an optional delay.
    Exit { exit: ProcessExit, delay: Duration },
    /// Fail to spawn with the given message.
    SpawnError(String),
    /// Panic inside the runner.
    Panic,
}

impl Script {
    pub fn succeed() -> Self {
        Script::Exit {
            exit: ProcessExit::success(),
            delay: Duration::ZERO,
        }
    }

    pub fn fail(code: i32, stderr: &str) -> Self {
        Script::Exit {
            exit: ProcessExit::failure(code, stderr),
            delay: Duration::ZERO,
        }
    }

    pub fn after(self, delay: Duration) -> Self {
        match self {
            Script::Exit { exit, .. } => Script::Exit { exit, delay },
            other => other,
        }
    }
}

/// A fake runner that:
/// - records which commands were started, in start order
/// - replays the scripted outcome for each command (success by default).
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    scripts: HashMap<String, Script>,
    started: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, command: &str, script: Script) -> Self {
        self.scripts.insert(command.to_string(), script);
        self
    }

    /// Shared list of commands started so far.
    pub fn started(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.started)
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run<'a>(&'a self, command: &'a str) -> RunFuture<'a> {
        self.started.lock().unwrap().push(command.to_string());
        let script = self
            .scripts
            .get(command)
            .cloned()
            .unwrap_or_else(Script::succeed);

        Box::pin(async move {
            match script {
                Script::Exit { exit, delay } => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    Ok(exit)
                }
                Script::SpawnError(msg) => Err(anyhow::anyhow!(msg)),
                Script::Panic => panic!("scripted panic for '{command}'"),
            }
        })
    }
}
