//! Script runner collaborator

use anyhow::Context;
use async_trait::async_trait;
use std::path::Path;
use tracing::{error, info};

/// Captured output of a finished script
#[derive(Debug, Clone)]
pub struct ScriptOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Launches a script file and reports its captured output
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run(&self, script: &Path) -> anyhow::Result<ScriptOutput>;
}

/// Runs scripts through a `node` subprocess
pub struct NodeScriptRunner {
    interpreter: String,
}

impl NodeScriptRunner {
    pub fn new() -> Self {
        Self::with_interpreter("node")
    }

    pub fn with_interpreter(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Default for NodeScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScriptRunner for NodeScriptRunner {
    async fn run(&self, script: &Path) -> anyhow::Result<ScriptOutput> {
        let output = tokio::process::Command::new(&self.interpreter)
            .arg(script)
            .output()
            .await
            .with_context(|| format!("spawning {} {}", self.interpreter, script.display()))?;

        Ok(ScriptOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}

/// Invoke a runner and log the captured streams; errors are contained here.
pub async fn run_and_report(runner: &dyn ScriptRunner, script: &Path) {
    match runner.run(script).await {
        Ok(output) => {
            info!("stdout: {}", output.stdout);
            if !output.stderr.is_empty() {
                error!("stderr: {}", output.stderr);
            }
            if !output.success {
                error!(script = %script.display(), "script exited with failure");
            }
        }
        Err(err) => error!("Execution error: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_interpreter_is_an_error_not_a_panic() {
        let runner = NodeScriptRunner::with_interpreter("definitely-not-a-real-binary");
        let result = runner.run(Path::new("whatever.js")).await;
        assert!(result.is_err());
    }
}
