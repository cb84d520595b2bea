//! Scripted adapters for driving the pipeline in tests.
//!
//! These are first-class adapters, not `cfg(test)` helpers: the CLI
//! crate's integration tests wire them into `SetupService` exactly the
//! way `main` wires the real ones.

use std::{
    collections::VecDeque,
    sync::{Arc, RwLock},
};

use stacksmith_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Prompt, Reporter},
    },
    error::SetupResult,
};

// ── ScriptedPrompt ────────────────────────────────────────────────────────────

/// Prompt double fed a fixed sequence of answers.
///
/// Each `ask_line` consumes one answer; an exhausted script is an input
/// error (mirroring a closed stdin) rather than a hang. Notices are
/// recorded for assertions.
#[derive(Debug, Clone)]
pub struct ScriptedPrompt {
    inner: Arc<RwLock<ScriptedPromptInner>>,
}

#[derive(Debug, Default)]
struct ScriptedPromptInner {
    answers: VecDeque<String>,
    notices: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ScriptedPromptInner {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                notices: Vec::new(),
            })),
        }
    }

    /// Notices emitted so far (retry messages, menus).
    pub fn notices(&self) -> Vec<String> {
        self.inner.read().unwrap().notices.clone()
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inner.read().unwrap().answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask_line(&self, _prompt: &str) -> SetupResult<String> {
        let mut inner = self.inner.write().unwrap();
        inner
            .answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| {
                ApplicationError::Input {
                    reason: "input script exhausted".into(),
                }
                .into()
            })
    }

    fn notify(&self, message: &str) {
        self.inner.write().unwrap().notices.push(message.to_string());
    }
}

// ── RecordingRunner ───────────────────────────────────────────────────────────

/// One recorded subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// The invocation as a single `program arg arg ...` line.
    pub fn rendered(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

type Effect = Box<dyn Fn() + Send + Sync>;

/// Command runner double: records invocations instead of spawning.
///
/// Tests can register failure patterns (prefix match on the rendered
/// command line) and effects - closures that simulate the filesystem
/// side-effects of an external tool, e.g. `git init` creating `.git`.
#[derive(Clone)]
pub struct RecordingRunner {
    inner: Arc<RecordingRunnerInner>,
}

struct RecordingRunnerInner {
    invocations: RwLock<Vec<Invocation>>,
    failures: RwLock<Vec<String>>,
    effects: RwLock<Vec<(String, Effect)>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RecordingRunnerInner {
                invocations: RwLock::new(Vec::new()),
                failures: RwLock::new(Vec::new()),
                effects: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Fail every invocation whose rendered line starts with `pattern`.
    pub fn fail_on(&self, pattern: &str) {
        self.inner
            .failures
            .write()
            .unwrap()
            .push(pattern.to_string());
    }

    /// Run `effect` after every successful invocation whose rendered line
    /// starts with `pattern`.
    pub fn stub(&self, pattern: &str, effect: impl Fn() + Send + Sync + 'static) {
        self.inner
            .effects
            .write()
            .unwrap()
            .push((pattern.to_string(), Box::new(effect)));
    }

    /// All invocations recorded so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.invocations.read().unwrap().clone()
    }

    /// `true` if some invocation's rendered line contains `needle`.
    pub fn ran(&self, needle: &str) -> bool {
        self.inner
            .invocations
            .read()
            .unwrap()
            .iter()
            .any(|i| i.rendered().contains(needle))
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str]) -> SetupResult<()> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        };
        let rendered = invocation.rendered();
        self.inner.invocations.write().unwrap().push(invocation);

        let failed = self
            .inner
            .failures
            .read()
            .unwrap()
            .iter()
            .any(|pattern| rendered.starts_with(pattern.as_str()));
        if failed {
            return Err(ApplicationError::CommandFailed {
                program: program.to_string(),
                reason: "scripted failure".into(),
            }
            .into());
        }

        for (pattern, effect) in self.inner.effects.read().unwrap().iter() {
            if rendered.starts_with(pattern.as_str()) {
                effect();
            }
        }
        Ok(())
    }
}

// ── RecordingReporter ─────────────────────────────────────────────────────────

/// Reporter double collecting every message by channel.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    inner: Arc<RwLock<RecordingReporterInner>>,
}

#[derive(Debug, Default)]
struct RecordingReporterInner {
    infos: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.inner.read().unwrap().infos.clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.inner.read().unwrap().successes.clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.inner.read().unwrap().warnings.clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.inner.read().unwrap().errors.clone()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.inner.write().unwrap().infos.push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.inner
            .write()
            .unwrap()
            .successes
            .push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.inner
            .write()
            .unwrap()
            .warnings
            .push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.inner.write().unwrap().errors.push(message.to_string());
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_prompt_consumes_answers_in_order() {
        let prompt = ScriptedPrompt::new(&["a", " b "]);
        assert_eq!(prompt.ask_line("").unwrap(), "a");
        assert_eq!(prompt.ask_line("").unwrap(), "b");
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn exhausted_script_is_an_input_error() {
        let prompt = ScriptedPrompt::new(&[]);
        assert!(prompt.ask_line("").is_err());
    }

    #[test]
    fn recording_runner_records_and_renders() {
        let runner = RecordingRunner::new();
        runner.run("git", &["init"]).unwrap();
        runner.run("npm", &["install", "express"]).unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[0].rendered(), "git init");
        assert!(runner.ran("npm install express"));
    }

    #[test]
    fn failure_patterns_match_by_prefix() {
        let runner = RecordingRunner::new();
        runner.fail_on("git push");
        assert!(runner.run("git", &["push", "-u", "origin", "main"]).is_err());
        assert!(runner.run("git", &["init"]).is_ok());
    }

    #[test]
    fn stubs_fire_only_on_matching_success() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let runner = RecordingRunner::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        runner.stub("git init", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        runner.run("git", &["init"]).unwrap();
        runner.run("npm", &["install"]).unwrap();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reporter_collects_by_channel() {
        let reporter = RecordingReporter::new();
        reporter.info("i");
        reporter.warning("w");
        reporter.error("e");
        reporter.success("s");
        assert_eq!(reporter.infos(), vec!["i"]);
        assert_eq!(reporter.warnings(), vec!["w"]);
        assert_eq!(reporter.errors(), vec!["e"]);
        assert_eq!(reporter.successes(), vec!["s"]);
    }
}
