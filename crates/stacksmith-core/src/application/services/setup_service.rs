//! Setup Service - the wizard pipeline driver.
//!
//! This service runs the fixed linear step sequence:
//!
//! welcome → project name → bun → git → layout → frontend → backend →
//! database → ORM → env file → remote → farewell
//!
//! Each step yields a [`StepOutcome`]; a failed step is reported and the
//! pipeline continues. Only the project-name step is fatal - without a
//! project root there is nothing to continue into. Steps that descend
//! into `frontend/` or `backend/` go through [`SetupService::in_dir`],
//! which restores the workspace cursor to the project root on every exit
//! path.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{CommandRunner, FILE_MODE, Prompt, Reporter, Workspace},
    domain::{
        Layout, ProjectName, Session, Step, StepOutcome, manifest, templates, validation,
    },
    error::{SetupError, SetupResult},
};

/// Outcome of one step, labelled for the closing summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub outcome: StepOutcome,
}

impl StepReport {
    /// A step the driver never entered (layout gate).
    fn skipped(step: Step) -> Self {
        Self {
            step,
            outcome: StepOutcome::Skipped,
        }
    }
}

/// Everything the wizard produced: the session and one report per step.
#[derive(Debug)]
pub struct SetupSummary {
    pub session: Session,
    pub reports: Vec<StepReport>,
}

impl SetupSummary {
    /// Number of steps that started but did not finish.
    pub fn failures(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_failure())
            .count()
    }
}

/// Main wizard service.
///
/// Owns the four driven ports and runs the pipeline against them.
pub struct SetupService {
    prompt: Box<dyn Prompt>,
    runner: Box<dyn CommandRunner>,
    workspace: Box<dyn Workspace>,
    reporter: Box<dyn Reporter>,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    pub fn new(
        prompt: Box<dyn Prompt>,
        runner: Box<dyn CommandRunner>,
        workspace: Box<dyn Workspace>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            prompt,
            runner,
            workspace,
            reporter,
        }
    }

    /// Run the whole pipeline.
    ///
    /// Returns `Err` only when the project root cannot be established
    /// (or stdin closes mid-prompt); every later failure is folded into
    /// the summary instead.
    #[instrument(skip_all)]
    pub fn run(&self) -> SetupResult<SetupSummary> {
        self.welcome()?;

        let mut session = self.create_project()?;
        info!(
            session = %session.id(),
            project = %session.name(),
            root = %session.root().display(),
            "session started"
        );

        let mut reports = Vec::new();

        let bun = self.report(Step::BunInit, self.init_bun());
        session.bun_initialized = bun.outcome.is_completed();
        reports.push(bun);

        reports.push(self.report(Step::GitInit, self.init_git(&session)));
        reports.push(self.report(Step::Layout, self.choose_layout(&mut session)));

        if session.frontend_selected {
            reports.push(self.report(Step::Frontend, self.setup_frontend(&session)));
        } else {
            reports.push(StepReport::skipped(Step::Frontend));
        }

        if session.backend_selected {
            reports.push(self.report(Step::Backend, self.setup_backend(&session)));
            reports.push(self.report(Step::Database, self.setup_database(&session)));
            reports.push(self.report(Step::Orm, self.setup_orm(&session)));
            reports.push(self.report(Step::EnvFile, self.write_env_file(&session)));
        } else {
            reports.push(StepReport::skipped(Step::Backend));
            reports.push(StepReport::skipped(Step::Database));
            reports.push(StepReport::skipped(Step::Orm));
            reports.push(StepReport::skipped(Step::EnvFile));
        }

        reports.push(self.report(Step::Remote, self.setup_remote(&session)));

        self.reporter
            .success("Project setup is ready. Happy building!");

        Ok(SetupSummary { session, reports })
    }

    // ── Driver internals ──────────────────────────────────────────────────

    /// Fold a step result into a report, surfacing failures without
    /// aborting the pipeline.
    fn report(&self, step: Step, result: SetupResult<StepOutcome>) -> StepReport {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                self.reporter
                    .error(&format!("Error while {}: {err}", step.action()));
                warn!(step = %step, error = %err, "step failed");
                StepOutcome::Failed(err.to_string())
            }
        };
        debug!(step = %step, outcome = %outcome, "step finished");
        StepReport { step, outcome }
    }

    /// Run `f` with the cursor moved into `dir`, restoring it to `root`
    /// on every exit path.
    ///
    /// A restore failure after a successful closure is an error of its
    /// own; a closure failure wins over a restore failure because it is
    /// the more useful diagnosis.
    fn in_dir<T>(
        &self,
        root: &Path,
        dir: &Path,
        f: impl FnOnce(&Self) -> SetupResult<T>,
    ) -> SetupResult<T> {
        self.workspace.set_current_dir(dir)?;
        let result = f(self);
        let restored = self.workspace.set_current_dir(root);
        match (result, restored) {
            (Err(err), _) => Err(err),
            (Ok(_), Err(err)) => Err(err),
            (Ok(value), Ok(())) => Ok(value),
        }
    }

    /// Insert a literal script entry into `<dir>/package.json`.
    fn add_package_script(&self, dir: &Path, script: &str) -> SetupResult<()> {
        let manifest_path = dir.join("package.json");
        let contents = self.workspace.read_file(&manifest_path)?;
        let updated = manifest::insert_script(&contents, script).ok_or_else(|| {
            SetupError::from(crate::domain::DomainError::ScriptBlockNotFound {
                path: manifest_path.display().to_string(),
            })
        })?;
        self.workspace.write_file(&manifest_path, &updated, FILE_MODE)?;
        debug!(path = %manifest_path.display(), script, "package.json script added");
        Ok(())
    }

    // ── Steps ─────────────────────────────────────────────────────────────

    fn welcome(&self) -> SetupResult<()> {
        self.reporter
            .info("Welcome to Stacksmith! Press Enter to start setting up your project.");
        self.prompt.ask_line("")?;
        Ok(())
    }

    /// Step 2: establish the project root. The only fatal step.
    fn create_project(&self) -> SetupResult<Session> {
        loop {
            let input = self.prompt.ask_non_empty("Enter project name: ")?;
            let name = match ProjectName::new(input) {
                Ok(name) => name,
                Err(err) => {
                    self.prompt.notify(&err.to_string());
                    continue;
                }
            };
            if self.workspace.exists(name.as_ref()) {
                self.prompt.notify(&format!(
                    "A directory named '{name}' already exists. Please choose a different name."
                ));
                continue;
            }
            self.workspace.mkdir(name.as_ref())?;
            self.workspace.set_current_dir(name.as_ref())?;
            let root = self.workspace.current_dir()?;
            return Ok(Session::new(name, root));
        }
    }

    /// Step 3: optional Bun runtime init in the project root.
    fn init_bun(&self) -> SetupResult<StepOutcome> {
        if !self.prompt.ask_yes_no("Initialize a Bun project?")? {
            self.reporter.info("Skipping Bun initialization.");
            return Ok(StepOutcome::Skipped);
        }
        self.runner.run("bun", &["init"])?;
        self.reporter.success("Bun project initialized.");
        Ok(StepOutcome::Completed)
    }

    /// Step 4: optional git init with a committed README.
    fn init_git(&self, session: &Session) -> SetupResult<StepOutcome> {
        if !self.prompt.ask_yes_no("Initialize a git repository?")? {
            self.reporter.info("Skipping git initialization.");
            return Ok(StepOutcome::Skipped);
        }
        self.reporter.info("Initializing git repository...");
        self.runner.run("git", &["init"])?;
        self.workspace.write_file(
            Path::new("README.md"),
            &templates::readme(session.name().as_str()),
            FILE_MODE,
        )?;
        self.runner.run("git", &["add", "README.md"])?;
        let message = format!("Initial commit for {}", session.name());
        self.runner.run("git", &["commit", "-m", &message])?;
        self.reporter.success("Git repository initialized.");
        Ok(StepOutcome::Completed)
    }

    /// Step 5: choose the layout and create its directories.
    ///
    /// The flags are set from the menu choice before any directory is
    /// created, so a mkdir failure still gates the later steps correctly.
    fn choose_layout(&self, session: &mut Session) -> SetupResult<StepOutcome> {
        let choice = self
            .prompt
            .ask_choice("Choose your project layout:", &Layout::MENU)?;
        let layout = Layout::from_choice(choice);
        session.frontend_selected = layout.includes_frontend();
        session.backend_selected = layout.includes_backend();
        info!(layout = %layout, "layout selected");

        self.reporter.info("Setting up project directories...");
        for dir in layout.directories() {
            self.workspace.mkdir(Path::new(dir))?;
        }
        self.reporter.success("Project directories created.");
        Ok(StepOutcome::Completed)
    }

    /// Step 6: optional Vite frontend, with Tailwind and Storybook extras.
    fn setup_frontend(&self, session: &Session) -> SetupResult<StepOutcome> {
        let choice = self
            .prompt
            .ask_choice("Choose your frontend setup:", &["Vite", "Skip"])?;
        if choice != 1 {
            self.reporter.info("Skipping frontend setup.");
            return Ok(StepOutcome::Skipped);
        }

        let frontend = Path::new("frontend");
        self.in_dir(session.root(), frontend, |service| {
            service.runner.run("npm", &["create", "vite@latest", "."])?;
            service.runner.run("npm", &["install"])
        })?;
        self.add_package_script(frontend, r#""dev": "vite""#)?;

        if self.prompt.ask_yes_no("Add TailwindCSS?")? {
            self.in_dir(session.root(), frontend, |service| {
                service
                    .runner
                    .run("npm", &["install", "-D", "tailwindcss", "postcss", "autoprefixer"])?;
                service.runner.run("npx", &["tailwindcss", "init", "-p"])
            })?;
            self.reporter.success("TailwindCSS configured.");
        } else {
            self.reporter.info("Skipping TailwindCSS.");
        }

        if self.prompt.ask_yes_no("Add Storybook?")? {
            self.in_dir(session.root(), frontend, |service| {
                service.runner.run("npx", &["storybook", "init"])
            })?;
            self.reporter.success("Storybook configured.");
        } else {
            self.reporter.info("Skipping Storybook.");
        }

        self.reporter.success("Frontend setup complete.");
        Ok(StepOutcome::Completed)
    }

    /// Step 7: optional Express + TypeScript backend.
    fn setup_backend(&self, session: &Session) -> SetupResult<StepOutcome> {
        let choice = self.prompt.ask_choice(
            "Choose your backend setup:",
            &["Express + TypeScript", "Skip"],
        )?;
        if choice != 1 {
            self.reporter.info("Skipping backend setup.");
            return Ok(StepOutcome::Skipped);
        }

        let backend = Path::new("backend");
        self.in_dir(session.root(), backend, |service| {
            service.runner.run("npm", &["init", "-y"])?;
            service.runner.run(
                "npm",
                &[
                    "install",
                    "express",
                    "typescript",
                    "@types/express",
                    "ts-node",
                    "nodemon",
                    "cors",
                    "@types/cors",
                    "dotenv",
                ],
            )?;
            service
                .workspace
                .write_file(Path::new("tsconfig.json"), templates::TSCONFIG_JSON, FILE_MODE)?;
            service.workspace.mkdir(Path::new("src"))?;
            service
                .workspace
                .write_file(Path::new("src/server.ts"), templates::SERVER_TS, FILE_MODE)
        })?;
        self.add_package_script(backend, r#""start": "nodemon src/server.ts""#)?;
        self.add_package_script(backend, r#""build": "tsc""#)?;

        self.reporter.success("Backend setup complete.");
        Ok(StepOutcome::Completed)
    }

    /// Step 8: optional PostgreSQL compose file in `backend/`.
    fn setup_database(&self, session: &Session) -> SetupResult<StepOutcome> {
        if !self
            .prompt
            .ask_yes_no("Set up a PostgreSQL database container?")?
        {
            self.reporter.info("Skipping database setup.");
            return Ok(StepOutcome::Skipped);
        }
        self.in_dir(session.root(), Path::new("backend"), |service| {
            service.workspace.write_file(
                Path::new("docker-compose.yml"),
                &templates::docker_compose(session.name().as_str()),
                FILE_MODE,
            )
        })?;
        self.reporter.success("Database setup complete.");
        Ok(StepOutcome::Completed)
    }

    /// Step 9: optional Prisma setup; requires `backend/` to exist.
    fn setup_orm(&self, session: &Session) -> SetupResult<StepOutcome> {
        if !self.prompt.ask_yes_no("Set up the Prisma ORM?")? {
            self.reporter.info("Skipping ORM setup.");
            return Ok(StepOutcome::Skipped);
        }
        if !self.workspace.exists(Path::new("backend")) {
            self.reporter
                .warning("Backend directory does not exist. Skipping ORM setup.");
            return Ok(StepOutcome::Skipped);
        }
        self.in_dir(session.root(), Path::new("backend"), |service| {
            service.runner.run("npx", &["prisma", "init"])?;
            service.runner.run("npm", &["install", "@prisma/client"])?;
            // prisma init creates prisma/; recreate it if the external
            // tool laid things out differently.
            if !service.workspace.exists(Path::new("prisma")) {
                service.workspace.mkdir(Path::new("prisma"))?;
            }
            service.workspace.write_file(
                Path::new("prisma/schema.prisma"),
                templates::PRISMA_SCHEMA,
                FILE_MODE,
            )?;
            service.runner.run("npx", &["prisma", "generate"])
        })?;
        self.reporter.success("ORM setup complete.");
        Ok(StepOutcome::Completed)
    }

    /// Step 10: optional `backend/.env.local`; requires `backend/`.
    fn write_env_file(&self, session: &Session) -> SetupResult<StepOutcome> {
        if !self
            .prompt
            .ask_yes_no("Create an .env.local file for the database configuration?")?
        {
            self.reporter.info("Skipping .env.local setup.");
            return Ok(StepOutcome::Skipped);
        }
        if !self.workspace.exists(Path::new("backend")) {
            self.reporter
                .warning("Backend directory does not exist. Skipping .env.local setup.");
            return Ok(StepOutcome::Skipped);
        }
        self.workspace.write_file(
            Path::new("backend/.env.local"),
            &templates::env_file(session.name().as_str()),
            FILE_MODE,
        )?;
        self.reporter.success(".env.local created.");
        Ok(StepOutcome::Completed)
    }

    /// Step 11: optional remote origin, branch rename, and first push.
    fn setup_remote(&self, _session: &Session) -> SetupResult<StepOutcome> {
        if !self.prompt.ask_yes_no("Set up a remote git repository?")? {
            self.reporter.info("Skipping remote setup.");
            return Ok(StepOutcome::Skipped);
        }
        if !self.workspace.exists(Path::new(".git")) {
            self.reporter
                .warning("Git repository is not initialized. Skipping remote setup.");
            return Ok(StepOutcome::Skipped);
        }

        loop {
            let url = self.prompt.ask_non_empty("Enter the remote repository URL: ")?;
            if url.eq_ignore_ascii_case("skip") {
                self.reporter.info("Skipping remote setup.");
                return Ok(StepOutcome::Skipped);
            }
            if !validation::is_valid_url(&url) {
                self.prompt
                    .notify("That does not look like a repository URL. Please try again.");
                continue;
            }
            if let Err(err) = self.runner.run("git", &["remote", "add", "origin", &url]) {
                self.reporter
                    .error(&format!("Failed to add remote origin: {err}"));
                self.prompt
                    .notify("Enter a new URL, or type 'skip' to abandon the remote setup.");
                continue;
            }
            break;
        }

        self.runner.run("git", &["branch", "-M", "main"])?;
        self.runner.run("git", &["push", "-u", "origin", "main"])?;
        self.reporter
            .success("Remote configured and initial push complete.");
        Ok(StepOutcome::Completed)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockReporter, MockWorkspace};
    use crate::domain::DomainError;
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // ── test doubles ──────────────────────────────────────────────────────

    struct Scripted {
        answers: Mutex<VecDeque<&'static str>>,
        notices: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().copied().collect()),
                notices: Mutex::new(Vec::new()),
            }
        }
    }

    impl Prompt for Scripted {
        fn ask_line(&self, _prompt: &str) -> SetupResult<String> {
            let mut answers = self.answers.lock().unwrap();
            let answer = answers.pop_front().expect("script exhausted");
            Ok(answer.trim().to_string())
        }

        fn notify(&self, message: &str) {
            self.notices.lock().unwrap().push(message.to_string());
        }
    }

    /// Runner for flows that must not spawn anything.
    struct NoRun;

    impl CommandRunner for NoRun {
        fn run(&self, program: &str, _args: &[&str]) -> SetupResult<()> {
            panic!("unexpected command: {program}");
        }
    }

    fn quiet_reporter() -> MockReporter {
        let mut reporter = MockReporter::new();
        reporter.expect_info().return_const(());
        reporter.expect_success().return_const(());
        reporter.expect_warning().return_const(());
        reporter.expect_error().return_const(());
        reporter
    }

    fn fs_error(reason: &str) -> SetupError {
        crate::application::ApplicationError::Filesystem {
            path: PathBuf::from("x"),
            reason: reason.into(),
        }
        .into()
    }

    fn service(
        prompt: impl Prompt + 'static,
        runner: impl CommandRunner + 'static,
        workspace: MockWorkspace,
        reporter: MockReporter,
    ) -> SetupService {
        SetupService::new(
            Box::new(prompt),
            Box::new(runner),
            Box::new(workspace),
            Box::new(reporter),
        )
    }

    // ── in_dir ────────────────────────────────────────────────────────────

    #[test]
    fn in_dir_restores_cursor_after_success() {
        let mut workspace = MockWorkspace::new();
        workspace
            .expect_set_current_dir()
            .withf(|p| p == Path::new("frontend"))
            .times(1)
            .returning(|_| Ok(()));
        workspace
            .expect_set_current_dir()
            .withf(|p| p == Path::new("/proj"))
            .times(1)
            .returning(|_| Ok(()));

        let svc = service(Scripted::new(&[]), NoRun, workspace, quiet_reporter());
        let out = svc.in_dir(Path::new("/proj"), Path::new("frontend"), |_| Ok(42));
        assert_eq!(out.unwrap(), 42);
    }

    #[test]
    fn in_dir_restores_cursor_even_when_the_closure_fails() {
        let mut workspace = MockWorkspace::new();
        workspace
            .expect_set_current_dir()
            .withf(|p| p == Path::new("backend"))
            .times(1)
            .returning(|_| Ok(()));
        workspace
            .expect_set_current_dir()
            .withf(|p| p == Path::new("/proj"))
            .times(1)
            .returning(|_| Ok(()));

        let svc = service(Scripted::new(&[]), NoRun, workspace, quiet_reporter());
        let out: SetupResult<()> = svc.in_dir(Path::new("/proj"), Path::new("backend"), |_| {
            Err(fs_error("boom"))
        });
        assert!(out.is_err());
    }

    #[test]
    fn in_dir_closure_error_wins_over_restore_error() {
        let mut workspace = MockWorkspace::new();
        workspace
            .expect_set_current_dir()
            .withf(|p| p == Path::new("backend"))
            .returning(|_| Ok(()));
        workspace
            .expect_set_current_dir()
            .withf(|p| p == Path::new("/proj"))
            .returning(|_| Err(fs_error("restore failed")));

        let svc = service(Scripted::new(&[]), NoRun, workspace, quiet_reporter());
        let out: SetupResult<()> = svc.in_dir(Path::new("/proj"), Path::new("backend"), |_| {
            Err(fs_error("closure failed"))
        });
        assert!(out.unwrap_err().to_string().contains("closure failed"));
    }

    // ── create_project ────────────────────────────────────────────────────

    #[test]
    fn duplicate_project_name_reprompts() {
        let mut workspace = MockWorkspace::new();
        workspace
            .expect_exists()
            .withf(|p| p == Path::new("foo"))
            .return_const(true);
        workspace
            .expect_exists()
            .withf(|p| p == Path::new("bar"))
            .return_const(false);
        workspace
            .expect_mkdir()
            .withf(|p| p == Path::new("bar"))
            .times(1)
            .returning(|_| Ok(()));
        workspace
            .expect_set_current_dir()
            .withf(|p| p == Path::new("bar"))
            .times(1)
            .returning(|_| Ok(()));
        workspace
            .expect_current_dir()
            .returning(|| Ok(PathBuf::from("/work/bar")));

        let prompt = Scripted::new(&["foo", "bar"]);
        let svc = service(prompt, NoRun, workspace, quiet_reporter());
        let session = svc.create_project().unwrap();
        assert_eq!(session.name().as_str(), "bar");
        assert_eq!(session.root(), Path::new("/work/bar"));
    }

    #[test]
    fn mkdir_failure_is_fatal_to_project_creation() {
        let mut workspace = MockWorkspace::new();
        workspace.expect_exists().return_const(false);
        workspace
            .expect_mkdir()
            .returning(|_| Err(fs_error("disk full")));

        let svc = service(
            Scripted::new(&["demo"]),
            NoRun,
            workspace,
            quiet_reporter(),
        );
        assert!(svc.create_project().is_err());
    }

    #[test]
    fn name_with_separator_reprompts_instead_of_failing() {
        let mut workspace = MockWorkspace::new();
        workspace.expect_exists().return_const(false);
        workspace.expect_mkdir().returning(|_| Ok(()));
        workspace.expect_set_current_dir().returning(|_| Ok(()));
        workspace
            .expect_current_dir()
            .returning(|| Ok(PathBuf::from("/work/ok")));

        let prompt = Scripted::new(&["a/b", "ok"]);
        let svc = service(prompt, NoRun, workspace, quiet_reporter());
        let session = svc.create_project().unwrap();
        assert_eq!(session.name().as_str(), "ok");
    }

    // ── precondition skips ────────────────────────────────────────────────

    #[test]
    fn orm_without_backend_directory_warns_and_skips() {
        let mut workspace = MockWorkspace::new();
        workspace
            .expect_exists()
            .withf(|p| p == Path::new("backend"))
            .return_const(false);

        let mut reporter = MockReporter::new();
        reporter
            .expect_warning()
            .withf(|m| m.contains("Backend directory does not exist"))
            .times(1)
            .return_const(());

        let session = Session::new(ProjectName::new("demo").unwrap(), PathBuf::from("/demo"));
        let svc = service(Scripted::new(&["y"]), NoRun, workspace, reporter);
        let outcome = svc.setup_orm(&session).unwrap();
        assert_eq!(outcome, StepOutcome::Skipped);
    }

    #[test]
    fn remote_without_git_directory_warns_and_skips() {
        let mut workspace = MockWorkspace::new();
        workspace
            .expect_exists()
            .withf(|p| p == Path::new(".git"))
            .return_const(false);

        let mut reporter = MockReporter::new();
        reporter
            .expect_warning()
            .withf(|m| m.contains("not initialized"))
            .times(1)
            .return_const(());

        let session = Session::new(ProjectName::new("demo").unwrap(), PathBuf::from("/demo"));
        let svc = service(Scripted::new(&["y"]), NoRun, workspace, reporter);
        let outcome = svc.setup_remote(&session).unwrap();
        assert_eq!(outcome, StepOutcome::Skipped);
    }

    #[test]
    fn env_file_without_backend_directory_warns_and_skips() {
        let mut workspace = MockWorkspace::new();
        workspace
            .expect_exists()
            .withf(|p| p == Path::new("backend"))
            .return_const(false);

        let mut reporter = MockReporter::new();
        reporter
            .expect_warning()
            .withf(|m| m.contains("Backend directory does not exist"))
            .times(1)
            .return_const(());

        let session = Session::new(ProjectName::new("demo").unwrap(), PathBuf::from("/demo"));
        let svc = service(Scripted::new(&["y"]), NoRun, workspace, reporter);
        let outcome = svc.write_env_file(&session).unwrap();
        assert_eq!(outcome, StepOutcome::Skipped);
    }

    // ── report ────────────────────────────────────────────────────────────

    #[test]
    fn failure_report_uses_the_error_while_template() {
        let mut reporter = MockReporter::new();
        reporter
            .expect_error()
            .withf(|m| m.starts_with("Error while initializing Bun:"))
            .times(1)
            .return_const(());

        let svc = service(Scripted::new(&[]), NoRun, MockWorkspace::new(), reporter);
        let report = svc.report(Step::BunInit, Err(fs_error("boom")));
        assert!(report.outcome.is_failure());
    }

    #[test]
    fn declined_steps_report_skipped_without_error_output() {
        let mut reporter = MockReporter::new();
        reporter.expect_info().return_const(());
        // No expect_error: an error call would panic the mock.

        let svc = service(Scripted::new(&["n"]), NoRun, MockWorkspace::new(), reporter);
        let outcome = svc.init_bun().unwrap();
        assert_eq!(outcome, StepOutcome::Skipped);
    }

    // ── add_package_script ────────────────────────────────────────────────

    #[test]
    fn missing_scripts_block_surfaces_domain_error() {
        let mut workspace = MockWorkspace::new();
        workspace
            .expect_read_file()
            .withf(|p| p == Path::new("frontend/package.json"))
            .returning(|_| Ok("{}".to_string()));

        let svc = service(
            Scripted::new(&[]),
            NoRun,
            workspace,
            quiet_reporter(),
        );
        let err = svc
            .add_package_script(Path::new("frontend"), r#""dev": "vite""#)
            .unwrap_err();
        assert!(matches!(
            err,
            SetupError::Domain(DomainError::ScriptBlockNotFound { .. })
        ));
    }
}
