#![allow(dead_code)]

pub mod cli {
    use assert_cmd::Command;
    use std::ffi::OsStr;
    use std::path::PathBuf;
    use std::process::ExitStatus;
    use tempfile::TempDir;

    /// Scratch directory that `tk` runs in.
    pub struct TaskWorkspace {
        _temp: TempDir,
        pub root: PathBuf,
    }

    impl TaskWorkspace {
        pub fn new() -> Self {
            let temp = tempfile::tempdir().expect("create temp dir");
            let root = temp.path().to_path_buf();
            Self { _temp: temp, root }
        }

        /// Path of the default snapshot file.
        pub fn snapshot_path(&self) -> PathBuf {
            self.root.join(".tasks").join("tasks.json")
        }
    }

    pub struct TkOutput {
        pub status: ExitStatus,
        pub stdout: String,
        pub stderr: String,
    }

    /// Run `tk` in the workspace. `label` names the step in failure output.
    pub fn run_tk<I, S>(workspace: &TaskWorkspace, args: I, label: &str) -> TkOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::cargo_bin("tk")
            .expect("tk binary")
            .current_dir(&workspace.root)
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .unwrap_or_else(|e| panic!("{label}: failed to run tk: {e}"));

        TkOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run `tk ... --json` and parse stdout.
    pub fn run_tk_json<I, S>(workspace: &TaskWorkspace, args: I, label: &str) -> serde_json::Value
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut all: Vec<std::ffi::OsString> =
            args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
        all.push("--json".into());
        let output = run_tk(workspace, all, label);
        assert!(output.status.success(), "{label} failed: {}", output.stderr);
        serde_json::from_str(&output.stdout)
            .unwrap_or_else(|e| panic!("{label}: invalid JSON ({e}): {}", output.stdout))
    }
}
