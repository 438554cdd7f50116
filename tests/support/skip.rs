/// Skip a test if no `git` executable is on PATH.
#[macro_export]
macro_rules! skip_without_git {
    () => {
        if which::which("git").is_err() {
            eprintln!("SKIPPED: git not found on PATH");
            return;
        }
    };
}
