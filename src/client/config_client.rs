//! Lifecycle handlers for the config client component.
//!
//! Each handler writes one fixed line to the supplied sink. The binary passes
//! stdout; tests pass a `Vec<u8>`.

use crate::error::Result;
use crate::models::{Action, LifecycleEnv};
use std::io::Write;
use tracing::debug;

pub const INSTALL_MESSAGE: &str = "Install the config client";
pub const CONFIGURE_MESSAGE: &str = "Configure the config client";

/// The config client component as seen by the cluster manager.
#[derive(Debug, Default)]
pub struct ConfigClient;

impl ConfigClient {
    pub fn new() -> Self {
        Self
    }

    /// Runs the handler for `action`.
    pub fn execute<W: Write>(&self, action: Action, env: &LifecycleEnv, out: &mut W) -> Result<()> {
        debug!(%action, ?env, "Dispatching lifecycle action");
        match action {
            Action::Install => self.install(env, out),
            Action::Configure => self.configure(env, out),
        }
    }

    pub fn install<W: Write>(&self, _env: &LifecycleEnv, out: &mut W) -> Result<()> {
        writeln!(out, "{}", INSTALL_MESSAGE)?;
        out.flush()?;
        Ok(())
    }

    pub fn configure<W: Write>(&self, _env: &LifecycleEnv, out: &mut W) -> Result<()> {
        writeln!(out, "{}", CONFIGURE_MESSAGE)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use rstest::rstest;
    use std::io;

    fn run(action: Action, env: &LifecycleEnv) -> String {
        let mut out = Vec::new();
        ConfigClient::new().execute(action, env, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case(Action::Install, "Install the config client\n")]
    #[case(Action::Configure, "Configure the config client\n")]
    fn writes_exactly_one_line_per_action(#[case] action: Action, #[case] expected: &str) {
        assert_eq!(run(action, &LifecycleEnv::default()), expected);
    }

    #[test]
    fn output_ignores_the_host_context() {
        let env = LifecycleEnv {
            command_json: Some("/var/lib/agent/data/command-42.json".into()),
            base_dir: Some("/var/lib/agent/cache/stacks/service/package".into()),
            structured_output: Some("/var/lib/agent/data/structured-out-42.json".into()),
            log_level: Some("INFO".to_string()),
            tmp_dir: Some("/tmp".into()),
            extra: vec!["PROTOCOL_TLSv1_2".to_string()],
        };
        assert_eq!(run(Action::Install, &env), run(Action::Install, &LifecycleEnv::default()));
        assert_eq!(
            run(Action::Configure, &env),
            run(Action::Configure, &LifecycleEnv::default())
        );
    }

    #[test]
    fn handlers_match_dispatch() {
        let client = ConfigClient::new();
        let env = LifecycleEnv::default();

        let mut direct = Vec::new();
        client.install(&env, &mut direct).unwrap();
        client.configure(&env, &mut direct).unwrap();

        let mut dispatched = Vec::new();
        client.execute(Action::Install, &env, &mut dispatched).unwrap();
        client.execute(Action::Configure, &env, &mut dispatched).unwrap();

        assert_eq!(direct, dispatched);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_surface_as_io_errors() {
        let err = ConfigClient::new()
            .execute(Action::Install, &LifecycleEnv::default(), &mut ClosedPipe)
            .unwrap_err();
        assert!(matches!(err, AppError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
