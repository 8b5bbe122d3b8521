//! `OpenVPN` launch: build the argument vector, confirm, run.
//!
//! The command is never passed through a shell, so server names and
//! addresses from the downloaded list cannot inject extra commands.

use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::config::AppConfig;
use crate::constants;
use crate::error::{Error, Result};
use crate::state::MenuOption;
use crate::ui::Console;

/// A fully assembled VPN client invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchPlan {
    /// Build the `openvpn` invocation for `option`.
    ///
    /// `sudo` is prefixed when the settings ask for it and the process is not
    /// already root.
    #[must_use]
    pub fn build(option: &MenuOption, config: &AppConfig, running_as_root: bool) -> Self {
        let settings = &config.settings;
        let mut argv = Vec::with_capacity(11);

        if settings.use_sudo && !running_as_root {
            argv.push(constants::SUDO_BIN.to_string());
        }
        argv.push(settings.openvpn_bin.clone());
        argv.push("--config".to_string());
        argv.push(path_arg(&config.ovpn_file));
        argv.push("--remote".to_string());
        argv.push(option.address.clone());
        argv.push(settings.remote_port.to_string());
        argv.push(option.transport.to_string());
        argv.push("--auth-user-pass".to_string());
        argv.push(path_arg(&config.credentials_file));
        argv.push("--auth-nocache".to_string());

        let program = argv.remove(0);
        Self {
            program,
            args: argv,
        }
    }

    /// Human-readable command line. Arguments with whitespace or quotes are
    /// single-quoted so the line can be copied into a shell.
    #[must_use]
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|arg| quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Show the command, wait for ENTER, then run it to completion.
///
/// The client's own output is the user-facing signal for connection
/// problems; a non-zero exit status is only logged.
///
/// # Errors
///
/// [`Error::Launch`] if the program cannot be started at all.
pub fn confirm_and_run(plan: &LaunchPlan, console: &mut impl Console) -> Result<ExitStatus> {
    console.say("")?;
    console.say(constants::MSG_COMMAND_PREVIEW)?;
    console.say(&plan.display())?;
    console.say("")?;
    console.ask(constants::PROMPT_CONFIRM_LAUNCH)?;

    log::info!("running {:?} {:?}", plan.program, plan.args);
    let status = plan.command().status().map_err(|source| Error::Launch {
        program: plan.program.clone(),
        source,
    })?;

    if status.success() {
        log::debug!("{} exited cleanly", plan.program);
    } else {
        log::warn!("{} exited with {status}", plan.program);
    }
    Ok(status)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn quote(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::Transport;
    use crate::ui::LineConsole;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn config(settings: Settings) -> AppConfig {
        let dir = PathBuf::from("/home/me/.proxpn");
        AppConfig {
            cache_file: dir.join("locations-v2.xml"),
            ovpn_file: dir.join("proxpn.ovpn"),
            credentials_file: dir.join("auth.conf"),
            config_dir: dir,
            settings,
        }
    }

    fn option() -> MenuOption {
        MenuOption {
            index: 4,
            transport: Transport::Udp,
            name: "Amsterdam".to_string(),
            address: "10.0.0.4".to_string(),
        }
    }

    #[test]
    fn test_build_with_sudo() {
        let plan = LaunchPlan::build(&option(), &config(Settings::default()), false);
        assert_eq!(plan.program, "sudo");
        assert_eq!(
            plan.display(),
            "sudo openvpn --config /home/me/.proxpn/proxpn.ovpn --remote 10.0.0.4 443 udp \
             --auth-user-pass /home/me/.proxpn/auth.conf --auth-nocache"
        );
    }

    #[test]
    fn test_build_as_root_skips_sudo() {
        let plan = LaunchPlan::build(&option(), &config(Settings::default()), true);
        assert_eq!(plan.program, "openvpn");
        assert_eq!(plan.args[0], "--config");
    }

    #[test]
    fn test_build_honours_settings() {
        let settings = Settings {
            remote_port: 1194,
            openvpn_bin: "/usr/sbin/openvpn".to_string(),
            use_sudo: false,
            ..Settings::default()
        };
        let mut tcp = option();
        tcp.transport = Transport::Tcp;

        let plan = LaunchPlan::build(&tcp, &config(settings), false);
        assert_eq!(plan.program, "/usr/sbin/openvpn");
        assert_eq!(
            plan.args,
            vec![
                "--config",
                "/home/me/.proxpn/proxpn.ovpn",
                "--remote",
                "10.0.0.4",
                "1194",
                "tcp",
                "--auth-user-pass",
                "/home/me/.proxpn/auth.conf",
                "--auth-nocache",
            ]
        );
    }

    #[test]
    fn test_address_is_a_single_argument() {
        let mut hostile = option();
        hostile.address = "1.2.3.4; rm -rf ~".to_string();

        let plan = LaunchPlan::build(&hostile, &config(Settings::default()), true);
        assert!(plan.args.contains(&"1.2.3.4; rm -rf ~".to_string()));
        assert!(plan.display().contains("'1.2.3.4; rm -rf ~'"));
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("two words"), "'two words'");
        assert_eq!(quote("it's"), r"'it'\''s'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_missing_binary_is_launch_error() {
        let plan = LaunchPlan {
            program: "/nonexistent/proxpn-test-openvpn".to_string(),
            args: vec![],
        };
        let mut console = LineConsole::new(Cursor::new("\n"), Vec::new());
        let err = confirm_and_run(&plan, &mut console).unwrap_err();
        assert!(matches!(err, Error::Launch { .. }));
    }

    #[test]
    fn test_waits_for_confirmation() {
        let plan = LaunchPlan {
            program: "/nonexistent/proxpn-test-openvpn".to_string(),
            args: vec![],
        };
        // No ENTER: nothing is launched.
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        let err = confirm_and_run(&plan, &mut console).unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let out = String::from_utf8(console.output().clone()).unwrap();
        assert!(out.starts_with("\nThis is the 'openvpn' command that we are going to execute:\n"));
        assert!(out.ends_with("press CTRL+c"));
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_program_and_reports_status() {
        let ok = LaunchPlan {
            program: "true".to_string(),
            args: vec![],
        };
        let mut console = LineConsole::new(Cursor::new("\n"), Vec::new());
        assert!(confirm_and_run(&ok, &mut console).unwrap().success());

        let failing = LaunchPlan {
            program: "false".to_string(),
            args: vec![],
        };
        let mut console = LineConsole::new(Cursor::new("\n"), Vec::new());
        assert!(!confirm_and_run(&failing, &mut console).unwrap().success());
    }
}
