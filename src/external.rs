use crate::command::ExitCode;
use anyhow::{Context, Result};
use log::debug;
use std::process::{Child, Command};

/// Run an external program and block until it is done.
///
/// `args[0]` is looked up through `PATH` like `execvp` does; the rest are passed as
/// its arguments. The child inherits the environment, the standard streams and the
/// working directory. Returns the child's exit code, which the caller is free to
/// ignore; an error means no process could be started or waited for.
pub fn launch(args: &[&str]) -> Result<ExitCode> {
    let (program, rest) = args.split_first().context("no command to launch")?;
    let child = Command::new(program)
        .args(rest)
        .spawn()
        .with_context(|| program.to_string())?;
    debug!("launched {program} as pid {}", child.id());

    let code = wait_for_exit(child)?;
    debug!("{program} finished with exit code {code}");
    Ok(code)
}

/// Wait until the child exits or is killed, ignoring stops and resumes.
#[cfg(unix)]
fn wait_for_exit(child: Child) -> Result<ExitCode> {
    use nix::errno::Errno;
    use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
    use nix::unistd::Pid;

    let pid = Pid::from_raw(child.id() as i32);
    loop {
        match waitpid(pid, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(code),
            Ok(WaitStatus::Signaled(_, signal, _)) => return Ok(128 + signal as i32),
            Ok(status) => debug!("pid {pid} changed state without exiting: {status:?}"),
            Err(Errno::EINTR) => continue,
            Err(errno) => return Err(errno).with_context(|| format!("waitpid {pid}")),
        }
    }
}

#[cfg(not(unix))]
fn wait_for_exit(mut child: Child) -> Result<ExitCode> {
    let status = child.wait().context("wait")?;
    Ok(status.code().unwrap_or(-1))
}
