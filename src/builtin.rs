use crate::command::{Context, Continuation, Handler};
use anyhow::{Context as _, Result, bail};
use std::env;
use std::ops::ControlFlow;

/// A command implemented in-process instead of by launching a program.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// Name matched against the first token, case-sensitively.
    pub name: &'static str,
    pub handler: Handler,
}

/// The commands every interpreter knows about, in the order `help` lists them.
pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "cd",
        handler: cd,
    },
    Builtin {
        name: "help",
        handler: help,
    },
    Builtin {
        name: "exit",
        handler: exit,
    },
];

/// Find a builtin by exact name. The first match wins.
pub fn lookup<'t>(builtins: &'t [Builtin], name: &str) -> Option<&'t Builtin> {
    builtins.iter().find(|builtin| builtin.name == name)
}

/// Change the working directory of the whole process.
///
/// Only the first argument is used; anything after it is ignored.
fn cd(args: &[&str], _ctx: &mut Context<'_>) -> Result<Continuation> {
    let Some(target) = args.get(1) else {
        bail!("expected argument to \"cd\"");
    };
    env::set_current_dir(target).with_context(|| format!("cd: {target}"))?;
    Ok(ControlFlow::Continue(()))
}

fn help(_args: &[&str], ctx: &mut Context<'_>) -> Result<Continuation> {
    writeln!(ctx.stdout, "flsh, a tiny line shell")?;
    writeln!(ctx.stdout, "Type program names and arguments, and hit enter.")?;
    writeln!(ctx.stdout, "The following are built in:")?;
    for builtin in ctx.builtins {
        writeln!(ctx.stdout, "  {}", builtin.name)?;
    }
    writeln!(ctx.stdout, "Use the man command for information on other programs.")?;
    Ok(ControlFlow::Continue(()))
}

fn exit(_args: &[&str], _ctx: &mut Context<'_>) -> Result<Continuation> {
    Ok(ControlFlow::Break(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock_current_dir;
    use std::fs;
    use std::path::PathBuf;

    fn run(args: &[&str], out: &mut Vec<u8>) -> Result<Continuation> {
        let builtin = lookup(BUILTINS, args[0]).expect("builtin exists");
        let mut ctx = Context {
            stdout: out,
            builtins: BUILTINS,
        };
        (builtin.handler)(args, &mut ctx)
    }

    fn make_temp_dir(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("flsh_builtin_{}_{}", std::process::id(), tag));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp dir");
        fs::canonicalize(&dir).expect("canonicalize temp dir")
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert_eq!(lookup(BUILTINS, "cd").map(|b| b.name), Some("cd"));
        assert!(lookup(BUILTINS, "CD").is_none());
        assert!(lookup(BUILTINS, "exi").is_none());
        assert!(lookup(BUILTINS, "exit2").is_none());
    }

    #[test]
    fn table_names_are_unique() {
        for (i, builtin) in BUILTINS.iter().enumerate() {
            assert!(
                BUILTINS[i + 1..].iter().all(|other| other.name != builtin.name),
                "duplicate builtin {}",
                builtin.name
            );
        }
    }

    #[test]
    fn cd_changes_directory() {
        let _lock = lock_current_dir();
        let orig = env::current_dir().unwrap();
        let temp = make_temp_dir("cd");

        let target = temp.to_string_lossy().to_string();
        let res = run(&["cd", target.as_str()], &mut Vec::new());
        let now = fs::canonicalize(env::current_dir().unwrap()).unwrap();
        env::set_current_dir(&orig).expect("restore cwd");

        assert_eq!(res.unwrap(), ControlFlow::Continue(()));
        assert_eq!(now, temp);
        let _ = fs::remove_dir_all(temp);
    }

    #[test]
    fn cd_ignores_extra_arguments() {
        let _lock = lock_current_dir();
        let orig = env::current_dir().unwrap();
        let temp = make_temp_dir("extra");

        let target = temp.to_string_lossy().to_string();
        let res = run(&["cd", target.as_str(), "ignored"], &mut Vec::new());
        let now = fs::canonicalize(env::current_dir().unwrap()).unwrap();
        env::set_current_dir(&orig).expect("restore cwd");

        assert!(res.is_ok());
        assert_eq!(now, temp);
        let _ = fs::remove_dir_all(temp);
    }

    #[test]
    fn cd_without_argument_is_usage_error() {
        let _lock = lock_current_dir();
        let orig = env::current_dir().unwrap();

        let err = run(&["cd"], &mut Vec::new()).unwrap_err();

        assert_eq!(err.to_string(), "expected argument to \"cd\"");
        assert_eq!(env::current_dir().unwrap(), orig);
    }

    #[test]
    fn cd_to_missing_directory_reports_os_error() {
        let _lock = lock_current_dir();
        let orig = env::current_dir().unwrap();
        let missing = format!("/nonexistent_flsh_dir_{}", std::process::id());

        let err = run(&["cd", missing.as_str()], &mut Vec::new()).unwrap_err();

        assert_eq!(err.to_string(), format!("cd: {missing}"));
        assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
        assert_eq!(env::current_dir().unwrap(), orig);
    }

    #[test]
    fn help_lists_every_builtin() {
        let mut out = Vec::new();
        let res = run(&["help"], &mut out).unwrap();
        assert_eq!(res, ControlFlow::Continue(()));

        let text = String::from_utf8(out).unwrap();
        for name in ["cd", "help", "exit"] {
            assert!(text.lines().any(|l| l == format!("  {name}")), "{name} missing");
        }
        assert!(text.ends_with("Use the man command for information on other programs.\n"));
    }

    #[test]
    fn help_lists_only_the_table_it_was_given() {
        let table = &BUILTINS[2..];
        let mut out = Vec::new();
        let mut ctx = Context {
            stdout: &mut out,
            builtins: table,
        };
        assert!(help(&["help"], &mut ctx).unwrap().is_continue());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  exit\n"));
        assert!(!text.contains("  cd\n"));
    }

    #[test]
    fn exit_stops_regardless_of_arguments() {
        assert_eq!(run(&["exit"], &mut Vec::new()).unwrap(), ControlFlow::Break(()));
        assert_eq!(run(&["exit", "1"], &mut Vec::new()).unwrap(), ControlFlow::Break(()));
        assert_eq!(
            run(&["exit", "--force", "now"], &mut Vec::new()).unwrap(),
            ControlFlow::Break(())
        );
    }
}
