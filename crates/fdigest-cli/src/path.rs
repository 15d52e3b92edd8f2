//! # Path Subcommand
//!
//! Path string utilities with POSIX semantics: absolute resolution,
//! dirname/basename, split, and join.
//!
//! `dirname`/`basename` split at the last `/` and do not touch the
//! filesystem, so `basename("/root/")` is empty and `dirname("file")` is
//! empty. `abs` collapses `.` and `..` lexically without resolving symlinks.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

/// Arguments for the `fdigest path` subcommand.
#[derive(Args, Debug)]
pub struct PathArgs {
    #[command(subcommand)]
    pub command: PathCommand,
}

/// Path subcommands.
#[derive(Subcommand, Debug)]
pub enum PathCommand {
    /// Absolute, normalized form of a path.
    Abs {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Directory component of a path.
    Dirname {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Final component of a path.
    Basename {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Directory and final component as a pair.
    Split {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Join components with `/`.
    Join {
        #[arg(value_name = "PARTS", required = true)]
        parts: Vec<String>,
    },
}

/// Execute the path subcommand.
pub fn run_path(args: &PathArgs) -> Result<u8> {
    let line = match &args.command {
        PathCommand::Abs { path } => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            absolute(path, &cwd).display().to_string()
        }
        PathCommand::Dirname { path } => dirname(path).to_string(),
        PathCommand::Basename { path } => basename(path).to_string(),
        PathCommand::Split { path } => {
            let (head, tail) = split(path);
            format!("({head}, {tail})")
        }
        PathCommand::Join { parts } => join(parts),
    };
    println!("{line}");
    Ok(0)
}

/// Resolve `path` against `cwd` and collapse `.` and `..` components.
pub fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(p) => out.push(p.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            // `pop` on the root leaves it in place, so `/..` stays `/`.
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}

/// Split into everything before the last `/` and everything after it.
///
/// Trailing slashes are stripped from the head unless the head is all
/// slashes.
pub fn split(path: &str) -> (&str, &str) {
    let cut = path.rfind('/').map_or(0, |i| i + 1);
    let (head, tail) = path.split_at(cut);
    let trimmed = head.trim_end_matches('/');
    let head = if trimmed.is_empty() { head } else { trimmed };
    (head, tail)
}

/// Directory portion of `path`.
pub fn dirname(path: &str) -> &str {
    split(path).0
}

/// Final portion of `path`.
pub fn basename(path: &str) -> &str {
    split(path).1
}

/// Join components; a component starting with `/` restarts the path.
pub fn join(parts: &[String]) -> String {
    let mut out = String::new();
    for part in parts {
        if part.starts_with('/') {
            out.clear();
            out.push_str(part);
        } else if out.is_empty() || out.ends_with('/') {
            out.push_str(part);
        } else {
            out.push('/');
            out.push_str(part);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(p: &[&str]) -> Vec<String> {
        p.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn basename_and_dirname_of_file_path() {
        assert_eq!(basename("/root/runoob.txt"), "runoob.txt");
        assert_eq!(dirname("/root/runoob.txt"), "/root");
        assert_eq!(split("/root/runoob.txt"), ("/root", "runoob.txt"));
    }

    #[test]
    fn trailing_slash_has_empty_basename() {
        assert_eq!(basename("/root/"), "");
        assert_eq!(dirname("/root/"), "/root");
    }

    #[test]
    fn bare_name_has_empty_dirname() {
        assert_eq!(split("file"), ("", "file"));
    }

    #[test]
    fn root_dirname_keeps_slashes() {
        assert_eq!(dirname("/x"), "/");
        assert_eq!(dirname("//x"), "//");
        assert_eq!(dirname("a//b"), "a");
    }

    #[test]
    fn join_relative_parts() {
        assert_eq!(join(&parts(&["root", "test", "runoob.txt"])), "root/test/runoob.txt");
        assert_eq!(join(&parts(&["root/", "x"])), "root/x");
    }

    #[test]
    fn join_absolute_part_restarts() {
        assert_eq!(join(&parts(&["a", "/b", "c"])), "/b/c");
    }

    #[test]
    fn absolute_joins_relative_onto_cwd() {
        let cwd = Path::new("/home/user/work");
        assert_eq!(
            absolute(Path::new("./os_path.py"), cwd),
            PathBuf::from("/home/user/work/os_path.py")
        );
    }

    #[test]
    fn absolute_collapses_parent_components() {
        let cwd = Path::new("/home/user");
        assert_eq!(absolute(Path::new("../x/./y"), cwd), PathBuf::from("/home/x/y"));
        assert_eq!(absolute(Path::new("/../.."), cwd), PathBuf::from("/"));
    }
}
