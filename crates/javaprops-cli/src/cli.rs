use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::command_dump::{DumpOptions, run_dump};
use crate::command_get::{GetCommandError, GetOptions, run_get};
use crate::command_keys::{KeysOptions, run_keys};
use crate::command_set::{SetCommandError, SetOptions, run_set};
use crate::error::CliError;

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Get(#[from] GetCommandError),
    #[error(transparent)]
    Set(#[from] SetCommandError),
    #[error(transparent)]
    Source(#[from] CliError),
}

pub fn run() -> Result<(), CliAppError> {
    run_with(std::env::args().skip(1).collect())
}

fn run_with(args: Vec<String>) -> Result<(), CliAppError> {
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command.as_str() {
        "get" => {
            let options = parse_get_options(args.collect())?;
            run_get(&options, &mut out)?;
            Ok(())
        }
        "keys" => {
            let (path, defaults_path) = parse_read_options(args.collect())?;
            run_keys(
                &KeysOptions {
                    path,
                    defaults_path,
                },
                &mut out,
            )?;
            Ok(())
        }
        "dump" => {
            let (path, defaults_path) = parse_read_options(args.collect())?;
            run_dump(
                &DumpOptions {
                    path,
                    defaults_path,
                },
                &mut out,
            )?;
            Ok(())
        }
        "set" => {
            let options = parse_set_options(args.collect())?;
            run_set(&options, &mut out)?;
            Ok(())
        }
        _ => Err(CliAppError::Usage(usage())),
    }
}

fn parse_get_options(args: Vec<String>) -> Result<GetOptions, CliAppError> {
    let mut positional = Vec::new();
    let mut defaults_path = None;
    let mut fallback = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--defaults" => {
                defaults_path = Some(PathBuf::from(next_value("--defaults", &mut iter)?))
            }
            "--fallback" => fallback = Some(next_value("--fallback", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ if arg.starts_with("--") => return Err(CliAppError::Usage(usage())),
            _ => positional.push(arg),
        }
    }
    let [path, key] = expect_positional::<2>(positional)?;
    Ok(GetOptions {
        path: PathBuf::from(path),
        key,
        defaults_path,
        fallback,
    })
}

fn parse_read_options(args: Vec<String>) -> Result<(PathBuf, Option<PathBuf>), CliAppError> {
    let mut positional = Vec::new();
    let mut defaults_path = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--defaults" => {
                defaults_path = Some(PathBuf::from(next_value("--defaults", &mut iter)?))
            }
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ if arg.starts_with("--") => return Err(CliAppError::Usage(usage())),
            _ => positional.push(arg),
        }
    }
    let [path] = expect_positional::<1>(positional)?;
    Ok((PathBuf::from(path), defaults_path))
}

fn parse_set_options(args: Vec<String>) -> Result<SetOptions, CliAppError> {
    let mut positional = Vec::new();
    let mut comment = None;
    let mut config_path = PathBuf::from("javaprops.toml");
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--comment" => comment = Some(next_value("--comment", &mut iter)?),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ if arg.starts_with("--") => return Err(CliAppError::Usage(usage())),
            _ => positional.push(arg),
        }
    }
    let [path, key, value] = expect_positional::<3>(positional)?;
    Ok(SetOptions {
        path: PathBuf::from(path),
        key,
        value,
        comment,
        config_path,
    })
}

fn expect_positional<const N: usize>(args: Vec<String>) -> Result<[String; N], CliAppError> {
    args.try_into().map_err(|_| CliAppError::Usage(usage()))
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: javaprops get <file> <key> [--defaults <file>] [--fallback <text>]\n       javaprops keys <file> [--defaults <file>]\n       javaprops dump <file> [--defaults <file>]\n       javaprops set <file> <key> <value> [--comment <text>] [--config <path>]".to_string()
}
