use std::{io::Read, path::PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use recase_core::{KeyCase, object_to_expected_case};
use serde_json::Value;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct KeysCommand {
    /// JSON file to read (defaults to stdin)
    pub file: Option<PathBuf>,

    /// Target casing
    #[arg(short, long, default_value_t = KeyCase::Camel)]
    pub case: KeyCase,

    /// Print compact JSON instead of pretty-printing
    #[arg(long)]
    pub compact: bool,

    /// Check that keys are already in the target casing without printing (exit 1 if not)
    #[arg(long)]
    pub check: bool,
}

impl KeysCommand {
    pub fn run(&self) -> Result<()> {
        let value = self.parse(&self.read_input()?)?;

        if self.check {
            if !self.case.is_satisfied_by(&value) {
                eprintln!(
                    "error: {} has keys that are not in {} case",
                    self.source_name(),
                    self.case
                );
                eprintln!("Run `recase keys --case {}` to fix.", self.case);
                std::process::exit(1);
            }
            return Ok(());
        }

        if self.case == KeyCase::NoTransform {
            eprintln!("warning: --case notransform leaves every key unchanged");
        }

        let recased = object_to_expected_case(&value, self.case).unwrap_or_exit();
        println!("{}", self.render(&recased)?);
        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read '{}'", path.display())),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .wrap_err("failed to read stdin")?;
                Ok(input)
            }
        }
    }

    fn parse(&self, input: &str) -> Result<Value> {
        serde_json::from_str(input)
            .wrap_err_with(|| format!("failed to parse JSON from {}", self.source_name()))
    }

    fn render(&self, value: &Value) -> Result<String> {
        let rendered = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(rendered)
    }

    fn source_name(&self) -> String {
        match &self.file {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;
    use crate::commands::{Cli, Commands};

    fn parse_args(args: &[&str]) -> KeysCommand {
        let cli = Cli::try_parse_from(["recase", "keys"].iter().chain(args))
            .expect("Failed to parse arguments");
        match cli.command {
            Commands::Keys(cmd) => cmd,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_reads_file_and_renders_compact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"user_id": 1, "tag_list": [{{"tag_name": "a"}}]}}"#).unwrap();
        let cmd = parse_args(&[
            file.path().to_str().unwrap(),
            "--case",
            "pascal",
            "--compact",
        ]);

        let value = cmd.parse(&cmd.read_input().unwrap()).unwrap();
        let recased = object_to_expected_case(&value, cmd.case).unwrap();
        assert_eq!(
            cmd.render(&recased).unwrap(),
            r#"{"UserId":1,"TagList":[{"TagName":"a"}]}"#
        );
    }

    #[test]
    fn test_pretty_by_default() {
        let cmd = parse_args(&[]);
        assert!(cmd.file.is_none());
        assert_eq!(cmd.source_name(), "stdin");
        let rendered = cmd.render(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_invalid_json_names_source() {
        let cmd = parse_args(&["input.json"]);
        let err = cmd.parse("{not json").unwrap_err();
        assert_eq!(err.to_string(), "failed to parse JSON from input.json");
    }
}
