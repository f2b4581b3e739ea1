use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use recase_core::{KeyCase, Overrides, to_expected_case};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ConvertCommand {
    /// Strings to convert
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Target casing
    #[arg(short, long, default_value_t = KeyCase::Camel)]
    pub case: KeyCase,

    /// Literal replacement for an exact input (repeatable, wins over --overrides)
    #[arg(long = "override", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, String)>,

    /// TOML file with a flat table of overrides
    #[arg(long = "overrides", value_name = "FILE")]
    pub overrides_file: Option<PathBuf>,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        let overrides = self.load_overrides()?;
        for converted in self.convert(&overrides) {
            println!("{}", converted);
        }
        Ok(())
    }

    fn convert(&self, overrides: &Overrides) -> Vec<String> {
        self.values
            .iter()
            .map(|value| to_expected_case(value, self.case, Some(overrides)))
            .collect()
    }

    fn load_overrides(&self) -> Result<Overrides> {
        let mut overrides = match &self.overrides_file {
            Some(path) => {
                let src = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
                Overrides::from_toml_str(&src).unwrap_or_exit()
            }
            None => Overrides::new(),
        };
        overrides.extend(self.overrides.iter().cloned().collect());
        Ok(overrides)
    }
}

fn parse_override(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid override '{}', expected KEY=VALUE", s))?;
    if key.is_empty() {
        return Err(format!("invalid override '{}', key is empty", s));
    }
    Ok((key.to_string(), value.to_string()))
}
