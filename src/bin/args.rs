use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const COMMIT: &str = match option_env!("CSVJOIN_COMMIT") {
    Some(commit) => commit,
    None => "none",
};

pub fn app() -> Command {
    Command::new("csvjoin")
        .version(version_string(VERSION, COMMIT))
        .about("performs a left outer join of two CSV files on a shared column.")
        .arg(
            Arg::new("first")
                .short('1')
                .long("first")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("the first csv file"),
        )
        .arg(
            Arg::new("second")
                .short('2')
                .long("second")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("the second csv file, loaded into memory and joined against"),
        )
        .arg(
            Arg::new("column")
                .short('c')
                .long("column")
                .value_name("NAME")
                .required(true)
                .help("the name of the column to use for the join"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("the output csv file"),
        )
}

// the commit is abbreviated the way git abbreviates it
fn version_string(version: &str, commit: &str) -> String {
    let commit = commit.get(..7).unwrap_or(commit);
    format!("v{version} ({commit})")
}

#[derive(Debug)]
pub struct Args {
    left_path: PathBuf,
    right_path: PathBuf,
    join_column: String,
    output_path: PathBuf,
}

impl Args {
    pub fn parse() -> Result<Args> {
        Args::from_matches(&app().get_matches())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn parse_from<I, T>(itr: I) -> Result<Args>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().try_get_matches_from(itr)?;
        Args::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Args> {
        let left_path = matches
            .get_one::<PathBuf>("first")
            .context("expected --first")?
            .clone();
        let right_path = matches
            .get_one::<PathBuf>("second")
            .context("expected --second")?
            .clone();
        let join_column = matches
            .get_one::<String>("column")
            .context("expected --column")?
            .clone();
        let output_path = matches
            .get_one::<PathBuf>("output")
            .context("expected --output")?
            .clone();

        Ok(Args {
            left_path,
            right_path,
            join_column,
            output_path,
        })
    }

    pub fn left_path(&self) -> &Path {
        &self.left_path
    }
    pub fn right_path(&self) -> &Path {
        &self.right_path
    }
    pub fn join_column(&self) -> &str {
        &self.join_column
    }
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
