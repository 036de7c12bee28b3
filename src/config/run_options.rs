use std::{
    env,
    path::{Path, PathBuf},
};

use getopts::Options;
use tracing::warn;

use super::{Variant, CONFIG_FILE};
use crate::utils::remove_folder_from_path;

#[derive(Clone, Debug, Default)]
pub struct Args {
    pub cfg_file: PathBuf,
    pub variant: Option<Variant>,
    /// stop after this many cycles; runs forever when absent
    pub cycles: Option<u64>,
    pub help: bool,
    // test helper
    pub cfg_str: Option<String>,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("v", "variant", "board variant", "basic|extended");
    opts.optopt("n", "cycles", "stop after N cycles", "N");
    opts.optflag("h", "help", "print this help");
    opts
}

pub fn print_usage(program: &str) {
    let brief = format!("Usage: {} [options] [config_file]", program);
    print!("{}", options().usage(&brief));
}

pub fn get_args() -> Args {
    let args: Vec<String> = env::args().collect();
    parse_args(&args)
}

/// `args[0]` is the program name. Bad options are reported and replaced by defaults.
pub fn parse_args(args: &[String]) -> Args {
    let program = args.first().cloned().unwrap_or_else(|| "irrig".to_owned());
    let default_args = Args { cfg_file: default_cfg_file(), ..Default::default() };

    let matches = match options().parse(args.iter().skip(1)) {
        Ok(m) => m,
        Err(f) => {
            warn!("Error parsing arguments: {}", f);
            warn!("Proceeding with defaults.");
            print_usage(&program);
            return default_args;
        }
    };

    let variant = matches.opt_str("v").and_then(|v| match v.parse::<Variant>() {
        Ok(variant) => Some(variant),
        Err(e) => {
            warn!("{}: '{}'. Using the configured variant.", e, v);
            None
        }
    });
    let cycles = matches.opt_str("n").and_then(|n| match n.parse::<u64>() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Invalid cycle count '{}': {}. Running until stopped.", n, e);
            None
        }
    });
    let help = matches.opt_present("h");

    let Some(config_file_path) = matches.free.first() else {
        return Args { variant, cycles, help, ..default_args };
    };
    let path = remove_folder_from_path(Path::new(config_file_path), "");

    // Attempt to load the config file, but proceed with default if it fails
    if !path.exists() {
        warn!("Config file '{}' does not exist. Proceeding with defaults.", config_file_path);
        return Args { variant, cycles, help, ..default_args };
    }

    Args { cfg_file: path, variant, cycles, help, cfg_str: None }
}

pub fn default_cfg_file() -> PathBuf {
    let config_path = env::current_dir().unwrap_or_default();
    let mut new_configpath = remove_folder_from_path(&config_path, "");

    new_configpath.push(CONFIG_FILE);
    new_configpath
}
