use anyhow::{bail, Result};
use clap::{arg, command};
use std::path::PathBuf;
use tilewright::utils::cacher::Cacher;
use tilewright::utils::log::setup_logging;
use tilewright::Config;

fn main() -> Result<()> {
    let matches = command!("tilewright-check")
        .about("Checks the tilewright configuration file")
        .help_template(tilewright::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs the received configuration."),
            arg!([INPUT] "Sets the configuration file to check. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let _log_guard = setup_logging(if verbose { "debug" } else { "warn" })?;
    println!(
        "\x1b[0;94m::\x1b[0m tilewright version: {}",
        env!("CARGO_PKG_VERSION")
    );

    let loaded = match matches.get_one::<String>("INPUT") {
        Some(path) => {
            let path = PathBuf::from(path);
            println!("\x1b[0;94m::\x1b[0m Loading {} . . .", path.display());
            tilewright::load_from_path(&path)
        }
        None => {
            println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
            tilewright::load_or_create()
        }
    };
    let config: Config = match loaded {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => bail!("Configuration failed. Reason: {err:?}"),
    };
    if verbose {
        dbg!(&config);
    }

    println!("\x1b[0;94m::\x1b[0m Checking window cache . . .");
    let mut problems = Vec::new();
    match Cacher::new() {
        Ok(cacher) => {
            if verbose {
                println!(":: Window cache: {}", cacher.dir().display());
            }
            println!("\x1b[0;92m    -> Window cache OK \x1b[0m");
        }
        Err(err) => problems.push(format!("Window cache unavailable: {err}")),
    }

    println!("\x1b[0;94m::\x1b[0m Checking values . . .");
    problems.extend(config.check(verbose));
    if problems.is_empty() {
        println!("\x1b[0;92m    -> All values OK \x1b[0m");
        return Ok(());
    }
    for problem in &problems {
        println!("\x1b[1;91mERROR: {problem}\x1b[0m");
    }
    bail!("{} problem(s) found", problems.len())
}
