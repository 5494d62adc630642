//! Command-line binary for the glimmer particle swarm engine.

use std::path::Path;

use glimmer::options::Options;
use glimmer::Viewer;
use web_time::Duration;

/// Parsed command-line configuration.
struct CliArgs {
    options_path: Option<String>,
    seed: Option<u64>,
    seconds: Option<u64>,
    interval_secs: u64,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        options_path: None,
        seed: None,
        seconds: None,
        interval_secs: 3,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" => {
                parsed.options_path =
                    Some(args.next().ok_or("--options needs a path")?);
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a number")?;
                parsed.seed =
                    Some(value.parse().map_err(|_| "invalid --seed value")?);
            }
            "--seconds" => {
                let value = args.next().ok_or("--seconds needs a number")?;
                parsed.seconds =
                    Some(value.parse().map_err(|_| "invalid --seconds value")?);
            }
            "--interval" => {
                let value = args.next().ok_or("--interval needs a number")?;
                parsed.interval_secs =
                    value.parse().map_err(|_| "invalid --interval value")?;
            }
            other => {
                return Err(format!("unrecognized argument: {other}"));
            }
        }
    }
    Ok(parsed)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!(
                "{e}\nUsage: glimmer [--options <toml>] [--seed <n>] \
                 [--seconds <n>] [--interval <secs>]"
            );
            std::process::exit(1);
        }
    };

    let options = match &args.options_path {
        Some(path) => match Options::load(Path::new(path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut builder = Viewer::builder()
        .with_options(options)
        .with_gesture_interval(Duration::from_secs(args.interval_secs))
        .with_stdin_gestures(true);
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }
    if let Some(seconds) = args.seconds {
        builder = builder.run_for(Duration::from_secs(seconds));
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
