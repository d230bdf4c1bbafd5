// SPDX-License-Identifier: MPL-2.0
use iced_showcase::app::{self, Flags};
use iced_showcase::config::paths;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_showcase [OPTIONS] [MANIFEST]

Arguments:
  [MANIFEST]              Page manifest (TOML); the demo page when omitted

Options:
      --config-dir <DIR>  Read settings.toml from DIR
      --interval-ms <MS>  Slide interval in milliseconds
      --no-autoplay       Do not advance slides automatically
  -h, --help              Print help
";

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });
    let interval_ms: Option<u64> = args.opt_value_from_str("--interval-ms").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --interval-ms");
        None
    });
    let no_autoplay = args.contains("--no-autoplay");
    let manifest_path = match manifest_arg(args.finish()) {
        Ok(path) => path,
        Err(arg) => {
            eprintln!("error: unexpected argument '{arg}'\n");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(config_dir);

    app::run(Flags {
        manifest_path,
        interval_ms,
        no_autoplay,
    })
}

/// Picks the manifest path from the arguments pico-args left over.
///
/// Unknown flags and extra positionals are returned as the error.
fn manifest_arg(free: Vec<OsString>) -> Result<Option<PathBuf>, String> {
    let mut free = free.into_iter();
    let manifest = free.next();
    if let Some(arg) = &manifest {
        let text = arg.to_string_lossy();
        if text.starts_with('-') && text.len() > 1 {
            return Err(text.into_owned());
        }
    }
    if let Some(extra) = free.next() {
        return Err(extra.to_string_lossy().into_owned());
    }
    Ok(manifest.map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn single_positional_is_the_manifest() {
        assert_eq!(
            manifest_arg(free(&["page.toml"])),
            Ok(Some(PathBuf::from("page.toml")))
        );
        assert_eq!(manifest_arg(free(&[])), Ok(None));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert_eq!(
            manifest_arg(free(&["--interval", "5"])),
            Err("--interval".to_string())
        );
    }

    #[test]
    fn second_positional_is_rejected() {
        assert_eq!(
            manifest_arg(free(&["page.toml", "other.toml"])),
            Err("other.toml".to_string())
        );
    }
}
