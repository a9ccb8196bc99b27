// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_folio - personal portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --theme <light|dark|system>  Force the theme for this session
  --endpoint <URL>             Deliver contact messages to this endpoint
  --config-dir <DIR>           Directory holding settings.toml
  --data-dir <DIR>             Directory holding the state file
  -h, --help                   Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_folio=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
