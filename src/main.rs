// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::logging;

const HELP: &str = "\
iced_toast - toast notification playground

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --position <POS>       top-left | top-center | top-right |
                         bottom-left | bottom-center | bottom-right
  --auto-close-ms <MS>   auto-close delay, 0 disables
  --no-progress          hide the countdown bar
  --no-close             do not close toasts on click
  --pause-on-hover       freeze the countdown under the cursor
  --theme <MODE>         light | dark | system
  --config <PATH>        settings file (default: platform config dir)
  -v, --verbose          debug logging (RUST_LOG takes precedence)
  -h, --help             print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        verbose: args.contains(["-v", "--verbose"]),
        no_progress: args.contains("--no-progress"),
        no_close: args.contains("--no-close"),
        pause_on_hover: args.contains("--pause-on-hover"),
        position: args.opt_value_from_str("--position")?,
        auto_close_ms: args.opt_value_from_str("--auto-close-ms")?,
        theme_mode: args.opt_value_from_str("--theme")?,
        config_path: args.opt_value_from_str("--config")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {remaining:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(flags.verbose);
    app::run(flags)
}
