use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("relayout")
        .about("Snapshot window positions and restore them later")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("PATH")
                .help("Layout file to use instead of the configured one")
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .about("List open windows that are not saved yet")
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Include windows that are already saved")
                        .action(ArgAction::SetTrue),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("saved")
                .about("List saved window layouts")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("save")
                .about("Save the current position and size of windows")
                .arg(
                    Arg::new("titles")
                        .value_name("TITLE")
                        .help("Exact window titles to save")
                        .num_args(1..)
                        .required(true),
                )
                .arg(
                    Arg::new("position-only")
                        .long("position-only")
                        .help("Restore only the position, never the size")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("open-method")
                        .long("open-method")
                        .value_name("METHOD")
                        .help("How to launch the app if its window is closed")
                        .value_parser([
                            "auto",
                            "none",
                            "raw",
                            "hyphenated",
                            "concatenated",
                            "start",
                        ])
                        .default_value("auto"),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove saved window layouts")
                .arg(
                    Arg::new("titles")
                        .value_name("TITLE")
                        .help("Saved titles to remove")
                        .num_args(1..)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("restore")
                .about("Apply all saved layouts, launching closed apps")
                .arg(
                    Arg::new("attempts")
                        .long("attempts")
                        .value_name("N")
                        .help("Poll attempts while waiting for a launched window")
                        .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new("interval-ms")
                        .long("interval-ms")
                        .value_name("MS")
                        .help("Delay between poll attempts in milliseconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(json_arg()),
        )
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output as JSON")
        .action(ArgAction::SetTrue)
}
