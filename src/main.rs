use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};
use vtcli::cli::commands::{execute_command, report_error};
use vtcli::cli::Cli;
use vtcli::exitcode;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() {
                exitcode::FAILURE
            } else {
                exitcode::OK
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        report_error(&e);
        process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // stdout carries step output, so logs always go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtcli::util::testing;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        testing::init_test_setup();
        Cli::command().debug_assert();
    }

    #[test]
    fn given_step_flags_after_file_when_parsing_then_kept_verbatim() {
        let cli = Cli::try_parse_from([
            "vtcli", "-d", "doc.xml", "-n", "a", "-np", "b", "x", "1", "--read", "x", "-l", "-x",
        ])
        .unwrap();

        assert_eq!(cli.debug, 1);
        assert_eq!(cli.file(), Some(std::path::Path::new("doc.xml")));
        assert_eq!(
            cli.steps(),
            ["-n", "a", "-np", "b", "x", "1", "--read", "x", "-l", "-x"]
        );
    }

    #[test]
    fn given_debug_flag_after_file_when_parsing_then_it_is_a_step_token() {
        let cli = Cli::try_parse_from(["vtcli", "doc.xml", "-d"]).unwrap();

        assert_eq!(cli.debug, 0);
        assert_eq!(cli.steps(), ["-d"]);
    }

    #[test]
    fn given_own_flags_after_file_when_parsing_then_passed_to_step_parser() {
        for token in ["-h", "--help", "--version", "-V", "--debug", "--config", "--completion"] {
            let cli = Cli::try_parse_from(["vtcli", "doc.xml", token, "x.toml"])
                .unwrap_or_else(|e| panic!("{} intercepted: {}", token, e));

            assert_eq!(cli.debug, 0, "{}", token);
            assert!(cli.config.is_none(), "{}", token);
            assert!(cli.completion.is_none(), "{}", token);
            assert_eq!(cli.steps(), [token, "x.toml"]);
        }
    }

    #[test]
    fn given_no_arguments_when_parsing_then_file_is_missing() {
        let cli = Cli::try_parse_from(["vtcli"]).unwrap();
        assert!(cli.file().is_none());
        assert!(cli.steps().is_empty());
    }
}
