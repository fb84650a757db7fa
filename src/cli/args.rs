//! CLI argument definitions using clap

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueHint};

/// Reference for the step flags; printed on usage errors and after `--help`.
pub const STEPS_HELP: &str = "\
vtcli <xml_file_name> options ...
--node-name (or -n) <name> (repeat as required to navigate the tree)
--node-index (or -i) <number> (select a child by position instead of name)
-np <node_name> <property> <value_to_match> (select the child whose property equals a value)
--read <name_of_property>
--write <name_of_property> <value_to_write>
--list-nodes (show all child nodes)
--list-properties (show all property names)
-l (list nodes and properties, handy for debugging)
-x (show the XML from this point in the tree)

Example: vtcli file.xml --node-name \"tag\" --node-name \"subtag\" --read \"size\"";

/// Scriptable navigator and editor for attributed XML trees
#[derive(Parser, Debug)]
#[command(name = "vtcli")]
#[command(author, version, about, long_about = None)]
#[command(after_help = STEPS_HELP)]
pub struct Cli {
    /// Debug logging on stderr (repeat for more: -d -d -d)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    pub debug: u8,

    /// Additional config file, applied after global and local config
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Generate shell completions and exit
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// XML document (relative to the current directory) followed by the step chain
    ///
    /// Everything after the document name is kept verbatim, including tokens
    /// that look like vtcli's own flags.
    #[arg(
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// XML document to navigate.
    pub fn file(&self) -> Option<&Path> {
        self.args.first().map(Path::new)
    }

    /// Step tokens following the document name.
    pub fn steps(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }
}
