use std::path::PathBuf;

use clap::Parser;

use crate::core::snapshot::MalformedPolicy;
use crate::core::view_model::ArrayDisplay;
use crate::runtime::command::Command;
use crate::source::SourceKind;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "storage-viewer")]
#[command(version)]
#[command(about = "Browse a key-value store and drill into the JSON held in its values")]
#[command(long_about = None)]
pub struct Cli {
    /// JSON object file or directory of value files.
    pub source: Option<PathBuf>,

    /// YAML config file; flags given here override it.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub kind: Option<SourceKind>,

    /// Label of the first breadcrumb.
    #[arg(long)]
    pub root_label: Option<String>,

    #[arg(long, value_enum)]
    pub on_malformed: Option<MalformedPolicy>,

    #[arg(long, value_enum)]
    pub array_display: Option<ArrayDisplay>,

    /// Rows of the panel content region.
    #[arg(long)]
    pub panel_height: Option<u16>,

    /// Start with the viewer closed.
    #[arg(long)]
    pub closed: bool,

    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the composed frame as JSON instead of running interactively.
    #[arg(long)]
    pub dump: bool,

    /// Navigation steps applied after opening: a key drills in, `..` pops
    /// one level, `#N` pops to breadcrumb N.
    #[arg(long = "navigate", value_name = "STEP", num_args = 1..)]
    pub navigate: Vec<String>,

    /// Frame width for --dump.
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Frame height for --dump.
    #[arg(long, default_value_t = 24)]
    pub height: u16,
}

pub fn parse_step(step: &str) -> Command {
    if step == ".." {
        return Command::PopLevel;
    }
    match step.strip_prefix('#').map(str::parse::<usize>) {
        Some(Ok(index)) => Command::PopTo(index),
        _ => Command::DrillInto(step.to_string()),
    }
}
