use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::translation::LanguageTag;

#[derive(Parser, Debug)]
#[command(name = "translate")]
#[command(about = "Translate the strings of JSON, YAML and HTML documents")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Document to translate (JSON, YAML or HTML)
    #[arg(short = 'i', long, required_unless_present = "list_languages")]
    pub input: Option<PathBuf>,

    /// Where to save the translation (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Source language tag (BCP-47, e.g. en, fr, zh-TW) [default: en]
    #[arg(short = 's', long)]
    pub source: Option<LanguageTag>,

    /// Target language tag (BCP-47, e.g. en, fr, zh-TW) [default: en]
    #[arg(short = 't', long)]
    pub target: Option<LanguageTag>,

    /// List supported languages and exit
    #[arg(short = 'l', long)]
    pub list_languages: bool,

    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}
