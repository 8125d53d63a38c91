use clap::{Args, Parser};

/// Split the current directory into stored zip archives of bounded size,
/// written to the parent directory as <stem>001.zip, <stem>002.zip, ...
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub split: SplitArgs,

    /// Log every listed file and sealed batch.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Archive name prefix; defaults to the current directory's name.
    #[arg(long, value_name = "NAME")]
    pub stem: Option<String>,
}
