use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Compare per-provider token usage from promptfoo eval results")]
pub struct Args {
    /// Path to the promptfoo results JSON file
    #[arg(default_value = "results.json")]
    pub results_file: PathBuf,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
