use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "simple-calc", version)]
#[command(about = "A minimal interactive calculator that adds two numbers")]
pub struct CliConfig {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// 多餘的參數一律忽略，不影響退出碼
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}
