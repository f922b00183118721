use std::net::IpAddr;

use clap::Parser;

/// structedit-demo: serve an example record for viewing and editing
#[derive(Parser, Debug)]
#[command(name = "structedit-demo")]
#[command(about = "Serve an example company record as an editable web page", long_about = None)]
pub struct Cli {
    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Serve a plain copy of the record: the page shows no edit controls
    #[arg(long, default_value_t = false)]
    pub read_only: bool,
}

impl Cli {
    /// Parse CLI arguments from the environment
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
