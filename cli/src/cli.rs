use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "webcmd",
    about = "Browser-hosted Windows Command Prompt emulator",
    version
)]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1", env = "WEBCMD_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080, env = "WEBCMD_PORT")]
    pub port: u16,
}
