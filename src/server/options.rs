use clap::Parser;

/// Workspace registry served as JSON, with ETag based conditional requests.
#[derive(Clone, Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ServerOptions {
    /// A bind address. The default value is 0.0.0.0
    #[clap(short, long, default_value = "0.0.0.0")]
    pub bind_addr: String,
    /// The port number that the server will listen to. The default value is 8080
    #[clap(short, long, default_value = "8080")]
    pub port: u16,
}


pub fn parse_options() -> ServerOptions {
    Parser::parse()
}
