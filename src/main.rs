use clap::Parser;
use env_logger::Env;
use pointlut::{console::Args, error::LutResult};

fn main() -> LutResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    //parse CLI arguments and run the resulting jobs
    Args::parse().run()
}
