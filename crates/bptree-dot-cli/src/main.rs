use bptree_dot_cli::cli::output::{OutputConfig, Styled};
use bptree_dot_cli::cli::{render_cmd, Cli};
use bptree_dot_cli::logging;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let out = OutputConfig::from_cli(&cli);
    logging::init(&out);

    if let Err(err) = render_cmd::run(&cli, &out) {
        let s = Styled::new(out.color);
        eprintln!("{} {err:#}", s.fail_sym());
        std::process::exit(1);
    }
}
