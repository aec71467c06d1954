mod cipher;
mod error;
mod files;
mod options;

use options::Options;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Parse, read, transform, write. Each step fails before the next starts,
/// so a bad read or an unshiftable character never touches the output path.
fn run(args: &[String]) -> anyhow::Result<()> {
    let opts = Options::parse(args)?;
    let text = files::resolve_input(&opts.input)?;
    let transformed = opts.algorithm.apply(opts.mode, &text, opts.key)?;
    files::write_output(&opts.output, &transformed)?;
    Ok(())
}
