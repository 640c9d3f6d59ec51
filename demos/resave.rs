use std::env;
use std::fs;

use svgparts::{Indent, ToStringWithOptions, WriteOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fern::Dispatch::new()
        .format(|out, message, record|
            out.finish(format_args!("{}: {}", record.level(), message))
        ).chain(std::io::stderr()).apply()?;

    let args: Vec<_> = env::args().collect();
    if args.len() != 3 {
        println!("Usage:\n\tresave in.svg out.svg");
        std::process::exit(1);
    }

    let input_data = fs::read_to_string(&args[1])?;
    let doc = svgparts::Document::parse(&input_data)?;

    let mut opt = WriteOptions::default();
    opt.indent = Indent::Spaces(2);

    fs::write(&args[2], doc.to_string_with_opt(&opt))?;

    Ok(())
}
