use std::env;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fern::Dispatch::new()
        .format(|out, message, record|
            out.finish(format_args!("{}: {}", record.level(), message))
        ).level(log::LevelFilter::Debug).chain(std::io::stderr()).apply()?;

    let args: Vec<_> = env::args().collect();
    if args.len() != 3 {
        println!("Usage:\n\tsplit in.svg out-dir");
        std::process::exit(1);
    }

    let input_data = fs::read_to_string(&args[1])?;
    let decomposition = svgparts::decompose(&input_data)?;

    let out_dir = Path::new(&args[2]);
    fs::create_dir_all(out_dir)?;

    for (i, fragment) in decomposition.fragments.iter().enumerate() {
        let path = out_dir.join(format!("{:03}-{}.svg", i, fragment.kind));
        fs::write(&path, &fragment.svg)?;
        println!("{}", path.display());
    }

    Ok(())
}
