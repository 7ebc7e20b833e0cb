use platoon_planner::cli::{parse_args, USAGE};
use platoon_planner::run;
use std::env;

fn usage() -> ! {
    eprintln!("{USAGE}");
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let Some(opts) = parse_args(env::args().skip(1))? else {
        usage();
    };
    if let Err(err) = run(opts) {
        println!("Error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}
