use anyhow::{bail, Context, Result};
use gtfs_feed::{Feed, GtfsReader};

const USAGE: &str = "usage: gtfs-inspect [--tolerant] [--skip-stop-times] [--json] <gtfs directory or zip>";

#[derive(Debug, Default)]
struct Options {
    path: Option<String>,
    tolerant: bool,
    skip_stop_times: bool,
    json: bool,
}

fn parse_args() -> Result<Options> {
    let mut options = Options::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--tolerant" => options.tolerant = true,
            "--skip-stop-times" => options.skip_stop_times = true,
            "--json" => options.json = true,
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
            _ if options.path.is_some() => bail!("only one feed can be read\n{}", USAGE),
            path => options.path = Some(path.to_owned()),
        }
    }
    Ok(options)
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args()?;
    let path = match &options.path {
        Some(path) => path,
        None => bail!(USAGE),
    };

    let feed: Feed = GtfsReader::new(!options.tolerant)
        .read_stop_times(!options.skip_stop_times)
        .read_from_path(path)
        .with_context(|| format!("impossible to read gtfs {}", path))?;
    log::info!("read {} in {} ms", path, feed.read_duration);

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&feed).context("impossible to serialize the feed")?
        );
    } else {
        feed.print_stats();
    }
    Ok(())
}
