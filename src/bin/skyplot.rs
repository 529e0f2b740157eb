use camino::Utf8PathBuf;
use clap::Parser;

use skyplot::catalogs::{
    read_constellation_figures, read_dsos, read_milky_way, read_object_list, read_stars,
};
use skyplot::milky_way::MilkyWaySky;
use skyplot::skyplot_errors::SkyplotError;
use skyplot::star_chart::StarChart;
use skyplot::surface::SvgSurface;

#[derive(Parser)]
#[command(name = "skyplot")]
#[command(about = "Render a star chart marking a list of deep-sky objects", long_about = None)]
struct Cli {
    /// File with one object designation per line
    #[arg(short = 'i', long, value_name = "FILE")]
    object_ids: Utf8PathBuf,

    /// Output SVG file
    #[arg(short, long, value_name = "FILE")]
    output: Utf8PathBuf,

    /// Directory holding the star, object, figure and milky way catalogs
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data_dir: Utf8PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn main() -> Result<(), SkyplotError> {
    env_logger::init();
    let cli = Cli::parse();

    let stars = read_stars(&cli.data_dir.join("stars.tsv"))?;
    let figures = read_constellation_figures(&cli.data_dir.join("constellation_lines.tsv"))?;
    let milky_way = MilkyWaySky::from_raw_layers(read_milky_way(
        &cli.data_dir.join("milkyway.json"),
    )?);
    let objects = read_dsos(&cli.data_dir.join("objects.tsv"))?;
    let targets = read_object_list(&cli.object_ids)?;

    log::info!(
        "loaded {} stars, {} figures and {} objects; plotting {} targets",
        stars.len(),
        figures.len(),
        objects.len(),
        targets.len()
    );

    let chart = StarChart::new(cli.width, cli.height, stars, figures, milky_way, objects, targets);
    let mut surface = SvgSurface::new(cli.width, cli.height);
    let report = chart.render(&mut surface)?;
    if !report.missing_objects.is_empty() {
        log::warn!(
            "{} target(s) were not in the object catalog: {}",
            report.missing_objects.len(),
            report.missing_objects.join(", ")
        );
    }

    svg::save(cli.output.as_std_path(), &surface.into_document())?;
    log::info!("wrote {}", cli.output);
    Ok(())
}
