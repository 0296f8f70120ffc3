use crate::config::{ViewConfig, load_config};
use crate::genome::{gene_midpoints, kegg_category, main_canvas_height, max_genome_length};
use crate::ir::{GenomeData, Scene};
use crate::layout::{ArrowStyle, resolve_label_decisions};
use crate::layout_dump::{VisibilityDump, write_visibility_dump};
use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gvl", version, about = "Genome-view label and layout helpers")]
pub struct Args {
    /// Config file (JSON or JSON5)
    #[arg(short = 'c', long = "configFile", global = true)]
    pub config: Option<PathBuf>,

    /// More logging (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decide which gene labels stay visible
    Labels(LabelsArgs),
    /// Summarize genome data: canvas height, longest genome, gene midpoints
    Genomes(GenomesArgs),
}

#[derive(ClapArgs, Debug)]
pub struct LabelsArgs {
    /// Scene file (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Arrow style code (1 default, 2 narrow, 3 pentagon, 4 rectangle)
    #[arg(short = 'a', long = "arrowStyle")]
    pub arrow_style: Option<u8>,
}

#[derive(ClapArgs, Debug)]
pub struct GenomesArgs {
    /// Genome data file (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Also print gene midpoints for this gene cluster
    #[arg(short = 'g', long = "geneCluster")]
    pub gene_cluster: Option<String>,

    /// Also print the KEGG category of this class annotation
    #[arg(short = 'k', long = "kegg")]
    pub kegg: Option<String>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Labels(labels) => run_labels(&labels, &config),
        Command::Genomes(genomes) => {
            let input = read_input(genomes.input.as_deref())?;
            let data: GenomeData = serde_json::from_str(&input)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_genome_summary(&mut out, &data, &config, genomes.gene_cluster.as_deref())?;
            if let Some(annotation) = genomes.kegg.as_deref() {
                write_kegg_category(&mut out, annotation, &config)?;
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();
}

fn run_labels(args: &LabelsArgs, config: &ViewConfig) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let scene: Scene = serde_json::from_str(&input)?;
    let style = pick_arrow_style(args.arrow_style, &scene, config)?;
    log::info!(
        "resolving {} labels against {} glyphs with {:?} arrows (style {})",
        scene.labels.len(),
        scene.glyphs.len(),
        style,
        style.code()
    );
    let decisions = resolve_label_decisions(&scene.labels, &scene.glyphs, style)?;
    let dump = VisibilityDump::from_decisions(&scene.labels, &decisions, style);
    log::info!(
        "{} labels shown, {} hidden",
        dump.summary.visible,
        dump.summary.hidden()
    );
    write_visibility_dump(&dump, args.output.as_deref())
}

/// Command line beats the scene file, which beats the config file.
fn pick_arrow_style(flag: Option<u8>, scene: &Scene, config: &ViewConfig) -> Result<ArrowStyle> {
    if let Some(code) = flag {
        return ArrowStyle::from_code(code)
            .ok_or_else(|| anyhow::anyhow!("Unknown arrow style code {}", code));
    }
    Ok(scene.arrow_style.unwrap_or(config.arrow_style))
}

fn write_genome_summary<W: Write>(
    out: &mut W,
    data: &GenomeData,
    config: &ViewConfig,
    gene_cluster: Option<&str>,
) -> Result<()> {
    writeln!(out, "genomes: {}", data.genomes.len())?;
    writeln!(out, "max genome length: {}", max_genome_length(data))?;
    writeln!(
        out,
        "canvas height: {}",
        main_canvas_height(data.genomes.len(), config)
    )?;
    for (genome_id, entry) in &data.genomes {
        let calls = &entry.genes.gene_calls;
        let gene_nt: u64 = calls.values().map(|gene| gene.length()).sum();
        writeln!(out, "  {genome_id}: {} genes, {gene_nt} nt", calls.len())?;
    }
    let Some(gene_cluster) = gene_cluster else {
        return Ok(());
    };
    writeln!(out, "gene cluster {gene_cluster}:")?;
    for (genome_id, _) in &data.genomes {
        match gene_midpoints(data, genome_id, gene_cluster)? {
            Some(mids) => {
                let mids: Vec<String> = mids.iter().map(|mid| mid.to_string()).collect();
                writeln!(out, "  {genome_id}: {}", mids.join(", "))?;
            }
            None => writeln!(out, "  {genome_id}: -")?,
        }
    }
    Ok(())
}

fn write_kegg_category<W: Write>(out: &mut W, annotation: &str, config: &ViewConfig) -> Result<()> {
    let category = kegg_category(Some(annotation), &config.kegg_categories).unwrap_or("-");
    writeln!(out, "kegg category: {category}")?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(std::fs::read_to_string(path)?);
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
