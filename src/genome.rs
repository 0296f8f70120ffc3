//! Genome-view helper routines: canvas sizing, gene cluster lookups and
//! KEGG annotation categories.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::ViewConfig;
use crate::ir::{GeneId, GenomeData};

/// Length of the `"Pathway modules; "` prefix carried by every KEGG class
/// annotation.
const KEGG_CLASS_PREFIX_LEN: usize = 17;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenomeError {
    #[error("unknown genome '{0}'")]
    UnknownGenome(String),
    #[error("unknown gene cluster '{0}'")]
    UnknownGeneCluster(String),
    #[error("genome '{genome}' has no gene call {gene}")]
    UnknownGene { genome: String, gene: GeneId },
}

/// Height of the main canvas for `genome_count` rows.
pub fn main_canvas_height(genome_count: usize, config: &ViewConfig) -> f32 {
    config.genome_spacing * genome_count as f32 + config.additional_spacing
}

/// Nucleotide length of the longest genome, measured as the furthest gene
/// stop position.
pub fn max_genome_length(data: &GenomeData) -> u64 {
    data.genomes
        .iter()
        .flat_map(|(_, entry)| entry.genes.gene_calls.values())
        .map(|gene| gene.stop)
        .max()
        .unwrap_or(0)
}

/// Gene ids of `genome_id` that belong to gene cluster `gene_cluster`.
///
/// `Ok(None)` means the genome has no gene in that cluster.
pub fn genes_of_gene_cluster<'a>(
    data: &'a GenomeData,
    genome_id: &str,
    gene_cluster: &str,
) -> Result<Option<&'a [GeneId]>, GenomeError> {
    let members = data
        .gene_clusters()
        .and_then(|clusters| clusters.get(gene_cluster))
        .ok_or_else(|| GenomeError::UnknownGeneCluster(gene_cluster.to_string()))?;
    Ok(members
        .get(genome_id)
        .map(Vec::as_slice)
        .filter(|genes| !genes.is_empty()))
}

/// Nucleotide position of the middle of each gene of `gene_cluster` in
/// `genome_id`, in the order the cluster lists them.
pub fn gene_midpoints(
    data: &GenomeData,
    genome_id: &str,
    gene_cluster: &str,
) -> Result<Option<Vec<f64>>, GenomeError> {
    let Some(genes) = genes_of_gene_cluster(data, genome_id, gene_cluster)? else {
        return Ok(None);
    };
    let genome = data
        .genome(genome_id)
        .ok_or_else(|| GenomeError::UnknownGenome(genome_id.to_string()))?;
    genes
        .iter()
        .map(|gene_id| {
            genome
                .genes
                .gene_calls
                .get(gene_id)
                .map(|gene| gene.midpoint())
                .ok_or_else(|| GenomeError::UnknownGene {
                    genome: genome_id.to_string(),
                    gene: *gene_id,
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Class name from a KEGG class annotation such as
/// `"Pathway modules; Carbohydrate metabolism; Central carbohydrate metabolism"`.
pub fn kegg_class(annotation: &str) -> Option<&str> {
    let rest = annotation.get(KEGG_CLASS_PREFIX_LEN..)?;
    let class = match rest.find(';') {
        Some(end) => &rest[..end],
        None => rest,
    };
    let class = class.trim();
    if class.is_empty() { None } else { Some(class) }
}

/// Category key whose class name matches the annotation's KEGG class.
pub fn kegg_category<'a>(
    annotation: Option<&str>,
    categories: &'a BTreeMap<String, String>,
) -> Option<&'a str> {
    let class = kegg_class(annotation?)?;
    categories
        .iter()
        .find(|(_, name)| name.as_str() == class)
        .map(|(key, _)| key.as_str())
}
