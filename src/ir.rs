use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::{ArrowStyle, GlyphBox, LabelBox};

pub type GeneId = u64;

/// Association source holding the pangenome gene clusters.
pub const PANGENOME_ASSOCIATIONS: &str = "anvio-pangenome";
/// Association table mapping gene cluster -> genome -> genes.
pub const GENE_CLUSTER_TABLE: &str = "gene-cluster-name-to-genomes-and-genes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneCall {
    pub start: u64,
    pub stop: u64,
    #[serde(default)]
    pub direction: Option<Strand>,
}

impl GeneCall {
    pub fn length(&self) -> u64 {
        self.stop.saturating_sub(self.start)
    }

    pub fn midpoint(&self) -> f64 {
        self.start as f64 + (self.stop as f64 - self.start as f64) / 2.0
    }
}

/// Gene direction as written by the gene caller. Unrecognized values are
/// kept verbatim instead of rejecting the genome file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strand {
    Forward,
    Reverse,
    Other(String),
}

impl From<String> for Strand {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "f" | "forward" => Self::Forward,
            "r" | "reverse" => Self::Reverse,
            _ => Self::Other(raw),
        }
    }
}

impl From<Strand> for String {
    fn from(strand: Strand) -> Self {
        match strand {
            Strand::Forward => "f".to_string(),
            Strand::Reverse => "r".to_string(),
            Strand::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneTable {
    #[serde(default)]
    pub gene_calls: BTreeMap<GeneId, GeneCall>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenomeEntry {
    #[serde(default)]
    pub genes: GeneTable,
}

/// gene cluster -> genome id -> gene ids
pub type GeneClusterTable = BTreeMap<String, BTreeMap<String, Vec<GeneId>>>;

/// Genome-view data store. `genomes` keeps the display order of the rows;
/// on the wire each genome is a `[id, entry]` pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenomeData {
    #[serde(default)]
    pub genomes: Vec<(String, GenomeEntry)>,
    #[serde(default)]
    pub gene_associations: BTreeMap<String, BTreeMap<String, GeneClusterTable>>,
}

impl GenomeData {
    pub fn genome(&self, genome_id: &str) -> Option<&GenomeEntry> {
        self.genomes
            .iter()
            .find(|(id, _)| id == genome_id)
            .map(|(_, entry)| entry)
    }

    pub fn gene_clusters(&self) -> Option<&GeneClusterTable> {
        self.gene_associations
            .get(PANGENOME_ASSOCIATIONS)
            .and_then(|assoc| assoc.get(GENE_CLUSTER_TABLE))
    }
}

/// One render pass worth of label and arrow rectangles, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub arrow_style: Option<ArrowStyle>,
    #[serde(default)]
    pub labels: Vec<LabelBox>,
    #[serde(default)]
    pub glyphs: Vec<GlyphBox>,
}
