#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod genome;
pub mod ir;
pub mod layout;
pub mod layout_dump;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{ViewConfig, load_config};
pub use genome::{
    GenomeError, gene_midpoints, genes_of_gene_cluster, kegg_category, kegg_class,
    main_canvas_height, max_genome_length,
};
pub use ir::{GeneCall, GenomeData, Scene};
pub use layout::{
    ArrowStyle, CanvasGlyph, CanvasLabel, GlyphBox, LabelBox, LabelDecision, LayoutError, Rect,
    VisibilitySummary, apply_label_visibility, resolve_label_decisions, resolve_label_visibility,
};
