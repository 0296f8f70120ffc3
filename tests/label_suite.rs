use std::path::Path;

use genomeview_layout::{
    ArrowStyle, GenomeData, GlyphBox, LabelBox, Rect, Scene, gene_midpoints, main_canvas_height,
    max_genome_length, resolve_label_visibility, ViewConfig,
};
use proptest::prelude::*;

fn load_fixture(rel: &str) -> (Scene, Vec<bool>) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    let mut value: serde_json::Value = serde_json::from_str(&input).expect("fixture parse failed");
    let expected: Vec<bool> =
        serde_json::from_value(value["expected"].take()).expect("fixture needs `expected`");
    let scene: Scene = serde_json::from_value(value).expect("fixture scene invalid");
    (scene, expected)
}

#[test]
fn resolve_all_fixtures() {
    // Keep this list explicit so new scenes must be added intentionally.
    let candidates = [
        "disjoint.json",
        "pair_overlap.json",
        "anchor_hold.json",
        "pentagon.json",
        "two_rows.json",
        "empty.json",
    ];

    for rel in candidates {
        let (scene, expected) = load_fixture(rel);
        let style = scene.arrow_style.unwrap_or_default();
        let visible = resolve_label_visibility(&scene.labels, &scene.glyphs, style)
            .unwrap_or_else(|err| panic!("{rel}: {err}"));
        assert_eq!(visible, expected, "{rel}: unexpected visibility");
    }
}

#[test]
fn genome_fixture_helpers() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let input = std::fs::read_to_string(root.join("genomes.json")).expect("fixture read failed");
    let data: GenomeData = serde_json::from_str(&input).expect("genome data invalid");

    assert_eq!(max_genome_length(&data), 5100);
    assert_eq!(
        main_canvas_height(data.genomes.len(), &ViewConfig::default()),
        250.0
    );
    assert_eq!(
        gene_midpoints(&data, "E_coli_K12", "GC_00000001").unwrap(),
        Some(vec![600.0, 3200.0])
    );
    assert_eq!(
        gene_midpoints(&data, "S_enterica", "GC_00000001").unwrap(),
        None
    );
    assert_eq!(
        gene_midpoints(&data, "E_coli_O157", "GC_00000002").unwrap(),
        None
    );
    assert!(gene_midpoints(&data, "E_coli_K12", "GC_missing").is_err());
}

/// A single genome row: labels sorted by left edge, glyph per label.
fn row_strategy() -> impl Strategy<Value = (Vec<LabelBox>, Vec<GlyphBox>)> {
    prop::collection::vec((0.0f32..40.0, 1.0f32..60.0, 1.0f32..40.0), 0..40).prop_map(|genes| {
        let mut x = 0.0;
        let mut labels = Vec::with_capacity(genes.len());
        let mut glyphs = Vec::with_capacity(genes.len());
        for (gap, label_w, glyph_w) in genes {
            x += gap;
            labels.push(LabelBox::new(Rect::new(x, 0.0, label_w, 12.0)));
            glyphs.push(GlyphBox::new(Rect::new(x, 14.0, glyph_w, 10.0)));
        }
        (labels, glyphs)
    })
}

fn style_strategy() -> impl Strategy<Value = ArrowStyle> {
    prop_oneof![
        Just(ArrowStyle::Default),
        Just(ArrowStyle::Narrow),
        Just(ArrowStyle::Pentagon),
        Just(ArrowStyle::Rectangle),
    ]
}

proptest! {
    #[test]
    fn resolving_twice_gives_the_same_answer(
        (labels, glyphs) in row_strategy(),
        style in style_strategy(),
    ) {
        let first = resolve_label_visibility(&labels, &glyphs, style).unwrap();
        let second = resolve_label_visibility(&labels, &glyphs, style).unwrap();
        prop_assert_eq!(first.len(), labels.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn visible_labels_never_overlap(
        (labels, glyphs) in row_strategy(),
        style in style_strategy(),
    ) {
        let visible = resolve_label_visibility(&labels, &glyphs, style).unwrap();
        let shown: Vec<&LabelBox> = labels
            .iter()
            .zip(&visible)
            .filter(|(_, v)| **v)
            .map(|(label, _)| label)
            .collect();
        for (i, a) in shown.iter().enumerate() {
            for b in &shown[i + 1..] {
                prop_assert!(
                    !a.bounds.intersects(&b.bounds),
                    "visible labels {:?} and {:?} overlap",
                    a.bounds,
                    b.bounds
                );
            }
        }
    }

    #[test]
    fn first_label_is_shown_unless_clipped(
        (labels, glyphs) in row_strategy(),
        style in style_strategy(),
    ) {
        prop_assume!(!labels.is_empty());
        let visible = resolve_label_visibility(&labels, &glyphs, style).unwrap();
        let clipped = style == ArrowStyle::Pentagon
            && labels[0].width() / 2.0 > glyphs[0].width();
        prop_assert_eq!(visible[0], !clipped);
    }

    #[test]
    fn clipped_labels_are_always_hidden(
        (labels, glyphs) in row_strategy(),
    ) {
        let visible = resolve_label_visibility(&labels, &glyphs, ArrowStyle::Pentagon).unwrap();
        for ((label, glyph), shown) in labels.iter().zip(&glyphs).zip(&visible) {
            if label.width() / 2.0 > glyph.width() {
                prop_assert!(!shown);
            }
        }
    }
}
