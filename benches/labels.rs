use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use genomeview_layout::layout::{
    ArrowStyle, GlyphBox, LabelBox, Rect, resolve_label_decisions,
};
use std::hint::black_box;

/// One genome row of `genes` labels with a deterministic mix of widths so
/// that roughly a third of neighbours collide.
fn dense_row(genes: usize) -> (Vec<LabelBox>, Vec<GlyphBox>) {
    let mut labels = Vec::with_capacity(genes);
    let mut glyphs = Vec::with_capacity(genes);
    for i in 0..genes {
        let x = i as f32 * 24.0;
        let label_w = 18.0 + (i % 5) as f32 * 6.0;
        let glyph_w = 8.0 + (i % 7) as f32 * 3.0;
        labels.push(LabelBox::new(Rect::new(x, 0.0, label_w, 12.0)));
        glyphs.push(GlyphBox::new(Rect::new(x, 14.0, glyph_w, 10.0)));
    }
    (labels, glyphs)
}

fn bench_label_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_visibility");
    for genes in [100usize, 1_000, 10_000] {
        let row = dense_row(genes);
        for style in [ArrowStyle::Default, ArrowStyle::Pentagon] {
            group.bench_with_input(
                BenchmarkId::new(format!("{style:?}").to_lowercase(), genes),
                &row,
                |b, (labels, glyphs)| {
                    b.iter(|| {
                        let decisions =
                            resolve_label_decisions(black_box(labels), black_box(glyphs), style)
                                .expect("aligned input");
                        black_box(decisions);
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_label_visibility);
criterion_main!(benches);
