// Gene label visibility: hide labels so that no two visible labels overlap.
// Everything here works on plain rectangles; the live canvas objects are
// only touched by `apply_label_visibility` at the very end.

use super::{
    ArrowStyle, CanvasGlyph, CanvasLabel, GlyphBox, LabelBox, LabelDecision, LayoutError,
    VisibilitySummary,
};
use log::{debug, warn};

/// A label is clipped by a pentagon arrow once half of its width exceeds
/// the arrow's width.
const GLYPH_FIT_DIVISOR: f32 = 2.0;

fn overflows_glyph(label: &LabelBox, glyph: &GlyphBox) -> bool {
    label.width() / GLYPH_FIT_DIVISOR > glyph.width()
}

fn check_alignment(labels: usize, glyphs: usize, style: ArrowStyle) -> Result<(), LayoutError> {
    if style.constrains_labels() && labels != glyphs {
        warn!(
            "label/glyph sequences are misaligned for {:?} arrows: {} labels, {} glyphs",
            style, labels, glyphs
        );
        return Err(LayoutError::MisalignedInput { labels, glyphs });
    }
    Ok(())
}

/// Decide, for every label in display order, whether it is shown and why
/// not when it is hidden.
///
/// Labels are scanned left to right. The most recent shown label is the
/// anchor; each later candidate that intersects the anchor is hidden and
/// the anchor stays put. The first candidate clear of the anchor is shown
/// and becomes the new anchor. With [`ArrowStyle::Pentagon`], a label too
/// wide for its own arrow is hidden up front and never becomes an anchor.
///
/// `glyphs` is only read for pentagon arrows; for every other style it may
/// be empty. Display order is assumed to be non-decreasing left edge within
/// a row, which is what makes checking against the anchor alone enough to
/// keep every pair of shown labels disjoint.
pub fn resolve_label_decisions(
    labels: &[LabelBox],
    glyphs: &[GlyphBox],
    style: ArrowStyle,
) -> Result<Vec<LabelDecision>, LayoutError> {
    check_alignment(labels.len(), glyphs.len(), style)?;

    let mut decisions = Vec::with_capacity(labels.len());
    let mut anchor: Option<&LabelBox> = None;
    for (idx, label) in labels.iter().enumerate() {
        if style.constrains_labels() && overflows_glyph(label, &glyphs[idx]) {
            decisions.push(LabelDecision::Glyph);
            continue;
        }
        match anchor {
            Some(current) if current.bounds.intersects(&label.bounds) => {
                decisions.push(LabelDecision::Overlap);
            }
            _ => {
                decisions.push(LabelDecision::Shown);
                anchor = Some(label);
            }
        }
    }

    if log::log_enabled!(log::Level::Debug) {
        let summary = VisibilitySummary::from_decisions(&decisions);
        debug!(
            "label visibility ({:?}): {} shown, {} hidden by glyph width, {} hidden by overlap",
            style, summary.visible, summary.hidden_by_glyph, summary.hidden_by_overlap
        );
    }
    Ok(decisions)
}

/// Show/hide flags for every label, index-aligned with `labels`.
pub fn resolve_label_visibility(
    labels: &[LabelBox],
    glyphs: &[GlyphBox],
    style: ArrowStyle,
) -> Result<Vec<bool>, LayoutError> {
    let decisions = resolve_label_decisions(labels, glyphs, style)?;
    Ok(decisions.into_iter().map(LabelDecision::is_visible).collect())
}

/// Resolve visibility for live canvas objects and write the result back.
///
/// Nothing is mutated when the inputs are rejected.
pub fn apply_label_visibility<L, G>(
    labels: &mut [L],
    glyphs: &[G],
    style: ArrowStyle,
) -> Result<VisibilitySummary, LayoutError>
where
    L: CanvasLabel,
    G: CanvasGlyph,
{
    let label_boxes: Vec<LabelBox> = labels
        .iter()
        .map(|label| LabelBox::new(label.bounds()))
        .collect();
    let glyph_boxes: Vec<GlyphBox> = if style.constrains_labels() {
        glyphs
            .iter()
            .map(|glyph| GlyphBox::new(glyph.bounds()))
            .collect()
    } else {
        Vec::new()
    };

    let decisions = resolve_label_decisions(&label_boxes, &glyph_boxes, style)?;
    for (label, decision) in labels.iter_mut().zip(&decisions) {
        label.set_visible(decision.is_visible());
    }
    Ok(VisibilitySummary::from_decisions(&decisions))
}
