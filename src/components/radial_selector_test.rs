use super::*;
use survey::RegionKey;

fn region() -> &'static Region {
    Region::by_key(RegionKey::SubLove)
}

// =============================================================
// Slice colours
// =============================================================

#[test]
fn plain_slice_is_white_with_coloured_text() {
    assert_eq!(sector_fill(region(), SectorVisual::Normal), "#ffffff");
    assert_eq!(text_fill(region(), SectorVisual::Normal), region().color);
}

#[test]
fn hovered_and_chosen_slices_take_region_colour() {
    for visual in [SectorVisual::Hovered, SectorVisual::Chosen] {
        assert_eq!(sector_fill(region(), visual), region().color);
        assert_eq!(text_fill(region(), visual), "#ffffff");
        assert_eq!(sector_fill_opacity(visual), "1");
    }
}

#[test]
fn dimmed_slice_keeps_plain_colours() {
    assert_eq!(sector_fill(region(), SectorVisual::Dimmed), "#ffffff");
    assert_eq!(sector_fill_opacity(SectorVisual::Dimmed), "0.92");
}

// =============================================================
// Slice transform
// =============================================================

#[test]
fn sector_style_scales_around_centre() {
    let style = sector_style(SectorVisual::Hovered);
    assert!(style.contains("transform-origin: 300px 300px"));
    assert!(style.contains("scale(1.15)"));
    assert!(style.contains("opacity: 1"));
}

#[test]
fn dimmed_style_fades_out() {
    let style = sector_style(SectorVisual::Dimmed);
    assert!(style.contains("scale(1)"));
    assert!(style.contains("opacity: 0.3"));
}

#[test]
fn style_uses_commit_transition_length() {
    assert!(sector_style(SectorVisual::Normal).contains("250ms"));
}

// =============================================================
// Centre card
// =============================================================

#[test]
fn viewbox_is_square() {
    assert_eq!(viewbox(), "0 0 600 600");
}

#[test]
fn card_fades_while_committing() {
    assert_eq!(card_class(false), "dial__card");
    assert!(card_class(true).ends_with("dial__card--leaving"));
}
