use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn broken(mut regions: Vec<Region>, index: usize, start: f64, end: f64) -> Vec<Region> {
    regions[index].start_deg = start;
    regions[index].end_deg = end;
    regions
}

// =============================================================
// Angle helpers
// =============================================================

#[test]
fn normalize_degrees_360_wraps_values() {
    assert_eq!(normalize_degrees_360(0.0), 0.0);
    assert_eq!(normalize_degrees_360(370.0), 10.0);
    assert_eq!(normalize_degrees_360(-10.0), 350.0);
}

#[test]
fn signed_angle_delta_picks_shortest_direction() {
    assert_eq!(signed_angle_delta_deg(10.0, 350.0), 20.0);
    assert_eq!(signed_angle_delta_deg(350.0, 10.0), -20.0);
    assert_eq!(signed_angle_delta_deg(f64::NAN, 0.0), 0.0);
}

#[test]
fn pointer_angle_is_clockwise_from_top() {
    let c = DIAL_CENTER;
    assert!(approx(pointer_angle(c, Point::new(c.x, c.y - 100.0)), 0.0));
    assert!(approx(pointer_angle(c, Point::new(c.x + 100.0, c.y)), 90.0));
    assert!(approx(pointer_angle(c, Point::new(c.x, c.y + 100.0)), 180.0));
    assert!(approx(pointer_angle(c, Point::new(c.x - 100.0, c.y)), 270.0));
}

#[test]
fn polar_to_cartesian_inverts_pointer_angle() {
    for deg in [0.0, 17.5, 90.0, 181.0, 300.0, 359.0] {
        let p = polar_to_cartesian(DIAL_CENTER, 200.0, deg);
        assert!(approx(pointer_angle(DIAL_CENTER, p), deg));
        assert!(approx(p.distance_to(DIAL_CENTER), 200.0));
    }
}

// =============================================================
// Tiling
// =============================================================

#[test]
fn fixed_regions_tile_the_circle() {
    assert_eq!(validate_tiling(&REGIONS), Ok(()));
    let total: f64 = REGIONS.iter().map(Region::span_deg).sum();
    assert!(approx(total, 360.0));
}

#[test]
fn every_angle_maps_to_exactly_one_region() {
    let mut deg = 0.0;
    while deg < 360.0 {
        let owners = REGIONS.iter().filter(|r| r.contains_angle(deg)).count();
        assert_eq!(owners, 1, "angle {deg} owned by {owners} regions");
        deg += 0.25;
    }
}

#[test]
fn shared_boundary_belongs_to_the_later_region() {
    assert!(!Region::by_key(RegionKey::SubLove).contains_angle(54.0));
    assert!(Region::by_key(RegionKey::SubOk).contains_angle(54.0));
    assert!(Region::by_key(RegionKey::Switch).contains_angle(342.0));
    assert!(Region::by_key(RegionKey::Switch).contains_angle(0.0));
    assert!(!Region::by_key(RegionKey::Switch).contains_angle(18.0));
}

#[test]
fn tiling_detects_gap() {
    let regions = broken(REGIONS.to_vec(), 1, 20.0, 54.0);
    assert!(matches!(
        validate_tiling(&regions),
        Err(TilingError::Gap { after: "switch", before: "sub-love", .. })
    ));
}

#[test]
fn tiling_detects_overlap() {
    let regions = broken(REGIONS.to_vec(), 2, 50.0, 90.0);
    assert!(matches!(
        validate_tiling(&regions),
        Err(TilingError::Overlap { after: "sub-love", before: "sub-ok", .. })
    ));
}

#[test]
fn tiling_rejects_empty_and_degenerate_sets() {
    assert_eq!(validate_tiling(&[]), Err(TilingError::Empty));
    let regions = broken(REGIONS.to_vec(), 5, 198.0, 162.0);
    assert_eq!(validate_tiling(&regions), Err(TilingError::NonPositiveSpan { key: "skip" }));
}

#[test]
fn tiling_rejects_double_wrap() {
    let mut one = REGIONS[0];
    one.start_deg = 0.0;
    one.end_deg = 360.0;
    let mut two = REGIONS[1];
    two.start_deg = 0.0;
    two.end_deg = 360.0;
    assert!(validate_tiling(&[one, two]).is_err());
}

// =============================================================
// Hit-testing
// =============================================================

#[test]
fn region_at_maps_mid_angles_to_their_region() {
    let mid_radius = (RADIUS_INNER + RADIUS_OUTER) / 2.0;
    for region in &REGIONS {
        let p = polar_to_cartesian(DIAL_CENTER, mid_radius, region.mid_deg());
        assert_eq!(region_at(&REGIONS, p).map(|r| r.key), Some(region.key));
    }
}

#[test]
fn region_at_ignores_centre_and_outside() {
    assert_eq!(region_at(&REGIONS, DIAL_CENTER), None);
    let inside_card = polar_to_cartesian(DIAL_CENTER, RADIUS_INNER - 1.0, 45.0);
    assert_eq!(region_at(&REGIONS, inside_card), None);
    let outside = polar_to_cartesian(DIAL_CENTER, RADIUS_OUTER + 1.0, 45.0);
    assert_eq!(region_at(&REGIONS, outside), None);
}

#[test]
fn region_at_hits_visual_gaps() {
    let p = polar_to_cartesian(DIAL_CENTER, 200.0, 17.5);
    assert_eq!(region_at(&REGIONS, p).map(|r| r.key), Some(RegionKey::Switch));
    let p = polar_to_cartesian(DIAL_CENTER, 200.0, 18.5);
    assert_eq!(region_at(&REGIONS, p).map(|r| r.key), Some(RegionKey::SubLove));
}

// =============================================================
// Choices
// =============================================================

#[test]
fn switch_choice_forces_enthusiastic_tried_five() {
    let r = Region::by_key(RegionKey::Switch).choice.to_response();
    assert_eq!(r.role, Some(RolePreference::Switch));
    assert_eq!(r.interest, Some(InterestLevel::Enthusiastic));
    assert!(r.tried);
    assert_eq!(r.rating, 5);
}

#[test]
fn skip_choice_forces_no_interest_untried() {
    let r = Region::by_key(RegionKey::Skip).choice.to_response();
    assert_eq!(r.role, Some(RolePreference::None));
    assert_eq!(r.interest, Some(InterestLevel::NoInterest));
    assert!(!r.tried);
    assert_eq!(r.rating, 0);
}

#[test]
fn directional_choices_carry_their_stance() {
    let r = Region::by_key(RegionKey::DomOk).choice.to_response();
    assert_eq!(r.role, Some(RolePreference::Dominant));
    assert_eq!(r.interest, Some(InterestLevel::Neutral));
    assert_eq!(r.rating, 3);
    assert!(r.tried);

    let r = Region::by_key(RegionKey::SubNo).choice.to_response();
    assert_eq!(r.role, Some(RolePreference::Submissive));
    assert_eq!(r.interest, Some(InterestLevel::HardLimit));
    assert!(!r.tried);
}

#[test]
fn every_region_produces_a_full_response() {
    for region in &REGIONS {
        let r = region.choice.to_response();
        assert!(r.interest.is_some());
        assert!(r.role.is_some());
        assert!(!r.is_unanswered());
    }
}

#[test]
fn by_key_matches_region_key() {
    for region in &REGIONS {
        assert_eq!(Region::by_key(region.key).key, region.key);
    }
}

// =============================================================
// Paths
// =============================================================

#[test]
fn sector_path_is_a_closed_four_sided_slice() {
    let d = Region::by_key(RegionKey::SubOk).sector_path();
    assert!(d.starts_with("M "));
    assert!(d.ends_with(" Z"));
    assert_eq!(d.matches(" A ").count(), 2);
    assert_eq!(d.matches(" L ").count(), 1);
}

#[test]
fn describe_sector_uses_large_arc_flag_past_half_turn() {
    let small = describe_sector(DIAL_CENTER, 100.0, 200.0, 0.0, 90.0);
    assert!(small.contains("A 200 200 0 0 0"));
    let large = describe_sector(DIAL_CENTER, 100.0, 200.0, 0.0, 270.0);
    assert!(large.contains("A 200 200 0 1 0"));
}

#[test]
fn visual_span_is_inset_from_hit_span() {
    for region in &REGIONS {
        let (start, end) = region.visual_span();
        assert!(start > region.start_deg);
        assert!(end < region.end_deg);
    }
}

#[test]
fn label_anchor_sits_inside_the_region() {
    for region in &REGIONS {
        assert_eq!(region_at(&REGIONS, region.label_anchor()).map(|r| r.key), Some(region.key));
    }
}
