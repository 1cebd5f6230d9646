// File: crates/lumi-core/tests/layout.rs
// Purpose: Validate label anchors and alignment codes across position codes and flags.

use lumi_core::{layout, CaptionTable, FrameGeometry, LabelConfig, LabelRole, Margins, PositionCode};

const EPS: f32 = 1e-6;

fn frame() -> FrameGeometry {
    FrameGeometry::new(Margins::new(0.18, 0.08, 0.05, 0.13), 800, 600)
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

// l + 0.045*(1-l-r), (1-t) - 0.035*(1-t-b) with the margins above
const LEFT_X: f32 = 0.18 + 0.045 * 0.77;
const TOP_Y: f32 = 0.92 - 0.035 * 0.79;

#[test]
fn sentinel_code_is_left_bottom_at_left_zone() {
    let cfg = LabelConfig::captions("Left", "Right", 0);
    let out = layout(&cfg, &frame());
    let p = out.get(LabelRole::Primary).expect("primary placed");
    assert_eq!(p.align.code(), 11);
    assert!(close(p.anchor.x, LEFT_X), "x = {}", p.anchor.x);
    assert!(close(p.anchor.y, TOP_Y), "y = {}", p.anchor.y);
}

#[test]
fn center_zone_code_22() {
    let cfg = LabelConfig::captions("Left", "Right", 22);
    let out = layout(&cfg, &frame());
    let p = out.get(LabelRole::Primary).unwrap();
    assert!(close(p.anchor.x, 0.18 + 0.5 * 0.77));
    assert_eq!(p.align.code(), 23);
}

#[test]
fn right_zone_code_33() {
    let cfg = LabelConfig::captions("Left", "Right", 33);
    let out = layout(&cfg, &frame());
    let p = out.get(LabelRole::Primary).unwrap();
    assert!(close(p.anchor.x, 0.95 - 0.045 * 0.77));
    assert_eq!(p.align.code(), 33);
}

#[test]
fn top_left_code_11() {
    let cfg = LabelConfig::captions("Left", "Right", PositionCode::TOP_LEFT);
    let p = layout(&cfg, &frame()).get(LabelRole::Primary).cloned().unwrap();
    assert!(close(p.anchor.x, LEFT_X));
    assert!(close(p.anchor.y, TOP_Y));
    assert_eq!(p.align.code(), 13);
}

#[test]
fn secondary_anchor_ignores_position_code() {
    for code in [0, 11, 12, 22, 33, 15, 45, -7] {
        for out_of_frame in [false, true] {
            let cfg = LabelConfig::captions("Left", "Right", code).out_of_frame(out_of_frame);
            let out = layout(&cfg, &frame());
            let s = out.get(LabelRole::Secondary).unwrap();
            assert!(close(s.anchor.x, 0.95), "code {code}: x = {}", s.anchor.x);
            assert!(close(s.anchor.y, 0.92 + 0.2 * 0.08), "code {code}: y = {}", s.anchor.y);
            assert_eq!(s.align.code(), 31);
        }
    }
}

#[test]
fn out_of_frame_moves_primary_above_frame_and_extra_to_zone() {
    let cfg = LabelConfig::captions("Left", "Right", 11)
        .with_extra("Preliminary")
        .out_of_frame(true);
    let out = layout(&cfg, &frame());

    let p = out.get(LabelRole::Primary).unwrap();
    assert!(close(p.anchor.x, 0.18));
    assert!(close(p.anchor.y, 0.92 + 0.2 * 0.08));
    assert_eq!(p.align.code(), 11);

    let e = out.get(LabelRole::Extra).expect("extra placed");
    assert!(close(e.anchor.x, LEFT_X));
    assert!(close(e.anchor.y, TOP_Y));
    assert_eq!(e.align.code(), 13);
    assert_eq!(e.text.plain_text(), "Preliminary");
}

#[test]
fn out_of_frame_sentinel_inlines_extra() {
    let cfg = LabelConfig::captions("CMS", "Right", 0)
        .with_extra("Simulation")
        .out_of_frame(true);
    let out = layout(&cfg, &frame());
    assert!(out.get(LabelRole::Extra).is_none());

    let p = out.get(LabelRole::Primary).unwrap();
    assert_eq!(p.text.runs.len(), 2);
    assert_eq!(p.text.plain_text(), "CMS Simulation");
    assert!(close(p.text.runs[1].scale, 0.76));
    assert!(p.text.runs[1].face.is_bold() && p.text.runs[1].face.is_italic());
}

#[test]
fn in_frame_extra_sits_below_primary() {
    let cfg = LabelConfig::captions("CMS", "Right", 11).with_extra("Preliminary");
    let out = layout(&cfg, &frame());
    let p = out.get(LabelRole::Primary).unwrap();
    let e = out.get(LabelRole::Extra).unwrap();
    assert!(close(e.anchor.x, p.anchor.x));
    assert!(close(e.anchor.y, p.anchor.y - 1.2 * 0.75 * 0.08));
    assert_eq!(e.align, p.align);
    assert!(close(p.size, 0.75 * 0.08));
    assert!(close(e.size, 0.76 * 0.75 * 0.08));
}

#[test]
fn in_frame_sentinel_inlines_extra_and_keeps_extra_line() {
    let cfg = LabelConfig::captions("CMS", "R", 0).with_extra("Preliminary");
    let out = layout(&cfg, &frame());

    let p = out.get(LabelRole::Primary).unwrap();
    assert_eq!(p.text.runs.len(), 2);
    assert_eq!(p.text.plain_text(), "CMS Preliminary");
    assert!(close(p.anchor.x, LEFT_X));
    assert!(close(p.anchor.y, TOP_Y));

    let e = out.get(LabelRole::Extra).expect("extra line placed in frame");
    assert!(close(e.anchor.x, p.anchor.x));
    assert!(close(e.anchor.y, p.anchor.y - 1.2 * 0.75 * 0.08));
    assert!(e.anchor.y < p.anchor.y);
    assert_eq!(p.align.code(), 11);
    assert_eq!(e.align.code(), 11);
}

#[test]
fn primary_text_can_be_replaced() {
    let cfg = LabelConfig::experiment("8TeV", &CaptionTable::run_periods(), 11).with_primary("ATLAS");
    let out = layout(&cfg, &frame());
    assert_eq!(out.get(LabelRole::Primary).unwrap().text.plain_text(), "ATLAS");
}

#[test]
fn empty_extra_is_not_placed() {
    let cfg = LabelConfig::captions("CMS", "Right", 11);
    let out = layout(&cfg, &frame());
    assert_eq!(out.texts.len(), 2);
    assert!(out.get(LabelRole::Extra).is_none());
}

#[test]
fn logo_replaces_primary_in_frame() {
    let cfg = LabelConfig::captions("CMS", "Right", 11).with_extra("Preliminary").with_logo(true);
    let out = layout(&cfg, &frame());
    assert!(out.get(LabelRole::Primary).is_none());
    assert!(out.get(LabelRole::Extra).is_none());
    assert!(out.get(LabelRole::Secondary).is_some());

    let rect = out.logo.expect("logo placed").rect;
    let aspect = 800.0 / 600.0;
    let x = 0.18 + 0.045 * 0.77 * aspect;
    let y = 0.92 - 0.045 * 0.79;
    assert!(close(rect.x0, x));
    assert!(close(rect.y1, y));
    assert!(close(rect.y0, y - 0.15));
    assert!(close(rect.width(), 0.15 / aspect));
    assert!(close(rect.height(), 0.15));
}

#[test]
fn logo_is_ignored_out_of_frame() {
    let cfg = LabelConfig::captions("CMS", "Right", 11).with_logo(true).out_of_frame(true);
    let out = layout(&cfg, &frame());
    assert!(out.logo.is_none());
    assert!(out.get(LabelRole::Primary).is_some());
}

#[test]
fn unmatched_codes_fall_back_silently() {
    // units digit 5: no anchor rule, x stays at 0
    let out = layout(&LabelConfig::captions("A", "B", 15), &frame());
    let p = out.get(LabelRole::Primary).unwrap();
    assert_eq!(p.anchor.x, 0.0);
    assert_eq!(p.align.code(), 13);

    // tens digit 4: default center/top alignment
    let out = layout(&LabelConfig::captions("A", "B", 42), &frame());
    let p = out.get(LabelRole::Primary).unwrap();
    assert_eq!(p.align.code(), 23);
    assert!(close(p.anchor.x, 0.18 + 0.5 * 0.77));

    // negative codes land in the left zone
    let out = layout(&LabelConfig::captions("A", "B", -3), &frame());
    let p = out.get(LabelRole::Primary).unwrap();
    assert!(close(p.anchor.x, LEFT_X));
    assert_eq!(p.align.code(), 13);
}

#[test]
fn experiment_config_resolves_caption() {
    let table = CaptionTable::from_pairs([("8TeV", "19.7 fb^-1 (8 TeV)")]);
    let cfg = LabelConfig::experiment("8TeV", &table, 11);
    let out = layout(&cfg, &frame());
    assert_eq!(out.get(LabelRole::Secondary).unwrap().text.plain_text(), "19.7 fb^-1 (8 TeV)");
    assert_eq!(out.get(LabelRole::Primary).unwrap().text.plain_text(), "CMS");

    let cfg = LabelConfig::experiment("2 fb^-1 (900 GeV)", &table, 11);
    let out = layout(&cfg, &frame());
    assert_eq!(out.get(LabelRole::Secondary).unwrap().text.plain_text(), "2 fb^-1 (900 GeV)");
}

#[test]
fn layout_is_idempotent() {
    let cfg = LabelConfig::experiment("13TeV", &CaptionTable::run_periods(), 22)
        .with_extra("Work in progress")
        .color_axis_2d(true);
    let f = cfg.frame(1200, 700);
    let a = layout(&cfg, &f);
    let b = layout(&cfg, &f);
    assert_eq!(a, b);
    for (pa, pb) in a.texts.iter().zip(&b.texts) {
        assert_eq!(pa.anchor.x.to_bits(), pb.anchor.x.to_bits());
        assert_eq!(pa.anchor.y.to_bits(), pb.anchor.y.to_bits());
        assert_eq!(pa.size.to_bits(), pb.size.to_bits());
    }
}
