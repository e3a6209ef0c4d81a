// ─────────────────────────────────────────────────────────────────────────────
// LithoStrength — Strength Figure
// Lithosphere and crust strength envelope modelling
// License: MPL-2.0 (http://mozilla.org/MPL/2.0/)
// ─────────────────────────────────────────────────────────────────────────────

//! Two-panel scenario figure: differential stress against depth on
//! the left, temperature against depth on the right. Depth increases
//! downwards on a shared axis, value axes sit on top, and the Moho
//! and the base of the lithosphere are ruled across both panels.

use std::path::Path;

use litho_envelope::ScenarioReport;
use litho_mech::column;
use litho_thermal::{aluminosilicate, borehole, solidus};
use litho_types::config::{Borehole, FrictionLegend};
use litho_types::error::LithoResult;
use litho_types::mesh::DepthMesh;

use crate::axes::{tick_label, LinearScale};
use crate::style;
use crate::svg::{Anchor, SvgDoc};

/// Cap on polyline vertices per curve. Mesh profiles are decimated to
/// this density before drawing.
const MAX_CURVE_POINTS: usize = 1024;

struct PanelFrame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    clip_id: &'static str,
    x: LinearScale,
    y: LinearScale,
}

impl PanelFrame {
    fn new(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        clip_id: &'static str,
        x_max: f64,
        depth_max: f64,
    ) -> Self {
        Self {
            left,
            top,
            width,
            height,
            clip_id,
            x: LinearScale::new((0.0, x_max), (left, left + width)),
            y: LinearScale::new((0.0, depth_max), (top, top + height)),
        }
    }

    fn map(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        points
            .iter()
            .map(|&(x, y)| (self.x.map(x), self.y.map(y)))
            .collect()
    }

    /// Grey panel, white grid, tick labels above and on the left.
    fn draw_frame(&self, doc: &mut SvgDoc, x_label: &str, with_y_labels: bool) {
        doc.rect(
            self.left,
            self.top,
            self.width,
            self.height,
            style::PANEL_BG,
            None,
        );
        let x_ticks = self.x.ticks(6);
        let x_step = step_of(&x_ticks);
        for &t in &x_ticks {
            let px = self.x.map(t);
            doc.line(
                px,
                self.top,
                px,
                self.top + self.height,
                style::GRID,
                style::GRID_WIDTH,
                None,
            );
            doc.text(
                px,
                self.top - 8.0,
                &tick_label(t, x_step),
                style::FONT_SIZE_TICK,
                Anchor::Middle,
                style::TICK_TEXT,
                style::FONT_FAMILY,
            );
        }
        let y_ticks = self.y.ticks(8);
        let y_step = step_of(&y_ticks);
        for &t in &y_ticks {
            let py = self.y.map(t);
            doc.line(
                self.left,
                py,
                self.left + self.width,
                py,
                style::GRID,
                style::GRID_WIDTH,
                None,
            );
            if with_y_labels {
                doc.text(
                    self.left - 8.0,
                    py + 4.0,
                    &tick_label(t, y_step),
                    style::FONT_SIZE_TICK,
                    Anchor::End,
                    style::TICK_TEXT,
                    style::FONT_FAMILY,
                );
            }
        }
        doc.text(
            self.left + self.width / 2.0,
            self.top - 30.0,
            x_label,
            style::FONT_SIZE_LABEL,
            Anchor::Middle,
            style::TEXT,
            style::FONT_FAMILY,
        );
        if with_y_labels {
            doc.vtext(
                self.left - 44.0,
                self.top + self.height / 2.0,
                "Depth (km)",
                style::FONT_SIZE_LABEL,
                style::TEXT,
                style::FONT_FAMILY,
            );
        }
    }

    fn curve(&self, doc: &mut SvgDoc, points: &[(f64, f64)], stroke: &str, width: f64, dash: Option<&str>) {
        let mapped = self.map(&decimate(points, MAX_CURVE_POINTS));
        doc.begin_clipped(self.clip_id);
        doc.polyline(&mapped, stroke, width, dash);
        doc.end_group();
    }

    /// Horizontal rule across the panel with a right-aligned label
    /// just above it.
    fn depth_rule(&self, doc: &mut SvgDoc, depth_km: f64, label: &str) {
        let py = self.y.map(depth_km);
        doc.line(
            self.left,
            py,
            self.left + self.width,
            py,
            style::RULE,
            style::RULE_WIDTH,
            None,
        );
        doc.text(
            self.left + self.width - 6.0,
            py - 4.0,
            label,
            style::FONT_SIZE_ANNOTATION,
            Anchor::End,
            style::TEXT,
            style::FONT_FAMILY,
        );
    }
}

fn step_of(ticks: &[f64]) -> f64 {
    if ticks.len() > 1 {
        ticks[1] - ticks[0]
    } else {
        1.0
    }
}

fn decimate(points: &[(f64, f64)], max_points: usize) -> Vec<(f64, f64)> {
    if points.len() <= max_points {
        return points.to_vec();
    }
    let stride = points.len().div_ceil(max_points);
    let mut out: Vec<(f64, f64)> = points.iter().copied().step_by(stride).collect();
    if let (Some(&last), Some(&kept)) = (points.last(), out.last()) {
        if kept != last {
            out.push(last);
        }
    }
    out
}

struct LegendEntry {
    color: &'static str,
    width: f64,
    dash: Option<&'static str>,
    label: String,
}

fn draw_legend(doc: &mut SvgDoc, x_right: f64, y_top: f64, entries: &[LegendEntry]) {
    if entries.is_empty() {
        return;
    }
    let row_h = 16.0;
    let longest = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let box_w = longest * 6.2 + 44.0;
    let box_h = entries.len() as f64 * row_h + 10.0;
    let x = x_right - box_w;
    doc.rect(x, y_top, box_w, box_h, "#ffffff", Some("#cccccc"));
    for (i, e) in entries.iter().enumerate() {
        let cy = y_top + 13.0 + i as f64 * row_h;
        doc.line(x + 8.0, cy - 3.0, x + 30.0, cy - 3.0, e.color, e.width, e.dash);
        doc.text(
            x + 36.0,
            cy,
            &e.label,
            style::FONT_SIZE_ANNOTATION,
            Anchor::Start,
            style::TEXT,
            style::FONT_FAMILY,
        );
    }
}

fn borehole_color(b: Borehole) -> &'static str {
    match b {
        Borehole::Ktb => style::SERIES[1],
        Borehole::Kola => style::SERIES[2],
        Borehole::Gravberg => style::SERIES[4],
    }
}

fn profile_points(mesh: &DepthMesh, values: impl Iterator<Item = f64>) -> Vec<(f64, f64)> {
    mesh.z_km.iter().zip(values).map(|(&z, v)| (v, z)).collect()
}

fn draw_stress_panel(doc: &mut SvgDoc, panel: &PanelFrame, report: &ScenarioReport) {
    let cfg = &report.config;
    let mesh = &report.geotherm.mesh;
    let env = &report.envelope;

    // Thin guides first, envelope on top.
    let brittle = profile_points(mesh, env.brittle_mpa.iter().copied());
    panel.curve(doc, &brittle, style::SERIES[3], 1.0, Some(style::DASH_DOTTED));

    if cfg.figure.show_goetze {
        let goetze = column::goetze_line(
            mesh.moho_km,
            mesh.lab_km,
            cfg.crust_density,
            cfg.mantle_density,
        );
        panel.curve(doc, &goetze, style::RULE, 1.0, Some(style::DASH_DOTTED));
    }

    let quartz: Vec<(f64, f64)> = env
        .quartz
        .points(&report.geotherm)
        .map(|(z, s)| (s, z))
        .collect();
    panel.curve(doc, &quartz, style::SERIES[1], style::LINE_WIDTH, None);

    let olivine: Vec<(f64, f64)> = env
        .olivine
        .points(&report.geotherm)
        .map(|(z, s)| (s, z))
        .collect();
    panel.curve(doc, &olivine, style::SERIES[5], style::LINE_WIDTH, None);

    let envelope = profile_points(mesh, env.envelope_mpa.iter().copied());
    panel.curve(
        doc,
        &envelope,
        style::SERIES[0],
        style::ENVELOPE_WIDTH,
        None,
    );

    let mut entries = vec![LegendEntry {
        color: style::SERIES[0],
        width: style::ENVELOPE_WIDTH,
        dash: None,
        label: "yield strength envelope".to_owned(),
    }];
    if let Some(mode) = cfg.figure.friction_legend {
        let label = match mode {
            FrictionLegend::FaultType => cfg.friction.regime.to_string(),
            FrictionLegend::Lambda => {
                format!("\u{03bb} = {:.2}", cfg.friction.pore_pressure_ratio)
            }
            FrictionLegend::Mu => format!("\u{03bc} = {:.2}", cfg.friction.friction_coefficient),
        };
        entries.push(LegendEntry {
            color: style::SERIES[3],
            width: 1.0,
            dash: Some(style::DASH_DOTTED),
            label,
        });
    }
    entries.push(LegendEntry {
        color: style::SERIES[1],
        width: style::LINE_WIDTH,
        dash: None,
        label: format!("quartz ({})", env.quartz.law_key),
    });
    entries.push(LegendEntry {
        color: style::SERIES[5],
        width: style::LINE_WIDTH,
        dash: None,
        label: format!("olivine ({})", env.olivine.law_key),
    });
    if cfg.figure.show_goetze {
        entries.push(LegendEntry {
            color: style::RULE,
            width: 1.0,
            dash: Some(style::DASH_DOTTED),
            label: "Goetze's criterion".to_owned(),
        });
    }
    draw_legend(
        doc,
        panel.left + panel.width - 8.0,
        panel.top + 8.0,
        &entries,
    );
}

fn draw_temperature_panel(doc: &mut SvgDoc, panel: &PanelFrame, report: &ScenarioReport) {
    let cfg = &report.config;
    let mesh = &report.geotherm.mesh;

    let celsius = report.geotherm.celsius();
    let geotherm = profile_points(mesh, celsius.iter().copied());
    panel.curve(
        doc,
        &geotherm,
        style::SERIES[0],
        style::ENVELOPE_WIDTH,
        None,
    );

    let mut entries = vec![LegendEntry {
        color: style::SERIES[0],
        width: style::ENVELOPE_WIDTH,
        dash: None,
        label: "Geothermal gradient".to_owned(),
    }];

    for &b in &cfg.figure.boreholes {
        let p = borehole::profile(b, cfg.surface_temperature_k, mesh.moho_km);
        let color = borehole_color(b);
        panel.curve(doc, &p.measured, color, style::LINE_WIDTH, None);
        panel.curve(
            doc,
            &p.projected,
            color,
            style::LINE_WIDTH,
            Some(style::DASH_PROJECTED),
        );
        entries.push(LegendEntry {
            color,
            width: style::LINE_WIDTH,
            dash: None,
            label: b.to_string(),
        });
    }

    if cfg.figure.show_granite_solidus {
        let wet = solidus::granite_wet(cfg.crust_density);
        panel.curve(doc, &wet.points, style::RULE, 1.0, Some(style::DASH_SOLIDUS));
        entries.push(LegendEntry {
            color: style::RULE,
            width: 1.0,
            dash: Some(style::DASH_SOLIDUS),
            label: wet.label.to_owned(),
        });
        let dry = solidus::granite_dry(cfg.crust_density, mesh.moho_km);
        panel.curve(doc, &dry.points, style::RULE, 1.0, None);
        entries.push(LegendEntry {
            color: style::RULE,
            width: 1.0,
            dash: None,
            label: dry.label.to_owned(),
        });
    }

    if cfg.figure.show_peridotite_solidus {
        let peridotite = solidus::peridotite(
            |z| column::pressure_gpa(z, mesh.moho_km, cfg.crust_density, cfg.mantle_density),
            mesh.moho_km,
            mesh.lab_km,
            64,
        );
        panel.curve(
            doc,
            &peridotite.points,
            style::RULE,
            1.0,
            Some(style::DASH_SOLIDUS),
        );
        entries.push(LegendEntry {
            color: style::RULE,
            width: 1.0,
            dash: Some(style::DASH_SOLIDUS),
            label: peridotite.label.to_owned(),
        });
    }

    if let Some(cal) = cfg.figure.triple_point {
        let b = aluminosilicate::boundaries(cal, cfg.crust_density, mesh.moho_km);
        for segment in [b.ky_and, b.and_sill, b.ky_sill] {
            panel.curve(doc, &segment, style::SERIES[3], 1.0, None);
        }
        doc.begin_clipped(panel.clip_id);
        for (label, t_c, z_km) in b.labels {
            doc.text(
                panel.x.map(t_c),
                panel.y.map(z_km),
                label,
                style::FONT_SIZE_ANNOTATION,
                Anchor::Middle,
                style::SERIES[3],
                style::FONT_FAMILY,
            );
        }
        doc.end_group();
        entries.push(LegendEntry {
            color: style::SERIES[3],
            width: 1.0,
            dash: None,
            label: "Al2SiO5 boundaries".to_owned(),
        });
    }

    draw_legend(
        doc,
        panel.left + panel.width - 8.0,
        panel.top + panel.height - 12.0 - (entries.len() as f64 * 16.0 + 10.0),
        &entries,
    );
}

/// Renders the complete scenario figure as an SVG document.
pub fn render(report: &ScenarioReport) -> String {
    let fig = &report.config.figure;
    let mesh = &report.geotherm.mesh;
    let w = fig.width_px as f64;
    let h = fig.height_px as f64;
    let panel_w = (w - style::MARGIN_LEFT - style::MARGIN_RIGHT - style::PANEL_GAP) / 2.0;
    let panel_h = h - style::MARGIN_TOP - style::MARGIN_BOTTOM;

    let stress = PanelFrame::new(
        style::MARGIN_LEFT,
        style::MARGIN_TOP,
        panel_w,
        panel_h,
        "panel-a",
        fig.stress_max_mpa,
        mesh.lab_km,
    );
    let temp = PanelFrame::new(
        style::MARGIN_LEFT + panel_w + style::PANEL_GAP,
        style::MARGIN_TOP,
        panel_w,
        panel_h,
        "panel-b",
        fig.temperature_max_c,
        mesh.lab_km,
    );

    let mut doc = SvgDoc::new(fig.width_px, fig.height_px, style::FIGURE_BG);
    doc.def_clip_rect("panel-a", stress.left, stress.top, stress.width, stress.height);
    doc.def_clip_rect("panel-b", temp.left, temp.top, temp.width, temp.height);

    doc.text(
        8.0,
        16.0,
        &report.config.name,
        style::FONT_SIZE_ANNOTATION,
        Anchor::Start,
        style::TICK_TEXT,
        style::FONT_FAMILY,
    );

    stress.draw_frame(&mut doc, "Differential stress (MPa)", true);
    temp.draw_frame(&mut doc, "Temperature (\u{00b0}C)", false);

    draw_stress_panel(&mut doc, &stress, report);
    draw_temperature_panel(&mut doc, &temp, report);

    for panel in [&stress, &temp] {
        panel.depth_rule(&mut doc, mesh.moho_km, "Moho");
        panel.depth_rule(&mut doc, mesh.lab_km, "lithosphere base");
    }

    doc.finish()
}

/// Renders and writes the figure to `path`.
pub fn save_svg(report: &ScenarioReport, path: &Path) -> LithoResult<()> {
    std::fs::write(path, render(report))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use litho_envelope::scenario;
    use litho_types::config::ScenarioConfig;

    fn reference_report() -> ScenarioReport {
        scenario::run(&ScenarioConfig::default()).unwrap()
    }

    #[test]
    fn test_render_is_well_formed_and_deterministic() {
        let report = reference_report();
        let a = render(&report);
        let b = render(&report);
        assert!(a.starts_with("<svg xmlns"));
        assert!(a.trim_end().ends_with("</svg>"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reference_figure_has_all_annotations() {
        let svg = render(&reference_report());
        for expected in [
            "Moho",
            "lithosphere base",
            "Differential stress (MPa)",
            "Depth (km)",
            "yield strength envelope",
            "strike-slip fault",
            "quartz (HTD)",
            "olivine (HK_dry)",
            "Goetze's criterion",
            "Geothermal gradient",
            "KTB borehole",
            "wet granite solidus",
            ">And</text>",
            ">Sill</text>",
        ] {
            assert!(svg.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_overlays_can_be_switched_off() {
        let mut cfg = ScenarioConfig::default();
        cfg.figure.show_goetze = false;
        cfg.figure.show_granite_solidus = false;
        cfg.figure.boreholes.clear();
        cfg.figure.triple_point = None;
        let svg = render(&scenario::run(&cfg).unwrap());
        assert!(!svg.contains("Goetze"));
        assert!(!svg.contains("granite solidus"));
        assert!(!svg.contains("KTB"));
        assert!(!svg.contains(">And</text>"));
    }

    #[test]
    fn test_peridotite_solidus_appears_when_enabled() {
        let mut cfg = ScenarioConfig::default();
        cfg.figure.show_peridotite_solidus = true;
        let svg = render(&scenario::run(&cfg).unwrap());
        assert!(svg.contains("dry peridotite solidus"));
    }

    #[test]
    fn test_curves_are_clipped_not_dropped() {
        // The reference envelope peaks near 800 MPa on a 600 MPa
        // axis, so the envelope polyline must extend past the clip
        // rect rather than being cut from the data.
        let svg = render(&reference_report());
        assert!(svg.contains("clip-path=\"url(#panel-a)\""));
    }

    #[test]
    fn test_save_svg_writes_the_document() {
        let report = reference_report();
        let dir = std::env::temp_dir().join("litho_plot_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("reference.svg");
        save_svg(&report, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&report));
        std::fs::remove_file(&path).unwrap();
    }
}
