use std::f64::consts::{FRAC_PI_2, PI, TAU};

const EPSILON: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    /// The slice at `t` of its enter transition, sweeping out from angle 0.
    pub fn at(&self, t: f64) -> PieSlice {
        let t = t.clamp(0.0, 1.0);
        PieSlice {
            start_angle: self.start_angle * t,
            end_angle: self.end_angle * t,
            ..*self
        }
    }
}

/// Lays the values around a full circle in input order. Angles are
/// radians clockwise from twelve o'clock; non-positive values get no arc.
pub fn pie(values: &[f64]) -> Vec<PieSlice> {
    let sum: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let k = if sum > 0.0 { TAU / sum } else { 0.0 };
    let mut angle = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let sweep = if *value > 0.0 { value * k } else { 0.0 };
            let slice = PieSlice {
                index,
                value: *value,
                start_angle: angle,
                end_angle: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    let a = angle - FRAC_PI_2;
    (radius * a.cos(), radius * a.sin())
}

/// SVG path for an annular sector.
pub fn arc_path(inner: f64, outer: f64, start: f64, end: f64) -> String {
    if outer <= EPSILON {
        return "M0,0Z".to_string();
    }
    let sweep = (end - start).abs();
    let cw = if end >= start { 1 } else { 0 };
    let ccw = 1 - cw;

    if sweep >= TAU - EPSILON {
        let (ox, oy) = point(outer, start);
        let mut d = format!(
            "M{:.3},{:.3}A{o:.3},{o:.3},0,1,{cw},{:.3},{:.3}A{o:.3},{o:.3},0,1,{cw},{:.3},{:.3}",
            ox,
            oy,
            -ox,
            -oy,
            ox,
            oy,
            o = outer,
            cw = cw
        );
        if inner > EPSILON {
            let (ix, iy) = point(inner, start);
            d.push_str(&format!(
                "M{:.3},{:.3}A{i:.3},{i:.3},0,1,{ccw},{:.3},{:.3}A{i:.3},{i:.3},0,1,{ccw},{:.3},{:.3}",
                ix,
                iy,
                -ix,
                -iy,
                ix,
                iy,
                i = inner,
                ccw = ccw
            ));
        }
        d.push('Z');
        return d;
    }

    let large = if sweep > PI { 1 } else { 0 };
    let (ox0, oy0) = point(outer, start);
    let (ox1, oy1) = point(outer, end);
    let mut d = format!(
        "M{:.3},{:.3}A{o:.3},{o:.3},0,{large},{cw},{:.3},{:.3}",
        ox0,
        oy0,
        ox1,
        oy1,
        o = outer,
        large = large,
        cw = cw
    );
    if inner > EPSILON {
        let (ix1, iy1) = point(inner, end);
        let (ix0, iy0) = point(inner, start);
        d.push_str(&format!(
            "L{:.3},{:.3}A{i:.3},{i:.3},0,{large},{ccw},{:.3},{:.3}",
            ix1,
            iy1,
            ix0,
            iy0,
            i = inner,
            large = large,
            ccw = ccw
        ));
    } else {
        d.push_str("L0,0");
    }
    d.push('Z');
    d
}

/// Midpoint of the sector, used to place its label.
pub fn centroid(inner: f64, outer: f64, start: f64, end: f64) -> (f64, f64) {
    point((inner + outer) / 2.0, (start + end) / 2.0)
}

pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

pub fn percentage(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_pie_keeps_input_order() {
        let slices = pie(&[1.0, 3.0]);
        assert_eq!(slices.len(), 2);
        assert!(approx(slices[0].start_angle, 0.0));
        assert!(approx(slices[0].end_angle, TAU / 4.0));
        assert!(approx(slices[1].start_angle, TAU / 4.0));
        assert!(approx(slices[1].end_angle, TAU));
    }

    #[test]
    fn test_pie_ignores_non_positive() {
        let slices = pie(&[0.0, -5.0, 2.0]);
        assert!(approx(slices[0].end_angle, 0.0));
        assert!(approx(slices[1].end_angle, 0.0));
        assert!(approx(slices[2].end_angle - slices[2].start_angle, TAU));
    }

    #[test]
    fn test_pie_all_zero() {
        let slices = pie(&[0.0, 0.0]);
        assert!(slices.iter().all(|s| s.start_angle == 0.0 && s.end_angle == 0.0));
    }

    #[test]
    fn test_enter_transition_sweeps_from_zero() {
        let slice = pie(&[1.0, 1.0])[1];
        let start = slice.at(0.0);
        assert_eq!((start.start_angle, start.end_angle), (0.0, 0.0));
        let half = slice.at(0.5);
        assert!(approx(half.start_angle, PI / 2.0));
        assert!(approx(half.end_angle, PI));
        assert_eq!(slice.at(1.0), slice);
    }

    #[test]
    fn test_centroid_of_first_quarter() {
        let (x, y) = centroid(60.0, 100.0, 0.0, FRAC_PI_2);
        let r = 80.0;
        assert!(approx(x, r * (PI / 4.0).cos()));
        assert!(approx(y, -r * (PI / 4.0).sin()));
    }

    #[test]
    fn test_arc_path_shape() {
        let d = arc_path(65.0, 100.0, 0.0, FRAC_PI_2);
        assert!(d.starts_with("M0.000,-100.000A100.000,100.000,0,0,1,100.000,"));
        assert!(d.contains("L65.000,"));
        assert!(d.ends_with('Z'));

        let large = arc_path(65.0, 100.0, 0.0, 3.0 * FRAC_PI_2);
        assert!(large.contains(",0,1,1,"));
    }

    #[test]
    fn test_full_ring_has_two_sub_paths() {
        let d = arc_path(65.0, 100.0, 0.0, TAU);
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('A').count(), 4);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!(approx(ease_cubic_in_out(0.5), 0.5));
        assert!(ease_cubic_in_out(0.25) < 0.25);
    }

    #[test]
    fn test_percentage() {
        assert!(approx(percentage(25.0, 200.0), 12.5));
        assert_eq!(percentage(10.0, 0.0), 0.0);
    }
}
