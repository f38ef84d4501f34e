//! Scale helpers for the SVG charts, following the d3-scale conventions.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Step between "nice" ticks covering `[start, stop]`.
///
/// Positive results are the step itself; negative results `-k` mean a step
/// of `1 / k`, which keeps fractional steps exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Evenly spaced round values inside `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let step = tick_increment(lo, hi, count);
    let mut out = Vec::new();
    if step > 0.0 {
        let i0 = (lo / step).ceil() as i64;
        let i1 = (hi / step).floor() as i64;
        for i in i0..=i1 {
            out.push(i as f64 * step);
        }
    } else if step < 0.0 {
        let inv = -step;
        let i0 = (lo * inv).ceil() as i64;
        let i1 = (hi * inv).floor() as i64;
        for i in i0..=i1 {
            out.push(i as f64 / inv);
        }
    }
    if start > stop {
        out.reverse();
    }
    out
}

/// Continuous linear mapping from a numeric domain onto pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Extends the domain outward to round tick values.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        let mut previous = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if previous == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            previous = Some(step);
        }
        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Maps a domain value to the range. A collapsed domain maps to the
    /// range start, which for the bar chart is the baseline.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Discrete band scale with equal inner and outer padding, centred.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = count as f64;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            count,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Left edge of the band at `index`.
    pub fn position(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.start + self.step * index as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// Assigns colours to labels in first-seen order, cycling the scheme.
pub fn ordinal_colors<'a>(labels: &[&str], scheme: &[&'a str]) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    labels
        .iter()
        .map(|label| {
            let idx = match seen.iter().position(|s| s == label) {
                Some(i) => i,
                None => {
                    seen.push(*label);
                    seen.len() - 1
                }
            };
            if scheme.is_empty() {
                "currentColor"
            } else {
                scheme[idx % scheme.len()]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_tick_increment() {
        assert_eq!(tick_increment(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_increment(0.0, 1234.0, 10), 100.0);
        assert_eq!(tick_increment(0.0, 4500.0, 10), 500.0);
        assert_eq!(tick_increment(0.0, 1.0, 10), -10.0);
        assert_eq!(tick_increment(0.0, 0.0, 10), 0.0);
    }

    #[test]
    fn test_nice_rounds_domain_up() {
        let scale = LinearScale::new((0.0, 1234.0), (200.0, 0.0)).nice(10);
        assert_eq!(scale.domain(), (0.0, 1300.0));

        let scale = LinearScale::new((0.0, 97.3), (200.0, 0.0)).nice(10);
        assert_eq!(scale.domain(), (0.0, 100.0));
    }

    #[test]
    fn test_linear_maps_inverted_range() {
        let scale = LinearScale::new((0.0, 100.0), (200.0, 0.0));
        assert!(approx(scale.scale(0.0), 200.0));
        assert!(approx(scale.scale(100.0), 0.0));
        assert!(approx(scale.scale(25.0), 150.0));
    }

    #[test]
    fn test_collapsed_domain_maps_to_baseline() {
        let scale = LinearScale::new((0.0, 0.0), (180.0, 0.0)).nice(10);
        assert_eq!(scale.scale(0.0), 180.0);
        assert_eq!(scale.ticks(10), vec![0.0]);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(0.0, 1300.0, 10), (0..=13).map(|i| i as f64 * 100.0).collect::<Vec<_>>());
        let small = ticks(0.0, 1.0, 5);
        assert_eq!(small, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_band_scale_padding() {
        // two bands over 380px with 0.3 padding: step = 380 / 2.3
        let band = BandScale::new(2, (0.0, 380.0), 0.3);
        let step = 380.0 / 2.3;
        assert!(approx(band.bandwidth(), step * 0.7));
        assert!(approx(band.position(0).unwrap(), step * 0.3));
        assert!(approx(band.position(1).unwrap(), step * 1.3));
        assert_eq!(band.position(2), None);
        // the outer padding is symmetric
        let right_gap = 380.0 - (band.position(1).unwrap() + band.bandwidth());
        assert!(approx(right_gap, band.position(0).unwrap()));
    }

    #[test]
    fn test_ordinal_colors_cycle() {
        let scheme = ["#a", "#b"];
        let colors = ordinal_colors(&["x", "y", "z", "x"], &scheme);
        assert_eq!(colors, vec!["#a", "#b", "#a", "#a"]);
    }
}
