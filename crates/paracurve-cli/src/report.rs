//! Printing curve samples and the circle radius total.

use std::f64::consts::FRAC_PI_4;
use std::io::Write;

use paracurve_core::{CurveError, Result};
use paracurve_geometry::{Curve, Shape};
use paracurve_math::{Coords, General, Point3};
use serde::Serialize;

/// Parameter at which every curve is sampled.
pub const SAMPLE_PARAMETER: f64 = FRAC_PI_4;
const SAMPLE_LABEL: &str = "PI / 4";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable blocks, one per curve.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
struct CurveSample<'a> {
    curve: &'a Shape,
    point: Point3,
    derivative: Point3,
}

#[derive(Serialize)]
struct RadiusTotal {
    circle_radius_sum: f64,
}

/// Write the description, point, and derivative of each curve in order.
pub fn write_report<W: Write>(out: &mut W, shapes: &[Shape], format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for shape in shapes {
                writeln!(out, "{shape}")?;
                writeln!(
                    out,
                    "Point at t = {SAMPLE_LABEL}: {}",
                    Coords(shape.point_at(SAMPLE_PARAMETER))
                )?;
                writeln!(
                    out,
                    "Derivative at t = {SAMPLE_LABEL}: {}",
                    Coords(shape.derivative_at(SAMPLE_PARAMETER))
                )?;
                writeln!(out)?;
            }
        }
        ReportFormat::Json => {
            for shape in shapes {
                let sample = CurveSample {
                    curve: shape,
                    point: shape.point_at(SAMPLE_PARAMETER),
                    derivative: shape.derivative_at(SAMPLE_PARAMETER),
                };
                write_json_line(out, &sample)?;
            }
        }
    }
    Ok(())
}

/// Write the final radius total line.
pub fn write_sum<W: Write>(out: &mut W, radius_sum: f64, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            writeln!(out, "Total sum of radii of the circles: {}", General(radius_sum))?;
        }
        ReportFormat::Json => write_json_line(
            out,
            &RadiusTotal {
                circle_radius_sum: radius_sum,
            },
        )?,
    }
    Ok(())
}

fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value).map_err(|e| CurveError::Serialize(e.to_string()))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paracurve_geometry::{Circle, Ellipse, Helix};

    fn scenario() -> Vec<Shape> {
        vec![
            Circle::new(3.0).into(),
            Ellipse::new(2.0, 5.0).into(),
            Helix::new(4.0, 6.0).into(),
            Circle::new(1.0).into(),
        ]
    }

    fn render(shapes: &[Shape], format: ReportFormat) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, shapes, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_report() {
        let text = render(&scenario(), ReportFormat::Text);
        let expected = "\
Circle with r = 3.000000
Point at t = PI / 4: (2.12132, 2.12132, 0)
Derivative at t = PI / 4: (-2.12132, 2.12132, 0)

Ellipse with rx = 2.000000, ry = 5.000000
Point at t = PI / 4: (1.41421, 3.53553, 0)
Derivative at t = PI / 4: (-1.41421, 3.53553, 0)

Helix with r = 4.000000, s = 6.000000
Point at t = PI / 4: (2.82843, 2.82843, 0.75)
Derivative at t = PI / 4: (-2.82843, 2.82843, 0.95493)

Circle with r = 1.000000
Point at t = PI / 4: (0.707107, 0.707107, 0)
Derivative at t = PI / 4: (-0.707107, 0.707107, 0)

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_report_is_empty() {
        assert!(render(&[], ReportFormat::Text).is_empty());
        assert!(render(&[], ReportFormat::Json).is_empty());
    }

    #[test]
    fn test_json_report_lines() {
        let text = render(&scenario(), ReportFormat::Json);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["curve"]["Circle"]["radius"], 3.0);
        assert_eq!(lines[2]["curve"]["Helix"]["step"], 6.0);

        let z = lines[2]["point"][2].as_f64().unwrap();
        approx::assert_abs_diff_eq!(z, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_sum_line() {
        let mut buf = Vec::new();
        write_sum(&mut buf, 4.0, ReportFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Total sum of radii of the circles: 4\n"
        );

        let mut buf = Vec::new();
        write_sum(&mut buf, 0.0, ReportFormat::Json).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"circle_radius_sum\":0.0}\n"
        );
    }
}
