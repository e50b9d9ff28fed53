use crate::domain::constants::RADIUS_TOLERANCE;
use crate::domain::models::Sphere;

/// Reduce a sphere list to its distinct shell radii: sorted ascending, then
/// a left-to-right sweep keeping a value only when it sits more than the
/// tolerance away from the last kept one. Order-independent and insensitive
/// to float noise from upstream unit conversions.
pub fn unique_sorted_radii(spheres: &[Sphere]) -> Vec<f64> {
    let mut vals: Vec<f64> = spheres.iter().map(|s| s.r).collect();
    vals.sort_by(|a, b| a.total_cmp(b));
    let mut uniq: Vec<f64> = Vec::new();
    for r in vals {
        match uniq.last() {
            Some(last) if (r - last).abs() <= RADIUS_TOLERANCE => {}
            _ => uniq.push(r),
        }
    }
    uniq
}

/// Format a radius with 17 significant decimal digits, enough to round-trip
/// an IEEE-754 double to the exact same bit pattern. Rendered `%.17g` style:
/// plain decimals for ordinary magnitudes, exponent form outside them,
/// trailing zeros stripped.
pub fn format_radius(r: f64) -> String {
    let sci = format!("{:.16e}", r);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= 17 {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        return format!("{mantissa}e{exp}");
    }
    let prec = (16 - exp).max(0) as usize;
    let fixed = format!("{:.*}", prec, r);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
