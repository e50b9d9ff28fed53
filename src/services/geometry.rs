use crate::domain::models::Sphere;
use std::collections::HashMap;
use std::path::Path;

/// One `<surface>` element as read from a geometry file. Transient; lives
/// only while the file it came from is being classified.
#[derive(Debug)]
pub struct RawSurface {
    attrs: HashMap<String, String>,
}

impl RawSurface {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|s| s.as_str())
    }
}

/// Extraction outcome for one surface. Malformed data is a value, not an
/// error: the classifier folds `Invalid` into its verdict.
#[derive(Debug)]
pub enum SurfaceOutcome {
    Valid(Sphere),
    Invalid,
}

/// Parse a geometry file into its surface elements. A "surface" is any
/// element whose local tag name is `surface`, at any depth, regardless of
/// namespace. An unreadable or malformed file yields an empty sequence;
/// the classifier treats that the same as "no surfaces declared".
pub fn parse_surfaces(path: &Path) -> Vec<RawSurface> {
    let raw = match std::fs::read_to_string(path) {
        Ok(r) => r,
        Err(_) => return vec![],
    };
    let doc = match roxmltree::Document::parse(&raw) {
        Ok(d) => d,
        Err(_) => return vec![],
    };
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "surface")
        .map(|n| RawSurface {
            attrs: n
                .attributes()
                .map(|a| (a.name().to_string(), a.value().to_string()))
                .collect(),
        })
        .collect()
}

fn to_float(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
}

fn valid_radius(r: f64) -> bool {
    r.is_finite() && r > 0.0
}

/// Parse `coeffs="x0 y0 z0 r"` (whitespace and/or comma separated). Extra
/// trailing coefficients are ignored; some sphere encodings carry them.
fn parse_coeffs(coeffs: &str) -> Option<(f64, f64, f64, f64)> {
    let tokens: Vec<&str> = coeffs
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() < 4 {
        return None;
    }
    let mut vals = [0.0f64; 4];
    for (slot, tok) in vals.iter_mut().zip(&tokens) {
        *slot = tok.parse().ok()?;
    }
    Some((vals[0], vals[1], vals[2], vals[3]))
}

/// Build a sphere from a `type="sphere"` surface. Prefers `coeffs`; falls
/// back to `r`/`radius` with optional `x0,y0,z0` centers defaulting to 0.
pub fn extract_sphere(surface: &RawSurface) -> SurfaceOutcome {
    if let Some(coeffs) = surface.attr("coeffs") {
        return match parse_coeffs(coeffs) {
            Some((x0, y0, z0, r)) if valid_radius(r) => {
                SurfaceOutcome::Valid(Sphere { r, x0, y0, z0 })
            }
            _ => SurfaceOutcome::Invalid,
        };
    }
    let r = to_float(surface.attr("r")).or_else(|| to_float(surface.attr("radius")));
    match r {
        Some(r) if valid_radius(r) => SurfaceOutcome::Valid(Sphere {
            r,
            x0: to_float(surface.attr("x0")).unwrap_or(0.0),
            y0: to_float(surface.attr("y0")).unwrap_or(0.0),
            z0: to_float(surface.attr("z0")).unwrap_or(0.0),
        }),
        _ => SurfaceOutcome::Invalid,
    }
}

/// Decide whether a surface set is exclusively spherical.
///
/// An empty set is not: a geometry declaring no surfaces cannot assert that
/// every surface is a sphere. One non-sphere type or one malformed sphere
/// disqualifies the whole geometry; partial data must not leak a truncated
/// radius set.
pub fn classify(surfaces: &[RawSurface]) -> (bool, Vec<Sphere>) {
    if surfaces.is_empty() {
        return (false, vec![]);
    }
    let mut spheres = Vec::with_capacity(surfaces.len());
    for surface in surfaces {
        let stype = surface.attr("type").unwrap_or("").trim().to_ascii_lowercase();
        if stype != "sphere" {
            return (false, vec![]);
        }
        match extract_sphere(surface) {
            SurfaceOutcome::Valid(s) => spheres.push(s),
            SurfaceOutcome::Invalid => return (false, vec![]),
        }
    }
    (true, spheres)
}

/// Parse and classify one geometry file.
pub fn analyze_geometry_file(path: &Path) -> (bool, Vec<Sphere>) {
    let surfaces = parse_surfaces(path);
    classify(&surfaces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(pairs: &[(&str, &str)]) -> RawSurface {
        RawSurface {
            attrs: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn coeffs_take_priority_and_map_to_center_plus_radius() {
        let s = surface(&[("type", "sphere"), ("coeffs", "1.0, 2.0 3.0 4.5 9.9")]);
        match extract_sphere(&s) {
            SurfaceOutcome::Valid(sp) => {
                assert_eq!(sp.x0, 1.0);
                assert_eq!(sp.y0, 2.0);
                assert_eq!(sp.z0, 3.0);
                assert_eq!(sp.r, 4.5);
            }
            SurfaceOutcome::Invalid => panic!("expected valid sphere"),
        }
    }

    #[test]
    fn short_or_garbled_coeffs_are_invalid() {
        for coeffs in ["0 0 0", "0 0 zero 5.0", ""] {
            let s = surface(&[("type", "sphere"), ("coeffs", coeffs)]);
            assert!(matches!(extract_sphere(&s), SurfaceOutcome::Invalid));
        }
    }

    #[test]
    fn radius_fallback_defaults_center_to_origin() {
        let s = surface(&[("type", "sphere"), ("radius", "2.5")]);
        match extract_sphere(&s) {
            SurfaceOutcome::Valid(sp) => {
                assert_eq!(sp.r, 2.5);
                assert_eq!((sp.x0, sp.y0, sp.z0), (0.0, 0.0, 0.0));
            }
            SurfaceOutcome::Invalid => panic!("expected valid sphere"),
        }
    }

    #[test]
    fn nonpositive_or_nonfinite_radii_are_invalid() {
        for r in ["0", "-1.0", "inf", "NaN", "not-a-number"] {
            let s = surface(&[("type", "sphere"), ("r", r)]);
            assert!(matches!(extract_sphere(&s), SurfaceOutcome::Invalid), "r={r}");
        }
    }

    #[test]
    fn empty_surface_set_is_not_exclusively_spherical() {
        let (spherical, spheres) = classify(&[]);
        assert!(!spherical);
        assert!(spheres.is_empty());
    }

    #[test]
    fn all_valid_spheres_classify_true_in_order() {
        let set = vec![
            surface(&[("type", "Sphere"), ("coeffs", "0 0 0 5.0")]),
            surface(&[("type", " sphere "), ("r", "1.0")]),
        ];
        let (spherical, spheres) = classify(&set);
        assert!(spherical);
        assert_eq!(spheres.len(), 2);
        assert_eq!(spheres[0].r, 5.0);
        assert_eq!(spheres[1].r, 1.0);
    }

    #[test]
    fn one_cylinder_disqualifies_the_whole_geometry() {
        let set = vec![
            surface(&[("type", "sphere"), ("r", "1.0")]),
            surface(&[("type", "cylinder"), ("r", "1.0")]),
        ];
        let (spherical, spheres) = classify(&set);
        assert!(!spherical);
        assert!(spheres.is_empty());
    }

    #[test]
    fn one_malformed_sphere_disqualifies_the_whole_geometry() {
        let set = vec![
            surface(&[("type", "sphere"), ("r", "1.0")]),
            surface(&[("type", "sphere"), ("r", "-3.0")]),
        ];
        let (spherical, spheres) = classify(&set);
        assert!(!spherical);
        assert!(spheres.is_empty());
    }

    #[test]
    fn namespaced_surfaces_are_found_at_any_depth() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geometry.xml");
        std::fs::write(
            &path,
            r#"<g:geometry xmlns:g="http://example.com/g">
                 <g:cell><g:surface type="sphere" coeffs="0 0 0 5.0"/></g:cell>
                 <g:surface type="sphere" r="5.0000000001"/>
               </g:geometry>"#,
        )
        .unwrap();
        let (spherical, spheres) = analyze_geometry_file(&path);
        assert!(spherical);
        assert_eq!(spheres.len(), 2);
    }

    #[test]
    fn malformed_xml_reads_as_no_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geometry.xml");
        std::fs::write(&path, "<geometry><surface type=").unwrap();
        let (spherical, spheres) = analyze_geometry_file(&path);
        assert!(!spherical);
        assert!(spheres.is_empty());
    }
}
