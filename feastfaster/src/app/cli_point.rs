use geo::Point;

/// parses a command line coordinate written as `lon,lat`
pub fn parse_point(s: &str) -> Result<Point<f64>, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("expected format: lon,lat, got: {s}"));
    }
    let lon = parse_num(parts[0], -180.0, 180.0).map_err(|e| format!("invalid longitude: {e}"))?;
    let lat = parse_num(parts[1], -90.0, 90.0).map_err(|e| format!("invalid latitude: {e}"))?;
    Ok(Point::new(lon, lat))
}

fn parse_num(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))?;
    if !(min..=max).contains(&v) {
        return Err(format!("{v} is outside [{min}, {max}]"));
    }
    Ok(v)
}
