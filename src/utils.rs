use std::path::Path;

/// Parse a human size such as `64KiB`, `1MiB`, `5MB` or `65536`.
///
/// Binary suffixes (`kib`, `mib`, `gib`) are powers of 1024, the others
/// powers of 1000. Returns `None` for anything unparsable.
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_lowercase();
    let units = [
        ("gib", 1024u64.pow(3)),
        ("mib", 1024u64.pow(2)),
        ("kib", 1024),
        ("gb", 1000u64.pow(3)),
        ("mb", 1000u64.pow(2)),
        ("kb", 1000),
        ("g", 1000u64.pow(3)),
        ("m", 1000u64.pow(2)),
        ("k", 1000),
        ("b", 1),
    ];

    for (unit, mult) in units {
        if let Some(num) = s.strip_suffix(unit) {
            let val = num.trim().parse::<f64>().ok()?;
            if !val.is_finite() || val < 0.0 {
                return None;
            }
            return Some((val * mult as f64) as u64);
        }
    }
    s.parse().ok()
}

/// True when both paths resolve to the same file on disk.
///
/// Paths that cannot be resolved are never considered the same.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
