use zoneparse_domain::{CanonicalRecord, RecordType};

pub const APEX: &str = "@";

/// Lowercases a directive origin and makes it absolute.
pub fn normalize_origin(raw: &str) -> String {
    let origin = raw.to_ascii_lowercase();
    if origin.ends_with('.') {
        origin
    } else {
        format!("{}.", origin)
    }
}

/// Completes `name` against `origin`: `@` becomes the origin and relative
/// names get the origin appended. Without an origin, `@` is the root.
pub fn absolute_name(name: &str, origin: Option<&str>) -> String {
    if name == APEX {
        return origin.unwrap_or(".").to_string();
    }
    if name.ends_with('.') {
        return name.to_string();
    }

    match origin {
        Some(".") | None => format!("{}.", name),
        Some(origin) => format!("{}.{}", name, origin),
    }
}

/// SOA owners are taken as written: only `@` expands and a missing trailing
/// dot is added without appending the origin.
pub fn absolute_soa_owner(name: &str, origin: Option<&str>) -> String {
    if name == APEX {
        return origin.unwrap_or(".").to_string();
    }
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

pub fn strip_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Applies the output trailing-dot policy to the record's owner and, for
/// CNAME, its target.
pub fn for_output(mut record: CanonicalRecord, keep_trailing_dot: bool) -> CanonicalRecord {
    if keep_trailing_dot {
        return record;
    }

    record.name = strip_trailing_dot(&record.name).to_string();
    if record.record_type == RecordType::CNAME {
        record.rdata = strip_trailing_dot(&record.rdata).to_string();
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_name_under_root_origin() {
        assert_eq!(absolute_name("www", Some(".")), "www.");
    }

    #[test]
    fn test_soa_owner_is_not_suffixed() {
        assert_eq!(absolute_soa_owner("example.com", Some("other.org.")), "example.com.");
        assert_eq!(absolute_soa_owner("@", Some("other.org.")), "other.org.");
    }
}
