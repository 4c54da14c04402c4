//! File-backed puzzles.
//!
//! Two formats are accepted:
//! - JSON (`.json`): a serialized [`Puzzle`] (`{"name": ..., "vehicles": [...]}`),
//! - tuple text (anything else): the board builder's export, a list of
//!   `(orientation, length, row, col)` tuples optionally prefixed by `cars =`. The first tuple
//!   is the target vehicle and the file stem becomes the puzzle name.
//!
//! Loaded puzzles are validated before they are returned.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::vehicle::{Orientation, Vehicle};
use crate::scenario::{Puzzle, Result, SearchError};

pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let text = fs::read_to_string(path).map_err(|source| SearchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let origin = path.display().to_string();

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let puzzle = if is_json {
        serde_json::from_str::<Puzzle>(&text).map_err(|e| SearchError::Parse {
            path: origin.clone(),
            reason: e.to_string(),
        })?
    } else {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "puzzle".to_string());
        Puzzle::new(name, parse_tuple_list(&origin, &text)?)
    };

    if let Err(e) = puzzle.validate() {
        warn!(path = %origin, error = %e, "rejected puzzle file");
        return Err(e);
    }
    debug!(path = %origin, name = %puzzle.name, vehicles = puzzle.configuration.len(), "loaded puzzle");
    Ok(puzzle)
}

/// Parse tuple text into vehicles. `origin` only labels errors.
///
/// ```
/// use rush_hour::scenarios::file::parse_tuple_list;
///
/// let vs = parse_tuple_list("<inline>", r#"cars = [("H", 2, 2, 0), ('V', 3, 0, 5)]"#).unwrap();
/// assert_eq!(vs.len(), 2);
/// assert!(vs[0].is_target);
/// assert!(!vs[1].is_target);
/// ```
pub fn parse_tuple_list(origin: &str, text: &str) -> Result<Vec<Vehicle>> {
    let fail = |reason: String| SearchError::Parse {
        path: origin.to_string(),
        reason,
    };

    let stripped: String = text
        .lines()
        .map(|l| l.split('#').next().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n");

    let open = stripped
        .find('[')
        .ok_or_else(|| fail("expected a '[' opening the vehicle list".to_string()))?;
    let prefix = stripped[..open].trim();
    if !(prefix.is_empty() || prefix.ends_with('=')) {
        return Err(fail(format!("unexpected text before the list: {prefix:?}")));
    }
    let close = stripped
        .rfind(']')
        .filter(|&c| c > open)
        .ok_or_else(|| fail("expected a ']' closing the vehicle list".to_string()))?;
    if !stripped[close + 1..].trim().is_empty() {
        return Err(fail("unexpected text after the list".to_string()));
    }

    let mut vehicles: Vec<Vehicle> = Vec::new();
    let mut rest = &stripped[open + 1..close];
    loop {
        rest = rest.trim_start().trim_start_matches(',').trim_start();
        if rest.is_empty() {
            break;
        }
        if !rest.starts_with('(') {
            return Err(fail(format!(
                "expected '(' at tuple {}, found {:?}",
                vehicles.len(),
                rest.chars().next().unwrap_or(' ')
            )));
        }
        let end = rest
            .find(')')
            .ok_or_else(|| fail(format!("unterminated tuple {}", vehicles.len())))?;
        let v = parse_tuple(&rest[1..end]).map_err(|reason| {
            fail(format!("tuple {}: {reason}", vehicles.len()))
        })?;
        vehicles.push(v);
        rest = &rest[end + 1..];
    }

    match vehicles.first_mut() {
        Some(first) => first.is_target = true,
        None => return Err(fail("the vehicle list is empty".to_string())),
    }
    Ok(vehicles)
}

fn parse_tuple(body: &str) -> std::result::Result<Vehicle, String> {
    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    let fields: &[&str] = match fields.as_slice() {
        [head @ .., ""] => head,
        all => all,
    };
    let [orient, length, row, col] = fields else {
        return Err(format!("expected 4 fields, found {}", fields.len()));
    };

    let orientation = match orient.trim_matches(|c: char| c == '"' || c == '\'') {
        "H" | "h" => Orientation::Horizontal,
        "V" | "v" => Orientation::Vertical,
        other => return Err(format!("unknown orientation {other:?}")),
    };
    let length: u8 = length
        .parse()
        .map_err(|e| format!("bad length {length:?}: {e}"))?;
    let row: i8 = row.parse().map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col: i8 = col.parse().map_err(|e| format!("bad col {col:?}: {e}"))?;

    Ok(Vehicle::new(orientation, length, row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_builder_export_verbatim() {
        let text = "cars = [\n  (\"H\", 2, 2, 0),\n  (\"V\", 3, 0, 0),\n  (\"H\", 3, 5, 3)\n]";
        let vs = parse_tuple_list("export", text).unwrap();
        assert_eq!(
            vs,
            vec![
                Vehicle::horizontal(2, 2, 0).as_target(),
                Vehicle::vertical(3, 0, 0),
                Vehicle::horizontal(3, 5, 3),
            ]
        );
    }

    #[test]
    fn bare_list_with_trailing_comma_and_comment() {
        let text = "# board 7\n[('h', 2, 2, 1), ('v', 2, 0, 4),]\n";
        let vs = parse_tuple_list("bare", text).unwrap();
        assert_eq!(vs.len(), 2);
        assert_eq!(vs[1].orientation, Orientation::Vertical);
    }

    #[test]
    fn rejects_bad_arity_and_empty_lists() {
        assert!(matches!(
            parse_tuple_list("x", "[(\"H\", 2, 2)]"),
            Err(SearchError::Parse { .. })
        ));
        assert!(matches!(
            parse_tuple_list("x", "cars = []"),
            Err(SearchError::Parse { .. })
        ));
        assert!(matches!(
            parse_tuple_list("x", "[(\"D\", 2, 2, 0)]"),
            Err(SearchError::Parse { .. })
        ));
    }
}
