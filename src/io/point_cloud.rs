use crate::io::PointCloudError;
use crate::math::{Point, Real, DIM};
use core::fmt::Write as _;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Parses whitespace-separated real triples into points.
///
/// Parsing stops at the end of the text or at the first token that is not a valid
/// real number, whichever comes first. Everything after a malformed token, as well as
/// a trailing incomplete triple, is ignored.
///
/// ```
/// use planeclip3d::io::parse_points;
/// use planeclip3d::na::Point3;
///
/// let points = parse_points("0 0 1\n0 0 -1  0\n0 0\nnope 1 2 3");
/// assert_eq!(points, vec![Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 0.0)]);
/// ```
pub fn parse_points(text: &str) -> Vec<Point<Real>> {
    let mut points = Vec::new();
    let mut coords = [0.0; DIM];
    let mut num_coords = 0;

    for token in text.split_whitespace() {
        let Ok(coord) = token.parse::<Real>() else {
            log::warn!(
                "Stopped reading points at malformed token {:?} after {} points.",
                token,
                points.len()
            );
            return points;
        };

        coords[num_coords] = coord;
        num_coords += 1;

        if num_coords == DIM {
            points.push(Point::from(coords));
            num_coords = 0;
        }
    }

    if num_coords != 0 {
        log::warn!(
            "Ignored {} trailing coordinates not forming a complete point.",
            num_coords
        );
    }

    points
}

/// Reads all the points from `reader`.
///
/// See [`parse_points`] for the accepted format. Bytes that are not valid UTF-8 count as a
/// malformed token: parsing stops at the token containing them.
pub fn read_points<R: Read>(mut reader: R) -> io::Result<Vec<Point<Real>>> {
    let mut bytes = Vec::new();
    let _ = reader.read_to_end(&mut bytes)?;

    let text = match core::str::from_utf8(&bytes) {
        Ok(text) => text,
        Err(err) => {
            let valid = &bytes[..err.valid_up_to()];
            let valid = core::str::from_utf8(valid).unwrap_or_default();
            // The token the invalid bytes belong to is malformed as a whole.
            let text = valid.trim_end_matches(|c: char| !c.is_whitespace());
            log::warn!(
                "Stopped reading points at invalid UTF-8 data (byte {}).",
                err.valid_up_to()
            );
            text
        }
    };

    Ok(parse_points(text))
}

/// Loads the points stored in the file at `path`.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point<Real>>, PointCloudError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PointCloudError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let points = read_points(file).map_err(|source| PointCloudError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Loaded {} points from {}.", points.len(), path.display());
    Ok(points)
}

/// Formats points as text, one `x y z` line per point.
pub fn format_points(points: &[Point<Real>]) -> String {
    let mut text = String::new();

    for pt in points {
        let _ = writeln!(text, "{} {} {}", pt.x, pt.y, pt.z);
    }

    text
}

/// Writes `points` to `writer`, one `x y z` line per point.
///
/// The whole text is formatted first and then written with a single call.
pub fn write_points<W: Write>(mut writer: W, points: &[Point<Real>]) -> io::Result<()> {
    let text = format_points(points);
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// Saves `points` into the file at `path`, replacing its previous content.
pub fn save_points(path: impl AsRef<Path>, points: &[Point<Real>]) -> Result<(), PointCloudError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| PointCloudError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_points(file, points).map_err(|source| PointCloudError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Saved {} points to {}.", points.len(), path.display());
    Ok(())
}
