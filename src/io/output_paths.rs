use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The paths of the two files written after classifying a point file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    /// Where the accepted points are written.
    pub accepted: PathBuf,
    /// Where the rejected points are written.
    pub rejected: PathBuf,
}

impl OutputPaths {
    /// Suffix appended to the base name of the input for accepted points.
    pub const ACCEPTED_SUFFIX: &'static str = "_good.txt";
    /// Suffix appended to the base name of the input for rejected points.
    pub const REJECTED_SUFFIX: &'static str = "_wrong.txt";

    /// Derives the output paths from the path of the classified point file.
    ///
    /// The final extension of the file name is removed, if any, and the suffixes
    /// are appended: `scans/cloud.txt` yields `scans/cloud_good.txt` and
    /// `scans/cloud_wrong.txt`.
    pub fn from_input(input: &Path) -> Self {
        let base = input.with_extension("");

        OutputPaths {
            accepted: with_suffix(&base, Self::ACCEPTED_SUFFIX),
            rejected: with_suffix(&base, Self::REJECTED_SUFFIX),
        }
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
