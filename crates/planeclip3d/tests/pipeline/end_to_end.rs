use na::Point3;
use planeclip3d::io::{self, OutputPaths, PointCloudError};
use planeclip3d::pipeline::{self, PipelineError, PipelineOptions};
use planeclip3d::shape::PlaneDefinitionError;
use std::fs;
use std::path::{Path, PathBuf};

const XY_PLANE_TWICE: &str = "0 0 0\n1 0 0\n0 1 0\n0 0 0\n1 0 0\n0 1 0\n";

/// A scratch directory removed when dropped.
struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("planeclip3d-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Scratch(dir)
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.0.join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn assert_no_outputs(points_path: &Path) {
    let outputs = OutputPaths::from_input(points_path);
    assert!(!outputs.accepted.exists());
    assert!(!outputs.rejected.exists());
}

#[test]
fn xy_plane_scenario() {
    let scratch = Scratch::new("xy-plane");
    let points_path = scratch.file("cloud.txt", "0 0 1\n0 0 -1\n0 0 0\n");
    let planes_path = scratch.file("planes.txt", XY_PLANE_TWICE);

    let report = pipeline::run(&PipelineOptions::new(&points_path, &planes_path)).unwrap();

    assert_eq!(
        report.classification.accepted,
        vec![Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 0.0)]
    );
    assert_eq!(report.classification.rejected, vec![Point3::new(0.0, 0.0, 1.0)]);
    assert_eq!(
        report.summary(),
        "Total points: 3 | Valid: 2 (66%) | Invalid: 1 (33%)"
    );

    assert_eq!(report.outputs.accepted, scratch.0.join("cloud_good.txt"));
    assert_eq!(report.outputs.rejected, scratch.0.join("cloud_wrong.txt"));
    assert_eq!(
        fs::read_to_string(&report.outputs.accepted).unwrap(),
        "0 0 -1\n0 0 0\n"
    );
    assert_eq!(
        fs::read_to_string(&report.outputs.rejected).unwrap(),
        "0 0 1\n"
    );
    assert!(report.timings.total >= report.timings.classification);
}

#[test]
fn invalid_utf8_ends_the_point_file() {
    let scratch = Scratch::new("latin1-trailer");
    let points_path = scratch.0.join("cloud.txt");
    fs::write(&points_path, b"0 0 1\n0 0 -1\n0 0 0\n\xff\xfe garbage\n").unwrap();
    let planes_path = scratch.file("planes.txt", XY_PLANE_TWICE);

    let report = pipeline::run(&PipelineOptions::new(&points_path, &planes_path)).unwrap();

    assert_eq!(
        report.summary(),
        "Total points: 3 | Valid: 2 (66%) | Invalid: 1 (33%)"
    );
}

#[test]
fn wrong_plane_point_counts_are_fatal() {
    let scratch = Scratch::new("plane-count");
    let points_path = scratch.file("cloud.txt", "0 0 1\n0 0 -1\n");

    for (name, count) in [("five.txt", 5), ("seven.txt", 7)] {
        let planes: String = (0..count).map(|i| format!("{i} {} 1\n", i * i)).collect();
        let planes_path = scratch.file(name, &planes);

        let err = pipeline::run(&PipelineOptions::new(&points_path, &planes_path)).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::PlaneDefinition(PlaneDefinitionError::WrongPointCount { found }) if found == count
        ));
        assert_no_outputs(&points_path);
    }
}

#[test]
fn collinear_plane_points_are_fatal() {
    let scratch = Scratch::new("collinear");
    let points_path = scratch.file("cloud.txt", "0 0 1\n");
    let planes_path = scratch.file("planes.txt", "0 0 0 1 0 0 0 1 0 0 0 0 1 1 1 2 2 2");

    let err = pipeline::run(&PipelineOptions::new(&points_path, &planes_path)).unwrap_err();

    assert!(matches!(
        err,
        PipelineError::PlaneDefinition(PlaneDefinitionError::Degenerate { .. })
    ));
    assert_no_outputs(&points_path);
}

#[test]
fn missing_input_files_are_fatal() {
    let scratch = Scratch::new("missing");
    let planes_path = scratch.file("planes.txt", XY_PLANE_TWICE);
    let points_path = scratch.0.join("nowhere.txt");

    let err = pipeline::run(&PipelineOptions::new(&points_path, &planes_path)).unwrap_err();
    assert!(matches!(
        &err,
        PipelineError::PointCloud(PointCloudError::Open { path, .. }) if path == &points_path
    ));
    assert_eq!(err.to_string(), format!("cannot open file: {}", points_path.display()));

    let points_path = scratch.file("cloud.txt", "1 2 3\n");
    let planes_path = scratch.0.join("none.txt");
    let err = pipeline::run(&PipelineOptions::new(&points_path, &planes_path)).unwrap_err();
    match err {
        PipelineError::PointCloud(err @ PointCloudError::Open { .. }) => {
            assert_eq!(err.path(), planes_path.as_path())
        }
        err => panic!("unexpected error: {err}"),
    }
    assert_no_outputs(&points_path);
}

#[test]
fn empty_point_file_reports_zero_percent() {
    let scratch = Scratch::new("empty");
    let points_path = scratch.file("cloud", "");
    let planes_path = scratch.file("planes.txt", XY_PLANE_TWICE);

    let report = pipeline::run(&PipelineOptions::new(&points_path, &planes_path)).unwrap();

    assert_eq!(report.summary(), "Total points: 0 | Valid: 0 (0%) | Invalid: 0 (0%)");
    assert_eq!(fs::read_to_string(scratch.0.join("cloud_good.txt")).unwrap(), "");
    assert_eq!(fs::read_to_string(scratch.0.join("cloud_wrong.txt")).unwrap(), "");
}

#[test]
fn voxel_size_downsamples_the_outputs_only() {
    let scratch = Scratch::new("voxel");
    let points_path = scratch.file(
        "cloud.txt",
        "0.1 0.1 -0.1\n0.2 0.2 -0.2\n5 5 -5\n0.1 0.1 0.1\n0.3 0.3 0.3\n",
    );
    let planes_path = scratch.file("planes.txt", XY_PLANE_TWICE);
    let options = PipelineOptions::new(&points_path, &planes_path).with_voxel_size(1.0);

    let report = pipeline::run(&options).unwrap();

    assert_eq!(report.classification.accepted.len(), 3);
    assert_eq!(report.classification.rejected.len(), 2);
    assert_eq!(
        io::load_points(&report.outputs.accepted).unwrap(),
        vec![Point3::new(0.1, 0.1, -0.1), Point3::new(5.0, 5.0, -5.0)]
    );
    assert_eq!(
        io::load_points(&report.outputs.rejected).unwrap(),
        vec![Point3::new(0.1, 0.1, 0.1)]
    );
}

#[test]
fn invalid_voxel_size_writes_nothing() {
    let scratch = Scratch::new("bad-voxel");
    let points_path = scratch.file("cloud.txt", "0 0 1\n");
    let planes_path = scratch.file("planes.txt", XY_PLANE_TWICE);
    let options = PipelineOptions::new(&points_path, &planes_path).with_voxel_size(0.0);

    assert!(matches!(
        pipeline::run(&options),
        Err(PipelineError::VoxelFilter(_))
    ));
    assert_no_outputs(&points_path);

    // The voxel size is checked before any input is read.
    let missing = scratch.0.join("nowhere.txt");
    let options = PipelineOptions::new(&missing, &planes_path).with_voxel_size(f64::NAN);
    assert!(matches!(
        pipeline::run(&options),
        Err(PipelineError::VoxelFilter(_))
    ));
}
