//! Validates PNG and GIF export artifacts against re-decoded file contents

use chromagrow::algorithm::{Session, SessionConfig};
use chromagrow::io::error::GrowthError;
use chromagrow::io::image::export_field_as_png;
use chromagrow::io::visualization::FrameCapture;
use chromagrow::spatial::Coord;
use image::GenericImageView;

fn completed_session() -> Session {
    let config = SessionConfig {
        width: 4,
        height: 4,
        r_res: 4,
        g_res: 2,
        b_res: 2,
        seed: 11,
        seed_coord: None,
        seed_color: None,
    };
    let Ok(mut session) = Session::new(config) else {
        unreachable!("4x4 grid over a 4x2x2 cube is valid");
    };
    while session.step().is_ok_and(|more| more) {}
    session
}

#[test]
fn test_png_export_round_trips_dimensions_and_opacity() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temp directory creation succeeds");
    };
    let path = dir.path().join("growth.png");
    let Some(path_str) = path.to_str() else {
        unreachable!("temp paths are valid UTF-8");
    };

    let session = completed_session();
    assert!(export_field_as_png(session.field(), session.pool().cube(), path_str).is_ok());

    let Ok(decoded) = image::open(&path) else {
        unreachable!("exported PNG decodes");
    };
    assert_eq!(decoded.dimensions(), (4, 4));
    for (_, _, pixel) in decoded.pixels() {
        assert_eq!(pixel.0.last(), Some(&255), "committed cell not opaque");
    }
}

#[test]
fn test_png_export_creates_missing_parent_directories() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temp directory creation succeeds");
    };
    let path = dir.path().join("nested/output/growth.png");
    let Some(path_str) = path.to_str() else {
        unreachable!("temp paths are valid UTF-8");
    };

    let session = completed_session();
    assert!(export_field_as_png(session.field(), session.pool().cube(), path_str).is_ok());
    assert!(path.exists());
}

#[test]
fn test_gif_export_writes_an_animation() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temp directory creation succeeds");
    };
    let path = dir.path().join("growth.gif");
    let Some(path_str) = path.to_str() else {
        unreachable!("temp paths are valid UTF-8");
    };

    let mut capture = FrameCapture::new(4, 4);
    for x in 0..4 {
        for y in 0..4 {
            capture.record_commit(Coord::new(x, y), [x as u8 * 60, y as u8 * 60, 128, 255]);
        }
    }
    assert_eq!(capture.commit_count(), 16);

    assert!(capture.export_gif(path_str, 10).is_ok());
    let Ok(metadata) = std::fs::metadata(&path) else {
        unreachable!("exported GIF exists");
    };
    assert!(metadata.len() > 0);
}

#[test]
fn test_gif_export_rejects_an_empty_capture() {
    let capture = FrameCapture::new(4, 4);
    assert!(matches!(
        capture.export_gif("unused.gif", 10),
        Err(GrowthError::InvalidParameter {
            parameter: "visualization",
            ..
        })
    ));
}
