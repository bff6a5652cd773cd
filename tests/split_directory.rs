use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use quadsplit::{
    FixedPicker, NoticeLevel, PICKER_TITLE, RecordingNotifier, RunOutcome, SplitParams,
    DirectoryPicker, run, split_directory,
};

fn write_composite(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
    })
    .save(path)
    .unwrap();
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn cancelled_picker_writes_nothing() {
    let mut notifier = RecordingNotifier::default();
    let outcome = run(
        &mut FixedPicker(None),
        &mut notifier,
        &SplitParams::default(),
    );

    assert!(matches!(outcome, RunOutcome::Cancelled));
    assert_eq!(notifier.notices.len(), 1);
    assert_eq!(notifier.notices[0].level, NoticeLevel::Info);
}

#[test]
fn empty_selection_counts_as_cancel() {
    let mut notifier = RecordingNotifier::default();
    let outcome = run(
        &mut FixedPicker(Some(PathBuf::new())),
        &mut notifier,
        &SplitParams::default(),
    );
    assert!(matches!(outcome, RunOutcome::Cancelled));
}

#[test]
fn picker_is_asked_with_the_prompt_title() {
    struct TitleCheck(Option<String>);
    impl DirectoryPicker for TitleCheck {
        fn pick_directory(&mut self, title: &str) -> Option<PathBuf> {
            self.0 = Some(title.to_string());
            None
        }
    }

    let mut picker = TitleCheck(None);
    run(&mut picker, &mut RecordingNotifier::default(), &SplitParams::default());
    assert_eq!(picker.0.as_deref(), Some(PICKER_TITLE));
}

#[test]
fn splits_every_image_in_the_directory() {
    let dir = TempDir::new().unwrap();
    write_composite(&dir.path().join("a.png"), 100, 80);
    write_composite(&dir.path().join("photo.JPG"), 101, 81);
    fs::write(dir.path().join("readme.txt"), b"ignore me").unwrap();
    fs::write(dir.path().join("anim.gif"), b"GIF89a").unwrap();

    let mut notifier = RecordingNotifier::default();
    let outcome = run(
        &mut FixedPicker(Some(dir.path().to_path_buf())),
        &mut notifier,
        &SplitParams::default(),
    );

    let split = dir.path().join("split");
    match outcome {
        RunOutcome::Completed { output_dir, files } => {
            assert_eq!(output_dir, split);
            assert_eq!(files, 2);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert_eq!(
        sorted_names(&split),
        vec![
            "a_ll.png", "a_lr.png", "a_ul.png", "a_ur.png",
            "photo_ll.JPG", "photo_lr.JPG", "photo_ul.JPG", "photo_ur.JPG",
        ]
    );
    let lr = image::open(split.join("photo_lr.JPG")).unwrap();
    assert_eq!((lr.width(), lr.height()), (51, 41));
    assert!(!dir.path().join("split_error.log").exists());

    let last = notifier.notices.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Info);
    assert!(last.message.contains(&split.display().to_string()));
}

#[test]
fn directory_without_images_only_warns() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("img.gif"), b"GIF89a").unwrap();

    let mut notifier = RecordingNotifier::default();
    let outcome = split_directory(dir.path(), &mut notifier, &SplitParams::default());

    assert!(matches!(outcome, RunOutcome::NoImages { .. }));
    assert!(sorted_names(&dir.path().join("split")).is_empty());
    assert!(!dir.path().join("split_error.log").exists());

    assert_eq!(notifier.notices.len(), 1);
    assert_eq!(notifier.notices[0].level, NoticeLevel::Warning);
    assert!(notifier.notices[0]
        .message
        .contains(&dir.path().display().to_string()));
}

#[test]
fn corrupt_image_is_logged_and_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.png"), b"not an image at all").unwrap();

    let mut notifier = RecordingNotifier::default();
    let outcome = split_directory(dir.path(), &mut notifier, &SplitParams::default());

    let log_path = dir.path().join("split_error.log");
    match &outcome {
        RunOutcome::Failed { log_path: logged, .. } => assert_eq!(logged, &log_path),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(outcome.is_failure());

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("failed to decode image"), "{log}");
    assert!(log.contains("broken.png"), "{log}");

    assert_eq!(notifier.notices.len(), 1);
    assert_eq!(notifier.notices[0].level, NoticeLevel::Error);
    assert!(notifier.notices[0]
        .message
        .contains(&log_path.display().to_string()));
}

#[test]
fn rerun_overwrites_outputs_and_log() {
    let dir = TempDir::new().unwrap();
    let params = SplitParams::default();

    write_composite(&dir.path().join("grid.png"), 20, 20);
    split_directory(dir.path(), &mut RecordingNotifier::default(), &params);
    write_composite(&dir.path().join("grid.png"), 40, 10);
    split_directory(dir.path(), &mut RecordingNotifier::default(), &params);

    let ul = image::open(dir.path().join("split").join("grid_ul.png")).unwrap();
    assert_eq!((ul.width(), ul.height()), (20, 5));

    fs::write(dir.path().join("bad1.png"), b"garbage").unwrap();
    split_directory(dir.path(), &mut RecordingNotifier::default(), &params);
    fs::remove_file(dir.path().join("bad1.png")).unwrap();
    fs::write(dir.path().join("bad2.png"), b"garbage").unwrap();
    split_directory(dir.path(), &mut RecordingNotifier::default(), &params);

    let log = fs::read_to_string(dir.path().join("split_error.log")).unwrap();
    assert!(log.contains("bad2.png"));
    assert!(!log.contains("bad1.png"));
}

#[test]
fn existing_output_directory_is_reused() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("split")).unwrap();
    write_composite(&dir.path().join("x.jpeg"), 10, 10);

    let outcome = split_directory(
        dir.path(),
        &mut RecordingNotifier::default(),
        &SplitParams::default(),
    );
    assert!(matches!(outcome, RunOutcome::Completed { files: 1, .. }));
}

#[test]
fn custom_params_change_layout() {
    let dir = TempDir::new().unwrap();
    write_composite(&dir.path().join("tile.png"), 8, 8);
    let params = SplitParams {
        output_subdir: "quads".to_string(),
        ..SplitParams::default()
    };

    split_directory(dir.path(), &mut RecordingNotifier::default(), &params);

    assert_eq!(sorted_names(&dir.path().join("quads")).len(), 4);
    assert!(!dir.path().join("split").exists());
}

#[test]
fn output_path_blocked_by_a_file_fails_the_batch() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("split"), b"in the way").unwrap();
    write_composite(&dir.path().join("x.png"), 10, 10);

    let outcome = split_directory(
        dir.path(),
        &mut RecordingNotifier::default(),
        &SplitParams::default(),
    );

    assert!(outcome.is_failure());
    let log = fs::read_to_string(dir.path().join("split_error.log")).unwrap();
    assert!(log.contains("failed to create output directory"), "{log}");
}

#[test]
fn corrupt_image_stops_files_after_it() {
    let dir = TempDir::new().unwrap();
    for name in ["a.png", "b.png", "c.png", "d.png", "e.png"] {
        write_composite(&dir.path().join(name), 6, 6);
    }
    fs::write(dir.path().join("bad.png"), b"not an image").unwrap();

    // Enumeration order is whatever the filesystem yields.
    let order: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect();
    let bad_at = order.iter().position(|name| name == "bad.png").unwrap();

    let outcome = split_directory(
        dir.path(),
        &mut RecordingNotifier::default(),
        &SplitParams::default(),
    );
    assert!(outcome.is_failure());

    let split = dir.path().join("split");
    for (i, name) in order.iter().enumerate() {
        if i == bad_at {
            continue;
        }
        let stem = name.trim_end_matches(".png");
        let written = split.join(format!("{stem}_ul.png")).exists();
        assert_eq!(written, i < bad_at, "{name} at position {i}, bad.png at {bad_at}");
    }
    assert!(!split.join("bad_ul.png").exists());
}

#[test]
fn unwritable_log_is_not_claimed_in_the_notice() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("split_error.log")).unwrap();
    fs::write(dir.path().join("broken.png"), b"garbage").unwrap();

    let mut notifier = RecordingNotifier::default();
    let outcome = split_directory(dir.path(), &mut notifier, &SplitParams::default());
    assert!(outcome.is_failure());

    assert_eq!(notifier.notices.len(), 1);
    let notice = &notifier.notices[0];
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(!notice.message.contains("details were logged to"), "{}", notice.message);
    assert!(notice.message.contains("failed to decode image"), "{}", notice.message);
    assert!(notice.message.contains("failed to write error log"), "{}", notice.message);
}
