//! Copies the trunk output of the frontend into `static/dist`, where
//! `include_dir!` embeds it. Without a frontend build the placeholder page stays.

use fs_extra::dir::CopyOptions;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../frontend/dist");

    let dist_dir = Path::new("../frontend/dist");
    if !dist_dir.exists() {
        return;
    }

    let out_dir = Path::new("static/dist");
    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).expect("cannot create static/dist");
    fs_extra::dir::copy(
        dist_dir,
        out_dir,
        &CopyOptions::new().overwrite(true).content_only(true),
    )
    .expect("cannot copy frontend/dist into static/dist");
}
