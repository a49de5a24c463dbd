use cbd_core::assets::{
    DUAL_AXIS_FILE, INTRO_IMAGE_FILE, MAP_FILE, RECOMMENDATIONS_IMAGE_FILE, TOP20_FILE, TRIPS_FILE,
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const FIXTURES_DIR: &str = "../fixtures";

enum Kind {
    Text,
    Bytes,
}

/// (const name, file name, kind, columns the file must carry)
const ASSETS: &[(&str, &str, Kind, &[&str])] = &[
    (
        "TRIPS_CSV",
        TRIPS_FILE,
        Kind::Text,
        &["ride_id", "start_station_name", "season", "date"],
    ),
    ("TOP20_CSV", TOP20_FILE, Kind::Text, &["start_station_name", "value"]),
    (
        "DUAL_AXIS_CSV",
        DUAL_AXIS_FILE,
        Kind::Text,
        &["date", "bike_rides_daily", "avgTemp"],
    ),
    ("MAP_HTML", MAP_FILE, Kind::Text, &[]),
    ("INTRO_IMAGE", INTRO_IMAGE_FILE, Kind::Bytes, &[]),
    ("RECOMMENDATIONS_IMAGE", RECOMMENDATIONS_IMAGE_FILE, Kind::Bytes, &[]),
];

/// Warn at build time about CSV files whose header lacks a required column.
/// The app still builds; the loader reports the same problem at runtime.
fn check_header(path: &Path, columns: &[&str]) {
    let headers = csv::Reader::from_path(path).and_then(|mut rdr| rdr.headers().cloned());
    match headers {
        Ok(headers) => {
            for column in columns {
                if !headers.iter().any(|h| h.trim() == *column) {
                    println!(
                        "cargo:warning={} has no `{}` column",
                        path.display(),
                        column
                    );
                }
            }
        }
        Err(e) => println!("cargo:warning=cannot read {}: {}", path.display(), e),
    }
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let fixtures = Path::new(FIXTURES_DIR);

    // Every asset becomes an `Option` constant. A missing file yields `None`
    // so the page that needs it shows an error instead of failing the build.
    let mut generated = String::from("// @generated by build.rs from the fixtures directory\n");
    for (name, file, kind, columns) in ASSETS {
        let src = fixtures.join(file);
        let value = if src.exists() {
            let dest = out_dir.join(file);
            fs::copy(&src, &dest).unwrap();
            println!("cargo:rerun-if-changed={}", src.display());
            if !columns.is_empty() {
                check_header(&src, columns);
            }
            let dest = dest.display().to_string();
            match kind {
                Kind::Text => format!("Some(include_str!({dest:?}))"),
                Kind::Bytes => format!("Some(include_bytes!({dest:?}))"),
            }
        } else {
            println!("cargo:warning={} not found, embedding nothing", src.display());
            "None".to_string()
        };
        let ty = match kind {
            Kind::Text => "Option<&str>",
            Kind::Bytes => "Option<&[u8]>",
        };
        generated.push_str(&format!("pub const {name}: {ty} = {value};\n"));
    }

    fs::write(out_dir.join("assets.rs"), generated).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={FIXTURES_DIR}");
}
