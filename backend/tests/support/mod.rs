#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use forest_explorer::models::{VegetationRecord, VisitorRecord};
use forest_explorer::store::{DataSettings, DatasetRepository, InMemoryRepository};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to the process
/// environment, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Three spatial units over three years; unit A is seen every year.
pub fn sample_vegetation() -> Vec<VegetationRecord> {
    vec![
        VegetationRecord::new("A", 2001, 40.0, 78.77, 29.55),
        VegetationRecord::new("A", 2005, 41.0, 78.77, 29.55),
        VegetationRecord::new("A", 2010, 39.0, 78.77, 29.55),
        VegetationRecord::new("B", 2005, 12.0, 93.17, 26.58),
        VegetationRecord::new("C", 2001, 5.0, 77.0, 9.85),
    ]
}

pub const PARKS: [&str; 2] = ["Jim Corbett", "Kaziranga"];

/// Two parks with five years each, park-major like the loader produces.
pub fn sample_visitors() -> Vec<VisitorRecord> {
    let mut records = Vec::new();
    for (offset, park) in PARKS.iter().enumerate() {
        for year in 2016..=2020 {
            let base = 100_000 * (offset as u64 + 1);
            records.push(VisitorRecord::new(year, *park, base + (year as u64 - 2016) * 1_000));
        }
    }
    records
}

pub fn sample_repository() -> Arc<dyn DatasetRepository> {
    Arc::new(InMemoryRepository::from_records(
        sample_vegetation(),
        sample_visitors(),
    ))
}

fn write_file(dir: &Path, name: &str, content: &str) {
    let mut file = std::fs::File::create(dir.join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

/// Writes the four input files into `dir` and returns settings pointing at them.
pub fn write_fixture_files(dir: &Path) -> DataSettings {
    write_file(
        dir,
        "vcf.csv",
        "shrid2,year,vcf_mean\n\
         unit-a,2001,40.5\n\
         unit-a,2005,41\n\
         unit-b,2005,12.0\n\
         unit-c,2001,5.5\n\
         unit-z,2005,99.0\n",
    );
    write_file(
        dir,
        "loc.csv",
        "shrid2,state_name,district_name\n\
         unit-a,uttarakhand,nainital\n\
         unit-b,assam,golaghat\n\
         unit-c,kerala,idukki\n",
    );
    write_file(
        dir,
        "coords.csv",
        "shrid2,longitude,latitude\n\
         unit-a,78.77,29.55\n\
         unit-b,93.17,26.58\n\
         unit-c,77,9.85\n\
         unit-z,70.0,20.0\n",
    );
    write_file(
        dir,
        "visitors.csv",
        "Year,Jim Corbett,Kaziranga\n\
         2016,300000,150000\n\
         2017,310000,\n\
         2018,320000,170000\n",
    );

    DataSettings {
        vegetation_csv: dir.join("vcf.csv"),
        locations_csv: dir.join("loc.csv"),
        coordinates_csv: dir.join("coords.csv"),
        visitors_path: dir.join("visitors.csv"),
    }
}
