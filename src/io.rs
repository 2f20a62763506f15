//! I/O utilities: integer dataset files, sorted-output persistence and
//! sequential chart naming.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::DataError;

/// Load a dataset: one signed integer per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. Any
/// other non-integer content is a format error reported with its 1-based
/// line number.
pub fn read_integer_file<P: AsRef<Path>>(path: P) -> Result<Vec<i64>, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let reader = BufReader::new(file);
    let mut values = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value = trimmed.parse::<i64>().map_err(|_| DataError::Malformed {
            path: path.to_path_buf(),
            line: line_num + 1,
            token: trimmed.to_string(),
        })?;
        values.push(value);
    }

    Ok(values)
}

/// Write a sequence of integers, one per line. Parent directories are
/// created as needed.
pub fn write_integer_file<P: AsRef<Path>>(path: P, values: &[i64]) -> Result<(), DataError> {
    let path = path.as_ref();
    let to_io_err = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_io_err)?;
    }

    let file = File::create(path).map_err(to_io_err)?;
    let mut writer = BufWriter::new(file);
    for value in values {
        writeln!(writer, "{}", value).map_err(to_io_err)?;
    }
    writer.flush().map_err(to_io_err)
}

/// Destination for a persisted sorted vector, named by algorithm and
/// dataset size.
pub fn sorted_output_path<P: AsRef<Path>>(dir: P, algorithm: &str, len: usize) -> PathBuf {
    dir.as_ref().join(format!("sorted_{}_{}.txt", algorithm, len))
}

/// Next free sequential chart name in `dir`: `<base>_01.png`,
/// `<base>_02.png`, ... A bare `<base>.png` counts as number zero.
pub fn next_chart_path<P: AsRef<Path>>(dir: P, base: &str) -> Result<PathBuf, DataError> {
    let dir = dir.as_ref();
    let to_io_err = |source| DataError::Io {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(to_io_err)?;

    let mut highest = 0u32;
    let mut found = false;
    for entry in fs::read_dir(dir).map_err(to_io_err)? {
        let entry = entry.map_err(to_io_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(stem) = name.strip_suffix(".png") else {
            continue;
        };
        if stem == base {
            found = true;
            continue;
        }
        let Some(suffix) = stem.strip_prefix(base).and_then(|s| s.strip_prefix('_')) else {
            continue;
        };
        if let Ok(num) = suffix.parse::<u32>() {
            found = true;
            highest = highest.max(num);
        }
    }

    let next = if found { highest + 1 } else { 1 };
    Ok(dir.join(format!("{}_{:02}.png", base, next)))
}
