#![warn(missing_docs)]
//! Shader source output of point sets.
//!
//! A [`PointSet`] is emitted as a constant array declaration which can be included into GLSL (or
//! C++ with `glm`) sources:
//!
//! ```text
//! const vec3 hemisphereVectors[2] = {
//!     vec3(0.4841229182759271, 0.0, 0.875),
//!     vec3(-0.5756995210734917, -0.39937437218036466, 0.625)
//! };
//! ```
//! The array size always equals the number of points and the last entry has no trailing comma.
//! Coordinates are printed with the shortest representation that parses back to the same `f64`.
use crate::{
    error::{LutResult, PointLutError},
    point_set::PointSet,
};
use itertools::Itertools;
use log::info;
use nalgebra::point;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::{Builder, NamedTempFile};

/// Array name used if none is given.
pub const DEFAULT_ARRAY_NAME: &str = "hemisphereVectors";

const INDENT: &str = "    ";

/// Check that `name` is usable as a GLSL / C identifier.
///
/// # Errors
///
/// This function will return an error if `name` is empty, starts with a digit or contains
/// characters other than ASCII letters, digits and `_`.
pub fn validate_array_name(name: &str) -> LutResult<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(PointLutError::InvalidArgument(format!(
            "'{name}' is not a valid array name"
        )));
    }
    Ok(())
}

/// Format the given points as `const vec3 <name>[<N>] = { ... };` declaration.
///
/// # Errors
///
/// This function will return an error if `name` is not a valid identifier.
pub fn format_vec3_array(points: &PointSet, name: &str) -> LutResult<String> {
    validate_array_name(name)?;
    let mut output = format!("const vec3 {name}[{}] = {{\n", points.len());
    if !points.is_empty() {
        let entries = points
            .iter()
            .map(|p| format!("{INDENT}vec3({:?}, {:?}, {:?})", p.x, p.y, p.z))
            .join(",\n");
        output.push_str(&entries);
        output.push('\n');
    }
    output.push_str("};\n");
    Ok(output)
}

fn destination_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Temporary file in `dir` whose mode is `0o666` minus the process umask, as for `File::create`.
#[cfg(unix)]
fn create_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}
#[cfg(not(unix))]
fn create_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

/// Write the given points as `vec3` array declaration to the file at `path`.
///
/// The content is first written into a temporary file next to `path` which is then renamed. Hence,
/// `path` either receives the complete table or is left untouched. An existing file at `path`
/// keeps its permissions, a new one gets the default permissions of the process.
///
/// # Errors
///
/// This function will return an error if
///   - `name` is not a valid identifier.
///   - the temporary file cannot be created or written (e.g. missing directory, no space).
///   - the temporary file cannot be moved to `path`.
pub fn write_vec3_array(points: &PointSet, name: &str, path: &Path) -> LutResult<()> {
    let content = format_vec3_array(points, name)?;
    let dir = destination_dir(path);
    let mut file = create_temp_file(&dir).map_err(|e| {
        PointLutError::Io(format!(
            "could not create temporary file in {}: {e}",
            dir.display()
        ))
    })?;
    if let Some(metadata) = fs::metadata(path).ok().filter(fs::Metadata::is_file) {
        file.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| {
                PointLutError::Io(format!(
                    "could not copy permissions of {}: {e}",
                    path.display()
                ))
            })?;
    }
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| {
            PointLutError::Io(format!(
                "writing to temporary file {} failed: {e}",
                file.path().display()
            ))
        })?;
    file.persist(path).map_err(|e| {
        PointLutError::Io(format!(
            "could not move output to {}: {}",
            path.display(),
            e.error
        ))
    })?;
    info!("wrote {} points to {}", points.len(), path.display());
    Ok(())
}

fn malformed(msg: &str) -> PointLutError {
    PointLutError::InvalidArgument(format!("malformed vec3 array: {msg}"))
}

fn parse_entry(line: &str) -> LutResult<nalgebra::Point3<f64>> {
    let inner = line
        .strip_prefix("vec3(")
        .and_then(|l| l.strip_suffix(')'))
        .ok_or_else(|| malformed(&format!("'{line}' is not a vec3 literal")))?;
    let coords: Vec<f64> = inner
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .map_err(|e| malformed(&format!("cannot parse '{}': {e}", c.trim())))
        })
        .collect::<LutResult<_>>()?;
    if coords.len() != 3 {
        return Err(malformed(&format!("'{line}' does not have 3 components")));
    }
    Ok(point![coords[0], coords[1], coords[2]])
}

/// Parse a declaration as produced by [`format_vec3_array`].
///
/// Returns the array name and the points in declaration order.
///
/// # Errors
///
/// This function will return an error if the text does not follow the exact layout written by
/// [`format_vec3_array`], including a mismatch between the declared size and the number of entries.
pub fn parse_vec3_array(text: &str) -> LutResult<(String, PointSet)> {
    let mut lines = text.lines();
    let header = lines.next().ok_or_else(|| malformed("empty input"))?;
    let declaration = header
        .strip_prefix("const vec3 ")
        .and_then(|h| h.strip_suffix("] = {"))
        .ok_or_else(|| malformed(&format!("unexpected header '{header}'")))?;
    let (name, size) = declaration
        .split_once('[')
        .ok_or_else(|| malformed("missing array size"))?;
    validate_array_name(name)?;
    let size: usize = size
        .parse()
        .map_err(|e| malformed(&format!("invalid array size '{size}': {e}")))?;

    let mut points = Vec::with_capacity(size);
    let mut closed = false;
    let mut expect_more = false;
    for line in lines.by_ref() {
        if line == "};" {
            closed = true;
            break;
        }
        let entry = line
            .strip_prefix(INDENT)
            .ok_or_else(|| malformed(&format!("unexpected line '{line}'")))?;
        let (entry, has_comma) = entry
            .strip_suffix(',')
            .map_or((entry, false), |e| (e, true));
        if !points.is_empty() && !expect_more {
            return Err(malformed("missing ',' between entries"));
        }
        points.push(parse_entry(entry)?);
        expect_more = has_comma;
    }
    if !closed {
        return Err(malformed("missing closing '};'"));
    }
    if expect_more {
        return Err(malformed("trailing ',' after last entry"));
    }
    if lines.any(|l| !l.trim().is_empty()) {
        return Err(malformed("unexpected content after closing '};'"));
    }
    if points.len() != size {
        return Err(malformed(&format!(
            "declared size {size} but found {} entries",
            points.len()
        )));
    }
    Ok((name.to_string(), PointSet::new(points)))
}
