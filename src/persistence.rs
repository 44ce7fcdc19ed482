//! The plain-text scene format: one shape per line.
//!
//! ```text
//! SQUARE <x> <y> <size> <COLOR> <true|false>
//! CIRCLE <x> <y> <diameter> <COLOR> <true|false>
//! RECTANGLE <x> <y> <width> <height> <COLOR> <true|false>
//! ```

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::color::ShapeColor;
use crate::error::{ShapeError, ShapeResult};
use crate::geometry::Point;
use crate::shape::{Shape, ShapeType, factory};

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Parse a single record line. `line_no` is 1-based and only used for errors.
///
/// Blank lines and unknown keywords yield `Ok(None)`.
pub fn parse_record(line: &str, line_no: usize) -> ShapeResult<Option<ShapeType>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let Some(&keyword) = fields.first() else {
        return Ok(None);
    };

    let shape = match keyword {
        "SQUARE" => {
            expect_fields(&fields, 6, line_no)?;
            let mut shape = factory::create_square(
                parse_color(fields[4])?,
                Point::new(parse_int(fields[1], line_no)?, parse_int(fields[2], line_no)?),
                parse_int(fields[3], line_no)?,
            )
            .map_err(|e| ShapeError::malformed(line_no, e.to_string()))?;
            shape.set_selected(parse_bool(fields[5]));
            shape
        }
        "CIRCLE" => {
            expect_fields(&fields, 6, line_no)?;
            let mut shape = factory::create_circle(
                parse_color(fields[4])?,
                Point::new(parse_int(fields[1], line_no)?, parse_int(fields[2], line_no)?),
                parse_int(fields[3], line_no)?,
            )
            .map_err(|e| ShapeError::malformed(line_no, e.to_string()))?;
            shape.set_selected(parse_bool(fields[5]));
            shape
        }
        "RECTANGLE" => {
            expect_fields(&fields, 7, line_no)?;
            let mut shape = factory::create_rectangle(
                parse_color(fields[5])?,
                Point::new(parse_int(fields[1], line_no)?, parse_int(fields[2], line_no)?),
                parse_int(fields[3], line_no)?,
                parse_int(fields[4], line_no)?,
            )
            .map_err(|e| ShapeError::malformed(line_no, e.to_string()))?;
            shape.set_selected(parse_bool(fields[6]));
            shape
        }
        other => {
            warn!("Skipping unknown record '{}' on line {}", other, line_no);
            return Ok(None);
        }
    };

    Ok(Some(shape))
}

/// Read every record from `reader`, failing on the first bad line
pub fn read_shapes<R: BufRead>(reader: R) -> ShapeResult<Vec<ShapeType>> {
    let mut shapes = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| ShapeError::malformed(line_no, e.to_string()))?;
        if let Some(shape) = parse_record(&line, line_no)? {
            shapes.push(shape);
        }
    }
    debug!("Parsed {} shapes", shapes.len());
    Ok(shapes)
}

/// Write one record per shape, each followed by [`LINE_SEPARATOR`]
pub fn write_shapes<'a, W, I>(writer: &mut W, shapes: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ShapeType>,
{
    for shape in shapes {
        writer.write_all(shape.to_record().as_bytes())?;
        writer.write_all(LINE_SEPARATOR.as_bytes())?;
    }
    Ok(())
}

fn expect_fields(fields: &[&str], expected: usize, line_no: usize) -> ShapeResult<()> {
    if fields.len() != expected {
        return Err(ShapeError::malformed(
            line_no,
            format!(
                "{} expects {} fields, found {}",
                fields[0],
                expected,
                fields.len()
            ),
        ));
    }
    Ok(())
}

fn parse_int(field: &str, line_no: usize) -> ShapeResult<i32> {
    field
        .parse::<i32>()
        .map_err(|e| ShapeError::malformed(line_no, format!("'{}': {}", field, e)))
}

fn parse_color(field: &str) -> ShapeResult<ShapeColor> {
    field.parse()
}

// Anything but "true" (any case) reads as false
fn parse_bool(field: &str) -> bool {
    field.eq_ignore_ascii_case("true")
}
