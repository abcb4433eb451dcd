//! C header rendering for the firmware build.
//!
//! The layout of the generated text is consumed by the firmware's build and
//! kept stable across releases: upper-case `0x%08X` background values,
//! lower-case `0x%08x` particle colors, a four space prefix on every data
//! line and a trailing `, ` after every value.

use std::path::Path;

use crate::{stages::Stage, universe::Universe};

pub const GENERATOR: &str = "png2header";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const LINE_PREFIX: &str = "    ";

/// C identifier for the table generated from `path`.
///
/// The extension is dropped, `.`, `-` and spaces become `_` and the result is
/// upper-cased. `sand-castle.v2.png` turns into `SAND_CASTLE_V2`.
pub fn symbol_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    stem.chars()
        .map(|c| match c {
            '.' | '-' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

fn banner() -> String {
    let mut out = String::new();
    out.push_str("#pragma once\n\n");
    out.push_str("#include \"pico/stdlib.h\"\n\n");
    out.push_str("// WARNING: This file has been autogenerated, do not edit directly!\n");
    out.push_str(&format!("// Generated by {GENERATOR} {VERSION}\n\n"));
    out
}

/// Rows of `values`, `width` per line, each line prefixed and every value
/// followed by `, `. Ends with a bare prefix line like the firmware expects.
fn table_rows<T: Copy>(values: &[T], width: u32, fmt: impl Fn(T) -> String) -> String {
    let mut out = String::from(LINE_PREFIX);
    for row in values.chunks(width.max(1) as usize) {
        for &value in row {
            out.push_str(&fmt(value));
            out.push_str(", ");
        }
        out.push('\n');
        out.push_str(LINE_PREFIX);
    }
    out
}

pub fn render_stage(name: &str, stage: &Stage) -> String {
    let mut out = banner();
    out.push_str(&format!(
        "#define {name}_PARTICLE_COUNT {}\n\n",
        stage.particles.len()
    ));

    out.push_str(&format!("const uint32_t {name}[] = {{\n"));
    out.push_str(&table_rows(&stage.background, stage.width, |c| {
        format!("0x{c:08X}")
    }));
    out.push_str("\n};\n\n");

    out.push_str("// Stored as x1, y1, color1, x2, y2, color2, ...\n");
    out.push_str(&format!(
        "const uint32_t {name}_PARTICLES[{name}_PARTICLE_COUNT*3] = {{\n"
    ));
    for particle in &stage.particles {
        out.push_str(&format!(
            "{LINE_PREFIX}{}, {}, 0x{:08x},\n",
            particle.x, particle.y, particle.color
        ));
    }
    out.push_str("};\n");
    out
}

pub fn render_universe(name: &str, universe: &Universe) -> String {
    let mut out = banner();
    out.push_str(&format!("const uint8_t {name}[] = {{\n"));
    out.push_str(&table_rows(&universe.cells, universe.width, |c| {
        format!("0x{c:02X}")
    }));
    out.push_str("\n};\n");
    out
}

/// Header including every generated header of a batch.
///
/// `headers` are file names; they are sorted so the output does not depend on
/// directory enumeration order.
pub fn render_aggregate(headers: &[String]) -> String {
    let mut sorted = headers.to_vec();
    sorted.sort();

    let mut out = format!("// Autogenerated by {GENERATOR} v{VERSION}\n// Do not edit manually!\n\n");
    let includes: Vec<String> = sorted
        .iter()
        .map(|header| format!("#include \"{header}\""))
        .collect();
    out.push_str(&includes.join("\n"));
    out
}
