//! Text and binary renderings of a [`WrapTable`] for embedding elsewhere.
//!
//! Every rendering keeps the byte order of [`WrapTable::to_bytes`]: the 54
//! primary descriptors (face-major, then V zone, then U zone) followed by
//! the 54 alternates.

use std::fmt::Write as _;

use serde::Serialize;

use crate::{HALF_LEN, REGIONS_PER_FACE, TABLE_LEN, TableError, WrapTable};

/// Array name used by the DDS texture loader.
pub const DEFAULT_C_SYMBOL: &str = "DDSTexture::cubeWrapTable";

/// Constant name for Rust output.
pub const DEFAULT_RUST_SYMBOL: &str = "CUBE_WRAP_TABLE";

const INDEX_DOC: &str = "index = face * 9 + V_wrap (0: none, 1: +, 2: -) * 3 + U_wrap";
const VALUE_DOC: &str = "value = new_face + mirror_U * 0x10 + mirror_V * 0x20 + swap_UV * 0x40";
const ALTERNATE_DOC: &str = "index + 54 = alternate face for corners";

/// C++ definition of the table, laid out one face per line with the three
/// regions of each row grouped.
#[must_use]
pub fn render_c(table: &WrapTable, symbol: &str) -> String {
    let bytes = table.to_bytes();
    let mut s = String::new();
    let _ = write!(
        s,
        "\nconst unsigned char {symbol}[{TABLE_LEN}] =\n{{\n  // {INDEX_DOC}\n  // {VALUE_DOC}\n"
    );
    for (i, face_row) in bytes.chunks(REGIONS_PER_FACE).enumerate() {
        if i * REGIONS_PER_FACE == HALF_LEN {
            let _ = writeln!(s, "  // {ALTERNATE_DOC}");
        }
        for (j, b) in face_row.iter().enumerate() {
            if j % 3 == 0 {
                s.push(' ');
            }
            let _ = write!(s, " 0x{b:02X}");
            if i * REGIONS_PER_FACE + j + 1 < TABLE_LEN {
                s.push(',');
            }
        }
        s.push('\n');
    }
    s.push_str("};\n\n");
    s
}

/// Rust `const` definition of the table.
#[must_use]
pub fn render_rust(table: &WrapTable, symbol: &str) -> String {
    let bytes = table.to_bytes();
    let mut s = String::new();
    let _ = writeln!(
        s,
        "/// Cube map wrap table, generated for an edge width of {}.",
        table.edge()
    );
    s.push_str("///\n");
    let _ = writeln!(s, "/// `{INDEX_DOC}`; `{ALTERNATE_DOC}`.");
    let _ = writeln!(s, "///\n/// `{VALUE_DOC}`.");
    let _ = writeln!(s, "pub const {symbol}: [u8; {TABLE_LEN}] = [");
    for (i, face_row) in bytes.chunks(REGIONS_PER_FACE).enumerate() {
        match i * REGIONS_PER_FACE {
            0 => s.push_str("    // primary\n"),
            HALF_LEN => s.push_str("    // alternate\n"),
            _ => {}
        }
        let row: Vec<String> = face_row.iter().map(|b| format!("0x{b:02X},")).collect();
        let _ = writeln!(s, "    {}", row.join(" "));
    }
    s.push_str("];\n");
    s
}

#[derive(Serialize)]
struct JsonTable<'a> {
    edge_width: u32,
    index: &'static str,
    value: &'static str,
    primary: &'a [u8],
    alternate: &'a [u8],
}

/// JSON object with the two halves as integer arrays.
///
/// # Errors
///
/// Returns [`TableError::Json`] if serialization fails.
pub fn render_json(table: &WrapTable) -> Result<String, TableError> {
    let bytes = table.to_bytes();
    let doc = JsonTable {
        edge_width: table.edge().get(),
        index: INDEX_DOC,
        value: VALUE_DOC,
        primary: &bytes[..HALF_LEN],
        alternate: &bytes[HALF_LEN..],
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}

/// The raw 108 bytes.
#[must_use]
pub fn render_binary(table: &WrapTable) -> Vec<u8> {
    table.to_bytes().to_vec()
}
